use anyhow::Result;
use availcal_core::widget::UiEvent;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use super::open_widget;
use crate::render::pluralize;

pub fn run(from: Option<NaiveDate>) -> Result<()> {
    let mut widget = open_widget(from)?;
    let state = widget.handle(UiEvent::SelectAllRequested)?;
    let count = state.available().len();

    println!(
        "{}",
        format!("Marked all {} {} available", count, pluralize("day", count)).green()
    );
    Ok(())
}
