use anyhow::Result;
use availcal_core::storage::KeyValueStore;
use availcal_core::widget::{UiEvent, Widget};
use owo_colors::OwoColorize;

use super::open_widget;
use crate::render::pluralize;

pub fn run() -> Result<()> {
    let mut widget = open_widget(None)?;
    let cleared = clear_all(&mut widget)?;

    println!("{}", cleared_message(cleared).yellow());
    Ok(())
}

/// Drop every selected day. Returns how many were selected.
pub fn clear_all<S: KeyValueStore>(widget: &mut Widget<S>) -> Result<usize> {
    let previous = widget.store().available().len();
    widget.handle(UiEvent::ClearRequested)?;
    Ok(previous)
}

fn cleared_message(count: usize) -> String {
    format!("Cleared {} selected {}", count, pluralize("day", count))
}
