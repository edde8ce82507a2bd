use anyhow::Result;
use chrono::NaiveDate;

use super::open_widget;
use crate::render::Render;

pub fn run(from: Option<NaiveDate>) -> Result<()> {
    let widget = open_widget(from)?;
    println!("{}", widget.state().render());
    Ok(())
}
