use anyhow::Result;
use availcal_core::widget::UiEvent;
use owo_colors::OwoColorize;

use super::open_widget;

pub fn run(days: i64) -> Result<()> {
    let mut widget = open_widget(None)?;
    let state = widget.handle(UiEvent::RangeChanged(days))?;
    let day_range = state.day_range();

    if day_range.days() as i64 != days {
        println!(
            "{}",
            format!("{} is out of range, using {} days", days, day_range).yellow()
        );
    } else {
        println!("Showing {} days", day_range);
    }
    Ok(())
}
