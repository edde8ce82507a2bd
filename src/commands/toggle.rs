use anyhow::Result;
use availcal_core::grid::DaySlot;
use availcal_core::storage::KeyValueStore;
use availcal_core::widget::{UiEvent, Widget};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use super::open_widget;

pub fn run(date: NaiveDate, from: Option<NaiveDate>) -> Result<()> {
    let mut widget = open_widget(from)?;

    if toggle_day(&mut widget, date)? {
        println!("{} {}", "+".green(), format!("{} available", date).green());
    } else {
        println!("{} {}", "-".red(), format!("{} unavailable", date).red());
    }

    Ok(())
}

/// Flip `date` if it is on the visible grid. Returns whether it is now available.
pub fn toggle_day<S: KeyValueStore>(widget: &mut Widget<S>, date: NaiveDate) -> Result<bool> {
    let grid = widget.grid();

    if !grid.contains(date) {
        if let (Some(first), Some(last)) = (grid.days().next(), grid.days().last()) {
            anyhow::bail!(
                "{} is not on the calendar. Showing {} to {}; change the range with:\n  availcal range <days>",
                date,
                first,
                last
            );
        }
        anyhow::bail!("{} is not on the calendar", date);
    }

    let state = widget.handle(UiEvent::DayClicked(DaySlot::Day(date)))?;
    Ok(state.is_available(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{date, memory_widget};

    #[test]
    fn test_toggle_day_on_grid() {
        let mut widget = memory_widget();

        assert!(toggle_day(&mut widget, date(2024, 1, 4)).unwrap());
        assert!(widget.store().is_available(date(2024, 1, 4)));

        assert!(!toggle_day(&mut widget, date(2024, 1, 4)).unwrap());
        assert!(!widget.store().is_available(date(2024, 1, 4)));
    }

    #[test]
    fn test_toggle_day_off_grid_is_rejected() {
        let mut widget = memory_widget();

        for off_grid in [date(2023, 12, 31), date(2024, 1, 11)] {
            let err = toggle_day(&mut widget, off_grid).unwrap_err().to_string();
            assert!(err.contains("is not on the calendar"), "{err}");
            assert!(err.contains("2024-01-01 to 2024-01-10"), "{err}");
        }

        assert!(widget.store().available().is_empty());
        assert!(!widget.store().storage().contains_key("available_dates"));
    }

    #[test]
    fn test_toggle_day_last_visible_day() {
        let mut widget = memory_widget();
        assert!(toggle_day(&mut widget, date(2024, 1, 10)).unwrap());
    }
}
