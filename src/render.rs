//! Terminal rendering for availcal types.
//!
//! Extension traits that draw core types with owo_colors.

use availcal_core::grid::{DaySlot, WEEKDAY_HEADERS};
use availcal_core::widget::WidgetState;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

/// Width of one grid column, including its separating space.
const CELL_WIDTH: usize = 8;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for WidgetState {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let header: String = WEEKDAY_HEADERS
            .iter()
            .map(|h| pad(h))
            .collect();
        lines.push(header.bold().to_string());

        for week in self.grid().weeks() {
            let mut numbers = String::new();
            let mut labels = String::new();

            for slot in week {
                let (number, label) = cell_text(slot);
                match slot.date() {
                    Some(date) if self.is_available(date) => {
                        numbers.push_str(&pad(&number).green().bold().to_string());
                        labels.push_str(&pad(&label).green().to_string());
                    }
                    Some(_) => {
                        numbers.push_str(&pad(&number));
                        labels.push_str(&pad(&label).dimmed().to_string());
                    }
                    None => {
                        numbers.push_str(&pad(""));
                        labels.push_str(&pad(""));
                    }
                }
            }

            lines.push(numbers.trim_end().to_string());
            lines.push(labels.trim_end().to_string());
        }

        lines.push(String::new());
        lines.push(summary(self).dimmed().to_string());

        lines.join("\n")
    }
}

/// Day-of-month and "Wkd Mon" label for a slot. Empty slots render blank.
fn cell_text(slot: &DaySlot) -> (String, String) {
    match slot {
        DaySlot::Day(date) => (date.format("%-d").to_string(), date.format("%a %b").to_string()),
        DaySlot::Empty => (String::new(), String::new()),
    }
}

fn pad(text: &str) -> String {
    format!("{:<width$}", text, width = CELL_WIDTH)
}

fn summary(state: &WidgetState) -> String {
    let visible: Vec<NaiveDate> = state.grid().days().collect();
    let selected = visible.iter().filter(|d| state.is_available(**d)).count();
    let hidden = state.available().len() - selected;

    let mut text = format!(
        "{} of {} {} available",
        selected,
        visible.len(),
        pluralize("day", visible.len())
    );
    if hidden > 0 {
        text.push_str(&format!(" ({} more outside this range)", hidden));
    }
    text
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use availcal_core::day_range::DayRange;
    use availcal_core::grid::generate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn state(available: Vec<NaiveDate>) -> WidgetState {
        let day_range = DayRange::clamped(10);
        WidgetState::new(day_range, available, generate(date(2024, 1, 1), day_range))
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(
            cell_text(&DaySlot::Day(date(2024, 1, 5))),
            ("5".to_string(), "Fri Jan".to_string())
        );
        assert_eq!(cell_text(&DaySlot::Empty), (String::new(), String::new()));
    }

    #[test]
    fn test_summary_counts_visible_selection() {
        assert_eq!(summary(&state(vec![])), "0 of 10 days available");
        assert_eq!(
            summary(&state(vec![date(2024, 1, 2), date(2024, 1, 3)])),
            "2 of 10 days available"
        );
        assert_eq!(
            summary(&state(vec![date(2023, 12, 1), date(2024, 1, 2)])),
            "1 of 10 days available (1 more outside this range)"
        );
    }

    #[test]
    fn test_render_has_header_and_two_lines_per_week() {
        let rendered = state(vec![]).render();
        let lines: Vec<_> = rendered.lines().collect();

        // header + 2 weeks * 2 lines + blank + summary
        assert_eq!(lines.len(), 1 + 4 + 2);
        for header in WEEKDAY_HEADERS {
            assert!(lines[0].contains(header));
        }
        assert!(rendered.contains("Wed Jan"));
    }
}
