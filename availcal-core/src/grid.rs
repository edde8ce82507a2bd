//! Calendar grid generation.
//!
//! A grid is a run of consecutive days laid out in complete Sunday-first
//! weeks. Slots before the first day and after the last one are empty.

use chrono::{Datelike, Days, NaiveDate};

use crate::day_range::DayRange;

/// Column headers, in grid column order.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const DAYS_PER_WEEK: usize = 7;

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySlot {
    Day(NaiveDate),
    Empty,
}

impl DaySlot {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DaySlot::Day(date) => Some(*date),
            DaySlot::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DaySlot::Empty)
    }
}

impl From<NaiveDate> for DaySlot {
    fn from(date: NaiveDate) -> Self {
        DaySlot::Day(date)
    }
}

/// Padded sequence of slots. The length is always a multiple of seven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    slots: Vec<DaySlot>,
}

impl CalendarGrid {
    pub fn slots(&self) -> &[DaySlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn week_count(&self) -> usize {
        self.slots.len() / DAYS_PER_WEEK
    }

    /// Rows of the grid, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[DaySlot]> {
        self.slots.chunks(DAYS_PER_WEEK)
    }

    /// Every real date in the grid, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.slots.iter().filter_map(DaySlot::date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days().any(|d| d == date)
    }
}

/// Lay out `day_range` consecutive days starting at `reference`.
///
/// Leading empties put `reference` in its weekday column, trailing empties
/// complete the last week. Days past chrono's maximum date are dropped.
pub fn generate(reference: NaiveDate, day_range: DayRange) -> CalendarGrid {
    let leading = reference.weekday().num_days_from_sunday() as usize;

    let mut slots: Vec<DaySlot> = Vec::with_capacity(leading + day_range.days() + DAYS_PER_WEEK);
    slots.extend(std::iter::repeat_n(DaySlot::Empty, leading));
    slots.extend(
        (0..day_range.days() as u64)
            .map_while(|offset| reference.checked_add_days(Days::new(offset)))
            .map(DaySlot::Day),
    );

    let total = slots.len().div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;
    slots.resize(total, DaySlot::Empty);

    CalendarGrid { slots }
}

/// Same as [`generate`], taking an unchecked day count which is clamped
/// into the allowed range first.
pub fn generate_days(reference: NaiveDate, days: i64) -> CalendarGrid {
    generate(reference, DayRange::clamped(days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn leading_empties(grid: &CalendarGrid) -> usize {
        grid.slots().iter().take_while(|s| s.is_empty()).count()
    }

    #[test]
    fn test_monday_start_ten_days() {
        let grid = generate_days(date(2024, 1, 1), 10);

        assert_eq!(grid.len(), 14);
        assert_eq!(grid.week_count(), 2);
        assert_eq!(grid.slots()[0], DaySlot::Empty);
        for (i, day) in (1..=10).enumerate() {
            assert_eq!(grid.slots()[i + 1], DaySlot::Day(date(2024, 1, day)));
        }
        assert!(grid.slots()[11..].iter().all(DaySlot::is_empty));
    }

    #[test]
    fn test_length_is_whole_weeks_for_every_range() {
        let mut reference = date(2024, 1, 1);
        for _ in 0..7 {
            for days in 1..=90 {
                let grid = generate_days(reference, days);
                assert_eq!(grid.len() % 7, 0, "ref {reference} days {days}");
                assert_eq!(grid.days().count(), days as usize);
                assert!(grid.len() - grid.days().count() - leading_empties(&grid) < 7);
            }
            reference = reference.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_first_day_lands_in_its_weekday_column() {
        for offset in 0..7 {
            let reference = date(2024, 3, 3) + chrono::Duration::days(offset);
            let grid = generate_days(reference, 5);

            let leading = leading_empties(&grid);
            assert_eq!(leading, reference.weekday().num_days_from_sunday() as usize);
            assert_eq!(grid.slots()[leading], DaySlot::Day(reference));
        }
    }

    #[test]
    fn test_sunday_start_has_no_leading_padding() {
        let reference = date(2024, 3, 3);
        assert_eq!(reference.weekday(), Weekday::Sun);

        let grid = generate_days(reference, 7);
        assert_eq!(grid.len(), 7);
        assert!(grid.slots().iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_saturday_start_single_day() {
        let grid = generate_days(date(2024, 1, 6), 1);
        assert_eq!(grid.len(), 7);
        assert_eq!(grid.slots()[6], DaySlot::Day(date(2024, 1, 6)));
        assert_eq!(grid.days().count(), 1);
    }

    #[test]
    fn test_month_and_leap_year_rollover() {
        let grid = generate_days(date(2024, 2, 27), 5);
        let days: Vec<_> = grid.days().collect();
        assert_eq!(
            days,
            vec![
                date(2024, 2, 27),
                date(2024, 2, 28),
                date(2024, 2, 29),
                date(2024, 3, 1),
                date(2024, 3, 2),
            ]
        );

        let grid = generate_days(date(2023, 12, 30), 4);
        assert_eq!(grid.days().last(), Some(date(2024, 1, 2)));
    }

    #[test]
    fn test_non_positive_range_is_clamped_to_one_day() {
        for days in [0, -1, -90] {
            let grid = generate_days(date(2024, 1, 1), days);
            assert_eq!(grid.len(), 7);
            assert_eq!(grid.days().collect::<Vec<_>>(), vec![date(2024, 1, 1)]);
        }
    }

    #[test]
    fn test_range_above_max_is_clamped() {
        let grid = generate_days(date(2024, 1, 1), 365);
        assert_eq!(grid.days().count(), 90);
    }

    #[test]
    fn test_weeks_start_on_sunday() {
        let grid = generate_days(date(2024, 1, 1), 30);
        for week in grid.weeks() {
            assert_eq!(week.len(), 7);
            if let Some(d) = week[0].date() {
                assert_eq!(d.weekday(), Weekday::Sun);
            }
        }
    }

    #[test]
    fn test_stops_at_max_date() {
        let grid = generate_days(NaiveDate::MAX, 10);
        assert_eq!(grid.days().count(), 1);
        assert_eq!(grid.len() % 7, 0);
    }

    #[test]
    fn test_is_deterministic() {
        let reference = date(2025, 6, 17);
        assert_eq!(generate_days(reference, 42), generate_days(reference, 42));
    }
}
