//! Number of days shown in the calendar grid.

use std::fmt;

use crate::constants::{DEFAULT_DAY_RANGE, MAX_DAY_RANGE, MIN_DAY_RANGE};

/// Number of consecutive days the grid displays.
/// Always within [MIN_DAY_RANGE, MAX_DAY_RANGE].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayRange(u8);

impl Default for DayRange {
    fn default() -> Self {
        DayRange::clamped(DEFAULT_DAY_RANGE)
    }
}

impl DayRange {
    /// Build a range from any integer, clamping it into bounds.
    /// Zero and negative values become MIN_DAY_RANGE.
    pub fn clamped(days: i64) -> Self {
        DayRange(days.clamp(MIN_DAY_RANGE, MAX_DAY_RANGE) as u8)
    }

    /// Parse a persisted value. Anything that isn't an integer is rejected,
    /// integers outside the bounds are clamped.
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse::<i64>().ok().map(Self::clamped)
    }

    pub fn days(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
