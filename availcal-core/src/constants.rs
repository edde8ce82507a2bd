/// Smallest number of days the grid can show.
pub const MIN_DAY_RANGE: i64 = 1;

/// Largest number of days the grid can show.
pub const MAX_DAY_RANGE: i64 = 90;

/// Days shown when nothing has been chosen yet.
pub const DEFAULT_DAY_RANGE: i64 = 30;

/// Storage key holding the JSON array of selected date keys.
pub const AVAILABLE_DATES_KEY: &str = "available_dates";

/// Storage key holding the day range as a decimal integer.
pub const DAY_RANGE_KEY: &str = "day_range";
