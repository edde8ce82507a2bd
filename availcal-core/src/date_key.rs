//! Canonical string keys for calendar dates.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AvailCalError, AvailCalResult};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// ISO `YYYY-MM-DD` key identifying a single calendar date.
///
/// Keys order the same way their dates do, and two keys are equal exactly
/// when their dates are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn date(self) -> NaiveDate {
        self.0
    }

    pub fn parse(s: &str) -> AvailCalResult<Self> {
        NaiveDate::parse_from_str(s, DATE_KEY_FORMAT)
            .map(DateKey)
            .map_err(|_| AvailCalError::InvalidDate(s.to_string()))
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date)
    }
}

impl FromStr for DateKey {
    type Err = AvailCalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateKey::parse(s)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateKey::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_display_is_iso() {
        assert_eq!(DateKey::from(date(2024, 1, 3)).to_string(), "2024-01-03");
        assert_eq!(DateKey::from(date(987, 12, 31)).to_string(), "0987-12-31");
    }

    #[test]
    fn test_parse() {
        assert_eq!(DateKey::parse("2024-02-29").unwrap().date(), date(2024, 2, 29));
        assert!(DateKey::parse("2023-02-29").is_err());
        assert!(DateKey::parse("Mon Jan 01 2024").is_err());
        assert!(DateKey::parse("").is_err());
    }

    #[test]
    fn test_distinct_dates_have_distinct_keys() {
        let start = date(2024, 1, 1);
        let keys: std::collections::HashSet<String> = start
            .iter_days()
            .take(800)
            .map(|d| DateKey::from(d).to_string())
            .collect();
        assert_eq!(keys.len(), 800);
    }

    #[test]
    fn test_serde_as_plain_string() {
        let key = DateKey::from(date(2024, 1, 1));
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2024-01-01\"");

        let back: DateKey = serde_json::from_str("\"2024-01-01\"").unwrap();
        assert_eq!(back, key);

        assert!(serde_json::from_str::<DateKey>("\"not a date\"").is_err());
    }
}
