//! The set of dates a user has marked available, kept in sync with storage.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::constants::{AVAILABLE_DATES_KEY, DAY_RANGE_KEY};
use crate::date_key::DateKey;
use crate::day_range::DayRange;
use crate::error::AvailCalResult;
use crate::grid::{CalendarGrid, DaySlot};
use crate::storage::KeyValueStore;

/// Selected dates plus the chosen day range, backed by a [`KeyValueStore`].
///
/// Every mutation updates memory first and then writes through to storage,
/// so a storage error never leaves the in-memory selection behind the user.
pub struct AvailabilityStore<S: KeyValueStore> {
    storage: S,
    available: BTreeSet<DateKey>,
    day_range: DayRange,
}

impl<S: KeyValueStore> AvailabilityStore<S> {
    /// Hydrate from storage, using the default day range when none is stored.
    pub fn load(storage: S) -> Self {
        Self::load_with_default(storage, DayRange::default())
    }

    /// Hydrate from storage. Missing or corrupt entries fall back to an
    /// empty selection and `default_range`.
    pub fn load_with_default(storage: S, default_range: DayRange) -> Self {
        let available = read_available(&storage);
        let day_range = read_day_range(&storage).unwrap_or(default_range);

        debug!(dates = available.len(), %day_range, "Loaded availability");

        AvailabilityStore {
            storage,
            available,
            day_range,
        }
    }

    pub fn available(&self) -> &BTreeSet<DateKey> {
        &self.available
    }

    /// Selected dates in ascending order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.available.iter().map(|k| k.date()).collect()
    }

    pub fn is_available(&self, date: NaiveDate) -> bool {
        self.available.contains(&DateKey::from(date))
    }

    pub fn day_range(&self) -> DayRange {
        self.day_range
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Flip a date in or out of the selection. Empty slots are ignored.
    /// Returns whether the slot's date is available afterwards.
    pub fn toggle(&mut self, slot: DaySlot) -> AvailCalResult<bool> {
        let Some(date) = slot.date() else {
            return Ok(false);
        };

        let key = DateKey::from(date);
        let now_available = if self.available.remove(&key) {
            false
        } else {
            self.available.insert(key);
            true
        };

        debug!(date = %key, available = now_available, "Toggled date");
        self.flush_available()?;
        Ok(now_available)
    }

    /// Replace the selection with every date in `grid`.
    pub fn set_all(&mut self, grid: &CalendarGrid) -> AvailCalResult<()> {
        self.available = grid.days().map(DateKey::from).collect();
        self.flush_available()
    }

    /// Drop the selection and remove it from storage entirely.
    pub fn clear(&mut self) -> AvailCalResult<()> {
        self.available.clear();
        self.storage.delete(AVAILABLE_DATES_KEY)
    }

    /// Store a new day range, clamped into bounds. Returns the effective range.
    pub fn set_day_range(&mut self, days: i64) -> AvailCalResult<DayRange> {
        self.day_range = DayRange::clamped(days);
        self.storage
            .set(DAY_RANGE_KEY, &self.day_range.to_string())?;
        Ok(self.day_range)
    }

    fn flush_available(&mut self) -> AvailCalResult<()> {
        let json = serde_json::to_string(&self.available)?;
        self.storage.set(AVAILABLE_DATES_KEY, &json)
    }
}

fn read_available<S: KeyValueStore>(storage: &S) -> BTreeSet<DateKey> {
    let raw = match storage.get(AVAILABLE_DATES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return BTreeSet::new(),
        Err(e) => {
            warn!(error = %e, "Could not read available dates");
            return BTreeSet::new();
        }
    };

    let entries: Vec<String> = match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(error = %e, "Ignoring corrupt available dates");
            return BTreeSet::new();
        }
    };

    entries
        .iter()
        .filter_map(|s| match DateKey::parse(s) {
            Ok(key) => Some(key),
            Err(_) => {
                warn!(entry = %s, "Dropping unrecognised date key");
                None
            }
        })
        .collect()
}

fn read_day_range<S: KeyValueStore>(storage: &S) -> Option<DayRange> {
    let raw = match storage.get(DAY_RANGE_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!(error = %e, "Could not read day range");
            return None;
        }
    };

    let range = DayRange::parse(&raw);
    if range.is_none() {
        warn!(value = %raw, "Ignoring corrupt day range");
    }
    range
}
