//! Core of the availcal ecosystem.
//!
//! - `grid` lays out a run of days as Sunday-first calendar weeks
//! - `availability` keeps the user's selected dates in sync with storage
//! - `widget` turns host interactions into store updates and notifications

pub mod availability;
pub mod config;
pub mod constants;
pub mod date_key;
pub mod day_range;
pub mod error;
pub mod grid;
pub mod storage;
pub mod widget;

pub use availability::AvailabilityStore;
pub use date_key::DateKey;
pub use day_range::DayRange;
pub use error::{AvailCalError, AvailCalResult};
pub use grid::{CalendarGrid, DaySlot, WEEKDAY_HEADERS, generate, generate_days};
pub use widget::{UiEvent, Widget, WidgetState};
