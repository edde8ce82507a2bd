pub mod clear;
pub mod config;
pub mod list;
pub mod range;
pub mod select_all;
pub mod show;
pub mod toggle;

use anyhow::Result;
use availcal_core::availability::AvailabilityStore;
use availcal_core::config::AvailCalConfig;
use availcal_core::day_range::DayRange;
use availcal_core::storage::{FileStore, KeyValueStore};
use availcal_core::widget::Widget;
use chrono::{Local, NaiveDate};

/// Open the widget over the configured data directory.
/// The grid starts at `from`, or today in local time.
pub fn open_widget(from: Option<NaiveDate>) -> Result<Widget<FileStore>> {
    let config = AvailCalConfig::load()?;
    let storage = FileStore::open(&config.data_path())?;

    let today = from.unwrap_or_else(|| Local::now().date_naive());
    Ok(widget_over(storage, config.default_range(), today))
}

/// Build a widget over any storage, hydrating saved state first.
pub fn widget_over<S: KeyValueStore>(
    storage: S,
    default_range: DayRange,
    today: NaiveDate,
) -> Widget<S> {
    let store = AvailabilityStore::load_with_default(storage, default_range);
    Widget::new(store, today)
}
