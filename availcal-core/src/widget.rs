//! Event-driven front for the availability calendar.
//!
//! A host (terminal, web page, test) raises [`UiEvent`]s; the widget applies
//! them to its [`AvailabilityStore`] and tells subscribers about the result.

use chrono::NaiveDate;

use crate::availability::AvailabilityStore;
use crate::day_range::DayRange;
use crate::error::AvailCalResult;
use crate::grid::{CalendarGrid, DaySlot, generate};
use crate::storage::KeyValueStore;

/// Interactions a host can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    RangeChanged(i64),
    DayClicked(DaySlot),
    ClearRequested,
    SelectAllRequested,
}

/// Everything a host needs to draw the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    day_range: DayRange,
    available: Vec<NaiveDate>,
    grid: CalendarGrid,
}

impl WidgetState {
    pub fn new(day_range: DayRange, mut available: Vec<NaiveDate>, grid: CalendarGrid) -> Self {
        available.sort_unstable();
        available.dedup();

        WidgetState {
            day_range,
            available,
            grid,
        }
    }

    pub fn day_range(&self) -> DayRange {
        self.day_range
    }

    /// Selected dates, ascending and without duplicates.
    pub fn available(&self) -> &[NaiveDate] {
        &self.available
    }

    pub fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    pub fn is_available(&self, date: NaiveDate) -> bool {
        self.available.binary_search(&date).is_ok()
    }
}

type Listener = Box<dyn FnMut(&WidgetState)>;

pub struct Widget<S: KeyValueStore> {
    store: AvailabilityStore<S>,
    today: NaiveDate,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStore> Widget<S> {
    pub fn new(store: AvailabilityStore<S>, today: NaiveDate) -> Self {
        Widget {
            store,
            today,
            listeners: Vec::new(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn store(&self) -> &AvailabilityStore<S> {
        &self.store
    }

    /// The grid currently on screen.
    pub fn grid(&self) -> CalendarGrid {
        generate(self.today, self.store.day_range())
    }

    pub fn state(&self) -> WidgetState {
        WidgetState::new(self.store.day_range(), self.store.dates(), self.grid())
    }

    /// Register a callback run after every handled event.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&WidgetState) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Apply `event` and return the resulting state.
    ///
    /// Listeners are notified even when persisting fails, since the
    /// in-memory state has changed either way; the storage error is
    /// returned afterwards.
    pub fn handle(&mut self, event: UiEvent) -> AvailCalResult<WidgetState> {
        let result = match event {
            UiEvent::RangeChanged(days) => self.store.set_day_range(days).map(|_| ()),
            UiEvent::DayClicked(slot) => self.store.toggle(slot).map(|_| ()),
            UiEvent::ClearRequested => self.store.clear(),
            UiEvent::SelectAllRequested => {
                let grid = self.grid();
                self.store.set_all(&grid)
            }
        };

        let state = self.state();
        for listener in &mut self.listeners {
            listener(&state);
        }

        result.map(|_| state)
    }
}
