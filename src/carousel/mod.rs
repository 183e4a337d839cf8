//! Carousel state: the records it shows, the active index and the measured
//! geometry. Rendering and input live in [`crate::display`].

pub mod offset;
pub mod params;

pub use offset::{max_translate_x, translate_x};
pub use params::{DisplayParams, ItemBounds};

use log::debug;

use crate::anime::DisplayRecord;

/// Discrete navigation events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Left,
    Right,
    Select(usize),
}

/// Active-index state machine over an immutable list of records.
///
/// An empty carousel is valid: every transition is a no-op and the offset
/// stays at zero.
#[derive(Debug, Clone)]
pub struct Carousel {
    records: Vec<DisplayRecord>,
    active: usize,
    params: DisplayParams,
}

impl Carousel {
    pub fn new(records: Vec<DisplayRecord>) -> Self {
        Self {
            records,
            active: 0,
            params: DisplayParams::default(),
        }
    }

    pub fn records(&self) -> &[DisplayRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_record(&self) -> Option<&DisplayRecord> {
        self.records.get(self.active)
    }

    pub fn params(&self) -> DisplayParams {
        self.params
    }

    /// Apply one navigation event. Returns true if the active index moved.
    pub fn navigate(&mut self, nav: Navigation) -> bool {
        if self.records.is_empty() {
            return false;
        }
        let last = self.records.len() - 1;
        let next = match nav {
            Navigation::Left => self.active.saturating_sub(1),
            Navigation::Right => (self.active + 1).min(last),
            Navigation::Select(i) if i <= last => i,
            Navigation::Select(i) => {
                debug!("carousel: ignoring select({}) past last index {}", i, last);
                self.active
            }
        };

        let moved = next != self.active;
        if moved {
            debug!("carousel: {:?} active {} -> {}", nav, self.active, next);
            self.active = next;
        }
        moved
    }

    /// Remeasure after the container was laid out again.
    pub fn resize(&mut self, container_width: f64, items: &[ItemBounds]) {
        let params = DisplayParams::measure(container_width, items);
        if params != self.params {
            debug!("carousel: params {:?} -> {:?}", self.params, params);
            self.params = params;
        }
    }

    /// Offset for the current state, recomputed on every call.
    pub fn offset(&self) -> f64 {
        translate_x(self.active, self.records.len(), &self.params)
    }
}
