// File: crates/chart-highlight/src/selection.rs
// Summary: Current selection as driven by taps and drags.

use crate::highlight::Highlight;
use crate::options::HighlightOptions;

/// What a touch did to the selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectionChange {
    Unchanged,
    Selected(Highlight),
    Cleared,
}

/// The highlighted value of one chart, if any.
#[derive(Clone, Copy, Debug, Default)]
pub struct Selection {
    current: Option<Highlight>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Highlight> {
        self.current.as_ref()
    }

    /// Tapping the selected value again, or tapping empty space, clears it.
    pub fn tap(&mut self, hit: Option<Highlight>, options: &HighlightOptions) -> SelectionChange {
        if !options.highlight_per_tap_enabled {
            return SelectionChange::Unchanged;
        }
        match hit {
            Some(h) if self.current != Some(h) => self.select(h),
            _ => self.clear(),
        }
    }

    /// Dragging onto another value moves the selection there; dragging over
    /// empty space keeps it.
    pub fn drag(&mut self, hit: Option<Highlight>, options: &HighlightOptions) -> SelectionChange {
        if !options.highlight_per_drag_enabled {
            return SelectionChange::Unchanged;
        }
        match hit {
            Some(h) if self.current != Some(h) => self.select(h),
            _ => SelectionChange::Unchanged,
        }
    }

    pub fn select(&mut self, h: Highlight) -> SelectionChange {
        self.current = Some(h);
        SelectionChange::Selected(h)
    }

    pub fn clear(&mut self) -> SelectionChange {
        match self.current.take() {
            Some(_) => SelectionChange::Cleared,
            None => SelectionChange::Unchanged,
        }
    }
}
