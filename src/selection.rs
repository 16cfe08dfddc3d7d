//! Active icon index with wraparound navigation.
//!
//! The selection owns a single index into the icon list. Every delta is
//! wrapped back into `[0, count)` with Euclidean modulo, so stepping left
//! from the first icon lands on the last one and stepping down from the
//! last row wraps to the top.

use crate::input::{Button, ButtonSet};

/// Index change produced by [`Selection::apply_delta`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionChange {
    pub from: usize,
    pub to: usize,
}

impl SelectionChange {
    /// Whether the move changed grid row.
    pub const fn crosses_row(
        &self,
        columns: usize,
    ) -> bool {
        self.from / columns != self.to / columns
    }
}

/// Active index into a fixed-size list.
///
/// An empty list has no active index and ignores every delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    active: usize,
    count: usize,
}

impl Selection {
    /// Select the first of `count` items.
    pub const fn new(count: usize) -> Self { Self { active: 0, count } }

    #[inline]
    pub const fn active(&self) -> Option<usize> {
        if self.count == 0 {
            None
        } else {
            Some(self.active)
        }
    }

    #[inline]
    pub const fn count(&self) -> usize { self.count }

    /// Move by `delta` with wraparound.
    ///
    /// Returns the change when the index actually moved.
    pub fn apply_delta(
        &mut self,
        delta: isize,
    ) -> Option<SelectionChange> {
        if self.count == 0 || delta == 0 {
            return None;
        }
        let n = self.count as isize;
        let from = self.active;
        let to = (from as isize + delta).rem_euclid(n) as usize;
        self.active = to;
        (from != to).then_some(SelectionChange { from, to })
    }
}

/// Sum of the navigation deltas for every pressed button.
///
/// C is next, A is previous, Down and Up move a whole row.
pub fn delta_for(
    pressed: ButtonSet,
    columns: usize,
) -> isize {
    let row = columns as isize;
    let mut delta = 0;
    if pressed.contains(Button::C) {
        delta += 1;
    }
    if pressed.contains(Button::A) {
        delta -= 1;
    }
    if pressed.contains(Button::Up) {
        delta -= row;
    }
    if pressed.contains(Button::Down) {
        delta += row;
    }
    delta
}
