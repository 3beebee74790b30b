// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag phase: compute movement deltas and total offsets from position changes.
//!
//! ## Usage
//!
//! 1) Call [`DragPhase::press`] when the pointer goes down. The phase becomes
//!    [`DragPhase::Dragging`].
//! 2) On each move, call [`DragPhase::drag_to`] to get the delta since the
//!    previous position. Moves while idle report nothing.
//! 3) Call [`DragPhase::release`] on pointer up to get the total offset from the
//!    press position and return to [`DragPhase::Idle`].
//! 4) Call [`DragPhase::cancel`] when the pointer is lost (for example, it left
//!    the element) to return to idle without a result.

use kurbo::{Point, Vec2};

/// Pointer phase of a press-and-drag interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
    /// No button is held.
    #[default]
    Idle,
    /// A button is held.
    Dragging {
        /// Where the press happened.
        press: Point,
        /// Last position seen during the drag.
        last: Point,
    },
}

impl DragPhase {
    /// Starts a drag at `pos`, replacing any drag in progress.
    pub fn press(&mut self, pos: Point) {
        *self = Self::Dragging {
            press: pos,
            last: pos,
        };
    }

    /// Records a move, returning the delta since the previous position.
    ///
    /// Returns `None` while idle.
    pub fn drag_to(&mut self, pos: Point) -> Option<Vec2> {
        match self {
            Self::Idle => None,
            Self::Dragging { last, .. } => {
                let delta = pos - *last;
                *last = pos;
                Some(delta)
            }
        }
    }

    /// Ends the drag, returning the total offset from the press position.
    ///
    /// Returns `None` while idle.
    pub fn release(&mut self, pos: Point) -> Option<Vec2> {
        let total = self.total_offset(pos);
        *self = Self::Idle;
        total
    }

    /// Abandons a drag without reporting anything.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Offset of `pos` from the press position, if dragging.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.press_position().map(|press| pos - press)
    }

    /// Where the current drag started.
    #[must_use]
    pub fn press_position(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Dragging { press, .. } => Some(*press),
        }
    }

    /// Returns `true` while a button is held.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
