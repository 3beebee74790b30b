// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click recognition: pair a press and a release on the same target.
//!
//! A click is reported when the release happens on the target that was pressed
//! and the pointer travelled no further than the configured slop. Anything else
//! (a drag, a release elsewhere) cancels the pending click.

use kurbo::Point;

/// Outcome of [`ClickState::on_up`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickResult<K> {
    /// The press and release form a click on this target.
    Click(K),
    /// A press was pending but the release did not qualify.
    Cancelled,
    /// No press was pending.
    None,
}

/// Tracks a pending press for click recognition.
#[derive(Clone, Debug, PartialEq)]
pub struct ClickState<K> {
    slop: f64,
    pending: Option<(K, Point)>,
}

impl<K: PartialEq> ClickState<K> {
    /// Creates a recognizer that tolerates `slop` pixels of pointer travel.
    #[must_use]
    pub fn new(slop: f64) -> Self {
        Self {
            slop,
            pending: None,
        }
    }

    /// Records a press. Presses over empty space clear any pending click.
    pub fn on_down(&mut self, target: Option<K>, pos: Point) {
        self.pending = target.map(|target| (target, pos));
    }

    /// Resolves a release against the pending press.
    pub fn on_up(&mut self, target: Option<&K>, pos: Point) -> ClickResult<K> {
        let Some((pressed, down_pos)) = self.pending.take() else {
            return ClickResult::None;
        };
        let same_target = target.is_some_and(|target| *target == pressed);
        if same_target && (pos - down_pos).hypot2() <= self.slop * self.slop {
            ClickResult::Click(pressed)
        } else {
            ClickResult::Cancelled
        }
    }

    /// Drops the pending press.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns `true` while a press is waiting for its release.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
