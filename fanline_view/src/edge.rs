// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which scroll bound, if any, a requested scroll offset ran into.
///
/// Renderers use this to decide how to move their view: a clamped scroll
/// re-centers the view at that extreme, while an in-range scroll shifts it by the
/// requested delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollEdge {
    /// The request was inside the valid range and was applied as is.
    #[default]
    Within,
    /// The request was below zero and snapped to the left edge.
    Start,
    /// The request was past the last full view and snapped to the right edge.
    End,
}

/// Result of [`crate::TimelineViewport::scroll_view`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOutcome {
    /// Bound hit by the request.
    pub edge: ScrollEdge,
    /// Scroll offset before the request.
    pub previous: f64,
    /// Scroll offset after clamping.
    pub scroll_left: f64,
}

impl ScrollOutcome {
    /// Returns `true` when the scroll offset changed.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.previous != self.scroll_left
    }
}
