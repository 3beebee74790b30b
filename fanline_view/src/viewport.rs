// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::coords::{percent_to_value, to_canvas_proportions, value_to_percent};
use crate::edge::{ScrollEdge, ScrollOutcome};

/// Visible window of a timeline, as percentages of the canvas width.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct VisibleRange {
    /// Left edge of the window, in percent of the canvas width.
    pub a: f64,
    /// Right edge of the window, in percent of the canvas width.
    pub b: f64,
}

impl VisibleRange {
    /// Creates a range from its two edges.
    #[must_use]
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

/// Scroll and zoom state of one mounted timeline.
///
/// `TimelineViewport` tracks the measured view size, the zoom factor, the derived
/// canvas width and the horizontal scroll offset. The scroll offset always stays
/// within `0..=max_scroll_left()`.
///
/// Canvas space is the coordinate space of the full virtual drawing: markers are
/// placed in it. View space is the visible element: `view_x = canvas_x -
/// scroll_left`.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineViewport {
    view: Size,
    zoom_factor: f64,
    canvas_width: f64,
    scroll_left: f64,
}

impl TimelineViewport {
    /// Creates a viewport for a view of the given size.
    ///
    /// - `zoom_factor` is the percentage of the canvas one view width covers.
    /// - The initial scroll offset is zero.
    ///
    /// Returns `None` if the view has no area or the zoom factor is not a
    /// positive finite number.
    #[must_use]
    pub fn new(view: Size, zoom_factor: f64) -> Option<Self> {
        if !has_area(view) || !(zoom_factor.is_finite() && zoom_factor > 0.0) {
            return None;
        }
        Some(Self {
            view,
            zoom_factor,
            canvas_width: to_canvas_proportions(view.width, zoom_factor),
            scroll_left: 0.0,
        })
    }

    /// Recomputes every dimension for a new view size and resets scrolling.
    ///
    /// Returns `false`, leaving the viewport untouched, if the new size has no
    /// area.
    pub fn reset(&mut self, view: Size) -> bool {
        if !has_area(view) {
            return false;
        }
        self.view = view;
        self.canvas_width = to_canvas_proportions(view.width, self.zoom_factor);
        self.scroll_left = 0.0;
        true
    }

    /// Returns the measured view size.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view
    }

    /// Returns the visible width in pixels.
    #[must_use]
    pub fn view_width(&self) -> f64 {
        self.view.width
    }

    /// Returns the visible height in pixels.
    #[must_use]
    pub fn view_height(&self) -> f64 {
        self.view.height
    }

    /// Returns the full virtual drawing width.
    #[must_use]
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Returns the zoom factor.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Returns the current scroll offset in pixels.
    #[must_use]
    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    /// Returns the largest valid scroll offset.
    ///
    /// This is `canvas_width - view_width`, or zero when the canvas is not wider
    /// than the view.
    #[must_use]
    pub fn max_scroll_left(&self) -> f64 {
        (self.canvas_width - self.view.width).max(0.0)
    }

    /// Requests a new scroll offset, clamping it to the valid range.
    ///
    /// Values below zero snap to zero, values above [`Self::max_scroll_left`] snap
    /// to it, and anything in between is applied exactly. Non-finite requests are
    /// ignored.
    pub fn scroll_view(&mut self, initial_scroll_left: f64) -> ScrollOutcome {
        let previous = self.scroll_left;
        if !initial_scroll_left.is_finite() {
            return ScrollOutcome {
                edge: ScrollEdge::Within,
                previous,
                scroll_left: previous,
            };
        }
        let max = self.max_scroll_left();
        let (edge, scroll_left) = if initial_scroll_left < 0.0 {
            (ScrollEdge::Start, 0.0)
        } else if initial_scroll_left > max {
            (ScrollEdge::End, max)
        } else {
            (ScrollEdge::Within, initial_scroll_left)
        };
        self.scroll_left = scroll_left;
        ScrollOutcome {
            edge,
            previous,
            scroll_left,
        }
    }

    /// Scrolls so that the window starts at `range.a` percent of the canvas.
    ///
    /// The right edge follows from the view width; `range.b` is not consulted
    /// since the zoom factor is fixed.
    pub fn set_visible_range(&mut self, range: VisibleRange) -> ScrollOutcome {
        self.scroll_view(percent_to_value(range.a, self.canvas_width))
    }

    /// Returns the visible window as percentages of the canvas width.
    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        VisibleRange {
            a: value_to_percent(self.scroll_left, self.canvas_width),
            b: value_to_percent(self.scroll_left + self.view.width, self.canvas_width),
        }
    }

    /// Returns `true` if a canvas-space x coordinate lies strictly inside the
    /// visible window.
    ///
    /// Both edges are exclusive: a position exactly at `scroll_left` is treated as
    /// out of view.
    #[must_use]
    pub fn is_in_view(&self, canvas_x: f64) -> bool {
        canvas_x > self.scroll_left && canvas_x < self.scroll_left + self.view.width
    }

    /// Returns the canvas-space center of the visible window.
    #[must_use]
    pub fn view_center(&self) -> Point {
        Point::new(
            self.scroll_left + self.view.width / 2.0,
            self.view.height / 2.0,
        )
    }

    /// Converts a view-space point into canvas space.
    #[must_use]
    pub fn view_to_canvas(&self, pt: Point) -> Point {
        pt + Vec2::new(self.scroll_left, 0.0)
    }

    /// Converts a canvas-space point into view space.
    #[must_use]
    pub fn canvas_to_view(&self, pt: Point) -> Point {
        pt - Vec2::new(self.scroll_left, 0.0)
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TimelineViewportDebugInfo {
        TimelineViewportDebugInfo {
            view: self.view,
            zoom_factor: self.zoom_factor,
            canvas_width: self.canvas_width,
            scroll_left: self.scroll_left,
            max_scroll_left: self.max_scroll_left(),
            visible_range: self.visible_range(),
        }
    }
}

/// Debug snapshot of a [`TimelineViewport`].
#[derive(Clone, Debug)]
pub struct TimelineViewportDebugInfo {
    /// Measured view size.
    pub view: Size,
    /// Zoom factor.
    pub zoom_factor: f64,
    /// Full canvas width.
    pub canvas_width: f64,
    /// Current scroll offset.
    pub scroll_left: f64,
    /// Largest valid scroll offset.
    pub max_scroll_left: f64,
    /// Visible window in percent.
    pub visible_range: VisibleRange,
}

fn has_area(view: Size) -> bool {
    view.width.is_finite() && view.height.is_finite() && view.width > 0.0 && view.height > 0.0
}
