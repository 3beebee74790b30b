// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fanline View: the horizontal viewport of a zoomed timeline.
//!
//! A Fanline timeline draws onto a virtual canvas that is wider than the
//! element it is shown in. The zoom factor says how much of that canvas one
//! view width covers: a zoom factor of `25` means the view shows a quarter of
//! the canvas, so the canvas is four view widths wide. The visible window is
//! described by a single horizontal scroll offset.
//!
//! This crate provides:
//! - Pure percent/pixel and canvas/view proportion conversions ([`coords`]).
//! - [`TimelineViewport`], the scroll/zoom state of one mounted timeline, with
//!   clamped scrolling and visible-range reporting.
//!
//! It does **not** own any scene graph or rendering backend, and it never
//! interprets input events. Callers translate drag and wheel deltas into
//! [`TimelineViewport::scroll_view`] calls.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use fanline_view::{ScrollEdge, TimelineViewport};
//!
//! // 1000x400 element, a quarter of the canvas visible at a time.
//! let mut view = TimelineViewport::new(Size::new(1000.0, 400.0), 25.0).unwrap();
//! assert_eq!(view.canvas_width(), 4000.0);
//!
//! // Scrolling past the right edge snaps to the last full view.
//! let outcome = view.scroll_view(10_000.0);
//! assert_eq!(outcome.edge, ScrollEdge::End);
//! assert_eq!(view.scroll_left(), 3000.0);
//!
//! let range = view.visible_range();
//! assert_eq!((range.a, range.b), (75.0, 100.0));
//! ```
//!
//! ## Zero-sized elements
//!
//! [`TimelineViewport::new`] returns `None` for an element without area. There is
//! no meaningful canvas to map onto in that case, and every percent conversion
//! would divide by zero. Callers keep the timeline uninitialized until a resize
//! reports a usable size.
//!
//! This crate is `no_std`.

#![no_std]

pub mod coords;
mod edge;
mod viewport;

pub use edge::{ScrollEdge, ScrollOutcome};
pub use viewport::{TimelineViewport, TimelineViewportDebugInfo, VisibleRange};
