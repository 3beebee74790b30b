// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fanline: an interactive, horizontally scrollable connection timeline.
//!
//! A timeline shows a set of connections. Each connection is an origin on a
//! shared axis, drawn as a small diamond marker, fanning out to one or more end
//! slots along the bottom of the element through S-shaped curves. The canvas
//! is wider than the element (see [`TimelineConfig::zoom_factor`]); the user
//! drags or wheels to scroll it, hovers a shape to highlight its connection
//! and clicks to select it.
//!
//! The crate is the headless core of such a widget:
//! - [`Timeline`] owns the scroll state, the shapes and their scene handles.
//!   Mounting validates the [`TimelineConfig`], registers with the [`Host`] for
//!   resizes and draws.
//! - Input arrives through [`Timeline::pointer_down`], [`Timeline::pointer_move`],
//!   [`Timeline::pointer_up`], [`Timeline::pointer_leave`] and
//!   [`Timeline::wheel`]. Resizes arrive through [`Timeline::on_resize`] and are
//!   throttled; the host calls [`Timeline::tick`] to let the throttle fire.
//! - Drawing goes to a retained-mode [`Scene`]: shapes are inserted once after
//!   each structural change and updated in place on every scroll.
//! - Semantic events (clicks, hover transitions, visible-range changes) are
//!   reported to a [`TimelineListener`], for example [`Callbacks`].
//!
//! ## Minimal example
//!
//! ```rust
//! use fanline::{Connection, Host, ListenerId, Timeline, TimelineProps};
//! use fanline_scene_ref::RecordingScene;
//! use kurbo::{Size, Vec2};
//!
//! #[derive(Debug)]
//! struct Element(Size);
//!
//! impl Host for Element {
//!     fn measure(&self) -> Size {
//!         self.0
//!     }
//!     fn add_resize_listener(&mut self) -> ListenerId {
//!         ListenerId(1)
//!     }
//!     fn remove_resize_listener(&mut self, _: ListenerId) {}
//! }
//!
//! let props = TimelineProps::new(vec![Connection::new("c1", 50.0, [10.0, 90.0])]);
//! let mut timeline = Timeline::mount(
//!     props,
//!     RecordingScene::default(),
//!     Element(Size::new(1000.0, 400.0)),
//! )
//! .unwrap();
//!
//! // One marker and two curves.
//! assert_eq!(timeline.scene().len(), 3);
//!
//! // Scrolling past the end clamps to the last full view.
//! timeline.wheel(Vec2::new(10_000.0, 0.0));
//! let range = timeline.visible_range().unwrap();
//! assert_eq!((range.a, range.b), (75.0, 100.0));
//! ```
//!
//! ## Crates
//!
//! - `fanline_view`: percent/pixel conversions and the clamped viewport.
//! - `fanline_geometry`: connection records, marker and curve geometry, hit
//!   testing and the [`Scene`] trait.
//! - `fanline_event_state`: drag, hover and click state machines.
//! - `fanline_timing`: the trailing throttle used for resizes.
//! - `fanline_scene_ref`: a recording scene for tests and SVG snapshots.

mod config;
mod controller;
mod error;
mod graph;
mod host;
mod listener;
mod props;
mod timeline;

pub use config::TimelineConfig;
pub use error::ConfigError;
pub use graph::{ShapeGraph, ShapeKey};
pub use host::{Cursor, Host, ListenerId};
pub use listener::{Callbacks, TimelineListener};
pub use props::TimelineProps;
pub use timeline::Timeline;

pub use fanline_geometry::{Color, Connection, Part, Present, Scene, ShapeRef};
pub use fanline_view::{ScrollEdge, TimelineViewport, VisibleRange};
