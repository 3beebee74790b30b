// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fanline Geometry: the shapes of a connection timeline.
//!
//! Every [`Connection`] renders as one [`GraphicBundle`]: a diamond [`Marker`] at
//! the connection's start position on the zoomed canvas, and one S-shaped
//! [`Curve`] per end point, flowing from the marker down to a slot on the bottom
//! row of the visible window.
//!
//! The crate covers three jobs:
//! - **Construction**: [`GraphicBundle::build`] resolves a connection's percent
//!   positions against a [`TimelineViewport`] and produces fresh shapes.
//! - **Incremental update**: [`GraphicBundle::update`] moves existing control
//!   points for a new scroll offset without allocating. This is the path taken
//!   on every scroll tick.
//! - **Hit testing**: [`PreciseHitTest`] answers whether a canvas-space point
//!   lies on a marker (exact rounded-rect containment under the marker's
//!   rotation) or near a curve (distance to the bezier against the stroke width).
//!
//! It also defines the [`Scene`] trait: the contract a retained-mode renderer
//! fulfils so that higher layers can insert, move, fade and reorder shapes
//! without knowing anything about the backend.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use fanline_geometry::{Connection, GraphicBundle, ShapeMetrics};
//! use fanline_view::TimelineViewport;
//!
//! let viewport = TimelineViewport::new(Size::new(1000.0, 400.0), 25.0).unwrap();
//! let metrics = ShapeMetrics::default();
//! let connection = Connection::new("c1", 50.0, [10.0, 90.0]);
//!
//! let bundle = GraphicBundle::build(&connection, &viewport, &metrics);
//! assert_eq!(bundle.anchor_x(), 2000.0);
//! assert_eq!(bundle.curves.len(), 2);
//! assert_eq!(bundle.curves[0].end.x, 100.0);
//! assert_eq!(bundle.curves[1].end.x, 900.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bundle;
mod connection;
mod curve;
mod hit;
mod marker;
mod metrics;
pub mod scene;

pub use bundle::{GraphicBundle, Part, ShapeRef, build_bundles};
pub use connection::{Connection, displayable_amount, resolve_end_slot, resolve_start_position};
pub use curve::Curve;
pub use hit::{HitKind, HitParams, HitScore, PreciseHitTest};
pub use marker::Marker;
pub use metrics::ShapeMetrics;
pub use scene::{Present, Scene};

pub use fanline_view::TimelineViewport;
pub use peniko::Color;
