// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fanline Event State: pointer state machines for timeline interaction.
//!
//! A timeline reacts to raw pointer input in three ways: dragging scrolls the
//! view, moving over a shape highlights its connection, and pressing and
//! releasing on a shape reports a click. Each module tracks just enough state
//! for one of these:
//!
//! - [`drag`]: the explicit `Idle`/`Dragging` phase and movement deltas
//! - [`hover`]: enter/leave transitions as the hovered target changes
//! - [`click`]: press/release pairing with a spatial tolerance
//!
//! The managers are generic over the caller's target type and know nothing
//! about scenes or hit testing. Callers resolve the target under the pointer
//! first and feed it in.
//!
//! ## Drag
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use fanline_event_state::drag::DragPhase;
//!
//! let mut drag = DragPhase::default();
//! drag.press(Point::new(100.0, 10.0));
//!
//! // Each move reports the delta since the previous one.
//! assert_eq!(drag.drag_to(Point::new(90.0, 10.0)), Some(Vec2::new(-10.0, 0.0)));
//! assert_eq!(drag.drag_to(Point::new(85.0, 12.0)), Some(Vec2::new(-5.0, 2.0)));
//!
//! // Releasing reports the total offset and returns to idle.
//! assert_eq!(drag.release(Point::new(85.0, 12.0)), Some(Vec2::new(-15.0, 2.0)));
//! assert!(!drag.is_dragging());
//! ```
//!
//! ## Hover
//!
//! ```rust
//! use fanline_event_state::hover::HoverState;
//!
//! let mut hover = HoverState::new();
//! let t = hover.update(Some("marker-a"));
//! assert_eq!((t.leave, t.enter), (None, Some("marker-a")));
//!
//! // Moving straight onto another target leaves the first one.
//! let t = hover.update(Some("curve-b"));
//! assert_eq!((t.leave, t.enter), (Some("marker-a"), Some("curve-b")));
//!
//! // Staying on the same target is quiet.
//! assert!(hover.update(Some("curve-b")).is_empty());
//! ```
//!
//! ## Click
//!
//! ```rust
//! use kurbo::Point;
//! use fanline_event_state::click::{ClickResult, ClickState};
//!
//! let mut clicks = ClickState::new(4.0);
//! clicks.on_down(Some(7), Point::new(10.0, 10.0));
//! assert_eq!(clicks.on_up(Some(&7), Point::new(12.0, 11.0)), ClickResult::Click(7));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod click;
pub mod drag;
pub mod hover;
