// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained-mode scene a timeline draws into.
//!
//! Fanline does not rasterize anything itself. A [`Scene`] owns the display list
//! (one entry per marker or curve, in draw order) and a view transform that
//! scrolls horizontally over the canvas. Shapes are inserted once, then updated
//! in place by handle; the scene only paints when [`Scene::present`] is called.
//!
//! Implementations are expected to be cheap to update: the timeline calls
//! [`Scene::update`] for every shape on every scroll tick.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Point, Vec2};

use crate::bundle::ShapeRef;

/// How much work a [`Scene::present`] call asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Present {
    /// The display list was rebuilt: paint everything from scratch.
    Draw,
    /// Existing entries moved or changed style: repaint what changed.
    Update,
}

/// A retained-mode display list with a scrollable view.
pub trait Scene {
    /// Handle of one display-list entry.
    type Handle: Copy + Eq + Hash + Debug;

    /// Appends a shape on top of the draw order.
    fn insert(&mut self, shape: ShapeRef<'_>) -> Self::Handle;

    /// Replaces the geometry, style and visibility of an existing entry.
    fn update(&mut self, handle: Self::Handle, shape: ShapeRef<'_>);

    /// Sets the opacity of an existing entry.
    fn set_alpha(&mut self, handle: Self::Handle, alpha: f32);

    /// Moves an entry to the top of the draw order.
    fn bring_to_front(&mut self, handle: Self::Handle);

    /// Removes every entry. Handles issued before are invalid afterwards.
    fn clear(&mut self);

    /// Centers the view on a canvas-space point.
    fn set_view_center(&mut self, center: Point);

    /// Scrolls the view by a canvas-space delta.
    fn scroll_view_by(&mut self, delta: Vec2);

    /// Paints pending changes.
    fn present(&mut self, present: Present);
}
