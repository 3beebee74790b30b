// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fanline Scene Reference: a recording implementation of [`Scene`].
//!
//! [`RecordingScene`] keeps an owned copy of every shape it is handed, in draw
//! order, together with the view center and a log of [`SceneEvent`]s. It is
//! intended for tests and debugging that want to assert on what a timeline
//! asked the scene to do:
//! - It does **not** rasterize to pixels.
//! - [`RecordingScene::to_svg`] exports the visible display list for
//!   inspection, not as a rendering reference.
//!
//! Handles carry the epoch of the scene at insertion time. [`Scene::clear`]
//! starts a new epoch, so handles issued before a clear never alias entries
//! inserted after it, and stale handles are ignored rather than panicking.
//!
//! ```rust
//! use fanline_geometry::{Connection, GraphicBundle, Scene, ShapeMetrics};
//! use fanline_scene_ref::RecordingScene;
//! use fanline_view::TimelineViewport;
//! use kurbo::Size;
//!
//! let viewport = TimelineViewport::new(Size::new(1000.0, 400.0), 25.0).unwrap();
//! let bundle = GraphicBundle::build(
//!     &Connection::new(1, 2.0, [50.0]),
//!     &viewport,
//!     &ShapeMetrics::default(),
//! );
//!
//! let mut scene = RecordingScene::default();
//! for part in bundle.parts() {
//!     scene.insert(bundle.shape(part).unwrap());
//! }
//! assert_eq!(scene.len(), 2);
//! assert!(scene.to_svg(1000, 400).contains("<path"));
//! ```

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use fanline_geometry::scene::{Present, Scene};
use fanline_geometry::{Curve, Marker, ShapeRef};
use kurbo::{Point, Vec2};

mod svg;

/// Handle of one entry in a [`RecordingScene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntryHandle {
    epoch: u32,
    index: usize,
}

impl EntryHandle {
    /// The clear epoch this handle was issued in.
    #[must_use]
    pub const fn epoch(self) -> u32 {
        self.epoch
    }
}

/// Owned copy of a shape held by the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedShape {
    /// A marker.
    Marker(Marker),
    /// A curve.
    Curve(Curve),
}

impl RecordedShape {
    fn from_ref(shape: ShapeRef<'_>) -> Self {
        match shape {
            ShapeRef::Marker(marker) => Self::Marker(*marker),
            ShapeRef::Curve(curve) => Self::Curve(*curve),
        }
    }

    /// Whether the shape is drawn.
    #[must_use]
    pub fn visible(&self) -> bool {
        match self {
            Self::Marker(marker) => marker.visible,
            Self::Curve(curve) => curve.visible,
        }
    }

    /// Current opacity multiplier.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        match self {
            Self::Marker(marker) => marker.alpha,
            Self::Curve(curve) => curve.alpha,
        }
    }

    fn set_alpha(&mut self, alpha: f32) {
        match self {
            Self::Marker(marker) => marker.alpha = alpha,
            Self::Curve(curve) => curve.alpha = alpha,
        }
    }

    /// Returns the marker, if this is one.
    #[must_use]
    pub fn as_marker(&self) -> Option<&Marker> {
        match self {
            Self::Marker(marker) => Some(marker),
            Self::Curve(_) => None,
        }
    }

    /// Returns the curve, if this is one.
    #[must_use]
    pub fn as_curve(&self) -> Option<&Curve> {
        match self {
            Self::Curve(curve) => Some(curve),
            Self::Marker(_) => None,
        }
    }
}

/// Operation recorded by [`RecordingScene`], in the order it was applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent {
    /// A shape was inserted.
    Insert(EntryHandle),
    /// A shape was replaced in place.
    Update(EntryHandle),
    /// An entry's opacity changed.
    SetAlpha(EntryHandle, f32),
    /// An entry moved to the top of the draw order.
    BringToFront(EntryHandle),
    /// Every entry was removed.
    Clear,
    /// The view was centered on a canvas point.
    SetViewCenter(Point),
    /// The view scrolled by a delta.
    ScrollViewBy(Vec2),
    /// Pending changes were painted.
    Present(Present),
}

/// Recording scene for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingScene {
    epoch: u32,
    entries: Vec<RecordedShape>,
    /// Indices into `entries`, bottom to top.
    order: Vec<usize>,
    view_center: Point,
    events: Vec<SceneEvent>,
    inserts: usize,
    updates: usize,
}

impl RecordingScene {
    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the display list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Current clear epoch.
    #[must_use]
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// Looks up a live entry. Stale handles return `None`.
    #[must_use]
    pub fn get(&self, handle: EntryHandle) -> Option<&RecordedShape> {
        self.slot(handle).map(|idx| &self.entries[idx])
    }

    /// Handles in draw order, bottom to top.
    pub fn draw_order(&self) -> impl Iterator<Item = EntryHandle> + '_ {
        self.order.iter().map(|&index| EntryHandle {
            epoch: self.epoch,
            index,
        })
    }

    /// Shapes in draw order, bottom to top.
    pub fn shapes(&self) -> impl Iterator<Item = &RecordedShape> + '_ {
        self.order.iter().map(|&idx| &self.entries[idx])
    }

    /// Canvas point the view is centered on.
    #[must_use]
    pub fn view_center(&self) -> Point {
        self.view_center
    }

    /// Total number of inserts since creation, across clears.
    #[must_use]
    pub fn insert_count(&self) -> usize {
        self.inserts
    }

    /// Total number of in-place updates since creation, across clears.
    #[must_use]
    pub fn update_count(&self) -> usize {
        self.updates
    }

    /// Log of applied operations.
    #[must_use]
    pub fn events(&self) -> &[SceneEvent] {
        &self.events
    }

    /// Every [`Present`] recorded so far, in order.
    pub fn presents(&self) -> impl Iterator<Item = Present> + '_ {
        self.events.iter().filter_map(|event| match event {
            SceneEvent::Present(present) => Some(*present),
            _ => None,
        })
    }

    /// Clears the event log but keeps the display list.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn slot(&self, handle: EntryHandle) -> Option<usize> {
        (handle.epoch == self.epoch && handle.index < self.entries.len()).then_some(handle.index)
    }
}

impl Scene for RecordingScene {
    type Handle = EntryHandle;

    fn insert(&mut self, shape: ShapeRef<'_>) -> EntryHandle {
        let index = self.entries.len();
        self.entries.push(RecordedShape::from_ref(shape));
        self.order.push(index);
        self.inserts += 1;
        let handle = EntryHandle {
            epoch: self.epoch,
            index,
        };
        self.events.push(SceneEvent::Insert(handle));
        handle
    }

    fn update(&mut self, handle: EntryHandle, shape: ShapeRef<'_>) {
        if let Some(idx) = self.slot(handle) {
            self.entries[idx] = RecordedShape::from_ref(shape);
            self.updates += 1;
            self.events.push(SceneEvent::Update(handle));
        }
    }

    fn set_alpha(&mut self, handle: EntryHandle, alpha: f32) {
        if let Some(idx) = self.slot(handle) {
            self.entries[idx].set_alpha(alpha);
            self.events.push(SceneEvent::SetAlpha(handle, alpha));
        }
    }

    fn bring_to_front(&mut self, handle: EntryHandle) {
        let Some(idx) = self.slot(handle) else {
            return;
        };
        if let Some(pos) = self.order.iter().position(|&i| i == idx) {
            let entry = self.order.remove(pos);
            self.order.push(entry);
            self.events.push(SceneEvent::BringToFront(handle));
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.epoch = self.epoch.wrapping_add(1);
        self.events.push(SceneEvent::Clear);
    }

    fn set_view_center(&mut self, center: Point) {
        self.view_center = center;
        self.events.push(SceneEvent::SetViewCenter(center));
    }

    fn scroll_view_by(&mut self, delta: Vec2) {
        self.view_center += delta;
        self.events.push(SceneEvent::ScrollViewBy(delta));
    }

    fn present(&mut self, present: Present) {
        self.events.push(SceneEvent::Present(present));
    }
}
