// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index-based links between connections, their shapes and scene entries.
//!
//! A [`ShapeGraph`] owns one [`GraphicBundle`] per connection and remembers the
//! scene handle of every shape. Shapes are named by [`ShapeKey`] (bundle index
//! plus [`Part`]); "this curve's marker" and "this marker's curves" are index
//! lookups, and the graph mirrors the scene's draw order so that hit testing can
//! run top-most first without asking the scene.

use core::fmt::Debug;
use core::hash::Hash;

use fanline_geometry::{
    Connection, GraphicBundle, HitParams, Part, Scene, ShapeMetrics, ShapeRef,
};
use fanline_view::TimelineViewport;
use hashbrown::HashMap;
use kurbo::Point;
use smallvec::SmallVec;

/// Names one shape of a mounted timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeKey {
    /// Index of the bundle, which is also the index of its connection.
    pub bundle: usize,
    /// The shape inside the bundle.
    pub part: Part,
}

impl ShapeKey {
    /// Key of a bundle's marker.
    #[must_use]
    pub const fn marker(bundle: usize) -> Self {
        Self {
            bundle,
            part: Part::Marker,
        }
    }

    /// Key of a bundle's curve.
    #[must_use]
    pub const fn curve(bundle: usize, curve: usize) -> Self {
        Self {
            bundle,
            part: Part::Curve(curve),
        }
    }
}

#[derive(Clone, Debug)]
struct BundleHandles<H> {
    marker: H,
    curves: SmallVec<[H; 4]>,
}

/// Shapes of every connection plus their scene handles.
#[derive(Clone, Debug)]
pub struct ShapeGraph<K, H> {
    ids: Vec<K>,
    bundles: Vec<GraphicBundle>,
    handles: Vec<BundleHandles<H>>,
    /// Last bundle per id; also how duplicates are spotted while constructing.
    by_id: HashMap<K, usize>,
    /// Bottom to top, mirroring the scene.
    draw_order: Vec<ShapeKey>,
}

impl<K, H> ShapeGraph<K, H>
where
    K: Clone + Eq + Hash + Debug,
    H: Copy + Eq + Hash + Debug,
{
    /// Builds every bundle and inserts its shapes into `scene`.
    ///
    /// Within a bundle the curves are inserted first so the marker is drawn on
    /// top of their start points.
    pub fn construct<S>(
        connections: &[Connection<K>],
        viewport: &TimelineViewport,
        metrics: &ShapeMetrics,
        scene: &mut S,
    ) -> Self
    where
        S: Scene<Handle = H>,
    {
        let shape_total = connections
            .iter()
            .map(|c| 1 + c.end_points_x_positions.len())
            .sum();
        let mut graph = Self {
            ids: Vec::with_capacity(connections.len()),
            bundles: Vec::with_capacity(connections.len()),
            handles: Vec::with_capacity(connections.len()),
            by_id: HashMap::with_capacity(connections.len()),
            draw_order: Vec::with_capacity(shape_total),
        };

        for (index, connection) in connections.iter().enumerate() {
            let bundle = GraphicBundle::build(connection, viewport, metrics);

            let mut curves = SmallVec::with_capacity(bundle.curves.len());
            for (curve_index, curve) in bundle.curves.iter().enumerate() {
                curves.push(scene.insert(ShapeRef::Curve(curve)));
                graph.draw_order.push(ShapeKey::curve(index, curve_index));
            }
            let marker = scene.insert(ShapeRef::Marker(&bundle.marker));
            graph.draw_order.push(ShapeKey::marker(index));

            if graph.by_id.insert(connection.id.clone(), index).is_some() {
                tracing::warn!(
                    id = ?connection.id,
                    "duplicate connection id; lookups resolve to the last one"
                );
            }
            graph.ids.push(connection.id.clone());
            graph.bundles.push(bundle);
            graph.handles.push(BundleHandles { marker, curves });
        }
        graph
    }

    /// Moves every shape for the current viewport and pushes it to `scene`.
    pub fn update_all<S>(
        &mut self,
        viewport: &TimelineViewport,
        metrics: &ShapeMetrics,
        scene: &mut S,
    ) where
        S: Scene<Handle = H>,
    {
        for (bundle, handles) in self.bundles.iter_mut().zip(&self.handles) {
            bundle.update(viewport, metrics);
            scene.update(handles.marker, ShapeRef::Marker(&bundle.marker));
            for (curve, &handle) in bundle.curves.iter().zip(&handles.curves) {
                scene.update(handle, ShapeRef::Curve(curve));
            }
        }
    }

    /// Top-most visible shape under a canvas-space point.
    #[must_use]
    pub fn hit_test(&self, pt: Point, params: &HitParams) -> Option<ShapeKey> {
        self.draw_order.iter().rev().copied().find(|key| {
            self.bundles[key.bundle]
                .hit_test(key.part, pt, params)
                .is_some()
        })
    }

    /// Sets the opacity of one shape.
    pub fn set_alpha<S>(&mut self, key: ShapeKey, alpha: f32, scene: &mut S)
    where
        S: Scene<Handle = H>,
    {
        let Some(handle) = self.handle(key) else {
            return;
        };
        self.bundles[key.bundle].set_alpha(key.part, alpha);
        scene.set_alpha(handle, alpha);
    }

    /// Sets the opacity of every shape.
    pub fn set_all_alpha<S>(&mut self, alpha: f32, scene: &mut S)
    where
        S: Scene<Handle = H>,
    {
        for (bundle, handles) in self.bundles.iter_mut().zip(&self.handles) {
            bundle.marker.alpha = alpha;
            scene.set_alpha(handles.marker, alpha);
            for (curve, &handle) in bundle.curves.iter_mut().zip(&handles.curves) {
                curve.alpha = alpha;
                scene.set_alpha(handle, alpha);
            }
        }
    }

    /// Raises one shape to the top of the draw order.
    pub fn bring_to_front<S>(&mut self, key: ShapeKey, scene: &mut S)
    where
        S: Scene<Handle = H>,
    {
        let Some(handle) = self.handle(key) else {
            return;
        };
        if let Some(pos) = self.draw_order.iter().position(|k| *k == key) {
            self.draw_order.remove(pos);
            self.draw_order.push(key);
        }
        scene.bring_to_front(handle);
    }

    /// The shapes paired with `key`: a marker's curves, or a curve's marker.
    #[must_use]
    pub fn related(&self, key: ShapeKey) -> SmallVec<[ShapeKey; 4]> {
        let Some(bundle) = self.bundles.get(key.bundle) else {
            return SmallVec::new();
        };
        match key.part {
            Part::Marker => (0..bundle.curves.len())
                .map(|curve| ShapeKey::curve(key.bundle, curve))
                .collect(),
            Part::Curve(_) => smallvec::smallvec![ShapeKey::marker(key.bundle)],
        }
    }

    /// Scene handle of a shape.
    #[must_use]
    pub fn handle(&self, key: ShapeKey) -> Option<H> {
        let handles = self.handles.get(key.bundle)?;
        match key.part {
            Part::Marker => Some(handles.marker),
            Part::Curve(curve) => handles.curves.get(curve).copied(),
        }
    }

    /// Shape behind a scene handle.
    ///
    /// Scans every handle; meant for inspection rather than per-event use.
    #[must_use]
    pub fn key_of(&self, handle: H) -> Option<ShapeKey> {
        self.handles.iter().enumerate().find_map(|(bundle, handles)| {
            if handles.marker == handle {
                return Some(ShapeKey::marker(bundle));
            }
            let curve = handles.curves.iter().position(|h| *h == handle)?;
            Some(ShapeKey::curve(bundle, curve))
        })
    }

    /// Connection id of a bundle.
    #[must_use]
    pub fn id(&self, bundle: usize) -> Option<&K> {
        self.ids.get(bundle)
    }

    /// Bundle index of a connection id.
    #[must_use]
    pub fn bundle_index(&self, id: &K) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Borrows a bundle.
    #[must_use]
    pub fn bundle(&self, index: usize) -> Option<&GraphicBundle> {
        self.bundles.get(index)
    }

    /// All bundles, in connection order.
    #[must_use]
    pub fn bundles(&self) -> &[GraphicBundle] {
        &self.bundles
    }

    /// Shapes bottom to top.
    #[must_use]
    pub fn draw_order(&self) -> &[ShapeKey] {
        &self.draw_order
    }

    /// Number of bundles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    /// Returns `true` if there are no connections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Number of shapes across every bundle.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.draw_order.len()
    }
}
