// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mounting, resizing, data replacement and teardown.

use core::fmt::Debug;
use core::hash::Hash;

use fanline_geometry::{Connection, HitParams, Present, Scene, ShapeMetrics};
use fanline_timing::TrailingThrottle;
use fanline_view::{TimelineViewport, VisibleRange};
use tracing::{debug, trace};

use crate::config::TimelineConfig;
use crate::controller::Controller;
use crate::error::ConfigError;
use crate::graph::ShapeGraph;
use crate::host::{Cursor, Host, ListenerId};
use crate::listener::TimelineListener;
use crate::props::TimelineProps;

pub(crate) enum Phase<K, Hd> {
    /// Mounted into an element without area; nothing is drawn yet.
    Deferred,
    Ready(Layout<K, Hd>),
    Unmounted,
}

pub(crate) struct Layout<K, Hd> {
    pub(crate) viewport: TimelineViewport,
    /// `None` until the next draw goes through construction.
    pub(crate) graph: Option<ShapeGraph<K, Hd>>,
}

/// A mounted timeline.
///
/// A `Timeline` owns its [`Scene`] and [`Host`] and is driven entirely by the
/// host calling its methods: pointer and wheel input (see the interaction
/// methods), [`on_resize`](Self::on_resize) and [`tick`](Self::tick) for
/// resizes, and [`set_connections`](Self::set_connections) for new data. Every
/// call runs to completion, including presenting the scene, before returning.
///
/// Mounting into an element without area is not an error: the timeline waits,
/// ignoring input, until a resize gives it a positive size.
///
/// Dropping a timeline unmounts it.
pub struct Timeline<K, S: Scene, H: Host> {
    pub(crate) config: TimelineConfig,
    pub(crate) metrics: ShapeMetrics,
    pub(crate) hit_params: HitParams,
    pub(crate) connections: Vec<Connection<K>>,
    pub(crate) listener: Box<dyn TimelineListener<K>>,
    pub(crate) scene: S,
    pub(crate) host: H,
    resize_listener: Option<ListenerId>,
    resize: TrailingThrottle<()>,
    initial_range: Option<VisibleRange>,
    pub(crate) phase: Phase<K, S::Handle>,
    pub(crate) controller: Controller,
}

impl<K, S, H> Timeline<K, S, H>
where
    K: Clone + Eq + Hash + Debug,
    S: Scene,
    H: Host,
{
    /// Validates the configuration, registers for resizes and draws.
    ///
    /// If the host element has no area yet, drawing is deferred to the first
    /// resize that gives it one.
    pub fn mount(props: TimelineProps<K>, scene: S, mut host: H) -> Result<Self, ConfigError> {
        let TimelineProps {
            connections,
            visible_range,
            config,
            listener,
        } = props;
        config.validate()?;

        let resize_listener = host.add_resize_listener();
        debug!(
            connections = connections.len(),
            listener = ?resize_listener,
            "mounting timeline"
        );
        let mut timeline = Self {
            metrics: config.shape_metrics(),
            hit_params: config.hit_params(),
            resize: TrailingThrottle::new(config.resize_throttle_ms),
            controller: Controller::new(config.click_slop),
            config,
            connections,
            listener,
            scene,
            host,
            resize_listener: Some(resize_listener),
            initial_range: visible_range,
            phase: Phase::Deferred,
        };
        timeline.relayout();
        Ok(timeline)
    }

    /// Notes that the host element was resized at `now_ms`.
    ///
    /// Relayouts are throttled on the trailing edge: the first notification
    /// opens a window of `resize_throttle_ms`, and [`tick`](Self::tick) performs
    /// a single relayout once it has elapsed.
    pub fn on_resize(&mut self, now_ms: u64) {
        if self.resize_listener.is_none() {
            return;
        }
        self.resize.call(now_ms, ());
        trace!(now_ms, deadline = ?self.resize.next_deadline(), "resize scheduled");
    }

    /// Runs a pending relayout whose deadline has passed.
    pub fn tick(&mut self, now_ms: u64) {
        if self.resize.poll(now_ms).is_some() {
            debug!(now_ms, "resize window elapsed");
            self.relayout();
        }
    }

    /// When [`tick`](Self::tick) next has work to do, if ever.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.resize.next_deadline()
    }

    /// Replaces the data and redraws from scratch, keeping the scroll offset.
    pub fn set_connections(&mut self, connections: Vec<Connection<K>>) {
        if matches!(self.phase, Phase::Unmounted) {
            return;
        }
        debug!(connections = connections.len(), "replacing connections");
        self.connections = connections;
        self.invalidate_shapes();
        self.redraw();
    }

    /// Measures the host and rebuilds everything for the new size.
    ///
    /// Scrolling resets to the start, except on the first layout after mount,
    /// which applies the initial visible range.
    fn relayout(&mut self) {
        if matches!(self.phase, Phase::Unmounted) {
            return;
        }
        self.reset_interaction();

        let size = self.host.measure();
        let viewport = match core::mem::replace(&mut self.phase, Phase::Deferred) {
            Phase::Ready(Layout { mut viewport, .. }) => {
                if viewport.reset(size) {
                    Some(viewport)
                } else {
                    self.scene.clear();
                    self.scene.present(Present::Draw);
                    None
                }
            }
            _ => TimelineViewport::new(size, self.config.zoom_factor),
        };
        let Some(mut viewport) = viewport else {
            debug!(?size, "element has no area; deferring layout until it is resized");
            return;
        };
        if let Some(range) = self.initial_range.take() {
            viewport.set_visible_range(range);
        }
        debug!(
            width = size.width,
            height = size.height,
            canvas_width = viewport.canvas_width(),
            scroll_left = viewport.scroll_left(),
            "laid out timeline"
        );
        self.scene.set_view_center(viewport.view_center());
        self.phase = Phase::Ready(Layout {
            viewport,
            graph: None,
        });
        self.redraw();
    }

    /// Drops the current shapes so that the next draw constructs new ones.
    fn invalidate_shapes(&mut self) {
        self.reset_interaction();
        if let Phase::Ready(layout) = &mut self.phase {
            layout.graph = None;
        }
    }

    /// Draws through construction after a structural reset, in place otherwise.
    pub(crate) fn redraw(&mut self) {
        let Phase::Ready(layout) = &mut self.phase else {
            return;
        };
        if let Some(graph) = layout.graph.as_mut() {
            graph.update_all(&layout.viewport, &self.metrics, &mut self.scene);
            self.scene.present(Present::Update);
            trace!(
                scroll_left = layout.viewport.scroll_left(),
                "updated shapes in place"
            );
            return;
        }

        self.scene.clear();
        let graph = ShapeGraph::construct(
            &self.connections,
            &layout.viewport,
            &self.metrics,
            &mut self.scene,
        );
        debug!(
            bundles = graph.len(),
            shapes = graph.shape_count(),
            "constructed timeline shapes"
        );
        layout.graph = Some(graph);
        self.scene.present(Present::Draw);
    }

    /// Current connections.
    #[must_use]
    pub fn connections(&self) -> &[Connection<K>] {
        &self.connections
    }

    /// Shapes and their scene handles, once laid out and drawn.
    #[must_use]
    pub fn graph(&self) -> Option<&ShapeGraph<K, S::Handle>> {
        match &self.phase {
            Phase::Ready(layout) => layout.graph.as_ref(),
            _ => None,
        }
    }

    /// Id of the connection whose shape is under the pointer.
    #[must_use]
    pub fn hovered(&self) -> Option<&K> {
        let key = self.controller.hovered()?;
        self.graph()?.id(key.bundle)
    }
}

impl<K, S: Scene, H: Host> Timeline<K, S, H> {
    /// Unregisters from the host, drops any pending relayout and clears the
    /// scene. Later calls do nothing, and neither does any other method.
    pub fn unmount(&mut self) {
        let Some(id) = self.resize_listener.take() else {
            return;
        };
        self.host.remove_resize_listener(id);
        self.resize.cancel();
        // No leave event, but the host must not keep the hover cursor.
        if self.controller.reset().is_some() {
            self.host.set_cursor(Cursor::Default);
        }
        self.scene.clear();
        self.phase = Phase::Unmounted;
        debug!(listener = ?id, "unmounted timeline");
    }

    /// Returns `true` between mount and unmount.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.resize_listener.is_some()
    }

    /// Returns `true` while waiting for the element to get an area.
    #[must_use]
    pub fn is_deferred(&self) -> bool {
        matches!(self.phase, Phase::Deferred)
    }

    /// Scroll and zoom state, once laid out.
    #[must_use]
    pub fn viewport(&self) -> Option<&TimelineViewport> {
        match &self.phase {
            Phase::Ready(layout) => Some(&layout.viewport),
            _ => None,
        }
    }

    /// The visible window in percent of the canvas, once laid out.
    #[must_use]
    pub fn visible_range(&self) -> Option<VisibleRange> {
        self.viewport().map(TimelineViewport::visible_range)
    }

    /// The configuration the timeline was mounted with.
    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// The scene being drawn into.
    #[must_use]
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// The scene being drawn into, mutably.
    ///
    /// Lets hosts reach backend-specific housekeeping, such as trimming a
    /// recording scene's event log. Entries inserted by the timeline must not be
    /// removed or reordered through it.
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    /// The hosting element.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The hosting element, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<K, S: Scene, H: Host> Drop for Timeline<K, S, H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<K, S: Scene + Debug, H: Host + Debug> Debug for Timeline<K, S, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let phase = match &self.phase {
            Phase::Deferred => "deferred",
            Phase::Ready(_) => "ready",
            Phase::Unmounted => "unmounted",
        };
        f.debug_struct("Timeline")
            .field("phase", &phase)
            .field("viewport", &self.viewport())
            .field("connections", &self.connections.len())
            .field("scene", &self.scene)
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}
