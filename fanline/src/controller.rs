// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer, wheel and hover handling.
//!
//! Positions passed to the pointer methods are in view space (relative to the
//! element's top-left corner). Hit testing runs in canvas space against the
//! timeline's own geometry, top-most shape first.
//!
//! While a button is held the pointer scrolls the timeline and hover
//! transitions are suspended; they resume on release. A press and release on
//! the same shape that moved no more than the click slop is a click.

use core::fmt::Debug;
use core::hash::Hash;

use fanline_event_state::click::{ClickResult, ClickState};
use fanline_event_state::drag::DragPhase;
use fanline_event_state::hover::HoverState;
use fanline_geometry::{Present, Scene};
use fanline_view::coords::percent_to_value;
use fanline_view::{ScrollEdge, VisibleRange};
use kurbo::{Point, Vec2};
use tracing::trace;

use crate::graph::ShapeKey;
use crate::host::{Cursor, Host};
use crate::timeline::{Layout, Phase, Timeline};

/// Interaction state of one timeline.
#[derive(Clone, Debug)]
pub(crate) struct Controller {
    drag: DragPhase,
    hover: HoverState<ShapeKey>,
    click: ClickState<ShapeKey>,
}

impl Controller {
    pub(crate) fn new(click_slop: f64) -> Self {
        Self {
            drag: DragPhase::Idle,
            hover: HoverState::new(),
            click: ClickState::new(click_slop),
        }
    }

    pub(crate) fn hovered(&self) -> Option<ShapeKey> {
        self.hover.current().copied()
    }

    /// Ends any drag or pending click and forgets the hovered shape, returning it.
    pub(crate) fn reset(&mut self) -> Option<ShapeKey> {
        self.drag.cancel();
        self.click.cancel();
        self.hover.clear()
    }
}

impl<K, S, H> Timeline<K, S, H>
where
    K: Clone + Eq + Hash + Debug,
    S: Scene,
    H: Host,
{
    /// A button went down at `pos`.
    pub fn pointer_down(&mut self, pos: Point) {
        let Some((_, target)) = self.pick(pos) else {
            return;
        };
        trace!(?pos, ?target, "pointer down");
        self.controller.click.on_down(target, pos);
        self.controller.drag.press(pos);
    }

    /// The pointer moved to `pos`.
    ///
    /// Dragging scrolls by the horizontal movement, in the opposite direction:
    /// pulling the content left reveals what lies to the right.
    pub fn pointer_move(&mut self, pos: Point) {
        let Some(scroll_left) = self.viewport().map(|v| v.scroll_left()) else {
            return;
        };
        if let Some(delta) = self.controller.drag.drag_to(pos) {
            self.scroll_view(scroll_left - delta.x);
            return;
        }
        if let Some((canvas, target)) = self.pick(pos) {
            self.update_hover(target, canvas);
        }
    }

    /// The button went up at `pos`.
    pub fn pointer_up(&mut self, pos: Point) {
        let Some((canvas, target)) = self.pick(pos) else {
            return;
        };
        let was_dragging = self.controller.drag.release(pos).is_some();
        if let ClickResult::Click(key) = self.controller.click.on_up(target.as_ref(), pos) {
            let id = self.graph().and_then(|graph| graph.id(key.bundle)).cloned();
            if let Some(id) = id {
                trace!(?id, "connection click");
                self.listener.connection_click(&id);
            }
        }
        if was_dragging {
            self.update_hover(target, canvas);
        }
    }

    /// The pointer left the element. Ends any drag and leaves any hovered shape.
    pub fn pointer_leave(&mut self) {
        if self.reset_interaction() {
            self.scene.present(Present::Update);
        }
    }

    /// Wheel or trackpad scroll; only the horizontal component is used.
    pub fn wheel(&mut self, delta: Vec2) {
        if let Some(scroll_left) = self.viewport().map(|v| v.scroll_left()) {
            self.scroll_view(scroll_left + delta.x);
        }
    }

    /// Scrolls to `initial_scroll_left`, clamped to the canvas.
    ///
    /// A clamped request re-centers the scene view at that extreme, an in-range
    /// one scrolls it by the difference. Either way the listener learns the new
    /// visible range and every shape is moved in place.
    pub fn scroll_view(&mut self, initial_scroll_left: f64) {
        let Phase::Ready(layout) = &mut self.phase else {
            return;
        };
        let outcome = layout.viewport.scroll_view(initial_scroll_left);
        match outcome.edge {
            ScrollEdge::Start | ScrollEdge::End => {
                self.scene.set_view_center(layout.viewport.view_center());
            }
            ScrollEdge::Within => {
                self.scene
                    .scroll_view_by(Vec2::new(outcome.scroll_left - outcome.previous, 0.0));
            }
        }
        let range = layout.viewport.visible_range();
        trace!(
            requested = initial_scroll_left,
            scroll_left = outcome.scroll_left,
            edge = ?outcome.edge,
            "scrolled"
        );
        self.listener.chart_move(range);
        self.redraw();
    }

    /// Scrolls so the window starts at `range.a` percent of the canvas.
    pub fn set_visible_range(&mut self, range: VisibleRange) {
        if let Some(canvas_width) = self.viewport().map(|v| v.canvas_width()) {
            self.scroll_view(percent_to_value(range.a, canvas_width));
        }
    }

    /// Returns `true` while a button is held over the timeline.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.controller.drag.is_dragging()
    }

    /// Ends any drag or pending click and leaves the hovered shape.
    ///
    /// Returns `true` if a hovered shape was left.
    pub(crate) fn reset_interaction(&mut self) -> bool {
        match self.controller.reset() {
            Some(key) => {
                self.hover_leave(key);
                true
            }
            None => false,
        }
    }

    /// Canvas position and top-most shape under a view-space position.
    ///
    /// `None` until the timeline has drawn.
    fn pick(&self, pos: Point) -> Option<(Point, Option<ShapeKey>)> {
        let Phase::Ready(layout) = &self.phase else {
            return None;
        };
        let graph = layout.graph.as_ref()?;
        let canvas = layout.viewport.view_to_canvas(pos);
        Some((canvas, graph.hit_test(canvas, &self.hit_params)))
    }

    fn update_hover(&mut self, target: Option<ShapeKey>, canvas: Point) {
        let transition = self.controller.hover.update(target);
        if transition.is_empty() {
            return;
        }
        if let Some(key) = transition.leave {
            self.hover_leave(key);
        }
        if let Some(key) = transition.enter {
            self.hover_enter(key, canvas);
        }
        self.scene.present(Present::Update);
    }

    /// Dims everything except the hovered shape and its partners, which are
    /// raised to the front.
    fn hover_enter(&mut self, key: ShapeKey, canvas: Point) {
        let Phase::Ready(Layout {
            graph: Some(graph), ..
        }) = &mut self.phase
        else {
            return;
        };
        graph.set_all_alpha(self.config.hover_alpha, &mut self.scene);
        graph.set_alpha(key, 1.0, &mut self.scene);
        for partner in graph.related(key) {
            graph.set_alpha(partner, 1.0, &mut self.scene);
            graph.bring_to_front(partner, &mut self.scene);
        }
        let id = graph.id(key.bundle).cloned();

        self.host.set_cursor(Cursor::Pointer);
        if let Some(id) = id {
            trace!(?id, ?key, x = canvas.x, y = canvas.y, "hover enter");
            self.listener.connection_mouse_enter(&id, canvas);
        }
    }

    fn hover_leave(&mut self, key: ShapeKey) {
        let id = match &mut self.phase {
            Phase::Ready(Layout {
                graph: Some(graph), ..
            }) => {
                graph.set_all_alpha(1.0, &mut self.scene);
                graph.id(key.bundle).cloned()
            }
            _ => None,
        };

        self.host.set_cursor(Cursor::Default);
        if let Some(id) = id {
            trace!(?id, ?key, "hover leave");
            self.listener.connection_mouse_leave(&id);
        }
    }
}
