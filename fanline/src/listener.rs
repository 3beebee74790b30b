// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Semantic events a timeline reports to its host.

use kurbo::Point;

use fanline_view::VisibleRange;

/// Receiver of timeline events.
///
/// Every method defaults to doing nothing, so implementors only override what
/// they care about. `()` is the listener that ignores everything.
pub trait TimelineListener<K> {
    /// A marker or curve of connection `id` was clicked.
    fn connection_click(&mut self, id: &K) {
        let _ = id;
    }

    /// The pointer entered a marker or curve of connection `id`.
    ///
    /// `point` is the pointer position in canvas space.
    fn connection_mouse_enter(&mut self, id: &K, point: Point) {
        let _ = (id, point);
    }

    /// The pointer left the shape of connection `id` it had entered.
    fn connection_mouse_leave(&mut self, id: &K) {
        let _ = id;
    }

    /// The visible window moved.
    fn chart_move(&mut self, range: VisibleRange) {
        let _ = range;
    }
}

impl<K> TimelineListener<K> for () {}

type IdCallback<K> = Box<dyn FnMut(&K)>;
type EnterCallback<K> = Box<dyn FnMut(&K, Point)>;
type RangeCallback = Box<dyn FnMut(VisibleRange)>;

/// A [`TimelineListener`] built from closures.
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use fanline::{Callbacks, TimelineListener};
///
/// let clicks = Rc::new(RefCell::new(Vec::new()));
/// let sink = clicks.clone();
/// let mut listener = Callbacks::new().on_connection_click(move |id: &u32| {
///     sink.borrow_mut().push(*id);
/// });
///
/// listener.connection_click(&7);
/// listener.connection_mouse_leave(&7); // no callback set, ignored
/// assert_eq!(*clicks.borrow(), [7]);
/// ```
pub struct Callbacks<K> {
    click: Option<IdCallback<K>>,
    enter: Option<EnterCallback<K>>,
    leave: Option<IdCallback<K>>,
    chart_move: Option<RangeCallback>,
}

impl<K> Default for Callbacks<K> {
    fn default() -> Self {
        Self {
            click: None,
            enter: None,
            leave: None,
            chart_move: None,
        }
    }
}

// Manual Debug impl since callbacks aren't Debug
impl<K> core::fmt::Debug for Callbacks<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Callbacks")
            .field("has_click", &self.click.is_some())
            .field("has_enter", &self.enter.is_some())
            .field("has_leave", &self.leave.is_some())
            .field("has_chart_move", &self.chart_move.is_some())
            .finish()
    }
}

impl<K> Callbacks<K> {
    /// Creates a listener with no callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the click callback.
    #[must_use]
    pub fn on_connection_click(mut self, callback: impl FnMut(&K) + 'static) -> Self {
        self.click = Some(Box::new(callback));
        self
    }

    /// Sets the hover-enter callback.
    #[must_use]
    pub fn on_connection_mouse_enter(
        mut self,
        callback: impl FnMut(&K, Point) + 'static,
    ) -> Self {
        self.enter = Some(Box::new(callback));
        self
    }

    /// Sets the hover-leave callback.
    #[must_use]
    pub fn on_connection_mouse_leave(mut self, callback: impl FnMut(&K) + 'static) -> Self {
        self.leave = Some(Box::new(callback));
        self
    }

    /// Sets the visible-range callback.
    #[must_use]
    pub fn on_chart_move(mut self, callback: impl FnMut(VisibleRange) + 'static) -> Self {
        self.chart_move = Some(Box::new(callback));
        self
    }
}

impl<K> TimelineListener<K> for Callbacks<K> {
    fn connection_click(&mut self, id: &K) {
        if let Some(callback) = &mut self.click {
            callback(id);
        }
    }

    fn connection_mouse_enter(&mut self, id: &K, point: Point) {
        if let Some(callback) = &mut self.enter {
            callback(id, point);
        }
    }

    fn connection_mouse_leave(&mut self, id: &K) {
        if let Some(callback) = &mut self.leave {
            callback(id);
        }
    }

    fn chart_move(&mut self, range: VisibleRange) {
        if let Some(callback) = &mut self.chart_move {
            callback(range);
        }
    }
}
