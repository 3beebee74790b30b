// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for timeline integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]
#![allow(
    dead_code,
    reason = "Each test binary uses a different subset of the helpers."
)]

use std::cell::RefCell;
use std::rc::Rc;

use fanline::{
    Connection, Cursor, Host, ListenerId, Timeline, TimelineListener, TimelineProps,
    VisibleRange,
};
use fanline_scene_ref::RecordingScene;
use kurbo::{Point, Size};

pub(crate) type TestTimeline = Timeline<&'static str, RecordingScene, TestHost>;

#[derive(Debug, Default)]
pub(crate) struct Element {
    pub(crate) size: Size,
    pub(crate) next_id: u64,
    pub(crate) listeners: Vec<ListenerId>,
    pub(crate) removed: Vec<ListenerId>,
    pub(crate) cursor: Cursor,
}

/// A host element whose state outlives the timeline that owns it.
#[derive(Clone, Debug, Default)]
pub(crate) struct TestHost(pub(crate) Rc<RefCell<Element>>);

impl TestHost {
    pub(crate) fn new(size: Size) -> Self {
        let host = Self::default();
        host.set_size(size);
        host
    }

    pub(crate) fn set_size(&self, size: Size) {
        self.0.borrow_mut().size = size;
    }

    pub(crate) fn cursor(&self) -> Cursor {
        self.0.borrow().cursor
    }

    pub(crate) fn listeners(&self) -> Vec<ListenerId> {
        self.0.borrow().listeners.clone()
    }

    pub(crate) fn removed(&self) -> Vec<ListenerId> {
        self.0.borrow().removed.clone()
    }
}

impl Host for TestHost {
    fn measure(&self) -> Size {
        self.0.borrow().size
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        let mut element = self.0.borrow_mut();
        element.next_id += 1;
        let id = ListenerId(element.next_id);
        element.listeners.push(id);
        id
    }

    fn remove_resize_listener(&mut self, id: ListenerId) {
        let mut element = self.0.borrow_mut();
        element.listeners.retain(|l| *l != id);
        element.removed.push(id);
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.0.borrow_mut().cursor = cursor;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Event {
    Click(&'static str),
    Enter(&'static str, Point),
    Leave(&'static str),
    Move(VisibleRange),
}

/// Listener that logs every event into a shared vector.
#[derive(Clone, Debug, Default)]
pub(crate) struct Recorder(pub(crate) Rc<RefCell<Vec<Event>>>);

impl Recorder {
    pub(crate) fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl TimelineListener<&'static str> for Recorder {
    fn connection_click(&mut self, id: &&'static str) {
        self.0.borrow_mut().push(Event::Click(*id));
    }

    fn connection_mouse_enter(&mut self, id: &&'static str, point: Point) {
        self.0.borrow_mut().push(Event::Enter(*id, point));
    }

    fn connection_mouse_leave(&mut self, id: &&'static str) {
        self.0.borrow_mut().push(Event::Leave(*id));
    }

    fn chart_move(&mut self, range: VisibleRange) {
        self.0.borrow_mut().push(Event::Move(range));
    }
}

pub(crate) struct Fixture {
    pub(crate) timeline: TestTimeline,
    pub(crate) host: TestHost,
    pub(crate) events: Recorder,
}

/// Mounts `connections` into a 1000x400 element at zoom 25 (canvas 4000 wide).
pub(crate) fn mount(connections: Vec<Connection<&'static str>>) -> Fixture {
    mount_with(TimelineProps::new(connections), Size::new(1000.0, 400.0))
}

pub(crate) fn mount_with(props: TimelineProps<&'static str>, size: Size) -> Fixture {
    let host = TestHost::new(size);
    let events = Recorder::default();
    let timeline = Timeline::mount(
        props.with_listener(events.clone()),
        RecordingScene::default(),
        host.clone(),
    )
    .expect("default config is valid");
    Fixture {
        timeline,
        host,
        events,
    }
}

/// Shared scenario: one connection in the middle of the canvas.
pub(crate) fn c1() -> Connection<&'static str> {
    Connection::new("c1", 50.0, [10.0, 90.0])
}
