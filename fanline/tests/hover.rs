// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover highlighting: dimming, raising partners, cursor changes and the
//! enter/leave events.

mod common;

use common::{Event, Fixture, c1, mount};
use fanline::{Connection, Cursor, Part, Present, ShapeKey, VisibleRange};
use kurbo::Point;

/// Two connections with their markers at 2000 and 1800, scrolled so that both
/// are on screen at view x 500 and 300.
fn two_connections() -> Fixture {
    let mut fx = mount(vec![c1(), Connection::new("c2", 45.0, [20.0])]);
    fx.timeline.scroll_view(1500.0);
    fx.events.take();
    fx
}

fn alphas(fx: &Fixture) -> Vec<(ShapeKey, f32)> {
    let graph = fx.timeline.graph().unwrap();
    let mut alphas: Vec<_> = graph
        .draw_order()
        .iter()
        .map(|&key| {
            let handle = graph.handle(key).unwrap();
            let alpha = fx.timeline.scene().get(handle).unwrap().alpha();
            (key, alpha)
        })
        .collect();
    alphas.sort_by_key(|(key, _)| {
        let part = match key.part {
            Part::Marker => 0,
            Part::Curve(index) => index + 1,
        };
        (key.bundle, part)
    });
    alphas
}

fn scene_order(fx: &Fixture) -> Vec<ShapeKey> {
    let graph = fx.timeline.graph().unwrap();
    fx.timeline
        .scene()
        .draw_order()
        .map(|handle| graph.key_of(handle).unwrap())
        .collect()
}

#[test]
fn hovering_a_marker_highlights_its_connection() {
    let mut fx = two_connections();

    fx.timeline.pointer_move(Point::new(500.0, 65.0));

    assert_eq!(
        fx.events.take(),
        [Event::Enter("c1", Point::new(2000.0, 65.0))]
    );
    assert_eq!(fx.timeline.hovered(), Some(&"c1"));
    assert_eq!(fx.host.cursor(), Cursor::Pointer);
    assert_eq!(
        alphas(&fx),
        [
            (ShapeKey::marker(0), 1.0),
            (ShapeKey::curve(0, 0), 1.0),
            (ShapeKey::curve(0, 1), 1.0),
            (ShapeKey::marker(1), 0.2),
            (ShapeKey::curve(1, 0), 0.2),
        ]
    );
    // The marker's curves are raised above everything else.
    assert_eq!(
        scene_order(&fx),
        [
            ShapeKey::marker(0),
            ShapeKey::curve(1, 0),
            ShapeKey::marker(1),
            ShapeKey::curve(0, 0),
            ShapeKey::curve(0, 1),
        ]
    );
    assert_eq!(scene_order(&fx), fx.timeline.graph().unwrap().draw_order());
    assert_eq!(
        fx.timeline.scene().presents().last(),
        Some(Present::Update)
    );
}

#[test]
fn hovering_a_curve_raises_its_marker() {
    let mut fx = two_connections();

    // Midpoint of c1's first curve, from (2000, 70) down to (1600, 340).
    fx.timeline.pointer_move(Point::new(300.0, 205.0));

    assert_eq!(
        fx.events.take(),
        [Event::Enter("c1", Point::new(1800.0, 205.0))]
    );
    assert_eq!(
        alphas(&fx),
        [
            (ShapeKey::marker(0), 1.0),
            (ShapeKey::curve(0, 0), 1.0),
            (ShapeKey::curve(0, 1), 0.2),
            (ShapeKey::marker(1), 0.2),
            (ShapeKey::curve(1, 0), 0.2),
        ]
    );
    assert_eq!(scene_order(&fx).last(), Some(&ShapeKey::marker(0)));
}

#[test]
fn moving_between_shapes_leaves_then_enters() {
    let mut fx = two_connections();

    fx.timeline.pointer_move(Point::new(500.0, 65.0));
    fx.timeline.pointer_move(Point::new(501.0, 66.0));
    fx.timeline.pointer_move(Point::new(300.0, 65.0));

    assert_eq!(
        fx.events.take(),
        [
            Event::Enter("c1", Point::new(2000.0, 65.0)),
            Event::Leave("c1"),
            Event::Enter("c2", Point::new(1800.0, 65.0)),
        ]
    );
    assert_eq!(fx.timeline.hovered(), Some(&"c2"));
}

#[test]
fn leaving_restores_full_opacity() {
    let mut fx = two_connections();

    fx.timeline.pointer_move(Point::new(500.0, 65.0));
    fx.timeline.pointer_move(Point::new(700.0, 20.0));

    assert_eq!(
        fx.events.take(),
        [
            Event::Enter("c1", Point::new(2000.0, 65.0)),
            Event::Leave("c1"),
        ]
    );
    assert!(alphas(&fx).iter().all(|(_, alpha)| *alpha == 1.0));
    let graph = fx.timeline.graph().unwrap();
    assert!(graph.bundles().iter().all(|bundle| {
        bundle.marker.alpha == 1.0 && bundle.curves.iter().all(|c| c.alpha == 1.0)
    }));
    assert_eq!(fx.host.cursor(), Cursor::Default);
    assert_eq!(fx.timeline.hovered(), None);
}

#[test]
fn pointer_leaving_the_element_leaves_the_shape() {
    let mut fx = two_connections();
    fx.timeline.pointer_move(Point::new(300.0, 65.0));
    let presents = fx.timeline.scene().presents().count();

    fx.timeline.pointer_leave();

    assert_eq!(
        fx.events.take(),
        [
            Event::Enter("c2", Point::new(1800.0, 65.0)),
            Event::Leave("c2"),
        ]
    );
    assert_eq!(fx.host.cursor(), Cursor::Default);
    assert!(alphas(&fx).iter().all(|(_, alpha)| *alpha == 1.0));
    assert_eq!(fx.timeline.scene().presents().count(), presents + 1);

    // Nothing hovered: nothing to repaint.
    fx.timeline.pointer_leave();
    assert_eq!(fx.timeline.scene().presents().count(), presents + 1);
}

#[test]
fn hidden_shapes_are_not_pickable() {
    let mut fx = mount(vec![c1()]);
    // At scroll 0, c1's first curve ends at (100, 340) but its anchor is off
    // screen, so the whole connection is hidden.
    fx.timeline.pointer_move(Point::new(100.0, 340.0));
    assert!(fx.events.take().is_empty());
    assert_eq!(fx.timeline.hovered(), None);
}

#[test]
fn hover_is_suspended_while_dragging() {
    let mut fx = two_connections();

    fx.timeline.pointer_down(Point::new(500.0, 20.0));
    fx.timeline.pointer_move(Point::new(500.0, 65.0));
    assert_eq!(fx.timeline.hovered(), None);
    assert_eq!(fx.host.cursor(), Cursor::Default);

    fx.timeline.pointer_up(Point::new(500.0, 65.0));
    assert_eq!(
        fx.events.take(),
        [
            Event::Move(VisibleRange::new(37.5, 62.5)),
            Event::Enter("c1", Point::new(2000.0, 65.0)),
        ]
    );
    assert_eq!(fx.timeline.hovered(), Some(&"c1"));
}

#[test]
fn replacing_data_leaves_the_hovered_shape() {
    let mut fx = two_connections();
    fx.timeline.pointer_move(Point::new(500.0, 65.0));

    fx.timeline
        .set_connections(vec![c1(), Connection::new("c3", 60.0, [5.0])]);

    assert_eq!(
        fx.events.take(),
        [
            Event::Enter("c1", Point::new(2000.0, 65.0)),
            Event::Leave("c1"),
        ]
    );
    assert_eq!(fx.timeline.hovered(), None);
    assert_eq!(fx.host.cursor(), Cursor::Default);
    assert!(alphas(&fx).iter().all(|(_, alpha)| *alpha == 1.0));
}
