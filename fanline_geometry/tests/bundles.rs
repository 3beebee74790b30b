// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for bundle construction, updates and picking through the public API.

use fanline_geometry::{
    Connection, GraphicBundle, HitKind, HitParams, Part, PreciseHitTest, ShapeMetrics,
    build_bundles,
};
use fanline_view::TimelineViewport;
use kurbo::{Point, Shape, Size};

fn viewport() -> TimelineViewport {
    TimelineViewport::new(Size::new(1000.0, 400.0), 25.0).unwrap()
}

#[test]
fn updating_matches_building_at_every_scroll() {
    let metrics = ShapeMetrics::default();
    let connection = Connection::new("c1", 50.0, [10.0, 90.0, 400.0]);
    let mut viewport = viewport();
    let mut bundle = GraphicBundle::build(&connection, &viewport, &metrics);

    for scroll in [0.0, 999.5, 1000.0, 1500.0, 2000.0, 3000.0, 250.0] {
        viewport.scroll_view(scroll);
        bundle.update(&viewport, &metrics);
        let fresh = GraphicBundle::build(&connection, &viewport, &metrics);
        assert_eq!(bundle, fresh, "scroll {scroll}");
    }
}

#[test]
fn label_gutter_adds_a_straight_tail() {
    let metrics = ShapeMetrics {
        label_gutter: 40.0,
        ..ShapeMetrics::default()
    };
    let mut viewport = viewport();
    viewport.scroll_view(1500.0);
    let bundle = GraphicBundle::build(&Connection::new("c1", 50.0, [10.0]), &viewport, &metrics);
    let curve = &bundle.curves[0];

    assert_eq!(curve.end, Point::new(1600.0, 340.0));
    assert_eq!(curve.bend, Point::new(1600.0, 300.0));
    assert!(curve.label_segment().is_some());
    assert_eq!(curve.to_path().elements().len(), 3);

    // The tail is pickable like the rest of the curve.
    let hit = curve
        .hit_test(Point::new(1601.0, 320.0), &HitParams::default())
        .unwrap();
    assert_eq!(hit.kind, HitKind::Stroke);
    assert!(hit.distance <= 1.0 + 1e-9);
}

#[test]
fn marker_is_a_diamond() {
    let mut viewport = viewport();
    viewport.scroll_view(1500.0);
    let bundle = GraphicBundle::build(
        &Connection::new("c1", 50.0, [10.0]),
        &viewport,
        &ShapeMetrics::default(),
    );
    let marker = &bundle.marker;
    let params = HitParams::default();

    // Vertices of the diamond are on the axes; the square's corners are not.
    assert!(marker.hit_test(Point::new(2000.0, 60.5), &params).is_some());
    assert!(marker.hit_test(Point::new(2004.5, 65.0), &params).is_some());
    assert!(marker.hit_test(Point::new(2004.5, 60.5), &params).is_none());

    let bounds = marker.to_path().bounding_box();
    assert!(bounds.width() > marker.size && bounds.width() < marker.size * 1.5);
}

#[test]
fn stroke_tolerance_reaches_past_the_curve_bounds() {
    let mut viewport = viewport();
    viewport.scroll_view(1500.0);
    let bundle = GraphicBundle::build(
        &Connection::new("c1", 50.0, [10.0]),
        &viewport,
        &ShapeMetrics::default(),
    );
    let params = HitParams::default();
    // The curve arrives straight down at (1600, 340).
    assert_eq!(bundle.curves[0].end, Point::new(1600.0, 340.0));

    let beside = bundle
        .hit_test(Part::Curve(0), Point::new(1603.0, 340.0), &params)
        .unwrap();
    assert!((beside.distance - 3.0).abs() < 1e-3);
    let below = bundle
        .hit_test(Part::Curve(0), Point::new(1600.0, 343.5), &params)
        .unwrap();
    assert!((below.distance - 3.5).abs() < 1e-3);

    assert!(bundle.hit_test(Part::Curve(0), Point::new(1604.0, 340.0), &params).is_none());
    assert!(bundle.hit_test(Part::Curve(0), Point::new(1600.0, 400.0), &params).is_none());
    assert!(bundle.hit_test(Part::Marker, Point::new(1600.0, 340.0), &params).is_none());
}

#[test]
fn hidden_bundles_never_hit() {
    let metrics = ShapeMetrics::default();
    let bundles = build_bundles(
        &[
            Connection::new("seen", 10.0, [5.0]),
            Connection::new("off", 50.0, [5.0]),
        ],
        &viewport(),
        &metrics,
    );
    let params = HitParams::default();

    assert!(bundles[0].is_visible());
    assert!(bundles[0].hit_test(Part::Marker, bundles[0].marker.center, &params).is_some());
    assert!(!bundles[1].is_visible());
    assert!(bundles[1].hit_test(Part::Marker, bundles[1].marker.center, &params).is_none());
    assert!(bundles[1].hit_test(Part::Curve(7), Point::ZERO, &params).is_none());
}
