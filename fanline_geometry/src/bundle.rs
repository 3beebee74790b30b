// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphic bundles: construction and in-place updates.

use alloc::vec::Vec;

use fanline_view::TimelineViewport;
use fanline_view::coords::percent_to_value;
use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

use crate::connection::{
    Connection, displayable_amount, resolve_end_slot, resolve_start_position,
};
use crate::curve::Curve;
use crate::hit::{HitParams, HitScore, PreciseHitTest};
use crate::marker::Marker;
use crate::metrics::ShapeMetrics;

/// Names one shape inside a [`GraphicBundle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    /// The bundle's marker.
    Marker,
    /// The curve at the given index.
    Curve(usize),
}

/// Borrowed view of a single shape, as handed to a [`crate::Scene`].
#[derive(Clone, Copy, Debug)]
pub enum ShapeRef<'a> {
    /// A marker.
    Marker(&'a Marker),
    /// A curve.
    Curve(&'a Curve),
}

impl ShapeRef<'_> {
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
}

/// The shapes of one connection: a marker and one curve per end point.
///
/// A bundle keeps the resolved start position so that
/// [`GraphicBundle::update`] can reposition everything from a viewport alone.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphicBundle {
    /// Start position, clamped to `0..=100` percent.
    pub start_percent: f64,
    /// The origin marker.
    pub marker: Marker,
    /// Curves in end-point order.
    pub curves: SmallVec<[Curve; 4]>,
}

impl GraphicBundle {
    /// Builds fresh shapes for a connection.
    ///
    /// End positions are clamped to the slots that fit into the view; each curve
    /// ends at `scroll_left + percent_to_value(slot, view_width)`.
    pub fn build<K>(
        connection: &Connection<K>,
        viewport: &TimelineViewport,
        metrics: &ShapeMetrics,
    ) -> Self {
        let color = connection.color.unwrap_or(metrics.default_color);
        let start_percent = resolve_start_position(connection.start_point_x_position);
        let anchor_x = percent_to_value(start_percent, viewport.canvas_width());
        let visible = viewport.is_in_view(anchor_x);

        let marker = Marker {
            center: Point::new(anchor_x, metrics.top_offset + metrics.marker_size / 2.0),
            size: metrics.marker_size,
            corner_radius: metrics.marker_corner_radius(),
            fill: color,
            outline: metrics.marker_outline_color,
            outline_width: metrics.marker_outline_width,
            alpha: 1.0,
            visible,
        };

        let displayable = displayable_amount(viewport.view_width(), metrics.end_point_width);
        let curves = connection
            .end_points_x_positions
            .iter()
            .map(|&raw| {
                let slot = resolve_end_slot(raw, displayable);
                let mut curve = Curve {
                    start: Point::ZERO,
                    handle_out: Vec2::ZERO,
                    bend: Point::ZERO,
                    handle_in: Vec2::ZERO,
                    end: Point::ZERO,
                    end_offset: percent_to_value(slot, viewport.view_width()),
                    color,
                    stroke_width: metrics.curve_stroke_width,
                    alpha: 1.0,
                    visible,
                };
                place_curve(&mut curve, anchor_x, viewport, metrics);
                curve
            })
            .collect();

        Self {
            start_percent,
            marker,
            curves,
        }
    }

    /// Moves the existing shapes for the current viewport.
    ///
    /// Recomputes the anchor from the stored start position, recenters the
    /// marker, re-places every curve's control points and refreshes visibility.
    /// Alpha is left alone. This never allocates and is idempotent: calling it
    /// twice with the same viewport leaves the same geometry as calling it once.
    pub fn update(&mut self, viewport: &TimelineViewport, metrics: &ShapeMetrics) {
        let anchor_x = percent_to_value(self.start_percent, viewport.canvas_width());
        let visible = viewport.is_in_view(anchor_x);
        self.marker.recenter_x(anchor_x);
        self.marker.visible = visible;
        for curve in &mut self.curves {
            place_curve(curve, anchor_x, viewport, metrics);
            curve.visible = visible;
        }
    }

    /// Canvas-space x of the marker center and of every curve start.
    #[must_use]
    pub fn anchor_x(&self) -> f64 {
        self.marker.center.x
    }

    /// Whether the bundle is inside the visible window.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.marker.visible
    }

    /// Number of shapes: the marker plus every curve.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        1 + self.curves.len()
    }

    /// Iterates over every part, marker first.
    pub fn parts(&self) -> impl Iterator<Item = Part> + '_ {
        core::iter::once(Part::Marker).chain((0..self.curves.len()).map(Part::Curve))
    }

    /// Borrows one shape.
    #[must_use]
    pub fn shape(&self, part: Part) -> Option<ShapeRef<'_>> {
        match part {
            Part::Marker => Some(ShapeRef::Marker(&self.marker)),
            Part::Curve(idx) => self.curves.get(idx).map(ShapeRef::Curve),
        }
    }

    /// Sets the opacity of one shape. Unknown parts are ignored.
    pub fn set_alpha(&mut self, part: Part, alpha: f32) {
        match part {
            Part::Marker => self.marker.alpha = alpha,
            Part::Curve(idx) => {
                if let Some(curve) = self.curves.get_mut(idx) {
                    curve.alpha = alpha;
                }
            }
        }
    }

    /// Hit tests one visible shape. Hidden or unknown parts never hit.
    ///
    /// Points outside the shape's bounds, widened by the stroke tolerance, are
    /// rejected before the precise test.
    #[must_use]
    pub fn hit_test(&self, part: Part, pt: Point, params: &HitParams) -> Option<HitScore> {
        match self.shape(part)? {
            ShapeRef::Marker(marker) if marker.visible => {
                if !reaches(marker.bounding_box(), pt) {
                    return None;
                }
                marker.hit_test(pt, params)
            }
            ShapeRef::Curve(curve) if curve.visible => {
                let reach = params.stroke_tolerance;
                if !reaches(curve.bounding_box().inflate(reach, reach), pt) {
                    return None;
                }
                curve.hit_test(pt, params)
            }
            _ => None,
        }
    }
}

/// Builds one bundle per connection, in order.
pub fn build_bundles<K>(
    connections: &[Connection<K>],
    viewport: &TimelineViewport,
    metrics: &ShapeMetrics,
) -> Vec<GraphicBundle> {
    connections
        .iter()
        .map(|connection| GraphicBundle::build(connection, viewport, metrics))
        .collect()
}

/// Inclusive on every edge, unlike [`Rect::contains`].
fn reaches(bounds: Rect, pt: Point) -> bool {
    pt.x >= bounds.x0 && pt.x <= bounds.x1 && pt.y >= bounds.y0 && pt.y <= bounds.y1
}

fn place_curve(
    curve: &mut Curve,
    anchor_x: f64,
    viewport: &TimelineViewport,
    metrics: &ShapeMetrics,
) {
    let start = Point::new(anchor_x, metrics.curve_start_y());
    let end = Point::new(
        viewport.scroll_left() + curve.end_offset,
        metrics.curve_end_y(viewport.view_height()),
    );
    curve.set_points(start, end, metrics.label_gutter);
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Size;

    use super::*;

    fn viewport() -> TimelineViewport {
        TimelineViewport::new(Size::new(1000.0, 400.0), 25.0).unwrap()
    }

    #[test]
    fn end_to_end_scenario() {
        let vp = viewport();
        let metrics = ShapeMetrics::default();
        let bundle = GraphicBundle::build(&Connection::new("c1", 50.0, [10.0, 90.0]), &vp, &metrics);

        assert_eq!(vp.canvas_width(), 4000.0);
        assert_eq!(bundle.anchor_x(), 2000.0);
        assert_eq!(bundle.curves[0].end.x, 100.0);
        assert_eq!(bundle.curves[1].end.x, 900.0);
        assert_eq!(bundle.curves[0].start, Point::new(2000.0, 70.0));
        assert_eq!(bundle.curves[0].end.y, 340.0);
        // Anchor at 2000 is outside the first view.
        assert!(!bundle.is_visible());
    }

    #[test]
    fn curves_follow_scroll_offset() {
        let mut vp = viewport();
        vp.scroll_view(1800.0);
        let metrics = ShapeMetrics::default();
        let bundle = GraphicBundle::build(&Connection::new(1, 50.0, [10.0]), &vp, &metrics);
        assert_eq!(bundle.curves[0].end.x, 1900.0);
        assert!(bundle.is_visible());
        assert!(bundle.curves[0].visible);
    }

    #[test]
    fn color_falls_back_to_default() {
        let vp = viewport();
        let metrics = ShapeMetrics::default();
        let plain = GraphicBundle::build(&Connection::new(1, 10.0, [1.0]), &vp, &metrics);
        assert_eq!(plain.marker.fill, metrics.default_color);
        assert_eq!(plain.curves[0].color, metrics.default_color);

        let red = peniko::Color::from_rgb8(0xff, 0, 0);
        let tinted =
            GraphicBundle::build(&Connection::new(2, 10.0, [1.0]).with_color(red), &vp, &metrics);
        assert_eq!(tinted.marker.fill, red);
        assert_eq!(tinted.curves[0].color, red);
        assert_eq!(tinted.marker.outline, metrics.marker_outline_color);
    }

    #[test]
    fn overflowing_end_points_use_last_slot() {
        let vp = viewport();
        let metrics = ShapeMetrics {
            end_point_width: 20.0,
            ..ShapeMetrics::default()
        };
        // 1000 / 20 = 50 displayable slots.
        let bundle =
            GraphicBundle::build(&Connection::new(1, 10.0, [50.0, 500.0, -2.0]), &vp, &metrics);
        assert_eq!(bundle.curves[0].end_offset, percent_to_value(49.0, 1000.0));
        assert_eq!(bundle.curves[1].end_offset, percent_to_value(49.0, 1000.0));
        assert_eq!(bundle.curves[2].end_offset, 0.0);
    }

    #[test]
    fn zero_end_points_still_have_a_marker() {
        let vp = viewport();
        let bundle = GraphicBundle::build(
            &Connection::new(1, 10.0, Vec::<f64>::new()),
            &vp,
            &ShapeMetrics::default(),
        );
        assert!(bundle.curves.is_empty());
        assert_eq!(bundle.shape_count(), 1);
        assert_eq!(bundle.parts().collect::<Vec<_>>(), vec![Part::Marker]);
    }

    #[test]
    fn visibility_bounds_are_exclusive() {
        let metrics = ShapeMetrics::default();
        let mut vp = viewport();
        // Anchor at 10% of 4000 = 400.
        let connection = Connection::new(1, 10.0, [5.0]);

        vp.scroll_view(400.0);
        let mut bundle = GraphicBundle::build(&connection, &vp, &metrics);
        assert!(!bundle.is_visible(), "anchor == scroll_left is hidden");

        vp.scroll_view(399.0);
        bundle.update(&vp, &metrics);
        assert!(bundle.is_visible());

        vp.scroll_view(0.0);
        bundle.update(&vp, &metrics);
        assert!(bundle.is_visible());

        // Anchor at 25% of 4000 = 1000, the right edge of the first view.
        let edge = Connection::new(2, 25.0, [5.0]);
        let at_right_edge = GraphicBundle::build(&edge, &vp, &metrics);
        assert!(!at_right_edge.is_visible(), "anchor == scroll_left + view_width is hidden");
    }

    #[test]
    fn update_matches_fresh_build() {
        let metrics = ShapeMetrics {
            label_gutter: 30.0,
            ..ShapeMetrics::default()
        };
        let connection = Connection::new(1, 30.0, [3.0, 40.0, 77.0]);
        let mut vp = viewport();
        let mut bundle = GraphicBundle::build(&connection, &vp, &metrics);

        vp.scroll_view(1000.0);
        bundle.update(&vp, &metrics);
        assert_eq!(bundle, GraphicBundle::build(&connection, &vp, &metrics));
    }

    #[test]
    fn update_is_idempotent() {
        let metrics = ShapeMetrics::default();
        let connection = Connection::new(1, 30.0, [3.0, 40.0]);
        let mut vp = viewport();
        let mut bundle = GraphicBundle::build(&connection, &vp, &metrics);
        vp.scroll_view(1234.5);

        bundle.update(&vp, &metrics);
        let once = bundle.clone();
        bundle.update(&vp, &metrics);
        assert_eq!(bundle, once);
    }

    #[test]
    fn update_keeps_alpha() {
        let metrics = ShapeMetrics::default();
        let mut vp = viewport();
        let mut bundle = GraphicBundle::build(&Connection::new(1, 30.0, [3.0]), &vp, &metrics);
        bundle.set_alpha(Part::Curve(0), 0.2);
        vp.scroll_view(10.0);
        bundle.update(&vp, &metrics);
        assert_eq!(bundle.curves[0].alpha, 0.2);
    }

    #[test]
    fn hidden_shapes_are_not_hit() {
        let metrics = ShapeMetrics::default();
        let mut vp = viewport();
        let mut bundle = GraphicBundle::build(&Connection::new(1, 10.0, [5.0]), &vp, &metrics);
        let center = bundle.marker.center;
        let params = HitParams::default();
        assert!(bundle.hit_test(Part::Marker, center, &params).is_some());

        vp.scroll_view(2000.0);
        bundle.update(&vp, &metrics);
        assert!(bundle.hit_test(Part::Marker, center, &params).is_none());
        assert!(bundle.hit_test(Part::Curve(3), center, &params).is_none());
    }
}
