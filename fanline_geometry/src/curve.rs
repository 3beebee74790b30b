// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The S-shaped curve from a marker to one end point.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`
use kurbo::{BezPath, CubicBez, Line, ParamCurveExtrema, ParamCurveNearest, Point, Rect, Vec2};
use peniko::Color;

use crate::hit::{HitKind, HitParams, HitScore, PreciseHitTest};

const NEAREST_ACCURACY: f64 = 1e-3;

/// A connection curve with vertical tangents at both ends.
///
/// The curve is stored as control points so that scrolling can move them in
/// place:
///
/// - `start` with `handle_out` leaves the marker straight down,
/// - `bend` with `handle_in` arrives at the bottom row straight down,
/// - `end` closes an optional straight label segment below `bend`.
///
/// Without a label gutter `bend == end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Curve {
    /// Anchor under the marker, in canvas space.
    pub start: Point,
    /// Outgoing tangent at `start`.
    pub handle_out: Vec2,
    /// End of the bezier part.
    pub bend: Point,
    /// Incoming tangent at `bend`.
    pub handle_in: Vec2,
    /// Destination on the bottom row.
    pub end: Point,
    /// Destination x in view space, before adding the scroll offset.
    pub end_offset: f64,
    /// Stroke color.
    pub color: Color,
    /// Stroke width.
    pub stroke_width: f64,
    /// Opacity multiplier.
    pub alpha: f32,
    /// Whether the curve is drawn and pickable.
    pub visible: bool,
}

impl Curve {
    /// Places every control point for a curve from `start` to `end`.
    ///
    /// The bezier stops `gutter` pixels above `end`; the tangent handles are half
    /// of the bezier's vertical span, pointing down at `start` and up at `bend`.
    pub fn set_points(&mut self, start: Point, end: Point, gutter: f64) {
        let bend = Point::new(end.x, end.y - gutter);
        let half_span = (bend.y - start.y) / 2.0;
        self.start = start;
        self.handle_out = Vec2::new(0.0, half_span);
        self.bend = bend;
        self.handle_in = Vec2::new(0.0, -half_span);
        self.end = end;
    }

    /// The bezier part of the curve.
    #[must_use]
    pub fn cubic(&self) -> CubicBez {
        CubicBez::new(
            self.start,
            self.start + self.handle_out,
            self.bend + self.handle_in,
            self.bend,
        )
    }

    /// The straight label segment, if a gutter is configured.
    #[must_use]
    pub fn label_segment(&self) -> Option<Line> {
        (self.bend != self.end).then(|| Line::new(self.bend, self.end))
    }

    /// Full centerline of the curve in canvas space.
    #[must_use]
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.curve_to(
            self.start + self.handle_out,
            self.bend + self.handle_in,
            self.bend,
        );
        if self.bend != self.end {
            path.line_to(self.end);
        }
        path
    }

    /// Conservative canvas-space bounds including the stroke.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        let half = self.stroke_width / 2.0;
        self.cubic()
            .bounding_box()
            .union_pt(self.end)
            .inflate(half, half)
    }

    /// Stroke color with the current alpha applied.
    #[must_use]
    pub fn effective_color(&self) -> Color {
        self.color.multiply_alpha(self.alpha)
    }
}

impl PreciseHitTest for Curve {
    fn hit_test(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        let mut distance_sq = self.cubic().nearest(pt, NEAREST_ACCURACY).distance_sq;
        if let Some(segment) = self.label_segment() {
            distance_sq = distance_sq.min(segment.nearest(pt, 0.).distance_sq);
        }
        let distance = distance_sq.sqrt();
        let limit = self.stroke_width / 2.0 + params.stroke_tolerance;
        if distance <= limit {
            Some(HitScore {
                distance,
                kind: HitKind::Stroke,
            })
        } else {
            None
        }
    }
}
