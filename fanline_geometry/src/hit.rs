// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry-level precise hit testing.
//!
//! Hit tests run in canvas space against the shapes' own geometry. They do not
//! look at visibility; callers skip hidden shapes before asking.

use kurbo::Point;

/// Parameters that widen or narrow hit tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitParams {
    /// Extra distance added to half the stroke width when picking strokes.
    pub stroke_tolerance: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            stroke_tolerance: 3.0,
        }
    }
}

/// How a point hit a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitKind {
    /// Inside a filled area.
    Fill,
    /// Within reach of a stroke.
    Stroke,
}

/// Result of a successful hit test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitScore {
    /// Distance from the query point to the shape; zero inside fills.
    pub distance: f64,
    /// What was hit.
    pub kind: HitKind,
}

/// Shapes that can answer point queries.
pub trait PreciseHitTest {
    /// Returns a score if `pt` hits the shape.
    fn hit_test(&self, pt: Point, params: &HitParams) -> Option<HitScore>;
}
