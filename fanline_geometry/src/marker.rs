// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The diamond marking a connection's origin.

use core::f64::consts::FRAC_PI_4;

use kurbo::{Affine, BezPath, Point, Rect, RoundedRect, Shape, Size};
use peniko::Color;

use crate::hit::{HitKind, HitParams, HitScore, PreciseHitTest};

const PATH_TOLERANCE: f64 = 0.1;

/// A rounded square rotated by 45 degrees about its center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Center of the square in canvas space.
    pub center: Point,
    /// Side length before rotation.
    pub size: f64,
    /// Corner radius of the square.
    pub corner_radius: f64,
    /// Fill color.
    pub fill: Color,
    /// Outline color.
    pub outline: Color,
    /// Outline stroke width.
    pub outline_width: f64,
    /// Opacity multiplier applied to fill and outline.
    pub alpha: f32,
    /// Whether the marker is drawn and pickable.
    pub visible: bool,
}

impl Marker {
    /// The unrotated rounded square.
    #[must_use]
    pub fn rounded_rect(&self) -> RoundedRect {
        let rect = Rect::from_center_size(self.center, Size::new(self.size, self.size));
        RoundedRect::from_rect(rect, self.corner_radius)
    }

    /// Rotation that turns the square into a diamond.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::rotate_about(FRAC_PI_4, self.center)
    }

    /// Outline of the diamond in canvas space.
    #[must_use]
    pub fn to_path(&self) -> BezPath {
        self.transform() * self.rounded_rect().to_path(PATH_TOLERANCE)
    }

    /// Conservative canvas-space bounds of the diamond.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        self.transform()
            .transform_rect_bbox(self.rounded_rect().rect())
            .inflate(self.outline_width / 2.0, self.outline_width / 2.0)
    }

    /// Fill color with the current alpha applied.
    #[must_use]
    pub fn effective_fill(&self) -> Color {
        self.fill.multiply_alpha(self.alpha)
    }

    /// Outline color with the current alpha applied.
    #[must_use]
    pub fn effective_outline(&self) -> Color {
        self.outline.multiply_alpha(self.alpha)
    }

    /// Moves the marker horizontally so that it is centered on `x`.
    pub fn recenter_x(&mut self, x: f64) {
        self.center.x = x;
    }
}

impl PreciseHitTest for Marker {
    fn hit_test(&self, pt: Point, _params: &HitParams) -> Option<HitScore> {
        let local = self.transform().inverse() * pt;
        if self.rounded_rect().contains(local) {
            Some(HitScore {
                distance: 0.0,
                kind: HitKind::Fill,
            })
        } else {
            None
        }
    }
}
