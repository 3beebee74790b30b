// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use peniko::color::palette;

/// Sizes, offsets and fallback colors used to lay out markers and curves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeMetrics {
    /// Side length of the marker square before rotation.
    pub marker_size: f64,
    /// Y coordinate of the top of the marker square.
    pub top_offset: f64,
    /// Distance between curve ends and the bottom of the view.
    pub bottom_offset: f64,
    /// Straight vertical segment reserved for a label at the end of each curve.
    ///
    /// Zero draws plain bezier curves.
    pub label_gutter: f64,
    /// Width of one end-point slot.
    pub end_point_width: f64,
    /// Stroke width of the marker outline.
    pub marker_outline_width: f64,
    /// Stroke width of curves.
    pub curve_stroke_width: f64,
    /// Fill and stroke color for connections without an override.
    pub default_color: Color,
    /// Marker outline color, usually the timeline background.
    pub marker_outline_color: Color,
}

impl ShapeMetrics {
    /// Corner radius of the marker square.
    #[must_use]
    pub fn marker_corner_radius(&self) -> f64 {
        self.marker_size / 4.0
    }

    /// Y coordinate where curves leave their marker.
    #[must_use]
    pub fn curve_start_y(&self) -> f64 {
        self.top_offset + self.marker_size
    }

    /// Y coordinate of curve ends for a view of the given height.
    #[must_use]
    pub fn curve_end_y(&self, view_height: f64) -> f64 {
        view_height - self.bottom_offset
    }
}

impl Default for ShapeMetrics {
    fn default() -> Self {
        Self {
            marker_size: 10.0,
            top_offset: 60.0,
            bottom_offset: 60.0,
            label_gutter: 0.0,
            end_point_width: 10.0,
            marker_outline_width: 1.5,
            curve_stroke_width: 1.3,
            default_color: Color::from_rgb8(0xbd, 0xbd, 0xbd),
            marker_outline_color: palette::css::WHITE,
        }
    }
}
