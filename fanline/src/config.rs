// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timeline configuration.

use fanline_geometry::{HitParams, ShapeMetrics};
use peniko::Color;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunable constants of a timeline.
///
/// Every field has a default, so a serialized configuration only needs to name
/// what it changes. Colors are written as CSS color strings (`"#bdbdbd"`,
/// `"white"`, `"rgb(10 20 30)"`) and read back as hex.
///
/// ```rust
/// use fanline::TimelineConfig;
///
/// let config = TimelineConfig {
///     zoom_factor: 50.0,
///     ..TimelineConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// assert_eq!(config.marker_size, 10.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Percentage of the canvas width one view width covers, in `(0, 100]`.
    pub zoom_factor: f64,
    /// Opacity of shapes that are dimmed while another connection is hovered.
    pub hover_alpha: f32,
    /// Color of connections that do not specify one.
    #[serde(with = "css_color")]
    pub default_color: Color,
    /// Marker outline color; normally the timeline background.
    #[serde(with = "css_color")]
    pub marker_outline_color: Color,
    /// Side of the marker square before rotation.
    pub marker_size: f64,
    /// Distance from the top of the view to the marker box.
    pub top_offset: f64,
    /// Distance from the bottom of the view to the curve ends.
    pub bottom_offset: f64,
    /// Height of the straight label segment at the end of every curve.
    pub max_name_width: f64,
    /// Width of one end-point slot on the bottom row.
    pub end_point_width: f64,
    /// Total number of distinct end-point slots in the data. Informational.
    pub end_point_total_amount: usize,
    /// Trailing throttle window for resize relayouts, in milliseconds.
    pub resize_throttle_ms: u64,
    /// Maximum pointer travel between press and release for a click, in pixels.
    pub click_slop: f64,
    /// Extra pick radius around curve strokes, in pixels.
    pub hit_tolerance: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        let metrics = ShapeMetrics::default();
        Self {
            zoom_factor: 25.0,
            hover_alpha: 0.2,
            default_color: metrics.default_color,
            marker_outline_color: metrics.marker_outline_color,
            marker_size: metrics.marker_size,
            top_offset: metrics.top_offset,
            bottom_offset: metrics.bottom_offset,
            max_name_width: metrics.label_gutter,
            end_point_width: metrics.end_point_width,
            end_point_total_amount: 0,
            resize_throttle_ms: 500,
            click_slop: 4.0,
            hit_tolerance: HitParams::default().stroke_tolerance,
        }
    }
}

impl TimelineConfig {
    /// Checks every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("zoom_factor", self.zoom_factor),
            ("hover_alpha", f64::from(self.hover_alpha)),
            ("marker_size", self.marker_size),
            ("top_offset", self.top_offset),
            ("bottom_offset", self.bottom_offset),
            ("max_name_width", self.max_name_width),
            ("end_point_width", self.end_point_width),
            ("click_slop", self.click_slop),
            ("hit_tolerance", self.hit_tolerance),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        if !(self.zoom_factor > 0.0 && self.zoom_factor <= 100.0) {
            return Err(ConfigError::ZoomFactor(self.zoom_factor));
        }
        if !(0.0..=1.0).contains(&self.hover_alpha) {
            return Err(ConfigError::HoverAlpha(self.hover_alpha));
        }
        for (field, value) in [
            ("marker_size", self.marker_size),
            ("end_point_width", self.end_point_width),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        for (field, value) in [
            ("top_offset", self.top_offset),
            ("bottom_offset", self.bottom_offset),
            ("max_name_width", self.max_name_width),
            ("click_slop", self.click_slop),
            ("hit_tolerance", self.hit_tolerance),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// Geometry constants for the shape builder.
    #[must_use]
    pub fn shape_metrics(&self) -> ShapeMetrics {
        ShapeMetrics {
            marker_size: self.marker_size,
            top_offset: self.top_offset,
            bottom_offset: self.bottom_offset,
            label_gutter: self.max_name_width,
            end_point_width: self.end_point_width,
            default_color: self.default_color,
            marker_outline_color: self.marker_outline_color,
            ..ShapeMetrics::default()
        }
    }

    /// Pick parameters for hit testing.
    #[must_use]
    pub fn hit_params(&self) -> HitParams {
        HitParams {
            stroke_tolerance: self.hit_tolerance,
        }
    }
}

mod css_color {
    use peniko::Color;
    use peniko::color::{Srgb, parse_color};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub(super) fn serialize<S: Serializer>(
        color: &Color,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let rgba = color.to_rgba8();
        let hex = if rgba.a == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
        };
        serializer.serialize_str(&hex)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Color, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_color(&text)
            .map(|color| color.to_alpha_color::<Srgb>())
            .map_err(|err| de::Error::custom(format_args!("invalid color {text:?}: {err}")))
    }
}
