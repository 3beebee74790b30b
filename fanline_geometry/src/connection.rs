// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connection records and the normalization of their positions.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use peniko::Color;

/// One connection of the timeline: an origin fanning out to end points.
///
/// Positions are lenient. Out-of-range values are clamped when the connection is
/// resolved against a viewport rather than rejected.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection<K> {
    /// Caller-supplied identifier, unique per timeline.
    pub id: K,
    /// Color override; the configured default is used when absent.
    pub color: Option<Color>,
    /// Origin position, in percent of the canvas width (`0..=100`).
    pub start_point_x_position: f64,
    /// End slots, one curve each.
    pub end_points_x_positions: Vec<f64>,
}

impl<K> Connection<K> {
    /// Creates a connection without a color override.
    pub fn new(
        id: K,
        start_point_x_position: f64,
        end_points_x_positions: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            id,
            color: None,
            start_point_x_position,
            end_points_x_positions: end_points_x_positions.into_iter().collect(),
        }
    }

    /// Sets the color override.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Number of end-point slots that fit in a view of the given width.
///
/// This is `floor(view_width / end_point_width)`, but never less than one so that
/// every end point resolves to some slot even on very narrow views.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    reason = "slot counts are bounded by the view width in pixels"
)]
pub fn displayable_amount(view_width: f64, end_point_width: f64) -> usize {
    if !(end_point_width > 0.0) || !view_width.is_finite() {
        return 1;
    }
    let slots = (view_width / end_point_width).floor();
    if !(slots >= 1.0) {
        return 1;
    }
    slots as usize
}

/// Clamps a raw end position to the displayable slots.
///
/// Entries at or beyond `displayable` collapse to the last slot, negative
/// entries to the first one, and non-finite entries to slot zero.
#[must_use]
pub fn resolve_end_slot(raw: f64, displayable: usize) -> f64 {
    if !raw.is_finite() {
        return 0.0;
    }
    let last = displayable.saturating_sub(1) as f64;
    raw.clamp(0.0, last)
}

/// Clamps a raw start position to `0..=100` percent.
#[must_use]
pub fn resolve_start_position(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
