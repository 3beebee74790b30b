// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale conversions between percentages, pixels, canvas space and view space.
//!
//! Everything else in Fanline consumes values that already went through one of
//! these functions. `total` and `zoom_factor` are always positive measured or
//! configured quantities; passing zero is a caller bug.

/// Returns `part` percent of `total`.
#[must_use]
pub fn percent_to_value(part: f64, total: f64) -> f64 {
    total * part / 100.0
}

/// Returns the percentage of `total` that `value` represents.
#[must_use]
pub fn value_to_percent(value: f64, total: f64) -> f64 {
    value * 100.0 / total
}

/// Scales a view-space length up to canvas space.
///
/// A zoom factor of `25` makes the canvas four times wider than the view.
#[must_use]
pub fn to_canvas_proportions(a: f64, zoom_factor: f64) -> f64 {
    a * (100.0 / zoom_factor)
}

/// Scales a canvas-space length down to view space.
///
/// Inverse of [`to_canvas_proportions`].
#[must_use]
pub fn to_view_proportions(a: f64, zoom_factor: f64) -> f64 {
    a / (100.0 / zoom_factor)
}
