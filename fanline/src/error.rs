// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// A [`TimelineConfig`](crate::TimelineConfig) value that cannot be used.
///
/// Returned by [`TimelineConfig::validate`](crate::TimelineConfig::validate) and
/// therefore by [`Timeline::mount`](crate::Timeline::mount). Every variant names
/// the offending field.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A numeric field is NaN or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NonFinite {
        /// Name of the field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// The zoom factor is outside `(0, 100]`.
    #[error("`zoom_factor` must be in (0, 100], got {0}")]
    ZoomFactor(f64),

    /// A size that must be strictly positive is zero or negative.
    #[error("`{field}` must be positive, got {value}")]
    NotPositive {
        /// Name of the field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// An offset or gutter is negative.
    #[error("`{field}` must not be negative, got {value}")]
    Negative {
        /// Name of the field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// The hover alpha is outside `[0, 1]`.
    #[error("`hover_alpha` must be in [0, 1], got {0}")]
    HoverAlpha(f32),
}
