// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fanline_geometry::Connection;
use fanline_view::VisibleRange;

use crate::config::TimelineConfig;
use crate::listener::TimelineListener;

/// Everything a timeline is mounted with.
pub struct TimelineProps<K> {
    /// Connections to render. Empty renders an empty timeline.
    pub connections: Vec<Connection<K>>,
    /// Initial window; only `a` is used, as the initial scroll position.
    pub visible_range: Option<VisibleRange>,
    /// Tunable constants.
    pub config: TimelineConfig,
    /// Receiver of clicks, hover transitions and range changes.
    pub listener: Box<dyn TimelineListener<K>>,
}

impl<K> TimelineProps<K> {
    /// Props with default configuration and the no-op listener.
    #[must_use]
    pub fn new(connections: Vec<Connection<K>>) -> Self {
        Self {
            connections,
            visible_range: None,
            config: TimelineConfig::default(),
            listener: Box::new(()),
        }
    }

    /// Sets the initial window.
    #[must_use]
    pub fn with_visible_range(mut self, range: VisibleRange) -> Self {
        self.visible_range = Some(range);
        self
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: TimelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the listener.
    #[must_use]
    pub fn with_listener(mut self, listener: impl TimelineListener<K> + 'static) -> Self {
        self.listener = Box::new(listener);
        self
    }
}

impl<K: core::fmt::Debug> core::fmt::Debug for TimelineProps<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TimelineProps")
            .field("connections", &self.connections)
            .field("visible_range", &self.visible_range)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
