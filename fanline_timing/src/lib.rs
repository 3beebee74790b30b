// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fanline Timing: a host-driven trailing-edge throttle.
//!
//! Fanline never reads a clock or spawns timers. The host passes millisecond
//! timestamps into [`TrailingThrottle::call`] when an event arrives and into
//! [`TrailingThrottle::poll`] from whatever tick source it has (an animation
//! frame, an event loop timeout). The throttle fires at most once per window,
//! only on the trailing edge, with the latest value it was given.
//!
//! ```rust
//! use fanline_timing::TrailingThrottle;
//!
//! let mut resize = TrailingThrottle::new(500);
//!
//! // A burst of calls inside one window.
//! resize.call(1_000, (800.0, 600.0));
//! resize.call(1_120, (760.0, 600.0));
//! resize.call(1_400, (640.0, 480.0));
//!
//! // Nothing fires on the leading edge or before the deadline.
//! assert_eq!(resize.poll(1_000), None);
//! assert_eq!(resize.poll(1_499), None);
//!
//! // The deadline was fixed by the first call; the latest value wins.
//! assert_eq!(resize.poll(1_500), Some((640.0, 480.0)));
//! assert_eq!(resize.poll(2_000), None);
//! ```
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

/// Trailing-edge-only throttle over host-supplied timestamps.
///
/// The first [`call`](Self::call) after an idle period schedules a deadline
/// `window_ms` later. Calls made before the deadline replace the pending value
/// without moving the deadline. [`poll`](Self::poll) hands the value out once
/// the deadline has passed.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailingThrottle<T> {
    window_ms: u64,
    deadline: Option<u64>,
    pending: Option<T>,
}

impl<T> TrailingThrottle<T> {
    /// Creates an idle throttle with the given window.
    #[must_use]
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            deadline: None,
            pending: None,
        }
    }

    /// Window length in milliseconds.
    #[must_use]
    pub const fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Records a call at `now_ms`, keeping `value` as the one to deliver.
    pub fn call(&mut self, now_ms: u64, value: T) {
        if self.deadline.is_none() {
            self.deadline = Some(now_ms.saturating_add(self.window_ms));
        }
        self.pending = Some(value);
    }

    /// Delivers the pending value if its deadline is at or before `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// When the pending value becomes due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns `true` while a value is waiting for its deadline.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending value without delivering it.
    pub fn cancel(&mut self) -> Option<T> {
        self.deadline = None;
        self.pending.take()
    }
}
