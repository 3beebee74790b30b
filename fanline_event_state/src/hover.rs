// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state: turn "what is under the pointer" into enter/leave transitions.
//!
//! Feed [`HoverState::update`] the target under the pointer after every move,
//! or `None` when the pointer is over empty space. The returned
//! [`HoverTransition`] lists the target that was left and the one that was
//! entered; a leave always comes before an enter.

/// Enter/leave pair produced by one [`HoverState::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverTransition<K> {
    /// Target the pointer left, if any.
    pub leave: Option<K>,
    /// Target the pointer entered, if any.
    pub enter: Option<K>,
}

impl<K> HoverTransition<K> {
    /// Returns `true` when nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leave.is_none() && self.enter.is_none()
    }
}

/// Tracks the single hovered target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverState<K> {
    current: Option<K>,
}

impl<K> Default for HoverState<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K: Clone + PartialEq> HoverState<K> {
    /// Creates a state with nothing hovered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently hovered target.
    #[must_use]
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }

    /// Records the target now under the pointer.
    pub fn update(&mut self, target: Option<K>) -> HoverTransition<K> {
        if self.current == target {
            return HoverTransition {
                leave: None,
                enter: None,
            };
        }
        let leave = self.current.take();
        self.current = target.clone();
        HoverTransition {
            leave,
            enter: target,
        }
    }

    /// Forgets the hovered target, returning it so the caller can emit a leave.
    pub fn clear(&mut self) -> Option<K> {
        self.current.take()
    }
}
