// Copyright 2025 the Fanline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element a timeline is mounted into.

use kurbo::Size;

/// Registration token for a resize listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Pointer cursor shape requested by the timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// The platform default arrow.
    #[default]
    Default,
    /// A pointing hand, shown over interactive shapes.
    Pointer,
}

/// Windowing-side services of the element hosting a timeline.
///
/// The host delivers input by calling the timeline's pointer, wheel and resize
/// methods; this trait covers the calls in the other direction.
pub trait Host {
    /// Current size of the element in pixels. May be zero.
    fn measure(&self) -> Size;

    /// Starts routing resize notifications to the timeline.
    fn add_resize_listener(&mut self) -> ListenerId;

    /// Stops routing resize notifications registered under `id`.
    fn remove_resize_listener(&mut self, id: ListenerId);

    /// Changes the pointer cursor over the element.
    fn set_cursor(&mut self, cursor: Cursor) {
        let _ = cursor;
    }
}
