use lazylist::{LoadRange, ScrollThumb};

/// An inbound host event.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// The scrollbar was dragged to a fraction of the total dataset.
    ViewportMoveTo(f64),
    /// The wheel was scrolled by a raw device delta (e.g. ±120 per notch on most platforms).
    WheelScroll { raw_delta: i32 },
    /// The viewport was resized; re-check load sufficiency at the current position.
    Resize,
}

/// An outbound instruction for the host.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Append visual rows for the given range, ascending, exactly once each.
    MaterializeRows(LoadRange),
    /// Update the scrollbar handle.
    SetScrollThumb(ScrollThumb),
    /// Scroll the underlying view by a number of rows (negative = backward).
    ScrollViewBy(i64),
    /// Scroll the underlying view to a fraction of the *loaded* rows.
    ScrollViewTo(f64),
}
