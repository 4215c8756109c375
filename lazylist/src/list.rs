use core::cell::Cell;
use core::cmp;

use crate::{
    ConfigError, FrameState, LazyListOptions, LoadRange, LoadState, ScrollThumb, ViewportState,
};

/// The result of a viewport move.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportMove {
    /// The scrollbar thumb to display, in total-space fractions.
    pub thumb: ScrollThumb,
    /// The requested position translated into loaded-space, for the underlying scroll call.
    ///
    /// The underlying list widget only knows about rows that have actually been inserted, so
    /// its scroll coordinate runs over the loaded subset rather than the full dataset.
    pub loaded_space_fraction: f64,
}

/// The result of a wheel scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelScroll {
    /// The scrollbar thumb to display, in total-space fractions.
    pub thumb: ScrollThumb,
    /// The number of view rows the host should scroll by (the input delta, passed through).
    pub view_rows: i64,
}

/// A headless lazy-loading list controller.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it with scrollbar fractions and wheel row deltas.
/// - Materialization is exposed as `LoadRange` instructions (return values and the optional
///   `on_materialize` callback); the controller never touches rendering.
///
/// The controller reconciles two scroll spaces: the scrollbar is presented against the *total*
/// dataset while the underlying widget can only scroll across the rows materialized so far.
/// Whenever a requested position runs ahead of what is loaded, the eager catch-up loop
/// materializes chunks until the position can be honestly displayed.
///
/// There are only two states, loading and fully-loaded, and the transition is one-way: the
/// dataset never shrinks.
#[derive(Clone, Debug)]
pub struct LazyList {
    options: LazyListOptions,
    loaded_count: usize,
    viewport: ViewportState,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl LazyList {
    /// Creates a controller and immediately materializes the first chunk, so the view is never
    /// empty (an empty dataset yields an empty first chunk and is immediately terminal).
    ///
    /// Fails with [`ConfigError::InvalidConfiguration`] when `options.chunk_size == 0`.
    pub fn new(options: LazyListOptions) -> Result<Self, ConfigError> {
        if options.chunk_size == 0 {
            return Err(ConfigError::InvalidConfiguration { chunk_size: 0 });
        }
        ldebug!(
            total_count = options.total_count,
            chunk_size = options.chunk_size,
            "LazyList::new"
        );
        let viewport = ViewportState {
            scroll_fraction: 0.0,
            page_size_fraction: clamp_fraction(options.initial_page_size_fraction),
        };
        let mut list = Self {
            options,
            loaded_count: 0,
            viewport,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        list.load_chunk();
        Ok(list)
    }

    pub fn options(&self) -> &LazyListOptions {
        &self.options
    }

    pub fn total_count(&self) -> usize {
        self.options.total_count
    }

    pub fn chunk_size(&self) -> usize {
        self.options.chunk_size
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded_count
    }

    pub fn is_fully_loaded(&self) -> bool {
        self.loaded_count >= self.options.total_count
    }

    /// The loaded share of the dataset, in `[0, 1]`. Defined as `1.0` for an empty dataset, so
    /// an empty controller is terminal rather than a division by zero.
    pub fn loaded_fraction(&self) -> f64 {
        let total = self.options.total_count;
        if total == 0 {
            return 1.0;
        }
        self.loaded_count as f64 / total as f64
    }

    pub fn viewport_state(&self) -> ViewportState {
        self.viewport
    }

    /// Returns a lightweight snapshot of the incremental-loading state.
    pub fn load_state(&self) -> LoadState {
        LoadState {
            total_count: self.options.total_count,
            chunk_size: self.options.chunk_size,
            loaded_count: self.loaded_count,
        }
    }

    /// Returns a combined snapshot of load + viewport state.
    pub fn frame_state(&self) -> FrameState {
        FrameState {
            load: self.load_state(),
            viewport: self.viewport,
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// `loaded_count` can only grow: the restore replays `load_chunk` until the snapshot's
    /// count is covered (rounding up to a chunk boundary), so the materialization contract —
    /// every row emitted exactly once, in ascending chunk-sized steps — still holds for the
    /// host. Fractions are clamped to their invariants.
    pub fn restore_frame_state(&mut self, frame: FrameState) {
        ldebug!(
            loaded_count = frame.load.loaded_count,
            scroll_fraction = frame.viewport.scroll_fraction,
            "restore_frame_state"
        );
        self.batch_update(|list| {
            let target = cmp::min(frame.load.loaded_count, list.options.total_count);
            while list.loaded_count < target {
                list.load_chunk();
            }
            list.viewport.page_size_fraction = clamp_fraction(frame.viewport.page_size_fraction);
            list.set_scroll_fraction(clamp_fraction(frame.viewport.scroll_fraction));
        });
    }

    /// Updates the viewport's page size (visible rows / total rows), as reported by the host.
    pub fn set_page_size_fraction(&mut self, page_size_fraction: f64) {
        let page_size_fraction = clamp_fraction(page_size_fraction);
        if self.viewport.page_size_fraction == page_size_fraction {
            return;
        }
        self.viewport.page_size_fraction = page_size_fraction;
        self.notify();
    }

    /// The current scrollbar thumb, in total-space fractions. `(0, 0)` for an empty dataset.
    pub fn thumb(&self) -> ScrollThumb {
        if self.options.total_count == 0 {
            return ScrollThumb::zero();
        }
        ScrollThumb::from_start_and_page(
            self.viewport.scroll_fraction,
            self.viewport.page_size_fraction,
        )
    }

    /// Materializes the next chunk: `[loaded_count, min(loaded_count + chunk_size, total))`.
    ///
    /// A no-op returning an empty range once fully loaded. Otherwise advances `loaded_count`
    /// and fires `on_materialize` with the produced range; the host appends the visual rows.
    pub fn load_chunk(&mut self) -> LoadRange {
        let total = self.options.total_count;
        if self.loaded_count >= total {
            return LoadRange::empty(self.loaded_count);
        }
        let end = cmp::min(
            self.loaded_count.saturating_add(self.options.chunk_size),
            total,
        );
        let range = LoadRange::new(self.loaded_count, end);
        self.loaded_count = end;
        ltrace!(start = range.start, end = range.end, "load_chunk");
        if let Some(cb) = &self.options.on_materialize {
            cb(range);
        }
        self.notify();
        range
    }

    /// Handles a scrollbar move to `fraction` of the total dataset.
    ///
    /// The fraction is clamped to `[0, 1]` first (wheel overshoot and scrollbar edge drags
    /// routinely land outside). If the target runs ahead of the loaded share, chunks are
    /// materialized until it doesn't; moving backward through already-loaded rows never
    /// re-fetches. The returned `loaded_space_fraction` is what the host passes to the
    /// underlying widget's scroll call.
    pub fn move_viewport_to(&mut self, fraction: f64) -> ViewportMove {
        if self.options.total_count == 0 {
            return ViewportMove {
                thumb: ScrollThumb::zero(),
                loaded_space_fraction: 0.0,
            };
        }
        let target = clamp_fraction(fraction);
        ltrace!(
            fraction = target,
            loaded = self.loaded_count,
            "move_viewport_to"
        );
        self.batch_update(|list| {
            list.catch_up_to(target);
            list.set_scroll_fraction(target);
        });
        ViewportMove {
            thumb: self.thumb(),
            loaded_space_fraction: self.loaded_space_fraction(target),
        }
    }

    /// Handles a wheel scroll of `row_delta` rows. Positive deltas scroll forward (toward the
    /// end of the dataset), negative backward.
    ///
    /// The delta is converted to a fraction of the total dataset, added to the current thumb
    /// start, and run through the same clamp/catch-up path as [`Self::move_viewport_to`].
    /// `view_rows` echoes the delta for the host's view-scroll call.
    pub fn wheel_scroll(&mut self, row_delta: i64) -> WheelScroll {
        let total = self.options.total_count;
        if total == 0 {
            return WheelScroll {
                thumb: ScrollThumb::zero(),
                view_rows: 0,
            };
        }
        let delta_fraction = row_delta as f64 / total as f64;
        let target = clamp_fraction(self.viewport.scroll_fraction + delta_fraction);
        ltrace!(row_delta, fraction = target, "wheel_scroll");
        self.batch_update(|list| {
            list.catch_up_to(target);
            list.set_scroll_fraction(target);
        });
        WheelScroll {
            thumb: self.thumb(),
            view_rows: row_delta,
        }
    }

    /// Handles a viewport resize: re-checks load sufficiency at the current position without
    /// moving it, and returns the thumb to display.
    pub fn resize(&mut self) -> ScrollThumb {
        let target = self.viewport.scroll_fraction;
        self.batch_update(|list| {
            list.catch_up_to(target);
        });
        self.thumb()
    }

    /// Translates a total-space fraction into loaded-space for the underlying scroll call.
    ///
    /// `0.0` while nothing is loaded (reachable only transiently before the first chunk).
    pub fn loaded_space_fraction(&self, fraction: f64) -> f64 {
        if self.loaded_count == 0 {
            return 0.0;
        }
        let target = clamp_fraction(fraction);
        let loaded_space = (target * self.options.total_count as f64) / self.loaded_count as f64;
        loaded_space.clamp(0.0, 1.0)
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Catch-up already batches internally; use this when your host applies several updates
    /// (e.g. page size + restore) and `on_change` drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    // Eager catch-up: one chunk per iteration, never skipping ahead. Terminates because
    // `loaded_count` strictly increases each iteration and is bounded by `total_count`.
    fn catch_up_to(&mut self, target: f64) {
        while !self.is_fully_loaded() && target > self.loaded_fraction() {
            self.load_chunk();
        }
    }

    fn set_scroll_fraction(&mut self, fraction: f64) {
        if self.viewport.scroll_fraction == fraction {
            return;
        }
        self.viewport.scroll_fraction = fraction;
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }
}

// NaN from a broken host collapses to 0 instead of poisoning the state.
fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        return 0.0;
    }
    fraction.clamp(0.0, 1.0)
}
