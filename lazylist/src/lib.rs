//! A headless lazy-loading list controller.
//!
//! For adapter-level utilities (the host event/effect contract, wheel-delta mapping), see the
//! `lazylist-adapter` crate.
//!
//! This crate owns the incremental-loading state machine behind a "lazy" list or tree view:
//! a dataset of `total_count` logical rows is materialized in chunks as the user scrolls, and
//! scroll positions are translated between two coordinate spaces — fractions of the *total*
//! dataset (what the scrollbar shows) and fractions of the *loaded* subset (what the underlying
//! list widget can actually scroll to, since it only knows about inserted rows).
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - scrollbar move / wheel events as fractions and row deltas
//! - the viewport's page size as a fraction of the total dataset
//! - row materialization (the controller only says *which* rows to create)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod emitter;
mod error;
mod list;
mod options;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use emitter::RowEmitter;
pub use error::ConfigError;
pub use list::{LazyList, ViewportMove, WheelScroll};
pub use options::{DEFAULT_CHUNK_SIZE, LazyListOptions, OnChangeCallback, OnMaterializeCallback};
pub use state::{FrameState, LoadState, ViewportState};
pub use types::{LoadRange, Row, Rows, ScrollThumb, rows};
