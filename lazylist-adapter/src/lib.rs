//! Adapter utilities for the `lazylist` crate.
//!
//! The `lazylist` crate is UI-agnostic and focuses on the core loading math and state. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - The host event/effect contract ([`Event`] in, [`Effect`] out)
//! - Raw wheel-delta to row-count mapping ([`WheelConfig`])
//! - A [`Controller`] that dispatches events and streams effects without allocations
//!
//! This crate is intentionally framework-agnostic (no tk/ratatui/egui bindings): a thin host
//! binds the effects to a concrete scrollbar and list widget.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod event;
mod wheel;


pub use controller::Controller;
pub use event::{Effect, Event};
pub use wheel::WheelConfig;
