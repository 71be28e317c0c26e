//! Adapter utilities for the `elasticky` crate.
//!
//! The `elasticky` crate is UI-agnostic and only talks to the page through its `Host` trait.
//! This crate provides small, framework-neutral helpers commonly needed around it:
//!
//! - [`MemoryDocument`]: an in-memory `Host` for simulations, snapshots and tests
//! - [`Driver`]: owns several widgets, routes host events to the ones listening and advances
//!   their timers from a single clock
//!
//! This crate is intentionally framework-agnostic (no DOM/wasm bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod document;
mod driver;


pub use document::{MemoryDocument, NodeId};
pub use driver::{Driver, WidgetId};
