//! A headless "sticky / receding header" engine.
//!
//! For an in-memory document and a multi-widget event driver, see the `elasticky-adapter`
//! crate.
//!
//! The engine watches a scroll offset and toggles four state classes on a container element:
//!
//! - `is-{name}-unfixed` / `is-{name}-fixed` once the offset crosses a threshold
//!   (with optional hysteresis between `fix_at` and `release_at`)
//! - `is-{name}-hidden` / `is-{name}-shown` while fixed, depending on how far the page moved
//!   down or up within a one-second stability window
//!
//! It is UI-agnostic. The embedding layer implements [`Host`] to provide:
//! - element lookup, class-list mutation and event listener bookkeeping
//! - scroll offsets (window page offset or element scroll-top)
//! - the container's computed top padding (the default fix threshold)
//!
//! Time never comes from a clock: every entry point takes a monotonic `now_ms`, and timers
//! (the scroll throttle, the stability commit, resize polling) fire from [`Elasticky::advance`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod classes;
#[cfg(feature = "serde")]
mod config;
mod error;
mod host;
mod options;
mod state;
mod threshold;
mod throttle;
mod timer;
mod widget;


pub use classes::ClassNames;
#[cfg(feature = "serde")]
pub use config::{ConfigError, ElastickyConfig, OnResize};
pub use error::Error;
pub use host::{EventKind, EventTarget, Host};
pub use options::{Container, ElastickyOptions, ResizeMode, ScrollElm};
pub use state::ElastickyState;
pub use threshold::{Recede, Threshold, parse_css_int};
pub use throttle::{Throttle, Throttled, throttle};
pub use timer::{Interval, Timer};
pub use widget::{Elasticky, STABILITY_WINDOW_MS};
