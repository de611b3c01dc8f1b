//! Adapter utilities for the `recycler` crate.
//!
//! The `recycler` crate provides the recycling data structures. This crate provides small,
//! framework-neutral helpers commonly needed by list/grid widgets that use them:
//!
//! - A render-pass driver that skips reconfiguring elements already bound to their index
//! - Per-pass counters (recycled, created, reconfigured, retired)
//! - Dispose/retire helpers for any `IndexedPool`
//!
//! This crate is intentionally framework-agnostic (no widget toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod dispose;
mod driver;
mod slot;
mod stats;


pub use dispose::{dispose_and_clear, retire_and_flip};
pub use driver::Recycler;
pub use slot::Slot;
pub use stats::PassStats;

pub use ::recycler::{Direction, Window};
