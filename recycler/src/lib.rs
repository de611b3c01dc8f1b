//! Index-aligned object recycling for virtualized lists.
//!
//! A virtualized list renders only the items inside (or near) its viewport, and it should not
//! rebuild item renderers every frame. This crate provides the pieces such a list needs to keep
//! renderers bound to the same logical index while the visible window scrolls:
//!
//! - [`RingBuffer`]: a growable circular-array deque with amortized `O(1)` operations at both
//!   ends and cheap rotation.
//! - [`IndexedPool`]: a recycling cache that hands out the element previously bound to an index
//!   whenever that index is still in the window, for both ascending and descending sweeps.
//! - [`Pool`] / [`ObjectPool`]: the element source used for indexes that are new to the window.
//!
//! It is UI-agnostic. For a render-pass driver with per-pass statistics, see the
//! `recycler-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod indexed_pool;
mod pool;
pub mod ring_buffer;
mod types;


pub use indexed_pool::IndexedPool;
pub use pool::{ObjectPool, Pool};
pub use ring_buffer::RingBuffer;
pub use types::{Direction, PoolState, Window};
