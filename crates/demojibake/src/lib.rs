//! Streaming repair of UTF-8 text damaged by a lossy single-byte transcoding
//! pass.
//!
//! The damage model: an earlier conversion through an 8-bit charset replaced
//! every byte it could not represent with the ASCII question mark (`0x3F`),
//! while the lead bytes of most multi-byte UTF-8 sequences happened to be
//! representable and survived. The result is mostly-valid UTF-8 whose
//! multi-byte sequences have one or more continuation bytes stomped to `?`.
//!
//! This crate walks such a byte stream once, in bounded windows, and for each
//! multi-byte sequence either substitutes a fixed guessed continuation byte
//! for the damage marker, or, when the sequence is judged unrecoverable,
//! overwrites its non-ASCII bytes with a neutral placeholder (`.`). Bytes the
//! repair policy is not confident about are left untouched, and output length
//! always equals input length.
//!
//! The building blocks are exposed individually:
//!
//! - [`sequence_starts_at`] classifies whether a well-formed sequence starts
//!   at a position inside a window;
//! - [`find_cut`] picks a chunk boundary that never bisects a sequence;
//! - [`repair_in_place`] applies the repair policy to a byte range;
//! - [`RepairPipeline`] (with the default `std` feature) streams a whole
//!   reader to a writer using the three pieces above.

#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod boundary;
mod classify;
mod options;
mod repair;
mod stats;

#[cfg(feature = "std")]
mod error;
#[cfg(feature = "std")]
mod pipeline;

#[cfg(test)]
mod tests;

pub use boundary::find_cut;
pub use classify::sequence_starts_at;
#[cfg(feature = "std")]
pub use error::PipelineError;
pub use options::{DEFAULT_GUESSED_CONTINUATION, DEFAULT_WINDOW_CAPACITY, RepairOptions};
#[cfg(feature = "std")]
pub use pipeline::RepairPipeline;
pub use repair::repair_in_place;
pub use stats::RepairStats;
