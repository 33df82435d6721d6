//! Core runtime for the swipecell interaction layer.
//!
//! Everything here runs on one interaction thread. Work that has to happen
//! "later" (animation frames) is queued on the [`Runtime`] and executed when
//! the host drains the frame callbacks for a new frame.

pub mod collections;
mod frame_clock;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::RuntimeScheduler;
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};

pub type FrameCallbackId = u64;

/// Nanoseconds per millisecond, for converting frame times.
pub const NANOS_PER_MILLI: u64 = 1_000_000;
