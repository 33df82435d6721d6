//! Animation system for swipecell
//!
//! Provides time-based tweens with easing curves and spring physics, driven
//! by the frame callbacks of a [`swipecell_core::FrameClock`].

mod animation;
mod easing;

pub use animation::*;
pub use easing::*;
