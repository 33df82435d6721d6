//! Gesture input primitives shared by the swipe engine.

pub mod drag;
pub mod gesture_constants;
pub mod rubber_band;
pub mod velocity_tracker;

pub use drag::{DragPhase, DragSample};
pub use rubber_band::RubberBand;
pub use swipecell_ui_graphics::{Point, Rect, Size};
pub use velocity_tracker::{VelocityTracker, VelocityTracker1D};
