//! Pure math/data for swipecell
//!
//! Geometry primitives shared by the gesture, animation and layout code,
//! plus the color type action buttons carry for their hosts.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect, Size};
}
