//! Testing utilities and harness for swipecell

pub mod recording;
pub mod robot;
pub mod testing;

pub use recording::{DelegateEvent, RecordingDelegate};
pub use robot::DragScript;
pub use testing::SwipeTestRule;

pub mod prelude {
    pub use crate::recording::*;
    pub use crate::robot::*;
    pub use crate::testing::*;
    pub use swipecell_ui::prelude::*;
}
