//! Swipeable list rows.
//!
//! A [`SwipeContainer`] owns [`SwipeRow`]s and talks to the list through a
//! [`SwipeDelegate`]. Rows turn drag samples into a content offset, settle
//! open or closed on release, and reveal the [`SwipeAction`]s of one edge.
//! Animation frames come from a [`swipecell_core::FrameClock`] the host
//! drains once per frame.

mod accessibility;
mod action;
mod actions_view;
mod container;
mod delegate;
mod gesture;
pub mod offset;
mod options;
mod orientation;
mod row;
mod state;

pub use accessibility::{AccessibilityCustomAction, AccessibilityElement};
pub use action::{ActionHandler, SwipeAction, SwipeActionStyle};
pub use actions_view::{ActionsView, ButtonFrames};
pub use container::{SwipeContainer, TapOutcome};
pub use delegate::{ItemKey, SwipeDelegate};
pub use gesture::{GestureCoordinator, GestureDisposition, GestureStep};
pub use hit_test::{BandHitTest, ContentHitTest, HitTestStrategy};
pub use offset::{release_decision, resolve_orientation, swipe_offset, ReleaseDecision};
pub use options::{ExpansionStyle, OptionsError, SwipeOptions, TransitionStyle};
pub use orientation::SwipeOrientation;
pub use row::{RowHit, RowId, SwipeCompletion, SwipeRow};
pub use state::{SwipeEvent, SwipeState, SwipeStateMachine, TransitionError};

pub use swipecell_animation::{AnimationSpec, AnimationType, Easing, SpringSpec};
pub use swipecell_foundation::{DragPhase, DragSample};
pub use swipecell_ui_graphics::{Color, Point, Rect, Size};

pub mod prelude {
    pub use crate::{
        ContentHitTest, DragSample, ExpansionStyle, ItemKey, SwipeAction, SwipeActionStyle,
        SwipeContainer, SwipeDelegate, SwipeOptions, SwipeOrientation, SwipeRow, SwipeState,
        TransitionStyle,
    };
}

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
