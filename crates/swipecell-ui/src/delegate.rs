//! The container-side capability interface the swipe engine reports into.

use swipecell_ui_graphics::Rect;

use crate::action::SwipeAction;
use crate::options::SwipeOptions;
use crate::orientation::SwipeOrientation;

/// Stable identity of the logical item a row displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(pub u64);

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Supplies actions and configuration and receives lifecycle callbacks.
///
/// Every method is called with no swipe state borrowed, so implementations
/// may call back into the container or its rows.
pub trait SwipeDelegate {
    /// Actions for one edge, outer edge first. Empty disables the edge.
    fn edit_actions(&self, item: ItemKey, orientation: SwipeOrientation) -> Vec<SwipeAction>;

    fn edit_actions_options(&self, _item: ItemKey, _orientation: SwipeOrientation) -> SwipeOptions {
        SwipeOptions::default()
    }

    fn can_begin_editing(&self, _item: ItemKey, _orientation: SwipeOrientation) -> bool {
        true
    }

    fn will_begin_editing(&self, _item: ItemKey, _orientation: SwipeOrientation) {}

    fn did_end_editing(&self, _item: ItemKey, _orientation: SwipeOrientation) {}

    /// The item must be removed from the container's data.
    fn did_delete(&self, _item: ItemKey) {}

    /// Viewport in container coordinates, used to clip row widths.
    fn visible_rect(&self) -> Option<Rect> {
        None
    }

    fn is_selected(&self, _item: ItemKey) -> bool {
        false
    }

    fn set_selected(&self, _item: ItemKey, _selected: bool) {}
}
