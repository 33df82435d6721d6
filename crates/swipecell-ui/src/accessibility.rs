//! Projection of a row's swipe actions for assistive technology.
//!
//! Recomputed on every query from the row state and the delegate.

use crate::action::SwipeAction;
use crate::actions_view::ActionsView;
use crate::delegate::ItemKey;
use crate::orientation::SwipeOrientation;
use crate::row::SwipeRow;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessibilityElement {
    /// A revealed button; listed ahead of the content while the row is open.
    Action {
        orientation: SwipeOrientation,
        index: usize,
        label: String,
        destructive: bool,
    },
    Content,
}

/// A swipe action offered as a custom action on the row itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessibilityCustomAction {
    pub label: String,
    pub item: ItemKey,
    pub orientation: SwipeOrientation,
    pub index: usize,
    identifier: String,
}

impl SwipeRow {
    /// Navigation elements of the row: the visible buttons, then the content.
    pub fn accessibility_elements(&self) -> Vec<AccessibilityElement> {
        let mut elements = Vec::new();
        if self.is_active() {
            let offset = self.swipe_offset().abs();
            if let Some(panel) = self.panel_snapshot() {
                elements.extend(panel.visible_buttons(offset).into_iter().filter_map(|index| {
                    let action = panel.action(index)?;
                    Some(AccessibilityElement::Action {
                        orientation: panel.orientation(),
                        index,
                        label: action.accessibility_label().to_owned(),
                        destructive: action.is_destructive(),
                    })
                }));
            }
        }
        elements.push(AccessibilityElement::Content);
        elements
    }

    /// Activates an element. Destructive buttons delete the item.
    pub fn perform_accessibility_element(&self, element: &AccessibilityElement) -> bool {
        match element {
            AccessibilityElement::Action {
                orientation, index, ..
            } => self.perform_action(*orientation, *index),
            AccessibilityElement::Content => false,
        }
    }

    /// Every swipe action of the bound item, right edge first:
    /// both edge actions, then the remaining right and left ones.
    pub fn accessibility_custom_actions(&self) -> Vec<AccessibilityCustomAction> {
        let Some(item) = self.item() else {
            return Vec::new();
        };
        let Some(delegate) = self.delegate() else {
            return Vec::new();
        };
        let right = delegate.edit_actions(item, SwipeOrientation::Right);
        let left = delegate.edit_actions(item, SwipeOrientation::Left);

        let entry = |orientation, index: usize, actions: &[SwipeAction]| {
            actions.get(index).map(|action| AccessibilityCustomAction {
                label: action.accessibility_label().to_owned(),
                item,
                orientation,
                index,
                identifier: action.identifier().to_owned(),
            })
        };

        let mut projected = Vec::with_capacity(right.len() + left.len());
        projected.extend(entry(SwipeOrientation::Right, 0, &right));
        projected.extend(entry(SwipeOrientation::Left, 0, &left));
        projected.extend((1..right.len()).filter_map(|i| entry(SwipeOrientation::Right, i, &right)));
        projected.extend((1..left.len()).filter_map(|i| entry(SwipeOrientation::Left, i, &left)));
        projected
    }

    /// Runs a custom action against the item it was listed for. A
    /// destructive action takes the deletion path. Returns `false` when the
    /// row moved to another item or the action is gone.
    pub fn perform_custom_action(&self, custom: &AccessibilityCustomAction) -> bool {
        if self.item() != Some(custom.item) {
            log::debug!("{} ignores stale custom action '{}'", self.id(), custom.identifier);
            return false;
        }
        let Some(delegate) = self.delegate() else {
            return false;
        };
        let actions = delegate.edit_actions(custom.item, custom.orientation);
        let Some(action) = actions
            .get(custom.index)
            .filter(|action| action.identifier() == custom.identifier)
        else {
            return false;
        };
        action.invoke(custom.item);
        if action.is_destructive() && self.item() == Some(custom.item) {
            self.delete_item(custom.item);
        }
        true
    }

    fn panel_snapshot(&self) -> Option<ActionsView> {
        self.with_panel(|panel| panel.cloned())
    }
}

#[cfg(test)]
#[path = "tests/accessibility_tests.rs"]
mod tests;
