//! A configurable [`SwipeDelegate`] that records every callback it receives.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use swipecell_core::collections::map::{HashMap, HashSet};
use swipecell_ui::{
    ItemKey, SwipeAction, SwipeActionStyle, SwipeDelegate, SwipeOptions, SwipeOrientation,
};
use swipecell_ui_graphics::Rect;

/// One observed delegate callback or action invocation, in call order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DelegateEvent {
    WillBeginEditing(ItemKey, SwipeOrientation),
    DidEndEditing(ItemKey, SwipeOrientation),
    DidDelete(ItemKey),
    ActionInvoked { item: ItemKey, identifier: String },
    SelectionChanged(ItemKey, bool),
}

#[derive(Clone, Debug)]
struct ActionSpec {
    identifier: String,
    title: Option<String>,
    style: SwipeActionStyle,
}

/// Serves the same actions for every item unless overridden per item.
///
/// Destructive actions are served until the item shows up in a
/// [`DelegateEvent::DidDelete`]; after that the item has no actions, the way
/// a list that removed the item from its data would answer.
#[derive(Default)]
pub struct RecordingDelegate {
    left: RefCell<Vec<ActionSpec>>,
    right: RefCell<Vec<ActionSpec>>,
    per_item: RefCell<HashMap<(ItemKey, SwipeOrientation), Vec<ActionSpec>>>,
    left_options: Cell<SwipeOptions>,
    right_options: Cell<SwipeOptions>,
    vetoed: RefCell<HashSet<SwipeOrientation>>,
    visible_rect: Cell<Option<Rect>>,
    selected: RefCell<HashSet<ItemKey>>,
    deleted: RefCell<HashSet<ItemKey>>,
    events: Rc<RefCell<Vec<DelegateEvent>>>,
}

fn specs(actions: &[(&str, SwipeActionStyle)]) -> Vec<ActionSpec> {
    actions
        .iter()
        .map(|(identifier, style)| ActionSpec {
            identifier: (*identifier).to_owned(),
            title: None,
            style: *style,
        })
        .collect()
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Actions for `orientation`, outer edge first.
    pub fn with_actions(
        self,
        orientation: SwipeOrientation,
        actions: &[(&str, SwipeActionStyle)],
    ) -> Self {
        self.set_actions(orientation, actions);
        self
    }

    pub fn with_options(self, orientation: SwipeOrientation, options: SwipeOptions) -> Self {
        self.set_options(orientation, options);
        self
    }

    pub fn set_actions(&self, orientation: SwipeOrientation, actions: &[(&str, SwipeActionStyle)]) {
        *self.side(orientation).borrow_mut() = specs(actions);
    }

    /// Overrides the actions of one item and side.
    pub fn set_item_actions(
        &self,
        item: ItemKey,
        orientation: SwipeOrientation,
        actions: &[(&str, SwipeActionStyle)],
    ) {
        self.per_item
            .borrow_mut()
            .insert((item, orientation), specs(actions));
    }

    /// Gives an action a title, on every side that serves it.
    pub fn set_title(&self, identifier: &str, title: &str) {
        for orientation in SwipeOrientation::ALL {
            for spec in self.side(orientation).borrow_mut().iter_mut() {
                if spec.identifier == identifier {
                    spec.title = Some(title.to_owned());
                }
            }
        }
    }

    pub fn set_options(&self, orientation: SwipeOrientation, options: SwipeOptions) {
        match orientation {
            SwipeOrientation::Left => self.left_options.set(options),
            SwipeOrientation::Right => self.right_options.set(options),
        }
    }

    /// Makes `can_begin_editing` refuse `orientation`.
    pub fn set_vetoed(&self, orientation: SwipeOrientation, vetoed: bool) {
        let mut set = self.vetoed.borrow_mut();
        if vetoed {
            set.insert(orientation);
        } else {
            set.remove(&orientation);
        }
    }

    pub fn set_visible_rect(&self, rect: Option<Rect>) {
        self.visible_rect.set(rect);
    }

    /// Marks `item` selected without recording an event.
    pub fn select(&self, item: ItemKey) {
        self.selected.borrow_mut().insert(item);
    }

    pub fn is_item_selected(&self, item: ItemKey) -> bool {
        self.selected.borrow().contains(&item)
    }

    pub fn is_deleted(&self, item: ItemKey) -> bool {
        self.deleted.borrow().contains(&item)
    }

    pub fn events(&self) -> Vec<DelegateEvent> {
        self.events.borrow().clone()
    }

    pub fn take_events(&self) -> Vec<DelegateEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn clear_events(&self) {
        self.events.borrow_mut().clear();
    }

    /// Number of recorded events matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&DelegateEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|event| predicate(event)).count()
    }

    fn side(&self, orientation: SwipeOrientation) -> &RefCell<Vec<ActionSpec>> {
        match orientation {
            SwipeOrientation::Left => &self.left,
            SwipeOrientation::Right => &self.right,
        }
    }

    fn record(&self, event: DelegateEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl SwipeDelegate for RecordingDelegate {
    fn edit_actions(&self, item: ItemKey, orientation: SwipeOrientation) -> Vec<SwipeAction> {
        if self.is_deleted(item) {
            return Vec::new();
        }
        let specs = self
            .per_item
            .borrow()
            .get(&(item, orientation))
            .cloned()
            .unwrap_or_else(|| self.side(orientation).borrow().clone());
        specs
            .into_iter()
            .map(|spec| {
                let events = Rc::clone(&self.events);
                let action = SwipeAction::new(spec.identifier, spec.style).with_handler(
                    move |action, item| {
                        events.borrow_mut().push(DelegateEvent::ActionInvoked {
                            item,
                            identifier: action.identifier().to_owned(),
                        });
                    },
                );
                match spec.title {
                    Some(title) => action.with_title(title),
                    None => action,
                }
            })
            .collect()
    }

    fn edit_actions_options(&self, _item: ItemKey, orientation: SwipeOrientation) -> SwipeOptions {
        match orientation {
            SwipeOrientation::Left => self.left_options.get(),
            SwipeOrientation::Right => self.right_options.get(),
        }
    }

    fn can_begin_editing(&self, _item: ItemKey, orientation: SwipeOrientation) -> bool {
        !self.vetoed.borrow().contains(&orientation)
    }

    fn will_begin_editing(&self, item: ItemKey, orientation: SwipeOrientation) {
        self.record(DelegateEvent::WillBeginEditing(item, orientation));
    }

    fn did_end_editing(&self, item: ItemKey, orientation: SwipeOrientation) {
        self.record(DelegateEvent::DidEndEditing(item, orientation));
    }

    fn did_delete(&self, item: ItemKey) {
        self.deleted.borrow_mut().insert(item);
        self.selected.borrow_mut().remove(&item);
        self.record(DelegateEvent::DidDelete(item));
    }

    fn visible_rect(&self) -> Option<Rect> {
        self.visible_rect.get()
    }

    fn is_selected(&self, item: ItemKey) -> bool {
        self.is_item_selected(item)
    }

    fn set_selected(&self, item: ItemKey, selected: bool) {
        {
            let mut set = self.selected.borrow_mut();
            if selected {
                set.insert(item);
            } else {
                set.remove(&item);
            }
        }
        self.record(DelegateEvent::SelectionChanged(item, selected));
    }
}
