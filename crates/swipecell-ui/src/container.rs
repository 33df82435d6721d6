//! Owns the rows of one list and keeps at most one of them open.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use swipecell_core::collections::map::HashMap;
use swipecell_core::FrameClock;
use swipecell_ui_graphics::Point;

use crate::delegate::{ItemKey, SwipeDelegate};
use crate::hit_test::HitTestStrategy;
use crate::row::{RowHit, RowId, SwipeRow};

pub(crate) struct ContainerShared {
    clock: FrameClock,
    delegate: Rc<dyn SwipeDelegate>,
    rows: RefCell<Vec<SwipeRow>>,
    bindings: RefCell<HashMap<RowId, ItemKey>>,
    editing: Cell<bool>,
    accessibility_active: Cell<bool>,
    next_row_id: Cell<u64>,
}

impl ContainerShared {
    pub(crate) fn delegate(&self) -> Rc<dyn SwipeDelegate> {
        Rc::clone(&self.delegate)
    }

    pub(crate) fn item_for(&self, row: RowId) -> Option<ItemKey> {
        self.bindings.borrow().get(&row).copied()
    }

    pub(crate) fn is_editing(&self) -> bool {
        self.editing.get()
    }

    pub(crate) fn is_accessibility_active(&self) -> bool {
        self.accessibility_active.get()
    }

    fn rows_snapshot(&self) -> Vec<SwipeRow> {
        self.rows.borrow().clone()
    }

    pub(crate) fn has_other_open_row(&self, except: RowId) -> bool {
        self.rows_snapshot()
            .iter()
            .any(|row| row.id() != except && row.is_active())
    }

    /// Snaps every other open row to center, without animation.
    pub(crate) fn close_others(&self, except: RowId) {
        for row in self.rows_snapshot() {
            if row.id() != except && row.is_active() {
                log::debug!("{} closes for {except}", row.id());
                row.force_center(false);
            }
        }
    }

    pub(crate) fn unbind_id(&self, row: RowId) -> Option<ItemKey> {
        self.bindings.borrow_mut().remove(&row)
    }
}

/// Result of a tap routed through [`SwipeContainer::handle_tap`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// An open row was closed; the tap must not reach the list.
    Dismissed,
    /// A revealed button was pressed.
    ActionPerformed { item: ItemKey, identifier: String },
    /// Nothing swipe related; the list handles the tap, on `row` if any.
    Passed(Option<RowId>),
}

/// The list side of the swipe engine: creates rows, binds them to items and
/// arbitrates between them.
#[derive(Clone)]
pub struct SwipeContainer {
    shared: Rc<ContainerShared>,
}

impl SwipeContainer {
    pub fn new(clock: FrameClock, delegate: Rc<dyn SwipeDelegate>) -> Self {
        Self {
            shared: Rc::new(ContainerShared {
                clock,
                delegate,
                rows: RefCell::new(Vec::new()),
                bindings: RefCell::new(HashMap::default()),
                editing: Cell::new(false),
                accessibility_active: Cell::new(false),
                next_row_id: Cell::new(0),
            }),
        }
    }

    pub fn delegate(&self) -> Rc<dyn SwipeDelegate> {
        self.shared.delegate()
    }

    pub fn create_row(&self, hit_test: impl HitTestStrategy + 'static) -> SwipeRow {
        let id = RowId(self.shared.next_row_id.get());
        self.shared.next_row_id.set(id.0 + 1);
        let row = SwipeRow::new(
            id,
            Rc::downgrade(&self.shared),
            self.shared.clock.clone(),
            Box::new(hit_test),
        );
        self.shared.rows.borrow_mut().push(row.clone());
        row
    }

    pub fn rows(&self) -> Vec<SwipeRow> {
        self.shared.rows_snapshot()
    }

    /// Binds `row` to `item`. A row moving to a different item is reset
    /// first; a row already showing `item` elsewhere is unbound.
    pub fn bind(&self, row: &SwipeRow, item: ItemKey) {
        match self.shared.item_for(row.id()) {
            Some(current) if current == item => return,
            Some(_) => self.prepare_for_reuse(row),
            None => {}
        }
        if let Some(previous) = self.row_for_item(item) {
            self.unbind(&previous);
        }
        self.shared.bindings.borrow_mut().insert(row.id(), item);
    }

    /// Resets `row` and forgets its item.
    pub fn unbind(&self, row: &SwipeRow) {
        row.reset();
        self.shared.unbind_id(row.id());
    }

    /// Call before a recycled row shows another item. Restores a selection
    /// the swipe cleared, then discards all swipe state.
    pub fn prepare_for_reuse(&self, row: &SwipeRow) {
        let reselect = row.take_previous_selection();
        if let (true, Some(item)) = (reselect, row.item()) {
            self.shared.delegate.set_selected(item, true);
        }
        self.unbind(row);
    }

    pub fn remove_row(&self, row: &SwipeRow) {
        self.unbind(row);
        self.shared.rows.borrow_mut().retain(|candidate| candidate != row);
    }

    pub fn item_for(&self, row: &SwipeRow) -> Option<ItemKey> {
        self.shared.item_for(row.id())
    }

    pub fn row_for_item(&self, item: ItemKey) -> Option<SwipeRow> {
        let row = self
            .shared
            .bindings
            .borrow()
            .iter()
            .find_map(|(row, bound)| (*bound == item).then_some(*row))?;
        self.rows().into_iter().find(|candidate| candidate.id() == row)
    }

    /// First row whose shape contains `point`.
    pub fn row_at(&self, point: Point) -> Option<SwipeRow> {
        self.rows()
            .into_iter()
            .find(|row| row.hit_test(point) != RowHit::Outside)
    }

    /// The row that is off center, if any.
    pub fn open_row(&self) -> Option<SwipeRow> {
        self.rows().into_iter().find(SwipeRow::is_active)
    }

    pub fn hide_open_rows(&self, animated: bool) {
        for row in self.rows() {
            if row.is_active() {
                row.hide_swipe(animated, |_| {});
            }
        }
    }

    /// The list started scrolling: open rows close, animated.
    pub fn scroll_began(&self) {
        self.hide_open_rows(true);
    }

    /// Entering editing mode closes rows at once and blocks new swipes.
    pub fn set_editing(&self, editing: bool) {
        self.shared.editing.set(editing);
        if editing {
            self.hide_open_rows(false);
        }
    }

    pub fn is_editing(&self) -> bool {
        self.shared.is_editing()
    }

    /// Assistive navigation is running; taps outside no longer close rows
    /// and a second row cannot be swiped while one is open.
    pub fn set_accessibility_active(&self, active: bool) {
        self.shared.accessibility_active.set(active);
    }

    pub fn is_accessibility_active(&self) -> bool {
        self.shared.is_accessibility_active()
    }

    /// Routes a tap (container coordinates).
    pub fn handle_tap(&self, point: Point) -> TapOutcome {
        let rows = self.rows();

        if !self.is_accessibility_active() {
            let mut dismissed = false;
            for row in rows.iter().filter(|row| row.is_active()) {
                if row.hit_test(point) == RowHit::Outside {
                    row.hide_swipe(true, |_| {});
                    dismissed = true;
                }
            }
            if dismissed {
                return TapOutcome::Dismissed;
            }
        }

        for row in &rows {
            match row.hit_test(point) {
                RowHit::Action { orientation, index } => {
                    let Some(item) = row.item() else {
                        continue;
                    };
                    let identifier = row.action_identifier(orientation, index);
                    if row.perform_action(orientation, index) {
                        return TapOutcome::ActionPerformed {
                            item,
                            identifier: identifier.unwrap_or_default(),
                        };
                    }
                }
                RowHit::Content if row.is_active() => {
                    row.hide_swipe(true, |_| {});
                    return TapOutcome::Dismissed;
                }
                RowHit::Content => return TapOutcome::Passed(Some(row.id())),
                RowHit::Outside => {}
            }
        }
        TapOutcome::Passed(None)
    }
}

#[cfg(test)]
#[path = "tests/container_tests.rs"]
mod tests;
