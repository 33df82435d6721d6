//! Shared fixtures for the in-crate unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use swipecell_core::Runtime;
use swipecell_foundation::DragSample;
use swipecell_ui_graphics::{Point, Rect};

use crate::{
    ContentHitTest, GestureDisposition, ItemKey, SwipeAction, SwipeActionStyle, SwipeContainer,
    SwipeDelegate, SwipeOptions, SwipeOrientation, SwipeRow,
};

pub(crate) const ROW_WIDTH: f32 = 320.0;
pub(crate) const ROW_HEIGHT: f32 = 44.0;
const FRAME_NANOS: u64 = 16_666_667;

#[derive(Default)]
pub(crate) struct TestDelegate {
    pub left: RefCell<Vec<(&'static str, SwipeActionStyle)>>,
    pub right: RefCell<Vec<(&'static str, SwipeActionStyle)>>,
    pub options: RefCell<SwipeOptions>,
    pub veto: Cell<bool>,
    pub selected: RefCell<Vec<ItemKey>>,
    pub log: Rc<RefCell<Vec<String>>>,
}

impl TestDelegate {
    pub fn with_right(actions: &[(&'static str, SwipeActionStyle)]) -> Self {
        let delegate = Self::default();
        *delegate.right.borrow_mut() = actions.to_vec();
        delegate
    }

    pub fn events(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    pub fn clear_events(&self) {
        self.log.borrow_mut().clear();
    }
}

impl SwipeDelegate for TestDelegate {
    fn edit_actions(&self, _item: ItemKey, orientation: SwipeOrientation) -> Vec<SwipeAction> {
        let specs = match orientation {
            SwipeOrientation::Left => self.left.borrow().clone(),
            SwipeOrientation::Right => self.right.borrow().clone(),
        };
        specs
            .into_iter()
            .map(|(identifier, style)| {
                let log = Rc::clone(&self.log);
                SwipeAction::new(identifier, style).with_handler(move |action, item| {
                    log.borrow_mut()
                        .push(format!("action {} {item}", action.identifier()));
                })
            })
            .collect()
    }

    fn edit_actions_options(&self, _item: ItemKey, _orientation: SwipeOrientation) -> SwipeOptions {
        *self.options.borrow()
    }

    fn can_begin_editing(&self, _item: ItemKey, _orientation: SwipeOrientation) -> bool {
        !self.veto.get()
    }

    fn will_begin_editing(&self, item: ItemKey, orientation: SwipeOrientation) {
        self.log
            .borrow_mut()
            .push(format!("will_begin {item} {orientation}"));
    }

    fn did_end_editing(&self, item: ItemKey, orientation: SwipeOrientation) {
        self.log
            .borrow_mut()
            .push(format!("did_end {item} {orientation}"));
    }

    fn did_delete(&self, item: ItemKey) {
        self.log.borrow_mut().push(format!("did_delete {item}"));
    }

    fn is_selected(&self, item: ItemKey) -> bool {
        self.selected.borrow().contains(&item)
    }

    fn set_selected(&self, item: ItemKey, selected: bool) {
        self.selected.borrow_mut().retain(|candidate| *candidate != item);
        if selected {
            self.selected.borrow_mut().push(item);
        }
        self.log
            .borrow_mut()
            .push(format!("select {item} {selected}"));
    }
}

pub(crate) struct Harness {
    pub runtime: Runtime,
    pub container: SwipeContainer,
    pub delegate: Rc<TestDelegate>,
    time: u64,
}

impl Harness {
    pub fn new(delegate: TestDelegate) -> Self {
        let runtime = Runtime::default();
        let delegate = Rc::new(delegate);
        let container = SwipeContainer::new(runtime.frame_clock(), delegate.clone());
        Self {
            runtime,
            container,
            delegate,
            time: 0,
        }
    }

    /// Creates a row at list position `index`, bound to `ItemKey(index)`.
    pub fn row(&self, index: u64) -> SwipeRow {
        let row = self.container.create_row(ContentHitTest);
        row.set_frame(Rect::new(
            0.0,
            index as f32 * ROW_HEIGHT,
            ROW_WIDTH,
            ROW_HEIGHT,
        ));
        self.container.bind(&row, ItemKey(index));
        row
    }

    pub fn frame(&mut self) {
        self.runtime.drain_frame_callbacks(self.time);
        self.time += FRAME_NANOS;
    }

    /// Advances to `millis` after the first pumped frame.
    pub fn frame_at_millis(&mut self, millis: u64) {
        self.time = millis * 1_000_000;
        self.runtime.drain_frame_callbacks(self.time);
    }

    pub fn settle(&mut self) {
        for _ in 0..240 {
            if !self.runtime.handle().has_frame_callbacks() {
                return;
            }
            self.frame();
        }
        panic!("animations did not settle");
    }
}

/// Drags `row` horizontally by `dx` in 10 px steps and releases with
/// `velocity` px/s. Returns the disposition of every sample.
pub(crate) fn drag(row: &SwipeRow, dx: f32, velocity: f32) -> Vec<GestureDisposition> {
    let frame = row.frame();
    let y = frame.y + frame.height / 2.0;
    let start_x = frame.x + frame.width / 2.0;
    let mut time = 0;
    let mut dispositions = vec![row.handle_drag(DragSample::begin(Point::new(start_x, y), time))];
    let steps = (dx.abs() / 10.0).ceil() as i32;
    for step in 1..=steps {
        time += 16;
        let moved = (step as f32 * 10.0).min(dx.abs()) * dx.signum();
        dispositions.push(row.handle_drag(DragSample::change(Point::new(start_x + moved, y), time)));
    }
    time += 16;
    dispositions.push(row.handle_drag(
        DragSample::end(Point::new(start_x + dx, y), time).with_velocity(Point::new(velocity, 0.0)),
    ));
    dispositions
}

pub(crate) fn two_right_actions() -> TestDelegate {
    TestDelegate::with_right(&[
        ("delete", SwipeActionStyle::Destructive),
        ("flag", SwipeActionStyle::Default),
    ])
}
