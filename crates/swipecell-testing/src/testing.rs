use std::rc::Rc;

use swipecell_core::{Runtime, NANOS_PER_MILLI};
use swipecell_ui::{ItemKey, SwipeContainer, SwipeRow};
use swipecell_ui_graphics::{Point, Rect, Size};

use crate::recording::RecordingDelegate;
use crate::robot::DragScript;

/// One display frame at 60 Hz.
pub const FRAME_NANOS: u64 = 16_666_667;

const MAX_IDLE_FRAMES: usize = 600;

/// Headless harness for exercising a swipe container in tests.
///
/// Owns the runtime whose frame callbacks drive the row animations and a
/// [`RecordingDelegate`]. Rows are stacked vertically in creation order.
/// Frame time only moves when the test pumps frames.
pub struct SwipeTestRule {
    runtime: Runtime,
    container: SwipeContainer,
    delegate: Rc<RecordingDelegate>,
    row_size: Size,
    frame_time_nanos: u64,
}

impl SwipeTestRule {
    pub fn new(delegate: RecordingDelegate) -> Self {
        let runtime = Runtime::default();
        let delegate = Rc::new(delegate);
        let container = SwipeContainer::new(runtime.frame_clock(), delegate.clone());
        Self {
            runtime,
            container,
            delegate,
            row_size: Size::new(320.0, 44.0),
            frame_time_nanos: 0,
        }
    }

    /// Size given to rows created afterwards.
    pub fn with_row_size(mut self, size: Size) -> Self {
        self.row_size = size;
        self
    }

    pub fn container(&self) -> &SwipeContainer {
        &self.container
    }

    pub fn delegate(&self) -> &RecordingDelegate {
        &self.delegate
    }

    /// Frame of the row at list position `index`.
    pub fn row_frame(&self, index: usize) -> Rect {
        Rect::new(
            0.0,
            index as f32 * self.row_size.height,
            self.row_size.width,
            self.row_size.height,
        )
    }

    /// Creates a row below the existing ones and binds it to `item`.
    pub fn add_row(&self, item: ItemKey) -> SwipeRow {
        let index = self.container.rows().len();
        let row = self.container.create_row(swipecell_ui::ContentHitTest);
        row.set_frame(self.row_frame(index));
        self.container.bind(&row, item);
        row
    }

    /// Creates `count` rows bound to items `0..count`.
    pub fn add_rows(&self, count: u64) -> Vec<SwipeRow> {
        (0..count).map(|item| self.add_row(ItemKey(item))).collect()
    }

    /// Center of `row` in container coordinates.
    pub fn center_of(&self, row: &SwipeRow) -> Point {
        let frame = row.frame();
        Point::new(frame.x + frame.width / 2.0, frame.y + frame.height / 2.0)
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    /// Drains the frame callbacks at the current frame time, then moves the
    /// clock one frame ahead.
    pub fn advance_frame(&mut self) {
        self.runtime.drain_frame_callbacks(self.frame_time_nanos);
        self.frame_time_nanos += FRAME_NANOS;
    }

    /// Pumps frames until `millis` of frame time have passed.
    pub fn advance_time_millis(&mut self, millis: u64) {
        let until = self.frame_time_nanos + millis * NANOS_PER_MILLI;
        while self.frame_time_nanos < until {
            self.advance_frame();
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.runtime.handle().has_frame_callbacks()
    }

    /// Pumps frames until no animation is scheduled. Returns the number of
    /// frames pumped.
    pub fn wait_for_idle(&mut self) -> usize {
        for frames in 0..MAX_IDLE_FRAMES {
            if self.is_idle() {
                return frames;
            }
            self.advance_frame();
        }
        panic!("wait_for_idle: animations still running after {MAX_IDLE_FRAMES} frames");
    }

    /// Starts a scripted drag from the center of `row`.
    pub fn drag<'a>(&self, row: &'a SwipeRow) -> DragScript<'a> {
        DragScript::new(row, self.center_of(row))
    }

    /// Starts a scripted drag at `start`.
    pub fn drag_from<'a>(&self, row: &'a SwipeRow, start: Point) -> DragScript<'a> {
        DragScript::new(row, start)
    }
}
