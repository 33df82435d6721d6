//! Drives a container the way a host event loop would: pointer samples in,
//! frames pumped at 60 Hz.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{bail, Result};
use log::{debug, info};
use swipecell_core::{Runtime, RuntimeScheduler, NANOS_PER_MILLI};
use swipecell_foundation::DragSample;
use swipecell_ui::prelude::*;
use swipecell_ui::{GestureDisposition, Point, Rect, TapOutcome};

use crate::mailbox::Mailbox;

const FRAME_NANOS: u64 = 16_666_667;
const ROW_WIDTH: f32 = 375.0;
const ROW_HEIGHT: f32 = 64.0;

/// Stands in for a window's redraw request.
#[derive(Default)]
struct RedrawRequest {
    pending: Cell<bool>,
}

impl RedrawRequest {
    fn take(&self) -> bool {
        self.pending.replace(false)
    }
}

impl RuntimeScheduler for RedrawRequest {
    fn schedule_frame(&self) {
        self.pending.set(true);
    }
}

pub struct Session {
    runtime: Runtime,
    redraw: Rc<RedrawRequest>,
    container: SwipeContainer,
    mailbox: Rc<Mailbox>,
    rows: Vec<SwipeRow>,
    time_nanos: u64,
}

impl Session {
    pub fn new(mailbox: Mailbox) -> Self {
        let redraw = Rc::new(RedrawRequest::default());
        let runtime = Runtime::new(redraw.clone());
        let mailbox = Rc::new(mailbox);
        let container = SwipeContainer::new(runtime.frame_clock(), mailbox.clone());
        let mut session = Self {
            runtime,
            redraw,
            container,
            mailbox,
            rows: Vec::new(),
            time_nanos: 0,
        };
        session.layout();
        session
    }

    pub fn mailbox(&self) -> &Mailbox {
        &self.mailbox
    }

    pub fn container(&self) -> &SwipeContainer {
        &self.container
    }

    /// Binds one row per message, top to bottom, reusing rows in order.
    pub fn layout(&mut self) {
        let messages = self.mailbox.messages();
        while self.rows.len() < messages.len() {
            self.rows.push(self.container.create_row(ContentHitTest));
        }
        for (index, row) in self.rows.iter().enumerate() {
            match messages.get(index) {
                Some(message) => {
                    row.set_frame(Rect::new(
                        0.0,
                        index as f32 * ROW_HEIGHT,
                        ROW_WIDTH,
                        ROW_HEIGHT,
                    ));
                    self.container.bind(row, message.key);
                }
                None => self.container.prepare_for_reuse(row),
            }
        }
    }

    pub fn row(&self, index: usize) -> Result<SwipeRow> {
        match self.rows.get(index) {
            Some(row) if row.item().is_some() => Ok(row.clone()),
            _ => bail!("no bound row at position {index}"),
        }
    }

    /// Pumps frames for as long as the runtime keeps requesting redraws.
    pub fn settle(&mut self) -> Result<()> {
        let mut frames = 0;
        while self.redraw.take() {
            if frames > 600 {
                bail!("animations did not settle after {frames} frames");
            }
            self.runtime.drain_frame_callbacks(self.time_nanos);
            self.time_nanos += FRAME_NANOS;
            frames += 1;
        }
        debug!("settled after {frames} frame(s)");
        // Deleted items leave holes; close them up.
        self.layout();
        Ok(())
    }

    /// Horizontal swipe across `row`, releasing after a pause of `pause_ms`.
    pub fn swipe(&mut self, row: &SwipeRow, dx: f32, pause_ms: i64) -> Result<()> {
        let frame = row.frame();
        let origin = Point::new(frame.x + frame.width / 2.0, frame.y + frame.height / 2.0);
        let mut time_ms = (self.time_nanos / NANOS_PER_MILLI) as i64;

        row.handle_drag(DragSample::begin(origin, time_ms));
        let steps = (dx.abs() / 12.0).ceil().max(1.0) as i32;
        for step in 1..=steps {
            time_ms += 16;
            let x = origin.x + dx * step as f32 / steps as f32;
            let disposition = row.handle_drag(DragSample::change(Point::new(x, origin.y), time_ms));
            if disposition == GestureDisposition::Yielded {
                info!("{} declined the swipe", row.id());
                break;
            }
        }
        time_ms += pause_ms + 16;
        let end = Point::new(origin.x + dx, origin.y);
        row.handle_drag(DragSample::end(end, time_ms));
        info!(
            "{} released at {:.1} -> {:?}",
            row.id(),
            row.swipe_offset(),
            row.state()
        );
        self.settle()
    }

    pub fn tap(&mut self, point: Point) -> Result<TapOutcome> {
        let outcome = self.container.handle_tap(point);
        info!("tap at ({}, {}) -> {outcome:?}", point.x, point.y);
        self.settle()?;
        Ok(outcome)
    }

    pub fn describe(&self) {
        for row in &self.rows {
            let Some(item) = row.item() else {
                continue;
            };
            let Some(message) = self.mailbox.message(item) else {
                continue;
            };
            info!(
                "  {:<24} unread={:<5} flagged={:<5} {:?}",
                message.subject,
                message.unread,
                message.flagged,
                row.state()
            );
        }
    }
}
