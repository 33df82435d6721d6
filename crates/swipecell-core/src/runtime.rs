use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::frame_clock::FrameClock;
use crate::platform::RuntimeScheduler;
use crate::FrameCallbackId;

type FrameCallback = Box<dyn FnOnce(u64)>;

/// Callbacks waiting for the next frame, in registration order.
#[derive(Default)]
struct FrameQueue {
    entries: VecDeque<(FrameCallbackId, FrameCallback)>,
    last_id: FrameCallbackId,
}

impl FrameQueue {
    fn push(&mut self, callback: FrameCallback) -> FrameCallbackId {
        self.last_id += 1;
        self.entries.push_back((self.last_id, callback));
        self.last_id
    }

    fn remove(&mut self, id: FrameCallbackId) {
        self.entries.retain(|(entry, _)| *entry != id);
    }

    /// Pops the oldest callback if it was registered at or before `cutoff`.
    fn pop_due(&mut self, cutoff: FrameCallbackId) -> Option<FrameCallback> {
        match self.entries.front() {
            Some((id, _)) if *id <= cutoff => self.entries.pop_front().map(|(_, callback)| callback),
            _ => None,
        }
    }
}

struct Shared {
    scheduler: Rc<dyn RuntimeScheduler>,
    queue: RefCell<FrameQueue>,
    frame_requested: Cell<bool>,
}

impl Shared {
    fn register(&self, callback: FrameCallback) -> FrameCallbackId {
        let id = self.queue.borrow_mut().push(callback);
        self.frame_requested.set(true);
        self.scheduler.schedule_frame();
        id
    }

    fn cancel(&self, id: FrameCallbackId) {
        let mut queue = self.queue.borrow_mut();
        queue.remove(id);
        if queue.entries.is_empty() {
            self.frame_requested.set(false);
        }
    }

    fn is_pending(&self) -> bool {
        !self.queue.borrow().entries.is_empty()
    }

    fn run_frame(&self, frame_time_nanos: u64) {
        // Callbacks queued while this frame runs wait for the next one;
        // callbacks cancelled while it runs are skipped.
        let cutoff = self.queue.borrow().last_id;
        let mut ran = 0usize;
        loop {
            let next = self.queue.borrow_mut().pop_due(cutoff);
            let Some(callback) = next else { break };
            callback(frame_time_nanos);
            ran += 1;
        }
        log::trace!("frame at {frame_time_nanos}ns ran {ran} callbacks");
        self.frame_requested.set(self.is_pending());
    }
}

/// Owner of the frame callback queue.
///
/// Rows and animations only ever hold a [`RuntimeHandle`], so dropping the
/// runtime silently turns every pending frame request into a no-op.
pub struct Runtime {
    shared: Rc<Shared>,
}

impl Runtime {
    pub fn new(scheduler: Rc<dyn RuntimeScheduler>) -> Self {
        Self {
            shared: Rc::new(Shared {
                scheduler,
                queue: RefCell::default(),
                frame_requested: Cell::new(false),
            }),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            shared: Rc::downgrade(&self.shared),
        }
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.handle())
    }

    /// True while a callback is queued for the next frame.
    pub fn needs_frame(&self) -> bool {
        self.shared.frame_requested.get()
    }

    /// Runs every frame callback queued so far with the given frame time.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.shared.run_frame(frame_time_nanos);
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(Rc::new(DefaultScheduler))
    }
}

/// Scheduler for hosts that poll [`Runtime::needs_frame`] themselves.
#[derive(Default)]
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}

/// Weak reference to a [`Runtime`]. Every operation is a no-op once the
/// runtime has been dropped.
#[derive(Clone)]
pub struct RuntimeHandle {
    shared: Weak<Shared>,
}

impl RuntimeHandle {
    /// Queues `callback` for the next frame. `None` if the runtime is gone.
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        let shared = self.shared.upgrade()?;
        Some(shared.register(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(shared) = self.shared.upgrade() {
            shared.cancel(id);
        }
    }

    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(shared) = self.shared.upgrade() {
            shared.run_frame(frame_time_nanos);
        }
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.shared
            .upgrade()
            .is_some_and(|shared| shared.is_pending())
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
