/// Hook the host implements to learn that the runtime wants another frame.
///
/// Desktop hosts typically forward this to `request_redraw`; tests use a
/// no-op scheduler and drain frames manually.
pub trait RuntimeScheduler {
    fn schedule_frame(&self);
}
