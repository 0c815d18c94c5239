use std::time::Duration;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TimerId(pub u64);

/// One-shot timers driven by the host's event loop.
///
/// Callbacks run on the event loop thread. A cancelled timer never fires.
pub trait TimerService {
    fn schedule(&self, timeout: Duration, callback: Box<dyn FnOnce()>) -> TimerId;
    fn cancel(&self, id: TimerId);
}
