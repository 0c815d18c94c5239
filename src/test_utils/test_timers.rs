use {
    crate::timer::{TimerId, TimerService},
    std::{
        cell::{Cell, RefCell},
        time::Duration,
    },
};

struct Pending {
    id: TimerId,
    deadline: Duration,
    callback: Box<dyn FnOnce()>,
}

/// Timers driven by a virtual clock that only moves when `advance` is called.
#[derive(Default)]
pub struct TestTimers {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    pending: RefCell<Vec<Pending>>,
    pub scheduled: Cell<usize>,
    pub cancelled: Cell<usize>,
}

impl TestTimers {
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let idx = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.deadline <= target)
                    .min_by_key(|(_, p)| p.deadline)
                    .map(|(idx, _)| idx);
                idx.map(|idx| pending.remove(idx))
            };
            let Some(next) = next else {
                break;
            };
            self.now.set(next.deadline);
            (next.callback)();
        }
        self.now.set(target);
    }
}

impl TimerService for TestTimers {
    fn schedule(&self, timeout: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.scheduled.set(self.scheduled.get() + 1);
        self.pending.borrow_mut().push(Pending {
            id,
            deadline: self.now.get() + timeout,
            callback,
        });
        id
    }

    fn cancel(&self, id: TimerId) {
        let mut pending = self.pending.borrow_mut();
        let len = pending.len();
        pending.retain(|p| p.id != id);
        if pending.len() != len {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }
}
