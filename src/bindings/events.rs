use {
    crate::{
        bindings::Bindings,
        data::{EventAction, EventCallback, EventData},
    },
    isnt::std_1::primitive::IsntSliceExt,
    smallvec::SmallVec,
    std::mem,
};

impl Bindings {
    /// Subscribes to events of kind `action`.
    ///
    /// The first bell subscription enables bell notifications on the server.
    pub fn add_event(&self, action: EventAction, callback: EventCallback) {
        let mut events = self.events.borrow_mut();
        let list = &mut events[action];
        if action == EventAction::Bell && list.is_empty() {
            self.display.set_bell_notify(true);
        }
        list.push(callback);
    }

    /// Removes one subscription of `callback`. Returns whether one was found.
    pub fn remove_event(&self, action: EventAction, callback: &EventCallback) -> bool {
        let mut events = self.events.borrow_mut();
        let list = &mut events[action];
        let Some(idx) = list.iter().position(|c| c == callback) else {
            return false;
        };
        list.remove(idx);
        if action == EventAction::Bell && list.is_empty() {
            self.display.set_bell_notify(false);
        }
        true
    }

    pub fn remove_all_events(&self) {
        let events = mem::take(&mut *self.events.borrow_mut());
        if events[EventAction::Bell].is_not_empty() {
            self.display.set_bell_notify(false);
        }
    }

    pub fn fire_event(&self, data: &EventData) {
        let callbacks: SmallVec<[EventCallback; 2]> =
            self.events.borrow()[data.action].iter().cloned().collect();
        for callback in callbacks {
            callback.call(data);
        }
    }
}
