use crate::{
    bindings::Bindings,
    data::KeyCallback,
    display::{CURRENT_TIME, EventMask, GrabMode, PointerGrab, Window},
    error::BindingsError,
};

impl Bindings {
    /// Grabs the keyboard on the root window of `screen` and sends every key event to
    /// `callback` until [`Self::ungrab_keyboard`] is called.
    ///
    /// Key chains keep working while the grab is active.
    pub fn grab_keyboard(&self, screen: usize, callback: KeyCallback) -> Result<(), BindingsError> {
        if self.keyboard_grab.borrow().is_some() {
            return Err(BindingsError::AlreadyGrabbed);
        }
        let root = self.managed_root(screen)?;
        self.display
            .grab_keyboard(root, false, GrabMode::Async, GrabMode::Async, CURRENT_TIME)
            .map_err(BindingsError::ServerGrabFailed)?;
        *self.keyboard_grab.borrow_mut() = Some(callback);
        Ok(())
    }

    pub fn ungrab_keyboard(&self) {
        if self.keyboard_grab.borrow_mut().take().is_none() {
            return;
        }
        // The chain machine still needs the keyboard.
        if !self.key_grabbed.get() {
            self.display.ungrab_keyboard(CURRENT_TIME);
        }
        self.display.ungrab_pointer(CURRENT_TIME);
    }

    pub fn has_keyboard_grab(&self) -> bool {
        self.keyboard_grab.borrow().is_some()
    }

    pub fn grab_pointer(&self, screen: usize) -> Result<(), BindingsError> {
        let root = self.managed_root(screen)?;
        self.display
            .grab_pointer(&PointerGrab {
                window: root,
                owner_events: false,
                event_mask: EventMask::empty(),
                pointer_mode: GrabMode::Async,
                keyboard_mode: GrabMode::Async,
                confine_to: None,
                cursor: None,
                time: CURRENT_TIME,
            })
            .map_err(BindingsError::ServerGrabFailed)
    }

    pub fn ungrab_pointer(&self) {
        self.display.ungrab_pointer(CURRENT_TIME);
    }

    fn managed_root(&self, screen: usize) -> Result<Window, BindingsError> {
        if screen >= self.display.screen_count() || !self.clients.is_managed(screen) {
            return Err(BindingsError::UnmanagedScreen(screen));
        }
        Ok(self.display.root_window(screen))
    }
}
