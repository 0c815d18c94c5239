//! The requests the binding engine sends to the display server

use {crate::chord::Modifiers, thiserror::Error};

pub type Window = u32;
pub type Timestamp = u32;

pub const CURRENT_TIME: Timestamp = 0;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum GrabMode {
    /// Events are frozen until the grabbing client calls `AllowEvents`.
    Sync,
    Async,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AllowEventsMode {
    AsyncPointer,
    SyncPointer,
    ReplayPointer,
    AsyncKeyboard,
    SyncKeyboard,
    ReplayKeyboard,
    AsyncBoth,
    SyncBoth,
}

bitflags! {
    #[derive(Copy, Clone, Eq, PartialEq, Default, Hash)]
    pub struct EventMask(pub u32) {
        pub const BUTTON_PRESS = 1 << 2,
        pub const BUTTON_RELEASE = 1 << 3,
        pub const BUTTON_MOTION = 1 << 13,
    }
}

/// Status returned by the server when an active grab is refused.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum GrabFailure {
    #[error("The device is already grabbed by another client")]
    AlreadyGrabbed,
    #[error("The grab time is invalid")]
    InvalidTime,
    #[error("The grab window is not viewable")]
    NotViewable,
    #[error("The device is frozen by another grab")]
    Frozen,
}

/// A passive key grab.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct KeyGrab {
    pub keycode: u32,
    pub mods: Modifiers,
    pub window: Window,
    pub owner_events: bool,
    pub pointer_mode: GrabMode,
    pub keyboard_mode: GrabMode,
    /// Whether the grab should also be installed with ScrollLock held.
    pub allow_scroll_lock: bool,
}

/// A passive button grab.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ButtonGrab {
    pub button: u32,
    pub mods: Modifiers,
    pub window: Window,
    pub owner_events: bool,
    pub event_mask: EventMask,
    pub pointer_mode: GrabMode,
    pub keyboard_mode: GrabMode,
    pub confine_to: Option<Window>,
    pub cursor: Option<u32>,
    pub allow_scroll_lock: bool,
}

/// An active pointer grab.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PointerGrab {
    pub window: Window,
    pub owner_events: bool,
    pub event_mask: EventMask,
    pub pointer_mode: GrabMode,
    pub keyboard_mode: GrabMode,
    pub confine_to: Option<Window>,
    pub cursor: Option<u32>,
    pub time: Timestamp,
}

/// The connection to the display server.
///
/// Implementations are expected to take care of lock-modifier variants (CapsLock,
/// NumLock, ScrollLock) when installing passive grabs. Errors from passive grabs are
/// reported asynchronously by the server and are not visible here.
pub trait DisplayPort {
    /// Starts a server-wide critical section. Calls nest.
    fn grab_server(&self);
    fn ungrab_server(&self);

    fn grab_key(&self, grab: &KeyGrab);
    fn ungrab_key(&self, keycode: u32, mods: Modifiers, window: Window);
    fn ungrab_all_keys(&self, window: Window);

    fn grab_button(&self, grab: &ButtonGrab);
    fn ungrab_button(&self, button: u32, mods: Modifiers, window: Window);

    fn grab_keyboard(
        &self,
        window: Window,
        owner_events: bool,
        pointer_mode: GrabMode,
        keyboard_mode: GrabMode,
        time: Timestamp,
    ) -> Result<(), GrabFailure>;
    fn ungrab_keyboard(&self, time: Timestamp);

    fn grab_pointer(&self, grab: &PointerGrab) -> Result<(), GrabFailure>;
    fn ungrab_pointer(&self, time: Timestamp);

    fn allow_events(&self, mode: AllowEventsMode, time: Timestamp);

    fn screen_count(&self) -> usize;
    fn root_window(&self, screen: usize) -> Window;

    /// Selects or deselects bell notifications on the core keyboard.
    fn set_bell_notify(&self, enabled: bool);
}
