use {
    crate::{callback::Callback, chord::Modifiers, display::Timestamp, registry::ClientId},
    linearize::Linearize,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum KeyAction {
    Press,
    Release,
}

/// The kind of window a pointer event targets.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Linearize)]
pub enum MouseContext {
    Frame,
    Titlebar,
    Handle,
    /// The plate, i.e. the client's own window.
    Window,
    MaximizeButton,
    CloseButton,
    IconifyButton,
    AllDesktopsButton,
    Grip,
    Root,
    MenuItem,
}

/// Pointer actions a callback can subscribe to.
///
/// Clicks, double clicks, and motion are synthesized by the host's pointer handling
/// and arrive here fully formed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Linearize)]
pub enum MouseAction {
    Press,
    Release,
    Click,
    DoubleClick,
    Motion,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Linearize)]
pub enum EventAction {
    EnterWindow,
    LeaveWindow,
    PlaceWindow,
    NewWindow,
    CloseWindow,
    Startup,
    Shutdown,
    Focus,
    Bell,
    UrgentWindow,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyData {
    pub screen: usize,
    pub client: Option<ClientId>,
    pub time: Timestamp,
    pub mods: Modifiers,
    pub keycode: u32,
    pub action: KeyAction,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MouseData {
    pub screen: usize,
    pub context: MouseContext,
    pub time: Timestamp,
    pub client: Option<ClientId>,
    pub button: u32,
    pub mods: Modifiers,
    pub action: MouseAction,
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventData {
    pub screen: usize,
    pub client: Option<ClientId>,
    pub action: EventAction,
    pub mods: Modifiers,
}

pub type KeyCallback = Callback<KeyData>;
pub type MouseCallback = Callback<MouseData>;
pub type EventCallback = Callback<EventData>;
