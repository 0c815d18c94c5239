use crate::display::Window;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ClientId(pub u64);

/// The two windows of a managed client that pointer grabs are installed on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ClientWindows {
    pub id: ClientId,
    /// The decoration window that contains the client.
    pub frame: Window,
    /// The window the client's own window is reparented into.
    pub plate: Window,
}

#[derive(Clone, Debug, Default)]
pub struct ManagedScreen {
    pub clients: Vec<ClientWindows>,
}

/// The window manager's view of screens and clients.
pub trait ClientRegistry {
    /// Returns the clients of `screen`, or `None` if the screen is not managed.
    fn screen(&self, screen: usize) -> Option<ManagedScreen>;

    fn focused_client(&self) -> Option<ClientId>;

    fn is_managed(&self, screen: usize) -> bool {
        self.screen(screen).is_some()
    }
}
