use {
    crate::registry::{ClientId, ClientRegistry, ClientWindows, ManagedScreen},
    std::cell::{Cell, RefCell},
};

pub struct TestRegistry {
    screens: RefCell<Vec<Option<ManagedScreen>>>,
    pub focused: Cell<Option<ClientId>>,
}

impl TestRegistry {
    pub fn new(num_screens: usize) -> Self {
        Self {
            screens: RefCell::new(vec![Some(ManagedScreen::default()); num_screens]),
            focused: Default::default(),
        }
    }

    pub fn unmanage_screen(&self, screen: usize) {
        self.screens.borrow_mut()[screen] = None;
    }

    pub fn add_client(&self, screen: usize, id: u64) -> ClientWindows {
        let client = ClientWindows {
            id: ClientId(id),
            frame: 0x1000 + 2 * id as u32,
            plate: 0x1000 + 2 * id as u32 + 1,
        };
        if let Some(screen) = &mut self.screens.borrow_mut()[screen] {
            screen.clients.push(client);
        }
        client
    }

    pub fn remove_client(&self, screen: usize, id: ClientId) {
        if let Some(screen) = &mut self.screens.borrow_mut()[screen] {
            screen.clients.retain(|c| c.id != id);
        }
    }
}

impl ClientRegistry for TestRegistry {
    fn screen(&self, screen: usize) -> Option<ManagedScreen> {
        self.screens.borrow().get(screen).cloned().flatten()
    }

    fn focused_client(&self) -> Option<ClientId> {
        self.focused.get()
    }
}
