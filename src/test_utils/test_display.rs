use {
    crate::{
        chord::{Chord, Modifiers},
        display::{
            AllowEventsMode, ButtonGrab, DisplayPort, GrabFailure, GrabMode, KeyGrab,
            PointerGrab, Timestamp, Window,
        },
    },
    ahash::{AHashMap, AHashSet},
    std::cell::{Cell, RefCell},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Request {
    GrabServer,
    UngrabServer,
    GrabKey(KeyGrab),
    UngrabKey(Window, Chord),
    UngrabAllKeys(Window),
    GrabButton(ButtonGrab),
    UngrabButton(Window, Chord),
    GrabKeyboard {
        window: Window,
        pointer_mode: GrabMode,
        keyboard_mode: GrabMode,
    },
    UngrabKeyboard,
    GrabPointer(PointerGrab),
    UngrabPointer,
    AllowEvents(AllowEventsMode, Timestamp),
    BellNotify(bool),
}

/// A display that records every request and tracks the grabs that are in effect.
pub struct TestDisplay {
    roots: Vec<Window>,
    pub requests: RefCell<Vec<Request>>,
    pub key_grabs: RefCell<AHashSet<(Window, Chord)>>,
    pub button_grabs: RefCell<AHashMap<(Window, Chord), ButtonGrab>>,
    pub server_grab_depth: Cell<u32>,
    /// Key grab changes seen while the server was not grabbed.
    pub unbracketed_key_grabs: Cell<usize>,
    pub keyboard_grabbed: Cell<bool>,
    pub pointer_grabbed: Cell<bool>,
    pub keyboard_grab_result: Cell<Result<(), GrabFailure>>,
    pub pointer_grab_result: Cell<Result<(), GrabFailure>>,
    pub bell_notify: Cell<bool>,
}

impl TestDisplay {
    pub fn new(num_screens: usize) -> Self {
        Self {
            roots: (0..num_screens as Window).map(|i| 0x100 + i).collect(),
            requests: Default::default(),
            key_grabs: Default::default(),
            button_grabs: Default::default(),
            server_grab_depth: Default::default(),
            unbracketed_key_grabs: Default::default(),
            keyboard_grabbed: Default::default(),
            pointer_grabbed: Default::default(),
            keyboard_grab_result: Cell::new(Ok(())),
            pointer_grab_result: Cell::new(Ok(())),
            bell_notify: Default::default(),
        }
    }

    pub fn root(&self, screen: usize) -> Window {
        self.roots[screen]
    }

    pub fn take_requests(&self) -> Vec<Request> {
        self.requests.take()
    }

    pub fn count(&self, f: impl Fn(&Request) -> bool) -> usize {
        self.requests.borrow().iter().filter(|r| f(r)).count()
    }

    pub fn key_grabs_on(&self, window: Window) -> AHashSet<Chord> {
        self.key_grabs
            .borrow()
            .iter()
            .filter(|(w, _)| *w == window)
            .map(|(_, c)| *c)
            .collect()
    }

    pub fn button_grab(&self, window: Window, chord: Chord) -> Option<ButtonGrab> {
        self.button_grabs.borrow().get(&(window, chord)).copied()
    }

    fn push(&self, request: Request) {
        self.requests.borrow_mut().push(request);
    }

    fn key_grab_changed(&self) {
        if self.server_grab_depth.get() == 0 {
            self.unbracketed_key_grabs
                .set(self.unbracketed_key_grabs.get() + 1);
        }
    }
}

impl DisplayPort for TestDisplay {
    fn grab_server(&self) {
        self.server_grab_depth.set(self.server_grab_depth.get() + 1);
        self.push(Request::GrabServer);
    }

    fn ungrab_server(&self) {
        assert!(self.server_grab_depth.get() > 0, "unbalanced server ungrab");
        self.server_grab_depth.set(self.server_grab_depth.get() - 1);
        self.push(Request::UngrabServer);
    }

    fn grab_key(&self, grab: &KeyGrab) {
        self.key_grab_changed();
        self.key_grabs
            .borrow_mut()
            .insert((grab.window, Chord::new(grab.mods, grab.keycode)));
        self.push(Request::GrabKey(*grab));
    }

    fn ungrab_key(&self, keycode: u32, mods: Modifiers, window: Window) {
        let chord = Chord::new(mods, keycode);
        self.key_grab_changed();
        self.key_grabs.borrow_mut().remove(&(window, chord));
        self.push(Request::UngrabKey(window, chord));
    }

    fn ungrab_all_keys(&self, window: Window) {
        self.key_grab_changed();
        self.key_grabs.borrow_mut().retain(|(w, _)| *w != window);
        self.push(Request::UngrabAllKeys(window));
    }

    fn grab_button(&self, grab: &ButtonGrab) {
        self.button_grabs
            .borrow_mut()
            .insert((grab.window, Chord::new(grab.mods, grab.button)), *grab);
        self.push(Request::GrabButton(*grab));
    }

    fn ungrab_button(&self, button: u32, mods: Modifiers, window: Window) {
        let chord = Chord::new(mods, button);
        self.button_grabs.borrow_mut().remove(&(window, chord));
        self.push(Request::UngrabButton(window, chord));
    }

    fn grab_keyboard(
        &self,
        window: Window,
        _owner_events: bool,
        pointer_mode: GrabMode,
        keyboard_mode: GrabMode,
        _time: Timestamp,
    ) -> Result<(), GrabFailure> {
        self.push(Request::GrabKeyboard {
            window,
            pointer_mode,
            keyboard_mode,
        });
        let res = self.keyboard_grab_result.get();
        if res.is_ok() {
            self.keyboard_grabbed.set(true);
        }
        res
    }

    fn ungrab_keyboard(&self, _time: Timestamp) {
        self.keyboard_grabbed.set(false);
        self.push(Request::UngrabKeyboard);
    }

    fn grab_pointer(&self, grab: &PointerGrab) -> Result<(), GrabFailure> {
        self.push(Request::GrabPointer(*grab));
        let res = self.pointer_grab_result.get();
        if res.is_ok() {
            self.pointer_grabbed.set(true);
        }
        res
    }

    fn ungrab_pointer(&self, _time: Timestamp) {
        self.pointer_grabbed.set(false);
        self.push(Request::UngrabPointer);
    }

    fn allow_events(&self, mode: AllowEventsMode, time: Timestamp) {
        self.push(Request::AllowEvents(mode, time));
    }

    fn screen_count(&self) -> usize {
        self.roots.len()
    }

    fn root_window(&self, screen: usize) -> Window {
        self.roots[screen]
    }

    fn set_bell_notify(&self, enabled: bool) {
        self.bell_notify.set(enabled);
        self.push(Request::BellNotify(enabled));
    }
}
