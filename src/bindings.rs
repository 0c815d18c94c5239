//! The binding engine
//!
//! `Bindings` owns the key chain tree, the per-context button tables, and the event
//! subscriptions. Declarations mutate these tables and keep the server's passive grabs
//! in sync with them. The host's event loop feeds key, button, and other events back
//! in through the `fire_*` functions, which run the matching callbacks.
//!
//! All functions must be called on the event loop thread. Callbacks may call back into
//! the engine. Callback lists are snapshotted before they are run, so a callback that
//! adds bindings affects the next event, not the current one.

mod buttons;
mod events;
mod grabs;
mod keys;

use {
    crate::{
        chord::Chord,
        config::{BindingsConfig, DEFAULT_CHAIN_TIMEOUT, DEFAULT_RESET_KEY},
        data::{EventAction, EventCallback, KeyCallback, MouseContext},
        display::{CURRENT_TIME, DisplayPort},
        key_tree::{KeyTree, NodeId},
        keycodec::KeyCodec,
        registry::{ClientRegistry, ManagedScreen},
        timer::{TimerId, TimerService},
    },
    buttons::ButtonBinding,
    error_reporter::Report,
    linearize::StaticMap,
    std::{
        cell::{Cell, RefCell},
        rc::Rc,
        time::Duration,
    },
};

pub struct Bindings {
    display: Rc<dyn DisplayPort>,
    clients: Rc<dyn ClientRegistry>,
    codec: Rc<dyn KeyCodec>,
    timers: Rc<dyn TimerService>,

    key_tree: RefCell<KeyTree>,
    cur_pos: Cell<NodeId>,
    reset_key: Cell<Chord>,
    chain_timeout: Cell<Duration>,
    reset_timer: Cell<Option<TimerId>>,
    /// Whether the chain machine holds its own active keyboard grab.
    key_grabbed: Cell<bool>,
    keyboard_grab: RefCell<Option<KeyCallback>>,

    buttons: RefCell<StaticMap<MouseContext, Vec<ButtonBinding>>>,
    events: RefCell<StaticMap<EventAction, Vec<EventCallback>>>,
}

impl Bindings {
    pub fn new(
        display: Rc<dyn DisplayPort>,
        clients: Rc<dyn ClientRegistry>,
        codec: Rc<dyn KeyCodec>,
        timers: Rc<dyn TimerService>,
    ) -> Rc<Self> {
        let slf = Rc::new(Self {
            display,
            clients,
            codec,
            timers,
            key_tree: Default::default(),
            cur_pos: Cell::new(NodeId::ROOT),
            reset_key: Default::default(),
            chain_timeout: Cell::new(DEFAULT_CHAIN_TIMEOUT),
            reset_timer: Default::default(),
            key_grabbed: Default::default(),
            keyboard_grab: Default::default(),
            buttons: Default::default(),
            events: Default::default(),
        });
        if let Err(e) = slf.set_reset_key(DEFAULT_RESET_KEY) {
            log::warn!("Could not set the default reset key: {}", Report::new(e));
        }
        slf
    }

    pub fn with_config(
        display: Rc<dyn DisplayPort>,
        clients: Rc<dyn ClientRegistry>,
        codec: Rc<dyn KeyCodec>,
        timers: Rc<dyn TimerService>,
        config: &BindingsConfig,
    ) -> Rc<Self> {
        let slf = Self::new(display, clients, codec, timers);
        if config.reset_key != DEFAULT_RESET_KEY {
            if let Err(e) = slf.set_reset_key(&config.reset_key) {
                log::warn!(
                    "Could not set the reset key to `{}`: {}",
                    config.reset_key,
                    Report::new(e)
                );
            }
        }
        slf.set_chain_timeout(config.chain_timeout());
        slf
    }

    /// Returns the managed screens and their clients.
    fn managed_screens(&self) -> impl Iterator<Item = (usize, ManagedScreen)> + '_ {
        (0..self.display.screen_count())
            .filter_map(|idx| self.clients.screen(idx).map(|screen| (idx, screen)))
    }
}

impl Drop for Bindings {
    fn drop(&mut self) {
        if let Some(id) = self.reset_timer.take() {
            self.timers.cancel(id);
        }
        if self.key_grabbed.replace(false) {
            self.display.ungrab_keyboard(CURRENT_TIME);
        }
        self.remove_all_keys();
        self.remove_all_events();
    }
}
