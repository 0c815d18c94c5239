use {
    crate::{
        bindings::Bindings,
        chord::{Chord, Modifiers},
        data::{KeyAction, KeyCallback, KeyData},
        display::{AllowEventsMode, CURRENT_TIME, GrabMode, KeyGrab, Timestamp},
        error::BindingsError,
        key_tree::{Lookup, NodeId},
        translate::{ChordKind, translate},
    },
    error_reporter::Report,
    run_on_drop::on_drop,
    smallvec::SmallVec,
    std::{rc::Rc, time::Duration},
};

type Sequence = SmallVec<[Chord; 4]>;

impl Bindings {
    /// Binds a sequence of key chords such as `["C-x", "C-c"]`.
    ///
    /// Binding a sequence that is already bound adds another callback to it. A
    /// sequence that is a strict prefix of an existing binding, or that has one as a
    /// strict prefix, is rejected with [`BindingsError::Conflict`].
    pub fn add_key<S: AsRef<str>>(
        &self,
        keys: &[S],
        callback: KeyCallback,
    ) -> Result<(), BindingsError> {
        let seq = self.build_sequence(keys)?;
        {
            let mut tree = self.key_tree.borrow_mut();
            match tree.find(&seq) {
                Lookup::Conflict => {
                    log::debug!("Key binding {:?} conflicts with an existing binding", seq);
                    return Err(BindingsError::Conflict);
                }
                Lookup::Found(terminal) => {
                    tree.push_callback(terminal, callback);
                    return Ok(());
                }
                Lookup::NotFound => {}
            }
        }
        // No key press can slip through while the passive grabs are reinstalled.
        self.display.grab_server();
        let _ungrab = on_drop(|| self.display.ungrab_server());
        self.grab_keys(false);
        let res = self.key_tree.borrow_mut().assimilate(&seq, callback);
        self.grab_keys(true);
        res.map(drop)
    }

    fn build_sequence<S: AsRef<str>>(&self, keys: &[S]) -> Result<Sequence, BindingsError> {
        if keys.is_empty() {
            return Err(BindingsError::EmptySequence);
        }
        keys.iter()
            .map(|key| {
                translate(&*self.codec, key.as_ref(), ChordKind::Key)
                    .map_err(BindingsError::InvalidBinding)
            })
            .collect()
    }

    /// Removes every key binding and aborts any chain in progress.
    pub fn remove_all_keys(&self) {
        self.reset_chains();
        self.grab_keys(false);
        self.key_tree.borrow_mut().clear();
        self.grab_keys(true);
    }

    /// Installs or removes the passive grabs for the first chord of every key binding
    /// on the root window of every managed screen.
    ///
    /// Removal drops all key grabs on the root windows, not only the ones installed
    /// here.
    pub fn grab_keys(&self, install: bool) {
        let tree = self.key_tree.borrow();
        for screen in 0..self.display.screen_count() {
            if !self.clients.is_managed(screen) {
                continue;
            }
            let root = self.display.root_window(screen);
            if !install {
                self.display.ungrab_all_keys(root);
                continue;
            }
            for (_, node) in tree.children(NodeId::ROOT) {
                let chord = node.chord();
                self.display.grab_key(&KeyGrab {
                    keycode: chord.code,
                    mods: chord.mods,
                    window: root,
                    owner_events: false,
                    pointer_mode: GrabMode::Async,
                    keyboard_mode: GrabMode::Sync,
                    allow_scroll_lock: false,
                });
            }
        }
    }

    pub fn set_reset_key(&self, key: &str) -> Result<(), BindingsError> {
        let chord = translate(&*self.codec, key, ChordKind::Key)
            .map_err(BindingsError::InvalidBinding)?;
        self.reset_key.set(chord);
        Ok(())
    }

    pub fn reset_key(&self) -> Chord {
        self.reset_key.get()
    }

    /// Sets how long a partially entered chain stays active. Takes effect at the next
    /// chain step.
    pub fn set_chain_timeout(&self, timeout: Duration) {
        self.chain_timeout.set(timeout);
    }

    /// Handles a key event delivered through a passive or active keyboard grab.
    pub fn fire_key(
        self: &Rc<Self>,
        screen: usize,
        mods: Modifiers,
        keycode: u32,
        time: Timestamp,
        action: KeyAction,
    ) {
        let data = KeyData {
            screen,
            client: self.clients.focused_client(),
            time,
            mods,
            keycode,
            action,
        };
        let grab = self.keyboard_grab.borrow().clone();
        if let Some(grab) = grab {
            grab.call(&data);
        }
        if action == KeyAction::Release {
            return;
        }
        let chord = Chord::new(mods, keycode);
        if chord == self.reset_key.get() {
            log::trace!("Reset key pressed");
            self.reset_chains();
            self.display
                .allow_events(AllowEventsMode::AsyncKeyboard, CURRENT_TIME);
            return;
        }
        let matched = {
            let tree = self.key_tree.borrow();
            tree.child(self.cur_pos.get(), chord).map(|id| {
                let node = tree.node(id);
                let callbacks: SmallVec<[KeyCallback; 2]> =
                    node.callbacks().iter().cloned().collect();
                (id, node.is_chain(), callbacks)
            })
        };
        // Without a match the event stays frozen until the next matched press or the
        // reset key releases it.
        let Some((node, chain, callbacks)) = matched else {
            return;
        };
        if chain {
            self.enter_chain(screen, node);
            return;
        }
        for callback in callbacks {
            callback.call(&data);
        }
        self.display
            .allow_events(AllowEventsMode::AsyncKeyboard, CURRENT_TIME);
        self.reset_chains();
    }

    fn enter_chain(self: &Rc<Self>, screen: usize, node: NodeId) {
        self.arm_reset_timer();
        if !self.key_grabbed.get() && self.keyboard_grab.borrow().is_none() {
            let root = self.display.root_window(screen);
            let res = self.display.grab_keyboard(
                root,
                false,
                GrabMode::Async,
                GrabMode::Sync,
                CURRENT_TIME,
            );
            match res {
                Ok(()) => self.key_grabbed.set(true),
                Err(e) => log::warn!(
                    "Could not grab the keyboard for a key chain: {}",
                    Report::new(e)
                ),
            }
        }
        self.cur_pos.set(node);
        log::trace!("Entered key chain at depth {}", self.chain_depth());
        self.display
            .allow_events(AllowEventsMode::AsyncKeyboard, CURRENT_TIME);
    }

    fn arm_reset_timer(self: &Rc<Self>) {
        if let Some(id) = self.reset_timer.take() {
            self.timers.cancel(id);
        }
        let slf = Rc::downgrade(self);
        let id = self.timers.schedule(
            self.chain_timeout.get(),
            Box::new(move || {
                if let Some(slf) = slf.upgrade() {
                    log::trace!("Key chain timed out");
                    slf.reset_timer.set(None);
                    slf.reset_chains();
                }
            }),
        );
        self.reset_timer.set(Some(id));
    }

    /// Aborts the current chain and releases the chain machine's keyboard grab.
    pub fn reset_chains(&self) {
        if let Some(id) = self.reset_timer.take() {
            self.timers.cancel(id);
        }
        self.cur_pos.set(NodeId::ROOT);
        if self.key_grabbed.replace(false) && self.keyboard_grab.borrow().is_none() {
            self.display.ungrab_keyboard(CURRENT_TIME);
        }
    }

    /// The number of chords of the current chain entered so far.
    pub fn chain_depth(&self) -> usize {
        self.key_tree.borrow().node(self.cur_pos.get()).depth()
    }

    pub fn is_chain_grabbed(&self) -> bool {
        self.key_grabbed.get()
    }

    /// The first chord of every key binding, i.e. the chords that are grabbed on the
    /// root windows.
    pub fn root_chords(&self) -> Vec<Chord> {
        self.key_tree
            .borrow()
            .children(NodeId::ROOT)
            .map(|(_, node)| node.chord())
            .collect()
    }
}
