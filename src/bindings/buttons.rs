use {
    crate::{
        bindings::Bindings,
        chord::Chord,
        data::{MouseAction, MouseCallback, MouseContext, MouseData},
        display::{AllowEventsMode, ButtonGrab, EventMask, GrabMode},
        error::BindingsError,
        registry::ClientWindows,
        translate::{ChordKind, translate},
    },
    linearize::{LinearizeExt, StaticMap},
    smallvec::SmallVec,
    std::mem,
};

pub(super) struct ButtonBinding {
    pub(super) chord: Chord,
    pub(super) callbacks: StaticMap<MouseAction, Vec<MouseCallback>>,
}

impl Bindings {
    /// Binds a button chord such as `A-Left` in `context`.
    ///
    /// The first binding of a chord in a context grabs it on every managed client.
    pub fn add_button(
        &self,
        button: &str,
        context: MouseContext,
        action: MouseAction,
        callback: MouseCallback,
    ) -> Result<(), BindingsError> {
        let chord = translate(&*self.codec, button, ChordKind::Button)
            .map_err(BindingsError::InvalidBinding)?;
        let mut buttons = self.buttons.borrow_mut();
        let list = &mut buttons[context];
        let idx = match list.iter().position(|b| b.chord == chord) {
            Some(idx) => idx,
            None => {
                list.push(ButtonBinding {
                    chord,
                    callbacks: Default::default(),
                });
                for (_, screen) in self.managed_screens() {
                    for client in &screen.clients {
                        self.grab_button(true, chord, context, client);
                    }
                }
                list.len() - 1
            }
        };
        list[idx].callbacks[action].push(callback);
        Ok(())
    }

    /// Installs or removes the passive grab of `chord` on the window of `client` that
    /// corresponds to `context`.
    ///
    /// Only frames and plates are grabbed. All other contexts receive button events
    /// without grabs.
    pub fn grab_button(
        &self,
        install: bool,
        chord: Chord,
        context: MouseContext,
        client: &ClientWindows,
    ) {
        let (window, event_mask, pointer_mode) = match context {
            MouseContext::Frame => (
                client.frame,
                EventMask::BUTTON_PRESS | EventMask::BUTTON_MOTION | EventMask::BUTTON_RELEASE,
                GrabMode::Async,
            ),
            // Sync mode only delivers the press. `fire_button` replays it to the client
            // and the host synthesizes the release.
            MouseContext::Window => (client.plate, EventMask::BUTTON_PRESS, GrabMode::Sync),
            _ => return,
        };
        if install {
            self.display.grab_button(&ButtonGrab {
                button: chord.code,
                mods: chord.mods,
                window,
                owner_events: false,
                event_mask,
                pointer_mode,
                keyboard_mode: GrabMode::Async,
                confine_to: None,
                cursor: None,
                allow_scroll_lock: false,
            });
        } else {
            self.display.ungrab_button(chord.code, chord.mods, window);
        }
    }

    /// Installs or removes all button grabs of a client. Called when the client
    /// becomes managed and when it is unmanaged.
    pub fn grab_buttons(&self, install: bool, client: &ClientWindows) {
        let buttons = self.buttons.borrow();
        for context in MouseContext::variants() {
            for binding in &buttons[context] {
                self.grab_button(install, binding.chord, context, client);
            }
        }
    }

    pub fn fire_button(&self, data: &MouseData) {
        if data.context == MouseContext::Window {
            self.display
                .allow_events(AllowEventsMode::ReplayPointer, data.time);
        }
        let chord = Chord::new(data.mods, data.button);
        let callbacks: SmallVec<[MouseCallback; 2]> = {
            let buttons = self.buttons.borrow();
            buttons[data.context]
                .iter()
                .filter(|b| b.chord == chord)
                .flat_map(|b| b.callbacks[data.action].iter().cloned())
                .collect()
        };
        for callback in callbacks {
            callback.call(data);
        }
    }

    /// Removes every button binding and its grabs on all managed clients.
    pub fn remove_all_buttons(&self) {
        let buttons = mem::take(&mut *self.buttons.borrow_mut());
        let screens: Vec<_> = self.managed_screens().collect();
        for context in MouseContext::variants() {
            for binding in &buttons[context] {
                for (_, screen) in &screens {
                    for client in &screen.clients {
                        self.grab_button(false, binding.chord, context, client);
                    }
                }
            }
        }
    }

    /// The number of distinct button chords bound in `context`.
    pub fn button_count(&self, context: MouseContext) -> usize {
        self.buttons.borrow()[context].len()
    }
}
