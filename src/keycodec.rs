use crate::{chord::Modifiers, translate::MODIFIERS};

/// A keysym value as defined by the core protocol.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct KeySym(pub u32);

/// Maps symbolic names to the values the server understands.
///
/// Keycodes depend on the keyboard mapping that is currently loaded, so the codec is
/// consulted every time a chord is translated.
pub trait KeyCodec {
    /// Resolves a key name such as `Return` or `F1`.
    fn keysym(&self, name: &str) -> Option<KeySym>;

    /// Returns the keycode that produces `sym` in the current mapping, if any.
    fn keycode(&self, sym: KeySym) -> Option<u32>;

    fn modifier(&self, name: &str) -> Option<Modifiers> {
        MODIFIERS.get(name).copied()
    }
}
