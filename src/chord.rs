//! Modifier masks and chords

use std::fmt::{Debug, Display, Formatter};

bitflags! {
    /// Zero or more keyboard modifiers, using the core protocol bit layout.
    #[derive(Copy, Clone, Eq, PartialEq, Default, Hash)]
    pub struct Modifiers(pub u32) {
        /// The Shift modifier.
        pub const SHIFT = 1 << 0,
        /// The CapsLock modifier.
        pub const LOCK = 1 << 1,
        /// The Ctrl modifier.
        pub const CTRL = 1 << 2,
        /// The Mod1 modifier, i.e., Alt.
        pub const MOD1 = 1 << 3,
        /// The Mod2 modifier, i.e., NumLock.
        pub const MOD2 = 1 << 4,
        /// The Mod3 modifier.
        pub const MOD3 = 1 << 5,
        /// The Mod4 modifier, i.e., Logo.
        pub const MOD4 = 1 << 6,
        /// The Mod5 modifier.
        pub const MOD5 = 1 << 7,
    }
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Modifiers(0);
    /// Alias for `MOD1`.
    pub const ALT: Self = Self::MOD1;
    /// Alias for `MOD4`.
    pub const LOGO: Self = Self::MOD4;
}

pub const BUTTON_LEFT: u32 = 1;
pub const BUTTON_MIDDLE: u32 = 2;
pub const BUTTON_RIGHT: u32 = 3;
pub const BUTTON_UP: u32 = 4;
pub const BUTTON_DOWN: u32 = 5;

/// A modifier mask together with a keycode or a pointer button.
///
/// Whether `code` is a keycode or a button number depends on where the chord is used.
/// Key chords and button chords never share a table.
#[derive(Copy, Clone, Eq, PartialEq, Default, Hash)]
pub struct Chord {
    pub mods: Modifiers,
    pub code: u32,
}

impl Chord {
    pub const fn new(mods: Modifiers, code: u32) -> Self {
        Self { mods, code }
    }
}

impl Debug for Chord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}+{}", self.mods, self.code)
    }
}

impl Display for Chord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        const NAMES: [(Modifiers, &str); 8] = [
            (Modifiers::CTRL, "C"),
            (Modifiers::SHIFT, "S"),
            (Modifiers::MOD1, "A"),
            (Modifiers::MOD2, "M2"),
            (Modifiers::MOD3, "M3"),
            (Modifiers::MOD4, "W"),
            (Modifiers::MOD5, "M5"),
            (Modifiers::LOCK, "Lock"),
        ];
        for (mask, name) in NAMES {
            if self.mods.contains(mask) {
                write!(f, "{}-", name)?;
            }
        }
        write!(f, "{}", self.code)
    }
}
