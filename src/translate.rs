
use {
    crate::{
        chord::{
            BUTTON_DOWN, BUTTON_LEFT, BUTTON_MIDDLE, BUTTON_RIGHT, BUTTON_UP, Chord, Modifiers,
        },
        keycodec::KeyCodec,
    },
    phf::phf_map,
    thiserror::Error,
};

pub(crate) static MODIFIERS: phf::Map<&'static str, Modifiers> = phf_map! {
    "C" => Modifiers::CTRL,
    "S" => Modifiers::SHIFT,
    "A" => Modifiers::MOD1,
    "M" => Modifiers::MOD1,
    "M1" => Modifiers::MOD1,
    "Mod1" => Modifiers::MOD1,
    "M2" => Modifiers::MOD2,
    "Mod2" => Modifiers::MOD2,
    "M3" => Modifiers::MOD3,
    "Mod3" => Modifiers::MOD3,
    "W" => Modifiers::MOD4,
    "M4" => Modifiers::MOD4,
    "Mod4" => Modifiers::MOD4,
    "M5" => Modifiers::MOD5,
    "Mod5" => Modifiers::MOD5,
};

static BUTTONS: phf::Map<&'static str, u32> = phf_map! {
    "Left" => BUTTON_LEFT,
    "1" => BUTTON_LEFT,
    "Button1" => BUTTON_LEFT,
    "Middle" => BUTTON_MIDDLE,
    "2" => BUTTON_MIDDLE,
    "Button2" => BUTTON_MIDDLE,
    "Right" => BUTTON_RIGHT,
    "3" => BUTTON_RIGHT,
    "Button3" => BUTTON_RIGHT,
    "Up" => BUTTON_UP,
    "4" => BUTTON_UP,
    "Button4" => BUTTON_UP,
    "Down" => BUTTON_DOWN,
    "5" => BUTTON_DOWN,
    "Button5" => BUTTON_DOWN,
};

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum TranslateError {
    #[error("Invalid modifier element in key binding: {0}")]
    InvalidModifier(String),
    #[error("Invalid Key name in key binding: {0}")]
    InvalidKeySym(String),
    #[error("No valid keycode for Key in key binding: {0}")]
    NoKeycode(String),
    #[error("Invalid button name in button binding: {0}")]
    InvalidButton(String),
}

/// What the base token of a chord names.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ChordKind {
    Key,
    Button,
}

/// Parses a chord of the form `Mod-Mod-Base`.
///
/// Every token before the last `-` must be a modifier alias. The base token is a key
/// name for [`ChordKind::Key`] and a button alias for [`ChordKind::Button`]. Matching
/// is case-sensitive and only whole tokens match, so `C--x` fails on its empty
/// modifier token.
pub fn translate(codec: &dyn KeyCodec, s: &str, kind: ChordKind) -> Result<Chord, TranslateError> {
    let res = translate_(codec, s, kind);
    if let Err(e) = &res {
        log::warn!("{}", e);
    }
    res
}

fn translate_(codec: &dyn KeyCodec, s: &str, kind: ChordKind) -> Result<Chord, TranslateError> {
    let (mod_part, base) = match s.rfind('-') {
        Some(pos) => (Some(&s[..pos]), &s[pos + 1..]),
        None => (None, s),
    };
    let mut mods = Modifiers::NONE;
    if let Some(mod_part) = mod_part {
        for token in mod_part.split('-') {
            match codec.modifier(token) {
                Some(m) => mods |= m,
                None => return Err(TranslateError::InvalidModifier(token.to_string())),
            }
        }
    }
    let code = match kind {
        ChordKind::Key => {
            let Some(sym) = codec.keysym(base) else {
                return Err(TranslateError::InvalidKeySym(base.to_string()));
            };
            match codec.keycode(sym) {
                Some(code) if code != 0 => code,
                _ => return Err(TranslateError::NoKeycode(base.to_string())),
            }
        }
        ChordKind::Button => match BUTTONS.get(base) {
            Some(&button) => button,
            None => return Err(TranslateError::InvalidButton(base.to_string())),
        },
    };
    Ok(Chord::new(mods, code))
}
