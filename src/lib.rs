//! Key chain and pointer binding engine for stacking X11 window managers.
//!
//! Users declare key chord sequences, per-context button chords, and event
//! subscriptions. The engine installs the corresponding passive grabs through a
//! [`DisplayPort`](display::DisplayPort) and dispatches the events the host delivers to
//! the registered callbacks.

#![allow(clippy::len_zero, clippy::collapsible_if, clippy::collapsible_else_if)]

#[macro_use]
mod macros;
mod bindings;
pub mod callback;
pub mod chord;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod key_tree;
pub mod keycodec;
pub mod registry;
#[cfg(test)]
mod test_utils;
pub mod timer;
pub mod translate;

pub use {
    bindings::Bindings,
    callback::Callback,
    chord::{Chord, Modifiers},
    config::{BindingsConfig, parse_config},
    data::{
        EventAction, EventCallback, EventData, KeyAction, KeyCallback, KeyData, MouseAction,
        MouseCallback, MouseContext, MouseData,
    },
    error::BindingsError,
};
