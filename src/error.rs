use {
    crate::{display::GrabFailure, translate::TranslateError},
    thiserror::Error,
};

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum BindingsError {
    #[error("The binding could not be parsed")]
    InvalidBinding(#[source] TranslateError),
    #[error("The key sequence is empty")]
    EmptySequence,
    #[error("The key sequence conflicts with an existing binding")]
    Conflict,
    #[error("The keyboard is already grabbed")]
    AlreadyGrabbed,
    #[error("Screen {0} is not managed")]
    UnmanagedScreen(usize),
    #[error("The server refused the grab")]
    ServerGrabFailed(#[source] GrabFailure),
}
