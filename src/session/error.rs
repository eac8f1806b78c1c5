use thiserror::Error;

/// Reasons a login attempt is rejected. None of these are fatal; the caller
/// may try again right away.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    #[error("email and password are required")]
    MissingCredentials,
    #[error("a login attempt is already in progress")]
    InProgress,
}
