//! Session state and the store that owns it.
//!
//! The store restores the session once on mount from the persisted marker,
//! then moves only between authenticated and unauthenticated through
//! `login` and `logout`. Nothing here verifies credentials or tokens; the
//! marker's presence is trusted as-is.

mod error;
mod store;
mod types;

pub use error::LoginError;
pub use store::SessionStore;
pub use types::{Credential, SessionOptions, SessionState, SessionStatus, User};
