//! # Herd (livestock dashboard session core)
//!
//! `herd` holds the session and route gating logic behind the livestock
//! management dashboard. The dashboard screens themselves (animals,
//! vaccination, weights, reproduction, pastures, reports, settings) only read
//! the session; this crate decides whether they may render.
//!
//! ## Session lifecycle
//!
//! A [`session::SessionStore`] starts in `Loading`, restores once from the
//! persisted marker, then moves between `Authenticated` and `Unauthenticated`
//! through `login` and `logout`. Login is simulated: any non-empty e-mail and
//! password succeed after a fixed delay.
//!
//! ## Route gating
//!
//! [`guard::Guard::RequireAuth`] sends signed-out users to `/unauthorized`,
//! [`guard::Guard::PublicOnly`] sends signed-in users to `/dashboard`, and both
//! wait while the session is still loading. Gating is UX only; the marker is
//! trusted on presence and never verified.

pub mod cli;
pub mod guard;
pub mod notify;
pub mod router;
pub mod session;
pub mod storage;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
