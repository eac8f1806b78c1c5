//! Route guards. UX-only gating: they decide whether a screen renders for the
//! current session state, they do not protect any data.

use crate::router::{paths, NavigateOptions, Navigator};
use crate::session::{SessionState, SessionStore};
use tokio::sync::watch;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Renders only for a signed-in user, otherwise sends them to `/unauthorized`.
    RequireAuth,
    /// Renders only when signed out (login, landing), otherwise sends the user
    /// to the dashboard.
    PublicOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still restoring: show a waiting indicator, neither render nor redirect.
    Pending,
    Render,
    /// Replace-navigate to the given path.
    Redirect(&'static str),
}

impl Guard {
    #[must_use]
    pub const fn redirect_target(self) -> &'static str {
        match self {
            Guard::RequireAuth => paths::UNAUTHORIZED,
            Guard::PublicOnly => paths::DEFAULT_AUTHENTICATED,
        }
    }

    #[must_use]
    pub fn evaluate(self, state: &SessionState) -> GuardDecision {
        match (self, state) {
            (_, SessionState::Loading) => GuardDecision::Pending,
            (Guard::RequireAuth, SessionState::Authenticated(_))
            | (Guard::PublicOnly, SessionState::Unauthenticated) => GuardDecision::Render,
            (Guard::RequireAuth, SessionState::Unauthenticated)
            | (Guard::PublicOnly, SessionState::Authenticated(_)) => {
                GuardDecision::Redirect(self.redirect_target())
            }
        }
    }

    /// Evaluates and performs the redirect, if any.
    pub fn enforce(self, state: &SessionState, navigator: &dyn Navigator) -> GuardDecision {
        let decision = self.evaluate(state);
        if let GuardDecision::Redirect(target) = decision {
            debug!(guard = ?self, "redirecting to {target}");
            navigator.navigate(target, NavigateOptions { replace: true });
        }
        decision
    }
}

/// Re-evaluates a guard whenever the session state changes.
pub struct GuardWatch {
    guard: Guard,
    receiver: watch::Receiver<SessionState>,
}

impl GuardWatch {
    #[must_use]
    pub fn new(guard: Guard, store: &SessionStore) -> Self {
        Self {
            guard,
            receiver: store.subscribe(),
        }
    }

    #[must_use]
    pub const fn guard(&self) -> Guard {
        self.guard
    }

    /// Decision for the latest state, marking it as seen.
    pub fn current(&mut self) -> GuardDecision {
        self.guard.evaluate(&self.receiver.borrow_and_update())
    }

    /// Waits for the next transition and returns the new decision. Returns
    /// `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<GuardDecision> {
        self.receiver.changed().await.ok()?;
        Some(self.current())
    }
}
