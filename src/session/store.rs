//! The session store: the one owner and writer of [`SessionState`].
//!
//! State is published through a `watch` channel, so guards and views
//! subscribe to transitions instead of polling. Restore runs once per store,
//! right after mount; until it finishes the state is `Loading`.

use super::{Credential, LoginError, SessionOptions, SessionState, User};
use crate::notify::{Notifier, Toast};
use crate::router::{paths, NavigateOptions, Navigator};
use crate::storage::{SessionStorage, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};
use ulid::Ulid;

struct Inner {
    state: watch::Sender<SessionState>,
    login_pending: watch::Sender<bool>,
    restored: AtomicBool,
    storage: Arc<dyn SessionStorage>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    options: SessionOptions,
}

/// Cloneable handle to the session store. All clones share one state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    /// Creates the store in `Loading` and schedules the one-time restore.
    ///
    /// Inside a Tokio runtime the restore is spawned as a task, so `Loading`
    /// stays observable until the runtime polls it. Outside a runtime the
    /// restore runs inline before this returns.
    pub fn mount(
        storage: Arc<dyn SessionStorage>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        options: SessionOptions,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::Loading);
        let (login_pending, _) = watch::channel(false);

        let store = Self {
            inner: Arc::new(Inner {
                state,
                login_pending,
                restored: AtomicBool::new(false),
                storage,
                navigator,
                notifier,
                options,
            }),
        };

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let store_for_restore = store.clone();
            handle.spawn(async move {
                tokio::task::yield_now().await;
                store_for_restore.restore();
            });
        } else {
            store.restore();
        }

        store
    }

    /// Reads the persisted marker and leaves `Loading`. Only the first call
    /// has any effect.
    fn restore(&self) {
        if self.inner.restored.swap(true, Ordering::SeqCst) {
            return;
        }

        let next = match self.inner.storage.get(ACCESS_TOKEN_KEY) {
            Ok(Some(_)) => SessionState::Authenticated(self.inner.options.restored_user()),
            Ok(None) => SessionState::Unauthenticated,
            Err(err) => {
                warn!("failed to read session marker, treating as signed out: {err}");
                SessionState::Unauthenticated
            }
        };

        debug!(status = %next.status(), "session restored");

        // a logout issued while loading has already left `Loading`; keep it
        self.inner.state.send_if_modified(|state| {
            if state.is_loading() {
                *state = next;
                true
            } else {
                false
            }
        });
    }

    /// Current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Receiver notified on every state transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.inner.state.borrow().user().cloned()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated()
    }

    /// Waits until restore has completed and returns the resulting state.
    pub async fn ready(&self) -> SessionState {
        let mut receiver = self.subscribe();
        let state = match receiver.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            // unreachable while `self` holds the sender
            Err(_) => self.snapshot(),
        };
        state
    }

    /// True while a login attempt is outstanding. Views disable resubmission
    /// while this is set.
    #[must_use]
    pub fn login_pending(&self) -> bool {
        *self.inner.login_pending.borrow()
    }

    #[must_use]
    pub fn subscribe_login_pending(&self) -> watch::Receiver<bool> {
        self.inner.login_pending.subscribe()
    }

    /// Signs in after the simulated round trip.
    ///
    /// Overlapping attempts are rejected: a call made while another login is
    /// still outstanding fails immediately with [`LoginError::InProgress`].
    ///
    /// # Errors
    /// Returns [`LoginError::MissingCredentials`] when either field is empty;
    /// any existing session is then signed out and its marker removed. Returns
    /// [`LoginError::InProgress`] when another attempt is outstanding.
    #[instrument(skip_all)]
    pub async fn login(&self, email: &str, password: &str) -> Result<User, LoginError> {
        let credential = Credential::new(email, password);
        let _pending = self.begin_login()?;

        self.ready().await;

        debug!("login attempt started");
        tokio::time::sleep(self.inner.options.login_delay()).await;

        if !credential.is_complete() {
            info!("login rejected: missing credentials");
            self.forget(ACCESS_TOKEN_KEY);
            self.forget(REFRESH_TOKEN_KEY);
            self.inner.state.send_if_modified(|state| {
                if state.is_authenticated() {
                    *state = SessionState::Unauthenticated;
                    true
                } else {
                    false
                }
            });
            self.inner.notifier.notify(Toast::destructive(
                "Authentication error",
                "Incorrect e-mail or password.",
            ));
            return Err(LoginError::MissingCredentials);
        }

        self.persist(ACCESS_TOKEN_KEY, &Ulid::new().to_string());
        self.persist(REFRESH_TOKEN_KEY, &Ulid::new().to_string());

        let user = User {
            name: self.inner.options.user_name().to_string(),
            email: credential.email,
        };
        self.inner
            .state
            .send_replace(SessionState::Authenticated(user.clone()));
        info!("login succeeded");

        self.inner.notifier.notify(Toast::info(
            "Login successful",
            "Welcome to the herd management system.",
        ));
        self.inner
            .navigator
            .navigate(paths::DEFAULT_AUTHENTICATED, NavigateOptions::default());

        Ok(user)
    }

    /// Signs out. Always succeeds and always navigates to the public landing
    /// page, even when already signed out.
    ///
    /// An outstanding login is not cancelled; if it completes afterwards the
    /// session becomes authenticated again.
    pub fn logout(&self) {
        self.forget(ACCESS_TOKEN_KEY);
        self.forget(REFRESH_TOKEN_KEY);

        let previous = self.inner.state.send_replace(SessionState::Unauthenticated);
        info!(previous = %previous.status(), "logged out");

        self.inner
            .navigator
            .navigate(paths::DEFAULT_PUBLIC, NavigateOptions::default());
        self.inner.notifier.notify(Toast::info(
            "Signed out",
            "You have left the system successfully.",
        ));
    }

    fn begin_login(&self) -> Result<PendingLogin, LoginError> {
        let claimed = self.inner.login_pending.send_if_modified(|pending| {
            if *pending {
                false
            } else {
                *pending = true;
                true
            }
        });

        if claimed {
            Ok(PendingLogin {
                inner: Arc::clone(&self.inner),
            })
        } else {
            debug!("login rejected: another attempt is outstanding");
            Err(LoginError::InProgress)
        }
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(err) = self.inner.storage.set(key, value) {
            warn!("failed to persist {key}: {err}");
        }
    }

    fn forget(&self, key: &str) {
        if let Err(err) = self.inner.storage.remove(key) {
            warn!("failed to remove {key}: {err}");
        }
    }
}

/// Clears the pending-login flag when the attempt ends, including when the
/// login future is dropped mid-flight.
struct PendingLogin {
    inner: Arc<Inner>,
}

impl Drop for PendingLogin {
    fn drop(&mut self) {
        self.inner.login_pending.send_replace(false);
    }
}
