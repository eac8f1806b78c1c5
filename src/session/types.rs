use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1000);
const DEFAULT_USER_NAME: &str = "Demo User";
const DEFAULT_RESTORE_EMAIL: &str = "demo@example.com";

/// Signed-in user as shown by the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Authenticated,
    Unauthenticated,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Loading => write!(formatter, "loading"),
            SessionStatus::Authenticated => write!(formatter, "authenticated"),
            SessionStatus::Unauthenticated => write!(formatter, "unauthenticated"),
        }
    }
}

/// Current authentication state. The user only exists in the authenticated
/// variant, so "user present iff authenticated" holds by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    Authenticated(User),
    Unauthenticated,
}

impl SessionState {
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        match self {
            SessionState::Loading => SessionStatus::Loading,
            SessionState::Authenticated(_) => SessionStatus::Authenticated,
            SessionState::Unauthenticated => SessionStatus::Unauthenticated,
        }
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Login input. Consumed once and never stored; the password is redacted in
/// `Debug` output.
#[derive(Debug)]
pub struct Credential {
    pub email: String,
    pub password: SecretString,
}

impl Credential {
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: SecretString::from(password.to_string()),
        }
    }

    /// Both fields non-empty. Shape checks belong to the caller.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.expose_secret().is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct SessionOptions {
    login_delay: Duration,
    user_name: String,
    restore_email: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            login_delay: DEFAULT_LOGIN_DELAY,
            user_name: DEFAULT_USER_NAME.to_string(),
            restore_email: DEFAULT_RESTORE_EMAIL.to_string(),
        }
    }
}

impl SessionOptions {
    #[must_use]
    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    #[must_use]
    pub fn with_user_name(mut self, name: &str) -> Self {
        self.user_name = name.to_string();
        self
    }

    #[must_use]
    pub fn with_restore_email(mut self, email: &str) -> Self {
        self.restore_email = email.to_string();
        self
    }

    #[must_use]
    pub const fn login_delay(&self) -> Duration {
        self.login_delay
    }

    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Placeholder user attached to a session restored from the marker.
    #[must_use]
    pub fn restored_user(&self) -> User {
        User {
            name: self.user_name.clone(),
            email: self.restore_email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_present_only_when_authenticated() {
        let user = User {
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
        };
        let states = [
            SessionState::Loading,
            SessionState::Authenticated(user),
            SessionState::Unauthenticated,
        ];
        for state in &states {
            assert_eq!(
                state.user().is_some(),
                state.status() == SessionStatus::Authenticated
            );
        }
    }

    #[test]
    fn credential_requires_both_fields() {
        assert!(Credential::new("a@b.c", "pw").is_complete());
        assert!(!Credential::new("", "pw").is_complete());
        assert!(!Credential::new("a@b.c", "").is_complete());
        assert!(!Credential::new("", "").is_complete());
        // truthiness only, whitespace counts
        assert!(Credential::new(" ", " ").is_complete());
    }

    #[test]
    fn credential_debug_hides_password() {
        let credential = Credential::new("a@b.c", "hunter2");
        assert!(!format!("{credential:?}").contains("hunter2"));
    }

    #[test]
    fn user_rejects_extra_fields() {
        let parsed: Result<User, _> =
            serde_json::from_str(r#"{"name":"n","email":"e","role":"admin"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn options_defaults_and_overrides() {
        let options = SessionOptions::default();
        assert_eq!(options.login_delay(), Duration::from_millis(1000));
        assert_eq!(options.restored_user().email, "demo@example.com");

        let options = options
            .with_login_delay(Duration::ZERO)
            .with_user_name("Rancher")
            .with_restore_email("rancher@farm.com");
        assert_eq!(options.login_delay(), Duration::ZERO);
        assert_eq!(
            options.restored_user(),
            User {
                name: "Rancher".to_string(),
                email: "rancher@farm.com".to_string()
            }
        );
    }
}
