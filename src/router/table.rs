use super::{paths, Navigator};
use crate::guard::{Guard, GuardDecision};
use crate::session::SessionState;
use std::fmt;
use thiserror::Error;
use tracing::debug;

const MAX_REDIRECTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Login,
    Dashboard,
    Animals,
    Vaccination,
    Weights,
    Reproduction,
    Pastures,
    Reports,
    Settings,
    Unauthorized,
    NotFound,
}

impl fmt::Display for Screen {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            Screen::Landing => "Landing",
            Screen::Login => "Login",
            Screen::Dashboard => "Dashboard",
            Screen::Animals => "Animals",
            Screen::Vaccination => "Vaccination",
            Screen::Weights => "Weights",
            Screen::Reproduction => "Reproduction",
            Screen::Pastures => "Pastures",
            Screen::Reports => "Reports",
            Screen::Settings => "Settings",
            Screen::Unauthorized => "Access denied",
            Screen::NotFound => "Page not found",
        };
        formatter.write_str(title)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub screen: Screen,
    pub guard: Option<Guard>,
}

const NOT_FOUND: Route = Route {
    path: "*",
    screen: Screen::NotFound,
    guard: None,
};

#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        let public = |path, screen| Route {
            path,
            screen,
            guard: Some(Guard::PublicOnly),
        };
        let protected = |path, screen| Route {
            path,
            screen,
            guard: Some(Guard::RequireAuth),
        };

        Self {
            routes: vec![
                public(paths::LANDING, Screen::Landing),
                public(paths::LOGIN, Screen::Login),
                protected(paths::DASHBOARD, Screen::Dashboard),
                protected(paths::ANIMALS, Screen::Animals),
                protected(paths::VACCINATION, Screen::Vaccination),
                protected(paths::WEIGHTS, Screen::Weights),
                protected(paths::REPRODUCTION, Screen::Reproduction),
                protected(paths::PASTURES, Screen::Pastures),
                protected(paths::REPORTS, Screen::Reports),
                protected(paths::SETTINGS, Screen::Settings),
                Route {
                    path: paths::UNAUTHORIZED,
                    screen: Screen::Unauthorized,
                    guard: None,
                },
            ],
        }
    }
}

impl RouteTable {
    /// Matches `path` exactly, ignoring a trailing slash and any query or
    /// fragment. Unknown paths resolve to the unguarded not-found screen.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        self.routes
            .iter()
            .find(|route| route.path == normalized)
            .copied()
            .unwrap_or(NOT_FOUND)
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Visit {
    /// The guard is waiting for the session to restore.
    Pending { path: String },
    Rendered { path: String, screen: Screen },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("too many redirects while resolving {0}")]
    TooManyRedirects(String),
}

/// Resolves `path` against the table, applies its guard for `state` and
/// follows redirects until a screen renders or a guard is pending.
///
/// # Errors
/// Returns an error if redirects do not settle.
pub fn visit(
    table: &RouteTable,
    state: &SessionState,
    navigator: &dyn Navigator,
    path: &str,
) -> Result<Visit, RouterError> {
    let mut current = path.to_string();

    for _ in 0..=MAX_REDIRECTS {
        let route = table.resolve(&current);
        let decision = route
            .guard
            .map_or(GuardDecision::Render, |guard| guard.enforce(state, navigator));

        match decision {
            GuardDecision::Pending => return Ok(Visit::Pending { path: current }),
            GuardDecision::Render => {
                debug!(screen = %route.screen, "rendering {current}");
                return Ok(Visit::Rendered {
                    path: current,
                    screen: route.screen,
                });
            }
            GuardDecision::Redirect(target) => current = target.to_string(),
        }
    }

    Err(RouterError::TooManyRedirects(path.to_string()))
}
