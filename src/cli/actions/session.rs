use crate::cli::{actions::Action, globals::GlobalArgs};
use crate::notify::{Toast, ToastLog, ToastVariant};
use crate::router::{paths, visit, MemoryHistory, NavigateOptions, Navigator, RouteTable, Visit};
use crate::session::{SessionState, SessionStore};
use crate::storage::FileStorage;
use anyhow::Result;
use secrecy::ExposeSecret;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// What a CLI run left behind: the session, where the user ended up and the
/// toasts raised on the way.
#[derive(Debug)]
pub struct Report {
    pub state: SessionState,
    pub location: String,
    pub screen: Option<String>,
    pub toasts: Vec<Toast>,
}

impl fmt::Display for Report {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "status:   {}", self.state.status())?;
        if let Some(user) = self.state.user() {
            writeln!(formatter, "user:     {} <{}>", user.name, user.email)?;
        }
        writeln!(formatter, "location: {}", self.location)?;
        if let Some(screen) = &self.screen {
            writeln!(formatter, "screen:   {screen}")?;
        }
        for toast in &self.toasts {
            let marker = match toast.variant {
                ToastVariant::Default => "*",
                ToastVariant::Destructive => "!",
            };
            writeln!(formatter, "{marker} {}: {}", toast.title, toast.description)?;
        }
        Ok(())
    }
}

/// Handle a session action against the file-backed session marker.
///
/// # Errors
/// Returns an error if the login is rejected or the visited path never settles.
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<Report> {
    let storage = Arc::new(FileStorage::new(&globals.state_file));
    let history = Arc::new(MemoryHistory::new(paths::LANDING));
    let toasts = Arc::new(ToastLog::new());

    let store = SessionStore::mount(
        storage,
        history.clone(),
        toasts.clone(),
        globals.session_options(),
    );
    let restored = store.ready().await;
    debug!(status = %restored.status(), "session ready");

    let mut screen = None;

    match action {
        Action::Status => {}
        Action::Login { email, password } => {
            history.navigate(paths::LOGIN, NavigateOptions::default());
            if let Err(err) = store.login(&email, password.expose_secret()).await {
                let report = Report {
                    state: store.snapshot(),
                    location: history.current(),
                    screen: None,
                    toasts: toasts.drain(),
                };
                return Err(anyhow::Error::new(err).context(report.to_string()));
            }
        }
        Action::Logout => store.logout(),
        Action::Visit { path } => {
            history.navigate(&path, NavigateOptions::default());
            match visit(&RouteTable::default(), &store.snapshot(), history.as_ref(), &path)? {
                Visit::Rendered { screen: rendered, .. } => screen = Some(rendered.to_string()),
                Visit::Pending { .. } => screen = Some("Loading".to_string()),
            }
        }
    }

    Ok(Report {
        state: store.snapshot(),
        location: history.current(),
        screen,
        toasts: toasts.drain(),
    })
}
