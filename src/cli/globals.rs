use crate::session::SessionOptions;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub state_file: PathBuf,
    pub login_delay: Duration,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(state_file: PathBuf) -> Self {
        Self {
            state_file,
            login_delay: SessionOptions::default().login_delay(),
        }
    }

    pub fn set_login_delay(&mut self, delay: Duration) {
        self.login_delay = delay;
    }

    #[must_use]
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions::default().with_login_delay(self.login_delay)
    }
}
