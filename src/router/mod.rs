//! Routing collaborator: the dashboard's path table, the navigation capability
//! the session store and guards drive, and an in-memory history used by the
//! CLI and tests.

mod history;
pub mod paths;
mod table;

pub use history::MemoryHistory;
pub use table::{visit, Route, RouteTable, RouterError, Screen, Visit};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str, options: NavigateOptions);
}
