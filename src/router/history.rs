use super::{NavigateOptions, Navigator};
use std::sync::Mutex;
use tracing::debug;

/// In-memory navigation history, standing in for the browser history stack.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: Mutex<Vec<String>>,
}

impl MemoryHistory {
    #[must_use]
    pub fn new(initial: &str) -> Self {
        Self {
            entries: Mutex::new(vec![initial.to_string()]),
        }
    }

    /// Path of the top history entry.
    #[must_use]
    pub fn current(&self) -> String {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.last().cloned())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl Navigator for MemoryHistory {
    fn navigate(&self, path: &str, options: NavigateOptions) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        if options.replace {
            entries.pop();
        }
        entries.push(path.to_string());
        debug!(replace = options.replace, "navigated to {path}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_replace() {
        let history = MemoryHistory::new("/");
        history.navigate("/animals", NavigateOptions::default());
        assert_eq!(history.entries(), vec!["/", "/animals"]);

        history.navigate("/unauthorized", NavigateOptions { replace: true });
        assert_eq!(history.entries(), vec!["/", "/unauthorized"]);
        assert_eq!(history.current(), "/unauthorized");
    }
}
