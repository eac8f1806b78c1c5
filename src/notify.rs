//! Transient user-facing notifications raised by the session store.

use std::sync::Mutex;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub variant: ToastVariant,
    pub title: String,
    pub description: String,
}

impl Toast {
    #[must_use]
    pub fn info(title: &str, description: &str) -> Self {
        Self {
            variant: ToastVariant::Default,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[must_use]
    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Keeps raised toasts until the view layer drains them.
#[derive(Debug, Default)]
pub struct ToastLog {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every pending toast, oldest first.
    pub fn drain(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|mut toasts| std::mem::take(&mut *toasts))
            .unwrap_or_default()
    }
}

impl Notifier for ToastLog {
    fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Default => info!(title = %toast.title, "{}", toast.description),
            ToastVariant::Destructive => warn!(title = %toast.title, "{}", toast.description),
        }
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_log() {
        let log = ToastLog::new();
        log.notify(Toast::info("Signed out", "bye"));
        log.notify(Toast::destructive("Authentication error", "nope"));

        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].variant, ToastVariant::Default);
        assert_eq!(drained[1].variant, ToastVariant::Destructive);
        assert!(log.drain().is_empty());
    }
}
