//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current user-facing notice (rejected drops) - read
    pub notice: ReadSignal<Option<String>>,
    /// Current user-facing notice - write
    set_notice: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(notice: (ReadSignal<Option<String>>, WriteSignal<Option<String>>)) -> Self {
        Self {
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Surface a user-facing notice
    pub fn notify(&self, message: String) {
        self.set_notice.set(Some(message));
    }

    /// Dismiss the current notice
    pub fn dismiss(&self) {
        self.set_notice.set(None);
    }

    /// Dismiss only if `message` is still the one on screen
    pub fn dismiss_if(&self, message: &str) {
        self.set_notice.update(|n| {
            if n.as_deref() == Some(message) {
                *n = None;
            }
        });
    }
}
