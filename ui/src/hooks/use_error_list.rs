use std::fmt::Display;

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

/// Messages a step shows in its error panel.
///
/// Validation problems and failed backend calls both land here, so the user
/// sees one kind of feedback for either.
#[derive(Clone, Copy, PartialEq)]
pub struct ErrorList {
    errors: Signal<Vec<String>>,
}

impl ErrorList {
    /// Replaces the shown messages.
    pub fn report<E: Display>(&mut self, errors: impl IntoIterator<Item = E>) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.to_string()).collect();
        self.errors.set(messages);
    }

    /// Inspects a result from a step action.
    /// - If `Ok`: returns the value.
    /// - If `Err`: shows the error and returns `None`.
    pub fn check<T, E: Display>(&mut self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("step action failed: {e}");
                self.report([e]);
                None
            }
        }
    }

    /// Hides the panel. Called on dismissal and whenever the inputs change.
    pub fn clear(&mut self) {
        if !self.errors.peek().is_empty() {
            self.errors.set(Vec::new());
        }
    }

    /// Subscribes the caller to changes.
    pub fn messages(&self) -> Vec<String> {
        self.errors.read().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.read().is_empty()
    }
}

pub fn use_error_list() -> ErrorList {
    let errors = use_signal(Vec::new);
    ErrorList { errors }
}
