use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::compat;

/// A flag that resets itself after a delay, e.g. a "Copied!" notice.
#[derive(Clone, Copy, PartialEq)]
pub struct TransientFlag {
    is_set: Signal<bool>,
    reset_task: Signal<Option<Task>>,
    duration: Duration,
}

impl TransientFlag {
    pub fn is_set(&self) -> bool {
        (self.is_set)()
    }

    /// Sets the flag and (re)starts the countdown. A pending reset from an
    /// earlier trigger is cancelled.
    pub fn trigger(&mut self) {
        if let Some(task) = self.reset_task.take() {
            task.cancel();
        }
        self.is_set.set(true);

        let mut is_set = self.is_set;
        let mut reset_task = self.reset_task;
        let duration = self.duration;
        let task = spawn(async move {
            compat::sleep(duration).await;
            is_set.set(false);
            reset_task.set(None);
        });
        self.reset_task.set(Some(task));
    }
}

/// The reset task belongs to the calling component and is dropped with it.
pub fn use_transient_flag(duration: Duration) -> TransientFlag {
    let is_set = use_signal(|| false);
    let reset_task = use_signal(|| None);
    TransientFlag {
        is_set,
        reset_task,
        duration,
    }
}
