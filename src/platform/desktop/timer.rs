use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::spawn;

use crate::usecase::ports::timer::Timer;

/// Runs deferred work as a task of the current component, so it is dropped
/// together with the component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DioxusTimer;

impl Timer for DioxusTimer {
    type Handle = Task;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Task {
        spawn(async move {
            if delay.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(delay).await;
            }
            task();
        })
    }

    fn cancel(&self, handle: Task) {
        handle.cancel();
    }
}
