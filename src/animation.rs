use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::view::{StepStatus, View, LOADING_STEPS};

/// The cosmetic "processing steps" shown while a request is in flight.
///
/// Purely presentational: it is not synchronized with the network call, but it
/// lives exactly as long as the call. Cancelling (or dropping) it aborts every
/// pending flip, so no step changes after the call settles.
pub struct StepAnimation {
    handle: JoinHandle<()>,
}

impl StepAnimation {
    /// Marks each step active, then complete after `interval`, one after another.
    pub fn start<V: View>(view: Arc<V>, interval: Duration) -> Self {
        let handle = tokio::spawn(async move {
            for index in 0..LOADING_STEPS.len() {
                view.set_step(index, StepStatus::Active);
                tokio::time::sleep(interval).await;
                view.set_step(index, StepStatus::Complete);
            }
        });
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn cancel(self) {
        self.handle.abort();
    }
}

impl Drop for StepAnimation {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Puts every step indicator back to pending.
pub fn reset_steps<V: View + ?Sized>(view: &V) {
    for index in 0..LOADING_STEPS.len() {
        view.set_step(index, StepStatus::Pending);
    }
}
