// Shutdown coordination module
// Provides a global flag checked by the health routes and a signal that wakes
// the server for graceful shutdown on Ctrl+C.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Global shutdown flag - set to true when the process is shutting down
static SHUTTING_DOWN: AtomicBool = AtomicBool::new(false);

/// Signal that the process is shutting down
pub fn signal_shutdown() {
    SHUTTING_DOWN.store(true, Ordering::SeqCst);
    crate::info!("Shutdown signaled");
}

/// Check if the process is shutting down
/// Returns true after signal_shutdown() has been called
pub fn is_shutting_down() -> bool {
    SHUTTING_DOWN.load(Ordering::SeqCst)
}

/// Clear the flag between tests that trigger shutdown
#[cfg(test)]
pub(crate) fn reset_for_tests() {
    SHUTTING_DOWN.store(false, Ordering::SeqCst);
}

/// Fires the shutdown signal; cloneable so several sources can share it
#[derive(Debug, Clone)]
pub struct ShutdownTrigger {
    sender: Arc<watch::Sender<bool>>,
}

impl ShutdownTrigger {
    /// Set the global flag and wake every waiting ShutdownSignal
    pub fn trigger(&self) {
        signal_shutdown();
        // No receivers left just means nobody is waiting
        let _ = self.sender.send(true);
    }
}

/// Resolves once the paired ShutdownTrigger has fired
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    receiver: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Create a connected trigger/signal pair
    pub fn channel() -> (ShutdownTrigger, ShutdownSignal) {
        let (sender, receiver) = watch::channel(false);
        (
            ShutdownTrigger {
                sender: Arc::new(sender),
            },
            ShutdownSignal { receiver },
        )
    }

    /// Wait for the trigger. Never resolves if every trigger is dropped without firing.
    pub async fn wait(mut self) {
        let fired = self.receiver.wait_for(|&down| down).await.is_ok();
        if !fired {
            std::future::pending::<()>().await;
        }
    }
}

/// Install the Ctrl+C handler and return the signal it fires.
///
/// The handler can only be installed once per process; a second attempt is
/// logged and the returned signal then never fires.
pub fn install_ctrl_c_handler() -> ShutdownSignal {
    let (trigger, signal) = ShutdownSignal::channel();
    if let Err(e) = ctrlc::set_handler(move || trigger.trigger()) {
        crate::warn!("Failed to set Ctrl+C handler: {}", e);
    }
    signal
}

#[cfg(test)]
#[path = "shutdown_test.rs"]
mod tests;
