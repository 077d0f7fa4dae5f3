//! Cooperative shutdown for the tick loop.
//!
//! ```text
//!   SIGINT / SIGTERM                                  tick loop
//!         |                                               |
//!   SignalListener::recv() --> ShutdownHandle::trigger() |
//!                                   |   watch<bool>       |
//!                                   +--------------> ShutdownListener::triggered()
//! ```
//!
//! The loop never gets killed mid-tick: it observes the flag between ticks
//! and returns, and the caller decides what to print and how to exit.

use crate::EnvError;
use std::fmt;
use tokio::sync::watch;

/// Creates a connected shutdown handle/listener pair.
pub fn shutdown_channel() -> (ShutdownHandle, ShutdownListener) {
    let (tx, rx) = watch::channel(false);
    (ShutdownHandle { tx }, ShutdownListener { rx })
}

/// Requests shutdown. Dropping the handle counts as a request.
#[derive(Debug)]
pub struct ShutdownHandle {
    tx: watch::Sender<bool>,
}

impl ShutdownHandle {
    /// Flags shutdown for every listener.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
    
    /// Creates another listener on this handle.
    pub fn subscribe(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }
}

/// Observes shutdown requests.
#[derive(Debug, Clone)]
pub struct ShutdownListener {
    rx: watch::Receiver<bool>,
}

impl ShutdownListener {
    /// Returns true once shutdown was requested or the handle was dropped.
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }
    
    /// Completes when shutdown is requested or the handle is dropped.
    ///
    /// Cancel safe.
    pub async fn triggered(&mut self) {
        // Err means the handle is gone, which is a shutdown too
        let _ = self.rx.wait_for(|flag| *flag).await;
    }
}

/// The OS request that ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    /// SIGINT / Ctrl-C
    Interrupt,
    
    /// SIGTERM
    Terminate,
}

impl fmt::Display for TerminationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationSignal::Interrupt => write!(f, "SIGINT"),
            TerminationSignal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// Listens for interrupt and terminate requests from the OS.
///
/// Handlers are registered in `install()` so a failure surfaces before the
/// tick loop starts instead of inside a background task.
pub struct SignalListener {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
}

impl SignalListener {
    /// Registers the handlers. Must be called inside a Tokio runtime.
    #[cfg(unix)]
    pub fn install() -> Result<Self, EnvError> {
        use tokio::signal::unix::{signal, SignalKind};
        
        let interrupt = signal(SignalKind::interrupt()).map_err(|e| EnvError::signal("SIGINT", e))?;
        let terminate = signal(SignalKind::terminate()).map_err(|e| EnvError::signal("SIGTERM", e))?;
        Ok(Self { interrupt, terminate })
    }
    
    /// Registers the handlers. Must be called inside a Tokio runtime.
    #[cfg(not(unix))]
    pub fn install() -> Result<Self, EnvError> {
        Ok(Self {})
    }
    
    /// Waits for the next termination request.
    #[cfg(unix)]
    pub async fn recv(&mut self) -> Result<TerminationSignal, EnvError> {
        tokio::select! {
            _ = self.interrupt.recv() => Ok(TerminationSignal::Interrupt),
            _ = self.terminate.recv() => Ok(TerminationSignal::Terminate),
        }
    }
    
    /// Waits for the next termination request.
    #[cfg(not(unix))]
    pub async fn recv(&mut self) -> Result<TerminationSignal, EnvError> {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| EnvError::signal("Ctrl-C", e))?;
        Ok(TerminationSignal::Interrupt)
    }
}
