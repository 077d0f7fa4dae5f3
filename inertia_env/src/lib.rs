//! Inertia Environment Abstraction Layer
//!
//! This crate provides the "Sans-IO" abstraction allowing the sensor agent
//! to run against both **real time** (tokio) and **virtual time** (tests).
//!
//! # Core Concept
//!
//! Everything the agent needs from the outside world goes through here:
//! - Time (`now()`, `sleep()`)
//! - Randomness (`derive_rng()`)
//! - Shutdown (`shutdown_channel()`, `SignalListener`)
//!
//! With a non-zero seed every RNG stream is derived from a single 64-bit
//! value, so any run can be replayed from its seed number.
//!
//! # Example
//!
//! ```ignore
//! use inertia_env::{AgentContext, ShutdownListener};
//!
//! async fn agent_loop<Ctx: AgentContext>(ctx: &Ctx, mut shutdown: ShutdownListener) {
//!     loop {
//!         tick();
//!         tokio::select! {
//!             biased;
//!             _ = shutdown.triggered() => break,
//!             _ = ctx.sleep(Duration::from_secs(1)) => {}
//!         }
//!     }
//! }
//! ```

mod context;
mod error;
mod shutdown;
mod tokio_impl;

pub use context::{derive_stream_seed, AgentContext};
pub use error::EnvError;
pub use shutdown::{
    shutdown_channel, ShutdownHandle, ShutdownListener, SignalListener, TerminationSignal,
};
pub use tokio_impl::TokioContext;
