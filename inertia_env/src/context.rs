//! Core environment context trait for the sensor agent.

use async_trait::async_trait;
use rand_chacha::ChaCha8Rng;
use std::future::Future;
use std::time::Duration;

/// Golden-ratio constant used to spread stream ids across the seed space.
const STREAM_MIXER: u64 = 0x9e37_79b9_7f4a_7c15;

/// The central interface for Environment Interaction.
///
/// This trait abstracts the "real world" so that the agent loop can run
/// against the wall clock in production and against a virtual clock in tests.
///
/// # Implementations
///
/// - **Production**: `TokioContext` - wraps `tokio::time`, OS entropy
/// - **Simulation**: `VirtualContext` (in `inertia_sim`) - manual clock, seeded RNG
///
/// # Determinism
///
/// All methods that would normally introduce non-determinism
/// (time, randomness) are controlled by the implementation.
#[async_trait]
pub trait AgentContext: Send + Sync + 'static {
    /// Returns the current monotonic time since context creation.
    ///
    /// In simulation, this is the virtual clock time.
    fn now(&self) -> Duration;
    
    /// Suspends execution for the given duration.
    ///
    /// In production: wraps `tokio::time::sleep`
    /// In simulation: advances the virtual clock
    async fn sleep(&self, duration: Duration);
    
    /// Spawns a named background task.
    fn spawn<F>(&self, name: &str, future: F)
    where
        F: Future<Output = ()> + Send + 'static;
    
    /// Derives an RNG for one consumer (sensor suite, noise source, ...).
    ///
    /// Seeded contexts combine the master seed with `stream` so every
    /// consumer gets an independent but reproducible sequence.
    fn derive_rng(&self, stream: u64) -> ChaCha8Rng;
    
    /// Returns the context's seed (for logging/replay).
    ///
    /// 0 means the context draws from OS entropy.
    fn seed(&self) -> u64;
}

/// Combines a master seed with a stream id into a per-consumer seed.
pub fn derive_stream_seed(seed: u64, stream: u64) -> u64 {
    seed.wrapping_mul(STREAM_MIXER) ^ stream.wrapping_add(1).wrapping_mul(0x517c_c1b7_2722_0a95)
}
