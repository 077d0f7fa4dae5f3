//! Virtual-time implementation of AgentContext for deterministic runs.

use async_trait::async_trait;
use inertia_env::{derive_stream_seed, AgentContext};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Context backed by a virtual clock and seeded RNG streams.
///
/// This implements `AgentContext` using:
/// - A virtual clock that only moves when advanced or slept on
/// - ChaCha8 streams derived from the seed (seed 0 included)
/// - Sleep that advances virtual time and yields once to the scheduler
pub struct VirtualContext {
    /// Master seed for this run
    seed: u64,
    
    /// Current virtual time (nanoseconds since start), shared by clones
    virtual_time_ns: Arc<AtomicU64>,
}

impl VirtualContext {
    /// Creates a new VirtualContext with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            virtual_time_ns: Arc::new(AtomicU64::new(0)),
        }
    }
    
    /// Creates an Arc-wrapped context for sharing.
    pub fn shared(seed: u64) -> Arc<Self> {
        Arc::new(Self::new(seed))
    }
    
    /// Advances virtual time by the given duration.
    pub fn advance_time(&self, duration: Duration) {
        self.virtual_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::SeqCst);
    }
    
    /// Returns the current virtual time in nanoseconds.
    pub fn time_ns(&self) -> u64 {
        self.virtual_time_ns.load(Ordering::SeqCst)
    }
}

impl Clone for VirtualContext {
    fn clone(&self) -> Self {
        Self {
            seed: self.seed,
            virtual_time_ns: Arc::clone(&self.virtual_time_ns),
        }
    }
}

#[async_trait]
impl AgentContext for VirtualContext {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.time_ns())
    }
    
    async fn sleep(&self, duration: Duration) {
        self.advance_time(duration);
        // Give spawned tasks (e.g. a shutdown trigger) a chance to run
        tokio::task::yield_now().await;
    }
    
    fn spawn<F>(&self, name: &str, future: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        tracing::debug!(task = name, virtual_ns = self.time_ns(), "spawning background task");
        tokio::spawn(future);
    }
    
    fn derive_rng(&self, stream: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(derive_stream_seed(self.seed, stream))
    }
    
    fn seed(&self) -> u64 {
        self.seed
    }
}
