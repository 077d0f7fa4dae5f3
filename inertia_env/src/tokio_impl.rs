//! Production implementation of AgentContext using Tokio.

use crate::context::derive_stream_seed;
use crate::AgentContext;
use async_trait::async_trait;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Production context backed by Tokio.
///
/// Time comes from the system clock. Randomness comes from OS entropy
/// unless a seed was given, in which case real time is kept but every
/// RNG stream becomes reproducible.
pub struct TokioContext {
    /// Start time for monotonic duration calculations
    start: Instant,
    
    /// Master seed (0 = OS entropy)
    seed: u64,
}

impl TokioContext {
    /// Creates a new, unseeded TokioContext.
    pub fn new() -> Self {
        Self::seeded(0)
    }
    
    /// Creates a TokioContext whose RNG streams derive from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            start: Instant::now(),
            seed,
        }
    }
    
    /// Creates an Arc-wrapped context for sharing across tasks.
    pub fn shared(seed: u64) -> Arc<Self> {
        Arc::new(Self::seeded(seed))
    }
}

impl Default for TokioContext {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentContext for TokioContext {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
    
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
    
    fn spawn<F>(&self, name: &str, future: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        debug!(task = name, "spawning background task");
        tokio::spawn(future);
    }
    
    fn derive_rng(&self, stream: u64) -> ChaCha8Rng {
        if self.seed == 0 {
            ChaCha8Rng::from_entropy()
        } else {
            ChaCha8Rng::seed_from_u64(derive_stream_seed(self.seed, stream))
        }
    }
    
    fn seed(&self) -> u64 {
        self.seed
    }
}
