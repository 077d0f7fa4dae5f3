//! Agent Runtime - drives the sensor agent against an environment context.
//!
//! This module is the integration layer between the pure kinematics and
//! the environment abstraction (`AgentContext`).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       SensorAgent                           │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │              Context: AgentContext                    │   │
//! │  │  • now()   → run duration                            │   │
//! │  │  • sleep() → tick cadence                            │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! │                              │                               │
//! │  ┌──────────────┐   ┌────────────────┐   ┌──────────────┐   │
//! │  │ SensorSuite  │ → │ KinematicState │ → │  TickReport  │   │
//! │  │   (read)     │   │  (integrate)   │   │   (write)    │   │
//! │  └──────────────┘   └────────────────┘   └──────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use inertia_core::{RuntimeConfig, SensorAgent};
//! use inertia_env::{shutdown_channel, TokioContext};
//!
//! let ctx = TokioContext::shared(0);
//! let (handle, listener) = shutdown_channel();
//! let mut agent = SensorAgent::new(ctx, sensors, RuntimeConfig::default());
//!
//! agent.run(listener, &mut std::io::stdout()).await?;
//! ```

use crate::error::RuntimeError;
use crate::kinematics::KinematicState;
use crate::sensors::SensorSuite;
use crate::telemetry::{write_report, ReportFormat, TickReport};

use inertia_env::{AgentContext, ShutdownListener};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for the tick loop.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Real-time pause between ticks (default: 1s)
    pub tick_interval: Duration,
    
    /// Stop after this many ticks (default: run until cancelled)
    pub max_ticks: Option<u64>,
    
    /// Output encoding for reports (default: text)
    pub format: ReportFormat,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            max_ticks: None,
            format: ReportFormat::Text,
        }
    }
}

/// Why the tick loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Shutdown was requested
    Cancelled,
    
    /// `max_ticks` was reached
    TickLimit,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Ticks executed during this run
    pub ticks: u64,
    
    /// Why the loop stopped
    pub stop_reason: StopReason,
    
    /// Context time spent in the loop
    pub elapsed: Duration,
}

/// The simulated sensor agent.
///
/// Generic over the context and sensor implementations, so the same loop
/// runs on the wall clock with random sensors or on a virtual clock with
/// scripted ones.
pub struct SensorAgent<Ctx, S>
where
    Ctx: AgentContext,
    S: SensorSuite,
{
    /// Environment context
    pub context: Arc<Ctx>,
    
    /// Configuration
    pub config: RuntimeConfig,
    
    /// Source of per-tick readings
    sensors: S,
    
    /// Integrated position/velocity
    state: KinematicState,
    
    /// Ticks executed since creation
    tick_count: u64,
}

impl<Ctx, S> SensorAgent<Ctx, S>
where
    Ctx: AgentContext,
    S: SensorSuite,
{
    /// Creates an agent at rest at the origin.
    pub fn new(context: Arc<Ctx>, sensors: S, config: RuntimeConfig) -> Self {
        Self {
            context,
            config,
            sensors,
            state: KinematicState::new(),
            tick_count: 0,
        }
    }
    
    /// Replaces the initial kinematic state.
    pub fn with_state(mut self, state: KinematicState) -> Self {
        self.state = state;
        self
    }
    
    /// Returns the current kinematic state.
    pub fn state(&self) -> &KinematicState {
        &self.state
    }
    
    /// Returns the number of ticks executed so far.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
    
    /// Samples the sensors, integrates, and returns the tick's report.
    pub fn tick(&mut self) -> TickReport {
        let frame = self.sensors.read();
        self.state.integrate(&frame.acceleration);
        self.tick_count += 1;
        
        TickReport::new(self.tick_count, &frame, &self.state)
    }
    
    /// Runs ticks until shutdown is requested or `max_ticks` is reached.
    ///
    /// Each iteration ticks once, writes the report to `out`, then sleeps
    /// for `tick_interval` on the context clock. Shutdown is checked before
    /// every tick and raced against the sleep; it wins ties, so no tick is
    /// started after it was observed.
    pub async fn run<W: Write>(
        &mut self,
        mut shutdown: ShutdownListener,
        out: &mut W,
    ) -> Result<RunSummary, RuntimeError> {
        let started = self.context.now();
        let mut ticks = 0u64;
        
        info!(
            interval_ms = self.config.tick_interval.as_millis() as u64,
            max_ticks = ?self.config.max_ticks,
            seed = self.context.seed(),
            "sensor agent started"
        );
        
        let stop_reason = loop {
            if shutdown.is_triggered() {
                break StopReason::Cancelled;
            }
            if self.limit_reached(ticks) {
                break StopReason::TickLimit;
            }
            
            let report = self.tick();
            write_report(out, &report, self.config.format)?;
            ticks += 1;
            
            debug!(
                tick = report.tick,
                x = report.position.x,
                y = report.position.y,
                z = report.position.z,
                "tick complete"
            );
            
            if self.limit_reached(ticks) {
                break StopReason::TickLimit;
            }
            
            tokio::select! {
                biased;
                _ = shutdown.triggered() => break StopReason::Cancelled,
                _ = self.context.sleep(self.config.tick_interval) => {}
            }
        };
        
        let elapsed = self.context.now().saturating_sub(started);
        info!(ticks, reason = ?stop_reason, "sensor agent stopped");
        
        Ok(RunSummary {
            ticks,
            stop_reason,
            elapsed,
        })
    }
    
    fn limit_reached(&self, ticks: u64) -> bool {
        self.config.max_ticks.is_some_and(|limit| ticks >= limit)
    }
}
