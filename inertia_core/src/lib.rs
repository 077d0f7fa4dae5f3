//! Inertia Core - Simulated Inertial Sensor Agent
//!
//! A single point agent whose motion is driven by sampled acceleration:
//! 1. **Kinematics**: simple Euler integration of position and velocity
//! 2. **Sensors**: an injected capability producing one frame per tick
//! 3. **Telemetry**: per-tick reports in text or JSON
//! 4. **Runtime**: a run-until-cancelled tick loop over an `AgentContext`

pub mod agent_runtime;
pub mod error;
pub mod kinematics;
pub mod sensors;
pub mod telemetry;

// Re-export key types for convenience
pub use agent_runtime::{RunSummary, RuntimeConfig, SensorAgent, StopReason};
pub use error::RuntimeError;
pub use kinematics::KinematicState;
pub use sensors::{SensorFrame, SensorSuite};
pub use telemetry::{write_report, ReportFormat, TickReport};
