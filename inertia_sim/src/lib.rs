//! Inertia Simulation Harness
//!
//! This crate plugs concrete pieces into the `inertia_core` runtime:
//!
//! - **Sensors**: uniform, drifting, and scripted `SensorSuite`s
//! - **Time**: `VirtualContext`, a clock that advances only on sleep
//! - **Binary**: `inertia-sim`, the real-time run with signal handling
//!
//! # Usage
//!
//! ```ignore
//! use inertia_core::{RuntimeConfig, SensorAgent};
//! use inertia_env::shutdown_channel;
//! use inertia_sim::{UniformSensors, VirtualContext};
//!
//! let ctx = VirtualContext::shared(42);
//! let sensors = UniformSensors::from_context(ctx.as_ref());
//! let config = RuntimeConfig { max_ticks: Some(1_000), ..Default::default() };
//!
//! let (_handle, listener) = shutdown_channel();
//! let mut agent = SensorAgent::new(ctx, sensors, config);
//! agent.run(listener, &mut std::io::sink()).await?;
//! ```

mod context;
pub mod sensors;

pub use context::VirtualContext;
pub use sensors::{DriftingSensors, ScriptedSensors, UniformSensors};

#[cfg(test)]
mod tests {
    use super::*;
    use inertia_core::{ReportFormat, RuntimeConfig, SensorAgent, SensorSuite, StopReason};
    use inertia_env::{shutdown_channel, AgentContext, ShutdownHandle};
    use nalgebra::Vector3;
    use std::io::Write;
    use std::sync::Arc;
    use std::time::Duration;
    
    /// Sink that requests shutdown after a number of reports.
    struct TriggerAfter {
        reports: usize,
        limit: usize,
        handle: ShutdownHandle,
        bytes: Vec<u8>,
    }
    
    impl Write for TriggerAfter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }
        
        fn flush(&mut self) -> std::io::Result<()> {
            // write_report flushes once per report
            self.reports += 1;
            if self.reports == self.limit {
                self.handle.trigger();
            }
            Ok(())
        }
    }
    
    fn bounded(max_ticks: u64, format: ReportFormat) -> RuntimeConfig {
        RuntimeConfig {
            max_ticks: Some(max_ticks),
            format,
            ..Default::default()
        }
    }
    
    #[tokio::test]
    async fn test_loop_keeps_running_without_shutdown() {
        let ctx = VirtualContext::shared(42);
        let sensors = UniformSensors::from_context(ctx.as_ref());
        let mut agent = SensorAgent::new(ctx.clone(), sensors, bounded(10_000, ReportFormat::Text));
        let (_handle, listener) = shutdown_channel();
        
        let summary = agent.run(listener, &mut std::io::sink()).await.unwrap();
        
        assert_eq!(summary.ticks, 10_000);
        assert_eq!(summary.stop_reason, StopReason::TickLimit);
        assert_eq!(ctx.now(), Duration::from_secs(9_999));
    }
    
    #[tokio::test]
    async fn test_shutdown_stops_before_next_tick() {
        let ctx = VirtualContext::shared(42);
        let sensors = UniformSensors::from_context(ctx.as_ref());
        let mut agent = SensorAgent::new(ctx.clone(), sensors, RuntimeConfig::default());
        let (handle, listener) = shutdown_channel();
        let mut sink = TriggerAfter {
            reports: 0,
            limit: 3,
            handle,
            bytes: Vec::new(),
        };
        
        let summary = agent.run(listener, &mut sink).await.unwrap();
        
        assert_eq!(summary.ticks, 3);
        assert_eq!(summary.stop_reason, StopReason::Cancelled);
        assert_eq!(agent.tick_count(), 3);
        // Shutdown won the race against the third sleep
        assert_eq!(ctx.now(), Duration::from_secs(2));
        assert_eq!(String::from_utf8(sink.bytes).unwrap().lines().count(), 15);
    }
    
    #[tokio::test]
    async fn test_shutdown_from_spawned_task() {
        let ctx = VirtualContext::shared(9);
        let sensors = UniformSensors::from_context(ctx.as_ref());
        let mut agent = SensorAgent::new(ctx.clone(), sensors, RuntimeConfig::default());
        let (handle, listener) = shutdown_channel();
        
        ctx.spawn("trigger", async move {
            handle.trigger();
        });
        
        let summary = agent.run(listener, &mut std::io::sink()).await.unwrap();
        
        assert_eq!(summary.stop_reason, StopReason::Cancelled);
        assert!(summary.ticks >= 1);
    }
    
    #[tokio::test]
    async fn test_scripted_run_matches_hand_computation() {
        let ctx = VirtualContext::shared(0);
        let sensors = ScriptedSensors::from_accelerations(vec![
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(-1.0, -1.0, -1.0),
        ]);
        let mut agent = SensorAgent::new(ctx, sensors, bounded(2, ReportFormat::Text));
        let (_handle, listener) = shutdown_channel();
        let mut out = Vec::new();
        
        agent.run(listener, &mut out).await.unwrap();
        
        assert_eq!(agent.state().velocity, Vector3::zeros());
        assert_eq!(agent.state().position, Vector3::new(1.0, 1.0, 1.0));
        
        let text = String::from_utf8(out).unwrap();
        let coordinates: Vec<&str> = text.lines().filter(|l| l.starts_with("Coordinates")).collect();
        assert_eq!(coordinates, vec![
            "Coordinates: x=1.00, y=1.00, z=1.00",
            "Coordinates: x=1.00, y=1.00, z=1.00",
        ]);
    }
    
    #[tokio::test]
    async fn test_zero_acceleration_leaves_state_unchanged() {
        let ctx = VirtualContext::shared(0);
        let mut agent = SensorAgent::new(ctx, ScriptedSensors::new(vec![]), bounded(25, ReportFormat::Text));
        let (_handle, listener) = shutdown_channel();
        
        agent.run(listener, &mut std::io::sink()).await.unwrap();
        
        assert_eq!(agent.state().position, Vector3::zeros());
        assert_eq!(agent.state().velocity, Vector3::zeros());
    }
    
    #[tokio::test]
    async fn test_same_seed_replays_identically() {
        async fn record(seed: u64) -> String {
            let ctx = VirtualContext::shared(seed);
            let sensors = UniformSensors::from_context(ctx.as_ref());
            let mut agent = SensorAgent::new(ctx, sensors, bounded(20, ReportFormat::Json));
            let (_handle, listener) = shutdown_channel();
            let mut out = Vec::new();
            agent.run(listener, &mut out).await.unwrap();
            String::from_utf8(out).unwrap()
        }
        
        let first = record(1234).await;
        assert_eq!(first, record(1234).await);
        assert_ne!(first, record(4321).await);
    }
    
    #[tokio::test]
    async fn test_json_reports_track_integration() {
        let ctx = VirtualContext::shared(77);
        let sensors = UniformSensors::from_context(ctx.as_ref());
        let mut agent = SensorAgent::new(ctx, sensors, bounded(30, ReportFormat::Json));
        let (_handle, listener) = shutdown_channel();
        let mut out = Vec::new();
        
        agent.run(listener, &mut out).await.unwrap();
        
        let mut position = Vector3::<f64>::zeros();
        let mut velocity = Vector3::<f64>::zeros();
        for (i, line) in String::from_utf8(out).unwrap().lines().enumerate() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["tick"], (i + 1) as u64);
            
            let read = |key: &str| {
                Vector3::from_iterator((0..3).map(|k| value[key][k].as_f64().unwrap()))
            };
            let acceleration = read("acceleration");
            velocity += acceleration;
            position += velocity;
            
            approx::assert_relative_eq!(read("velocity"), velocity, epsilon = 1e-9);
            approx::assert_relative_eq!(read("position"), position, epsilon = 1e-9);
        }
    }
    
    #[tokio::test]
    async fn test_drifting_sensors_drive_agent() {
        let ctx = VirtualContext::shared(5);
        let mut agent = SensorAgent::new(
            ctx,
            Box::new(DriftingSensors::from_seed(5)) as Box<dyn SensorSuite>,
            bounded(10, ReportFormat::Text),
        );
        let (_handle, listener) = shutdown_channel();
        
        let summary = agent.run(listener, &mut std::io::sink()).await.unwrap();
        
        assert_eq!(summary.ticks, 10);
        assert_ne!(agent.state().position, Vector3::zeros());
    }
    
    #[test]
    fn test_from_context_uses_sensor_stream() {
        let ctx = Arc::new(VirtualContext::new(42));
        let mut a = UniformSensors::from_context(ctx.as_ref());
        let mut b = UniformSensors::new(ctx.derive_rng(sensors::SENSOR_STREAM));
        assert_eq!(a.read(), b.read());
    }
}
