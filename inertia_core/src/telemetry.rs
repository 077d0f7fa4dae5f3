//! Tick reports and their wire formats.
//!
//! A [`TickReport`] is built after the state update and rendered separately,
//! so computing the next state never depends on where the output goes.

use crate::error::RuntimeError;
use crate::kinematics::KinematicState;
use crate::sensors::SensorFrame;
use nalgebra::Vector3;
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// Width of the line closing every text report.
pub const SEPARATOR_WIDTH: usize = 40;

/// Everything observed during one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickReport {
    /// 1-based tick number
    pub tick: u64,
    
    /// Sampled acceleration (m/s²)
    pub acceleration: Vector3<f64>,
    
    /// Sampled magnetic field (µT)
    pub magnetic_field: Vector3<f64>,
    
    /// Sampled range finder distance (cm)
    pub distance_cm: f64,
    
    /// Position after the update (m)
    pub position: Vector3<f64>,
    
    /// Velocity after the update (m/s), JSON output only
    pub velocity: Vector3<f64>,
}

impl TickReport {
    /// Combines the readings of a tick with the state they produced.
    pub fn new(tick: u64, frame: &SensorFrame, state: &KinematicState) -> Self {
        Self {
            tick,
            acceleration: frame.acceleration,
            magnetic_field: frame.magnetic_field,
            distance_cm: frame.distance_cm,
            position: state.position,
            velocity: state.velocity,
        }
    }
}

impl fmt::Display for TickReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.acceleration;
        let m = &self.magnetic_field;
        let p = &self.position;
        writeln!(f, "Acceleration: x={:.2} m/s², y={:.2} m/s², z={:.2} m/s²", a.x, a.y, a.z)?;
        writeln!(f, "Magnetic field: mx={:.2} µT, my={:.2} µT, mz={:.2} µT", m.x, m.y, m.z)?;
        writeln!(f, "Distance: {:.2} cm", self.distance_cm)?;
        writeln!(f, "Coordinates: x={:.2}, y={:.2}, z={:.2}", p.x, p.y, p.z)?;
        writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))
    }
}

/// How reports are written to the sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable multi-line block
    #[default]
    Text,
    
    /// One JSON object per line
    Json,
}

/// Writes one report and flushes the sink.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &TickReport,
    format: ReportFormat,
) -> Result<(), RuntimeError> {
    match format {
        ReportFormat::Text => write!(out, "{}", report)?,
        ReportFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    
    fn sample_report() -> TickReport {
        TickReport {
            tick: 3,
            acceleration: Vector3::new(0.123, -0.5, 0.999),
            magnetic_field: Vector3::new(12.0, -3.104, 99.994),
            distance_cm: 123.456,
            position: Vector3::new(1.0, -2.005, 10.0),
            velocity: Vector3::new(0.5, 0.0, -1.0),
        }
    }
    
    #[test]
    fn test_text_format() {
        let text = sample_report().to_string();
        let expected = "\
Acceleration: x=0.12 m/s², y=-0.50 m/s², z=1.00 m/s²
Magnetic field: mx=12.00 µT, my=-3.10 µT, mz=99.99 µT
Distance: 123.46 cm
Coordinates: x=1.00, y=-2.00, z=10.00
----------------------------------------
";
        assert_eq!(text, expected);
    }
    
    #[test]
    fn test_separator_is_forty_dashes() {
        let text = sample_report().to_string();
        let last = text.lines().last().unwrap();
        assert_eq!(last.len(), SEPARATOR_WIDTH);
        assert!(last.chars().all(|c| c == '-'));
    }
    
    #[test]
    fn test_report_from_frame_and_state() {
        let frame = SensorFrame::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(5.0, 6.0, 7.0), 80.0);
        let mut state = KinematicState::new();
        state.integrate(&frame.acceleration);
        
        let report = TickReport::new(1, &frame, &state);
        assert_eq!(report.tick, 1);
        assert_eq!(report.position, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(report.velocity, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(report.magnetic_field, frame.magnetic_field);
        assert_eq!(report.distance_cm, 80.0);
    }
    
    #[test]
    fn test_write_text_report() {
        let mut out = Vec::new();
        write_report(&mut out, &sample_report(), ReportFormat::Text).unwrap();
        
        let written = String::from_utf8(out).unwrap();
        assert_eq!(written, sample_report().to_string());
        assert_eq!(written.lines().count(), 5);
    }
    
    #[test]
    fn test_write_json_report() {
        let mut out = Vec::new();
        write_report(&mut out, &sample_report(), ReportFormat::Json).unwrap();
        
        let written = String::from_utf8(out).unwrap();
        assert!(written.ends_with('\n'));
        assert_eq!(written.lines().count(), 1);
        
        let value: serde_json::Value = serde_json::from_str(written.trim()).unwrap();
        assert_eq!(value["tick"], 3);
        assert_eq!(value["distance_cm"], 123.456);
        assert_eq!(value["position"][2], 10.0);
        assert_eq!(value["velocity"][0], 0.5);
    }
}
