//! Sensor capability consumed by the agent runtime.
//!
//! The runtime never touches an RNG directly. It asks a [`SensorSuite`] for
//! one [`SensorFrame`] per tick, which lets production code plug in random
//! samplers and tests plug in scripted sequences.

use nalgebra::Vector3;

/// One tick's worth of raw sensor readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorFrame {
    /// Linear acceleration [ax, ay, az] in m/s²
    pub acceleration: Vector3<f64>,
    
    /// Magnetic field [mx, my, mz] in µT
    pub magnetic_field: Vector3<f64>,
    
    /// Range finder distance in cm
    pub distance_cm: f64,
}

impl SensorFrame {
    /// Creates a frame from all readings.
    pub fn new(acceleration: Vector3<f64>, magnetic_field: Vector3<f64>, distance_cm: f64) -> Self {
        Self {
            acceleration,
            magnetic_field,
            distance_cm,
        }
    }
    
    /// Creates a frame carrying only an acceleration; other readings are zero.
    pub fn with_acceleration(acceleration: Vector3<f64>) -> Self {
        Self::new(acceleration, Vector3::zeros(), 0.0)
    }
}

/// A source of sensor frames.
///
/// Implementations sample in a fixed order (accelerometer, magnetometer,
/// range finder) so seeded runs are reproducible.
pub trait SensorSuite: Send {
    /// Takes one reading from every sensor.
    fn read(&mut self) -> SensorFrame;
}

impl<S: SensorSuite + ?Sized> SensorSuite for Box<S> {
    fn read(&mut self) -> SensorFrame {
        (**self).read()
    }
}
