//! Simulated sensor suites.
//!
//! Stand-ins for an LSM9DS1 IMU (accelerometer + magnetometer) and an
//! HC-SR04 ultrasonic range finder:
//! - [`UniformSensors`]: every reading drawn independently and uniformly
//! - [`DriftingSensors`]: acceleration performs a bounded random walk
//! - [`ScriptedSensors`]: fixed frames, for tests and replays

use inertia_core::{SensorFrame, SensorSuite};
use inertia_env::AgentContext;
use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Uniform};

/// RNG stream reserved for sensor sampling.
pub const SENSOR_STREAM: u64 = 0;

/// Acceleration per axis, m/s², half-open.
pub const ACCELERATION_RANGE: (f64, f64) = (-1.0, 1.0);

/// Magnetic field per axis, µT, half-open.
pub const MAGNETIC_FIELD_RANGE: (f64, f64) = (-100.0, 100.0);

/// Range finder distance, cm, half-open.
pub const DISTANCE_RANGE_CM: (f64, f64) = (0.0, 400.0);

/// Largest per-tick acceleration change of the drifting accelerometer.
pub const DRIFT_STEP: f64 = 2.0;

/// Saturation of the drifting accelerometer, m/s².
pub const DRIFT_LIMIT: f64 = 10.0;

fn sample_vector<R: Rng>(dist: &Uniform<f64>, rng: &mut R) -> Vector3<f64> {
    Vector3::new(dist.sample(rng), dist.sample(rng), dist.sample(rng))
}

/// Magnetometer and range finder shared by both random suites.
struct AmbientSensors {
    magnetic_field: Uniform<f64>,
    distance: Uniform<f64>,
}

impl AmbientSensors {
    fn new() -> Self {
        Self {
            magnetic_field: Uniform::new(MAGNETIC_FIELD_RANGE.0, MAGNETIC_FIELD_RANGE.1),
            distance: Uniform::new(DISTANCE_RANGE_CM.0, DISTANCE_RANGE_CM.1),
        }
    }
    
    fn sample<R: Rng>(&self, rng: &mut R) -> (Vector3<f64>, f64) {
        let field = sample_vector(&self.magnetic_field, rng);
        let distance = self.distance.sample(rng);
        (field, distance)
    }
}

/// Sensors whose readings are independent uniform samples.
pub struct UniformSensors<R = ChaCha8Rng> {
    rng: R,
    acceleration: Uniform<f64>,
    ambient: AmbientSensors,
}

impl UniformSensors<ChaCha8Rng> {
    /// Creates a suite with a ChaCha8 stream seeded from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
    
    /// Creates a suite drawing from the context's sensor stream.
    pub fn from_context<Ctx: AgentContext>(context: &Ctx) -> Self {
        Self::new(context.derive_rng(SENSOR_STREAM))
    }
}

impl<R: Rng> UniformSensors<R> {
    /// Creates a suite over an arbitrary RNG.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            acceleration: Uniform::new(ACCELERATION_RANGE.0, ACCELERATION_RANGE.1),
            ambient: AmbientSensors::new(),
        }
    }
}

impl<R: Rng + Send> SensorSuite for UniformSensors<R> {
    fn read(&mut self) -> SensorFrame {
        let acceleration = sample_vector(&self.acceleration, &mut self.rng);
        let (magnetic_field, distance_cm) = self.ambient.sample(&mut self.rng);
        SensorFrame::new(acceleration, magnetic_field, distance_cm)
    }
}

/// Sensors whose acceleration wanders instead of jumping.
///
/// Each tick every axis moves by a uniform step in
/// `[-DRIFT_STEP, DRIFT_STEP]` and saturates at `±DRIFT_LIMIT`, the way a
/// real accelerometer reading evolves smoothly between samples.
pub struct DriftingSensors<R = ChaCha8Rng> {
    rng: R,
    step: Uniform<f64>,
    acceleration: Vector3<f64>,
    ambient: AmbientSensors,
}

impl DriftingSensors<ChaCha8Rng> {
    /// Creates a suite with a ChaCha8 stream seeded from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> DriftingSensors<R> {
    /// Creates a suite starting from zero acceleration.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            step: Uniform::new_inclusive(-DRIFT_STEP, DRIFT_STEP),
            acceleration: Vector3::zeros(),
            ambient: AmbientSensors::new(),
        }
    }
    
    /// Returns the last acceleration reading.
    pub fn acceleration(&self) -> Vector3<f64> {
        self.acceleration
    }
}

impl<R: Rng + Send> SensorSuite for DriftingSensors<R> {
    fn read(&mut self) -> SensorFrame {
        let step = sample_vector(&self.step, &mut self.rng);
        self.acceleration = (self.acceleration + step).map(|a| a.clamp(-DRIFT_LIMIT, DRIFT_LIMIT));
        let (magnetic_field, distance_cm) = self.ambient.sample(&mut self.rng);
        SensorFrame::new(self.acceleration, magnetic_field, distance_cm)
    }
}

/// Replays a fixed list of frames.
///
/// Once exhausted it either starts over (`cycling`) or reports a zero
/// frame forever, which leaves the agent coasting.
#[derive(Debug, Clone)]
pub struct ScriptedSensors {
    frames: Vec<SensorFrame>,
    cursor: usize,
    cycle: bool,
}

impl ScriptedSensors {
    /// Plays `frames` once, then zero frames.
    pub fn new(frames: Vec<SensorFrame>) -> Self {
        Self {
            frames,
            cursor: 0,
            cycle: false,
        }
    }
    
    /// Plays `frames` in a loop.
    pub fn cycling(frames: Vec<SensorFrame>) -> Self {
        Self {
            cycle: true,
            ..Self::new(frames)
        }
    }
    
    /// Plays acceleration-only frames once.
    pub fn from_accelerations<I>(accelerations: I) -> Self
    where
        I: IntoIterator<Item = Vector3<f64>>,
    {
        Self::new(accelerations.into_iter().map(SensorFrame::with_acceleration).collect())
    }
    
    /// Frames left before the script wraps around or runs out.
    pub fn remaining(&self) -> usize {
        self.frames.len().saturating_sub(self.cursor)
    }
}

impl SensorSuite for ScriptedSensors {
    fn read(&mut self) -> SensorFrame {
        if self.cycle && !self.frames.is_empty() && self.cursor >= self.frames.len() {
            self.cursor = 0;
        }
        match self.frames.get(self.cursor) {
            Some(frame) => {
                self.cursor += 1;
                *frame
            }
            None => SensorFrame::with_acceleration(Vector3::zeros()),
        }
    }
}
