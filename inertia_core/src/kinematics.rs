//! Kinematics Engine - simple Euler integration of a single point agent.
//!
//! The agent carries position and velocity and nothing else. Each tick one
//! acceleration sample is folded in:
//!
//! ```text
//! v[n] = v[n-1] + a[n] * dt
//! p[n] = p[n-1] + v[n] * dt
//! ```
//!
//! Velocity is updated first, so position integrates the *new* velocity.

use nalgebra::Vector3;

/// Position/velocity state of the simulated agent.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicState {
    /// Position [x, y, z] in meters
    pub position: Vector3<f64>,
    
    /// Velocity [vx, vy, vz] in m/s
    pub velocity: Vector3<f64>,
    
    /// Integration time step in seconds, fixed at creation
    dt: f64,
}

impl KinematicState {
    /// Time step used by the running simulation.
    pub const DEFAULT_DT: f64 = 1.0;
    
    /// Creates an agent at rest at the origin.
    pub fn new() -> Self {
        Self::at(Vector3::zeros(), Vector3::zeros())
    }
    
    #[cfg(test)]
    fn with_dt(dt: f64) -> Self {
        Self {
            dt,
            ..Self::new()
        }
    }
    
    /// Creates an agent with the given position and velocity.
    pub fn at(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self {
            position,
            velocity,
            dt: Self::DEFAULT_DT,
        }
    }
    
    /// Returns the time step.
    pub fn dt(&self) -> f64 {
        self.dt
    }
    
    /// Advances the state by one time step under `acceleration` (m/s²).
    pub fn integrate(&mut self, acceleration: &Vector3<f64>) {
        self.velocity += acceleration * self.dt;
        self.position += self.velocity * self.dt;
    }
}

impl Default for KinematicState {
    fn default() -> Self {
        Self::new()
    }
}
