//! Core types and tuning constants for the celestial simulation.
//!
//! All quantities are in relative "simulation units". The gravitational
//! constant is calibrated for visual pacing, not physical accuracy.

use bevy::math::DVec3;
use bevy::prelude::*;

/// Position/velocity vector in render space (ground plane X/Z, vertical Y).
pub type Vector3 = DVec3;

/// Default gravitational constant (tuned for on-screen pacing).
pub const DEFAULT_G: f64 = 0.5;

/// Default fixed time step per frame, in simulation-time units.
pub const DEFAULT_DT: f64 = 0.1;

/// Mass assumed for the virtual center at the origin when a locked body
/// has no resolvable parent.
pub const DEFAULT_CENTRAL_MASS: f64 = 1000.0;

/// Pairs closer than this contribute no acceleration.
pub const SOFTENING_DISTANCE: f64 = 0.5;

/// Number of segments in a sampled orbit path (points = segments + 1).
pub const ORBIT_PATH_SEGMENTS: usize = 128;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Simulation clock resource.
///
/// `elapsed` drives the closed-form orbits; it accumulates real seconds
/// scaled by `time_dilation` and stops while paused.
#[derive(Resource, Clone, Debug)]
pub struct SimulationTime {
    /// Elapsed simulation time (real seconds × dilation)
    pub elapsed: f64,
    /// Simulation seconds per real second
    pub time_dilation: f64,
    /// Whether simulation is paused
    pub paused: bool,
}

impl Default for SimulationTime {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            time_dilation: 1.0,
            paused: false,
        }
    }
}

impl SimulationTime {
    /// Create a running clock with the given dilation factor.
    pub fn with_dilation(time_dilation: f64) -> Self {
        Self {
            time_dilation,
            ..Default::default()
        }
    }

    /// Advance by `real_seconds` of wall-clock time. No-op while paused.
    pub fn advance(&mut self, real_seconds: f64) {
        if self.paused {
            return;
        }
        self.elapsed += real_seconds * self.time_dilation;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Rewind to time zero and pause.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.paused = true;
    }
}
