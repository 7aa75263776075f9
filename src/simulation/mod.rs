//! Per-frame simulation step.
//!
//! One step takes the current body collection and returns a new one:
//! free bodies are advanced by Velocity Verlet, then every orbiting locked
//! body is placed at its Kepler offset from its parent's freshly updated
//! position. The step keeps no state of its own; [`Stepper`] only caches
//! the parent ordering between frames.

pub mod hierarchy;
pub mod plugin;

use bevy::prelude::*;

pub use hierarchy::{BodyHierarchy, HierarchyError, HierarchyShape};
pub use plugin::{BodyCollection, SimulationPlugin, SimulationSet};

use crate::body::CelestialBody;
use crate::orbit::KeplerSolver;
use crate::physics::verlet_step;
use crate::types::{
    DEFAULT_CENTRAL_MASS, DEFAULT_DT, DEFAULT_G, ORBIT_PATH_SEGMENTS, SOFTENING_DISTANCE, Vector3,
};

/// Tunables for the simulation step.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Fixed time step per frame. Default: 0.1.
    pub dt: f64,
    /// Gravitational constant. Default: 0.5.
    pub gravitational_constant: f64,
    /// Mass used for orbits with no resolvable parent. Default: 1000.
    pub default_central_mass: f64,
    /// Pairs closer than this exert no force. Default: 0.5.
    pub softening_distance: f64,
    /// Kepler equation solver settings.
    pub kepler: KeplerSolver,
    /// Segments per sampled orbit path. Default: 128.
    pub orbit_path_segments: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            gravitational_constant: DEFAULT_G,
            default_central_mass: DEFAULT_CENTRAL_MASS,
            softening_distance: SOFTENING_DISTANCE,
            kepler: KeplerSolver::default(),
            orbit_path_segments: ORBIT_PATH_SEGMENTS,
        }
    }
}

impl SimulationConfig {
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.gravitational_constant = g;
        self
    }
}

/// Advance `bodies` by one frame.
///
/// Returns an unchanged copy while `paused`. `time` is the elapsed
/// simulation time used by the closed-form orbits; `config.dt` is the
/// integration step for free bodies. Never fails: degenerate input comes
/// back as NaN or fallback positions (see [`crate::diagnostics`]).
pub fn step(
    bodies: &[CelestialBody],
    config: &SimulationConfig,
    time: f64,
    paused: bool,
) -> Vec<CelestialBody> {
    if paused {
        return bodies.to_vec();
    }
    let hierarchy = BodyHierarchy::build_lenient(bodies);
    step_with_hierarchy(bodies, &hierarchy, config, time)
}

/// Step using a precomputed hierarchy for `bodies`.
///
/// The hierarchy must have been built from a collection with the same
/// [`HierarchyShape`].
pub fn step_with_hierarchy(
    bodies: &[CelestialBody],
    hierarchy: &BodyHierarchy,
    config: &SimulationConfig,
    time: f64,
) -> Vec<CelestialBody> {
    let mut next = bodies.to_vec();

    verlet_step(&mut next, config.dt, config.gravitational_constant, config.softening_distance);
    place_locked_bodies(&mut next, hierarchy, config, time);

    next
}

/// Overwrite every orbiting body's position with its Kepler position at
/// `time`, leaving free bodies alone.
///
/// Also useful before the first step, so that locked bodies act as gravity
/// sources from their real positions rather than wherever they were built.
pub fn place_locked_bodies(
    bodies: &mut [CelestialBody],
    hierarchy: &BodyHierarchy,
    config: &SimulationConfig,
    time: f64,
) {
    for &i in hierarchy.order() {
        let Some(orbit) = bodies[i].orbit().copied() else {
            continue;
        };

        // Parents come earlier in the order, so their slot is already final
        let (parent_pos, parent_mass) = match hierarchy.parent_of(i) {
            Some(p) => (bodies[p].position, bodies[p].mass),
            None => (Vector3::ZERO, config.default_central_mass),
        };

        let offset = orbit
            .elements
            .offset_at(time, config.gravitational_constant, parent_mass, &config.kepler);
        bodies[i].position = offset + parent_pos;
    }
}

/// Stepper that reuses the parent ordering across frames.
///
/// The hierarchy is rebuilt only when ids or parent links change, which
/// happens when bodies are spawned or removed between steps.
#[derive(Resource, Default, Debug)]
pub struct Stepper {
    shape: HierarchyShape,
    hierarchy: BodyHierarchy,
    rebuilds: usize,
}

impl Stepper {
    pub fn step(
        &mut self,
        bodies: &[CelestialBody],
        config: &SimulationConfig,
        time: f64,
        paused: bool,
    ) -> Vec<CelestialBody> {
        if paused {
            return bodies.to_vec();
        }

        let shape = BodyHierarchy::shape(bodies);
        if shape != self.shape || self.hierarchy.len() != bodies.len() {
            debug!("Rebuilding body hierarchy for {} bodies", bodies.len());
            self.hierarchy = BodyHierarchy::build_lenient(bodies);
            self.shape = shape;
            self.rebuilds += 1;
        }

        step_with_hierarchy(bodies, &self.hierarchy, config, time)
    }

    /// Number of times the hierarchy has been (re)built.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }
}
