//! Orrery - Hybrid Celestial Mechanics Engine
//!
//! Advances a collection of celestial bodies one frame at a time using two
//! coexisting motion models: Velocity Verlet N-body integration for free
//! bodies and closed-form Kepler propagation for bodies locked to a parent.

pub mod body;
pub mod diagnostics;
pub mod orbit;
pub mod physics;
pub mod presets;
pub mod simulation;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use body::{BodyId, CelestialBody, Motion, Orbit};
pub use orbit::{KeplerSolver, OrbitalElements, solve_kepler};
pub use simulation::{SimulationConfig, SimulationPlugin, Stepper, step};
pub use types::{SimulationTime, Vector3};
