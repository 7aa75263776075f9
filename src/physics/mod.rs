//! Gravitational integration for free bodies.
//!
//! Two-phase Velocity Verlet over pairwise Newtonian attraction. Locked
//! bodies act as sources but are never moved here.

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

pub use gravity::{acceleration_at, compute_accelerations};
pub use integrator::verlet_step;
