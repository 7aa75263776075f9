//! Velocity Verlet integration for free bodies.
//!
//! Only free bodies move here. Locked bodies take part as gravity sources
//! frozen at their start-of-step positions; their Kepler placement happens
//! afterwards in the stepper.

use super::gravity::compute_accelerations;
use crate::body::{CelestialBody, Motion};

/// Advance every free body in place by one Velocity Verlet step.
///
/// 1. a₁ from the start-of-step snapshot
/// 2. x ← x + v·dt + ½·a₁·dt², v ← v + ½·a₁·dt
/// 3. a₂ from the drifted positions
/// 4. v ← v + ½·a₂·dt
///
/// Each phase reads a complete snapshot before writing anything, so the
/// result does not depend on body order.
pub fn verlet_step(bodies: &mut [CelestialBody], dt: f64, g: f64, softening: f64) {
    let acc_start = compute_accelerations(bodies, g, softening);

    for (body, acc) in bodies.iter_mut().zip(&acc_start) {
        if let Motion::Free { velocity } = &mut body.motion {
            body.position += *velocity * dt + *acc * (0.5 * dt * dt);
            *velocity += *acc * (0.5 * dt);
        }
    }

    let acc_end = compute_accelerations(bodies, g, softening);

    for (body, acc) in bodies.iter_mut().zip(&acc_end) {
        if let Motion::Free { velocity } = &mut body.motion {
            *velocity += *acc * (0.5 * dt);
        }
    }
}
