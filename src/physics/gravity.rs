//! Pairwise Newtonian gravity between bodies.
//!
//! Accelerations are computed from an immutable slice of bodies, one output
//! slot per body, so no body ever observes another one mid-update.

use bevy::math::DVec3;

use crate::body::CelestialBody;
use crate::types::Vector3;

/// Acceleration on a body at `pos` from every other body in `bodies`.
///
/// `skip` is the index of the body itself. Pairs closer than `softening`
/// contribute nothing; there is no minimum-distance clamp.
#[inline]
pub fn acceleration_at(
    pos: Vector3,
    skip: usize,
    bodies: &[CelestialBody],
    g: f64,
    softening: f64,
) -> Vector3 {
    let softening_squared = softening * softening;
    let mut acc = DVec3::ZERO;

    for (j, other) in bodies.iter().enumerate() {
        if j == skip {
            continue;
        }

        let delta = other.position - pos;
        let r_squared = delta.length_squared();

        if r_squared >= softening_squared {
            let r = r_squared.sqrt();
            // a = G·m/r² along delta/r
            acc += delta * (g * other.mass / (r_squared * r));
        }
    }

    acc
}

/// Accelerations for every free body; locked bodies get zero.
///
/// Locked bodies still act as sources at whatever position `bodies` holds.
#[cfg(not(feature = "parallel"))]
pub fn compute_accelerations(bodies: &[CelestialBody], g: f64, softening: f64) -> Vec<Vector3> {
    bodies
        .iter()
        .enumerate()
        .map(|(i, body)| {
            if body.is_locked() {
                DVec3::ZERO
            } else {
                acceleration_at(body.position, i, bodies, g, softening)
            }
        })
        .collect()
}

/// Accelerations for every free body; locked bodies get zero.
///
/// Locked bodies still act as sources at whatever position `bodies` holds.
#[cfg(feature = "parallel")]
pub fn compute_accelerations(bodies: &[CelestialBody], g: f64, softening: f64) -> Vec<Vector3> {
    use rayon::prelude::*;

    bodies
        .par_iter()
        .enumerate()
        .map(|(i, body)| {
            if body.is_locked() {
                DVec3::ZERO
            } else {
                acceleration_at(body.position, i, bodies, g, softening)
            }
        })
        .collect()
}
