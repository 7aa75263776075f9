//! Test utilities for the celestial simulation.
//!
//! Provides fixtures for common body configurations and assertions for
//! physical invariants like energy and vector closeness.

use crate::body::CelestialBody;
use crate::types::Vector3;

/// Fixtures for creating test bodies.
pub mod fixtures {
    use super::*;
    use crate::orbit::OrbitalElements;

    /// An anchored star at the origin and a free body on a circular orbit
    /// around it.
    ///
    /// The body starts on +X moving along -Z (counter-clockwise seen from +Y).
    pub fn circular_orbit(star_mass: f64, radius: f64, g: f64) -> (CelestialBody, CelestialBody) {
        // v = sqrt(G·M/r)
        let v = (g * star_mass / radius).sqrt();
        let star = CelestialBody::anchored(1, "Star", star_mass, Vector3::ZERO);
        let rock = CelestialBody::free(
            2,
            "Rock",
            1e-3,
            Vector3::new(radius, 0.0, 0.0),
            Vector3::new(0.0, 0.0, -v),
        );
        (star, rock)
    }

    /// Star, planet and moon listed parents-first.
    pub fn star_planet_moon() -> Vec<CelestialBody> {
        vec![
            CelestialBody::anchored(1, "Star", 1000.0, Vector3::ZERO),
            CelestialBody::orbiting(
                2,
                "Planet",
                20.0,
                OrbitalElements::planar(60.0, 0.05).with_orientation(0.1, 0.4, 1.2),
            )
            .with_parent(1),
            CelestialBody::orbiting(
                3,
                "Moon",
                0.5,
                OrbitalElements::planar(4.0, 0.02).with_mean_anomaly_epoch(1.0),
            )
            .with_parent(2),
        ]
    }

    /// A handful of free bodies with no locked bodies present.
    pub fn free_cluster() -> Vec<CelestialBody> {
        vec![
            CelestialBody::free(1, "A", 30.0, Vector3::ZERO, Vector3::new(0.1, 0.0, 0.0)),
            CelestialBody::free(2, "B", 5.0, Vector3::X * 12.0, Vector3::Z * 1.2),
            CelestialBody::free(
                3,
                "C",
                2.0,
                Vector3::new(-8.0, 2.0, 3.0),
                Vector3::new(0.0, 0.3, -1.0),
            ),
        ]
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use super::*;

    /// Total energy of an all-free collection (kinetic + pairwise potential).
    pub fn total_energy(bodies: &[CelestialBody], g: f64) -> f64 {
        let kinetic: f64 = bodies
            .iter()
            .map(|b| 0.5 * b.mass * b.velocity().length_squared())
            .sum();

        let mut potential = 0.0;
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let r = (bodies[i].position - bodies[j].position).length();
                potential -= g * bodies[i].mass * bodies[j].mass / r;
            }
        }

        kinetic + potential
    }

    /// Assert two vectors agree component-wise within `tolerance`.
    ///
    /// # Panics
    /// Panics if any component differs by more than `tolerance`.
    pub fn assert_vec_close(actual: Vector3, expected: Vector3, tolerance: f64) {
        let diff = (actual - expected).abs().max_element();
        assert!(
            diff <= tolerance,
            "vectors differ: actual={actual}, expected={expected}, \
             diff={diff:.3e}, tolerance={tolerance:.3e}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circular_orbit_velocity() {
        let (_, rock) = fixtures::circular_orbit(1000.0, 50.0, 0.5);
        assert_relative_eq!(rock.velocity().length(), 10.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(rock.position.dot(rock.velocity()), 0.0);
    }

    #[test]
    fn test_bound_cluster_energy_negative() {
        let bodies = fixtures::free_cluster();
        assert!(assertions::total_energy(&bodies, 0.5) < 0.0);
    }
}
