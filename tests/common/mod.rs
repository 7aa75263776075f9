//! Common test utilities for integration tests.

#![allow(dead_code)]

use orrery::{CelestialBody, OrbitalElements, Vector3};

pub const STAR: u64 = 1;
pub const PLANET: u64 = 2;
pub const MOON: u64 = 3;

/// Star at the origin, planet P around it, moon M around P, listed
/// parents-first.
pub fn star_planet_moon() -> Vec<CelestialBody> {
    vec![
        CelestialBody::anchored(STAR, "Star", 1000.0, Vector3::ZERO),
        CelestialBody::orbiting(
            PLANET,
            "P",
            25.0,
            OrbitalElements::planar(70.0, 0.1)
                .with_orientation(0.2, 0.9, 0.4)
                .with_mean_anomaly_epoch(0.5),
        )
        .with_parent(STAR),
        CelestialBody::orbiting(
            MOON,
            "M",
            0.2,
            OrbitalElements::planar(5.0, 0.03).with_mean_anomaly_epoch(2.2),
        )
        .with_parent(PLANET),
    ]
}

pub fn find(bodies: &[CelestialBody], id: u64) -> &CelestialBody {
    bodies
        .iter()
        .find(|b| b.id == id)
        .unwrap_or_else(|| panic!("body {id} missing"))
}
