//! Initial body configurations.
//!
//! Collections are listed parents-first. Asteroid rings are generated
//! deterministically (golden-ratio spacing) so the same call always
//! produces the same bodies.

use crate::body::{BodyId, CelestialBody};
use crate::orbit::OrbitalElements;
use crate::simulation::{BodyHierarchy, SimulationConfig, place_locked_bodies};
use crate::types::{DEG_TO_RAD, Vector3};

/// Id of the star in [`solar_system`].
pub const STAR_ID: BodyId = 1;

/// First id used for the asteroid ring in [`solar_system`].
pub const RING_FIRST_ID: BodyId = 1000;

/// Golden angle in radians.
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// Fractional part of the golden ratio.
const PHI_FRACT: f64 = 0.618_033_988_749_895;

/// Highest eccentricity given to ring asteroids.
pub const RING_MAX_ECCENTRICITY: f64 = 0.2;

struct PlanetSpec {
    id: BodyId,
    name: &'static str,
    mass: f64,
    radius: f64,
    semi_major_axis: f64,
    eccentricity: f64,
    inclination_deg: f64,
    node_deg: f64,
    periapsis_deg: f64,
    mean_anomaly_deg: f64,
}

const PLANETS: &[PlanetSpec] = &[
    PlanetSpec {
        id: 2,
        name: "Ember",
        mass: 0.8,
        radius: 0.8,
        semi_major_axis: 18.0,
        eccentricity: 0.12,
        inclination_deg: 3.0,
        node_deg: 48.0,
        periapsis_deg: 29.0,
        mean_anomaly_deg: 174.0,
    },
    PlanetSpec {
        id: 3,
        name: "Verdant",
        mass: 3.0,
        radius: 1.6,
        semi_major_axis: 32.0,
        eccentricity: 0.02,
        inclination_deg: 0.0,
        node_deg: 0.0,
        periapsis_deg: 102.0,
        mean_anomaly_deg: 357.0,
    },
    PlanetSpec {
        id: 4,
        name: "Rust",
        mass: 1.2,
        radius: 1.1,
        semi_major_axis: 48.0,
        eccentricity: 0.09,
        inclination_deg: 1.8,
        node_deg: 49.0,
        periapsis_deg: 286.0,
        mean_anomaly_deg: 19.0,
    },
    PlanetSpec {
        id: 5,
        name: "Titanus",
        mass: 40.0,
        radius: 4.0,
        semi_major_axis: 110.0,
        eccentricity: 0.05,
        inclination_deg: 1.3,
        node_deg: 100.0,
        periapsis_deg: 274.0,
        mean_anomaly_deg: 20.0,
    },
    PlanetSpec {
        id: 6,
        name: "Glacier",
        mass: 12.0,
        radius: 2.8,
        semi_major_axis: 160.0,
        eccentricity: 0.06,
        inclination_deg: 2.5,
        node_deg: 113.0,
        periapsis_deg: 339.0,
        mean_anomaly_deg: 317.0,
    },
];

/// Star, five planets, three moons and an asteroid ring between the
/// third and fourth planets.
///
/// Orbiting bodies are already placed at their t = 0 positions under the
/// default [`SimulationConfig`].
pub fn solar_system() -> Vec<CelestialBody> {
    let mut bodies =
        vec![CelestialBody::anchored(STAR_ID, "Sol", 1000.0, Vector3::ZERO).with_radius(6.0)];

    for p in PLANETS {
        let elements = OrbitalElements::planar(p.semi_major_axis, p.eccentricity)
            .with_orientation(
                p.inclination_deg * DEG_TO_RAD,
                p.node_deg * DEG_TO_RAD,
                p.periapsis_deg * DEG_TO_RAD,
            )
            .with_mean_anomaly_epoch(p.mean_anomaly_deg * DEG_TO_RAD);
        bodies.push(
            CelestialBody::orbiting(p.id, p.name, p.mass, elements)
                .with_parent(STAR_ID)
                .with_radius(p.radius),
        );
    }

    // Moons come after their planets
    bodies.push(
        CelestialBody::orbiting(
            20,
            "Luna",
            0.04,
            OrbitalElements::planar(3.0, 0.05).with_orientation(5.1 * DEG_TO_RAD, 0.0, 0.0),
        )
        .with_parent(3)
        .with_radius(0.4),
    );
    bodies.push(
        CelestialBody::orbiting(21, "Io", 0.05, OrbitalElements::planar(7.0, 0.004))
            .with_parent(5)
            .with_radius(0.5),
    );
    bodies.push(
        CelestialBody::orbiting(
            22,
            "Europa",
            0.03,
            OrbitalElements::planar(10.0, 0.009).with_mean_anomaly_epoch(2.0),
        )
        .with_parent(5)
        .with_radius(0.45),
    );

    bodies.extend(asteroid_ring(RING_FIRST_ID, 120, 60.0, 90.0, Some(STAR_ID)));

    let hierarchy = BodyHierarchy::build_lenient(&bodies);
    place_locked_bodies(&mut bodies, &hierarchy, &SimulationConfig::default(), 0.0);
    bodies
}

/// `count` locked asteroids with semi-major axes in `[inner, outer)`.
///
/// Eccentricities stay below [`RING_MAX_ECCENTRICITY`] and inclinations
/// within ±3°. Ids run from `first_id` upward. Bodies start at the
/// origin; the first step (or [`place_locked_bodies`]) puts them on their
/// orbits.
pub fn asteroid_ring(
    first_id: BodyId,
    count: usize,
    inner: f64,
    outer: f64,
    parent: Option<BodyId>,
) -> Vec<CelestialBody> {
    (0..count)
        .map(|i| {
            let k = i as f64;
            let spread = (k * PHI_FRACT).fract();
            let wobble = ((k + 0.5) * 0.754_877_666_246_693).fract();

            let semi_major_axis = inner + (outer - inner) * spread;
            let elements = OrbitalElements::planar(semi_major_axis, RING_MAX_ECCENTRICITY * wobble)
                .with_orientation(
                    (wobble - 0.5) * 6.0 * DEG_TO_RAD,
                    k * GOLDEN_ANGLE,
                    (k * 2.0 * GOLDEN_ANGLE).rem_euclid(std::f64::consts::TAU),
                )
                .with_mean_anomaly_epoch((k * GOLDEN_ANGLE).rem_euclid(std::f64::consts::TAU));

            let id = first_id + i as BodyId;
            let body = CelestialBody::orbiting(id, format!("Asteroid {}", i + 1), 0.001, elements)
                .with_radius(0.15);
            match parent {
                Some(p) => body.with_parent(p),
                None => body,
            }
        })
        .collect()
}

/// Free debris spawned at `position` with `velocity`.
pub fn debris(id: BodyId, position: Vector3, velocity: Vector3) -> CelestialBody {
    CelestialBody::free(id, format!("Debris {id}"), 0.01, position, velocity).with_radius(0.2)
}
