//! Property-based tests for the free-body integrator using proptest.

use proptest::prelude::*;

use super::integrator::verlet_step;
use crate::body::CelestialBody;
use crate::diagnostics;
use crate::test_utils::assertions;
use crate::types::{SOFTENING_DISTANCE, Vector3};

const G: f64 = 0.5;

fn vec3(range: f64) -> impl Strategy<Value = Vector3> {
    (-range..range, -range..range, -range..range).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn free_bodies() -> impl Strategy<Value = Vec<CelestialBody>> {
    prop::collection::vec((0.1f64..100.0, vec3(50.0), vec3(2.0)), 2..8).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (mass, pos, vel))| {
                CelestialBody::free(i as u64, format!("body-{i}"), mass, pos, vel)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Total momentum of an all-free collection survives one step.
    ///
    /// Pairwise forces cancel in both phases; the softening cut-off drops
    /// both halves of a pair together.
    #[test]
    fn prop_momentum_conserved(bodies in free_bodies(), dt in 0.001f64..0.1) {
        let before = diagnostics::total_momentum(&bodies);
        let scale: f64 = bodies.iter().map(|b| b.momentum().length()).sum::<f64>().max(1.0);

        let mut after_bodies = bodies;
        verlet_step(&mut after_bodies, dt, G, SOFTENING_DISTANCE);
        let after = diagnostics::total_momentum(&after_bodies);

        prop_assert!(
            (after - before).length() < 1e-9 * scale,
            "momentum drift {:.3e}", (after - before).length()
        );
    }

    /// A lone free body drifts in a straight line at constant velocity.
    #[test]
    fn prop_lone_body_inertial(
        mass in 0.01f64..100.0,
        pos in vec3(100.0),
        vel in vec3(5.0),
        dt in 0.001f64..1.0,
    ) {
        let mut bodies = vec![CelestialBody::free(1, "Lone", mass, pos, vel)];
        verlet_step(&mut bodies, dt, G, SOFTENING_DISTANCE);

        let tolerance = 1e-12 * (1.0 + pos.length());
        assertions::assert_vec_close(bodies[0].position, pos + vel * dt, tolerance);
        prop_assert_eq!(bodies[0].velocity(), vel);
    }

    /// Anchored bodies never move, whatever the free bodies do.
    #[test]
    fn prop_anchors_fixed(bodies in free_bodies(), anchor in vec3(30.0)) {
        let mut all = bodies;
        all.push(CelestialBody::anchored(99, "Anchor", 500.0, anchor));
        verlet_step(&mut all, 0.1, G, SOFTENING_DISTANCE);
        prop_assert_eq!(all[all.len() - 1].position, anchor);
    }
}
