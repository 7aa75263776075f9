//! Property-based tests for Kepler propagation using proptest.

use proptest::prelude::*;

use super::kepler::{KeplerSolver, OrbitalElements, solve_kepler};
use super::path::orbit_path;

const G: f64 = 0.5;

fn elements_strategy() -> impl Strategy<Value = OrbitalElements> {
    (
        1.0f64..500.0,
        0.0f64..0.9,
        0.0f64..std::f64::consts::PI,
        -10.0f64..10.0,
        -10.0f64..10.0,
        -10.0f64..10.0,
    )
        .prop_map(|(a, e, i, node, peri, m0)| {
            OrbitalElements::planar(a, e)
                .with_orientation(i, node, peri)
                .with_mean_anomaly_epoch(m0)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The capped Newton solve satisfies Kepler's equation for e ≤ 0.9.
    #[test]
    fn prop_kepler_residual_small(
        mean_anomaly in -50.0f64..50.0,
        eccentricity in 0.0f64..=0.9,
    ) {
        let e_anom = solve_kepler(mean_anomaly, eccentricity);
        let residual = (e_anom - eccentricity * e_anom.sin() - mean_anomaly).abs();
        prop_assert!(
            residual < 1e-4,
            "Kepler residual {:.3e} for M={}, e={}",
            residual, mean_anomaly, eccentricity
        );
    }

    /// Zero mean anomaly is always periapsis.
    #[test]
    fn prop_kepler_zero_at_periapsis(eccentricity in 0.0f64..0.99) {
        prop_assert_eq!(solve_kepler(0.0, eccentricity), 0.0);
    }

    /// Offsets repeat after one orbital period.
    #[test]
    fn prop_offset_periodic(
        elements in elements_strategy(),
        parent_mass in 1.0f64..5000.0,
        time in 0.0f64..1000.0,
    ) {
        let solver = KeplerSolver::default();
        let period = elements.period(G, parent_mass);
        let p1 = elements.offset_at(time, G, parent_mass, &solver);
        let p2 = elements.offset_at(time + period, G, parent_mass, &solver);

        let tolerance = 1e-6 * elements.semi_major_axis;
        prop_assert!(
            (p2 - p1).length() < tolerance,
            "offset drifted by {} over one period", (p2 - p1).length()
        );
    }

    /// The offset distance stays between periapsis and apoapsis.
    #[test]
    fn prop_offset_within_apsides(
        elements in elements_strategy(),
        time in 0.0f64..1000.0,
    ) {
        let offset = elements.offset_at(time, G, 1000.0, &KeplerSolver::default());
        let a = elements.semi_major_axis;
        let e = elements.eccentricity;
        let r = offset.length();
        prop_assert!(r >= a * (1.0 - e) * (1.0 - 1e-9));
        prop_assert!(r <= a * (1.0 + e) * (1.0 + 1e-9));
    }

    /// Sampled paths close on themselves.
    #[test]
    fn prop_path_closed(elements in elements_strategy()) {
        let path = orbit_path(&elements);
        let gap = (path[0] - path[path.len() - 1]).length();
        prop_assert!(gap < 1e-9 * elements.semi_major_axis.max(1.0), "gap {}", gap);
    }
}
