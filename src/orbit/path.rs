//! Static orbit path sampling for visualization.
//!
//! A path is the full ellipse shape relative to the focus. It depends only
//! on the orbital elements, so it is cached per body and recomputed when
//! the elements change. Moving the path along with the parent body is left
//! to the renderer.

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use super::kepler::{KeplerSolver, OrbitalElements};
use crate::body::{BodyId, CelestialBody};
use crate::types::{ORBIT_PATH_SEGMENTS, Vector3};

/// Sample `segments + 1` points at uniform mean-anomaly steps.
///
/// The last point repeats the first (within floating error) so the polyline
/// closes without the caller stitching it.
pub fn sample_orbit_path(
    elements: &OrbitalElements,
    segments: usize,
    solver: &KeplerSolver,
) -> Vec<Vector3> {
    let segments = segments.max(1);

    (0..=segments)
        .map(|i| {
            let mean_anomaly = std::f64::consts::TAU * i as f64 / segments as f64;
            let e_anomaly = solver.solve(mean_anomaly, elements.eccentricity);
            elements.position_at_eccentric_anomaly(e_anomaly)
        })
        .collect()
}

/// Path with the default resolution (129 points).
pub fn orbit_path(elements: &OrbitalElements) -> Vec<Vector3> {
    sample_orbit_path(elements, ORBIT_PATH_SEGMENTS, &KeplerSolver::default())
}

#[derive(Clone, Debug)]
struct CachedPath {
    elements: OrbitalElements,
    points: Vec<Vector3>,
}

/// Per-body orbit path cache.
#[derive(Resource, Default, Debug)]
pub struct OrbitPathCache {
    paths: HashMap<BodyId, CachedPath>,
}

impl OrbitPathCache {
    /// Bring the cache in line with `bodies`.
    ///
    /// Only bodies whose elements changed (or that are new) are resampled.
    /// Entries for bodies that are gone or no longer orbiting are dropped.
    /// Returns how many paths were resampled.
    pub fn refresh(
        &mut self,
        bodies: &[CelestialBody],
        segments: usize,
        solver: &KeplerSolver,
    ) -> usize {
        let mut resampled = 0;
        let points_per_path = segments.max(1) + 1;

        let orbiting: HashSet<BodyId> = bodies
            .iter()
            .filter(|b| b.orbital_elements().is_some())
            .map(|b| b.id)
            .collect();
        self.paths.retain(|id, _| orbiting.contains(id));

        for body in bodies {
            let Some(elements) = body.orbital_elements() else {
                continue;
            };

            let stale = self
                .paths
                .get(&body.id)
                .is_none_or(|cached| {
                    cached.elements != *elements || cached.points.len() != points_per_path
                });

            if stale {
                let points = sample_orbit_path(elements, segments, solver);
                self.paths.insert(
                    body.id,
                    CachedPath {
                        elements: *elements,
                        points,
                    },
                );
                resampled += 1;
            }
        }

        resampled
    }

    /// Cached path for a body, relative to its parent.
    pub fn get(&self, id: BodyId) -> Option<&[Vector3]> {
        self.paths.get(&id).map(|p| p.points.as_slice())
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
