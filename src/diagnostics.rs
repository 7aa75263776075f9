//! Input validation and output inspection.
//!
//! The step never reports errors; bad input surfaces as NaN positions,
//! runaway bodies or orbits around the origin. These helpers let callers
//! check a configuration before handing it over, and inspect what comes
//! back.

use std::collections::HashSet;

use crate::body::{BodyId, CelestialBody};
use crate::simulation::{BodyHierarchy, HierarchyError};
use crate::types::Vector3;

/// A configuration problem the engine would silently degrade on.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BodyIssue {
    #[error("body {id} has non-positive mass {mass}")]
    NonPositiveMass { id: BodyId, mass: f64 },

    #[error("body {id} has non-positive semi-major axis {semi_major_axis}")]
    NonPositiveSemiMajorAxis { id: BodyId, semi_major_axis: f64 },

    #[error("body {id} has eccentricity {eccentricity} outside [0, 1)")]
    UnboundEccentricity { id: BodyId, eccentricity: f64 },

    #[error("body {id} orbits unknown parent {parent}")]
    DanglingParent { id: BodyId, parent: BodyId },

    #[error("body {id} has a non-finite position or velocity")]
    NonFinite { id: BodyId },

    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),
}

/// Check every body against the engine's input assumptions.
pub fn validate(bodies: &[CelestialBody]) -> Vec<BodyIssue> {
    let ids: HashSet<BodyId> = bodies.iter().map(|b| b.id).collect();
    let mut issues = Vec::new();

    for body in bodies {
        let id = body.id;

        if !(body.mass > 0.0) {
            issues.push(BodyIssue::NonPositiveMass { id, mass: body.mass });
        }
        if !body.position.is_finite() || !body.velocity().is_finite() {
            issues.push(BodyIssue::NonFinite { id });
        }

        let Some(orbit) = body.orbit() else {
            continue;
        };
        let elements = &orbit.elements;

        if !(elements.semi_major_axis > 0.0) {
            issues.push(BodyIssue::NonPositiveSemiMajorAxis {
                id,
                semi_major_axis: elements.semi_major_axis,
            });
        }
        if !(0.0..1.0).contains(&elements.eccentricity) {
            issues.push(BodyIssue::UnboundEccentricity {
                id,
                eccentricity: elements.eccentricity,
            });
        }
        if let Some(parent) = orbit.parent {
            if !ids.contains(&parent) {
                issues.push(BodyIssue::DanglingParent { id, parent });
            }
        }
    }

    if let Err(err) = BodyHierarchy::build(bodies) {
        issues.push(err.into());
    }

    issues
}

/// Ids of bodies whose position or velocity contains NaN or infinity.
pub fn non_finite_bodies(bodies: &[CelestialBody]) -> Vec<BodyId> {
    bodies
        .iter()
        .filter(|b| !b.position.is_finite() || !b.velocity().is_finite())
        .map(|b| b.id)
        .collect()
}

/// Largest distance from the origin among finite bodies.
pub fn bounding_radius(bodies: &[CelestialBody]) -> f64 {
    bodies
        .iter()
        .filter(|b| b.position.is_finite())
        .map(|b| b.position.length())
        .fold(0.0, f64::max)
}

/// Σ m·v over free bodies.
pub fn total_momentum(bodies: &[CelestialBody]) -> Vector3 {
    bodies.iter().map(CelestialBody::momentum).sum()
}
