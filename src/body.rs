//! Celestial body definition.
//!
//! A body follows exactly one motion model, chosen by its [`Motion`]:
//! free bodies are integrated under gravity, locked bodies are placed by
//! their closed-form orbit (or stay put when they have none).

use crate::orbit::OrbitalElements;
use crate::types::Vector3;

/// Stable body identifier, unique within a collection.
pub type BodyId = u64;

/// Closed-form orbit of a locked body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    pub elements: OrbitalElements,
    /// Body this orbit is centred on. `None` means the origin with the
    /// default central mass.
    pub parent: Option<BodyId>,
}

/// Motion model of a body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Integrated by pairwise gravity every step.
    Free { velocity: Vector3 },
    /// Never integrated. With no orbit the body is a fixed anchor.
    Locked { orbit: Option<Orbit> },
}

/// A simulated body.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    pub id: BodyId,
    pub name: String,
    /// Mass in relative units (> 0, not validated here)
    pub mass: f64,
    /// Visual radius; plays no part in physics
    pub radius: f64,
    /// Absolute render-space position
    pub position: Vector3,
    pub motion: Motion,
}

impl CelestialBody {
    /// Free body integrated from the given state.
    pub fn free(
        id: BodyId,
        name: impl Into<String>,
        mass: f64,
        position: Vector3,
        velocity: Vector3,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            mass,
            radius: 1.0,
            position,
            motion: Motion::Free { velocity },
        }
    }

    /// Locked body without an orbit (e.g. a star held in place).
    pub fn anchored(id: BodyId, name: impl Into<String>, mass: f64, position: Vector3) -> Self {
        Self {
            id,
            name: name.into(),
            mass,
            radius: 1.0,
            position,
            motion: Motion::Locked { orbit: None },
        }
    }

    /// Locked body on a Kepler orbit around the origin.
    ///
    /// Its position is overwritten on the first step; use
    /// [`with_parent`](Self::with_parent) to centre it on another body.
    pub fn orbiting(
        id: BodyId,
        name: impl Into<String>,
        mass: f64,
        elements: OrbitalElements,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            mass,
            radius: 1.0,
            position: Vector3::ZERO,
            motion: Motion::Locked {
                orbit: Some(Orbit { elements, parent: None }),
            },
        }
    }

    /// Set the orbit's parent. Has no effect on bodies without an orbit.
    pub fn with_parent(mut self, parent: BodyId) -> Self {
        if let Motion::Locked { orbit: Some(orbit) } = &mut self.motion {
            orbit.parent = Some(parent);
        }
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.motion, Motion::Locked { .. })
    }

    /// Velocity of a free body; zero for locked bodies, whose velocity is
    /// never computed.
    pub fn velocity(&self) -> Vector3 {
        match self.motion {
            Motion::Free { velocity } => velocity,
            Motion::Locked { .. } => Vector3::ZERO,
        }
    }

    pub fn orbit(&self) -> Option<&Orbit> {
        match &self.motion {
            Motion::Locked { orbit } => orbit.as_ref(),
            Motion::Free { .. } => None,
        }
    }

    pub fn orbital_elements(&self) -> Option<&OrbitalElements> {
        self.orbit().map(|o| &o.elements)
    }

    pub fn parent_id(&self) -> Option<BodyId> {
        self.orbit().and_then(|o| o.parent)
    }

    /// Momentum (mass × velocity); zero for locked bodies.
    pub fn momentum(&self) -> Vector3 {
        self.velocity() * self.mass
    }
}
