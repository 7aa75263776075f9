//! Bevy wiring for the simulation step.
//!
//! The render loop owns timing and pausing: each `Update` advances the
//! simulation clock, steps the body collection once and refreshes the
//! cached orbit paths.

use std::collections::HashSet;

use bevy::prelude::*;

use super::{SimulationConfig, Stepper};
use crate::body::{BodyId, CelestialBody};
use crate::diagnostics;
use crate::orbit::OrbitPathCache;
use crate::types::SimulationTime;

/// The body collection stepped every frame.
///
/// Spawn/remove requests replace the whole collection through
/// [`replace`](Self::replace); the generation counter lets systems notice
/// replacements apart from ordinary stepping.
#[derive(Resource, Clone, Debug, Default)]
pub struct BodyCollection {
    bodies: Vec<CelestialBody>,
    generation: u64,
}

impl BodyCollection {
    pub fn new(bodies: Vec<CelestialBody>) -> Self {
        Self { bodies, generation: 1 }
    }

    /// Swap in a new collection between steps.
    pub fn replace(&mut self, bodies: Vec<CelestialBody>) {
        self.bodies = bodies;
        self.generation += 1;
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

/// System sets, run in this order every `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Simulation clock advance
    Time,
    /// Body collection step
    Step,
    /// Orbit path cache refresh and output checks
    Post,
}

/// Plugin providing the per-frame simulation step.
///
/// Inserts default resources unless the app already has them.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationConfig>()
            .init_resource::<SimulationTime>()
            .init_resource::<BodyCollection>()
            .init_resource::<Stepper>()
            .init_resource::<OrbitPathCache>()
            .configure_sets(
                Update,
                (SimulationSet::Time, SimulationSet::Step, SimulationSet::Post).chain(),
            )
            .add_systems(
                Update,
                (
                    advance_time.in_set(SimulationSet::Time),
                    (validate_replacements, step_bodies)
                        .chain()
                        .in_set(SimulationSet::Step),
                    (refresh_orbit_paths, report_non_finite_bodies).in_set(SimulationSet::Post),
                ),
            );
    }
}

/// Advance the simulation clock by the real frame delta.
fn advance_time(mut sim_time: ResMut<SimulationTime>, time: Res<Time>) {
    sim_time.advance(time.delta_secs_f64());
}

/// Log configuration problems whenever the collection is replaced.
fn validate_replacements(bodies: Res<BodyCollection>, mut last_generation: Local<u64>) {
    if bodies.generation() == *last_generation {
        return;
    }
    *last_generation = bodies.generation();

    info!("Body collection loaded: {} bodies", bodies.len());
    for issue in diagnostics::validate(bodies.bodies()) {
        warn!("Invalid body configuration: {issue}");
    }
}

fn step_bodies(
    mut bodies: ResMut<BodyCollection>,
    mut stepper: ResMut<Stepper>,
    config: Res<SimulationConfig>,
    sim_time: Res<SimulationTime>,
) {
    if sim_time.paused {
        return;
    }
    let next = stepper.step(&bodies.bodies, &config, sim_time.elapsed, false);
    bodies.bodies = next;
}

fn refresh_orbit_paths(
    bodies: Res<BodyCollection>,
    config: Res<SimulationConfig>,
    mut cache: ResMut<OrbitPathCache>,
) {
    let resampled = cache.refresh(bodies.bodies(), config.orbit_path_segments, &config.kepler);
    if resampled > 0 {
        debug!("Resampled {resampled} orbit paths");
    }
}

/// Warn once per body when its state stops being finite.
fn report_non_finite_bodies(bodies: Res<BodyCollection>, mut reported: Local<HashSet<BodyId>>) {
    for id in diagnostics::non_finite_bodies(bodies.bodies()) {
        if reported.insert(id) {
            let name = bodies.get(id).map(|b| b.name.as_str()).unwrap_or("?");
            warn!("Body {id} ({name}) has a non-finite state");
        }
    }
}
