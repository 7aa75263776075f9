//! Orrery - headless simulation runner.
//!
//! Drives the simulation plugin for a fixed number of 60 Hz frames and logs
//! a summary of where the bodies ended up.

use std::time::Duration;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use orrery::diagnostics;
use orrery::presets;
use orrery::simulation::BodyCollection;
use orrery::{SimulationConfig, SimulationPlugin, SimulationTime};

/// Frames to simulate (one minute at 60 Hz).
const FRAMES: u32 = 3600;

/// Frames between progress reports.
const REPORT_EVERY: u32 = 600;

fn main() {
    let config = SimulationConfig::default();
    let bodies = presets::solar_system();

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        // Fixed frame delta so runs are reproducible
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / 60.0)))
        // Insert resources before the plugin so it keeps them
        .insert_resource(config)
        .insert_resource(SimulationTime::with_dilation(5.0))
        .insert_resource(BodyCollection::new(bodies))
        .add_plugins(SimulationPlugin);

    for frame in 1..=FRAMES {
        app.update();

        if frame % REPORT_EVERY == 0 {
            let world = app.world();
            let bodies = world.resource::<BodyCollection>().bodies();
            let sim_time = world.resource::<SimulationTime>();
            info!(
                "frame {frame}: t = {:.1}, {} bodies, bounding radius {:.1}",
                sim_time.elapsed,
                bodies.len(),
                diagnostics::bounding_radius(bodies)
            );
        }
    }

    let bodies = app.world().resource::<BodyCollection>().bodies();
    for body in bodies.iter().filter(|b| b.id < presets::RING_FIRST_ID) {
        info!(
            "{:>8}: ({:8.2}, {:8.2}, {:8.2})",
            body.name, body.position.x, body.position.y, body.position.z
        );
    }

    let broken = diagnostics::non_finite_bodies(bodies);
    if !broken.is_empty() {
        warn!("{} bodies ended with a non-finite state", broken.len());
    }
}
