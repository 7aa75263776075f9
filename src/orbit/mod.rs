//! Closed-form Keplerian orbits.
//!
//! Coordinate frames:
//! - Elements are defined in the astronomy convention (reference plane X/Y, pole Z).
//! - Every position leaving this module is in render space (ground plane X/Z, vertical Y).

pub mod kepler;
pub mod path;

#[cfg(test)]
mod proptest_orbit;

pub use kepler::{KeplerSolver, OrbitalElements, astro_to_render, solve_kepler};
pub use path::{OrbitPathCache, orbit_path, sample_orbit_path};
