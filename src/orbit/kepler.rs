//! Kepler orbit propagation using Newton's method for the Kepler equation.

use bevy::math::{DQuat, DVec3};

use crate::types::Vector3;

/// Newton-Raphson solver for Kepler's equation `M = E - e*sin(E)`.
///
/// The iteration cap bounds the cost per body per frame. Near-parabolic
/// orbits (e close to 1) may come back under-converged; the last iterate
/// is returned as-is rather than reported as a failure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeplerSolver {
    /// Maximum Newton iterations. Default: 10.
    pub max_iterations: u32,
    /// Stop once the Newton step is smaller than this. Default: 1e-6.
    pub tolerance: f64,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            tolerance: 1e-6,
        }
    }
}

impl KeplerSolver {
    /// Solve for eccentric anomaly E given mean anomaly M (radians).
    ///
    /// The initial guess is `E = M`; no normalization is applied, so the
    /// result stays on the same revolution as `mean_anomaly`.
    pub fn solve(&self, mean_anomaly: f64, eccentricity: f64) -> f64 {
        let mut e_anomaly = mean_anomaly;

        for _ in 0..self.max_iterations {
            // f(E) = E - e*sin(E) - M, f'(E) = 1 - e*cos(E)
            let f = e_anomaly - eccentricity * e_anomaly.sin() - mean_anomaly;
            let f_prime = 1.0 - eccentricity * e_anomaly.cos();

            let delta = f / f_prime;
            e_anomaly -= delta;

            if delta.abs() < self.tolerance {
                break;
            }
        }

        e_anomaly
    }
}

/// Solve Kepler's equation with the default iteration cap and tolerance.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    KeplerSolver::default().solve(mean_anomaly, eccentricity)
}

/// Keplerian orbital elements. All angles in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis (a > 0)
    pub semi_major_axis: f64,
    /// Eccentricity (0 ≤ e < 1 for a bound ellipse)
    pub eccentricity: f64,
    /// Inclination of the orbital plane
    pub inclination: f64,
    /// Longitude of the ascending node (Ω)
    pub ascending_node: f64,
    /// Argument of periapsis (ω)
    pub periapsis: f64,
    /// Mean anomaly at simulation time zero (M₀)
    pub mean_anomaly_epoch: f64,
}

impl OrbitalElements {
    /// Coplanar orbit with periapsis on the reference line and M₀ = 0.
    pub fn planar(semi_major_axis: f64, eccentricity: f64) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination: 0.0,
            ascending_node: 0.0,
            periapsis: 0.0,
            mean_anomaly_epoch: 0.0,
        }
    }

    pub fn with_orientation(
        mut self,
        inclination: f64,
        ascending_node: f64,
        periapsis: f64,
    ) -> Self {
        self.inclination = inclination;
        self.ascending_node = ascending_node;
        self.periapsis = periapsis;
        self
    }

    pub fn with_mean_anomaly_epoch(mut self, mean_anomaly_epoch: f64) -> Self {
        self.mean_anomaly_epoch = mean_anomaly_epoch;
        self
    }

    /// Mean motion n = sqrt(G·M / a³), radians per unit time.
    ///
    /// Non-positive `semi_major_axis` or `parent_mass` yields NaN/inf.
    pub fn mean_motion(&self, g: f64, parent_mass: f64) -> f64 {
        (g * parent_mass / self.semi_major_axis.powi(3)).sqrt()
    }

    /// Orbital period 2π/n.
    pub fn period(&self, g: f64, parent_mass: f64) -> f64 {
        std::f64::consts::TAU / self.mean_motion(g, parent_mass)
    }

    /// True anomaly ν from eccentric anomaly E.
    pub fn eccentric_to_true_anomaly(&self, eccentric_anomaly: f64) -> f64 {
        let e = self.eccentricity;
        let half_e = eccentric_anomaly / 2.0;

        // atan2 keeps the full quadrant (atan only covers [-π/2, π/2])
        let y = (1.0 + e).sqrt() * half_e.sin();
        let x = (1.0 - e).sqrt() * half_e.cos();
        2.0 * y.atan2(x)
    }

    /// Distance from the focus at eccentric anomaly E.
    pub fn radius(&self, eccentric_anomaly: f64) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * eccentric_anomaly.cos())
    }

    /// Rotation from the perifocal frame into the reference (astronomy) frame.
    ///
    /// 3-1-3 sequence: ω about the orbit normal, then i about the node line,
    /// then Ω about the reference pole.
    pub fn orientation(&self) -> DQuat {
        DQuat::from_rotation_z(self.ascending_node)
            * DQuat::from_rotation_x(self.inclination)
            * DQuat::from_rotation_z(self.periapsis)
    }

    /// Render-space position relative to the focus at eccentric anomaly E.
    pub fn position_at_eccentric_anomaly(&self, eccentric_anomaly: f64) -> Vector3 {
        let true_anomaly = self.eccentric_to_true_anomaly(eccentric_anomaly);
        let radius = self.radius(eccentric_anomaly);

        let perifocal = DVec3::new(radius * true_anomaly.cos(), radius * true_anomaly.sin(), 0.0);
        astro_to_render(self.orientation() * perifocal)
    }

    /// Offset from the parent body at simulation time `time`.
    ///
    /// The caller adds this to the parent's current absolute position.
    pub fn offset_at(&self, time: f64, g: f64, parent_mass: f64, solver: &KeplerSolver) -> Vector3 {
        let mean_anomaly = self.mean_anomaly_epoch + self.mean_motion(g, parent_mass) * time;
        let e_anomaly = solver.solve(mean_anomaly, self.eccentricity);
        self.position_at_eccentric_anomaly(e_anomaly)
    }
}

/// Map astronomy axes (reference plane X/Y, pole Z) onto render axes
/// (ground plane X/Z, vertical Y).
#[inline]
pub fn astro_to_render(v: DVec3) -> Vector3 {
    DVec3::new(v.x, v.z, -v.y)
}
