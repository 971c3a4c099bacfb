//! Kepler equation solver using Newton's method.

use std::f64::consts::TAU;

/// Default Newton iteration budget.
pub const DEFAULT_ITERATIONS: u32 = 7;

/// Largest eccentricity for which [`DEFAULT_ITERATIONS`] iterations seeded with
/// `E0 = M` are guaranteed to reach [`GUARANTEED_RESIDUAL`] for every mean anomaly.
pub const MAX_GUARANTEED_ECCENTRICITY: f64 = 0.95;

/// Residual bound `|E - e·sin E - M|` (radians) that holds below
/// [`MAX_GUARANTEED_ECCENTRICITY`].
pub const GUARANTEED_RESIDUAL: f64 = 1e-6;

/// Result of solving Kepler's equation for one mean anomaly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly E in radians
    pub eccentric_anomaly: f64,
    /// `E - e·sin(E) - M` after the last iteration (radians)
    pub residual: f64,
    /// Newton steps actually taken
    pub iterations: u32,
}

impl KeplerSolution {
    pub fn converged(&self, tolerance: f64) -> bool {
        self.residual.abs() < tolerance
    }
}

/// Newton–Raphson solver for `M = E - e·sin(E)`.
///
/// Runs a fixed number of iterations unless a tolerance is set, in which case it
/// stops as soon as the Newton step drops below it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeplerSolver {
    pub max_iterations: u32,
    pub tolerance: Option<f64>,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_ITERATIONS,
            tolerance: None,
        }
    }
}

impl KeplerSolver {
    pub fn new(max_iterations: u32, tolerance: Option<f64>) -> Self {
        Self {
            max_iterations,
            tolerance,
        }
    }

    /// Solve Kepler's equation for eccentric anomaly E.
    ///
    /// # Arguments
    /// * `mean_anomaly` - Mean anomaly M in radians (any value, normalized to `[0, 2π)`)
    /// * `eccentricity` - Orbital eccentricity, `0 ≤ e < 1`
    ///
    /// # Robustness
    /// Seeded with `E0 = M`. Below [`MAX_GUARANTEED_ECCENTRICITY`] the default budget
    /// leaves a residual under [`GUARANTEED_RESIDUAL`]; above it the residual is
    /// returned as-is and callers decide whether it is acceptable.
    pub fn solve(&self, mean_anomaly: f64, eccentricity: f64) -> KeplerSolution {
        let m = mean_anomaly.rem_euclid(TAU);
        let mut e_anomaly = m;
        let mut iterations = 0;

        for _ in 0..self.max_iterations {
            // f(E) = E - e*sin(E) - M
            let f = e_anomaly - eccentricity * e_anomaly.sin() - m;
            // f'(E) = 1 - e*cos(E)
            let f_prime = 1.0 - eccentricity * e_anomaly.cos();

            let delta = f / f_prime;
            e_anomaly -= delta;
            iterations += 1;

            if self.tolerance.is_some_and(|tol| delta.abs() < tol) {
                break;
            }
        }

        KeplerSolution {
            eccentric_anomaly: e_anomaly,
            residual: e_anomaly - eccentricity * e_anomaly.sin() - m,
            iterations,
        }
    }
}

/// Compute true anomaly ν from eccentric anomaly E (radians).
pub fn eccentric_to_true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half_e = eccentric_anomaly / 2.0;

    // Using atan2 for full quadrant coverage (atan only returns [-π/2, π/2])
    let y = (1.0 + eccentricity).sqrt() * half_e.sin();
    let x = (1.0 - eccentricity).sqrt() * half_e.cos();
    2.0 * y.atan2(x)
}

/// Compute eccentric anomaly E from true anomaly ν (radians).
pub fn true_to_eccentric_anomaly(true_anomaly: f64, eccentricity: f64) -> f64 {
    let half_nu = true_anomaly / 2.0;
    let y = (1.0 - eccentricity).sqrt() * half_nu.sin();
    let x = (1.0 + eccentricity).sqrt() * half_nu.cos();
    2.0 * y.atan2(x)
}
