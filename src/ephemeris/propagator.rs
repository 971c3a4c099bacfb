//! Analytic two-body propagation from orbital elements.
//!
//! Every body follows its own unperturbed ellipse around a fixed central mass.
//! Position is a pure function of absolute simulated time.

use bevy::math::{DMat3, DVec3};
use bevy::prelude::Resource;
use std::f64::consts::TAU;

use super::elements::{ElementsError, OrbitalElements};
use super::kepler::{KeplerSolver, eccentric_to_true_anomaly};
use crate::render::scaling::ScaleModel;
use crate::types::{DEG_TO_RAD, julian_date_to_j2000_days};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PropagationError {
    #[error(transparent)]
    Configuration(#[from] ElementsError),

    #[error(
        "Kepler solver did not converge (e = {eccentricity}, residual {residual:e} rad after {iterations} iterations)"
    )]
    Divergence {
        eccentricity: f64,
        residual: f64,
        iterations: u32,
    },
}

/// Propagated state of one body at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitState {
    /// Position in render units, heliocentric ecliptic frame (X, Y, Z)
    pub position: DVec3,
    /// Mean anomaly in radians, `[0, 2π)`
    pub mean_anomaly: f64,
    /// Eccentric anomaly in radians
    pub eccentric_anomaly: f64,
    /// True anomaly in radians
    pub true_anomaly: f64,
    /// Distance from the focus in render units
    pub radius: f64,
    /// Kepler equation residual left by the solver (radians)
    pub kepler_residual: f64,
    /// Newton steps the solver took
    pub kepler_iterations: u32,
}

/// Rotation from the perifocal frame (x toward perihelion) into the ecliptic
/// frame: `R_z(Ω) · R_x(i) · R_z(ω)`.
pub fn perifocal_to_ecliptic(elements: &OrbitalElements) -> DMat3 {
    let node = elements.ascending_node() * DEG_TO_RAD;
    let inclination = elements.inclination() * DEG_TO_RAD;
    let arg_peri = elements.argument_of_perihelion() * DEG_TO_RAD;

    DMat3::from_rotation_z(node) * DMat3::from_rotation_x(inclination) * DMat3::from_rotation_z(arg_peri)
}

/// Stateless propagator; the solver settings are its only configuration.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct Propagator {
    pub solver: KeplerSolver,
}

impl Propagator {
    pub fn new(solver: KeplerSolver) -> Self {
        Self { solver }
    }

    /// Position of a body at `days` since J2000 under the given scale.
    ///
    /// The scale is applied to the semi-major axis only, before the anomaly is
    /// turned into coordinates, so a nonlinear scale never sees anything but the
    /// true semi-major axis.
    pub fn position(
        &self,
        elements: &OrbitalElements,
        days: f64,
        scale: &impl ScaleModel,
    ) -> OrbitState {
        let e = elements.eccentricity();
        let mean_anomaly = elements.mean_anomaly_at(days) * DEG_TO_RAD;
        let solution = self.solver.solve(mean_anomaly, e);
        let ecc_anomaly = solution.eccentric_anomaly;

        let a_scaled = scale.distance(elements.semi_major_axis());
        let (sin_e, cos_e) = ecc_anomaly.sin_cos();
        let perifocal = DVec3::new(
            a_scaled * (cos_e - e),
            a_scaled * (1.0 - e * e).sqrt() * sin_e,
            0.0,
        );

        OrbitState {
            position: perifocal_to_ecliptic(elements) * perifocal,
            mean_anomaly,
            eccentric_anomaly: ecc_anomaly,
            true_anomaly: eccentric_to_true_anomaly(ecc_anomaly, e),
            radius: a_scaled * (1.0 - e * cos_e),
            kepler_residual: solution.residual,
            kepler_iterations: solution.iterations,
        }
    }

    /// Like [`Propagator::position`], but reports a residual above `tolerance` as
    /// [`PropagationError::Divergence`].
    pub fn position_checked(
        &self,
        elements: &OrbitalElements,
        days: f64,
        scale: &impl ScaleModel,
        tolerance: f64,
    ) -> Result<OrbitState, PropagationError> {
        let state = self.position(elements, days, scale);
        if !(state.kepler_residual.abs() < tolerance) {
            return Err(PropagationError::Divergence {
                eccentricity: elements.eccentricity(),
                residual: state.kepler_residual,
                iterations: state.kepler_iterations,
            });
        }
        Ok(state)
    }

    /// Position at a Julian date.
    pub fn position_at_julian_date(
        &self,
        elements: &OrbitalElements,
        julian_date: f64,
        scale: &impl ScaleModel,
    ) -> OrbitState {
        self.position(elements, julian_date_to_j2000_days(julian_date), scale)
    }
}

/// Position with the default solver.
pub fn position(elements: &OrbitalElements, days: f64, scale: &impl ScaleModel) -> OrbitState {
    Propagator::default().position(elements, days, scale)
}

/// Sample `samples` points along the scaled orbit, evenly spaced in eccentric
/// anomaly, starting at perihelion. Used for drawing orbit lines.
pub fn orbit_path(elements: &OrbitalElements, scale: &impl ScaleModel, samples: usize) -> Vec<DVec3> {
    let e = elements.eccentricity();
    let a_scaled = scale.distance(elements.semi_major_axis());
    let b_scaled = a_scaled * (1.0 - e * e).sqrt();
    let rotation = perifocal_to_ecliptic(elements);

    (0..samples)
        .map(|k| {
            let ecc_anomaly = TAU * k as f64 / samples as f64;
            let (sin_e, cos_e) = ecc_anomaly.sin_cos();
            rotation * DVec3::new(a_scaled * (cos_e - e), b_scaled * sin_e, 0.0)
        })
        .collect()
}

/// Absolute spin angle (radians, `[0, 2π)`) of a body with the given sidereal
/// rotation period at `seconds` since J2000. Negative periods spin retrograde.
pub fn spin_angle(rotation_period_hours: f64, seconds: f64) -> f64 {
    spin_delta(rotation_period_hours, seconds).rem_euclid(TAU)
}

/// Rotation (radians) accumulated over `dt_seconds` of simulated time.
/// A zero or non-finite period means the body does not spin.
pub fn spin_delta(rotation_period_hours: f64, dt_seconds: f64) -> f64 {
    if rotation_period_hours == 0.0 || !rotation_period_hours.is_finite() {
        return 0.0;
    }
    TAU * dt_seconds / (rotation_period_hours * 3600.0)
}
