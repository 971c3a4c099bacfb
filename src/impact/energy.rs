//! Kinetic energy of a spherical impactor.

use std::f64::consts::PI;

use super::{ImpactError, finite, positive};
use crate::types::JOULES_PER_MEGATON;

/// Mass of a sphere of diameter `diameter_m` (m) and density `density` (kg/m³).
pub fn sphere_mass(diameter_m: f64, density: f64) -> f64 {
    PI / 6.0 * density * diameter_m.powi(3)
}

/// `½ m v²` for a sphere, without input checks.
pub(crate) fn kinetic_energy(diameter_m: f64, density: f64, speed: f64) -> f64 {
    0.5 * sphere_mass(diameter_m, density) * speed * speed
}

/// Kinetic energy in joules: `E = (π/12)·ρ·d³·v²`.
///
/// # Arguments
/// * `diameter_m` - Diameter in meters
/// * `density` - Bulk density in kg/m³
/// * `speed` - Impact speed in m/s
///
/// # Errors
/// [`ImpactError::NotPositive`] naming the first input that is zero, negative or
/// not finite. [`ImpactError::NotFinite`] when the product overflows.
pub fn energy_from_physical_parameters(
    diameter_m: f64,
    density: f64,
    speed: f64,
) -> Result<f64, ImpactError> {
    let diameter_m = positive("diameter", diameter_m)?;
    let density = positive("density", density)?;
    let speed = positive("speed", speed)?;
    finite("energy", kinetic_energy(diameter_m, density, speed))
}

pub fn joules_to_megatons(joules: f64) -> f64 {
    joules / JOULES_PER_MEGATON
}

pub fn megatons_to_joules(megatons: f64) -> f64 {
    megatons * JOULES_PER_MEGATON
}
