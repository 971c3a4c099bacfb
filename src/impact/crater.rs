//! Transient crater size from impact energy.
//!
//! A single power law in energy gives the diameter; depth and volume follow from
//! fixed proportions.

use std::f64::consts::PI;

use super::{ImpactError, non_negative};

/// Crater diameter (m) produced by 1e12 J.
pub const CRATER_COEFFICIENT: f64 = 1.2;
pub const CRATER_EXPONENT: f64 = 0.294;
pub const DEPTH_TO_DIAMETER: f64 = 0.2;

/// Simple-crater geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CraterDimensions {
    pub diameter_m: f64,
    pub depth_m: f64,
    /// Cylinder approximation `π (D/2)² · depth`
    pub volume_m3: f64,
}

impl CraterDimensions {
    pub fn diameter_km(&self) -> f64 {
        self.diameter_m / 1000.0
    }

    pub fn depth_km(&self) -> f64 {
        self.depth_m / 1000.0
    }

    pub fn volume_km3(&self) -> f64 {
        self.volume_m3 / 1.0e9
    }
}

/// `D = 1.2 · (E / 1e12)^0.294` meters.
pub fn crater_dimensions(energy_joules: f64) -> Result<CraterDimensions, ImpactError> {
    let energy = non_negative("energy", energy_joules)?;
    let diameter_m = CRATER_COEFFICIENT * (energy / 1.0e12).powf(CRATER_EXPONENT);
    let depth_m = DEPTH_TO_DIAMETER * diameter_m;
    let radius = diameter_m / 2.0;
    Ok(CraterDimensions {
        diameter_m,
        depth_m,
        volume_m3: PI * radius * radius * depth_m,
    })
}
