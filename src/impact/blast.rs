//! Airblast overpressure model: 10, 5 and 1 psi radii scaled by the cube root of
//! yield in kilotons, reduced for shallow entry angles.

use super::casualties::{CasualtyEstimate, CasualtyModel, zone_estimates};
use super::{ImpactError, non_negative};
use crate::types::DEG_TO_RAD;

/// km per kt^{1/3} for the 10, 5 and 1 psi contours.
pub const PSI10_COEFFICIENT: f64 = 0.40;
pub const PSI5_COEFFICIENT: f64 = 0.75;
pub const PSI1_COEFFICIENT: f64 = 2.10;

pub const MIN_COUPLING: f64 = 0.4;
pub const DEFAULT_ENTRY_ANGLE_DEG: f64 = 45.0;

/// Urban population density used when the caller gives none, people per km².
pub const DEFAULT_BLAST_POPULATION_DENSITY: f64 = 3000.0;

/// Fatality fractions inside the 10, 5 and 1 psi rings.
pub const BLAST_FATALITY_FRACTIONS: [f64; 3] = [0.90, 0.40, 0.10];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverpressureRadii {
    pub psi10_km: f64,
    pub psi5_km: f64,
    pub psi1_km: f64,
    pub coupling: f64,
}

impl OverpressureRadii {
    pub fn as_array(&self) -> [f64; 3] {
        [self.psi10_km, self.psi5_km, self.psi1_km]
    }
}

/// Ground coupling for an entry angle above the horizon: `sin(angle)` clamped to
/// `[0.4, 1.0]`.
pub fn coupling(entry_angle_deg: f64) -> f64 {
    (entry_angle_deg * DEG_TO_RAD).sin().clamp(MIN_COUPLING, 1.0)
}

pub fn overpressure_radii(
    energy_mt: f64,
    entry_angle_deg: f64,
) -> Result<OverpressureRadii, ImpactError> {
    let energy_mt = non_negative("energy", energy_mt)?;
    if !entry_angle_deg.is_finite() {
        return Err(ImpactError::NotFinite {
            quantity: "entry angle",
            value: entry_angle_deg,
        });
    }

    let coupling = coupling(entry_angle_deg);
    let w13 = (energy_mt * 1000.0).cbrt() * coupling;
    Ok(OverpressureRadii {
        psi10_km: PSI10_COEFFICIENT * w13,
        psi5_km: PSI5_COEFFICIENT * w13,
        psi1_km: PSI1_COEFFICIENT * w13,
        coupling,
    })
}

/// Casualties inside each overpressure ring (rings do not overlap).
pub fn blast_casualties(
    radii: &OverpressureRadii,
    population_density: f64,
) -> Result<CasualtyEstimate, ImpactError> {
    zone_estimates(
        radii.as_array(),
        BLAST_FATALITY_FRACTIONS,
        population_density,
        CasualtyModel::Annulus,
    )
}
