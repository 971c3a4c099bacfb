//! Casualty estimates over the three damage zones.
//!
//! The documented model counts each zone over its full disc, so inner-zone
//! population is counted again in every outer zone. [`CasualtyModel::Annulus`]
//! subtracts the inner disc from each zone instead.

use std::f64::consts::PI;

use super::damage::DamageRadii;
use super::{ImpactError, non_negative};

/// People per km² when the caller has no local figure.
pub const DEFAULT_POPULATION_DENSITY: f64 = 100.0;

/// Fraction of the population killed in the severe, moderate and light zones.
pub const FATALITY_FRACTIONS: [f64; 3] = [0.9, 0.3, 0.05];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CasualtyModel {
    /// Full disc `π r²` per zone
    #[default]
    Concentric,
    /// Ring between a zone's radius and the next inner one
    Annulus,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneEstimate {
    pub radius_km: f64,
    pub area_km2: f64,
    pub fatality_fraction: f64,
    /// Expected casualties (not rounded)
    pub casualties: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CasualtyEstimate {
    pub severe: ZoneEstimate,
    pub moderate: ZoneEstimate,
    pub light: ZoneEstimate,
    pub model: CasualtyModel,
}

impl CasualtyEstimate {
    pub fn zones(&self) -> [&ZoneEstimate; 3] {
        [&self.severe, &self.moderate, &self.light]
    }

    pub fn total_casualties(&self) -> f64 {
        self.zones().iter().map(|z| z.casualties).sum()
    }

    pub fn total_area_km2(&self) -> f64 {
        self.zones().iter().map(|z| z.area_km2).sum()
    }
}

/// Zone estimates for radii ordered innermost first.
pub(crate) fn zone_estimates(
    radii_km: [f64; 3],
    fractions: [f64; 3],
    population_density: f64,
    model: CasualtyModel,
) -> Result<CasualtyEstimate, ImpactError> {
    let density = non_negative("population density", population_density)?;

    let mut inner_disc = 0.0;
    let zones: [ZoneEstimate; 3] = std::array::from_fn(|k| {
        let disc = PI * radii_km[k] * radii_km[k];
        let area_km2 = match model {
            CasualtyModel::Concentric => disc,
            CasualtyModel::Annulus => disc - inner_disc,
        };
        inner_disc = disc;
        ZoneEstimate {
            radius_km: radii_km[k],
            area_km2,
            fatality_fraction: fractions[k],
            casualties: area_km2 * density * fractions[k],
        }
    });

    let [severe, moderate, light] = zones;
    Ok(CasualtyEstimate {
        severe,
        moderate,
        light,
        model,
    })
}

/// Casualties per zone for `population_density` people per km².
pub fn estimate_casualties(
    radii: &DamageRadii,
    population_density: f64,
    model: CasualtyModel,
) -> Result<CasualtyEstimate, ImpactError> {
    zone_estimates(radii.as_array(), FATALITY_FRACTIONS, population_density, model)
}
