//! Palermo Scale hazard rating and background impact frequencies.

use bevy::prelude::*;

use super::energy::joules_to_megatons;
use super::{ImpactError, ImpactParameters, positive};

/// Background frequency per year of impacts at least 1 Mt: `f_B = A_e · E^{-0.9}`.
pub const ENERGY_FREQUENCY_COEFFICIENT: f64 = 0.03;
pub const ENERGY_FREQUENCY_EXPONENT: f64 = 0.9;

/// Diameter law `f_B = A_d · D_km^{-b_d}`, derived from the energy law for a
/// 3000 kg/m³ body at 20 km/s, where a 1 km impactor carries ~75 086 Mt.
pub const DIAMETER_FREQUENCY_COEFFICIENT: f64 = 1.2277752588290455e-6;
pub const DIAMETER_FREQUENCY_EXPONENT: f64 = 3.0 * ENERGY_FREQUENCY_EXPONENT;

/// Estimates further apart than this many orders of magnitude are inconsistent.
pub const CONSISTENCY_DECADES: f64 = 1.0;

/// Below this Palermo value a risk is well below background.
pub const WELL_BELOW_THRESHOLD: f64 = -2.0;

/// Where the background impact frequency comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BackgroundFrequency {
    /// Annual frequency supplied by the caller
    Direct(f64),
    /// Estimated from impactor diameter in km
    FromDiameterKm(f64),
    /// Estimated from impact energy in megatons
    FromEnergyMt(f64),
}

impl BackgroundFrequency {
    /// Annual background frequency.
    pub fn resolve(&self) -> Result<f64, ImpactError> {
        match *self {
            BackgroundFrequency::Direct(f) => positive("background frequency", f),
            BackgroundFrequency::FromDiameterKm(d) => background_frequency_from_diameter(d),
            BackgroundFrequency::FromEnergyMt(e) => background_frequency_from_energy(e),
        }
    }
}

pub fn background_frequency_from_diameter(diameter_km: f64) -> Result<f64, ImpactError> {
    let d = positive("diameter", diameter_km)?;
    Ok(DIAMETER_FREQUENCY_COEFFICIENT * d.powf(-DIAMETER_FREQUENCY_EXPONENT))
}

pub fn background_frequency_from_energy(energy_mt: f64) -> Result<f64, ImpactError> {
    let e = positive("energy", energy_mt)?;
    Ok(ENERGY_FREQUENCY_COEFFICIENT * e.powf(-ENERGY_FREQUENCY_EXPONENT))
}

/// `PS = log10((Pi / Ti) / f_B)`.
///
/// # Arguments
/// * `impact_probability` - Probability of impact, in `(0, 1]`
/// * `years_to_impact` - Time until the potential impact in years
/// * `background_frequency` - Annual background frequency
pub fn palermo_scale(
    impact_probability: f64,
    years_to_impact: f64,
    background_frequency: f64,
) -> Result<f64, ImpactError> {
    if !(impact_probability > 0.0 && impact_probability <= 1.0) {
        return Err(ImpactError::ProbabilityOutOfRange(impact_probability));
    }
    let years = positive("years to impact", years_to_impact)?;
    let fb = positive("background frequency", background_frequency)?;
    Ok(((impact_probability / years) / fb).log10())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HazardBand {
    /// `PS > 0`
    AboveBackground,
    /// `-2 < PS ≤ 0`
    ComparableToBackground,
    /// `PS ≤ -2`
    WellBelowBackground,
}

impl HazardBand {
    pub fn from_palermo(ps: f64) -> Self {
        if ps > 0.0 {
            HazardBand::AboveBackground
        } else if ps > WELL_BELOW_THRESHOLD {
            HazardBand::ComparableToBackground
        } else {
            HazardBand::WellBelowBackground
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HazardRating {
    pub palermo: f64,
    pub background_frequency: f64,
    pub impact_probability: f64,
    pub years_to_impact: f64,
}

impl HazardRating {
    pub fn assess(
        impact_probability: f64,
        years_to_impact: f64,
        background: BackgroundFrequency,
    ) -> Result<Self, ImpactError> {
        let background_frequency = background.resolve()?;
        let palermo = palermo_scale(impact_probability, years_to_impact, background_frequency)?;
        Ok(Self {
            palermo,
            background_frequency,
            impact_probability,
            years_to_impact,
        })
    }

    /// Band derived from the Palermo value.
    pub fn band(&self) -> HazardBand {
        HazardBand::from_palermo(self.palermo)
    }
}

/// Background frequencies estimated from the same impactor by diameter and by
/// energy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrequencyConsistency {
    pub from_diameter: f64,
    pub from_energy: f64,
}

impl FrequencyConsistency {
    /// Orders of magnitude between the two estimates.
    pub fn decades_apart(&self) -> f64 {
        (self.from_diameter / self.from_energy).log10().abs()
    }

    pub fn is_consistent(&self) -> bool {
        self.decades_apart() <= CONSISTENCY_DECADES
    }
}

/// Compare the diameter- and energy-based background frequencies of one impactor.
/// A disagreement beyond [`CONSISTENCY_DECADES`] is logged.
pub fn frequency_consistency(
    parameters: &ImpactParameters,
) -> Result<FrequencyConsistency, ImpactError> {
    let from_diameter = background_frequency_from_diameter(parameters.diameter_m() / 1000.0)?;
    let from_energy = background_frequency_from_energy(joules_to_megatons(parameters.energy()?))?;
    let check = FrequencyConsistency {
        from_diameter,
        from_energy,
    };
    if !check.is_consistent() {
        warn!(
            "Background frequency estimates disagree by {:.2} orders of magnitude (diameter {:.3e}/yr, energy {:.3e}/yr)",
            check.decades_apart(),
            from_diameter,
            from_energy
        );
    }
    Ok(check)
}

/// One potential impact in a risk table.
#[derive(Clone, Debug, PartialEq)]
pub struct RiskEntry {
    pub designation: String,
    pub impact_probability: f64,
    pub years_to_impact: f64,
    pub energy_mt: f64,
}

impl RiskEntry {
    pub fn rating(&self) -> Result<HazardRating, ImpactError> {
        HazardRating::assess(
            self.impact_probability,
            self.years_to_impact,
            BackgroundFrequency::FromEnergyMt(self.energy_mt),
        )
    }
}

/// Rate every entry and return the `limit` highest Palermo values, highest
/// first. Entries that cannot be rated are logged and left out.
pub fn palermo_leaderboard(entries: &[RiskEntry], limit: usize) -> Vec<(&RiskEntry, HazardRating)> {
    let mut rated: Vec<_> = entries
        .iter()
        .filter_map(|entry| match entry.rating() {
            Ok(rating) => Some((entry, rating)),
            Err(err) => {
                warn!("Skipping {} in risk table: {}", entry.designation, err);
                None
            }
        })
        .collect();
    rated.sort_by(|a, b| b.1.palermo.total_cmp(&a.1.palermo));
    rated.truncate(limit);
    rated
}
