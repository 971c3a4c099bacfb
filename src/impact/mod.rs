//! Impact physics for a hypothetical NEO strike.
//!
//! Every function here is a pure calculation on physical-unit scalars. Invalid
//! input is rejected with [`ImpactError`] instead of leaking NaN or infinity.
//!
//! Units: diameters in meters, density in kg/m³, speed in m/s, energy in joules
//! unless a name says otherwise; radii and areas in km / km².

pub mod blast;
pub mod casualties;
pub mod crater;
pub mod damage;
pub mod energy;
pub mod hazard;

#[cfg(test)]
mod proptest_impact;

pub use blast::{OverpressureRadii, blast_casualties, overpressure_radii};
pub use casualties::{CasualtyEstimate, CasualtyModel, ZoneEstimate, estimate_casualties};
pub use crater::{CraterDimensions, crater_dimensions};
pub use damage::{DamageClass, DamageRadii, classify, damage_radii};
pub use energy::energy_from_physical_parameters;
pub use hazard::{
    BackgroundFrequency, FrequencyConsistency, HazardBand, HazardRating, RiskEntry,
    frequency_consistency, palermo_leaderboard, palermo_scale,
};

use bevy::prelude::*;

use crate::types::JOULES_PER_MEGATON;

/// Density assumed for a NEO whose composition is unknown (stony), kg/m³.
pub const DEFAULT_DENSITY: f64 = 3000.0;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImpactError {
    #[error("invalid {quantity}: {value} (must be finite and positive)")]
    NotPositive { quantity: &'static str, value: f64 },

    #[error("invalid {quantity}: {value} (must be finite and non-negative)")]
    Negative { quantity: &'static str, value: f64 },

    #[error("invalid {quantity}: {value} (must be finite)")]
    NotFinite { quantity: &'static str, value: f64 },

    #[error("impact probability {0} outside (0, 1]")]
    ProbabilityOutOfRange(f64),

    #[error("damage radii not nested: severe {severe} km, moderate {moderate} km, light {light} km")]
    RadiiNotNested { severe: f64, moderate: f64, light: f64 },
}

pub(crate) fn positive(quantity: &'static str, value: f64) -> Result<f64, ImpactError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ImpactError::NotPositive { quantity, value })
    }
}

pub(crate) fn finite(quantity: &'static str, value: f64) -> Result<f64, ImpactError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ImpactError::NotFinite { quantity, value })
    }
}

pub(crate) fn non_negative(quantity: &'static str, value: f64) -> Result<f64, ImpactError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ImpactError::Negative { quantity, value })
    }
}

/// Physical description of an impactor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactParameters {
    diameter_m: f64,
    density: f64,
    speed: f64,
}

impl ImpactParameters {
    /// # Arguments
    /// * `diameter_m` - Impactor diameter in meters
    /// * `density` - Bulk density in kg/m³
    /// * `speed` - Impact speed in m/s
    pub fn new(diameter_m: f64, density: f64, speed: f64) -> Result<Self, ImpactError> {
        Ok(Self {
            diameter_m: positive("diameter", diameter_m)?,
            density: positive("density", density)?,
            speed: positive("speed", speed)?,
        })
    }

    /// Build parameters from catalog units (km, km/s). Density defaults to
    /// [`DEFAULT_DENSITY`] when unknown.
    pub fn from_neo(
        diameter_km: f64,
        velocity_km_s: f64,
        density: Option<f64>,
    ) -> Result<Self, ImpactError> {
        Self::new(
            diameter_km * 1000.0,
            density.unwrap_or(DEFAULT_DENSITY),
            velocity_km_s * 1000.0,
        )
    }

    pub fn diameter_m(&self) -> f64 {
        self.diameter_m
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Mass of the equivalent sphere in kg.
    pub fn mass(&self) -> Result<f64, ImpactError> {
        finite("mass", energy::sphere_mass(self.diameter_m, self.density))
    }

    /// Kinetic energy in joules.
    pub fn energy(&self) -> Result<f64, ImpactError> {
        energy_from_physical_parameters(self.diameter_m, self.density, self.speed)
    }
}

/// Settings for casualty estimation.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct CasualtySettings {
    /// People per km²
    pub population_density: f64,
    pub model: CasualtyModel,
}

impl Default for CasualtySettings {
    fn default() -> Self {
        Self {
            population_density: casualties::DEFAULT_POPULATION_DENSITY,
            model: CasualtyModel::default(),
        }
    }
}

/// Full read-only result of an impact query.
///
/// The damage class is not stored; [`ImpactAssessment::classification`] derives it
/// from the radii every time.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactAssessment {
    pub parameters: ImpactParameters,
    pub energy_joules: f64,
    pub radii: DamageRadii,
    pub crater: CraterDimensions,
    pub casualties: CasualtyEstimate,
}

impl ImpactAssessment {
    pub fn energy_megatons(&self) -> f64 {
        self.energy_joules / JOULES_PER_MEGATON
    }

    pub fn classification(&self) -> DamageClass {
        self.radii.classify()
    }

    /// Hazard rating using this impact's energy for the background frequency.
    pub fn hazard(
        &self,
        impact_probability: f64,
        years_to_impact: f64,
    ) -> Result<HazardRating, ImpactError> {
        HazardRating::assess(
            impact_probability,
            years_to_impact,
            BackgroundFrequency::FromEnergyMt(self.energy_megatons()),
        )
    }
}

/// Energy, damage radii, crater and casualties for one impactor.
pub fn assess(
    parameters: &ImpactParameters,
    settings: &CasualtySettings,
) -> Result<ImpactAssessment, ImpactError> {
    let energy_joules = parameters.energy()?;
    let radii = damage_radii(energy_joules)?;
    let crater = crater_dimensions(energy_joules)?;
    let casualties = estimate_casualties(&radii, settings.population_density, settings.model)?;

    debug!(
        "Impact assessment: {:.3e} J, severe radius {:.2} km, {:?}",
        energy_joules,
        radii.severe_km(),
        radii.classify()
    );

    Ok(ImpactAssessment {
        parameters: *parameters,
        energy_joules,
        radii,
        crater,
        casualties,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parameters_reject_bad_input() {
        assert!(ImpactParameters::new(100.0, 3000.0, 20000.0).is_ok());
        assert_eq!(
            ImpactParameters::new(0.0, 3000.0, 20000.0),
            Err(ImpactError::NotPositive {
                quantity: "diameter",
                value: 0.0
            })
        );
        assert!(ImpactParameters::new(100.0, -1.0, 20000.0).is_err());
        assert!(ImpactParameters::new(100.0, 3000.0, f64::NAN).is_err());
        assert!(ImpactParameters::new(f64::INFINITY, 3000.0, 1.0).is_err());
    }

    #[test]
    fn test_from_neo_units_and_default_density() {
        let p = ImpactParameters::from_neo(0.5, 20.0, None).unwrap();
        assert_eq!(p.diameter_m(), 500.0);
        assert_eq!(p.speed(), 20000.0);
        assert_eq!(p.density(), DEFAULT_DENSITY);

        let p = ImpactParameters::from_neo(0.5, 20.0, Some(7800.0)).unwrap();
        assert_eq!(p.density(), 7800.0);
    }

    #[test]
    fn test_assess_combines_all_models() {
        // 500 m stony body at 20 km/s
        let params = ImpactParameters::from_neo(0.5, 20.0, None).unwrap();
        let a = assess(&params, &CasualtySettings::default()).unwrap();

        assert_relative_eq!(a.energy_joules, params.energy().unwrap(), max_relative = 1e-12);
        assert_relative_eq!(a.energy_megatons(), 9385.73, max_relative = 1e-4);
        assert_eq!(a.classification(), DamageClass::Light);
        assert!(a.crater.diameter_m > 0.0);
        assert!(a.casualties.total_casualties() > 0.0);
    }

    #[test]
    fn test_huge_impactor_overflows_to_error() {
        // Every input is finite but d³ overflows
        let params = ImpactParameters::new(1e110, 3000.0, 20000.0).unwrap();
        let overflow = |q: &'static str| {
            move |e: ImpactError| matches!(e, ImpactError::NotFinite { quantity, .. } if quantity == q)
        };
        assert!(params.mass().is_err_and(overflow("mass")));
        assert!(params.energy().is_err_and(overflow("energy")));
        assert!(assess(&params, &CasualtySettings::default()).is_err_and(overflow("energy")));
    }

    #[test]
    fn test_assessment_hazard_uses_energy() {
        let params = ImpactParameters::new(100.0, 3000.0, 20000.0).unwrap();
        let a = assess(&params, &CasualtySettings::default()).unwrap();
        let rating = a.hazard(1e-4, 10.0).unwrap();
        let fb = hazard::background_frequency_from_energy(a.energy_megatons()).unwrap();
        assert_relative_eq!(rating.background_frequency, fb);
    }
}
