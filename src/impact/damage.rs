//! Cube-root damage radii and the derived damage class.

use super::{ImpactError, non_negative};

/// Radius coefficients in m·J^{-1/3}. Strictly increasing, which keeps the
/// radii nested for every energy.
pub const SEVERE_COEFFICIENT: f64 = 1.8e-4;
pub const MODERATE_COEFFICIENT: f64 = 4.0e-4;
pub const LIGHT_COEFFICIENT: f64 = 8.0e-4;

/// Severe radius above this (km) classifies as [`DamageClass::Severe`].
pub const SEVERE_THRESHOLD_KM: f64 = 5.0;
/// Moderate radius above this (km) classifies as [`DamageClass::Moderate`].
pub const MODERATE_THRESHOLD_KM: f64 = 2.0;

/// Ordinal damage label. Always recomputed from a [`DamageRadii`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DamageClass {
    Light,
    Moderate,
    Severe,
}

/// Three concentric damage radii in km, `severe ≤ moderate ≤ light`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageRadii {
    severe_km: f64,
    moderate_km: f64,
    light_km: f64,
}

impl DamageRadii {
    /// Radii from explicit values, e.g. for threshold experiments.
    pub fn from_km(severe_km: f64, moderate_km: f64, light_km: f64) -> Result<Self, ImpactError> {
        let severe_km = non_negative("severe radius", severe_km)?;
        let moderate_km = non_negative("moderate radius", moderate_km)?;
        let light_km = non_negative("light radius", light_km)?;
        if severe_km > moderate_km || moderate_km > light_km {
            return Err(ImpactError::RadiiNotNested {
                severe: severe_km,
                moderate: moderate_km,
                light: light_km,
            });
        }
        Ok(Self {
            severe_km,
            moderate_km,
            light_km,
        })
    }

    pub fn severe_km(&self) -> f64 {
        self.severe_km
    }

    pub fn moderate_km(&self) -> f64 {
        self.moderate_km
    }

    pub fn light_km(&self) -> f64 {
        self.light_km
    }

    /// Radii ordered innermost first.
    pub fn as_array(&self) -> [f64; 3] {
        [self.severe_km, self.moderate_km, self.light_km]
    }

    pub fn classify(&self) -> DamageClass {
        classify(self)
    }
}

/// Damage radii for an impact energy in joules.
pub fn damage_radii(energy_joules: f64) -> Result<DamageRadii, ImpactError> {
    let cube_root = non_negative("energy", energy_joules)?.cbrt();
    Ok(DamageRadii {
        severe_km: SEVERE_COEFFICIENT * cube_root / 1000.0,
        moderate_km: MODERATE_COEFFICIENT * cube_root / 1000.0,
        light_km: LIGHT_COEFFICIENT * cube_root / 1000.0,
    })
}

/// Threshold ladder: severe radius first, then moderate. Values exactly on a
/// threshold fall to the lower class.
pub fn classify(radii: &DamageRadii) -> DamageClass {
    if radii.severe_km > SEVERE_THRESHOLD_KM {
        DamageClass::Severe
    } else if radii.moderate_km > MODERATE_THRESHOLD_KM {
        DamageClass::Moderate
    } else {
        DamageClass::Light
    }
}
