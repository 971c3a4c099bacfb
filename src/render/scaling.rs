//! Scale strategies mapping physical distance and size to render units.
//!
//! Physical values (AU, km) are the source of truth. Scaled values are always
//! derived from them and are recomputed whenever the active strategy changes.

use bevy::prelude::*;

use crate::ephemeris::OrbitalElements;
use crate::types::AU_KM;

/// Kilometres per render unit for the true (linear) scale.
pub const TRUE_SCALE_KM_PER_UNIT: f64 = 1.0e6;

/// A pure mapping from physical quantities to render units.
pub trait ScaleModel {
    /// Map a heliocentric distance in AU to render units.
    fn distance(&self, au: f64) -> f64;

    /// Map a physical size in km to render units.
    fn size(&self, km: f64) -> f64;
}

/// The two interchangeable scale strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleStrategy {
    /// Logarithmic scale that keeps inner-system bodies and small NEOs apart.
    /// Monotonic in true distance and size, otherwise without physical meaning.
    #[default]
    Enhanced,
    /// Linear scale, [`TRUE_SCALE_KM_PER_UNIT`] km per unit for both distance and size.
    True,
}

impl ScaleStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            ScaleStrategy::Enhanced => "enhanced",
            ScaleStrategy::True => "true",
        }
    }
}

impl ScaleModel for ScaleStrategy {
    fn distance(&self, au: f64) -> f64 {
        let km = au * AU_KM;
        match self {
            ScaleStrategy::Enhanced => {
                (km / 1e6).log10() * au.sqrt() * 40.0 + 10.0 * (km / 1e4).log10().cbrt()
            }
            ScaleStrategy::True => km / TRUE_SCALE_KM_PER_UNIT,
        }
    }

    fn size(&self, km: f64) -> f64 {
        match self {
            ScaleStrategy::Enhanced => km.log2(),
            ScaleStrategy::True => km / TRUE_SCALE_KM_PER_UNIT,
        }
    }
}

/// The active scale strategy plus a generation counter that changes on every
/// real switch.
///
/// Systems read it once per tick (see `propagate_bodies`) so a single frame never
/// mixes strategies.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleContext {
    active: ScaleStrategy,
    generation: u64,
}

impl ScaleContext {
    pub fn new(strategy: ScaleStrategy) -> Self {
        Self {
            active: strategy,
            generation: 0,
        }
    }

    /// Select a strategy. Returns `true` if this was a real switch; selecting the
    /// already-active strategy changes nothing.
    pub fn select(&mut self, strategy: ScaleStrategy) -> bool {
        if self.active == strategy {
            return false;
        }
        self.active = strategy;
        self.generation += 1;
        true
    }

    pub fn active(&self) -> ScaleStrategy {
        self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Scaled size for a physical diameter under the active strategy.
    ///
    /// On the enhanced scale this is `log2(km)`, which is negative for bodies
    /// under 1 km across (most NEOs). Callers drawing markers clamp it themselves.
    pub fn scaled_size(&self, diameter_km: f64) -> f64 {
        self.active.size(diameter_km)
    }
}

/// Scaled size of the ellipse described by a set of elements.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaledOrbit {
    pub semi_major: f64,
    pub semi_minor: f64,
    pub perihelion: f64,
    pub aphelion: f64,
}

impl ScaledOrbit {
    /// Scale only the semi-major axis; eccentricity is applied afterwards so the
    /// shape never depends on the strategy.
    pub fn new(elements: &OrbitalElements, scale: &impl ScaleModel) -> Self {
        let a = scale.distance(elements.semi_major_axis());
        let e = elements.eccentricity();
        Self {
            semi_major: a,
            semi_minor: a * (1.0 - e * e).sqrt(),
            perihelion: a * (1.0 - e),
            aphelion: a * (1.0 + e),
        }
    }
}
