//! Ephemeris module for computing body positions from orbital elements.
//!
//! Runtime behavior:
//! - Bodies are ingested from flat records into a [`BodyCatalog`].
//! - A body with ill-formed elements is rejected on its own; the rest of the
//!   catalog keeps propagating.
//!
//! Coordinate frame:
//! - 3D heliocentric (central mass at origin), J2000 ecliptic, render units of the
//!   active scale strategy.

pub mod data;
pub mod elements;
pub mod kepler;
pub mod propagator;

#[cfg(test)]
mod proptest_ephemeris;

pub use data::{PlanetId, planet_record, planet_records, sample_neo_records};
pub use elements::{BodyRecord, ElementsError, MeanAnomalyAnchor, OrbitalElements, kepler_period_days};
pub use kepler::{KeplerSolution, KeplerSolver};
pub use propagator::{OrbitState, PropagationError, Propagator, orbit_path, position, spin_angle, spin_delta};

use bevy::prelude::*;

use crate::render::scaling::ScaleModel;

/// A body accepted into the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogBody {
    pub designation: String,
    pub elements: OrbitalElements,
    /// Physical diameter in km, when known
    pub diameter_km: Option<f64>,
    /// Sidereal rotation period in hours, when known
    pub rotation_period_hours: Option<f64>,
}

impl CatalogBody {
    pub fn from_record(record: &BodyRecord) -> Result<Self, ElementsError> {
        let elements = OrbitalElements::try_from(record)?;
        if let Some(d) = record.diameter_km
            && (!d.is_finite() || d <= 0.0)
        {
            return Err(ElementsError::InvalidDiameter(d));
        }
        Ok(Self {
            designation: record.designation.clone(),
            elements,
            diameter_km: record.diameter_km,
            rotation_period_hours: record.rotation_period_hours,
        })
    }
}

/// Set of bodies to propagate, plus the records that were rejected.
#[derive(Resource, Clone, Debug, Default)]
pub struct BodyCatalog {
    bodies: Vec<CatalogBody>,
    rejected: Vec<(String, ElementsError)>,
}

impl BodyCatalog {
    /// Build a catalog from records, keeping every valid body.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a BodyRecord>) -> Self {
        let mut catalog = Self::default();
        for record in records {
            // Rejections are recorded inside `insert`
            let _ = catalog.insert(record);
        }
        info!(
            "Body catalog loaded: {} bodies, {} rejected",
            catalog.bodies.len(),
            catalog.rejected.len()
        );
        catalog
    }

    /// Add one record. A rejected record is remembered and logged.
    pub fn insert(&mut self, record: &BodyRecord) -> Result<(), ElementsError> {
        match CatalogBody::from_record(record) {
            Ok(body) => {
                self.bodies.push(body);
                Ok(())
            }
            Err(err) => {
                warn!("Rejecting elements for {}: {}", record.designation, err);
                self.rejected.push((record.designation.clone(), err.clone()));
                Err(err)
            }
        }
    }

    pub fn bodies(&self) -> &[CatalogBody] {
        &self.bodies
    }

    pub fn rejected(&self) -> &[(String, ElementsError)] {
        &self.rejected
    }

    pub fn get(&self, designation: &str) -> Option<&CatalogBody> {
        self.bodies.iter().find(|b| b.designation == designation)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Propagate every body to `days` since J2000 under one scale snapshot.
    pub fn propagate_all<'a>(
        &'a self,
        propagator: &Propagator,
        days: f64,
        scale: &impl ScaleModel,
    ) -> Vec<(&'a str, OrbitState)> {
        self.bodies
            .iter()
            .map(|body| {
                (
                    body.designation.as_str(),
                    propagator.position(&body.elements, days, scale),
                )
            })
            .collect()
    }

    /// Propagate every body, reporting solver divergence per body.
    pub fn propagate_checked<'a>(
        &'a self,
        propagator: &Propagator,
        days: f64,
        scale: &impl ScaleModel,
        tolerance: f64,
    ) -> Vec<(&'a str, Result<OrbitState, PropagationError>)> {
        self.bodies
            .iter()
            .map(|body| {
                let result = propagator.position_checked(&body.elements, days, scale, tolerance);
                if let Err(err) = &result {
                    warn!("{}: {}", body.designation, err);
                }
                (body.designation.as_str(), result)
            })
            .collect()
    }
}
