//! Classical orbital elements and their validation.
//!
//! Elements are validated once at construction; a constructed [`OrbitalElements`]
//! always describes a closed ellipse with a positive period.

use crate::types::{DAYS_PER_YEAR, julian_date_to_j2000_days};

/// Configuration errors for a single body's elements.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ElementsError {
    #[error("invalid semi-major axis {0} AU (must be finite and positive)")]
    InvalidSemiMajorAxis(f64),

    #[error("eccentricity {0} outside [0, 1); open orbits are not supported")]
    EccentricityOutOfRange(f64),

    #[error("non-finite {name}: {value}")]
    NonFiniteAngle { name: &'static str, value: f64 },

    #[error("neither mean longitude nor mean anomaly supplied")]
    MissingMeanAnomaly,

    #[error("both mean longitude and mean anomaly supplied")]
    AmbiguousMeanAnomaly,

    #[error("mean anomaly supplied without an epoch Julian date")]
    MissingEpoch,

    #[error("invalid orbital period {0} days (must be finite and positive)")]
    InvalidPeriod(f64),

    #[error("invalid diameter {0} km (must be finite and positive)")]
    InvalidDiameter(f64),
}

/// Where the mean anomaly of a body is anchored in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeanAnomalyAnchor {
    /// Mean longitude `L` at J2000, degrees. `M0 = L - ϖ`.
    MeanLongitude(f64),
    /// Mean anomaly `M0` in degrees at a reference Julian date.
    MeanAnomaly { mean_anomaly_deg: f64, epoch_jd: f64 },
}

/// Orbital period in days from Kepler's third law, normalized to a solar-mass
/// central body.
pub fn kepler_period_days(semi_major_axis_au: f64) -> f64 {
    semi_major_axis_au.powf(1.5) * DAYS_PER_YEAR
}

/// Periods so short that the mean motion overflows are rejected along with
/// non-positive ones.
fn checked_period(period_days: f64) -> Result<f64, ElementsError> {
    if period_days.is_finite() && period_days > 0.0 && (360.0 / period_days).is_finite() {
        Ok(period_days)
    } else {
        Err(ElementsError::InvalidPeriod(period_days))
    }
}

/// Keplerian elements of one body. Angles in degrees, distance in AU, period in days.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    ascending_node: f64,
    perihelion_longitude: f64,
    anchor: MeanAnomalyAnchor,
    period_days: f64,
}

fn finite_angle(name: &'static str, value: f64) -> Result<f64, ElementsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ElementsError::NonFiniteAngle { name, value })
    }
}

impl OrbitalElements {
    /// Create elements, deriving the period from the semi-major axis.
    ///
    /// # Arguments
    /// * `semi_major_axis_au` - Semi-major axis in AU
    /// * `eccentricity` - Eccentricity in `[0, 1)`
    /// * `inclination_deg` - Inclination in degrees
    /// * `ascending_node_deg` - Longitude of ascending node Ω in degrees
    /// * `perihelion_longitude_deg` - Longitude of perihelion ϖ in degrees
    /// * `anchor` - Mean longitude at J2000 or mean anomaly at an epoch
    pub fn new(
        semi_major_axis_au: f64,
        eccentricity: f64,
        inclination_deg: f64,
        ascending_node_deg: f64,
        perihelion_longitude_deg: f64,
        anchor: MeanAnomalyAnchor,
    ) -> Result<Self, ElementsError> {
        if !semi_major_axis_au.is_finite() || semi_major_axis_au <= 0.0 {
            return Err(ElementsError::InvalidSemiMajorAxis(semi_major_axis_au));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(ElementsError::EccentricityOutOfRange(eccentricity));
        }
        match anchor {
            MeanAnomalyAnchor::MeanLongitude(l) => {
                finite_angle("mean longitude", l)?;
            }
            MeanAnomalyAnchor::MeanAnomaly {
                mean_anomaly_deg,
                epoch_jd,
            } => {
                finite_angle("mean anomaly", mean_anomaly_deg)?;
                finite_angle("epoch", epoch_jd)?;
            }
        }

        Ok(Self {
            semi_major_axis: semi_major_axis_au,
            eccentricity,
            inclination: finite_angle("inclination", inclination_deg)?,
            ascending_node: finite_angle("ascending node", ascending_node_deg)?,
            perihelion_longitude: finite_angle("longitude of perihelion", perihelion_longitude_deg)?,
            anchor,
            period_days: checked_period(kepler_period_days(semi_major_axis_au))?,
        })
    }

    /// Override the derived period with a supplied one.
    pub fn with_period(mut self, period_days: f64) -> Result<Self, ElementsError> {
        self.period_days = checked_period(period_days)?;
        Ok(self)
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    pub fn ascending_node(&self) -> f64 {
        self.ascending_node
    }

    pub fn perihelion_longitude(&self) -> f64 {
        self.perihelion_longitude
    }

    /// Argument of perihelion ω = ϖ − Ω, degrees.
    pub fn argument_of_perihelion(&self) -> f64 {
        self.perihelion_longitude - self.ascending_node
    }

    pub fn anchor(&self) -> MeanAnomalyAnchor {
        self.anchor
    }

    pub fn period_days(&self) -> f64 {
        self.period_days
    }

    /// Mean motion in degrees per day.
    pub fn mean_motion(&self) -> f64 {
        360.0 / self.period_days
    }

    /// Mean anomaly at the anchor epoch, degrees.
    pub fn mean_anomaly_at_epoch(&self) -> f64 {
        match self.anchor {
            MeanAnomalyAnchor::MeanLongitude(l) => l - self.perihelion_longitude,
            MeanAnomalyAnchor::MeanAnomaly {
                mean_anomaly_deg, ..
            } => mean_anomaly_deg,
        }
    }

    /// Anchor epoch in days since J2000.
    pub fn epoch_days(&self) -> f64 {
        match self.anchor {
            MeanAnomalyAnchor::MeanLongitude(_) => 0.0,
            MeanAnomalyAnchor::MeanAnomaly { epoch_jd, .. } => julian_date_to_j2000_days(epoch_jd),
        }
    }

    /// Mean anomaly in degrees, normalized to `[0, 360)`, at `days` since J2000.
    pub fn mean_anomaly_at(&self, days: f64) -> f64 {
        let elapsed = days - self.epoch_days();
        (self.mean_anomaly_at_epoch() + self.mean_motion() * elapsed).rem_euclid(360.0)
    }
}

/// Flat per-body record as delivered by a small-body database lookup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BodyRecord {
    pub designation: String,
    /// Semi-major axis, AU
    pub a: f64,
    pub e: f64,
    /// Inclination, degrees
    pub i: f64,
    /// Longitude of ascending node, degrees
    pub omega: f64,
    /// Longitude of perihelion, degrees
    pub varpi: f64,
    /// Mean longitude at J2000, degrees
    pub mean_longitude: Option<f64>,
    /// Mean anomaly at `epoch_jd`, degrees
    pub m0: Option<f64>,
    pub epoch_jd: Option<f64>,
    pub period_days: Option<f64>,
    pub diameter_km: Option<f64>,
    /// Sidereal rotation period in hours; negative for retrograde spin
    pub rotation_period_hours: Option<f64>,
}

impl TryFrom<&BodyRecord> for OrbitalElements {
    type Error = ElementsError;

    fn try_from(record: &BodyRecord) -> Result<Self, Self::Error> {
        let anchor = match (record.mean_longitude, record.m0, record.epoch_jd) {
            (Some(_), Some(_), _) => return Err(ElementsError::AmbiguousMeanAnomaly),
            (Some(l), None, _) => MeanAnomalyAnchor::MeanLongitude(l),
            (None, Some(m0), Some(epoch_jd)) => MeanAnomalyAnchor::MeanAnomaly {
                mean_anomaly_deg: m0,
                epoch_jd,
            },
            (None, Some(_), None) => return Err(ElementsError::MissingEpoch),
            (None, None, _) => return Err(ElementsError::MissingMeanAnomaly),
        };

        let elements = OrbitalElements::new(
            record.a,
            record.e,
            record.i,
            record.omega,
            record.varpi,
            anchor,
        )?;

        match record.period_days {
            Some(period) => elements.with_period(period),
            None => Ok(elements),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record() -> BodyRecord {
        BodyRecord {
            designation: "test".into(),
            a: 1.5,
            e: 0.2,
            i: 5.0,
            omega: 80.0,
            varpi: 120.0,
            mean_longitude: Some(200.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_period_from_kepler_third_law() {
        assert_relative_eq!(kepler_period_days(1.0), 365.25);
        assert_relative_eq!(kepler_period_days(4.0), 8.0 * 365.25);
    }

    #[test]
    fn test_argument_of_perihelion() {
        let el = OrbitalElements::try_from(&record()).unwrap();
        assert_relative_eq!(el.argument_of_perihelion(), 40.0);
    }

    #[test]
    fn test_mean_longitude_anchor() {
        let el = OrbitalElements::try_from(&record()).unwrap();
        assert_relative_eq!(el.mean_anomaly_at_epoch(), 80.0);
        assert_relative_eq!(el.mean_anomaly_at(0.0), 80.0);
        assert_eq!(el.epoch_days(), 0.0);
    }

    #[test]
    fn test_mean_anomaly_wraps() {
        let el = OrbitalElements::new(1.0, 0.0, 0.0, 0.0, 0.0, MeanAnomalyAnchor::MeanLongitude(350.0))
            .unwrap();
        // A quarter of a period later the mean anomaly has advanced by 90°
        let m = el.mean_anomaly_at(el.period_days() / 4.0);
        assert_relative_eq!(m, 80.0, epsilon = 1e-9);
        // Negative times wrap into [0, 360) too
        let m = el.mean_anomaly_at(-el.period_days() / 4.0);
        assert_relative_eq!(m, 260.0, epsilon = 1e-9);
    }

    #[test]
    fn test_epoch_anchor() {
        let rec = BodyRecord {
            mean_longitude: None,
            m0: Some(10.0),
            epoch_jd: Some(2_451_555.0),
            ..record()
        };
        let el = OrbitalElements::try_from(&rec).unwrap();
        assert_relative_eq!(el.epoch_days(), 10.0);
        assert_relative_eq!(el.mean_anomaly_at(10.0), 10.0);
    }

    #[test]
    fn test_supplied_period_wins() {
        let rec = BodyRecord {
            period_days: Some(500.0),
            ..record()
        };
        let el = OrbitalElements::try_from(&rec).unwrap();
        assert_eq!(el.period_days(), 500.0);
        assert_relative_eq!(el.mean_motion(), 0.72);
    }

    #[test]
    fn test_rejects_open_orbits() {
        for e in [1.0, 1.5, -0.1, f64::NAN] {
            let rec = BodyRecord { e, ..record() };
            assert!(matches!(
                OrbitalElements::try_from(&rec),
                Err(ElementsError::EccentricityOutOfRange(_))
            ));
        }
    }

    #[test]
    fn test_rejects_bad_axis_and_period() {
        let rec = BodyRecord { a: 0.0, ..record() };
        assert_eq!(
            OrbitalElements::try_from(&rec),
            Err(ElementsError::InvalidSemiMajorAxis(0.0))
        );

        let rec = BodyRecord {
            period_days: Some(0.0),
            ..record()
        };
        assert_eq!(
            OrbitalElements::try_from(&rec),
            Err(ElementsError::InvalidPeriod(0.0))
        );
    }

    #[test]
    fn test_period_must_give_finite_mean_motion() {
        // a^1.5 underflows to zero
        let tiny = OrbitalElements::new(
            1e-250,
            0.0,
            0.0,
            0.0,
            0.0,
            MeanAnomalyAnchor::MeanLongitude(0.0),
        );
        assert_eq!(tiny, Err(ElementsError::InvalidPeriod(0.0)));

        let el = OrbitalElements::try_from(&record()).unwrap();
        assert!(matches!(
            el.with_period(1e-320),
            Err(ElementsError::InvalidPeriod(_))
        ));
        let short = el.with_period(1e-300).unwrap();
        assert!(short.mean_motion().is_finite());
    }

    #[test]
    fn test_anchor_errors() {
        let rec = BodyRecord {
            mean_longitude: None,
            ..record()
        };
        assert_eq!(
            OrbitalElements::try_from(&rec),
            Err(ElementsError::MissingMeanAnomaly)
        );

        let rec = BodyRecord {
            mean_longitude: None,
            m0: Some(1.0),
            ..record()
        };
        assert_eq!(OrbitalElements::try_from(&rec), Err(ElementsError::MissingEpoch));

        let rec = BodyRecord {
            m0: Some(1.0),
            epoch_jd: Some(2_451_545.0),
            ..record()
        };
        assert_eq!(
            OrbitalElements::try_from(&rec),
            Err(ElementsError::AmbiguousMeanAnomaly)
        );
    }

    #[test]
    fn test_rejects_non_finite_angle() {
        let rec = BodyRecord {
            i: f64::INFINITY,
            ..record()
        };
        assert!(matches!(
            OrbitalElements::try_from(&rec),
            Err(ElementsError::NonFiniteAngle { name: "inclination", .. })
        ));
    }
}
