//! Orbital element presets (J2000 mean elements).
//! Source: JPL "Keplerian Elements for Approximate Positions of the Major Planets"
//! (Standish), 1800–2050 AD table; physical data from the NASA planetary fact sheet.

use super::elements::BodyRecord;

/// Identifier for the preset planets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanetId {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl PlanetId {
    pub const ALL: &'static [PlanetId] = &[
        PlanetId::Mercury,
        PlanetId::Venus,
        PlanetId::Earth,
        PlanetId::Mars,
        PlanetId::Jupiter,
        PlanetId::Saturn,
        PlanetId::Uranus,
        PlanetId::Neptune,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            PlanetId::Mercury => "Mercury",
            PlanetId::Venus => "Venus",
            PlanetId::Earth => "Earth",
            PlanetId::Mars => "Mars",
            PlanetId::Jupiter => "Jupiter",
            PlanetId::Saturn => "Saturn",
            PlanetId::Uranus => "Uranus",
            PlanetId::Neptune => "Neptune",
        }
    }
}

/// (a AU, e, i°, L°, ϖ°, Ω°, mean diameter km, sidereal rotation h)
type PlanetRow = (f64, f64, f64, f64, f64, f64, f64, f64);

#[rustfmt::skip]
fn planet_row(id: PlanetId) -> PlanetRow {
    match id {
        PlanetId::Mercury => (0.38709927, 0.20563593, 7.00497902, 252.25032350, 77.45779628, 48.33076593, 4879.0, 1407.6),
        PlanetId::Venus => (0.72333566, 0.00677672, 3.39467605, 181.97909950, 131.60246718, 76.67984255, 12104.0, -5832.5),
        // Earth-Moon barycenter
        PlanetId::Earth => (1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0, 12742.0, 23.9345),
        PlanetId::Mars => (1.52371034, 0.09339410, 1.84969142, -4.55343205, -23.94362959, 49.55953891, 6779.0, 24.6229),
        PlanetId::Jupiter => (5.20288700, 0.04838624, 1.30439695, 34.39644051, 14.72847983, 100.47390909, 139820.0, 9.9250),
        PlanetId::Saturn => (9.53667594, 0.05386179, 2.48599187, 49.95424423, 92.59887831, 113.66242448, 116460.0, 10.656),
        PlanetId::Uranus => (19.18916464, 0.04725744, 0.77263783, 313.23810451, 170.95427630, 74.01692503, 50724.0, -17.24),
        PlanetId::Neptune => (30.06992276, 0.00859048, 1.77004347, -55.12002969, 44.96476227, 131.78422574, 49244.0, 16.11),
    }
}

/// Flat record for a preset planet, anchored by mean longitude at J2000.
pub fn planet_record(id: PlanetId) -> BodyRecord {
    let (a, e, i, l, varpi, omega, diameter, rotation) = planet_row(id);
    BodyRecord {
        designation: id.name().to_string(),
        a,
        e,
        i,
        omega,
        varpi,
        mean_longitude: Some(l),
        diameter_km: Some(diameter),
        rotation_period_hours: Some(rotation),
        ..Default::default()
    }
}

/// All eight planets.
pub fn planet_records() -> Vec<BodyRecord> {
    PlanetId::ALL.iter().map(|&id| planet_record(id)).collect()
}

/// Representative near-Earth objects, anchored by mean anomaly at an epoch.
/// Values are rounded osculating elements, good enough for display.
pub fn sample_neo_records() -> Vec<BodyRecord> {
    vec![
        BodyRecord {
            designation: "99942 Apophis".into(),
            a: 0.9224,
            e: 0.1911,
            i: 3.339,
            omega: 203.96,
            // ω = 126.60°
            varpi: 330.56,
            m0: Some(142.85),
            epoch_jd: Some(2_459_000.5),
            diameter_km: Some(0.37),
            rotation_period_hours: Some(30.56),
            ..Default::default()
        },
        BodyRecord {
            designation: "101955 Bennu".into(),
            a: 1.1264,
            e: 0.2037,
            i: 6.035,
            omega: 2.061,
            // ω = 66.223°
            varpi: 68.284,
            m0: Some(101.70),
            epoch_jd: Some(2_455_562.5),
            diameter_km: Some(0.49),
            rotation_period_hours: Some(4.296),
            ..Default::default()
        },
        BodyRecord {
            designation: "433 Eros".into(),
            a: 1.4583,
            e: 0.2229,
            i: 10.828,
            omega: 304.30,
            // ω = 178.90°
            varpi: 123.20,
            m0: Some(310.55),
            epoch_jd: Some(2_459_600.5),
            diameter_km: Some(16.84),
            rotation_period_hours: Some(5.27),
            ..Default::default()
        },
    ]
}
