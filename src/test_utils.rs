//! Test utilities shared by unit tests.
//!
//! Provides element fixtures and a headless Bevy app.

/// Fixtures for creating test orbits.
pub mod fixtures {
    use crate::ephemeris::{MeanAnomalyAnchor, OrbitalElements, PlanetId, planet_record};

    /// Earth-Moon barycenter J2000 mean elements.
    pub fn earth_elements() -> OrbitalElements {
        OrbitalElements::try_from(&planet_record(PlanetId::Earth)).expect("Earth preset is valid")
    }

    /// Inclined ellipse with the given size and shape.
    ///
    /// i = 10°, Ω = 30°, ϖ = 60°, L = 80°, so the mean anomaly is 20° at J2000.
    pub fn eccentric_elements(a: f64, e: f64) -> OrbitalElements {
        OrbitalElements::new(a, e, 10.0, 30.0, 60.0, MeanAnomalyAnchor::MeanLongitude(80.0))
            .expect("fixture elements are valid")
    }
}

/// Bevy test helpers.
pub mod bevy_test {
    use bevy::prelude::*;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    /// Create a minimal Bevy app for headless testing.
    ///
    /// Every `update()` advances real time by exactly `frame_seconds`.
    pub fn headless_app(frame_seconds: f64) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            frame_seconds,
        )));
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DAYS_PER_YEAR;

    #[test]
    fn test_eccentric_fixture_anchor() {
        let el = fixtures::eccentric_elements(2.0, 0.3);
        assert!((el.mean_anomaly_at(0.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_earth_fixture_period() {
        let el = fixtures::earth_elements();
        assert!((el.period_days() - DAYS_PER_YEAR).abs() < 0.01);
    }
}
