//! Property-based tests for ephemeris computations using proptest.
//!
//! These tests verify that orbital computations maintain expected properties
//! across a wide range of inputs.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::elements::{MeanAnomalyAnchor, OrbitalElements};
use super::kepler::{GUARANTEED_RESIDUAL, KeplerSolver, MAX_GUARANTEED_ECCENTRICITY};
use super::propagator::position;
use crate::render::scaling::{ScaleModel, ScaleStrategy};

fn elements(a: f64, e: f64, i: f64, node: f64, varpi: f64, l: f64) -> OrbitalElements {
    OrbitalElements::new(a, e, i, node, varpi, MeanAnomalyAnchor::MeanLongitude(l))
        .expect("generated elements are valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The default fixed budget converges for every mean anomaly below the
    /// guaranteed eccentricity.
    #[test]
    fn prop_kepler_solver_convergence(
        mean_anomaly_normalized in 0.0f64..1.0,
        eccentricity in 0.0f64..MAX_GUARANTEED_ECCENTRICITY,
    ) {
        let mean_anomaly = mean_anomaly_normalized * TAU;
        let solution = KeplerSolver::default().solve(mean_anomaly, eccentricity);

        let m_check = solution.eccentric_anomaly - eccentricity * solution.eccentric_anomaly.sin();
        let error = (m_check - mean_anomaly.rem_euclid(TAU)).abs();
        prop_assert!(
            error < GUARANTEED_RESIDUAL,
            "Kepler solver failed: M={}, e={}, E={}, error={}",
            mean_anomaly, eccentricity, solution.eccentric_anomaly, error
        );
        prop_assert!(solution.converged(GUARANTEED_RESIDUAL));
    }

    /// Sampling one full period later returns to the starting position.
    #[test]
    fn prop_orbit_is_closed(
        a in 0.3f64..40.0,
        e in 0.0f64..0.9,
        i in 0.0f64..180.0,
        node in 0.0f64..360.0,
        varpi in 0.0f64..360.0,
        l in 0.0f64..360.0,
        start_days in -20000.0f64..20000.0,
    ) {
        let el = elements(a, e, i, node, varpi, l);
        for scale in [ScaleStrategy::Enhanced, ScaleStrategy::True] {
            let p0 = position(&el, start_days, &scale).position;
            let p1 = position(&el, start_days + el.period_days(), &scale).position;
            let tolerance = 1e-6 * scale.distance(a).abs().max(1.0);
            prop_assert!(
                (p1 - p0).length() < tolerance,
                "orbit not closed under {:?}: {:?} vs {:?}",
                scale, p0, p1
            );
        }
    }

    /// Scale changes size, never eccentricity.
    #[test]
    fn prop_scale_preserves_shape(
        a in 0.3f64..40.0,
        e in 0.0f64..0.9,
        i in 0.0f64..180.0,
        node in 0.0f64..360.0,
        varpi in 0.0f64..360.0,
    ) {
        // Mean longitude = ϖ puts the body at perihelion at J2000
        let el = elements(a, e, i, node, varpi, varpi);
        let half_period = el.period_days() / 2.0;
        let expected = (1.0 + e) / (1.0 - e);

        for scale in [ScaleStrategy::Enhanced, ScaleStrategy::True] {
            let perihelion = position(&el, 0.0, &scale).position.length();
            let aphelion = position(&el, half_period, &scale).position.length();
            let ratio = aphelion / perihelion;
            prop_assert!(
                ((ratio - expected) / expected).abs() < 1e-9,
                "{:?}: ratio {} expected {}",
                scale, ratio, expected
            );
        }
    }

    /// The propagated point lies on the ellipse for every valid input.
    #[test]
    fn prop_position_on_ellipse(
        a in 0.3f64..40.0,
        e in 0.0f64..0.95,
        l in 0.0f64..360.0,
        days in -50000.0f64..50000.0,
    ) {
        let el = elements(a, e, 12.0, 40.0, 75.0, l);
        let scale = ScaleStrategy::True;
        let state = position(&el, days, &scale);

        // Focal-distance form: r = p / (1 + e cos ν)
        let a_s = scale.distance(a);
        let p = a_s * (1.0 - e * e);
        let expected = p / (1.0 + e * state.true_anomaly.cos());
        let r = state.position.length();
        prop_assert!(((r - expected) / expected).abs() < 1e-6, "r={} expected={}", r, expected);
    }
}
