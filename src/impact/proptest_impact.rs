//! Property-based tests for the impact models using proptest.

use proptest::prelude::*;

use super::damage::damage_radii;
use super::energy::energy_from_physical_parameters;
use super::{CasualtyModel, estimate_casualties};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Energy and every damage radius grow with each input on its own.
    #[test]
    fn prop_energy_and_radii_monotonic(
        diameter in 1.0f64..5000.0,
        density in 500.0f64..8000.0,
        speed in 5000.0f64..70000.0,
        factor in 1.01f64..3.0,
        which in 0usize..3,
    ) {
        let mut bigger = [diameter, density, speed];
        bigger[which] *= factor;

        let e0 = energy_from_physical_parameters(diameter, density, speed).unwrap();
        let e1 = energy_from_physical_parameters(bigger[0], bigger[1], bigger[2]).unwrap();
        prop_assert!(e1 > e0, "energy not increasing in input {}: {} -> {}", which, e0, e1);

        let r0 = damage_radii(e0).unwrap().as_array();
        let r1 = damage_radii(e1).unwrap().as_array();
        for k in 0..3 {
            prop_assert!(r1[k] > r0[k], "radius {} not increasing: {} -> {}", k, r0[k], r1[k]);
        }
    }

    /// Damage zones stay nested for any energy.
    #[test]
    fn prop_radii_nested(log_energy in 0.0f64..26.0) {
        let radii = damage_radii(10f64.powf(log_energy)).unwrap();
        prop_assert!(radii.severe_km() <= radii.moderate_km());
        prop_assert!(radii.moderate_km() <= radii.light_km());
    }

    /// Rings never hold more people than full discs.
    #[test]
    fn prop_annulus_bounded_by_concentric(
        log_energy in 10.0f64..24.0,
        population in 0.0f64..20000.0,
    ) {
        let radii = damage_radii(10f64.powf(log_energy)).unwrap();
        let concentric = estimate_casualties(&radii, population, CasualtyModel::Concentric).unwrap();
        let annulus = estimate_casualties(&radii, population, CasualtyModel::Annulus).unwrap();
        prop_assert!(annulus.total_casualties() <= concentric.total_casualties() * (1.0 + 1e-12));
        for zone in annulus.zones() {
            prop_assert!(zone.area_km2 >= 0.0);
        }
    }
}
