//! Orrery - headless driver
//!
//! Loads the planet presets and sample NEOs, runs the frame loop with a fixed
//! time step, switches scale strategy once and logs where everything ended up,
//! followed by a sample impact assessment.

use std::time::Duration;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use orrery::OrreryPlugin;
use orrery::ephemeris::{BodyCatalog, planet_records, sample_neo_records};
use orrery::impact::{
    CasualtySettings, ImpactParameters, RiskEntry, assess, frequency_consistency,
    palermo_leaderboard,
};
use orrery::render::scaling::{ScaleContext, ScaleStrategy};
use orrery::render::{OrbitingBody, ScaledGeometry, ScaledPosition, SelectScale};
use orrery::time::ClockContext;
use orrery::types::j2000_seconds_to_date_string;

/// Real seconds per frame.
const FRAME_SECONDS: f64 = 1.0 / 60.0;
/// Frames run under each scale strategy.
const FRAMES_PER_PHASE: usize = 600;

fn main() {
    let records: Vec<_> = planet_records()
        .into_iter()
        .chain(sample_neo_records())
        .collect();

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            FRAME_SECONDS,
        )))
        .insert_resource(BodyCatalog::from_records(&records))
        .add_plugins(OrreryPlugin::default());

    run_frames(&mut app, FRAMES_PER_PHASE);
    log_scene(app.world_mut());

    app.world_mut().write_message(SelectScale(ScaleStrategy::True));
    run_frames(&mut app, FRAMES_PER_PHASE);
    log_scene(app.world_mut());

    let settings = *app.world().resource::<CasualtySettings>();
    if let Err(err) = log_sample_impact(&settings) {
        error!("Sample impact failed: {}", err);
    }
}

fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

fn log_scene(world: &mut World) {
    let clock = world.resource::<ClockContext>();
    let scale = world.resource::<ScaleContext>();
    info!(
        "{} ({:.1} days since J2000), {} scale",
        j2000_seconds_to_date_string(clock.seconds()),
        clock.days(),
        scale.active().name()
    );

    let mut query = world.query::<(&OrbitingBody, &ScaledGeometry, &ScaledPosition)>();
    for (body, geometry, position) in query.iter(world) {
        info!(
            "  {:<14} r = {:>10.3}  a = {:>10.3}  ({:.3}, {:.3}, {:.3})",
            body.designation,
            position.0.length(),
            geometry.orbit.semi_major,
            position.0.x,
            position.0.y,
            position.0.z
        );
    }
}

fn log_sample_impact(settings: &CasualtySettings) -> Result<(), orrery::impact::ImpactError> {
    // Apophis-sized stony body at a typical Earth-crossing speed
    let params = ImpactParameters::from_neo(0.37, 12.6, None)?;
    let assessment = assess(&params, settings)?;
    info!(
        "Impact: {:.1} Mt, {:?} damage, radii {:.2}/{:.2}/{:.2} km, crater {:.2} km, {:.0} casualties",
        assessment.energy_megatons(),
        assessment.classification(),
        assessment.radii.severe_km(),
        assessment.radii.moderate_km(),
        assessment.radii.light_km(),
        assessment.crater.diameter_km(),
        assessment.casualties.total_casualties()
    );

    let rating = assessment.hazard(2.7e-6, 30.0)?;
    info!(
        "Palermo Scale {:.2} ({:?}), background {:.3e}/yr",
        rating.palermo,
        rating.band(),
        rating.background_frequency
    );

    let consistency = frequency_consistency(&params)?;
    debug!(
        "Background frequency by diameter {:.3e}/yr, by energy {:.3e}/yr",
        consistency.from_diameter, consistency.from_energy
    );

    let entries = [
        RiskEntry {
            designation: "hypothetical A".into(),
            impact_probability: 1.0e-4,
            years_to_impact: 25.0,
            energy_mt: 80.0,
        },
        RiskEntry {
            designation: "hypothetical B".into(),
            impact_probability: 3.0e-7,
            years_to_impact: 60.0,
            energy_mt: 2500.0,
        },
        RiskEntry {
            designation: "hypothetical C".into(),
            impact_probability: 5.0e-3,
            years_to_impact: 8.0,
            energy_mt: 0.4,
        },
    ];
    for (rank, (entry, rating)) in palermo_leaderboard(&entries, 3).iter().enumerate() {
        info!("  #{} {} PS {:.2}", rank + 1, entry.designation, rating.palermo);
    }
    Ok(())
}
