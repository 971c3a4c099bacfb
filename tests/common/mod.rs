//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use orrery::OrreryPlugin;
use orrery::ephemeris::{BodyCatalog, BodyRecord, planet_records, sample_neo_records};

/// Real seconds per test frame.
pub const FRAME_SECONDS: f64 = 0.05;

/// Planet presets followed by the sample NEOs.
pub fn all_records() -> Vec<BodyRecord> {
    planet_records()
        .into_iter()
        .chain(sample_neo_records())
        .collect()
}

/// Headless app with the full orrery stack and a catalog of `records`.
///
/// Each `update()` after the first advances real time by [`FRAME_SECONDS`].
pub fn orrery_app(records: &[BodyRecord], plugin: OrreryPlugin) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            FRAME_SECONDS,
        )))
        .insert_resource(BodyCatalog::from_records(records))
        .add_plugins(plugin);
    app
}

pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

/// Values of one component for every entity, keyed by designation.
pub fn collect<C: Component + Clone>(app: &mut App) -> Vec<(String, C)> {
    let world = app.world_mut();
    let mut query = world.query::<(&orrery::render::OrbitingBody, &C)>();
    let mut out: Vec<_> = query
        .iter(world)
        .map(|(body, c)| (body.designation.clone(), c.clone()))
        .collect();
    out.sort_by(|a, b| a.0.cmp(&b.0));
    out
}
