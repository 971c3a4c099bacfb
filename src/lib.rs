//! Orrery - Keplerian propagation and NEO impact physics
//!
//! Two independent engines behind a thin Bevy layer:
//! - [`ephemeris`]: closed-form two-body positions from classical orbital elements
//! - [`impact`]: energy, damage radii, crater, casualties and Palermo Scale rating
//!
//! The [`render`] and [`time`] modules own the scene state (active scale strategy,
//! simulated clock) and drive the propagator once per frame.

pub mod ephemeris;
pub mod impact;
pub mod render;
pub mod time;
pub mod types;

#[cfg(test)]
pub mod test_utils;

use bevy::prelude::*;

use crate::ephemeris::{KeplerSolver, Propagator};
use crate::impact::CasualtySettings;
use crate::render::ScenePlugin;
use crate::render::scaling::{ScaleContext, ScaleStrategy};
use crate::time::{ClockContext, ClockPlugin};

/// Bundles the clock, the scene systems and their settings.
///
/// Every field has a default; override only what differs.
#[derive(Clone, Debug, Default)]
pub struct OrreryPlugin {
    pub clock: ClockContext,
    pub scale: ScaleStrategy,
    pub solver: KeplerSolver,
    pub casualties: CasualtySettings,
}

impl Plugin for OrreryPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.clock.clone())
            .insert_resource(ScaleContext::new(self.scale))
            .insert_resource(Propagator::new(self.solver))
            .insert_resource(self.casualties)
            .add_plugins((ClockPlugin, ScenePlugin));
    }
}
