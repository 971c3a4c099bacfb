//! Scene layer: scale strategies and the systems that place bodies in render space.

pub mod scaling;
pub mod sync;

use bevy::prelude::*;

use crate::ephemeris::{BodyCatalog, Propagator};

use self::scaling::ScaleContext;
use self::sync::{apply_scale_requests, propagate_bodies, rescale_bodies, spawn_catalog, spin_bodies};

pub use self::scaling::{ScaleModel, ScaleStrategy, ScaledOrbit};
pub use self::sync::{OrbitingBody, ScaledGeometry, ScaledPosition, SelectScale, SpinAngle};

/// Per-frame ordering: the clock moves first, then a pending scale switch is
/// applied, then positions are evaluated against both.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrrerySet {
    Clock,
    Rescale,
    Propagate,
}

/// Plugin spawning the catalog and keeping scaled geometry and positions current.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScaleContext>()
            .init_resource::<Propagator>()
            .init_resource::<BodyCatalog>()
            .add_message::<SelectScale>()
            .configure_sets(
                Update,
                (OrrerySet::Clock, OrrerySet::Rescale, OrrerySet::Propagate).chain(),
            )
            .add_systems(Startup, spawn_catalog)
            .add_systems(
                Update,
                (
                    (apply_scale_requests, rescale_bodies)
                        .chain()
                        .in_set(OrrerySet::Rescale),
                    (propagate_bodies, spin_bodies)
                        .chain()
                        .in_set(OrrerySet::Propagate),
                ),
            );
    }
}
