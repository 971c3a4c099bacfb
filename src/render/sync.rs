//! Scene components and the systems that keep them in step with the clock and
//! the active scale.
//!
//! Physical elements live on [`OrbitingBody`]; everything scaled is derived from
//! them and rewritten when the strategy switches.

use bevy::{math::DVec3, prelude::*};

use crate::ephemeris::{BodyCatalog, CatalogBody, OrbitalElements, Propagator, spin_angle};
use crate::render::scaling::{ScaleContext, ScaleStrategy, ScaledOrbit};
use crate::time::ClockContext;

/// A body following an unperturbed Keplerian ellipse.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct OrbitingBody {
    pub designation: String,
    pub elements: OrbitalElements,
    /// Physical diameter in km, when known
    pub diameter_km: Option<f64>,
    /// Sidereal rotation period in hours, when known
    pub rotation_period_hours: Option<f64>,
}

impl From<&CatalogBody> for OrbitingBody {
    fn from(body: &CatalogBody) -> Self {
        Self {
            designation: body.designation.clone(),
            elements: body.elements,
            diameter_km: body.diameter_km,
            rotation_period_hours: body.rotation_period_hours,
        }
    }
}

/// Orbit and body size under the scale strategy it was computed with.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaledGeometry {
    pub orbit: ScaledOrbit,
    /// Scaled body radius; `None` when the diameter is unknown
    pub radius: Option<f64>,
    pub strategy: ScaleStrategy,
}

impl ScaledGeometry {
    pub fn new(body: &OrbitingBody, scale: &ScaleContext) -> Self {
        let strategy = scale.active();
        Self {
            orbit: ScaledOrbit::new(&body.elements, &strategy),
            radius: body.diameter_km.map(|d| scale.scaled_size(d) / 2.0),
            strategy,
        }
    }
}

/// Scaled heliocentric position at the current simulated time.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaledPosition(pub DVec3);

/// Absolute spin angle in radians.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct SpinAngle(pub f64);

/// Request to switch the active scale strategy.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectScale(pub ScaleStrategy);

/// Spawn one entity per catalog body.
pub fn spawn_catalog(mut commands: Commands, catalog: Res<BodyCatalog>) {
    for body in catalog.bodies() {
        commands.spawn((
            OrbitingBody::from(body),
            ScaledGeometry::default(),
            ScaledPosition::default(),
            SpinAngle::default(),
            Transform::default(),
        ));
    }
    for (designation, err) in catalog.rejected() {
        warn!("Not spawning {}: {}", designation, err);
    }
    info!("Spawned {} orbiting bodies", catalog.len());
}

/// Apply scale switch requests. Selecting the active strategy again leaves the
/// resource untouched, so nothing downstream recomputes.
pub fn apply_scale_requests(mut scale: ResMut<ScaleContext>, mut requests: MessageReader<SelectScale>) {
    for SelectScale(strategy) in requests.read() {
        if scale.active() == *strategy {
            continue;
        }
        scale.select(*strategy);
        info!("Scale strategy: {}", strategy.name());
    }
}

/// Recompute scaled geometry for every body after a switch, and for bodies
/// spawned since the last run.
pub fn rescale_bodies(
    scale: Res<ScaleContext>,
    mut query: Query<(Ref<OrbitingBody>, &mut ScaledGeometry)>,
) {
    let strategy = scale.active();
    let rescale_all = scale.is_changed();
    let mut count = 0;
    for (body, mut geometry) in &mut query {
        if rescale_all || body.is_added() {
            *geometry = ScaledGeometry::new(&body, &scale);
            count += 1;
        }
    }
    if count > 0 {
        debug!("Rescaled {} bodies ({})", count, strategy.name());
    }
}

/// Move every body to its position at the current simulated time.
///
/// Time and scale are read once, so bodies evaluated on different threads
/// always share the same instant and strategy.
pub fn propagate_bodies(
    clock: Res<ClockContext>,
    scale: Res<ScaleContext>,
    propagator: Res<Propagator>,
    mut query: Query<(&OrbitingBody, &mut ScaledPosition, &mut Transform)>,
) {
    let days = clock.days();
    let strategy = scale.active();
    let propagator = *propagator;

    query
        .par_iter_mut()
        .for_each(|(body, mut position, mut transform)| {
            let state = propagator.position(&body.elements, days, &strategy);
            position.0 = state.position;
            transform.translation = state.position.as_vec3();
        });
}

/// Spin every body with a known rotation period about its local Z axis.
pub fn spin_bodies(
    clock: Res<ClockContext>,
    mut query: Query<(&OrbitingBody, &mut SpinAngle, &mut Transform)>,
) {
    let seconds = clock.seconds();
    for (body, mut spin, mut transform) in &mut query {
        let Some(period) = body.rotation_period_hours else {
            continue;
        };
        spin.0 = spin_angle(period, seconds);
        transform.rotation = Quat::from_rotation_z(spin.0 as f32);
    }
}
