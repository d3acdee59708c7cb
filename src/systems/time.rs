//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, applying `time_scale` to the provided delta.
use bevy_ecs::prelude::*;
use log::warn;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. Negative or
/// NaN deltas are treated as 0. The frame counter advances in every case.
///
/// This runs before the update schedule, so a `GameConfig::time_scale` change
/// made between ticks scales the delta only from the following tick on (see
/// [`apply_gameconfig_changes`](crate::systems::gameconfig::apply_gameconfig_changes)).
pub fn update_world_time(world: &mut World, dt: f64) {
    let dt = if dt >= 0.0 {
        dt
    } else {
        warn!("ignoring invalid frame delta {}", dt);
        0.0
    };
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}
