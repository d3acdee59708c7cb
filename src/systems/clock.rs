//! Scheduler system.
//!
//! Advances the [`Clock`] by the frame delta and runs the callbacks that
//! became due. The queue is rebuilt before the first callback runs, so
//! callbacks are free to schedule or unschedule through the world.

use bevy_ecs::prelude::*;

use crate::resources::clock::Clock;
use crate::resources::worldtime::WorldTime;

/// Exclusive system advancing the scheduler queue.
///
/// Does nothing when no [`Clock`] is present.
pub fn update_clock(world: &mut World) {
    let dt = world.resource::<WorldTime>().delta;
    let due = match world.get_non_send_resource_mut::<Clock>() {
        Some(mut clock) => clock.advance(dt),
        None => return,
    };
    for callback in due {
        callback.call(world);
    }
}
