//! Tween system.
//!
//! Advances every running [`Tween`](crate::components::tween::Tween) in the
//! [`Tweener`] by the frame delta. Once the queue has been rebuilt, the
//! completion callbacks of the tweens that finished this frame run in queue
//! order, followed by one [`TweenFinishedEvent`] per finished tween.

use bevy_ecs::prelude::*;
use log::debug;

use crate::events::tween::TweenFinishedEvent;
use crate::resources::tweener::Tweener;
use crate::resources::worldtime::WorldTime;

/// Exclusive system advancing the animation queue.
///
/// Does nothing when no [`Tweener`] is present.
pub fn update_tweens(world: &mut World) {
    let dt = world.resource::<WorldTime>().delta;
    let finished = match world.get_non_send_resource_mut::<Tweener>() {
        Some(mut tweener) => tweener.advance(dt),
        None => return,
    };
    for done in &finished {
        if let Some(callback) = &done.on_complete {
            callback.call(world);
        }
    }
    for done in finished {
        debug!("tween {} finished", done.id);
        world.trigger(TweenFinishedEvent { id: done.id });
    }
}
