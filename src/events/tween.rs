//! Tween completion events.
//!
//! When a [`Tween`](crate::components::tween::Tween) finishes, a
//! [`TweenFinishedEvent`] is triggered on the world after every completion
//! callback of that tick has run.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<TweenFinishedEvent>| {
//!     log::info!("tween {} done", trigger.id);
//! });
//! ```
//!
//! # Related
//!
//! - [`crate::systems::tween::update_tweens`] – the system that triggers these events

use bevy_ecs::prelude::*;

use crate::resources::tweener::TweenId;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenFinishedEvent {
    /// Id returned when the tween was queued.
    pub id: TweenId,
}
