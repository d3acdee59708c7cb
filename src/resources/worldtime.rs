//! Simulation time.
//!
//! Written once per frame by
//! [`update_world_time`](crate::systems::time::update_world_time) and read
//! by the clock and tween systems.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct WorldTime {
    /// Scaled seconds since start (or the last reset).
    pub elapsed: f64,
    /// Scaled seconds of the current frame.
    pub delta: f64,
    pub time_scale: f64,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale;
        self
    }
}
