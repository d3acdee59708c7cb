//! Game configuration change detection system.
//!
//! Monitors [`GameConfig`] for changes and applies the time scale to
//! [`WorldTime`]. The new scale is used from the next frame delta on.

use bevy_ecs::prelude::*;
use log::info;

use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

/// System that applies game configuration changes.
///
/// # Resource Dependencies
/// - `GameConfig` (optional) - the configuration to monitor
/// - `WorldTime` (mutable) - receives the time scale
pub fn apply_gameconfig_changes(
    maybe_config: Option<Res<GameConfig>>,
    mut world_time: ResMut<WorldTime>,
) {
    let Some(config) = maybe_config else {
        return;
    };

    if (config.is_changed() || config.is_added()) && world_time.time_scale != config.time_scale {
        info!(
            "Time scale: {} -> {}",
            world_time.time_scale, config.time_scale
        );
        world_time.time_scale = config.time_scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_scale_follows_config() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(GameConfig::new());
        let mut schedule = Schedule::default();
        schedule.add_systems(apply_gameconfig_changes);

        schedule.run(&mut world);
        assert_eq!(world.resource::<WorldTime>().time_scale, 1.0);

        world.resource_mut::<GameConfig>().time_scale = 0.25;
        schedule.run(&mut world);
        assert_eq!(world.resource::<WorldTime>().time_scale, 0.25);
    }
}
