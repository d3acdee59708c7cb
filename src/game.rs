//! Frame driver and queue helpers.
//!
//! [`Game`] owns the ECS [`World`] and the update [`Schedule`]. Every call to
//! [`Game::tick`] advances [`WorldTime`] and then runs, in order:
//! 1. [`apply_gameconfig_changes`] – pick up a changed time scale
//! 2. [`update_clock`] – fire due scheduled callbacks
//! 3. [`update_tweens`] – step animations and finish completed ones
//!
//! The free functions ([`schedule`], [`animate`], ...) take `&mut World` so
//! that callbacks, which receive the world, can use them to re-enter the
//! queues. Changes made from a callback take effect on the next tick.

use bevy_ecs::prelude::*;
use log::info;

use crate::callback::Callback;
use crate::components::tween::{AttrValue, Puppet, Tween};
use crate::error::EngineResult;
use crate::resources::clock::Clock;
use crate::resources::gameconfig::GameConfig;
use crate::resources::imagestore::ImageStore;
use crate::resources::tweener::{TweenId, Tweener};
use crate::resources::worldtime::WorldTime;
use crate::systems::clock::update_clock;
use crate::systems::gameconfig::apply_gameconfig_changes;
use crate::systems::time::update_world_time;
use crate::systems::tween::update_tweens;

pub struct Game {
    world: World,
    update: Schedule,
    paused: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_config(GameConfig::new())
    }

    pub fn with_config(config: GameConfig) -> Self {
        info!(
            "Starting game: {}x{} at {} fps",
            config.width, config.height, config.target_fps
        );
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
        world.insert_resource(config);
        world.insert_non_send_resource(Clock::new());
        world.insert_non_send_resource(Tweener::new());
        world.insert_non_send_resource(ImageStore::new());

        let mut update = Schedule::default();
        // The clock always runs before the tweens
        update.add_systems((apply_gameconfig_changes, update_clock, update_tweens).chain());

        Game {
            world,
            update,
            paused: false,
        }
    }

    /// Register the images listed in the configured manifest, if any.
    pub fn load_images(&mut self) -> EngineResult<usize> {
        let Some(path) = self.config().images.clone() else {
            return Ok(0);
        };
        images_mut(&mut self.world).load_manifest(path)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn config(&self) -> &GameConfig {
        self.world.resource::<GameConfig>()
    }

    pub fn config_mut(&mut self) -> Mut<'_, GameConfig> {
        self.world.resource_mut::<GameConfig>()
    }

    pub fn time(&self) -> WorldTime {
        *self.world.resource::<WorldTime>()
    }

    pub fn clock(&self) -> &Clock {
        self.world.non_send_resource::<Clock>()
    }

    pub fn tweener(&self) -> &Tweener {
        self.world.non_send_resource::<Tweener>()
    }

    pub fn images(&self) -> &ImageStore {
        self.world.non_send_resource::<ImageStore>()
    }

    pub fn images_mut(&mut self) -> Mut<'_, ImageStore> {
        images_mut(&mut self.world)
    }

    /// Advance one frame by `dt` seconds.
    ///
    /// While paused the frame is counted but both queues see a zero delta.
    pub fn tick(&mut self, dt: f64) {
        let dt = if self.paused { 0.0 } else { dt };
        update_world_time(&mut self.world, dt);
        self.update.run(&mut self.world);
    }

    /// Run `frames` ticks at the configured frame rate.
    pub fn run_frames(&mut self, frames: u64) {
        let dt = self.config().frame_time();
        for _ in 0..frames {
            self.tick(dt);
        }
    }

    pub fn pause(&mut self) {
        if !self.paused {
            info!("Paused at frame {}", self.time().frame_count);
        }
        self.paused = true;
    }

    pub fn resume(&mut self) {
        if self.paused {
            info!("Resumed at frame {}", self.time().frame_count);
        }
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Drop every scheduled call and running tween and restart the clock at
    /// zero. The time scale is kept.
    pub fn reset(&mut self) {
        clock_mut(&mut self.world).clear();
        tweener_mut(&mut self.world).clear();
        let mut time = self.world.resource_mut::<WorldTime>();
        let time_scale = time.time_scale;
        *time = WorldTime::default().with_time_scale(time_scale);
        info!("Game reset");
    }
}

fn clock_mut(world: &mut World) -> Mut<'_, Clock> {
    world.init_non_send_resource::<Clock>();
    world.non_send_resource_mut::<Clock>()
}

fn tweener_mut(world: &mut World) -> Mut<'_, Tweener> {
    world.init_non_send_resource::<Tweener>();
    world.non_send_resource_mut::<Tweener>()
}

fn images_mut(world: &mut World) -> Mut<'_, ImageStore> {
    world.init_non_send_resource::<ImageStore>();
    world.non_send_resource_mut::<ImageStore>()
}

/// Call `callback` once after `delay` seconds.
pub fn schedule(world: &mut World, callback: Callback, delay: f64) -> EngineResult<()> {
    clock_mut(world).schedule(callback, delay)
}

/// Replace every pending entry for `callback` with a single one-shot call.
pub fn schedule_unique(world: &mut World, callback: Callback, delay: f64) -> EngineResult<()> {
    clock_mut(world).schedule_unique(callback, delay)
}

/// Call `callback` every `interval` seconds.
pub fn schedule_interval(world: &mut World, callback: Callback, interval: f64) -> EngineResult<()> {
    clock_mut(world).schedule_interval(callback, interval)
}

/// Remove every pending entry for `callback`.
pub fn unschedule(world: &mut World, callback: &Callback) -> usize {
    clock_mut(world).unschedule(callback)
}

/// Animate attributes of `puppet` towards `attributes` over `duration`
/// seconds.
///
/// `easing` defaults to linear. Returns `None` when none of the attributes
/// could be animated, in which case nothing is queued and `on_complete`
/// never runs.
pub fn animate<I, K>(
    world: &mut World,
    puppet: Puppet,
    duration: f64,
    attributes: I,
    easing: Option<&str>,
    on_complete: Option<Callback>,
) -> EngineResult<Option<TweenId>>
where
    I: IntoIterator<Item = (K, AttrValue)>,
    K: Into<String>,
{
    let mut tween = Tween::new(puppet, duration, attributes)?;
    if let Some(name) = easing {
        tween = tween.with_easing_name(name)?;
    }
    if let Some(callback) = on_complete {
        tween = tween.with_on_complete(callback);
    }
    Ok(animate_tween(world, tween))
}

/// Queue a prepared tween, see [`Tweener::animate`].
pub fn animate_tween(world: &mut World, tween: Tween) -> Option<TweenId> {
    tweener_mut(world).animate(tween)
}

/// Stop a running tween without finishing it.
pub fn cancel_tween(world: &mut World, id: TweenId) -> bool {
    tweener_mut(world).cancel(id).is_some()
}
