//! Zeroframe headless runner.
//!
//! Drives a [`Game`] for a fixed number of frames without a window, which is
//! handy to try easing curves and to check configuration files:
//! - loads `config.ini` (or `--config`) and the image manifest it names
//! - animates an actor across the screen with the chosen easing
//! - logs the actor position every half second through the scheduler
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --frames 120 --easing bounce_end
//! ```

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

use zeroframe::callback::Callback;
use zeroframe::components::actor::Actor;
use zeroframe::components::tween::{AttrValue, Easing, Tween};
use zeroframe::error::EngineResult;
use zeroframe::events::tween::TweenFinishedEvent;
use zeroframe::game::{Game, animate_tween, schedule_interval};
use zeroframe::resources::gameconfig::GameConfig;
use zeroframe::resources::worldtime::WorldTime;

const DEMO_IMAGE: &str = "alien";

/// Zeroframe headless runner
#[derive(Parser)]
#[command(version, about = "Runs the zeroframe scheduler and tweens without a window.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Number of frames to run.
    #[arg(long, default_value_t = 180)]
    frames: u64,

    /// Override the configured frame rate.
    #[arg(long)]
    fps: Option<u32>,

    /// Easing used by the demo animation.
    #[arg(long, default_value = "linear")]
    easing: String,

    /// Print the available easing names and exit.
    #[arg(long)]
    list_easings: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.list_easings {
        for easing in Easing::ALL {
            println!("{easing}");
        }
        return;
    }

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> EngineResult<()> {
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("Using default config: {e}");
    }
    if let Some(fps) = cli.fps.filter(|fps| *fps > 0) {
        config.target_fps = fps;
    }
    let easing: Easing = cli.easing.parse()?;

    let mut game = Game::with_config(config);
    game.load_images()?;
    if !game.images().contains(DEMO_IMAGE) {
        game.images_mut().register(DEMO_IMAGE, 66.0, 92.0);
    }

    let (width, height) = game.config().size();
    let actor = Rc::new(RefCell::new(Actor::new(game.images(), DEMO_IMAGE)?));
    actor.borrow_mut().set_pos((0.0, f64::from(height) / 2.0));

    // Finish a few frames early so the completion shows up in the run
    let duration = game.config().frame_time() * cli.frames.max(1) as f64 * 0.9;
    let tween = Tween::new(
        actor.clone(),
        duration,
        [
            ("posx", AttrValue::from(f64::from(width))),
            ("angle", AttrValue::from(360.0)),
        ],
    )?
    .with_easing(easing)
    .with_on_complete(Callback::new(|world: &mut World| {
        info!(
            "Animation done at frame {}",
            world.resource::<WorldTime>().frame_count
        );
    }));

    game.world_mut().add_observer(|trigger: On<TweenFinishedEvent>| {
        info!("Tween {} finished", trigger.event().id);
    });
    game.world_mut().flush();
    animate_tween(game.world_mut(), tween);

    let watched = actor.clone();
    schedule_interval(
        game.world_mut(),
        Callback::new(move |_| {
            let actor = watched.borrow();
            info!("{} angle={:.1}", actor, actor.angle);
        }),
        0.5,
    )?;

    game.run_frames(cli.frames);

    let time = game.time();
    let actor = actor.borrow();
    info!(
        "Ran {} frames ({:.3}s): actor at {:?}, topleft {:?}",
        time.frame_count,
        time.elapsed,
        actor.pos(),
        actor.topleft()
    );
    Ok(())
}
