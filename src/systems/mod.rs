//! Engine systems.
//!
//! Submodules overview
//! - [`clock`] – advance the scheduler queue and run due callbacks
//! - [`gameconfig`] – apply configuration changes to the running game
//! - [`time`] – update simulation time and delta
//! - [`tween`] – advance running tweens and report the finished ones

pub mod clock;
pub mod gameconfig;
pub mod time;
pub mod tween;
