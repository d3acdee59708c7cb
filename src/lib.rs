//! Zeroframe library.
//!
//! A small 2D game-making toolkit: vector and rectangle geometry, anchor-aware
//! actors, a frame-synchronised scheduler and a tweening engine, driven by a
//! `bevy_ecs` world one tick at a time.
//!
//! - [`geometry`] – `Vector2`, `Vector3`, `Rect` and numeric helpers
//! - [`components`] – `Actor`, `Surface`, tweens and easing curves
//! - [`resources`] – clock and tween queues, image store, config, world time
//! - [`systems`] – per-frame updates run by the [`game::Game`] driver
//! - [`events`] – events triggered on the world
//! - [`game`] – the frame driver and the scheduling/animation helpers

pub mod callback;
pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod geometry;
pub mod resources;
pub mod systems;
