//! Event types triggered on the world.
//!
//! Submodules:
//! - [`tween`] – notification that an animation reached its end values
pub mod tween;
