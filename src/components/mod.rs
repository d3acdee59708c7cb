//! Game-object data.
//!
//! Submodules overview:
//! - [`actor`] – anchor-aware sprite positioned by a named image
//! - [`surface`] – RGBA8 pixel buffer with forgiving bounds
//! - [`tween`] – easing curves, animatable attributes and tween tasks

pub mod actor;
pub mod surface;
pub mod tween;
