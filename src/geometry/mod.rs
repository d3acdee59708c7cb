//! Geometry value types and numeric helpers.
//!
//! Submodules overview:
//! - [`numeric`] – floor modulo, random draws, shuffling, angle conversion
//! - [`vector2`] – 2D vector with exact quarter-turn rotation
//! - [`vector3`] – 3D vector with axis-angle rotation
//! - [`rect`] – axis-aligned rectangle and its nine anchor points

pub mod numeric;
pub mod rect;
pub mod vector2;
pub mod vector3;

pub use rect::{AnchorPoint, Rect, ToRect};
pub use vector2::Vector2;
pub use vector3::Vector3;
