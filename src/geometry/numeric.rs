//! Small numeric helpers used across the crate and by game code.

use fastrand::Rng;

/// Modulo whose result takes the sign of the divisor.
///
/// `floor_mod(-1.0, 360.0) == 359.0`, unlike the `%` operator which would
/// return `-1.0`.
pub fn floor_mod(a: f64, b: f64) -> f64 {
    a - b * (a / b).floor()
}

/// Uniform random float `N` with `min <= N < max`.
pub fn rand_range(rng: &mut Rng, min: f64, max: f64) -> f64 {
    rng.f64() * (max - min) + min
}

/// Uniform random integer `N` with `ceil(min) <= N < floor(max)`.
///
/// Returns `ceil(min)` when the range is empty.
pub fn rand_int(rng: &mut Rng, min: f64, max: f64) -> i64 {
    let min = min.ceil() as i64;
    let max = max.floor() as i64;
    if max <= min {
        return min;
    }
    rng.i64(min..max)
}

/// Pick a random element, `None` for an empty slice.
pub fn choice<'a, T>(rng: &mut Rng, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.usize(..items.len()))
}

/// Shuffle in place.
pub fn shuffle<T>(rng: &mut Rng, items: &mut [T]) {
    rng.shuffle(items);
}

pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Floor of half a length, used by every center-based accessor.
pub(crate) fn half(length: f64) -> f64 {
    (length / 2.0).floor()
}
