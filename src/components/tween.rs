//! Tween tasks for animated interpolation.
//!
//! A [`Tween`] moves named numeric attributes of a target ("puppet") from
//! the values they had when the tween was created to requested end values
//! over `duration` seconds, shaped by an [`Easing`] curve.
//!
//! Targets expose their attributes through the [`Animatable`] trait. It is
//! implemented for [`Actor`](super::actor::Actor), [`Rect`], [`Vector2`],
//! [`Vector3`] and the free-form [`AttributeMap`].
//!
//! Only attributes that exist on the puppet and have the same shape as the
//! requested end value (scalar to scalar, or arrays of equal length) are
//! tracked. Anything else is skipped without error.
//!
//! See [`crate::resources::tweener`] for the queue and
//! [`crate::systems::tween`] for the per-frame update.

use std::cell::RefCell;
use std::f64::consts::PI;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::callback::Callback;
use crate::error::{EngineError, EngineResult, ensure_positive};
use crate::geometry::{AnchorPoint, Rect, Vector2, Vector3};

/// Easing functions for smooth interpolation.
///
/// These map a normalized progress `n` in `[0, 1]` to eased progress. The
/// elastic and bounce curves may overshoot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Starts slow, speeds up (quadratic).
    Accelerate,
    /// Starts fast, slows down (quadratic).
    Decelerate,
    /// Slow start and end, split at the midpoint.
    AccelDecel,
    /// Winds up with a growing oscillation.
    InElastic,
    /// Overshoots and settles with a decaying oscillation.
    OutElastic,
    /// Both, with a wider period.
    InOutElastic,
    /// Bounces against the end value.
    BounceEnd,
    /// Bounces off the start value.
    BounceStart,
    /// Bounces at both ends.
    BounceStartEnd,
}

impl Easing {
    pub const ALL: [Easing; 10] = [
        Easing::Linear,
        Easing::Accelerate,
        Easing::Decelerate,
        Easing::AccelDecel,
        Easing::InElastic,
        Easing::OutElastic,
        Easing::InOutElastic,
        Easing::BounceEnd,
        Easing::BounceStart,
        Easing::BounceStartEnd,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Accelerate => "accelerate",
            Easing::Decelerate => "decelerate",
            Easing::AccelDecel => "accel_decel",
            Easing::InElastic => "in_elastic",
            Easing::OutElastic => "out_elastic",
            Easing::InOutElastic => "in_out_elastic",
            Easing::BounceEnd => "bounce_end",
            Easing::BounceStart => "bounce_start",
            Easing::BounceStartEnd => "bounce_start_end",
        }
    }

    /// Apply the curve to `n`. The input is not clamped.
    pub fn apply(self, n: f64) -> f64 {
        match self {
            Easing::Linear => n,
            Easing::Accelerate => n * n,
            Easing::Decelerate => -n * (n - 2.0),
            Easing::AccelDecel => {
                let p = n * 2.0;
                if p < 1.0 {
                    0.5 * p * p
                } else {
                    let p = p - 1.0;
                    -0.5 * (p * (p - 2.0) - 1.0)
                }
            }
            Easing::InElastic => {
                if n == 1.0 {
                    return 1.0;
                }
                let (p, s) = elastic_constants(0.3);
                let n = n - 1.0;
                -(2f64.powf(10.0 * n) * ((n - s) * 2.0 * PI / p).sin())
            }
            Easing::OutElastic => {
                if n == 1.0 {
                    return 1.0;
                }
                let (p, s) = elastic_constants(0.3);
                2f64.powf(-10.0 * n) * ((n - s) * 2.0 * PI / p).sin() + 1.0
            }
            Easing::InOutElastic => {
                let q = n * 2.0;
                if q == 2.0 {
                    return 1.0;
                }
                let (p, s) = elastic_constants(0.3 * 1.5);
                let q = q - 1.0;
                if q < 0.0 {
                    -0.5 * 2f64.powf(10.0 * q) * ((q - s) * 2.0 * PI / p).sin()
                } else {
                    0.5 * 2f64.powf(-10.0 * q) * ((q - s) * 2.0 * PI / p).sin() + 1.0
                }
            }
            Easing::BounceEnd => out_bounce(n),
            Easing::BounceStart => in_bounce(n),
            Easing::BounceStartEnd => {
                let p = n * 2.0;
                if p < 1.0 {
                    in_bounce(p) * 0.5
                } else {
                    out_bounce(p - 1.0) * 0.5 + 0.5
                }
            }
        }
    }
}

/// Period and phase shift of an elastic curve.
fn elastic_constants(period: f64) -> (f64, f64) {
    (period, period / 4.0)
}

fn out_bounce(n: f64) -> f64 {
    const K: f64 = 7.5625;
    if n < 1.0 / 2.75 {
        K * n * n
    } else if n < 2.0 / 2.75 {
        let p = n - 1.5 / 2.75;
        K * p * p + 0.75
    } else if n < 2.5 / 2.75 {
        let p = n - 2.25 / 2.75;
        K * p * p + 0.9375
    } else {
        let p = n - 2.625 / 2.75;
        K * p * p + 0.984375
    }
}

fn in_bounce(n: f64) -> f64 {
    1.0 - out_bounce(1.0 - n)
}

impl FromStr for Easing {
    type Err = EngineError;

    /// Case-insensitive lookup by name. Names starting with `_` are internal
    /// and always rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s.trim().to_lowercase();
        if cleaned.starts_with('_') {
            return Err(EngineError::UnknownEasing(s.to_string()));
        }
        Easing::ALL
            .into_iter()
            .find(|e| e.name() == cleaned)
            .ok_or_else(|| EngineError::UnknownEasing(s.to_string()))
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value of an animatable attribute.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Scalar(f64),
    Array(SmallVec<[f64; 4]>),
}

impl AttrValue {
    /// Scalar to scalar, or arrays of the same length.
    pub fn same_shape(&self, other: &AttrValue) -> bool {
        match (self, other) {
            (AttrValue::Scalar(_), AttrValue::Scalar(_)) => true,
            (AttrValue::Array(a), AttrValue::Array(b)) => a.len() == b.len(),
            _ => false,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            AttrValue::Scalar(v) => Some(*v),
            AttrValue::Array(_) => None,
        }
    }

    pub fn as_pair(&self) -> Option<(f64, f64)> {
        match self {
            AttrValue::Array(a) if a.len() == 2 => Some((a[0], a[1])),
            _ => None,
        }
    }

    pub fn as_triple(&self) -> Option<(f64, f64, f64)> {
        match self {
            AttrValue::Array(a) if a.len() == 3 => Some((a[0], a[1], a[2])),
            _ => None,
        }
    }

    /// Component-wise `start + (end - start) * n`. Shapes must already match.
    fn interpolate(start: &AttrValue, end: &AttrValue, n: f64) -> AttrValue {
        match (start, end) {
            (AttrValue::Scalar(s), AttrValue::Scalar(e)) => AttrValue::Scalar(s + (e - s) * n),
            (AttrValue::Array(s), AttrValue::Array(e)) => AttrValue::Array(
                s.iter()
                    .zip(e.iter())
                    .map(|(s, e)| s + (e - s) * n)
                    .collect(),
            ),
            _ => end.clone(),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Scalar(v)
    }
}

impl From<(f64, f64)> for AttrValue {
    fn from((x, y): (f64, f64)) -> Self {
        AttrValue::Array(SmallVec::from_slice(&[x, y]))
    }
}

impl From<(f64, f64, f64)> for AttrValue {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        AttrValue::Array(SmallVec::from_slice(&[x, y, z]))
    }
}

impl<const N: usize> From<[f64; N]> for AttrValue {
    fn from(values: [f64; N]) -> Self {
        AttrValue::Array(SmallVec::from_slice(&values))
    }
}

impl From<Vec<f64>> for AttrValue {
    fn from(values: Vec<f64>) -> Self {
        AttrValue::Array(SmallVec::from_vec(values))
    }
}

/// Read/write access to named numeric attributes.
///
/// `set_attribute` is only called with names that `attribute` reported and
/// with a value of the same shape. Unknown names are ignored.
pub trait Animatable {
    fn attribute(&self, name: &str) -> Option<AttrValue>;
    fn set_attribute(&mut self, name: &str, value: AttrValue);
}

/// Shared handle to an animation target.
pub type Puppet = Rc<RefCell<dyn Animatable>>;

/// Free-form record of named values.
pub type AttributeMap = FxHashMap<String, AttrValue>;

impl Animatable for AttributeMap {
    fn attribute(&self, name: &str) -> Option<AttrValue> {
        self.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: AttrValue) {
        if let Some(slot) = self.get_mut(name) {
            *slot = value;
        }
    }
}

impl Animatable for Vector2 {
    fn attribute(&self, name: &str) -> Option<AttrValue> {
        match name {
            "x" => Some(self.x.into()),
            "y" => Some(self.y.into()),
            _ => None,
        }
    }

    fn set_attribute(&mut self, name: &str, value: AttrValue) {
        let Some(v) = value.as_scalar() else { return };
        match name {
            "x" => self.x = v,
            "y" => self.y = v,
            _ => {}
        }
    }
}

impl Animatable for Vector3 {
    fn attribute(&self, name: &str) -> Option<AttrValue> {
        match name {
            "x" => Some(self.x.into()),
            "y" => Some(self.y.into()),
            "z" => Some(self.z.into()),
            _ => None,
        }
    }

    fn set_attribute(&mut self, name: &str, value: AttrValue) {
        let Some(v) = value.as_scalar() else { return };
        match name {
            "x" => self.x = v,
            "y" => self.y = v,
            "z" => self.z = v,
            _ => {}
        }
    }
}

impl Animatable for Rect {
    fn attribute(&self, name: &str) -> Option<AttrValue> {
        let value: AttrValue = match name {
            "x" | "left" => self.x.into(),
            "y" | "top" => self.y.into(),
            "width" => self.width.into(),
            "height" => self.height.into(),
            "right" => self.right().into(),
            "bottom" => self.bottom().into(),
            "centerx" => self.centerx().into(),
            "centery" => self.centery().into(),
            "size" => self.size().into(),
            other => self.anchor(other.parse::<AnchorPoint>().ok()?).into(),
        };
        Some(value)
    }

    fn set_attribute(&mut self, name: &str, value: AttrValue) {
        if let Some(v) = value.as_scalar() {
            match name {
                "x" | "left" => self.x = v,
                "y" | "top" => self.y = v,
                "width" => self.width = v,
                "height" => self.height = v,
                "right" => self.set_right(v),
                "bottom" => self.set_bottom(v),
                "centerx" => self.set_centerx(v),
                "centery" => self.set_centery(v),
                _ => {}
            }
        } else if let Some(pair) = value.as_pair() {
            if name == "size" {
                self.set_size(pair);
            } else if let Ok(point) = name.parse::<AnchorPoint>() {
                self.set_anchor(point, pair);
            }
        }
    }
}

#[derive(Clone, Debug)]
struct TrackedAttribute {
    name: String,
    start: AttrValue,
    end: AttrValue,
}

/// A running interpolation of one or more puppet attributes.
///
/// The tween is done once `elapsed > duration`, or immediately when no
/// attribute could be tracked.
pub struct Tween {
    puppet: Puppet,
    attributes: Vec<TrackedAttribute>,
    elapsed: f64,
    duration: f64,
    easing: Easing,
    on_complete: Option<Callback>,
}

impl Tween {
    /// Capture start values from `puppet` for every requested attribute.
    ///
    /// Fails when `duration` is NaN (type error) or not a positive finite
    /// number (range error).
    pub fn new<I, K>(puppet: Puppet, duration: f64, attributes: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = (K, AttrValue)>,
        K: Into<String>,
    {
        let duration = ensure_positive("duration", duration)?;

        let mut tracked: Vec<TrackedAttribute> = Vec::new();
        {
            let target = puppet.borrow();
            for (name, end) in attributes {
                let name = name.into();
                let Some(start) = target.attribute(&name) else {
                    continue;
                };
                if !start.same_shape(&end) {
                    continue;
                }
                match tracked.iter_mut().find(|a| a.name == name) {
                    Some(existing) => existing.end = end,
                    None => tracked.push(TrackedAttribute { name, start, end }),
                }
            }
        }

        Ok(Tween {
            puppet,
            attributes: tracked,
            elapsed: 0.0,
            duration,
            easing: Easing::Linear,
            on_complete: None,
        })
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the easing by name, see [`Easing::from_str`].
    pub fn with_easing_name(self, name: &str) -> EngineResult<Self> {
        Ok(self.with_easing(name.parse()?))
    }

    pub fn with_on_complete(mut self, callback: Callback) -> Self {
        self.on_complete = Some(callback);
        self
    }

    /// Advance by `dt` seconds and write the new values to the puppet.
    ///
    /// Past the end every attribute is snapped to its exact end value.
    pub fn update(&mut self, dt: f64) {
        self.elapsed += dt;
        let mut target = self.puppet.borrow_mut();
        if self.elapsed > self.duration {
            for a in &self.attributes {
                target.set_attribute(&a.name, a.end.clone());
            }
        } else {
            let n = self.easing.apply(self.elapsed / self.duration);
            for a in &self.attributes {
                target.set_attribute(&a.name, AttrValue::interpolate(&a.start, &a.end, n));
            }
        }
    }

    pub fn is_done(&self) -> bool {
        self.attributes.is_empty() || self.elapsed > self.duration
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn on_complete(&self) -> Option<&Callback> {
        self.on_complete.as_ref()
    }

    pub fn puppet(&self) -> &Puppet {
        &self.puppet
    }

    /// Names of the tracked attributes, in request order.
    pub fn tracked(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.name.as_str())
    }

    /// Captured `(start, end)` of a tracked attribute.
    pub fn endpoints(&self, name: &str) -> Option<(&AttrValue, &AttrValue)> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| (&a.start, &a.end))
    }
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("attributes", &self.attributes)
            .field("elapsed", &self.elapsed)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("on_complete", &self.on_complete)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn record(pairs: &[(&str, AttrValue)]) -> Rc<RefCell<AttributeMap>> {
        let map: AttributeMap = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        Rc::new(RefCell::new(map))
    }

    fn scalar(map: &Rc<RefCell<AttributeMap>>, name: &str) -> f64 {
        map.borrow()[name].as_scalar().unwrap()
    }

    // ==================== EASING TESTS ====================

    #[test]
    fn test_easing_endpoints() {
        for easing in Easing::ALL {
            assert!(approx_eq(easing.apply(1.0), 1.0), "{easing} at 1");
            // The elastic-in curves start with a tiny residual oscillation
            assert!(easing.apply(0.0).abs() < 1e-3, "{easing} at 0");
        }
        for easing in [Easing::Linear, Easing::Accelerate, Easing::OutElastic, Easing::BounceEnd] {
            assert!(approx_eq(easing.apply(0.0), 0.0), "{easing} at 0");
        }
    }

    #[test]
    fn test_easing_quadratics() {
        assert!(approx_eq(Easing::Linear.apply(0.3), 0.3));
        assert!(approx_eq(Easing::Accelerate.apply(0.5), 0.25));
        assert!(approx_eq(Easing::Decelerate.apply(0.5), 0.75));
        assert!(approx_eq(Easing::AccelDecel.apply(0.25), 0.125));
        assert!(approx_eq(Easing::AccelDecel.apply(0.5), 0.5));
        assert!(approx_eq(Easing::AccelDecel.apply(0.75), 0.875));
    }

    #[test]
    fn test_elastic_boundaries_are_exact() {
        assert_eq!(Easing::InElastic.apply(1.0), 1.0);
        assert_eq!(Easing::OutElastic.apply(1.0), 1.0);
        assert_eq!(Easing::InOutElastic.apply(1.0), 1.0);
        assert!(approx_eq(Easing::InOutElastic.apply(0.5), 0.5));
    }

    #[test]
    fn test_elastic_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::OutElastic.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_bounce_start_is_time_reversed_bounce_end() {
        for i in 0..=200 {
            let n = i as f64 / 200.0;
            let lhs = Easing::BounceStart.apply(n);
            let rhs = 1.0 - Easing::BounceEnd.apply(1.0 - n);
            assert!(approx_eq(lhs, rhs), "n = {n}");
        }
    }

    #[test]
    fn test_bounce_start_end_halves() {
        assert!(approx_eq(Easing::BounceStartEnd.apply(0.25), Easing::BounceStart.apply(0.5) * 0.5));
        assert!(approx_eq(
            Easing::BounceStartEnd.apply(0.75),
            Easing::BounceEnd.apply(0.5) * 0.5 + 0.5
        ));
    }

    #[test]
    fn test_easing_from_str() {
        assert_eq!(" Bounce_End ".parse::<Easing>().unwrap(), Easing::BounceEnd);
        for name in ["wobble", "_out_bounce_internal", "_linear", ""] {
            let err = name.parse::<Easing>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Range, "{name:?}");
        }
        for easing in Easing::ALL {
            assert_eq!(easing.name().parse::<Easing>().unwrap(), easing);
        }
    }

    // ==================== ATTRIBUTE VALUE TESTS ====================

    #[test]
    fn test_same_shape() {
        let s = AttrValue::from(1.0);
        let p = AttrValue::from((1.0, 2.0));
        let t = AttrValue::from([1.0, 2.0, 3.0]);
        assert!(s.same_shape(&AttrValue::from(5.0)));
        assert!(p.same_shape(&AttrValue::from(vec![0.0, 0.0])));
        assert!(!s.same_shape(&p));
        assert!(!p.same_shape(&t));
    }

    // ==================== TWEEN TESTS ====================

    #[test]
    fn test_linear_tween_midpoint_and_snap() {
        let puppet = record(&[("x", 0.0.into())]);
        let mut tween = Tween::new(puppet.clone(), 1.0, [("x", AttrValue::from(10.0))]).unwrap();

        tween.update(0.5);
        assert!(approx_eq(scalar(&puppet, "x"), 5.0));
        assert!(!tween.is_done());

        tween.update(1.0);
        assert_eq!(scalar(&puppet, "x"), 10.0);
        assert!(tween.is_done());
    }

    #[test]
    fn test_snap_is_exact_for_inexact_values() {
        let puppet = record(&[("x", 0.1.into())]);
        let mut tween = Tween::new(puppet.clone(), 0.3, [("x", AttrValue::from(0.7))])
            .unwrap()
            .with_easing(Easing::OutElastic);
        for _ in 0..10 {
            tween.update(0.1);
        }
        assert_eq!(scalar(&puppet, "x"), 0.7);
    }

    #[test]
    fn test_exactly_at_duration_is_not_done() {
        let puppet = record(&[("x", 0.0.into())]);
        let mut tween = Tween::new(puppet, 1.0, [("x", AttrValue::from(4.0))]).unwrap();
        tween.update(1.0);
        assert!(!tween.is_done());
    }

    #[test]
    fn test_array_attributes_interpolate_componentwise() {
        let puppet = record(&[("pos", (0.0, 100.0).into())]);
        let mut tween =
            Tween::new(puppet.clone(), 2.0, [("pos", AttrValue::from((10.0, 0.0)))]).unwrap();
        tween.update(0.5);
        let (x, y) = puppet.borrow()["pos"].as_pair().unwrap();
        assert!(approx_eq(x, 2.5));
        assert!(approx_eq(y, 75.0));
    }

    #[test]
    fn test_mismatched_and_missing_attributes_are_skipped() {
        let puppet = record(&[("x", 0.0.into()), ("pos", (0.0, 0.0).into())]);
        let tween = Tween::new(
            puppet,
            1.0,
            [
                ("x", AttrValue::from((1.0, 1.0))),
                ("pos", AttrValue::from([1.0, 2.0, 3.0])),
                ("missing", AttrValue::from(3.0)),
            ],
        )
        .unwrap();
        assert_eq!(tween.tracked().count(), 0);
        assert!(tween.is_done());
    }

    #[test]
    fn test_partial_capture() {
        let puppet = record(&[("x", 1.0.into()), ("y", 2.0.into())]);
        let tween = Tween::new(
            puppet,
            1.0,
            [("y", AttrValue::from(5.0)), ("z", AttrValue::from(1.0))],
        )
        .unwrap();
        assert_eq!(tween.tracked().collect::<Vec<_>>(), vec!["y"]);
        let (start, end) = tween.endpoints("y").unwrap();
        assert_eq!(start, &AttrValue::Scalar(2.0));
        assert_eq!(end, &AttrValue::Scalar(5.0));
    }

    #[test]
    fn test_invalid_duration() {
        let puppet = record(&[("x", 0.0.into())]);
        let attrs = || [("x", AttrValue::from(1.0))];
        let err = Tween::new(puppet.clone(), 0.0, attrs()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        let err = Tween::new(puppet.clone(), -2.0, attrs()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        let err = Tween::new(puppet, f64::NAN, attrs()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_with_easing_name() {
        let puppet = record(&[("x", 0.0.into())]);
        let tween = Tween::new(puppet.clone(), 1.0, [("x", AttrValue::from(1.0))])
            .unwrap()
            .with_easing_name("ACCELERATE")
            .unwrap();
        assert_eq!(tween.easing(), Easing::Accelerate);
        let err = Tween::new(puppet, 1.0, [("x", AttrValue::from(1.0))])
            .unwrap()
            .with_easing_name("_in_bounce_internal")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_easing_reference_values() {
        let points = [0.1, 0.25, 0.4, 0.6, 0.9];
        let expected = [
            (Easing::Accelerate, [0.01, 0.0625, 0.16, 0.36, 0.81]),
            (Easing::Decelerate, [0.19, 0.4375, 0.64, 0.84, 0.99]),
            (Easing::AccelDecel, [0.02, 0.125, 0.32, 0.68, 0.98]),
            (
                Easing::InElastic,
                [0.001953125, -0.005524271728019903, 0.015625, -0.03125, -0.25],
            ),
            (
                Easing::OutElastic,
                [1.25, 0.9116116523516815, 1.03125, 0.984375, 0.998046875],
            ),
            (
                Easing::InOutElastic,
                [
                    0.0003391565970057254,
                    0.011969444423734025,
                    -0.11746157759823855,
                    1.1174615775982386,
                    0.9996608434029943,
                ],
            ),
            (Easing::BounceEnd, [0.075625, 0.47265625, 0.91, 0.7725, 0.988125]),
            (Easing::BounceStart, [0.011875, 0.02734375, 0.2275, 0.09, 0.924375]),
            (Easing::BounceStartEnd, [0.03, 0.1171875, 0.34875, 0.65125, 0.97]),
        ];
        for (easing, values) in expected {
            for (n, value) in points.iter().zip(values) {
                let got = easing.apply(*n);
                assert!(approx_eq(got, value), "{easing}({n}) = {got}, expected {value}");
            }
        }
    }

    #[test]
    fn test_easing_serde_names() {
        let json = serde_json::to_string(&Easing::BounceStartEnd).unwrap();
        assert_eq!(json, "\"bounce_start_end\"");
        for easing in Easing::ALL {
            let json = serde_json::to_string(&easing).unwrap();
            assert_eq!(json, format!("\"{}\"", easing.name()));
            assert_eq!(serde_json::from_str::<Easing>(&json).unwrap(), easing);
        }
        assert!(serde_json::from_str::<Easing>("\"wobble\"").is_err());
        assert!(serde_json::from_str::<Easing>("\"_in_bounce_internal\"").is_err());
    }

    // ==================== ATTRIBUTE VALUE TESTS ====================

    #[test]
    fn test_attr_value_serde_shapes() {
        assert_eq!(serde_json::from_str::<AttrValue>("2.5").unwrap(), AttrValue::Scalar(2.5));
        assert_eq!(serde_json::from_str::<AttrValue>("3").unwrap(), AttrValue::Scalar(3.0));
        assert_eq!(
            serde_json::from_str::<AttrValue>("[1.0, 2.0, 3.0]").unwrap(),
            AttrValue::from((1.0, 2.0, 3.0))
        );
        assert!(serde_json::from_str::<AttrValue>("\"x\"").is_err());

        for value in [AttrValue::from(-4.25), AttrValue::from([1.0, 2.0, 3.0, 4.0, 5.0])] {
            let json = serde_json::to_string(&value).unwrap();
            assert_eq!(serde_json::from_str::<AttrValue>(&json).unwrap(), value);
        }
        assert_eq!(serde_json::to_string(&AttrValue::from((1.5, 2.0))).unwrap(), "[1.5,2.0]");
    }

    #[test]
    fn test_attr_value_accessors() {
        let triple = AttrValue::from((1.0, 2.0, 3.0));
        assert_eq!(triple.as_triple(), Some((1.0, 2.0, 3.0)));
        assert_eq!(triple.as_pair(), None);
        assert_eq!(triple.as_scalar(), None);
        assert_eq!(AttrValue::from((1.0, 2.0)).as_triple(), None);
        assert_eq!(AttrValue::from(1.0).as_triple(), None);
    }

    #[test]
    fn test_rect_puppet_anchor_attribute() {
        let rect = Rc::new(RefCell::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        let mut tween =
            Tween::new(rect.clone(), 1.0, [("center", AttrValue::from((105.0, 55.0)))]).unwrap();
        tween.update(2.0);
        assert_eq!(rect.borrow().center(), (105.0, 55.0));
        assert_eq!(rect.borrow().size(), (10.0, 10.0));
    }

    #[test]
    fn test_vector_puppets() {
        let v2 = Rc::new(RefCell::new(Vector2::new(0.0, 0.0)));
        let v3 = Rc::new(RefCell::new(Vector3::new(0.0, 0.0, 0.0)));
        let mut a = Tween::new(v2.clone(), 1.0, [("y", AttrValue::from(8.0))]).unwrap();
        let mut b = Tween::new(v3.clone(), 1.0, [("z", AttrValue::from(-8.0))]).unwrap();
        a.update(0.25);
        b.update(0.25);
        assert!(approx_eq(v2.borrow().y, 2.0));
        assert!(approx_eq(v3.borrow().z, -2.0));
    }
}
