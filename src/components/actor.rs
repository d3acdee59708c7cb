//! Anchor-aware sprite.
//!
//! An [`Actor`] refers to an image by name and is positioned by its anchor
//! point (`posx`, `posy`). The anchor is stored per axis either as a pixel
//! offset from the top-left corner or as a keyword that is resolved against
//! the image size on every access, so resizing the image moves the anchor
//! with it.
//!
//! `x`/`y` are always the top-left corner and every Rect-style accessor is
//! derived from them.

use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};
use crate::geometry::numeric::{half, rad_to_deg};
use crate::geometry::{AnchorPoint, Rect, ToRect};
use crate::resources::imagestore::{ImageHandle, ImageStore};

use super::tween::{Animatable, AttrValue, AttributeMap};

const X_ANCHOR_NAMES: &str = "\"left\", \"center\", \"middle\", or \"right\"";
const Y_ANCHOR_NAMES: &str = "\"top\", \"center\", \"middle\", or \"bottom\"";

/// Horizontal anchor offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorX {
    Pixels(f64),
    Left,
    Center,
    Right,
}

impl AnchorX {
    pub fn resolve(self, width: f64) -> f64 {
        match self {
            AnchorX::Pixels(dx) => dx,
            AnchorX::Left => 0.0,
            AnchorX::Center => half(width),
            AnchorX::Right => width,
        }
    }
}

impl FromStr for AnchorX {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(AnchorX::Left),
            "center" | "middle" => Ok(AnchorX::Center),
            "right" => Ok(AnchorX::Right),
            _ => Err(EngineError::UnknownAnchor {
                name: s.to_string(),
                expected: X_ANCHOR_NAMES,
            }),
        }
    }
}

impl From<f64> for AnchorX {
    fn from(dx: f64) -> Self {
        AnchorX::Pixels(dx)
    }
}

/// Vertical anchor offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorY {
    Pixels(f64),
    Top,
    Center,
    Bottom,
}

impl AnchorY {
    pub fn resolve(self, height: f64) -> f64 {
        match self {
            AnchorY::Pixels(dy) => dy,
            AnchorY::Top => 0.0,
            AnchorY::Center => half(height),
            AnchorY::Bottom => height,
        }
    }
}

impl FromStr for AnchorY {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(AnchorY::Top),
            "center" | "middle" => Ok(AnchorY::Center),
            "bottom" => Ok(AnchorY::Bottom),
            _ => Err(EngineError::UnknownAnchor {
                name: s.to_string(),
                expected: Y_ANCHOR_NAMES,
            }),
        }
    }
}

impl From<f64> for AnchorY {
    fn from(dy: f64) -> Self {
        AnchorY::Pixels(dy)
    }
}

impl From<AnchorPoint> for (AnchorX, AnchorY) {
    fn from(point: AnchorPoint) -> Self {
        use AnchorPoint::*;
        let x = match point {
            TopLeft | MidLeft | BottomLeft => AnchorX::Left,
            MidTop | Center | MidBottom => AnchorX::Center,
            TopRight | MidRight | BottomRight => AnchorX::Right,
        };
        let y = match point {
            TopLeft | MidTop | TopRight => AnchorY::Top,
            MidLeft | Center | MidRight => AnchorY::Center,
            BottomLeft | MidBottom | BottomRight => AnchorY::Bottom,
        };
        (x, y)
    }
}

/// Something an actor can measure an angle or a distance to.
#[derive(Clone, Copy, Debug)]
pub enum Target<'a> {
    /// Another actor's anchor position.
    Actor(&'a Actor),
    Point(f64, f64),
    /// A record with `x`/`y` scalars; missing fields count as 0.
    Record(&'a AttributeMap),
    /// Anything else, treated as the point (0, 0). Distance and angle are
    /// measured to the origin, not reported as zero.
    Unknown,
}

impl Target<'_> {
    fn position(&self) -> (f64, f64) {
        match self {
            Target::Actor(actor) => actor.pos(),
            Target::Point(x, y) => (*x, *y),
            Target::Record(map) => {
                let coord = |key: &str| map.get(key).and_then(AttrValue::as_scalar).unwrap_or(0.0);
                (coord("x"), coord("y"))
            }
            Target::Unknown => (0.0, 0.0),
        }
    }
}

impl<'a> From<&'a Actor> for Target<'a> {
    fn from(actor: &'a Actor) -> Self {
        Target::Actor(actor)
    }
}

impl From<(f64, f64)> for Target<'_> {
    fn from((x, y): (f64, f64)) -> Self {
        Target::Point(x, y)
    }
}

impl<'a> From<&'a AttributeMap> for Target<'a> {
    fn from(map: &'a AttributeMap) -> Self {
        Target::Record(map)
    }
}

/// A positioned, rotatable image.
#[derive(Clone, Debug)]
pub struct Actor {
    image: ImageHandle,
    pub anchor_dx: AnchorX,
    pub anchor_dy: AnchorY,
    /// Anchor position.
    pub posx: f64,
    pub posy: f64,
    /// Rotation in degrees, counter-clockwise.
    pub angle: f64,
    pub opacity: f64,
}

impl Actor {
    /// Create an actor for a registered image, anchored at its center with
    /// the top-left corner at the origin.
    pub fn new(store: &ImageStore, name: &str) -> EngineResult<Self> {
        let image = store.get(name)?;
        let (width, height) = image.size();
        Ok(Actor {
            image,
            anchor_dx: AnchorX::Center,
            anchor_dy: AnchorY::Center,
            posx: half(width),
            posy: half(height),
            angle: 0.0,
            opacity: 1.0,
        })
    }

    pub fn name(&self) -> &str {
        self.image.name()
    }

    /// Switch to another registered image. The anchor position is kept.
    pub fn set_name(&mut self, store: &ImageStore, name: &str) -> EngineResult<()> {
        self.image = store.get(name)?;
        Ok(())
    }

    pub fn image(&self) -> &ImageHandle {
        &self.image
    }

    pub fn width(&self) -> f64 {
        self.image.width()
    }

    pub fn height(&self) -> f64 {
        self.image.height()
    }

    pub fn size(&self) -> (f64, f64) {
        self.image.size()
    }

    // ==================== ANCHOR ====================

    pub fn anchor(&self) -> (AnchorX, AnchorY) {
        (self.anchor_dx, self.anchor_dy)
    }

    pub fn set_anchor(&mut self, x: impl Into<AnchorX>, y: impl Into<AnchorY>) {
        self.anchor_dx = x.into();
        self.anchor_dy = y.into();
    }

    pub fn set_anchor_point(&mut self, point: AnchorPoint) {
        let (x, y): (AnchorX, AnchorY) = point.into();
        self.set_anchor(x, y);
    }

    /// Set the anchor from one of the nine rectangle anchor names.
    pub fn set_anchor_name(&mut self, name: &str) -> EngineResult<()> {
        self.set_anchor_point(name.parse()?);
        Ok(())
    }

    /// Set the anchor from per-axis keywords such as `("left", "bottom")`.
    pub fn set_anchor_keywords(&mut self, x: &str, y: &str) -> EngineResult<()> {
        let x: AnchorX = x.parse()?;
        let y: AnchorY = y.parse()?;
        self.set_anchor(x, y);
        Ok(())
    }

    /// Pixel offsets from the top-left corner to the anchor, resolved
    /// against the current image size.
    pub fn anchor_offset(&self) -> (f64, f64) {
        let (width, height) = self.size();
        (self.anchor_dx.resolve(width), self.anchor_dy.resolve(height))
    }

    // ==================== POSITION ====================

    pub fn pos(&self) -> (f64, f64) {
        (self.posx, self.posy)
    }

    pub fn set_pos(&mut self, (x, y): (f64, f64)) {
        self.posx = x;
        self.posy = y;
    }

    pub fn x(&self) -> f64 {
        self.posx - self.anchor_offset().0
    }

    pub fn set_x(&mut self, x: f64) {
        self.posx = x + self.anchor_offset().0;
    }

    pub fn y(&self) -> f64 {
        self.posy - self.anchor_offset().1
    }

    pub fn set_y(&mut self, y: f64) {
        self.posy = y + self.anchor_offset().1;
    }

    pub fn top(&self) -> f64 {
        self.y()
    }

    pub fn set_top(&mut self, top: f64) {
        self.set_y(top);
    }

    pub fn left(&self) -> f64 {
        self.x()
    }

    pub fn set_left(&mut self, left: f64) {
        self.set_x(left);
    }

    pub fn right(&self) -> f64 {
        self.x() + self.width()
    }

    pub fn set_right(&mut self, right: f64) {
        self.set_x(right - self.width());
    }

    pub fn bottom(&self) -> f64 {
        self.y() + self.height()
    }

    pub fn set_bottom(&mut self, bottom: f64) {
        self.set_y(bottom - self.height());
    }

    pub fn centerx(&self) -> f64 {
        self.x() + half(self.width())
    }

    pub fn set_centerx(&mut self, centerx: f64) {
        self.set_x(centerx - half(self.width()));
    }

    pub fn centery(&self) -> f64 {
        self.y() + half(self.height())
    }

    pub fn set_centery(&mut self, centery: f64) {
        self.set_y(centery - half(self.height()));
    }

    /// Position of one of the nine reference points of the bounding box.
    pub fn point(&self, point: AnchorPoint) -> (f64, f64) {
        self.rect().anchor(point)
    }

    /// Move the actor so that `point` lands on `(x, y)`.
    pub fn set_point(&mut self, point: AnchorPoint, (x, y): (f64, f64)) {
        let (dx, dy) = point.offset(self.width(), self.height());
        self.set_x(x - dx);
        self.set_y(y - dy);
    }

    pub fn topleft(&self) -> (f64, f64) {
        (self.x(), self.y())
    }

    pub fn set_topleft(&mut self, pos: (f64, f64)) {
        self.set_point(AnchorPoint::TopLeft, pos);
    }

    pub fn center(&self) -> (f64, f64) {
        self.point(AnchorPoint::Center)
    }

    pub fn set_center(&mut self, pos: (f64, f64)) {
        self.set_point(AnchorPoint::Center, pos);
    }

    /// Snapshot of the bounding box.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x(), self.y(), self.width(), self.height())
    }

    // ==================== COLLISION ====================

    pub fn contains(&self, other: impl ToRect) -> bool {
        self.rect().contains(other)
    }

    pub fn collidepoint(&self, x: f64, y: f64) -> bool {
        self.rect().collidepoint(x, y)
    }

    pub fn colliderect(&self, other: impl ToRect) -> bool {
        self.rect().colliderect(other)
    }

    // ==================== TARGETING ====================

    /// Distance and angle (degrees) from the anchor to `target`.
    ///
    /// Screen y grows downward, so a target straight above is at 90 degrees.
    fn vector_to(&self, target: Target<'_>) -> (f64, f64) {
        let (ax, ay) = self.pos();
        let (tx, ty) = target.position();
        let dx = tx - ax;
        let dy = ay - ty;
        (dx.hypot(dy), rad_to_deg(dy.atan2(dx)))
    }

    pub fn angle_to<'a>(&self, target: impl Into<Target<'a>>) -> f64 {
        self.vector_to(target.into()).1
    }

    pub fn distance_to<'a>(&self, target: impl Into<Target<'a>>) -> f64 {
        self.vector_to(target.into()).0
    }
}

impl ToRect for Actor {
    fn to_rect(&self) -> Rect {
        self.rect()
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Actor '{}' pos=({}, {})>", self.name(), self.posx, self.posy)
    }
}

impl Animatable for Actor {
    fn attribute(&self, name: &str) -> Option<AttrValue> {
        let value: AttrValue = match name {
            "x" | "left" => self.x().into(),
            "y" | "top" => self.y().into(),
            "posx" => self.posx.into(),
            "posy" => self.posy.into(),
            "pos" => self.pos().into(),
            "angle" => self.angle.into(),
            "opacity" => self.opacity.into(),
            "right" => self.right().into(),
            "bottom" => self.bottom().into(),
            "centerx" => self.centerx().into(),
            "centery" => self.centery().into(),
            other => self.point(other.parse::<AnchorPoint>().ok()?).into(),
        };
        Some(value)
    }

    fn set_attribute(&mut self, name: &str, value: AttrValue) {
        if let Some(v) = value.as_scalar() {
            match name {
                "x" | "left" => self.set_x(v),
                "y" | "top" => self.set_y(v),
                "posx" => self.posx = v,
                "posy" => self.posy = v,
                "angle" => self.angle = v,
                "opacity" => self.opacity = v,
                "right" => self.set_right(v),
                "bottom" => self.set_bottom(v),
                "centerx" => self.set_centerx(v),
                "centery" => self.set_centery(v),
                _ => {}
            }
        } else if let Some(pair) = value.as_pair() {
            if name == "pos" {
                self.set_pos(pair);
            } else if let Ok(point) = name.parse::<AnchorPoint>() {
                self.set_point(point, pair);
            }
        }
    }
}
