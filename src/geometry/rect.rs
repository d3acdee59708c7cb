//! Axis-aligned rectangle.
//!
//! A [`Rect`] stores `x`, `y`, `width` and `height`. Every other attribute
//! (edges, centers and the nine [`AnchorPoint`]s) is derived from those four
//! fields through accessor methods; setters move the rectangle and never
//! resize it.
//!
//! Center-based attributes use `floor(length / 2)` in both directions, so
//! `set_center(r.center())` is always a no-op even for odd sizes.
//!
//! Width and height may be negative. No method normalizes implicitly; call
//! [`Rect::normalize`] when the canonical form is needed.
//!
//! Methods that take another rectangle accept anything implementing
//! [`ToRect`]: a `Rect`, an `(x, y, w, h)` tuple, `[x, y, w, h]`, a
//! `((x, y), (w, h))` pair or an [`Actor`](crate::components::actor::Actor).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::geometry::numeric::half;

/// One of the nine named reference points of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorPoint {
    TopLeft,
    MidTop,
    TopRight,
    MidLeft,
    Center,
    MidRight,
    BottomLeft,
    MidBottom,
    BottomRight,
}

pub(crate) const ANCHOR_NAMES: &str = "\"topleft\", \"midtop\", \"topright\", \"midleft\", \
\"center\", \"midright\", \"bottomleft\", \"midbottom\", or \"bottomright\"";

impl AnchorPoint {
    pub const ALL: [AnchorPoint; 9] = [
        AnchorPoint::TopLeft,
        AnchorPoint::MidTop,
        AnchorPoint::TopRight,
        AnchorPoint::MidLeft,
        AnchorPoint::Center,
        AnchorPoint::MidRight,
        AnchorPoint::BottomLeft,
        AnchorPoint::MidBottom,
        AnchorPoint::BottomRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AnchorPoint::TopLeft => "topleft",
            AnchorPoint::MidTop => "midtop",
            AnchorPoint::TopRight => "topright",
            AnchorPoint::MidLeft => "midleft",
            AnchorPoint::Center => "center",
            AnchorPoint::MidRight => "midright",
            AnchorPoint::BottomLeft => "bottomleft",
            AnchorPoint::MidBottom => "midbottom",
            AnchorPoint::BottomRight => "bottomright",
        }
    }

    /// Offset of this point from the top-left corner of a `width` x `height` box.
    pub fn offset(self, width: f64, height: f64) -> (f64, f64) {
        let dx = match self {
            AnchorPoint::TopLeft | AnchorPoint::MidLeft | AnchorPoint::BottomLeft => 0.0,
            AnchorPoint::MidTop | AnchorPoint::Center | AnchorPoint::MidBottom => half(width),
            AnchorPoint::TopRight | AnchorPoint::MidRight | AnchorPoint::BottomRight => width,
        };
        let dy = match self {
            AnchorPoint::TopLeft | AnchorPoint::MidTop | AnchorPoint::TopRight => 0.0,
            AnchorPoint::MidLeft | AnchorPoint::Center | AnchorPoint::MidRight => half(height),
            AnchorPoint::BottomLeft | AnchorPoint::MidBottom | AnchorPoint::BottomRight => height,
        };
        (dx, dy)
    }
}

impl FromStr for AnchorPoint {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s.trim().to_lowercase();
        AnchorPoint::ALL
            .into_iter()
            .find(|a| a.name() == cleaned)
            .ok_or_else(|| EngineError::UnknownAnchor {
                name: s.to_string(),
                expected: ANCHOR_NAMES,
            })
    }
}

impl fmt::Display for AnchorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Anything that can be read as a rectangle.
pub trait ToRect {
    fn to_rect(&self) -> Rect;
}

impl ToRect for Rect {
    fn to_rect(&self) -> Rect {
        *self
    }
}

impl<T: ToRect + ?Sized> ToRect for &T {
    fn to_rect(&self) -> Rect {
        (**self).to_rect()
    }
}

impl ToRect for (f64, f64, f64, f64) {
    fn to_rect(&self) -> Rect {
        Rect::from_tuple(*self)
    }
}

impl ToRect for [f64; 4] {
    fn to_rect(&self) -> Rect {
        let [x, y, w, h] = *self;
        Rect::new(x, y, w, h)
    }
}

impl ToRect for ((f64, f64), (f64, f64)) {
    fn to_rect(&self) -> Rect {
        Rect::from_pos_size(self.0, self.1)
    }
}

impl From<(f64, f64, f64, f64)> for Rect {
    fn from(t: (f64, f64, f64, f64)) -> Self {
        Rect::from_tuple(t)
    }
}

impl From<[f64; 4]> for Rect {
    fn from(a: [f64; 4]) -> Self {
        a.to_rect()
    }
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_pos_size((x, y): (f64, f64), (width, height): (f64, f64)) -> Self {
        Self::new(x, y, width, height)
    }

    pub fn from_tuple((x, y, width, height): (f64, f64, f64, f64)) -> Self {
        Self::new(x, y, width, height)
    }

    /// Copy the geometry of any rect-like value.
    pub fn from_like(like: &impl ToRect) -> Self {
        like.to_rect()
    }

    // ---- edges ----

    pub fn top(&self) -> f64 {
        self.y
    }
    pub fn set_top(&mut self, top: f64) {
        self.y = top;
    }
    pub fn left(&self) -> f64 {
        self.x
    }
    pub fn set_left(&mut self, left: f64) {
        self.x = left;
    }
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
    pub fn set_right(&mut self, right: f64) {
        self.x = right - self.width;
    }
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
    pub fn set_bottom(&mut self, bottom: f64) {
        self.y = bottom - self.height;
    }
    pub fn centerx(&self) -> f64 {
        self.x + half(self.width)
    }
    pub fn set_centerx(&mut self, centerx: f64) {
        self.x = centerx - half(self.width);
    }
    pub fn centery(&self) -> f64 {
        self.y + half(self.height)
    }
    pub fn set_centery(&mut self, centery: f64) {
        self.y = centery - half(self.height);
    }

    // ---- anchor points ----

    /// Position of a named anchor point.
    pub fn anchor(&self, point: AnchorPoint) -> (f64, f64) {
        let (dx, dy) = point.offset(self.width, self.height);
        (self.x + dx, self.y + dy)
    }

    /// Move the rect so that `point` lands on `pos`.
    pub fn set_anchor(&mut self, point: AnchorPoint, (x, y): (f64, f64)) {
        let (dx, dy) = point.offset(self.width, self.height);
        self.x = x - dx;
        self.y = y - dy;
    }

    pub fn topleft(&self) -> (f64, f64) {
        self.anchor(AnchorPoint::TopLeft)
    }
    pub fn set_topleft(&mut self, pos: (f64, f64)) {
        self.set_anchor(AnchorPoint::TopLeft, pos);
    }
    pub fn topright(&self) -> (f64, f64) {
        self.anchor(AnchorPoint::TopRight)
    }
    pub fn set_topright(&mut self, pos: (f64, f64)) {
        self.set_anchor(AnchorPoint::TopRight, pos);
    }
    pub fn bottomleft(&self) -> (f64, f64) {
        self.anchor(AnchorPoint::BottomLeft)
    }
    pub fn set_bottomleft(&mut self, pos: (f64, f64)) {
        self.set_anchor(AnchorPoint::BottomLeft, pos);
    }
    pub fn bottomright(&self) -> (f64, f64) {
        self.anchor(AnchorPoint::BottomRight)
    }
    pub fn set_bottomright(&mut self, pos: (f64, f64)) {
        self.set_anchor(AnchorPoint::BottomRight, pos);
    }
    pub fn midtop(&self) -> (f64, f64) {
        self.anchor(AnchorPoint::MidTop)
    }
    pub fn set_midtop(&mut self, pos: (f64, f64)) {
        self.set_anchor(AnchorPoint::MidTop, pos);
    }
    pub fn midleft(&self) -> (f64, f64) {
        self.anchor(AnchorPoint::MidLeft)
    }
    pub fn set_midleft(&mut self, pos: (f64, f64)) {
        self.set_anchor(AnchorPoint::MidLeft, pos);
    }
    pub fn midbottom(&self) -> (f64, f64) {
        self.anchor(AnchorPoint::MidBottom)
    }
    pub fn set_midbottom(&mut self, pos: (f64, f64)) {
        self.set_anchor(AnchorPoint::MidBottom, pos);
    }
    pub fn midright(&self) -> (f64, f64) {
        self.anchor(AnchorPoint::MidRight)
    }
    pub fn set_midright(&mut self, pos: (f64, f64)) {
        self.set_anchor(AnchorPoint::MidRight, pos);
    }
    pub fn center(&self) -> (f64, f64) {
        self.anchor(AnchorPoint::Center)
    }
    pub fn set_center(&mut self, pos: (f64, f64)) {
        self.set_anchor(AnchorPoint::Center, pos);
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
    pub fn set_size(&mut self, (width, height): (f64, f64)) {
        self.width = width;
        self.height = height;
    }

    // ---- movement and resizing ----

    /// Copy moved by `(dx, dy)`.
    pub fn moved(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    pub fn move_ip(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Copy grown by `(dx, dy)` around its center.
    pub fn inflate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(
            self.x - half(dx),
            self.y - half(dy),
            self.width + dx,
            self.height + dy,
        )
    }

    pub fn inflate_ip(&mut self, dx: f64, dy: f64) {
        *self = self.inflate(dx, dy);
    }

    /// Copy moved inside `other`.
    ///
    /// On an axis where this rect is at least as large as `other`, it is
    /// centered over `other` instead.
    pub fn clamp(&self, other: impl ToRect) -> Rect {
        let r = other.to_rect();

        let x = if self.width >= r.width {
            r.x + half(r.width) - half(self.width)
        } else if self.x < r.x {
            r.x
        } else if self.right() > r.right() {
            r.right() - self.width
        } else {
            self.x
        };

        let y = if self.height >= r.height {
            r.y + half(r.height) - half(self.height)
        } else if self.y < r.y {
            r.y
        } else if self.bottom() > r.bottom() {
            r.bottom() - self.height
        } else {
            self.y
        };

        Rect::new(x, y, self.width, self.height)
    }

    pub fn clamp_ip(&mut self, other: impl ToRect) {
        *self = self.clamp(other);
    }

    /// Intersection of the two rects.
    ///
    /// Without overlap the result is a zero-sized rect at this rect's origin.
    pub fn clip(&self, other: impl ToRect) -> Rect {
        let r = other.to_rect();
        let empty = Rect::new(self.x, self.y, 0.0, 0.0);

        let Some((x, width)) = clip_axis(self.x, self.width, r.x, r.width) else {
            return empty;
        };
        let Some((y, height)) = clip_axis(self.y, self.height, r.y, r.height) else {
            return empty;
        };
        Rect::new(x, y, width, height)
    }

    pub fn clip_ip(&mut self, other: impl ToRect) {
        *self = self.clip(other);
    }

    /// Smallest rect covering both.
    pub fn union(&self, other: impl ToRect) -> Rect {
        let r = other.to_rect();
        let x = self.x.min(r.x);
        let y = self.y.min(r.y);
        let right = self.right().max(r.right());
        let bottom = self.bottom().max(r.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    pub fn union_ip(&mut self, other: impl ToRect) {
        *self = self.union(other);
    }

    /// Smallest rect covering this one and every rect in `others`.
    pub fn unionall<I>(&self, others: I) -> Rect
    where
        I: IntoIterator,
        I::Item: ToRect,
    {
        others
            .into_iter()
            .fold(*self, |acc, other| acc.union(other))
    }

    pub fn unionall_ip<I>(&mut self, others: I)
    where
        I: IntoIterator,
        I::Item: ToRect,
    {
        *self = self.unionall(others);
    }

    /// Scale down to fit inside `other`, keeping the aspect ratio, then center.
    ///
    /// A rect that already fits keeps its size.
    pub fn fit(&self, other: impl ToRect) -> Rect {
        let r = other.to_rect();
        let ratio = (self.width / r.width)
            .max(self.height / r.height)
            .max(1.0);
        let width = (self.width / ratio).floor();
        let height = (self.height / ratio).floor();
        Rect::new(
            r.x + half(r.width - width),
            r.y + half(r.height - height),
            width,
            height,
        )
    }

    /// Flip negative sizes so width and height become non-negative.
    pub fn normalize(&mut self) {
        if self.width < 0.0 {
            self.x += self.width;
            self.width = -self.width;
        }
        if self.height < 0.0 {
            self.y += self.height;
            self.height = -self.height;
        }
    }

    // ---- collision ----

    /// True when `other` lies fully inside this rect. Touching the trailing
    /// edge counts, but this rect needs a positive overlap with `other`.
    pub fn contains(&self, other: impl ToRect) -> bool {
        let r = other.to_rect();
        self.x <= r.x
            && self.y <= r.y
            && self.right() >= r.right()
            && self.bottom() >= r.bottom()
            && self.right() > r.x
            && self.bottom() > r.y
    }

    /// Point test; the right and bottom edges are outside.
    pub fn collidepoint(&self, x: f64, y: f64) -> bool {
        self.x <= x && x < self.right() && self.y <= y && y < self.bottom()
    }

    /// Overlap test. A rect with zero width or height collides with nothing.
    pub fn colliderect(&self, other: impl ToRect) -> bool {
        let r = other.to_rect();
        if self.width == 0.0 || self.height == 0.0 || r.width == 0.0 || r.height == 0.0 {
            return false;
        }
        self.x < r.right() && self.y < r.bottom() && self.right() > r.x && self.bottom() > r.y
    }

    /// Index of the first colliding rect.
    pub fn collidelist<I>(&self, others: I) -> Option<usize>
    where
        I: IntoIterator,
        I::Item: ToRect,
    {
        others.into_iter().position(|r| self.colliderect(r))
    }

    /// Indices of every colliding rect, in input order.
    pub fn collidelistall<I>(&self, others: I) -> Vec<usize>
    where
        I: IntoIterator,
        I::Item: ToRect,
    {
        others
            .into_iter()
            .enumerate()
            .filter(|(_, r)| self.colliderect(r))
            .map(|(i, _)| i)
            .collect()
    }

    /// First `(key, value)` pair whose value collides.
    pub fn collidedict<K, V, I>(&self, items: I) -> Option<(K, V)>
    where
        I: IntoIterator<Item = (K, V)>,
        V: ToRect,
    {
        items.into_iter().find(|(_, v)| self.colliderect(v))
    }

    /// Every `(key, value)` pair whose value collides, in iteration order.
    pub fn collidedictall<K, V, I>(&self, items: I) -> Vec<(K, V)>
    where
        I: IntoIterator<Item = (K, V)>,
        V: ToRect,
    {
        items
            .into_iter()
            .filter(|(_, v)| self.colliderect(v))
            .collect()
    }

    /// First `(key, value)` pair whose key collides.
    pub fn collidedict_keys<K, V, I>(&self, items: I) -> Option<(K, V)>
    where
        I: IntoIterator<Item = (K, V)>,
        K: ToRect,
    {
        items.into_iter().find(|(k, _)| self.colliderect(k))
    }

    /// Every `(key, value)` pair whose key collides, in iteration order.
    pub fn collidedictall_keys<K, V, I>(&self, items: I) -> Vec<(K, V)>
    where
        I: IntoIterator<Item = (K, V)>,
        K: ToRect,
    {
        items
            .into_iter()
            .filter(|(k, _)| self.colliderect(k))
            .collect()
    }

    /// Parse a named anchor and return its position.
    pub fn anchor_by_name(&self, name: &str) -> EngineResult<(f64, f64)> {
        Ok(self.anchor(name.parse()?))
    }
}

/// Overlap of `[a, a + a_len)` and `[b, b + b_len)` as `(start, length)`.
fn clip_axis(a: f64, a_len: f64, b: f64, b_len: f64) -> Option<(f64, f64)> {
    let a_end = a + a_len;
    let b_end = b + b_len;

    let start = if a >= b && a < b_end {
        a
    } else if b >= a && b < a_end {
        b
    } else {
        return None;
    };

    let length = if a_end > b && a_end <= b_end {
        a_end - start
    } else if b_end > a && b_end <= a_end {
        b_end - start
    } else {
        return None;
    };

    if length <= 0.0 {
        return None;
    }
    Some((start, length))
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{x: {}, y: {}, width: {}, height: {}}}",
            self.x, self.y, self.width, self.height
        )
    }
}
