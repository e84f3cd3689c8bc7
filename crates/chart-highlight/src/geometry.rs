// File: crates/chart-highlight/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (points, content rects, polar helpers).

use crate::types::{Insets, FULL_CIRCLE};

/// A position in pixel space (or a data-space pair, depending on context).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned rectangle in pixels, `top < bottom` in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    /// Content area of a `width` x `height` surface after removing `insets`.
    pub fn content(width: u32, height: u32, insets: &Insets) -> Self {
        Self::from_ltrb(
            insets.left as f64,
            insets.top as f64,
            width as f64 - insets.right as f64,
            height as f64 - insets.bottom as f64,
        )
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
    /// True when the rect has no area or a non-finite edge.
    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalized_angle(angle: f64) -> f64 {
    let a = angle % FULL_CIRCLE;
    if a < 0.0 { a + FULL_CIRCLE } else { a }
}

/// Point at `dist` pixels from `center` along `angle` degrees
/// (0 = east, clockwise in screen space).
pub fn polar_position(center: Point, dist: f64, angle: f64) -> Point {
    let r = angle.to_radians();
    Point::new(center.x + dist * r.cos(), center.y + dist * r.sin())
}

/// Bearing of `p` as seen from `center`, in degrees within `[0, 360]`,
/// using the same convention as [`polar_position`]. The center itself maps to 0.
pub fn angle_for_point(center: Point, p: Point) -> f64 {
    let tx = p.x - center.x;
    let ty = p.y - center.y;
    let length = tx.hypot(ty);
    if length == 0.0 {
        return 0.0;
    }
    let mut angle = (ty / length).acos().to_degrees();
    if p.x > center.x {
        angle = FULL_CIRCLE - angle;
    }
    // acos measures from south; shift so 0 is east
    angle += 90.0;
    if angle > FULL_CIRCLE {
        angle -= FULL_CIRCLE;
    }
    angle
}
