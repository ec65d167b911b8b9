//! 2D geometry value types for panel layout and notch path generation.
//!
//! Points and vectors come from `nalgebra`; this module adds the thin
//! `Line` and `Rect` value types the notching pipeline works with.
//! Everything lives in 2D drafting space with y growing downward.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// 2D coordinate, immutable value.
pub type Point = Point2<f64>;

/// 2D direction, used for kerf offset application.
pub type Vector = Vector2<f64>;

/// Tolerance used for geometric comparisons (mm).
pub const EPSILON: f64 = 1e-6;

/// Returns true when two points coincide within [`EPSILON`].
pub fn points_coincide(a: &Point, b: &Point) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

/// An ordered pair of points.
///
/// The endpoint order carries the walking direction of an edge; two
/// lines are considered the same cut when their [`Line::normalized`]
/// forms match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Euclidean length of the segment.
    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).norm()
    }

    /// The same segment with endpoints in lexicographic order
    /// (smallest x first, then smallest y), so that direction no
    /// longer matters for equality checks.
    pub fn normalized(&self) -> Line {
        let flip = match self.p1.x.partial_cmp(&self.p2.x) {
            Some(std::cmp::Ordering::Greater) => true,
            Some(std::cmp::Ordering::Equal) => self.p1.y > self.p2.y,
            _ => false,
        };
        if flip {
            Line::new(self.p2, self.p1)
        } else {
            *self
        }
    }

    /// True when the normalized endpoint pairs of both segments match
    /// within [`EPSILON`].
    pub fn coincides_with(&self, other: &Line) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        points_coincide(&a.p1, &b.p1) && points_coincide(&a.p2, &b.p2)
    }

    /// True when both endpoints share a y coordinate.
    pub fn is_horizontal(&self) -> bool {
        (self.p1.y - self.p2.y).abs() < EPSILON
    }

    /// True when both endpoints share an x coordinate.
    pub fn is_vertical(&self) -> bool {
        (self.p1.x - self.p2.x).abs() < EPSILON
    }
}

/// Axis-aligned rectangle, stored as its min/max corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Build a rectangle from any two opposite corners.
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Build a rectangle from its top-left position and size.
    pub fn from_position(position: Point, width: f64, height: f64) -> Self {
        Self::new(position, Point::new(position.x + width, position.y + height))
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        self.min
    }

    /// The rectangle grown by `margin` on every side.
    pub fn expanded(&self, margin: f64) -> Rect {
        Rect {
            min: Point::new(self.min.x - margin, self.min.y - margin),
            max: Point::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// True when `p` lies inside the rectangle or on its boundary,
    /// within [`EPSILON`].
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.min.x - EPSILON
            && p.x <= self.max.x + EPSILON
            && p.y >= self.min.y - EPSILON
            && p.y <= self.max.y + EPSILON
    }

    /// The four sides in the fixed order `[top, right, bottom, left]`.
    ///
    /// Even indices are horizontal, odd indices vertical. Every side
    /// runs left-to-right or top-to-bottom, so that side `i` of a
    /// panel and side `i` of its bounding rectangle walk the same
    /// direction.
    pub fn sides(&self) -> [Line; 4] {
        let top_right = Point::new(self.max.x, self.min.y);
        let bottom_left = Point::new(self.min.x, self.max.y);
        [
            Line::new(self.min, top_right),
            Line::new(top_right, self.max),
            Line::new(bottom_left, self.max),
            Line::new(self.min, bottom_left),
        ]
    }
}
