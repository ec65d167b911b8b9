//! Positional deltas ("shifts") and the cyclic sequencer that feeds
//! them to the path generator.
//!
//! A notched path is walked as a flat list of shifts: one along-edge
//! step per notch, interleaved with across-edge steps that push the
//! path out to a tab or pull it back to a gap.

use boxkit_core::geometry::Point;

/// Coordinate a shift applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The perpendicular coordinate.
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

/// A single movement from one path vertex to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shift {
    /// Distance moved
    pub delta: f64,
    /// +1.0 or -1.0
    pub direction: f64,
    /// Coordinate the movement applies to
    pub axis: Axis,
}

impl Shift {
    pub fn new(delta: f64, direction: f64, axis: Axis) -> Self {
        Self {
            delta,
            direction,
            axis,
        }
    }

    /// The next vertex after applying this shift to `point`.
    pub fn apply(&self, point: Point) -> Point {
        let mut next = point;
        next[self.axis.index()] += self.delta * self.direction;
        next
    }
}

/// Cyclic iterator over a fixed list: returns entries in order and
/// wraps back to the first after the last, forever.
///
/// A single-entry cycle degenerates to repeating the same value; a
/// two-entry cycle alternates, which is exactly the tab-out / gap-in
/// rhythm of an across sequencer.
#[derive(Debug, Clone)]
pub struct Cycle<T> {
    items: Vec<T>,
    index: usize,
}

impl<T: Clone> Cycle<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }
}

impl<T: Clone> Iterator for Cycle<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.index % self.items.len().max(1))?.clone();
        self.index += 1;
        Some(item)
    }
}
