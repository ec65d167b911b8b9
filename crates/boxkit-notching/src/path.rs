//! Notched path generation for a single edge.
//!
//! Walks an [`Edge`] from `inside.p1` to `inside.p2`, emitting the
//! alternating tab/gap vertex sequence. The path is symmetric: the
//! across-steps at the start and end mirror each other, so the center
//! notch lands exactly in the middle of the edge.

use boxkit_core::geometry::{Line, Point, Rect, EPSILON};

use crate::edge::Edge;
use crate::shifts::{Axis, Cycle, Shift};

/// The generated cut path of one edge: the zig-zag vertices plus any
/// corner-fill boxes attached at the edge ends.
#[derive(Debug, Clone, Default)]
pub struct NotchedPath {
    pub vertices: Vec<Point>,
    pub corner_boxes: Vec<Rect>,
}

impl NotchedPath {
    /// All cuttable segments: vertex-to-vertex lines followed by the
    /// four sides of each corner box.
    pub fn lines(&self) -> Vec<Line> {
        let mut lines: Vec<Line> = self
            .vertices
            .windows(2)
            .map(|pair| Line::new(pair[0], pair[1]))
            .collect();
        for rect in &self.corner_boxes {
            lines.extend(rect.sides());
        }
        lines
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 2
    }
}

/// Generates the notched path that flows between the outer and inner
/// boundary lines of one edge. The relative location of the two lines
/// defines the walking direction and which way tabs protrude.
pub struct PathGenerator<'a> {
    edge: &'a Edge,
}

impl<'a> PathGenerator<'a> {
    pub fn new(edge: &'a Edge) -> Self {
        Self { edge }
    }

    /// Produce the full path for the edge, starting exactly at
    /// `inside.p1` and ending exactly at `inside.p2`.
    pub fn generate(&self) -> NotchedPath {
        let shifts = self.define_shifts();

        let mut point = self.edge.inside.p1;
        let mut vertices = Vec::with_capacity(shifts.len() + 1);
        vertices.push(point);
        for shift in &shifts {
            point = shift.apply(point);
            vertices.push(point);
        }

        NotchedPath {
            vertices,
            corner_boxes: self.corner_boxes(),
        }
    }

    /// Corner-fill boxes: one thickness-square at each end of the
    /// edge, spanning from the inner corner to the outer corner.
    fn corner_boxes(&self) -> Vec<Rect> {
        if !self.edge.corners {
            return Vec::new();
        }
        vec![
            Rect::new(self.edge.outside.p1, self.edge.inside.p1),
            Rect::new(self.edge.inside.p2, self.edge.outside.p2),
        ]
    }

    /// The list of path deltas applied when walking the edge.
    ///
    /// One along-shift per notch, an across-shift between successive
    /// notches, and - when the center notch orientation asks for it -
    /// one extra across-shift at each end so the path still starts and
    /// ends on the inside line.
    fn define_shifts(&self) -> Vec<Shift> {
        let edge = self.edge;
        let (mut along, mut across) = self.define_shift_cycles();

        let count = edge.notch_count;
        let mut shifts = Vec::with_capacity(2 * count + 1);

        if edge.add_across_line(edge.center_out) {
            shifts.extend(across.next());
        }

        for notch in 1..=count {
            shifts.extend(along.next());
            if notch != count {
                shifts.extend(across.next());
            }
        }

        if edge.add_across_line(edge.center_out) {
            shifts.extend(across.next());
        }

        shifts
    }

    /// Build the two sequencers for the edge: the along cycle repeats
    /// a single notch-width step; the across cycle alternates between
    /// pushing the path toward the outside line and pulling it back.
    fn define_shift_cycles(&self) -> (Cycle<Shift>, Cycle<Shift>) {
        let edge = self.edge;
        let inside = &edge.inside;

        let along_axis = if (inside.p1.x - inside.p2.x).abs() < EPSILON {
            Axis::Y
        } else {
            Axis::X
        };
        let across_axis = along_axis.other();

        let coord = |p: &Point, axis: Axis| match axis {
            Axis::X => p.x,
            Axis::Y => p.y,
        };

        let along_direction = if coord(&inside.p1, along_axis) < coord(&inside.p2, along_axis) {
            1.0
        } else {
            -1.0
        };
        let across_direction =
            if coord(&inside.p1, across_axis) > coord(&edge.outside.p1, across_axis) {
                -1.0
            } else {
                1.0
            };

        (
            Cycle::new(vec![Shift::new(
                edge.notch_width,
                along_direction,
                along_axis,
            )]),
            Cycle::new(vec![
                Shift::new(edge.thickness, across_direction, across_axis),
                Shift::new(edge.thickness, -across_direction, across_axis),
            ]),
        )
    }
}
