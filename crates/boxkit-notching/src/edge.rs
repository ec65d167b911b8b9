//! Notch sizing for a single panel edge.
//!
//! An [`Edge`] pairs the outer boundary line of a panel side with the
//! panel's own side and adapts the desired notch width to the side's
//! exact length. The adapted count is always odd so the zig-zag path
//! stays symmetric around the center notch.

use boxkit_core::geometry::{Line, Point, Vector};

/// The fewest notches any side may carry.
pub const MINIMUM_NOTCHES_PER_SIDE: usize = 3;

/// Options controlling how one edge is notched.
#[derive(Debug, Clone, Copy)]
pub struct EdgeOptions {
    /// Desired notch width; adapted to the edge length
    pub notch_width: f64,
    /// Material thickness (tab depth)
    pub thickness: f64,
    /// Width of material removed by the cutting beam
    pub kerf: f64,
    /// When true, the center notch of the edge is a protruding tab
    pub center_out: bool,
    /// When true, the edge fills the corner-overlap cubes at its ends
    pub corners: bool,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            notch_width: 10.0,
            thickness: 3.0,
            kerf: 0.0,
            center_out: false,
            corners: false,
        }
    }
}

/// One side of a panel: the inside line (the panel's own boundary) and
/// the outside line (the panel's bounding rectangle), plus the adapted
/// notch geometry derived from them.
#[derive(Debug, Clone)]
pub struct Edge {
    /// Outer boundary line, kerf-adjusted
    pub outside: Line,
    /// Inner boundary line, kerf-adjusted
    pub inside: Line,
    /// Adapted notch width for this edge
    pub notch_width: f64,
    /// Adapted notch count, always odd and >= MINIMUM_NOTCHES_PER_SIDE
    pub notch_count: usize,
    pub thickness: f64,
    pub kerf: f64,
    pub center_out: bool,
    pub corners: bool,
    /// Secondary corner adjustment, forced on by the assembly when a
    /// corner-filled panel has edges that do not all start with a tab.
    /// Preserved from the original algorithm; it has no consumer and
    /// its intent is undocumented.
    pub adjust_corners: bool,
    v1: Vector,
    v2: Vector,
}

impl Edge {
    /// Build an edge and compute its adapted notch width and count.
    ///
    /// When kerf is positive, both lines are first shifted outward by
    /// `kerf / 2` along the per-endpoint direction from the inner point
    /// toward the outer point. The shift leaves the corners themselves
    /// uncompensated; the length gained along the edge is removed again
    /// in the count calculation.
    pub fn new(outside: Line, inside: Line, options: EdgeOptions) -> Self {
        let v1 = outward_direction(&inside.p1, &outside.p1);
        let v2 = outward_direction(&inside.p2, &outside.p2);

        let mut edge = Self {
            outside,
            inside,
            notch_width: options.notch_width,
            notch_count: 0,
            thickness: options.thickness,
            kerf: options.kerf,
            center_out: options.center_out,
            corners: options.corners,
            adjust_corners: false,
            v1,
            v2,
        };
        edge.adjust_for_kerf();
        edge.calculate_notch_width(options.notch_width);
        edge
    }

    fn kerf_applied(&self) -> bool {
        self.kerf > 0.0
    }

    fn adjust_for_kerf(&mut self) {
        if !self.kerf_applied() {
            return;
        }
        let k = self.kerf / 2.0;
        self.inside = Line::new(self.inside.p1 + self.v1 * k, self.inside.p2 + self.v2 * k);
        self.outside = Line::new(self.outside.p1 + self.v1 * k, self.outside.p2 + self.v2 * k);
        // The side length is not corrected for the corner overlap this
        // shift creates; the count calculation subtracts the gained
        // kerf instead.
    }

    fn calculate_notch_width(&mut self, desired: f64) {
        let length = self.effective_length();
        let count = (length / desired).ceil() as usize + 1;
        // integer floor division rounds odd counts down, even counts up
        let count = (count / 2 * 2 + 1).max(MINIMUM_NOTCHES_PER_SIDE);
        self.notch_width = length / count as f64;
        self.notch_count = count;
    }

    /// Inside length with the kerf-induced growth removed.
    pub fn effective_length(&self) -> f64 {
        if self.kerf_applied() {
            self.inside.length() - self.kerf
        } else {
            self.inside.length()
        }
    }

    /// Whether the path for this edge starts (and ends) with an
    /// across-step, given the requested center-notch orientation.
    ///
    /// The number of tabs alternates in a period-4 pattern, so whether
    /// the visually centered notch is a tab depends on `count mod 4`.
    pub fn add_across_line(&self, face_setting: bool) -> bool {
        if self.notch_count % 4 == 1 {
            face_setting
        } else {
            !face_setting
        }
    }

    /// True if the first notch of the edge is a tab sticking out,
    /// false if it is a gap.
    pub fn first_notch_out(&self) -> bool {
        self.add_across_line(self.center_out)
    }
}

/// Component-wise direction from an inner-edge endpoint toward the
/// matching outer-edge endpoint. Each component is +/-1; the two
/// endpoints of an edge are offset independently.
fn outward_direction(inner: &Point, outer: &Point) -> Vector {
    Vector::new((outer.x - inner.x).signum(), (outer.y - inner.y).signum())
}
