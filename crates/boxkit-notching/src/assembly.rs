//! Whole-box panel assembly.
//!
//! Lays the six panels of a box out in 2D drafting space using the
//! net-unfolding pattern (top/bottom/front/back stacked in one column,
//! left/right flanking the front), picks which panel axis fills the
//! corner-overlap cubes, and generates the notched cut lines for every
//! face.
//!
//! ```text
//!               +-----------------+
//!               | back:     W x H |
//!               +-----------------+
//!               +-----------------+
//!               | bottom:   W x D |
//!               +-----------------+
//!   +--------+  +-----------------+  +--------+
//!   | left   |  | front:    W x H |  | right  |
//!   | D x H  |  |                 |  | D x H  |
//!   +--------+  +-----------------+  +--------+
//!               +-----------------+
//!               | top:      W x D |
//!               +-----------------+
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use boxkit_core::config::BoxConfig;
use boxkit_core::error::Result;
use boxkit_core::geometry::{Line, Point, Rect};

use crate::aggregator;
use crate::edge::{Edge, EdgeOptions};
use crate::layout::{self, CornerStrategy, Face};
use crate::path::PathGenerator;

/// One positioned panel of the box.
#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    pub face: Face,
    pub rect: Rect,
}

impl Panel {
    /// The rectangle the panel's tabs may protrude into: the panel
    /// grown by one material thickness on every side.
    pub fn bounding_rect(&self, thickness: f64) -> Rect {
        self.rect.expanded(thickness)
    }
}

/// The finished, immutable result of box construction: positioned
/// panels, the committed per-face cut lines, and the enclosure of the
/// whole layout.
#[derive(Debug, Clone, Serialize)]
pub struct BoxLayout {
    pub panels: Vec<Panel>,
    pub faces: BTreeMap<Face, Vec<Line>>,
    pub enclosure: Rect,
    pub corner_strategy: CornerStrategy,
}

impl BoxLayout {
    /// The committed cut lines of one face.
    pub fn lines(&self, face: Face) -> &[Line] {
        self.faces.get(&face).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Builds a [`BoxLayout`] from a validated configuration.
///
/// Construction runs exactly once: [`BoxMaker::generate`] consumes the
/// maker, so a second invocation on the same box cannot be expressed.
pub struct BoxMaker {
    config: BoxConfig,
}

impl BoxMaker {
    /// Validate the configuration and normalize it to millimeters.
    pub fn new(config: BoxConfig) -> Result<Self> {
        let config = config.normalized()?;
        Ok(Self { config })
    }

    /// The normalized configuration the layout will be built from.
    pub fn config(&self) -> &BoxConfig {
        &self.config
    }

    /// Construct the box: position panels, pick the corner strategy,
    /// generate and aggregate the notched lines of every face, and
    /// compute the enclosure.
    pub fn generate(self) -> Result<BoxLayout> {
        let panels = self.position_panels();
        debug!(
            "positioned {} panels, padding {} thickness {}",
            panels.len(),
            self.config.padding,
            self.config.thickness
        );

        let corner_strategy = self.pick_corner_strategy(&panels);
        info!("corner fill strategy: {:?}", corner_strategy);

        let mut faces = BTreeMap::new();
        for panel in &panels {
            let lines = self.generate_face_lines(panel, corner_strategy);
            debug!("face {}: {} cut lines", panel.face, lines.len());
            faces.insert(panel.face, lines);
        }

        let enclosure = aggregator::enclosure(&faces)?;

        Ok(BoxLayout {
            panels,
            faces,
            enclosure,
            corner_strategy,
        })
    }

    fn panel_size(&self, face: Face) -> (f64, f64) {
        let c = &self.config;
        match face {
            Face::Front | Face::Back => (c.width, c.height),
            Face::Top | Face::Bottom => (c.width, c.depth),
            Face::Left | Face::Right => (c.depth, c.height),
        }
    }

    /// Tile the panels so that no two overlap and every pair of
    /// neighbors sits `2 * thickness + padding` apart, leaving room
    /// for the assembled tabs of both.
    fn position_panels(&self) -> Vec<Panel> {
        let c = &self.config;
        let gap = 2.0 * c.thickness + c.padding;
        let offset_x = c.padding + c.depth + 3.0 * c.thickness;
        let offset_y = c.padding + c.depth + 3.0 * c.thickness;

        let bottom_y = offset_y + c.height + gap;
        let position = |face: Face| match face {
            Face::Front => Point::new(offset_x, offset_y),
            Face::Top => Point::new(offset_x, offset_y - c.depth - gap),
            Face::Bottom => Point::new(offset_x, bottom_y),
            Face::Back => Point::new(offset_x, bottom_y + c.depth + gap),
            Face::Left => Point::new(offset_x - c.depth - gap, offset_y),
            Face::Right => Point::new(offset_x + c.width + gap, offset_y),
        };

        Face::ORDER
            .into_iter()
            .map(|face| {
                let (width, height) = self.panel_size(face);
                Panel {
                    face,
                    rect: Rect::from_position(position(face), width, height),
                }
            })
            .collect()
    }

    /// Choose which face pair fills the corner-overlap cubes.
    ///
    /// The front panel's four edges are measured first: when every one
    /// lands on `notch_count % 4 == 3` the front-keyed table works and
    /// front/back carry the corners; otherwise the top-keyed fallback
    /// is used.
    fn pick_corner_strategy(&self, panels: &[Panel]) -> CornerStrategy {
        let c = &self.config;
        let front = &panels[Face::Front.index()];
        let bound = front.bounding_rect(c.thickness);

        let all_align = bound
            .sides()
            .into_iter()
            .zip(front.rect.sides())
            .all(|(outside, inside)| {
                let edge = Edge::new(
                    outside,
                    inside,
                    EdgeOptions {
                        notch_width: c.notch_width,
                        thickness: c.thickness,
                        kerf: c.kerf,
                        center_out: c.center_out,
                        corners: false,
                    },
                );
                edge.notch_count % 4 == 3
            });

        if all_align {
            CornerStrategy::Front
        } else {
            CornerStrategy::Top
        }
    }

    /// Create the four edges of one panel, generate their notched
    /// paths, and reduce the collected lines to the committed set.
    fn generate_face_lines(&self, panel: &Panel, strategy: CornerStrategy) -> Vec<Line> {
        let c = &self.config;
        let bound = panel.bounding_rect(c.thickness);
        let face_fills_corners = layout::fills_corners(strategy, panel.face);

        let mut edges: Vec<Edge> = bound
            .sides()
            .into_iter()
            .zip(panel.rect.sides())
            .enumerate()
            .map(|(side_index, (outside, inside))| {
                Edge::new(
                    outside,
                    inside,
                    EdgeOptions {
                        notch_width: c.notch_width,
                        thickness: c.thickness,
                        kerf: c.kerf,
                        center_out: layout::center_out(panel.face, side_index),
                        corners: face_fills_corners && side_index % 2 == 1,
                    },
                )
            })
            .collect();

        // Preserved from the original algorithm: when a corner-filled
        // panel has edges that do not all start with a tab, every edge
        // is marked for corner adjustment. The flag has no consumer.
        if edges.iter().any(|e| e.corners) && !edges.iter().all(|e| e.first_notch_out()) {
            for edge in &mut edges {
                edge.adjust_corners = true;
            }
        }

        let mut lines = Vec::new();
        for edge in &edges {
            lines.extend(PathGenerator::new(edge).generate().lines());
        }
        aggregator::reduce(lines)
    }
}
