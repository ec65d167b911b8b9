//! Static face layout tables.
//!
//! The tables encode, per face and side, whether the center notch is a
//! tab or a gap, and which faces fill the corner-overlap cubes. Two
//! corner strategies exist; exactly one is chosen per box, and each
//! strategy flags exactly two parallel faces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six faces of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Top,
    Front,
    Bottom,
    Back,
    Left,
    Right,
}

impl Face {
    /// The fixed construction order the layout tables are indexed by.
    pub const ORDER: [Face; 6] = [
        Face::Top,
        Face::Front,
        Face::Bottom,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    /// Position of this face in [`Face::ORDER`].
    pub fn index(self) -> usize {
        match self {
            Face::Top => 0,
            Face::Front => 1,
            Face::Bottom => 2,
            Face::Back => 3,
            Face::Left => 4,
            Face::Right => 5,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Face::Top => "top",
            Face::Front => "front",
            Face::Bottom => "bottom",
            Face::Back => "back",
            Face::Left => "left",
            Face::Right => "right",
        };
        write!(f, "{}", name)
    }
}

/// Which pair of parallel faces fills the corner-overlap cubes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerStrategy {
    /// Front and back panels carry the corner fill (default choice).
    Front,
    /// Top and bottom panels carry the corner fill (fallback).
    Top,
}

/// Center notch orientation per face, one row per side orientation.
const CENTER_NOTCH_VERTICAL: [bool; 6] = [true, true, true, true, false, false];
const CENTER_NOTCH_HORIZONTAL: [bool; 6] = [false, true, false, true, false, false];

/// Corner-fill flags per face, one row per strategy. Only two of the
/// six faces are flagged in either row.
const CORNERS_FRONT: [bool; 6] = [false, true, false, true, false, false];
const CORNERS_TOP: [bool; 6] = [true, false, true, false, false, false];

/// Whether the center notch on the given side of `face` protrudes.
///
/// Odd side indices are the vertical sides of a panel, even indices
/// the horizontal ones; the two orientations use separate table rows.
pub fn center_out(face: Face, side_index: usize) -> bool {
    let row = if side_index % 2 == 1 {
        &CENTER_NOTCH_VERTICAL
    } else {
        &CENTER_NOTCH_HORIZONTAL
    };
    row[face.index()]
}

/// Whether `face` carries the corner fill under the given strategy.
pub fn fills_corners(strategy: CornerStrategy, face: Face) -> bool {
    let row = match strategy {
        CornerStrategy::Front => &CORNERS_FRONT,
        CornerStrategy::Top => &CORNERS_TOP,
    };
    row[face.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_strategy_flags_exactly_two_faces() {
        for strategy in [CornerStrategy::Front, CornerStrategy::Top] {
            let flagged: Vec<Face> = Face::ORDER
                .into_iter()
                .filter(|f| fills_corners(strategy, *f))
                .collect();
            assert_eq!(flagged.len(), 2, "{:?}", strategy);
        }
        assert!(fills_corners(CornerStrategy::Front, Face::Front));
        assert!(fills_corners(CornerStrategy::Front, Face::Back));
        assert!(fills_corners(CornerStrategy::Top, Face::Top));
        assert!(fills_corners(CornerStrategy::Top, Face::Bottom));
    }

    #[test]
    fn test_center_notch_rows() {
        // side panels never center-out
        for side in 0..4 {
            assert!(!center_out(Face::Left, side));
            assert!(!center_out(Face::Right, side));
        }
        // front protrudes on every side, top only on vertical sides
        for side in 0..4 {
            assert!(center_out(Face::Front, side));
        }
        assert!(!center_out(Face::Top, 0));
        assert!(center_out(Face::Top, 1));
        assert!(!center_out(Face::Top, 2));
        assert!(center_out(Face::Top, 3));
    }

    #[test]
    fn test_face_order_round_trip() {
        for (i, face) in Face::ORDER.into_iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn test_face_serializes_lowercase() {
        let json = serde_json::to_string(&Face::Front).expect("serialize");
        assert_eq!(json, "\"front\"");
    }
}
