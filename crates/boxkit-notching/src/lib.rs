//! # BoxKit Notching
//!
//! Generates the interlocking tab ("notch") cut paths for laser-cut
//! boxes: six flat panels whose edges zig-zag between protruding tabs
//! and recessed gaps so that panels meeting at a right angle snap
//! together without play.
//!
//! ## Pipeline
//!
//! - **Edge**: adapts the desired notch width to a side's exact length,
//!   guaranteeing an odd notch count and a minimum per side
//! - **Shifts**: the cyclic along/across step sequencers
//! - **PathGenerator**: walks an edge producing the tab/gap vertex
//!   sequence and the corner-fill boxes
//! - **Assembly**: tiles the six panels, picks the corner-fill axis,
//!   and generates every face
//! - **Aggregator**: dedups, de-overlaps, and sorts the committed
//!   cut lines, and computes the layout enclosure
//!
//! Configuration parsing and vector-file export are the callers'
//! concern; this crate consumes a validated [`boxkit_core::BoxConfig`]
//! and produces plain line lists.

pub mod aggregator;
pub mod assembly;
pub mod edge;
pub mod layout;
pub mod path;
pub mod shifts;

pub use assembly::{BoxLayout, BoxMaker, Panel};
pub use edge::{Edge, EdgeOptions, MINIMUM_NOTCHES_PER_SIDE};
pub use layout::{CornerStrategy, Face};
pub use path::{NotchedPath, PathGenerator};
pub use shifts::{Axis, Cycle, Shift};
