//! Geometric primitives for diagram layout and connector routing.
//!
//! This module provides the fundamental geometric types used throughout Pinker
//! for calculating positions, sizes, and areas of boxes, and for routing the
//! connectors between them.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Insets`] - Padding values for four sides
//! - [`Range`] - A closed numeric interval on one axis
//! - [`Area`] - A rectangle with independent padding per side
//! - [`Line`] - A straight segment between two points
//! - [`PotentialPoint`] - A waypoint whose coordinates are constrained to ranges
//!
//! # Coordinate System
//!
//! Pinker uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

mod area;
mod line;
mod point;
mod potential;
mod range;

pub use area::Area;
pub use line::Line;
pub use point::{Insets, Point, Size};
pub use potential::PotentialPoint;
pub use range::Range;
