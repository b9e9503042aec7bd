//! Pinker Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Pinker parser,
//! layout engine, router, and renderers. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, ranges, areas, lines, and potential points ([`geometry`] module)
//! - **Draw**: Strokes, fonts, text measurement, arrowheads, and the drawing
//!   surface contract ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
