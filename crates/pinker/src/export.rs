//! Output backends for rendered diagrams.
//!
//! A backend is a [`Surface`](pinker_core::draw::Surface) that collects the
//! primitives emitted by the [`Renderer`](crate::render::Renderer) and turns
//! them into a file format. See the [`svg`] module for the built-in SVG
//! backend.

pub mod svg;
