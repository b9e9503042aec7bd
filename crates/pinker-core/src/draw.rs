//! Drawing primitives shared by the layout engine and renderers.
//!
//! - [`Surface`]: the primitive drawing operations a diagram is rendered onto
//! - [`StrokeDefinition`] / [`StrokeStyle`]: how lines are stroked
//! - [`ArrowHeadKind`]: connector end shapes and their geometry
//! - [`Font`] / [`TextMeasure`]: fonts and text measurement

mod arrow;
mod stroke;
mod surface;
mod text;

pub use arrow::{ArrowFill, ArrowHeadKind};
pub use stroke::{LineStyle, StrokeDefinition, StrokeStyle};
pub use surface::Surface;
pub use text::{ApproximateTextMeasure, CosmicTextMeasure, Font, TextMeasure};
