//! Pinker - nested box-and-arrow diagrams from plain-text sections.
//!
//! Parsing, layout, routing and rendering for the Pinker diagram language.
//! A document lists boxes in `layout:` rows, gives them text in `define:`
//! sections and connects them in `relate:` sections; scopes nest boxes
//! inside boxes.
//!
//! # Pipeline
//!
//! 1. [`parser`] - text to a scope tree plus diagnostics
//! 2. [`layout`] - scope tree to positioned boxes
//! 3. [`route`] - relate records to connector paths
//! 4. [`render`] - boxes and connectors to drawing primitives on a
//!    [`Surface`](draw::Surface), such as the [`export::svg`] backend
//!
//! Diagnostics never stop the pipeline; a diagram is always drawn.

pub mod config;
pub mod error;
pub mod export;
pub mod layout;
pub mod render;
pub mod route;

pub use pinker_core::{color, draw, geometry};
pub use pinker_parser as parser;

pub use error::PinkerError;

use log::{debug, error, info, warn};

use pinker_core::draw::{CosmicTextMeasure, TextMeasure};
use pinker_parser::{Document, error::Diagnostic};

use config::AppConfig;
use export::svg::SvgSurface;
use layout::{LayoutEngine, NodeTree};
use render::{RenderStyle, Renderer};
use route::{Connector, Router};

/// Version of the Pinker library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A laid-out diagram: boxes, connectors, and every diagnostic collected
/// while producing them.
#[derive(Debug, Clone)]
pub struct Diagram {
    nodes: NodeTree,
    connectors: Vec<Connector>,
    diagnostics: Vec<Diagnostic>,
}

impl Diagram {
    pub fn nodes(&self) -> &NodeTree {
        &self.nodes
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Parse diagnostics followed by routing diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if any diagnostic has error severity.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity().is_error())
    }
}

/// Builder for parsing and rendering Pinker diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use pinker::{DiagramBuilder, config::AppConfig};
///
/// let source = "layout:\n[Client] [Server]\nrelate:\n[Client] -> [Server]\n";
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let diagram = builder.build(source).expect("Failed to build diagram");
/// let svg = builder.render_svg(&diagram).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug)]
pub struct DiagramBuilder<M = CosmicTextMeasure> {
    config: AppConfig,
    measure: M,
    strict: bool,
}

impl Default for DiagramBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl DiagramBuilder {
    /// Create a new diagram builder that measures text with cosmic-text.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            measure: CosmicTextMeasure,
            strict: false,
        }
    }
}

impl<M: TextMeasure> DiagramBuilder<M> {
    /// Replaces the text measurer.
    ///
    /// ```
    /// use pinker::{DiagramBuilder, draw::ApproximateTextMeasure};
    ///
    /// let builder = DiagramBuilder::default().with_text_measure(ApproximateTextMeasure);
    /// let diagram = builder.build("layout:\n[A] [B]\n").unwrap();
    /// assert_eq!(diagram.nodes().len(), 2);
    /// ```
    pub fn with_text_measure<N: TextMeasure>(self, measure: N) -> DiagramBuilder<N> {
        DiagramBuilder {
            config: self.config,
            measure,
            strict: self.strict,
        }
    }

    /// Makes [`DiagramBuilder::build`] fail when any error diagnostic is found.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source text into a [`Document`].
    pub fn parse(&self, source: &str) -> Document {
        info!(source_len = source.len(); "Parsing diagram");
        let document = pinker_parser::parse(source);
        debug!(
            sources_len = document.tree().len(),
            diagnostics_len = document.diagnostics().len();
            "Diagram parsed",
        );
        document
    }

    /// Lay out and route a parsed document.
    ///
    /// Every diagnostic is logged; none of them stops the layout.
    pub fn layout(&self, document: &Document) -> Diagram {
        info!("Computing layout");
        let engine = LayoutEngine::new(self.config.layout(), &self.measure);
        let nodes = engine.layout(document.tree());

        info!("Routing connectors");
        let (connectors, route_diagnostics) = Router::new(&nodes).route(document.tree());

        let diagnostics: Vec<Diagnostic> = document
            .diagnostics()
            .iter()
            .cloned()
            .chain(route_diagnostics)
            .collect();
        for diagnostic in &diagnostics {
            if diagnostic.severity().is_error() {
                error!("{diagnostic}");
            } else {
                warn!("{diagnostic}");
            }
        }

        Diagram {
            nodes,
            connectors,
            diagnostics,
        }
    }

    /// Parse and lay out `source` in one step.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`PinkerError::Diagnostics`] when the diagram
    /// has error diagnostics.
    pub fn build(&self, source: &str) -> Result<Diagram, PinkerError> {
        let diagram = self.layout(&self.parse(source));
        if self.strict && diagram.has_errors() {
            return Err(PinkerError::new_diagnostics(diagram.diagnostics, source));
        }
        Ok(diagram)
    }

    /// Render a laid-out diagram onto `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`PinkerError::Config`] if a configured color is invalid.
    pub fn render<S: draw::Surface>(
        &self,
        diagram: &Diagram,
        surface: &mut S,
    ) -> Result<(), PinkerError> {
        let style = RenderStyle::from_config(self.config.style())?;
        Renderer::new(self.config.layout(), style, &self.measure).render(
            &diagram.nodes,
            &diagram.connectors,
            surface,
        );
        Ok(())
    }

    /// Render a laid-out diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`PinkerError::Config`] if a configured color is invalid.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, PinkerError> {
        let mut surface = SvgSurface::new(diagram.nodes.canvas());
        self.render(diagram, &mut surface)?;
        let svg = surface.into_document().to_string();
        info!(svg_len = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }

    /// Render a laid-out diagram and write the SVG document to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PinkerError::Config`] if a configured color is invalid, or
    /// [`PinkerError::Io`] if the file cannot be written.
    pub fn export_svg(
        &self,
        diagram: &Diagram,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), PinkerError> {
        let mut surface = SvgSurface::new(diagram.nodes.canvas());
        self.render(diagram, &mut surface)?;
        surface.write_to(path)
    }
}
