//! Fonts and text measurement.
//!
//! Layout needs to know how wide a string renders before it can size a box.
//! That capability is the [`TextMeasure`] trait:
//!
//! - [`CosmicTextMeasure`] shapes text with real font metrics via cosmic-text
//! - [`ApproximateTextMeasure`] estimates a fixed advance per character and is
//!   fully deterministic, which makes it the measurer of choice in tests
//!
//! # Quick Start
//!
//! ```
//! # use pinker_core::draw::{ApproximateTextMeasure, Font, TextMeasure};
//! let font = Font::new("Georgia", 14.0);
//! let measure = ApproximateTextMeasure;
//!
//! assert!(measure.measure_width("Hello, Diagram!", &font) > 0.0);
//! assert_eq!(measure.line_height(&font), 14.0);
//! ```

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::{info, warn};

/// Average glyph advance relative to the font size, used when no real
/// metrics are available.
const APPROXIMATE_ADVANCE: f32 = 0.55;

/// A font family and size.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: String,
    size: f32,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Font size in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// CSS shorthand such as `14px Georgia`.
    pub fn to_css(&self) -> String {
        format!("{}px {}", self.size, self.family)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("Georgia", 14.0)
    }
}

/// Text measurement capability used by the layout engine.
pub trait TextMeasure {
    /// Width in pixels of a single line of `text`.
    fn measure_width(&self, text: &str, font: &Font) -> f32;

    /// Height of one line of text. Defaults to the font size.
    fn line_height(&self, font: &Font) -> f32 {
        font.size()
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure_width(&self, text: &str, font: &Font) -> f32 {
        (**self).measure_width(text, font)
    }

    fn line_height(&self, font: &Font) -> f32 {
        (**self).line_height(font)
    }
}

/// Deterministic measurer: every character advances by `0.55 × size`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApproximateTextMeasure;

impl TextMeasure for ApproximateTextMeasure {
    fn measure_width(&self, text: &str, font: &Font) -> f32 {
        approximate_width(text, font)
    }
}

fn approximate_width(text: &str, font: &Font) -> f32 {
    text.chars().count() as f32 * font.size() * APPROXIMATE_ADVANCE
}

/// Measures text by shaping it with cosmic-text.
///
/// All instances share one process-wide `FontSystem`; loading system fonts is
/// expensive and happens once, on first use.
#[derive(Debug, Default, Clone, Copy)]
pub struct CosmicTextMeasure;

impl TextMeasure for CosmicTextMeasure {
    fn measure_width(&self, text: &str, font: &Font) -> f32 {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .measure_width(text, font)
    }
}

/// TextManager handles text measurement and font operations
/// It maintains a reusable FontSystem instance to avoid expensive recreation
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Width of the widest layout run, or the approximate width when the font
    /// system is unavailable or produces no runs.
    fn measure_width(&self, text: &str, font: &Font) -> f32 {
        if text.is_empty() {
            return 0.0;
        }

        let Ok(mut font_system) = self.font_system.lock() else {
            warn!("FontSystem lock poisoned, falling back to approximate width");
            return approximate_width(text, font);
        };

        let metrics = Metrics::new(font.size(), font.size());
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(font.family()));
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let width = buffer
            .layout_runs()
            .filter_map(|run| run.glyphs.last().map(|last| last.x + last.w))
            .fold(None, |widest: Option<f32>, w| {
                Some(widest.map_or(w, |widest| widest.max(w)))
            });

        width.unwrap_or_else(|| approximate_width(text, font))
    }
}

// Create a global instance for use throughout the application
static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
