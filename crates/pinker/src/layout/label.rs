//! Label sizing: single-line headers and word-wrapped plain labels.

use pinker_core::{
    draw::{Font, TextMeasure},
    geometry::Size,
};

/// Width-to-height ratio plain labels are steered towards.
const GOLDEN_RATIO: f32 = 1.6;

/// Below this ratio a label is still considered too tall to stop wrapping.
const MIN_ACCEPTED_RATIO: f32 = 1.2;

/// Side length of the placeholder box drawn for an empty plain label.
const EMPTY_LABEL_SIZE: f32 = 5.0;

/// Lines and size of a box label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    lines: Vec<String>,
    size: Size,
    header: bool,
}

impl LabelLayout {
    /// A one-line label drawn in a shaded band above the box content.
    pub fn header(label: &str, font: &Font, measure: &impl TextMeasure) -> Self {
        Self {
            lines: vec![label.to_string()],
            size: Size::new(
                measure.measure_width(label, font),
                measure.line_height(font),
            ),
            header: true,
        }
    }

    /// A label filling the whole box, wrapped into several lines.
    ///
    /// With `favor_golden_ratio` the wrapping closest to a 1.6 aspect ratio is
    /// chosen; otherwise the first wrapping wider than tall.
    pub fn plain(
        label: &str,
        font: &Font,
        measure: &impl TextMeasure,
        favor_golden_ratio: bool,
    ) -> Self {
        if label.is_empty() {
            return Self {
                lines: Vec::new(),
                size: Size::new(EMPTY_LABEL_SIZE, EMPTY_LABEL_SIZE),
                header: false,
            };
        }

        let words: Vec<&str> = label.split(' ').collect();
        let candidates = (1..=words.len()).map(|per_line| {
            let lines = split_into_words_per_line(&words, per_line);
            Candidate::new(lines, font, measure)
        });

        let chosen = if favor_golden_ratio {
            golden_ratio_candidate(candidates)
        } else {
            simple_candidate(candidates)
        };

        let Candidate { lines, size } = chosen.unwrap_or_else(|| Candidate {
            lines: vec![label.to_string()],
            size: Size::new(measure.measure_width(label, font), measure.line_height(font)),
        });

        Self {
            lines,
            size,
            header: false,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Size of the text block, without padding.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_header(&self) -> bool {
        self.header
    }
}

/// One way to wrap a label.
#[derive(Debug)]
struct Candidate {
    lines: Vec<String>,
    size: Size,
}

impl Candidate {
    fn new(lines: Vec<String>, font: &Font, measure: &impl TextMeasure) -> Self {
        let width = lines
            .iter()
            .map(|line| measure.measure_width(line, font))
            .fold(0.0, f32::max);
        let height = lines.len() as f32 * measure.line_height(font);
        Self {
            lines,
            size: Size::new(width, height),
        }
    }

    fn ratio(&self) -> f32 {
        self.size.aspect_ratio()
    }

    fn distance_to_golden(&self) -> f32 {
        (self.ratio() - GOLDEN_RATIO).abs()
    }
}

/// Groups `words` into lines of `per_line` words; the first line takes the
/// remainder.
fn split_into_words_per_line(words: &[&str], per_line: usize) -> Vec<String> {
    let per_line = per_line.max(1);
    let remainder = words.len() % per_line;
    let mut lines = Vec::with_capacity(words.len().div_ceil(per_line));
    if remainder > 0 {
        lines.push(words[..remainder].join(" "));
    }
    lines.extend(words[remainder..].chunks(per_line).map(|chunk| chunk.join(" ")));
    lines
}

/// Walks wider and wider wrappings while they approach the golden ratio, or
/// while the current pick is still too tall.
fn golden_ratio_candidate(candidates: impl Iterator<Item = Candidate>) -> Option<Candidate> {
    let mut selected: Option<Candidate> = None;
    for candidate in candidates {
        let accept = match &selected {
            None => true,
            Some(current) => {
                current.distance_to_golden() > candidate.distance_to_golden()
                    || current.ratio() < MIN_ACCEPTED_RATIO
            }
        };
        if !accept {
            break;
        }
        selected = Some(candidate);
    }
    selected
}

/// The first wrapping wider than tall, else the widest one.
fn simple_candidate(candidates: impl Iterator<Item = Candidate>) -> Option<Candidate> {
    let mut last = None;
    for candidate in candidates {
        if candidate.size.width() > candidate.size.height() {
            return Some(candidate);
        }
        last = Some(candidate);
    }
    last
}
