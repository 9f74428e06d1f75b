//! Horizontal chord placement over lyric text.
//!
//! Measuring text belongs to the renderer, so it is passed in as a
//! [`TextMeasure`]. Without one, a monospace approximation is used.

use crate::types::line::{ChordAnchor, char_prefix};
use std::borrow::Cow;

/// Approximate advance of one character, in multiples of the font size.
pub const AVERAGE_CHAR_WIDTH_FACTOR: f32 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("monospace", 14.0)
    }
}

/// Width of a run of text in a given font.
///
/// Implementations shared across threads must be safe for concurrent reads.
pub trait TextMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> f32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, &FontSpec) -> f32,
{
    fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        self(text, font)
    }
}

/// Every character is `AVERAGE_CHAR_WIDTH_FACTOR` font sizes wide.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateMeasure;

impl TextMeasure for ApproximateMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        text.chars().count() as f32 * font.size * AVERAGE_CHAR_WIDTH_FACTOR
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChordPosition {
    pub chord: String,
    pub x: f32,
}

/// One position per anchor, in anchor order. `x` is the width of the text
/// preceding the anchor.
pub fn positions(
    stripped_text: &str,
    anchors: &[ChordAnchor],
    measure: Option<&dyn TextMeasure>,
    font: &FontSpec,
) -> Vec<ChordPosition> {
    let measure = measure.unwrap_or(&ApproximateMeasure);
    anchors
        .iter()
        .map(|anchor| ChordPosition {
            chord: anchor.chord.clone(),
            x: measure.measure(&text_before(stripped_text, anchor.position), font),
        })
        .collect()
}

/// Chord-only lines keep no text, so their columns are measured as spaces.
fn text_before(text: &str, position: usize) -> Cow<'_, str> {
    if text.is_empty() {
        Cow::Owned(" ".repeat(position))
    } else {
        Cow::Borrowed(char_prefix(text, position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_parser::parse_line;

    #[test]
    fn test_fallback_widths() {
        let line = parse_line("[C]Hello [Am]world");
        let font = FontSpec::new("mono", 10.0);
        let result = positions(line.stripped_text(), line.chords(), None, &font);
        assert_eq!(
            result,
            vec![
                ChordPosition {
                    chord: "C".to_string(),
                    x: 0.0
                },
                ChordPosition {
                    chord: "Am".to_string(),
                    x: 6.0 * 10.0 * AVERAGE_CHAR_WIDTH_FACTOR
                },
            ]
        );
    }

    #[test]
    fn test_injected_measure() {
        let line = parse_line("ab[G]cd[D]");
        let measure = |text: &str, font: &FontSpec| text.len() as f32 * font.size;
        let result = positions(
            line.stripped_text(),
            line.chords(),
            Some(&measure),
            &FontSpec::new("serif", 2.0),
        );
        let xs: Vec<f32> = result.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![4.0, 8.0]);
    }

    #[test]
    fn test_measure_sees_prefix_only() {
        let line = parse_line("Ça [F]va");
        let seen = std::cell::RefCell::new(Vec::new());
        let measure = |text: &str, _: &FontSpec| {
            seen.borrow_mut().push(text.to_string());
            0.0_f32
        };
        positions(line.stripped_text(), line.chords(), Some(&measure), &FontSpec::default());
        assert_eq!(seen.into_inner(), vec!["Ça ".to_string()]);
    }

    #[test]
    fn test_chord_line_columns() {
        let line = parse_line("[G]  [C]");
        let font = FontSpec::new("mono", 10.0);
        let xs: Vec<f32> = positions(line.stripped_text(), line.chords(), None, &font)
            .iter()
            .map(|p| p.x)
            .collect();
        assert_eq!(xs, vec![0.0, 2.0 * 10.0 * AVERAGE_CHAR_WIDTH_FACTOR]);
    }

    #[test]
    fn test_empty_anchors() {
        assert!(positions("text", &[], None, &FontSpec::default()).is_empty());
    }
}
