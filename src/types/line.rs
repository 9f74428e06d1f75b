use std::fmt;

/// A chord pinned to a character offset.
///
/// Offsets count characters, not bytes. `position` indexes the lyric text
/// with all bracket tokens removed, `original_position` the raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordAnchor {
    pub chord: String,
    pub position: usize,
    pub original_position: usize,
}

impl ChordAnchor {
    pub fn new(chord: impl Into<String>, position: usize, original_position: usize) -> Self {
        Self {
            chord: chord.into(),
            position,
            original_position,
        }
    }
}

/// Piece of a line in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Chord(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Directive { name: String, value: String },
    Empty,
    /// Only chords; the text between them was whitespace.
    ChordLine { chords: Vec<ChordAnchor> },
    /// Lyrics, with `chords` empty when the line carries none.
    LyricLine { text: String, chords: Vec<ChordAnchor> },
}

impl ParsedLine {
    pub fn directive(name: impl Into<String>, value: impl Into<String>) -> Self {
        ParsedLine::Directive {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn lyrics(text: impl Into<String>) -> Self {
        ParsedLine::LyricLine {
            text: text.into(),
            chords: Vec::new(),
        }
    }

    pub fn chords(&self) -> &[ChordAnchor] {
        match self {
            ParsedLine::ChordLine { chords } | ParsedLine::LyricLine { chords, .. } => chords,
            _ => &[],
        }
    }

    pub fn chords_mut(&mut self) -> Option<&mut Vec<ChordAnchor>> {
        match self {
            ParsedLine::ChordLine { chords } | ParsedLine::LyricLine { chords, .. } => {
                Some(chords)
            }
            _ => None,
        }
    }

    /// Lyric text without bracket tokens. Empty for non-lyric lines.
    pub fn stripped_text(&self) -> &str {
        match self {
            ParsedLine::LyricLine { text, .. } => text,
            _ => "",
        }
    }

    /// Chords and text interleaved in reading order. Empty text runs are skipped.
    pub fn segments(&self) -> Vec<Segment> {
        match self {
            ParsedLine::Directive { .. } | ParsedLine::Empty => Vec::new(),
            ParsedLine::ChordLine { chords } => chords
                .iter()
                .map(|anchor| Segment::Chord(anchor.chord.clone()))
                .collect(),
            ParsedLine::LyricLine { text, chords } => {
                let mut segments = Vec::with_capacity(chords.len() * 2 + 1);
                let mut chars = text.chars();
                let mut consumed = 0;
                for anchor in chords {
                    let take = anchor.position.saturating_sub(consumed);
                    let run: String = chars.by_ref().take(take).collect();
                    consumed += run.chars().count();
                    if !run.is_empty() {
                        segments.push(Segment::Text(run));
                    }
                    segments.push(Segment::Chord(anchor.chord.clone()));
                }
                let rest: String = chars.collect();
                if !rest.is_empty() {
                    segments.push(Segment::Text(rest));
                }
                segments
            }
        }
    }
}

/// Recomputes `original_position` of each anchor from the chord lengths, as
/// if the line were written back out with its current chords.
pub fn realign_original_positions(chords: &mut [ChordAnchor]) {
    let mut tokens_len = 0;
    for anchor in chords.iter_mut() {
        anchor.original_position = anchor.position + tokens_len;
        tokens_len += anchor.chord.chars().count() + 2;
    }
}

/// Prefix of `text` holding its first `chars` characters, clamped to the text.
pub fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

impl fmt::Display for ParsedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedLine::Directive { name, value } => {
                if value.is_empty() {
                    write!(f, "{{{}}}", name)
                } else {
                    write!(f, "{{{}:{}}}", name, value)
                }
            }
            ParsedLine::Empty => Ok(()),
            ParsedLine::ChordLine { chords } => {
                // The whitespace between chords is not kept, only its width.
                let mut column = 0;
                for anchor in chords {
                    while column < anchor.position {
                        write!(f, " ")?;
                        column += 1;
                    }
                    write!(f, "[{}]", anchor.chord)?;
                }
                Ok(())
            }
            ParsedLine::LyricLine { text, chords } => {
                let mut chars = text.chars();
                let mut consumed = 0;
                for anchor in chords {
                    while consumed < anchor.position {
                        match chars.next() {
                            Some(c) => write!(f, "{}", c)?,
                            None => break,
                        }
                        consumed += 1;
                    }
                    write!(f, "[{}]", anchor.chord)?;
                }
                write!(f, "{}", chars.as_str())
            }
        }
    }
}
