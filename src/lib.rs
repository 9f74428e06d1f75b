//! chordsheet - ChordPro-style chord sheet library
//!
//! Parses plain-text chord sheets (`[C]` chords inline with lyrics, `{name:value}`
//! directives) into a structured song, writes them back out, splits them into
//! sections and transposes their chords.

pub mod directive;
pub mod key;
pub mod layout;
pub mod line_parser;
pub mod parser;
pub mod record;
pub mod sections;
pub mod song;
pub mod transforms;
pub mod transpose;
pub mod types;
pub mod validate;

#[cfg(feature = "python")]
mod python;

#[cfg(test)]
mod util;

// Re-export commonly used types
pub use key::{calculate_capo, chord_suggestions, detect_key};
pub use layout::{FontSpec, TextMeasure, positions};
pub use line_parser::parse_line;
pub use parser::{load_song, parse_song};
pub use record::{RecordError, SongRecord};
pub use sections::segment;
pub use song::{ParsedSong, SongMetadata, serialize};
pub use transpose::transpose;
pub use types::chord::ChordSymbol;
pub use types::line::{ChordAnchor, ParsedLine, Segment};
pub use types::pitch::PitchClass;
pub use types::section::{Section, SectionType};
pub use validate::{ValidationError, validate};
