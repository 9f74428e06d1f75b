//! The song record as the storage layer keeps it.

use crate::parse_song;
use crate::song::ParsedSong;
use crate::transforms::transpose;
use crate::validate::{ValidationError, validate};
use thiserror::Error;

pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_AUTHOR_LEN: usize = 255;
pub const MAX_CAPO: i32 = 12;
pub const MAX_TRANSPOSE: i32 = 12;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Title must be at most 255 characters")]
    TitleTooLong,
    #[error("Author must be at most 255 characters")]
    AuthorTooLong,
    #[error("Capo must be between 0 and 12, got {0}")]
    CapoOutOfRange(i32),
    #[error("Transpose must be between -12 and 12, got {0}")]
    TransposeOutOfRange(i32),
    #[error("Invalid ChordPro content: {0}")]
    Content(#[from] ValidationError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongRecord {
    pub title: String,
    pub author: Option<String>,
    pub capo: i32,
    pub transpose_semitones: i32,
    pub content_chordpro: String,
}

impl SongRecord {
    pub fn new(title: impl Into<String>, content_chordpro: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content_chordpro: content_chordpro.into(),
            ..Default::default()
        }
    }

    /// Field ranges plus content checks. Blocks left open are tolerated.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.title.trim().is_empty() {
            return Err(RecordError::EmptyTitle);
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(RecordError::TitleTooLong);
        }
        if self
            .author
            .as_ref()
            .is_some_and(|author| author.chars().count() > MAX_AUTHOR_LEN)
        {
            return Err(RecordError::AuthorTooLong);
        }
        if !(0..=MAX_CAPO).contains(&self.capo) {
            return Err(RecordError::CapoOutOfRange(self.capo));
        }
        if !(-MAX_TRANSPOSE..=MAX_TRANSPOSE).contains(&self.transpose_semitones) {
            return Err(RecordError::TransposeOutOfRange(self.transpose_semitones));
        }
        match validate(&self.content_chordpro) {
            Ok(()) | Err(ValidationError::UnclosedBlocks { .. }) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// The song as it should sound, with the stored transposition applied.
    pub fn render(&self, prefer_sharps: bool) -> ParsedSong {
        let song = parse_song(&self.content_chordpro);
        transpose::transform(&song, self.transpose_semitones, prefer_sharps)
    }

    /// Chord shapes to finger with the capo on, sounding like [`Self::render`].
    pub fn playing_shapes(&self, prefer_sharps: bool) -> ParsedSong {
        transpose::transform(&self.render(prefer_sharps), -self.capo, prefer_sharps)
    }
}
