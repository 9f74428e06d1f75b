use crate::directive::MetadataField;
use crate::line_parser::parse_line;
use crate::song::ParsedSong;
use crate::types::line::ParsedLine;
use anyhow::{Context, Result};
use std::path::Path;

pub struct SongParser {}

pub fn parse_song(content: &str) -> ParsedSong {
    let mut parser = SongParser::new();
    parser.parse(content)
}

/// Reads and parses a chord sheet from disk.
pub fn load_song(path: impl AsRef<Path>) -> Result<ParsedSong> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read chord sheet: {}", path.display()))?;
    Ok(parse_song(&content))
}

impl Default for SongParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SongParser {
    pub fn new() -> Self {
        Self {}
    }

    pub fn parse(&mut self, content: &str) -> ParsedSong {
        let mut song = ParsedSong::new();
        if content.is_empty() {
            return song;
        }

        // split rather than lines() so a trailing newline survives a round trip
        for raw in content.split('\n') {
            let raw = raw.strip_suffix('\r').unwrap_or(raw);
            let line = parse_line(raw);
            if let ParsedLine::Directive { name, value } = &line {
                match MetadataField::from_name(name) {
                    Some(field) => song.metadata.set(field, value),
                    None => log::trace!("Directive \"{}\" carries no metadata", name),
                }
            }
            song.lines.push(line);
        }

        song
    }
}
