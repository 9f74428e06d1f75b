use crate::directive::MetadataField;
use crate::types::line::ParsedLine;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongMetadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub capo: Option<i32>,
    pub key: Option<String>,
    pub tempo: Option<String>,
    pub time: Option<String>,
}

impl SongMetadata {
    /// Stores a directive value. Later directives win.
    pub fn set(&mut self, field: MetadataField, value: &str) {
        match field {
            MetadataField::Title => self.title = Some(value.to_string()),
            MetadataField::Artist => self.artist = Some(value.to_string()),
            MetadataField::Capo => self.capo = Some(parse_capo(value)),
            MetadataField::Key => self.key = Some(value.to_string()),
            MetadataField::Tempo => self.tempo = Some(value.to_string()),
            MetadataField::Time => self.time = Some(value.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &SongMetadata::default()
    }
}

fn parse_capo(value: &str) -> i32 {
    match value.trim().parse() {
        Ok(capo) => capo,
        Err(_) => {
            if !value.trim().is_empty() {
                log::debug!("Non-numeric capo \"{}\", using 0", value);
            }
            0
        }
    }
}

pub struct SongFormatter<'a> {
    song: &'a ParsedSong,
}

impl SongFormatter<'_> {
    /// Metadata the line stream does not already spell out as a directive.
    fn header_lines(&self) -> Vec<String> {
        let metadata = &self.song.metadata;
        let carried = |field: MetadataField| {
            self.song.lines.iter().any(|line| match line {
                ParsedLine::Directive { name, .. } => MetadataField::from_name(name) == Some(field),
                _ => false,
            })
        };

        let mut header = Vec::new();
        if let Some(title) = &metadata.title {
            if !carried(MetadataField::Title) {
                header.push(format!("{{title:{}}}", title));
            }
        }
        if let Some(artist) = &metadata.artist {
            if !carried(MetadataField::Artist) {
                header.push(format!("{{artist:{}}}", artist));
            }
        }
        if let Some(capo) = metadata.capo {
            if capo > 0 && !carried(MetadataField::Capo) {
                header.push(format!("{{capo:{}}}", capo));
            }
        }
        if let Some(key) = &metadata.key {
            if !carried(MetadataField::Key) {
                header.push(format!("{{key:{}}}", key));
            }
        }
        header
    }
}

impl fmt::Display for SongFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.header_lines();
        let mut lines: Vec<String> = Vec::with_capacity(header.len() + self.song.lines.len() + 1);
        if !header.is_empty() {
            lines.extend(header);
            lines.push(String::new());
        }
        lines.extend(self.song.lines.iter().map(|line| line.to_string()));
        write!(f, "{}", lines.join("\n"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSong {
    pub metadata: SongMetadata,
    pub lines: Vec<ParsedLine>,
}

impl ParsedSong {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: Vec<ParsedLine>) -> Self {
        let mut metadata = SongMetadata::default();
        for line in &lines {
            if let ParsedLine::Directive { name, value } = line {
                if let Some(field) = MetadataField::from_name(name) {
                    metadata.set(field, value);
                }
            }
        }
        Self { metadata, lines }
    }

    /// Every chord symbol in line order.
    pub fn chords(&self) -> Vec<&str> {
        self.lines
            .iter()
            .flat_map(|line| line.chords())
            .map(|anchor| anchor.chord.as_str())
            .collect()
    }

    pub fn formatter(&self) -> SongFormatter<'_> {
        SongFormatter { song: self }
    }
}

impl fmt::Display for ParsedSong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatter())
    }
}

/// Canonical text for a song. Never fails.
pub fn serialize(song: &ParsedSong) -> String {
    song.to_string()
}
