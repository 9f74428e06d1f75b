//! Directive name catalogue. Every lookup here is case-insensitive.

use crate::types::section::SectionType;

/// Song-level fields filled from directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField {
    Title,
    Artist,
    Capo,
    Key,
    Tempo,
    Time,
}

impl MetadataField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "title" | "t" => Some(MetadataField::Title),
            "artist" | "a" => Some(MetadataField::Artist),
            "capo" => Some(MetadataField::Capo),
            "key" => Some(MetadataField::Key),
            "tempo" => Some(MetadataField::Tempo),
            "time" => Some(MetadataField::Time),
            _ => None,
        }
    }

    /// Canonical directive name used when writing the field.
    pub fn name(&self) -> &'static str {
        match self {
            MetadataField::Title => "title",
            MetadataField::Artist => "artist",
            MetadataField::Capo => "capo",
            MetadataField::Key => "key",
            MetadataField::Tempo => "tempo",
            MetadataField::Time => "time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionMarker {
    Start(SectionType),
    End(SectionType),
}

pub fn section_marker(name: &str) -> Option<SectionMarker> {
    let marker = match name.to_ascii_lowercase().as_str() {
        "soc" | "start_of_chorus" | "chorus" => SectionMarker::Start(SectionType::Chorus),
        "sov" | "start_of_verse" | "verse" => SectionMarker::Start(SectionType::Verse),
        "sob" | "start_of_bridge" | "bridge" => SectionMarker::Start(SectionType::Bridge),
        "sot" | "start_of_tab" | "tab" => SectionMarker::Start(SectionType::Tab),
        "eoc" | "end_of_chorus" => SectionMarker::End(SectionType::Chorus),
        "eov" | "end_of_verse" => SectionMarker::End(SectionType::Verse),
        "eob" | "end_of_bridge" => SectionMarker::End(SectionType::Bridge),
        "eot" | "end_of_tab" => SectionMarker::End(SectionType::Tab),
        _ => return None,
    };
    Some(marker)
}

/// Formatting directives understood by renderers but carrying no song data.
const LAYOUT_DIRECTIVES: &[&str] = &[
    "subtitle",
    "st",
    "comment",
    "c",
    "comment_italic",
    "ci",
    "comment_box",
    "cb",
    "grid",
    "g",
    "no_grid",
    "ng",
    "new_song",
    "ns",
    "new_page",
    "np",
    "new_physical_page",
    "npp",
    "column_break",
    "colb",
    "columns",
    "col",
];

pub fn is_known_directive(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    MetadataField::from_name(&lower).is_some()
        || section_marker(&lower).is_some()
        || LAYOUT_DIRECTIVES.contains(&lower.as_str())
}
