use crate::types::line::ParsedLine;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionType {
    Verse,
    Chorus,
    Bridge,
    Tab,
    #[default]
    Default,
}

impl SectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Verse => "verse",
            SectionType::Chorus => "chorus",
            SectionType::Bridge => "bridge",
            SectionType::Tab => "tab",
            SectionType::Default => "default",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub section_type: SectionType,
    /// Value of the start directive, e.g. `{soc: Chorus 2}`.
    pub label: Option<String>,
    pub lines: Vec<ParsedLine>,
}

impl Section {
    pub fn new(section_type: SectionType, lines: Vec<ParsedLine>) -> Self {
        Self {
            section_type,
            label: None,
            lines,
        }
    }
}
