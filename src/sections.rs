use crate::directive::{SectionMarker, section_marker};
use crate::song::ParsedSong;
use crate::types::line::ParsedLine;
use crate::types::section::{Section, SectionType};

struct SectionBuffer {
    section_type: SectionType,
    label: Option<String>,
    lines: Vec<ParsedLine>,
}

impl SectionBuffer {
    fn new(section_type: SectionType, label: Option<String>) -> Self {
        Self {
            section_type,
            label,
            lines: Vec::new(),
        }
    }

    /// Moves the buffered lines out as a section. Empty buffers produce nothing.
    fn flush_into(&mut self, sections: &mut Vec<Section>) {
        if self.lines.is_empty() {
            return;
        }
        sections.push(Section {
            section_type: self.section_type,
            label: self.label.clone(),
            lines: std::mem::take(&mut self.lines),
        });
    }
}

/// Groups lines into sections using the start/end marker directives.
/// Marker lines themselves are dropped.
pub fn segment(song: &ParsedSong) -> Vec<Section> {
    segment_lines(&song.lines)
}

pub fn segment_lines(lines: &[ParsedLine]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = SectionBuffer::new(SectionType::Default, None);

    for line in lines {
        let marker = match line {
            ParsedLine::Directive { name, value } => {
                section_marker(name).map(|marker| (marker, value.as_str()))
            }
            _ => None,
        };

        match marker {
            Some((SectionMarker::Start(section_type), value)) => {
                current.flush_into(&mut sections);
                let label = (!value.is_empty()).then(|| value.to_string());
                current = SectionBuffer::new(section_type, label);
            }
            Some((SectionMarker::End(_), _)) => {
                current.flush_into(&mut sections);
                current = SectionBuffer::new(SectionType::Default, None);
            }
            None => current.lines.push(line.clone()),
        }
    }

    current.flush_into(&mut sections);
    sections
}
