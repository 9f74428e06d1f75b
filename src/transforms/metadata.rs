use crate::directive::MetadataField;
use crate::line_parser::parse_line;
use crate::types::line::ParsedLine;

/// Metadata values to write into a chord sheet. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataUpdate<'a> {
    pub title: Option<&'a str>,
    pub artist: Option<&'a str>,
    pub capo: Option<i32>,
    pub key: Option<&'a str>,
}

impl MetadataUpdate<'_> {
    fn value_for(&self, field: MetadataField) -> Option<String> {
        let non_empty = |value: Option<&str>| value.filter(|v| !v.is_empty()).map(str::to_string);
        match field {
            MetadataField::Title => non_empty(self.title),
            MetadataField::Artist => non_empty(self.artist),
            MetadataField::Capo => self.capo.map(|capo| capo.to_string()),
            MetadataField::Key => non_empty(self.key),
            MetadataField::Tempo | MetadataField::Time => None,
        }
    }
}

const HEADER_FIELDS: [MetadataField; 4] = [
    MetadataField::Title,
    MetadataField::Artist,
    MetadataField::Capo,
    MetadataField::Key,
];

fn header_field(line: &str) -> Option<MetadataField> {
    match parse_line(line) {
        ParsedLine::Directive { name, .. } => {
            MetadataField::from_name(&name).filter(|field| HEADER_FIELDS.contains(field))
        }
        _ => None,
    }
}

/// Upserts title/artist/capo/key directives and moves them to the top of
/// the sheet, followed by a blank line when any lyrics follow.
pub fn transform(content: &str, update: &MetadataUpdate) -> String {
    let mut found: Vec<MetadataField> = Vec::new();
    let mut metadata_lines: Vec<String> = Vec::new();
    let mut content_lines: Vec<&str> = Vec::new();

    for line in content.split('\n') {
        match header_field(line) {
            Some(field) => {
                found.push(field);
                match update.value_for(field) {
                    Some(value) => metadata_lines.push(format!("{{{}:{}}}", field.name(), value)),
                    None => metadata_lines.push(line.to_string()),
                }
            }
            None => content_lines.push(line),
        }
    }

    let mut result: Vec<String> = HEADER_FIELDS
        .iter()
        .filter(|field| !found.contains(field))
        .filter_map(|&field| {
            update
                .value_for(field)
                .map(|value| format!("{{{}:{}}}", field.name(), value))
        })
        .collect();
    result.extend(metadata_lines);

    let has_lyrics = content_lines.iter().any(|line| !line.trim().is_empty());
    if !result.is_empty() && has_lyrics {
        result.push(String::new());
    }
    result.extend(content_lines.into_iter().map(str::to_string));

    result.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inject_into_bare_content() {
        let update = MetadataUpdate {
            title: Some("Song"),
            artist: Some("Band"),
            capo: Some(0),
            key: None,
        };
        assert_eq!(
            transform("[C]La la", &update),
            "{title:Song}\n{artist:Band}\n{capo:0}\n\n[C]La la"
        );
    }

    #[test]
    fn test_rewrites_and_hoists_existing() {
        let content = "[G]first\n{t:Old}\n{key:G}\nlast";
        let update = MetadataUpdate {
            title: Some("New"),
            capo: Some(2),
            ..Default::default()
        };
        assert_eq!(
            transform(content, &update),
            "{capo:2}\n{title:New}\n{key:G}\n\n[G]first\nlast"
        );
    }

    #[test]
    fn test_empty_values_ignored() {
        let update = MetadataUpdate {
            title: Some(""),
            ..Default::default()
        };
        assert_eq!(transform("la", &update), "la");
    }

    #[test]
    fn test_no_separator_without_lyrics() {
        let update = MetadataUpdate {
            title: Some("Only"),
            ..Default::default()
        };
        assert_eq!(transform("", &update), "{title:Only}\n");
    }
}
