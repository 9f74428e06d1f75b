use crate::types::line::{ChordAnchor, ParsedLine};

/// `{name}` or `{name:value}` spanning the whole trimmed line.
fn try_parse_directive(trimmed: &str) -> Option<(&str, &str)> {
    let inner = trimmed.strip_prefix('{')?.strip_suffix('}')?;
    if inner.contains(['{', '}']) {
        return None;
    }
    let (name, value) = match inner.split_once(':') {
        Some((name, value)) => (name.trim(), value.trim()),
        None => (inner.trim(), ""),
    };
    if name.is_empty() {
        return None;
    }
    Some((name, value))
}

/// Removes `[chord]` tokens from `line`, returning the remaining text and
/// an anchor per token. Offsets are in characters.
fn strip_chords(line: &str) -> (String, Vec<ChordAnchor>) {
    let mut text = String::with_capacity(line.len());
    let mut chords = Vec::new();
    let mut rest = line;
    let mut stripped_len = 0;
    let mut raw_offset = 0;

    while let Some(open) = rest.find('[') {
        let after = &rest[open + 1..];
        let Some(close) = after.find(']') else {
            log::debug!("Unterminated chord bracket in \"{}\"", line);
            break;
        };

        let chord = &after[..close];
        let literal_end = if chord.is_empty() { open + 2 } else { open };
        let literal = &rest[..literal_end];
        let literal_chars = literal.chars().count();
        text.push_str(literal);
        stripped_len += literal_chars;
        raw_offset += literal_chars;

        // "[]" holds no chord and stays in the text
        if !chord.is_empty() {
            chords.push(ChordAnchor::new(chord, stripped_len, raw_offset));
            raw_offset += chord.chars().count() + 2;
        }
        rest = &after[close + 1..];
    }

    text.push_str(rest);
    (text, chords)
}

pub fn parse_line(line: &str) -> ParsedLine {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return ParsedLine::Empty;
    }

    if let Some((name, value)) = try_parse_directive(trimmed) {
        log::trace!("Directive {} = \"{}\"", name, value);
        return ParsedLine::directive(name, value);
    }

    let (text, chords) = strip_chords(line);
    if !chords.is_empty() && text.trim().is_empty() {
        ParsedLine::ChordLine { chords }
    } else {
        ParsedLine::LyricLine { text, chords }
    }
}
