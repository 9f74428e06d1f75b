//! Assertions shared by the module tests.

use crate::parse_song;
use crate::song::{ParsedSong, serialize};
use pretty_assertions::assert_eq;

pub fn assert_eq_songs(input: &str, transform: fn(&ParsedSong) -> ParsedSong, expected: &str) {
    let input_parsed = parse_song(input);
    let expected_parsed = parse_song(expected);
    let transformed = transform(&input_parsed);
    assert_eq!(
        transformed.lines.len(),
        expected_parsed.lines.len(),
        "length mismatch, output={:?}",
        serialize(&transformed).split('\n').collect::<Vec<_>>(),
    );
    for (line, expected) in transformed.lines.iter().zip(expected_parsed.lines.iter()) {
        assert_eq!(line, expected);
    }
    assert_eq!(transformed.metadata, expected_parsed.metadata);
}

/// Parsing the serialized form of a parsed song gives the same song back.
pub fn assert_round_trip(input: &str) {
    let first = parse_song(input);
    let text = serialize(&first);
    let second = parse_song(&text);
    assert_eq!(second, first, "serialized as {:?}", text);
}
