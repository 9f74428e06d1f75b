use crate::directive::MetadataField;
use crate::song::ParsedSong;
use crate::transpose::transpose;
use crate::types::line::{ParsedLine, realign_original_positions};

fn transpose_line(line: &ParsedLine, amount: i32, prefer_sharps: bool) -> ParsedLine {
    match line {
        ParsedLine::Directive { name, value }
            if MetadataField::from_name(name) == Some(MetadataField::Key) =>
        {
            ParsedLine::Directive {
                name: name.clone(),
                value: transpose(value, amount, prefer_sharps),
            }
        }
        _ => {
            let mut new_line = line.clone();
            if let Some(chords) = new_line.chords_mut() {
                for anchor in chords.iter_mut() {
                    anchor.chord = transpose(&anchor.chord, amount, prefer_sharps);
                }
                realign_original_positions(chords);
            }
            new_line
        }
    }
}

/// Transposes every chord of the song, and its key, by `amount` semitones.
/// Anchor positions are left untouched.
pub fn transform(song: &ParsedSong, amount: i32, prefer_sharps: bool) -> ParsedSong {
    if amount == 0 {
        return song.clone();
    }

    let mut metadata = song.metadata.clone();
    metadata.key = metadata
        .key
        .as_deref()
        .map(|key| transpose(key, amount, prefer_sharps));

    ParsedSong {
        metadata,
        lines: song
            .lines
            .iter()
            .map(|line| transpose_line(line, amount, prefer_sharps))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::assert_eq_songs;

    #[test]
    fn test_transpose() {
        let input = r#"
{title:Song}
{key:G}
[G]Hello [D/F#]there
[Em]  [C]
{c:Capo [2]}
"#;
        let expected = r#"
{title:Song}
{key:A}
[A]Hello [E/G#]there
[F#m]  [D]
{c:Capo [2]}
"#;
        assert_eq_songs(input, |song| transform(song, 2, true), expected);
    }

    #[test]
    fn test_transpose_down_with_flats() {
        assert_eq_songs(
            "{key:C}\n[C]one [F]two [G7]three",
            |song| transform(song, -2, false),
            "{key:Bb}\n[Bb]one [Eb]two [F7]three",
        );
    }

    #[test]
    fn test_zero_is_identity() {
        assert_eq_songs(
            "[Db]odd [C#]spellings",
            |song| transform(song, 0, true),
            "[Db]odd [C#]spellings",
        );
    }
}
