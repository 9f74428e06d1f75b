pub mod clean;
pub mod metadata;
pub mod transpose;

use crate::key::{calculate_capo, detect_key, key_prefers_sharps, shifted_key_prefers_sharps};
use crate::song::ParsedSong;

#[derive(Debug, Clone, Default)]
pub struct TransformDescriptor {
    pub transpose_amount: i32,
    /// Move the song to this key, on top of `transpose_amount`.
    pub target_key: Option<String>,
    /// `None` picks the spelling usual for the destination key.
    pub prefer_sharps: Option<bool>,
}

/// Key the song is written in: its `{key}` directive, else a guess from its chords.
pub fn song_key(song: &ParsedSong) -> Option<String> {
    song.metadata
        .key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| detect_key(song.chords().as_slice()))
}

pub fn apply_transforms(song: &ParsedSong, transforms: &TransformDescriptor) -> ParsedSong {
    let source_key = song_key(song);
    let mut amount = transforms.transpose_amount;

    if let Some(target) = &transforms.target_key {
        match &source_key {
            Some(source) => amount += calculate_capo(source, target) as i32,
            None => log::warn!("Cannot move to key {}: song key unknown", target),
        }
    }

    let prefer_sharps = transforms.prefer_sharps.unwrap_or_else(|| {
        match (&transforms.target_key, &source_key) {
            (Some(target), _) => key_prefers_sharps(target),
            (None, Some(source)) => shifted_key_prefers_sharps(source, amount),
            (None, None) => true,
        }
    });

    transpose::transform(song, amount, prefer_sharps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_song;

    #[test]
    fn test_to_target_key() {
        let song = parse_song("{key:G}\n[G]la [C]la [D]la");
        let result = apply_transforms(
            &song,
            &TransformDescriptor {
                target_key: Some("Bb".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(result.metadata.key.as_deref(), Some("Bb"));
        assert_eq!(result.chords(), vec!["Bb", "Eb", "F"]);
    }

    #[test]
    fn test_detected_key_used_without_directive() {
        let song = parse_song("[Am]la [F]la [Am]la");
        let result = apply_transforms(
            &song,
            &TransformDescriptor {
                target_key: Some("Em".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(result.chords(), vec!["Em", "C", "Em"]);
    }

    #[test]
    fn test_amount_and_explicit_spelling() {
        let song = parse_song("[C]la [F]la");
        let result = apply_transforms(
            &song,
            &TransformDescriptor {
                transpose_amount: 1,
                prefer_sharps: Some(true),
                ..Default::default()
            },
        );
        assert_eq!(result.chords(), vec!["C#", "F#"]);
    }

    #[test]
    fn test_spelling_follows_destination_key() {
        let song = parse_song("[C]la [F]la");
        let result = apply_transforms(
            &song,
            &TransformDescriptor {
                transpose_amount: 1,
                ..Default::default()
            },
        );
        assert_eq!(result.chords(), vec!["Db", "Gb"]);
    }

    #[test]
    fn test_target_key_spelled_as_given() {
        let song = parse_song("{key:G}\n[G]la [D]la");
        let result = apply_transforms(
            &song,
            &TransformDescriptor {
                target_key: Some("C#".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(result.metadata.key.as_deref(), Some("C#"));
        assert_eq!(result.chords(), vec!["C#", "G#"]);
    }

    #[test]
    fn test_spelling_follows_shifted_key_signature() {
        let song = parse_song("{key:Am}\n[Am]la [E]la");
        let result = apply_transforms(
            &song,
            &TransformDescriptor {
                transpose_amount: 1,
                ..Default::default()
            },
        );
        assert_eq!(result.metadata.key.as_deref(), Some("Bbm"));
        assert_eq!(result.chords(), vec!["Bbm", "F"]);
    }
}
