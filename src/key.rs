//! Key detection, capo arithmetic and canned progressions.

use crate::transpose::transpose;
use crate::types::chord::{ChordSymbol, Mode};
use crate::types::pitch::PitchClass;

const MAJOR_PROGRESSIONS: [[i32; 4]; 3] = [[0, 7, 5, 0], [0, 9, 5, 7], [0, 5, 9, 7]];
const MINOR_PROGRESSIONS: [[i32; 4]; 3] = [[0, 5, 7, 0], [0, 3, 7, 0], [0, 5, 3, 7]];

/// Major tonics conventionally written with flats (F, Bb, Eb, Ab, Db, Gb).
const FLAT_MAJOR_TONICS: [u8; 6] = [5, 10, 3, 8, 1, 6];
/// Minor tonics conventionally written with flats (D, G, C, F, Bb, Eb).
const FLAT_MINOR_TONICS: [u8; 6] = [2, 7, 0, 5, 10, 3];

struct Tally<'a> {
    root: PitchClass,
    /// Spelling of the first chord seen with this root.
    name: &'a str,
    count: usize,
    major: usize,
    minor: usize,
}

/// Guesses the tonal center of a chord sequence.
///
/// The most frequent root wins, ties going to the root seen first. The
/// result carries an `m` when chords on that root are mostly minor.
pub fn detect_key<S: AsRef<str>>(chords: &[S]) -> Option<String> {
    let mut tallies: Vec<Tally> = Vec::new();

    for chord in chords {
        let Some(symbol) = ChordSymbol::parse(chord.as_ref()) else {
            continue;
        };
        let idx = match tallies.iter().position(|t| t.root == symbol.root) {
            Some(idx) => idx,
            None => {
                tallies.push(Tally {
                    root: symbol.root,
                    name: symbol.root_name,
                    count: 0,
                    major: 0,
                    minor: 0,
                });
                tallies.len() - 1
            }
        };
        let tally = &mut tallies[idx];
        tally.count += 1;
        match symbol.mode() {
            Mode::Major => tally.major += 1,
            Mode::Minor => tally.minor += 1,
            Mode::Other => {}
        }
    }

    // max_by_key keeps the last maximum, so fold to keep the first
    let best = tallies.iter().fold(None::<&Tally>, |best, tally| match best {
        Some(b) if b.count >= tally.count => Some(b),
        _ => Some(tally),
    });

    match best {
        Some(tally) if tally.minor > tally.major => Some(format!("{}m", tally.name)),
        Some(tally) => Some(tally.name.to_string()),
        None => {
            log::debug!("No recognizable chords, key unknown");
            None
        }
    }
}

/// Capo fret that makes chords in `original_key` sound in `target_key`.
///
/// Minor suffixes are ignored. Unreadable keys give 0.
pub fn calculate_capo(original_key: &str, target_key: &str) -> u8 {
    match (key_root(original_key), key_root(target_key)) {
        (Some(from), Some(to)) => from.distance_to(to),
        _ => {
            log::debug!(
                "Cannot compute capo from \"{}\" to \"{}\"",
                original_key,
                target_key
            );
            0
        }
    }
}

fn key_root(key: &str) -> Option<PitchClass> {
    ChordSymbol::parse(key.trim()).map(|symbol| symbol.root)
}

/// Whether chords in `key` are usually spelled with sharps.
///
/// An accidental on the tonic decides (`C#` sharps, `Db` flats). Natural
/// tonics follow the usual key signatures.
pub fn key_prefers_sharps(key: &str) -> bool {
    let Some(symbol) = ChordSymbol::parse(key.trim()) else {
        return true;
    };
    if symbol.root_name.ends_with('#') {
        true
    } else if symbol.root_name.ends_with('b') {
        false
    } else {
        signature_prefers_sharps(symbol.root, symbol.is_minor())
    }
}

/// Spelling usual for the key `semitones` above `key`, whatever the
/// spelling of `key` itself.
pub fn shifted_key_prefers_sharps(key: &str, semitones: i32) -> bool {
    match ChordSymbol::parse(key.trim()) {
        Some(symbol) => {
            signature_prefers_sharps(symbol.root.transpose(semitones), symbol.is_minor())
        }
        None => true,
    }
}

fn signature_prefers_sharps(tonic: PitchClass, minor: bool) -> bool {
    let flats = if minor {
        &FLAT_MINOR_TONICS
    } else {
        &FLAT_MAJOR_TONICS
    };
    !flats.contains(&tonic.value())
}

/// Three common four-chord progressions built on the tonic chord of `key`.
/// Empty when `key` has no readable root.
pub fn chord_suggestions(key: &str) -> Vec<Vec<String>> {
    let key = key.trim();
    let Some(symbol) = ChordSymbol::parse(key) else {
        return Vec::new();
    };

    let progressions = if symbol.is_minor() {
        &MINOR_PROGRESSIONS
    } else {
        &MAJOR_PROGRESSIONS
    };
    let prefer_sharps = key_prefers_sharps(key);

    progressions
        .iter()
        .map(|offsets| {
            offsets
                .iter()
                .map(|&offset| transpose(key, offset, prefer_sharps))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detect_key() {
        assert_eq!(detect_key(&["C", "F", "G", "C"]), Some("C".to_string()));
        assert_eq!(detect_key(&["Am", "F", "C", "G", "Am"]), Some("Am".to_string()));
        assert_eq!(detect_key::<&str>(&[]), None);
        assert_eq!(detect_key(&["N.C.", "x"]), None);
    }

    #[test]
    fn test_detect_key_ties_first_seen() {
        assert_eq!(detect_key(&["G", "D", "D", "G"]), Some("G".to_string()));
        assert_eq!(detect_key(&["Em", "G", "N.C."]), Some("Em".to_string()));
    }

    #[test]
    fn test_detect_key_mode_mix() {
        assert_eq!(detect_key(&["Am", "A7", "A"]), Some("A".to_string()));
        assert_eq!(detect_key(&["Am", "Am7", "A"]), Some("Am".to_string()));
        assert_eq!(detect_key(&["Am", "A"]), Some("A".to_string()));
        assert_eq!(detect_key(&["Bdim", "Bsus4"]), Some("B".to_string()));
    }

    #[test]
    fn test_detect_key_enharmonic_roots_merge() {
        assert_eq!(detect_key(&["Db", "C#", "F"]), Some("Db".to_string()));
    }

    #[test]
    fn test_calculate_capo() {
        assert_eq!(calculate_capo("C", "D"), 2);
        assert_eq!(calculate_capo("D", "C"), 10);
        assert_eq!(calculate_capo("Am", "Cm"), 3);
        assert_eq!(calculate_capo("G", "G"), 0);
        assert_eq!(calculate_capo("Bb", "C#m"), 3);
        assert_eq!(calculate_capo("?", "C"), 0);
    }

    #[test]
    fn test_suggestions_major() {
        assert_eq!(
            chord_suggestions("C"),
            vec![
                vec!["C", "G", "F", "C"],
                vec!["C", "A", "F", "G"],
                vec!["C", "F", "A", "G"],
            ]
        );
        assert_eq!(chord_suggestions("F")[0], vec!["F", "C", "Bb", "F"]);
        assert_eq!(chord_suggestions("E")[1], vec!["E", "C#", "A", "B"]);
    }

    #[test]
    fn test_suggestions_minor() {
        assert_eq!(
            chord_suggestions("Am"),
            vec![
                vec!["Am", "Dm", "Em", "Am"],
                vec!["Am", "Cm", "Em", "Am"],
                vec!["Am", "Dm", "Cm", "Em"],
            ]
        );
        assert_eq!(chord_suggestions("Cm")[2], vec!["Cm", "Fm", "Ebm", "Gm"]);
    }

    #[test]
    fn test_suggestions_follow_tonic_accidental() {
        assert_eq!(chord_suggestions("C#")[0], vec!["C#", "G#", "F#", "C#"]);
        assert_eq!(chord_suggestions("Db")[0], vec!["Db", "Ab", "Gb", "Db"]);
        assert_eq!(chord_suggestions("D#m")[0], vec!["D#m", "G#m", "A#m", "D#m"]);
        assert_eq!(chord_suggestions("A#")[0], vec!["A#", "F", "D#", "A#"]);
    }

    #[test]
    fn test_key_prefers_sharps() {
        assert!(key_prefers_sharps("C#"));
        assert!(key_prefers_sharps("F#m"));
        assert!(!key_prefers_sharps("Gb"));
        assert!(!key_prefers_sharps("F"));
        assert!(!key_prefers_sharps("Dm"));
        assert!(key_prefers_sharps("E"));
        assert!(key_prefers_sharps("?"));
        assert!(!shifted_key_prefers_sharps("C", 1));
        assert!(shifted_key_prefers_sharps("Db", 1));
        assert!(!shifted_key_prefers_sharps("C#m", 9));
    }

    #[test]
    fn test_suggestions_unknown_key() {
        assert!(chord_suggestions("").is_empty());
        assert!(chord_suggestions("H").is_empty());
    }
}
