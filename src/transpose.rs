use crate::types::chord::ChordSymbol;
use crate::types::pitch::PitchClass;

/// A second accidental right after the root (`Cbb`, `F##`) would survive
/// next to the respelled root, so such names are not transposed.
fn has_stacked_accidental(rest: &str) -> bool {
    rest.starts_with('#') || rest.starts_with('b')
}

/// Moves a bare note name (plus any trailing text) by `semitones`.
/// Returns `None` when `note` does not start with a note name.
fn transpose_note(note: &str, semitones: i32, prefer_sharps: bool) -> Option<String> {
    let (pitch, consumed) = PitchClass::parse_prefix(note)?;
    if has_stacked_accidental(&note[consumed..]) {
        return None;
    }
    let spelled = pitch.transpose(semitones).spell(prefer_sharps);
    Some(format!("{}{}", spelled, &note[consumed..]))
}

/// Transposes a chord symbol by `semitones`, re-spelling the root and any
/// slash bass. Symbols without a recognizable root come back unchanged, and
/// a shift of zero is always the identity.
pub fn transpose(chord: &str, semitones: i32, prefer_sharps: bool) -> String {
    if semitones == 0 {
        return chord.to_string();
    }

    let Some(symbol) = ChordSymbol::parse(chord) else {
        log::debug!("Cannot transpose \"{}\": no root note", chord);
        return chord.to_string();
    };
    if has_stacked_accidental(symbol.quality) {
        log::debug!("Cannot transpose \"{}\": double accidental", chord);
        return chord.to_string();
    }

    let root = symbol.root.transpose(semitones).spell(prefer_sharps);
    let mut result = format!("{}{}", root, symbol.quality);
    if let Some(bass) = symbol.bass {
        result.push('/');
        match transpose_note(bass, semitones, prefer_sharps) {
            Some(bass) => result.push_str(&bass),
            None => result.push_str(bass),
        }
    }
    result
}
