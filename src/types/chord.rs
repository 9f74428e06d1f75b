use crate::PitchClass;

/// Quality of a chord as far as key detection cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Major,
    Minor,
    /// Diminished, augmented, suspended and power chords.
    Other,
}

impl Mode {
    /// Heuristic read of a literal quality suffix.
    pub fn from_quality(quality: &str) -> Self {
        if quality.starts_with("maj") {
            Mode::Major
        } else if quality.starts_with("dim")
            || quality.starts_with("aug")
            || quality.starts_with("sus")
            || quality.starts_with('°')
            || quality.starts_with('+')
            || quality == "5"
        {
            Mode::Other
        } else if quality.starts_with('m') || quality.starts_with('-') {
            Mode::Minor
        } else {
            Mode::Major
        }
    }
}

/// A chord symbol split into root, opaque quality and optional bass.
///
/// Borrowed from the symbol text; the quality is never interpreted beyond
/// [`Mode::from_quality`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSymbol<'a> {
    pub root: PitchClass,
    pub root_name: &'a str,
    pub quality: &'a str,
    pub bass: Option<&'a str>,
}

impl<'a> ChordSymbol<'a> {
    /// Returns `None` when the symbol does not start with a note name.
    pub fn parse(symbol: &'a str) -> Option<Self> {
        let (main, bass) = match symbol.split_once('/') {
            Some((main, bass)) => (main, Some(bass)),
            None => (symbol, None),
        };
        let (root, consumed) = PitchClass::parse_prefix(main)?;
        Some(Self {
            root,
            root_name: &main[..consumed],
            quality: &main[consumed..],
            bass,
        })
    }

    pub fn mode(&self) -> Mode {
        Mode::from_quality(self.quality)
    }

    pub fn is_minor(&self) -> bool {
        self.mode() == Mode::Minor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chord() {
        let chord = ChordSymbol::parse("F#m7/C#").unwrap();
        assert_eq!(chord.root.value(), 6);
        assert_eq!(chord.root_name, "F#");
        assert_eq!(chord.quality, "m7");
        assert_eq!(chord.bass, Some("C#"));

        let chord = ChordSymbol::parse("Bbsus4").unwrap();
        assert_eq!(chord.root_name, "Bb");
        assert_eq!(chord.quality, "sus4");
        assert_eq!(chord.bass, None);

        assert!(ChordSymbol::parse("N.C.").is_none());
        assert!(ChordSymbol::parse("/G").is_none());
        assert!(ChordSymbol::parse("").is_none());
    }

    #[test]
    fn test_modes() {
        assert_eq!(Mode::from_quality(""), Mode::Major);
        assert_eq!(Mode::from_quality("7"), Mode::Major);
        assert_eq!(Mode::from_quality("maj7"), Mode::Major);
        assert_eq!(Mode::from_quality("add9"), Mode::Major);
        assert_eq!(Mode::from_quality("m"), Mode::Minor);
        assert_eq!(Mode::from_quality("m7b5"), Mode::Minor);
        assert_eq!(Mode::from_quality("min"), Mode::Minor);
        assert_eq!(Mode::from_quality("-7"), Mode::Minor);
        assert_eq!(Mode::from_quality("dim7"), Mode::Other);
        assert_eq!(Mode::from_quality("sus2"), Mode::Other);
        assert_eq!(Mode::from_quality("5"), Mode::Other);
    }
}
