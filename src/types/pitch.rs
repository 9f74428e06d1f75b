use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Spellings indexed by pitch class, sharp side.
const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Spellings indexed by pitch class, flat side.
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid note name \"{0}\"")]
pub struct InvalidNoteName(pub String);

/// One of the twelve octave-independent pitch classes, C = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Reduces any integer into 0..=11.
    pub fn new(value: i32) -> Self {
        Self(value.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn transpose(self, semitones: i32) -> Self {
        Self::new(self.0 as i32 + semitones)
    }

    /// Upward distance from `self` to `other`, always in 0..=11.
    pub fn distance_to(self, other: PitchClass) -> u8 {
        (other.0 as i32 - self.0 as i32).rem_euclid(12) as u8
    }

    pub fn is_natural(self) -> bool {
        SHARP_NAMES[self.0 as usize].len() == 1
    }

    /// Naturals have a single spelling; the rest pick a side.
    pub fn spell(self, prefer_sharps: bool) -> &'static str {
        if prefer_sharps {
            SHARP_NAMES[self.0 as usize]
        } else {
            FLAT_NAMES[self.0 as usize]
        }
    }

    /// Reads a root at the start of `s`: a letter A-G and at most one
    /// accidental. Returns the pitch class and the number of bytes consumed.
    pub fn parse_prefix(s: &str) -> Option<(PitchClass, usize)> {
        let mut chars = s.chars();
        let base = match chars.next()? {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };
        match chars.next() {
            Some('#') => Some((PitchClass::new(base + 1), 2)),
            Some('b') => Some((PitchClass::new(base - 1), 2)),
            _ => Some((PitchClass::new(base), 1)),
        }
    }
}

impl FromStr for PitchClass {
    type Err = InvalidNoteName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::parse_prefix(s) {
            Some((pitch, consumed)) if consumed == s.len() => Ok(pitch),
            _ => Err(InvalidNoteName(s.to_string())),
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spell(true))
    }
}
