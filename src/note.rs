// Chord Builder
// Copyright (C) 2021  Wesley Merkel
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The twelve-tone note alphabet.
//!
//! Every note in this crate is a [`PitchClass`]: one of the twelve note names with the octave
//! thrown away. Pitch classes are stored as an index into [`NAMES`] and all arithmetic on them
//! wraps modulo 12, so no operation can produce a value outside of the alphabet.
//!
//! # Examples
//!
//! ```
//! use chord_builder::note::PitchClass;
//!
//! let e: PitchClass = "E".parse()?;
//! assert_eq!(e.transpose(3), PitchClass::G);
//! assert_eq!(e.transpose(-5), PitchClass::B);
//! assert_eq!(PitchClass::C.semitones_to(e), 4);
//! assert_eq!(PitchClass::new(13).name(), "C#");
//! # Ok::<(), chord_builder::note::ParseError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{
    convert::TryFrom,
    fmt,
    iter::FromIterator,
    str::FromStr,
};
use thiserror::Error;

/// The number of pitch classes in an octave.
pub const SEMITONES: u8 = 12;

/// Canonical note names, indexed by pitch class. Accidentals are always spelled as sharps.
pub const NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A note name independent of octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);
    pub const C_SHARP: PitchClass = PitchClass(1);
    pub const D: PitchClass = PitchClass(2);
    pub const D_SHARP: PitchClass = PitchClass(3);
    pub const E: PitchClass = PitchClass(4);
    pub const F: PitchClass = PitchClass(5);
    pub const F_SHARP: PitchClass = PitchClass(6);
    pub const G: PitchClass = PitchClass(7);
    pub const G_SHARP: PitchClass = PitchClass(8);
    pub const A: PitchClass = PitchClass(9);
    pub const A_SHARP: PitchClass = PitchClass(10);
    pub const B: PitchClass = PitchClass(11);

    /// Create a pitch class from an index, wrapping it into the octave.
    pub fn new(index: u8) -> PitchClass {
        PitchClass(index % SEMITONES)
    }

    /// Returns an iterator over all twelve pitch classes, starting at C.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..SEMITONES).map(PitchClass)
    }

    /// The index of this pitch class, in `[0, 11]`.
    pub fn index(self) -> u8 {
        self.0
    }

    /// The canonical (sharp) name of this pitch class.
    pub fn name(self) -> &'static str {
        NAMES[self.0 as usize]
    }

    /// Move this pitch class up (or down, for negative values) by a number of semitones.
    pub fn transpose(self, semitones: i32) -> PitchClass {
        let index = (self.0 as i32 + semitones).rem_euclid(SEMITONES as i32);
        PitchClass(index as u8)
    }

    /// The number of semitones to go up from this pitch class to reach `other`, in `[0, 11]`.
    pub fn semitones_to(self, other: PitchClass) -> u8 {
        (other.0 + SEMITONES - self.0) % SEMITONES
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The error returned when text does not name a note.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown note name: {0:?}")]
pub struct ParseError(String);

impl FromStr for PitchClass {
    type Err = ParseError;

    /// Parses a note name.
    ///
    /// Accepts the canonical sharp names as well as `♯`, flat spellings (`Bb`, `E♭`), and a
    /// lowercase letter. Flats are normalized to the enharmonic sharp.
    fn from_str(s: &str) -> Result<PitchClass, ParseError> {
        let err = || ParseError(s.to_owned());
        let mut chars = s.trim().chars();

        let natural = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('C') => PitchClass::C,
            Some('D') => PitchClass::D,
            Some('E') => PitchClass::E,
            Some('F') => PitchClass::F,
            Some('G') => PitchClass::G,
            Some('A') => PitchClass::A,
            Some('B') => PitchClass::B,
            _ => return Err(err()),
        };

        let accidental = match chars.next() {
            None => 0,
            Some('#') | Some('♯') => 1,
            Some('b') | Some('♭') => -1,
            Some(_) => return Err(err()),
        };

        if chars.next().is_some() {
            return Err(err());
        }

        Ok(natural.transpose(accidental))
    }
}

impl TryFrom<String> for PitchClass {
    type Error = ParseError;

    fn try_from(s: String) -> Result<PitchClass, ParseError> {
        s.parse()
    }
}

impl From<PitchClass> for String {
    fn from(pitch_class: PitchClass) -> String {
        pitch_class.name().to_owned()
    }
}

/// A set of pitch classes.
///
/// Inserting the same pitch class twice has no effect, which makes this the natural input for
/// anything that only cares about which notes are sounding and not how often. Iteration yields
/// pitch classes in ascending order starting from C.
///
/// ```
/// use chord_builder::note::{PitchClass, PitchClassSet};
///
/// let set: PitchClassSet = vec![PitchClass::G, PitchClass::C, PitchClass::G]
///     .into_iter()
///     .collect();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![PitchClass::C, PitchClass::G]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PitchClassSet(u16);

impl PitchClassSet {
    /// Create an empty set.
    pub fn new() -> PitchClassSet {
        PitchClassSet(0)
    }

    pub fn insert(&mut self, pitch_class: PitchClass) {
        self.0 |= 1 << pitch_class.0;
    }

    pub fn contains(&self, pitch_class: PitchClass) -> bool {
        self.0 & (1 << pitch_class.0) != 0
    }

    /// Returns true if every pitch class yielded by `pitch_classes` is in this set.
    pub fn contains_all(&self, pitch_classes: impl IntoIterator<Item = PitchClass>) -> bool {
        pitch_classes.into_iter().all(|pc| self.contains(pc))
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        PitchClass::all().filter(move |pc| self.contains(*pc))
    }
}

impl FromIterator<PitchClass> for PitchClassSet {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> PitchClassSet {
        let mut set = PitchClassSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<PitchClass> for PitchClassSet {
    fn extend<I: IntoIterator<Item = PitchClass>>(&mut self, iter: I) {
        for pitch_class in iter {
            self.insert(pitch_class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_parse() {
        for pitch_class in PitchClass::all() {
            assert_eq!(pitch_class.name().parse(), Ok(pitch_class));
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("Eb".parse(), Ok(PitchClass::D_SHARP));
        assert_eq!("E♭".parse(), Ok(PitchClass::D_SHARP));
        assert_eq!("F♯".parse(), Ok(PitchClass::F_SHARP));
        assert_eq!("Cb".parse(), Ok(PitchClass::B));
        assert_eq!("B#".parse(), Ok(PitchClass::C));
        assert_eq!(" g ".parse(), Ok(PitchClass::G));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<PitchClass>().is_err());
        assert!("H".parse::<PitchClass>().is_err());
        assert!("C##".parse::<PitchClass>().is_err());
        assert!("Cx".parse::<PitchClass>().is_err());
        assert_eq!(
            "H".parse::<PitchClass>().unwrap_err().to_string(),
            "unknown note name: \"H\""
        );
    }

    #[test]
    fn test_arithmetic_wraps() {
        assert_eq!(PitchClass::new(12), PitchClass::C);
        assert_eq!(PitchClass::new(255).index(), 255 % 12);
        assert_eq!(PitchClass::B.transpose(1), PitchClass::C);
        assert_eq!(PitchClass::C.transpose(-1), PitchClass::B);
        assert_eq!(PitchClass::C.transpose(-25), PitchClass::B);
        assert_eq!(PitchClass::E.semitones_to(PitchClass::C), 8);
        assert_eq!(PitchClass::A.semitones_to(PitchClass::A), 0);
        for pitch_class in PitchClass::all() {
            for semitones in -30..30 {
                assert!(pitch_class.transpose(semitones).index() < SEMITONES);
            }
        }
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&vec![PitchClass::C_SHARP, PitchClass::A]).unwrap();
        assert_eq!(json, r#"["C#","A"]"#);
        let parsed: Vec<PitchClass> = serde_json::from_str(r#"["Db","A"]"#).unwrap();
        assert_eq!(parsed, vec![PitchClass::C_SHARP, PitchClass::A]);
        assert!(serde_json::from_str::<PitchClass>(r#""Q""#).is_err());
    }

    #[test]
    fn test_set_collapses_duplicates() {
        let mut set = PitchClassSet::new();
        assert!(set.is_empty());
        set.insert(PitchClass::E);
        set.insert(PitchClass::E);
        set.insert(PitchClass::C);
        assert_eq!(set.len(), 2);
        assert!(set.contains(PitchClass::C));
        assert!(!set.contains(PitchClass::G));
        assert!(set.contains_all(vec![PitchClass::C, PitchClass::E]));
        assert!(!set.contains_all(vec![PitchClass::C, PitchClass::G]));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![PitchClass::C, PitchClass::E]);
    }
}
