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

//! Suggestions for a third note that turns two notes into a triad.
//!
//! The rules used by [`suggest_thirds`] are a heuristic rather than an exhaustive search of the
//! triads containing both notes:
//!
//! 1. If the second note is a major third above the first, the fifth above the first note is
//!    suggested as a major chord tone.
//! 2. If the second note is a minor third above the first, the note a perfect fifth above the
//!    *second* note is suggested as a minor chord tone.
//! 3. The fifth above the first note (major) and the minor third above the first note (minor)
//!    are always suggested after that.
//!
//! No deduplication is done, so the same suggestion can appear twice:
//!
//! ```
//! use chord_builder::{
//!     advisor::{suggest_thirds, Suggestion},
//!     chord::Quality,
//!     note::PitchClass,
//! };
//!
//! assert_eq!(
//!     suggest_thirds(&[PitchClass::C, PitchClass::E]),
//!     vec![
//!         Suggestion::new(PitchClass::G, Quality::Major),
//!         Suggestion::new(PitchClass::G, Quality::Major),
//!         Suggestion::new(PitchClass::D_SHARP, Quality::Minor),
//!     ]
//! );
//! ```

use crate::{chord::Quality, note::PitchClass};
use serde::{Deserialize, Serialize};
use std::fmt;

const MAJOR_THIRD: u8 = 4;
const MINOR_THIRD: u8 = 3;
const PERFECT_FIFTH: i32 = 7;

/// A proposed note, and the quality of the triad it is meant to complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    pub note: PitchClass,
    pub quality: Quality,
}

impl Suggestion {
    pub fn new(note: PitchClass, quality: Quality) -> Suggestion {
        Suggestion { note, quality }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quality = match self.quality {
            Quality::Major => "Major",
            Quality::Minor => "Minor",
        };
        write!(f, "{} ({})", self.note, quality)
    }
}

/// Suggest notes that would complete a triad with the two given notes.
///
/// Returns an empty list unless exactly two notes are given. Otherwise returns two or three
/// suggestions, following the rules in the [module documentation](self).
pub fn suggest_thirds(notes: &[PitchClass]) -> Vec<Suggestion> {
    let (first, second) = match notes {
        [first, second] => (*first, *second),
        _ => return Vec::new(),
    };

    let mut suggestions = Vec::with_capacity(3);

    match first.semitones_to(second) {
        MAJOR_THIRD => {
            suggestions.push(Suggestion::new(first.transpose(PERFECT_FIFTH), Quality::Major))
        }
        MINOR_THIRD => {
            suggestions.push(Suggestion::new(second.transpose(PERFECT_FIFTH), Quality::Minor))
        }
        _ => {}
    }

    suggestions.push(Suggestion::new(first.transpose(PERFECT_FIFTH), Quality::Major));
    suggestions.push(Suggestion::new(
        first.transpose(MINOR_THIRD as i32),
        Quality::Minor,
    ));

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_requires_exactly_two_notes() {
        assert!(suggest_thirds(&[]).is_empty());
        assert!(suggest_thirds(&[PitchClass::C]).is_empty());
        assert!(suggest_thirds(&[PitchClass::C, PitchClass::E, PitchClass::G]).is_empty());
    }

    #[test]
    fn test_major_third_suggests_fifth() {
        let suggestions = suggest_thirds(&[PitchClass::C, PitchClass::E]);
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions.contains(&Suggestion::new(PitchClass::G, Quality::Major)));
    }

    #[test]
    fn test_minor_third_suggests_fifth_above_second_note() {
        assert_eq!(
            suggest_thirds(&[PitchClass::A, PitchClass::C]),
            vec![
                Suggestion::new(PitchClass::G, Quality::Minor),
                Suggestion::new(PitchClass::E, Quality::Major),
                Suggestion::new(PitchClass::C, Quality::Minor),
            ]
        );
    }

    #[test]
    fn test_other_intervals_only_get_generic_suggestions() {
        assert_eq!(
            suggest_thirds(&[PitchClass::D, PitchClass::A]),
            vec![
                Suggestion::new(PitchClass::A, Quality::Major),
                Suggestion::new(PitchClass::F, Quality::Minor),
            ]
        );
        // Interval is measured upward from the first note, so E -> C is a minor sixth.
        assert_eq!(suggest_thirds(&[PitchClass::E, PitchClass::C]).len(), 2);
        assert_eq!(suggest_thirds(&[PitchClass::E, PitchClass::E]).len(), 2);
    }

    #[test]
    fn test_interval_wraps_around_the_octave() {
        // A# -> D is four semitones up through C.
        assert_eq!(
            suggest_thirds(&[PitchClass::A_SHARP, PitchClass::D])[0],
            Suggestion::new(PitchClass::F, Quality::Major)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Suggestion::new(PitchClass::G_SHARP, Quality::Minor).to_string(),
            "G# (Minor)"
        );
    }
}
