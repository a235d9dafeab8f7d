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

//! Triad detection.
//!
//! [`detect_chords`] looks at a collection of sounding pitch classes and reports every major and
//! minor triad that is fully contained in it. Detection only looks at which pitch classes are
//! present, so it does not care about octaves, voicings, inversions, or how many strings are
//! playing the same note.
//!
//! ```
//! use chord_builder::{chord::{detect_chords, Chord, Quality}, note::PitchClass};
//!
//! let chords = detect_chords(vec![PitchClass::E, PitchClass::C, PitchClass::G, PitchClass::E]);
//! assert_eq!(chords, vec![Chord::new(PitchClass::C, Quality::Major)]);
//! assert_eq!(chords[0].to_string(), "C major");
//! ```

use crate::note::{PitchClass, PitchClassSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The quality of a triad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quality {
    Major,
    Minor,
}

impl Quality {
    /// Both qualities, in the order they are tested for a root.
    pub const ALL: [Quality; 2] = [Quality::Major, Quality::Minor];

    /// Semitone offsets of the root, third, and fifth.
    pub fn intervals(self) -> [u8; 3] {
        match self {
            Quality::Major => [0, 4, 7],
            Quality::Minor => [0, 3, 7],
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Quality::Major => "major",
            Quality::Minor => "minor",
        })
    }
}

/// A major or minor triad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Chord {
    pub root: PitchClass,
    pub quality: Quality,
}

impl Chord {
    pub fn new(root: PitchClass, quality: Quality) -> Chord {
        Chord { root, quality }
    }

    /// The root, third, and fifth of this chord.
    pub fn notes(&self) -> [PitchClass; 3] {
        let [root, third, fifth] = self.quality.intervals();
        [
            self.root.transpose(root as i32),
            self.root.transpose(third as i32),
            self.root.transpose(fifth as i32),
        ]
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.quality)
    }
}

/// Every major and minor triad whose three notes are all in `pitch_classes`.
///
/// Duplicate pitch classes are ignored. Candidate roots are tested from C upward, and for each
/// root a major triad is tested before a minor one; the result is in that order. An empty result
/// means no triad was found.
pub fn detect_chords(pitch_classes: impl IntoIterator<Item = PitchClass>) -> Vec<Chord> {
    let present: PitchClassSet = pitch_classes.into_iter().collect();
    if present.len() < 3 {
        return Vec::new();
    }

    let mut chords = Vec::new();
    for root in PitchClass::all() {
        for &quality in Quality::ALL.iter() {
            let chord = Chord::new(root, quality);
            if present.contains_all(chord.notes().iter().copied()) {
                chords.push(chord);
            }
        }
    }
    chords
}
