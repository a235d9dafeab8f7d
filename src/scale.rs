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

//! Scales and scale membership.
//!
//! A [`ScalePattern`] is a named list of semitone offsets from a root. Combining a pattern with a
//! root gives a [`Scale`], whose notes are listed in scale degree order.
//!
//! ```
//! use chord_builder::{note::PitchClass, scale::{scale_notes, Scale, ScalePattern}};
//!
//! let names = scale_notes(PitchClass::C, &ScalePattern::MAJOR)
//!     .into_iter()
//!     .map(|pc| pc.name())
//!     .collect::<Vec<_>>();
//! assert_eq!(names, vec!["C", "D", "E", "F", "G", "A", "B"]);
//!
//! let a_minor_pentatonic = Scale::new(PitchClass::A, "Minor Pentatonic".parse()?);
//! assert!(a_minor_pentatonic.contains(PitchClass::G));
//! assert!(!a_minor_pentatonic.contains(PitchClass::B));
//! # Ok::<(), chord_builder::scale::UnknownScale>(())
//! ```

use crate::note::{PitchClass, PitchClassSet};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A named sequence of semitone offsets from a root, in scale degree order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScalePattern {
    name: &'static str,
    intervals: &'static [u8],
}

impl ScalePattern {
    pub const MAJOR: ScalePattern = ScalePattern {
        name: "Major",
        intervals: &[0, 2, 4, 5, 7, 9, 11],
    };

    /// The natural minor scale.
    pub const MINOR: ScalePattern = ScalePattern {
        name: "Minor",
        intervals: &[0, 2, 3, 5, 7, 8, 10],
    };

    pub const MAJOR_PENTATONIC: ScalePattern = ScalePattern {
        name: "Major Pentatonic",
        intervals: &[0, 2, 4, 7, 9],
    };

    pub const MINOR_PENTATONIC: ScalePattern = ScalePattern {
        name: "Minor Pentatonic",
        intervals: &[0, 3, 5, 7, 10],
    };

    pub const BLUES: ScalePattern = ScalePattern {
        name: "Blues",
        intervals: &[0, 3, 5, 6, 7, 10],
    };

    pub const DORIAN: ScalePattern = ScalePattern {
        name: "Dorian",
        intervals: &[0, 2, 3, 5, 7, 9, 10],
    };

    pub const MIXOLYDIAN: ScalePattern = ScalePattern {
        name: "Mixolydian",
        intervals: &[0, 2, 4, 5, 7, 9, 10],
    };

    /// Every named pattern, in the order they are presented to a user.
    pub const ALL: [ScalePattern; 7] = [
        ScalePattern::MAJOR,
        ScalePattern::MINOR,
        ScalePattern::MAJOR_PENTATONIC,
        ScalePattern::MINOR_PENTATONIC,
        ScalePattern::BLUES,
        ScalePattern::DORIAN,
        ScalePattern::MIXOLYDIAN,
    ];

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Semitone offsets from the root. The first offset is always 0.
    pub fn intervals(&self) -> &'static [u8] {
        self.intervals
    }
}

impl fmt::Display for ScalePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The error returned when looking up a scale pattern by a name that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scale: {0:?}")]
pub struct UnknownScale(String);

impl FromStr for ScalePattern {
    type Err = UnknownScale;

    /// Looks up a pattern by name, ignoring case. `"Natural Minor"` is accepted for
    /// [`ScalePattern::MINOR`].
    fn from_str(s: &str) -> Result<ScalePattern, UnknownScale> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("Natural Minor") {
            return Ok(ScalePattern::MINOR);
        }
        ScalePattern::ALL
            .iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| UnknownScale(s.to_owned()))
    }
}

/// The notes of the scale built on `root`, in the order of the pattern's intervals.
pub fn scale_notes(root: PitchClass, pattern: &ScalePattern) -> Vec<PitchClass> {
    pattern
        .intervals
        .iter()
        .map(|&interval| root.transpose(interval as i32))
        .collect()
}

/// A scale pattern rooted on a specific pitch class, such as A minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scale {
    root: PitchClass,
    pattern: ScalePattern,
    members: PitchClassSet,
}

impl Scale {
    pub fn new(root: PitchClass, pattern: ScalePattern) -> Scale {
        let members = scale_notes(root, &pattern).into_iter().collect();
        Scale {
            root,
            pattern,
            members,
        }
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn pattern(&self) -> &ScalePattern {
        &self.pattern
    }

    /// See [`scale_notes`].
    pub fn notes(&self) -> Vec<PitchClass> {
        scale_notes(self.root, &self.pattern)
    }

    /// Returns true if `pitch_class` belongs to this scale, in any octave.
    pub fn contains(&self, pitch_class: PitchClass) -> bool {
        self.members.contains(pitch_class)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.pattern)
    }
}
