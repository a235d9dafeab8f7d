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

//! Guitar tunings and note resolution.
//!
//! A [`Tuning`] assigns an open-string pitch class to each of the six strings of a guitar.
//! String index 0 is the lowest string. Given a tuning, any [`FrettedPosition`] can be resolved
//! to the pitch class it sounds:
//!
//! ```
//! use chord_builder::{note::PitchClass, tuning::{FrettedPosition, Tuning}};
//!
//! let tuning = Tuning::STANDARD;
//!
//! // Third fret of the low E string.
//! assert_eq!(tuning.resolve(0, 3), PitchClass::G);
//! assert_eq!(FrettedPosition::new(5, 1).resolve(&tuning), PitchClass::F);
//! ```
//!
//! # Tuning Tables
//!
//! The tunings offered to a user are kept in a [`TuningTable`], an ordered list of named tunings.
//! The default table contains the standard and drop D tunings. Other tables can be loaded from
//! JSON:
//!
//! ```
//! use chord_builder::tuning::TuningTable;
//!
//! let json = r#"[
//!     { "name": "Open G (DGDGBD)", "strings": ["D", "G", "D", "G", "B", "D"] }
//! ]"#;
//!
//! let table = TuningTable::from_reader(json.as_bytes())?;
//! assert_eq!(table.names().collect::<Vec<_>>(), vec!["Open G (DGDGBD)"]);
//! # Ok::<(), chord_builder::tuning::Error>(())
//! ```

use crate::note::PitchClass;
use serde::{Deserialize, Serialize};
use std::{
    convert::TryFrom,
    fmt, fs,
    io::{self, Read},
    path::Path,
};
use thiserror::Error;

/// The number of strings on the instrument.
pub const STRINGS: usize = 6;

/// Open-string pitch classes for each string, lowest string first.
///
/// A tuning always has exactly [`STRINGS`] entries. When deserialized it is read from a list of
/// note names, and lists of any other length are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<PitchClass>", into = "Vec<PitchClass>")]
pub struct Tuning([PitchClass; STRINGS]);

impl Tuning {
    /// Standard tuning, E A D G B E.
    pub const STANDARD: Tuning = Tuning([
        PitchClass::E,
        PitchClass::A,
        PitchClass::D,
        PitchClass::G,
        PitchClass::B,
        PitchClass::E,
    ]);

    /// Drop D tuning, D A D G B E.
    pub const DROP_D: Tuning = Tuning([
        PitchClass::D,
        PitchClass::A,
        PitchClass::D,
        PitchClass::G,
        PitchClass::B,
        PitchClass::E,
    ]);

    pub fn new(strings: [PitchClass; STRINGS]) -> Tuning {
        Tuning(strings)
    }

    /// The open-string pitch classes, lowest string first.
    pub fn strings(&self) -> &[PitchClass; STRINGS] {
        &self.0
    }

    /// The pitch class of an open string.
    ///
    /// # Panics
    ///
    /// Panics if `string` is not less than [`STRINGS`].
    pub fn open(&self, string: usize) -> PitchClass {
        self.0[string]
    }

    /// The pitch class sounded by pressing `string` down at `fret`.
    ///
    /// Fret 0 is the open string. There is no upper limit on `fret`; every 12 frets the result
    /// repeats.
    ///
    /// # Panics
    ///
    /// Panics if `string` is not less than [`STRINGS`].
    pub fn resolve(&self, string: usize, fret: u32) -> PitchClass {
        self.open(string).transpose((fret % 12) as i32)
    }
}

impl Default for Tuning {
    /// Returns [`Tuning::STANDARD`].
    fn default() -> Tuning {
        Tuning::STANDARD
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pitch_class in self.0.iter() {
            write!(f, "{}", pitch_class)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<PitchClass>> for Tuning {
    type Error = Error;

    fn try_from(strings: Vec<PitchClass>) -> Result<Tuning> {
        let len = strings.len();
        <[PitchClass; STRINGS]>::try_from(strings)
            .map(Tuning)
            .map_err(|_| Error::StringCount(len))
    }
}

impl From<Tuning> for Vec<PitchClass> {
    fn from(tuning: Tuning) -> Vec<PitchClass> {
        tuning.0.to_vec()
    }
}

/// Resolve the pitch class sounded at a string and fret in a tuning.
///
/// Equivalent to [`Tuning::resolve`].
pub fn resolve(tuning: &Tuning, string: usize, fret: u32) -> PitchClass {
    tuning.resolve(string, fret)
}

/// A string and fret on the fretboard.
///
/// A position does not know what note it sounds until it is resolved against a [`Tuning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FrettedPosition {
    pub string: usize,
    pub fret: u32,
}

impl FrettedPosition {
    pub fn new(string: usize, fret: u32) -> FrettedPosition {
        FrettedPosition { string, fret }
    }

    /// The pitch class this position sounds in `tuning`.
    ///
    /// # Panics
    ///
    /// Panics if the string index is not less than [`STRINGS`].
    pub fn resolve(&self, tuning: &Tuning) -> PitchClass {
        tuning.resolve(self.string, self.fret)
    }
}

/// A tuning with a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedTuning {
    pub name: String,
    pub strings: Tuning,
}

/// An ordered collection of named tunings.
///
/// Names are unique within a table. The order of the table is the order tunings were inserted,
/// which is the order they are presented to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuningTable {
    tunings: Vec<NamedTuning>,
}

impl Default for TuningTable {
    /// Returns a table containing `"Standard (EADGBE)"` and `"Drop D (DADGBE)"`, in that order.
    fn default() -> TuningTable {
        TuningTable {
            tunings: vec![
                NamedTuning {
                    name: "Standard (EADGBE)".to_owned(),
                    strings: Tuning::STANDARD,
                },
                NamedTuning {
                    name: "Drop D (DADGBE)".to_owned(),
                    strings: Tuning::DROP_D,
                },
            ],
        }
    }
}

impl TuningTable {
    /// Create an empty table.
    pub fn new() -> TuningTable {
        TuningTable {
            tunings: Vec::new(),
        }
    }

    /// Read a table from a JSON list of `{"name": ..., "strings": [...]}` objects.
    pub fn from_reader(reader: impl Read) -> Result<TuningTable> {
        let tunings: Vec<NamedTuning> = serde_json::from_reader(reader).map_err(Error::Parse)?;
        let mut table = TuningTable::new();
        for tuning in tunings {
            table.insert(tuning.name, tuning.strings)?;
        }
        log::debug!("loaded {} tunings", table.tunings.len());
        Ok(table)
    }

    /// Read a table from a JSON file. See [`TuningTable::from_reader`] for the format.
    pub fn from_path(path: impl AsRef<Path>) -> Result<TuningTable> {
        let path = path.as_ref();
        log::debug!("loading tunings from {}", path.display());
        let file = fs::File::open(path).map_err(Error::Io)?;
        TuningTable::from_reader(io::BufReader::new(file))
    }

    /// Write this table as JSON in the format read by [`TuningTable::from_reader`].
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.tunings).map_err(Error::Serialize)
    }

    /// Add a tuning to the end of the table.
    ///
    /// Fails if a tuning with the same name is already present.
    pub fn insert(&mut self, name: impl Into<String>, tuning: Tuning) -> Result<()> {
        let name = name.into();
        if self.tunings.iter().any(|t| t.name == name) {
            return Err(Error::DuplicateName(name));
        }
        self.tunings.push(NamedTuning {
            name,
            strings: tuning,
        });
        Ok(())
    }

    /// Look up a tuning by name.
    pub fn get(&self, name: &str) -> Result<&Tuning> {
        self.tunings
            .iter()
            .find(|t| t.name == name)
            .map(|t| &t.strings)
            .ok_or_else(|| Error::UnknownTuning(name.to_owned()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tunings.iter().map(|t| t.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedTuning> {
        self.tunings.iter()
    }

    pub fn len(&self) -> usize {
        self.tunings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tunings.is_empty()
    }
}

/// A specialized [`Result`] type for tuning errors.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for tunings and tuning tables.
#[derive(Debug, Error)]
pub enum Error {
    #[error("a tuning must have {} strings, got {0}", STRINGS)]
    StringCount(usize),
    #[error("no tuning named {0:?}")]
    UnknownTuning(String),
    #[error("tuning {0:?} is defined more than once")]
    DuplicateName(String),
    #[error("failed to read tuning table: {0}")]
    Io(io::Error),
    #[error("failed to parse tuning table: {0}")]
    Parse(serde_json::Error),
    #[error("failed to serialize tuning table: {0}")]
    Serialize(serde_json::Error),
}
