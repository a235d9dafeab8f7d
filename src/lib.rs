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

//! Music theory for exploring chords and scales on a guitar fretboard.
//!
//! # Introduction
//!
//! This crate holds the logic behind a fretboard chord builder: a user selects positions on the
//! neck of a guitar, and the notes, chords, and suggestions that follow from that selection are
//! computed here. Drawing the fretboard and talking to the network are left to the application
//! that uses this crate.
//!
//! Everything in this crate is a pure function of its input. Application state, such as the
//! current selection, key, and scale, is owned by the caller and passed in by reference.
//!
//! The crate is made of the following modules, listed from the bottom up:
//!
//!  * [`note`](crate::note) - The twelve-tone note alphabet. Notes are
//!    [`PitchClass`](note::PitchClass) values with wrapping, octave-free arithmetic.
//!
//!  * [`tuning`](crate::tuning) - Guitar tunings, and resolving a string and fret to the note it
//!    sounds. Named tunings are kept in a [`TuningTable`](tuning::TuningTable) that can be loaded
//!    from JSON.
//!
//!  * [`scale`](crate::scale) - Named scale patterns and scale membership, used to overlay a scale
//!    on the fretboard.
//!
//!  * [`chord`](crate::chord) - Detection of the major and minor triads present in a set of notes.
//!
//!  * [`advisor`](crate::advisor) - Suggestions for a third note that completes a triad when two
//!    notes are selected.
//!
//!  * [`fretboard`](crate::fretboard) - The selection state of the fretboard, which ties the
//!    modules above together.
//!
//!  * [`advice`](crate::advice) - The request body and prompt for asking a language model for
//!    learning suggestions.
//!
//! # Examples
//!
//! ```
//! use chord_builder::{
//!     fretboard::Fretboard,
//!     note::PitchClass,
//!     scale::{Scale, ScalePattern},
//!     tuning::{FrettedPosition, TuningTable},
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Pick a tuning by the name it is shown to the user under.
//!     let tunings = TuningTable::default();
//!     let tuning = *tunings.get("Drop D (DADGBE)")?;
//!
//!     // D, A, and F# on the three lowest strings.
//!     let mut fretboard = Fretboard::new(tuning);
//!     fretboard.clear();
//!     fretboard.toggle(FrettedPosition::new(0, 0))?;
//!     fretboard.toggle(FrettedPosition::new(1, 0))?;
//!     fretboard.toggle(FrettedPosition::new(2, 4))?;
//!
//!     let chords = fretboard.chords();
//!     assert_eq!(chords.len(), 1);
//!     assert_eq!(chords[0].to_string(), "D major");
//!
//!     // Every selected note is in the key of D major.
//!     let key = Scale::new(PitchClass::D, "Major".parse()?);
//!     assert!(fretboard.selected().iter().all(|n| key.contains(n.note)));
//!     assert!(fretboard
//!         .scale_positions(&key)
//!         .contains(&FrettedPosition::new(0, 2)));
//!
//!     Ok(())
//! }
//! ```

pub mod advice;
pub mod advisor;
pub mod chord;
pub mod fretboard;
pub mod note;
pub mod scale;
pub mod tuning;
