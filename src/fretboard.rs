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

//! The selection state of a guitar fretboard.
//!
//! A [`Fretboard`] tracks which positions a user has selected. Like a real guitar, each string
//! can sound at most one fret at a time: selecting a fret on a string moves that string's
//! selection, and selecting the active fret again mutes the string.
//!
//! The fretboard owns no music theory of its own. Its query methods resolve the selection
//! against the current [`Tuning`] and hand the result to [`detect_chords`] and
//! [`suggest_thirds`].
//!
//! # Examples
//!
//! ```
//! use chord_builder::{
//!     chord::{Chord, Quality},
//!     fretboard::Fretboard,
//!     note::PitchClass,
//!     tuning::{FrettedPosition, Tuning},
//! };
//!
//! // Every open string rings on a new fretboard.
//! let mut fretboard = Fretboard::new(Tuning::STANDARD);
//! assert_eq!(fretboard.selected().len(), 6);
//!
//! // Play C, E, and G on the A, D, and G strings.
//! fretboard.clear();
//! fretboard.toggle(FrettedPosition::new(1, 3))?; // C
//! fretboard.toggle(FrettedPosition::new(2, 2))?; // E
//! fretboard.toggle(FrettedPosition::new(3, 0))?; // G
//!
//! assert_eq!(fretboard.chords(), vec![Chord::new(PitchClass::C, Quality::Major)]);
//! # Ok::<(), chord_builder::fretboard::Error>(())
//! ```

use crate::{
    advisor::{suggest_thirds, Suggestion},
    chord::{detect_chords, Chord},
    note::{PitchClass, PitchClassSet},
    scale::Scale,
    tuning::{FrettedPosition, Tuning, STRINGS},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The highest selectable fret. Fret 0 is the open string.
pub const FRETS: u32 = 12;

/// A selected position together with the note it sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedNote {
    pub string: usize,
    pub fret: u32,
    pub note: PitchClass,
}

impl SelectedNote {
    pub fn position(&self) -> FrettedPosition {
        FrettedPosition::new(self.string, self.fret)
    }
}

/// The error type for fretboard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(
        "position (string {}, fret {}) is off the fretboard",
        .0.string,
        .0.fret
    )]
    OutOfRange(FrettedPosition),
}

/// Which fret, if any, is selected on each string of a guitar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fretboard {
    tuning: Tuning,
    frets: [Option<u32>; STRINGS],
}

impl Default for Fretboard {
    fn default() -> Fretboard {
        Fretboard::new(Tuning::default())
    }
}

impl Fretboard {
    /// Create a fretboard with every open string selected.
    pub fn new(tuning: Tuning) -> Fretboard {
        Fretboard {
            tuning,
            frets: [Some(0); STRINGS],
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Retune the guitar. The selected positions stay where they are and sound new notes.
    pub fn set_tuning(&mut self, tuning: Tuning) {
        log::debug!("retuning {} -> {}", self.tuning, tuning);
        self.tuning = tuning;
    }

    /// Returns true if `position` is on the fretboard.
    pub fn contains(position: FrettedPosition) -> bool {
        position.string < STRINGS && position.fret <= FRETS
    }

    /// The selected fret on `string`, if the string is sounding.
    ///
    /// Returns `None` for strings that are not on the fretboard.
    pub fn fret(&self, string: usize) -> Option<u32> {
        self.frets.get(string).copied().flatten()
    }

    pub fn is_selected(&self, position: FrettedPosition) -> bool {
        self.fret(position.string) == Some(position.fret)
    }

    /// Select `position`, or deselect it if it is already selected.
    ///
    /// Selecting a position replaces any other selection on the same string.
    pub fn toggle(&mut self, position: FrettedPosition) -> Result<(), Error> {
        if !Fretboard::contains(position) {
            return Err(Error::OutOfRange(position));
        }

        let slot = &mut self.frets[position.string];
        if *slot == Some(position.fret) {
            log::debug!("deselect string {} fret {}", position.string, position.fret);
            *slot = None;
        } else {
            log::debug!("select string {} fret {}", position.string, position.fret);
            *slot = Some(position.fret);
        }
        Ok(())
    }

    /// Deselect every position.
    pub fn clear(&mut self) {
        log::debug!("clearing selection");
        self.frets = [None; STRINGS];
    }

    /// The selected positions and their notes, lowest string first.
    pub fn selected(&self) -> Vec<SelectedNote> {
        self.frets
            .iter()
            .enumerate()
            .filter_map(|(string, fret)| {
                fret.map(|fret| SelectedNote {
                    string,
                    fret,
                    note: self.tuning.resolve(string, fret),
                })
            })
            .collect()
    }

    /// The distinct pitch classes sounded by the selection.
    pub fn pitch_classes(&self) -> PitchClassSet {
        self.selected().into_iter().map(|n| n.note).collect()
    }

    /// The major and minor triads sounded by the selection. See [`detect_chords`].
    pub fn chords(&self) -> Vec<Chord> {
        detect_chords(self.pitch_classes().iter())
    }

    /// Third-note suggestions for the selection.
    ///
    /// Suggestions are only made when exactly two positions are selected, in string order;
    /// otherwise the result is empty. See [`suggest_thirds`].
    pub fn suggestions(&self) -> Vec<Suggestion> {
        let notes = self.selected().into_iter().map(|n| n.note).collect::<Vec<_>>();
        if notes.len() != 2 {
            return Vec::new();
        }
        suggest_thirds(&notes)
    }

    /// Every position on the fretboard that sounds `note`, by string then fret.
    pub fn positions_of(&self, note: PitchClass) -> Vec<FrettedPosition> {
        self.positions()
            .filter(|position| position.resolve(&self.tuning) == note)
            .collect()
    }

    /// Every position on the fretboard whose note is in `scale`, by string then fret.
    pub fn scale_positions(&self, scale: &Scale) -> Vec<FrettedPosition> {
        self.positions()
            .filter(|position| scale.contains(position.resolve(&self.tuning)))
            .collect()
    }

    /// Select a position that sounds `note`.
    ///
    /// A position on a string with nothing selected is preferred. Failing that, the first position
    /// sounding `note` that is not already selected is used, which moves that string's selection.
    /// Positions are searched by string then fret.
    ///
    /// Returns the selected position, or `None` if every position sounding `note` is already
    /// selected.
    pub fn apply_suggestion(&mut self, note: PitchClass) -> Option<FrettedPosition> {
        let candidates = self.positions_of(note);
        let position = candidates
            .iter()
            .find(|position| self.fret(position.string).is_none())
            .or_else(|| candidates.iter().find(|position| !self.is_selected(**position)))
            .copied()?;

        log::debug!("applying suggestion {} at {:?}", note, position);
        self.frets[position.string] = Some(position.fret);
        Some(position)
    }

    fn positions(&self) -> impl Iterator<Item = FrettedPosition> {
        (0..STRINGS)
            .flat_map(|string| (0..=FRETS).map(move |fret| FrettedPosition::new(string, fret)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{chord::Quality, scale::ScalePattern};
    use pretty_assertions::assert_eq;

    fn pos(string: usize, fret: u32) -> FrettedPosition {
        FrettedPosition::new(string, fret)
    }

    #[test]
    fn test_starts_with_open_strings() {
        let fretboard = Fretboard::new(Tuning::STANDARD);
        let notes = fretboard
            .selected()
            .into_iter()
            .map(|n| (n.string, n.fret, n.note.name()))
            .collect::<Vec<_>>();
        assert_eq!(
            notes,
            vec![
                (0, 0, "E"),
                (1, 0, "A"),
                (2, 0, "D"),
                (3, 0, "G"),
                (4, 0, "B"),
                (5, 0, "E"),
            ]
        );
        assert_eq!(
            fretboard.chords(),
            vec![
                Chord::new(PitchClass::E, Quality::Minor),
                Chord::new(PitchClass::G, Quality::Major),
            ]
        );
    }

    #[test]
    fn test_toggle_is_exclusive_per_string() {
        let mut fretboard = Fretboard::new(Tuning::STANDARD);
        fretboard.toggle(pos(0, 3)).unwrap();
        assert_eq!(fretboard.fret(0), Some(3));
        assert!(!fretboard.is_selected(pos(0, 0)));

        fretboard.toggle(pos(0, 5)).unwrap();
        assert_eq!(fretboard.fret(0), Some(5));

        fretboard.toggle(pos(0, 5)).unwrap();
        assert_eq!(fretboard.fret(0), None);
        assert_eq!(fretboard.selected().len(), 5);
    }

    #[test]
    fn test_toggle_rejects_positions_off_the_board() {
        let mut fretboard = Fretboard::default();
        assert_eq!(
            fretboard.toggle(pos(STRINGS, 0)),
            Err(Error::OutOfRange(pos(STRINGS, 0)))
        );
        assert_eq!(
            fretboard.toggle(pos(0, FRETS + 1)),
            Err(Error::OutOfRange(pos(0, FRETS + 1)))
        );
        assert_eq!(
            Error::OutOfRange(pos(0, 13)).to_string(),
            "position (string 0, fret 13) is off the fretboard"
        );
        assert_eq!(fretboard, Fretboard::default());
        assert!(fretboard.toggle(pos(0, FRETS)).is_ok());
    }

    #[test]
    fn test_clear() {
        let mut fretboard = Fretboard::default();
        fretboard.clear();
        assert!(fretboard.selected().is_empty());
        assert!(fretboard.pitch_classes().is_empty());
        assert!(fretboard.chords().is_empty());
        assert!(fretboard.suggestions().is_empty());
    }

    #[test]
    fn test_duplicate_notes_collapse() {
        let mut fretboard = Fretboard::default();
        // Mute the A and D strings, leaving E G B E.
        fretboard.toggle(pos(1, 0)).unwrap();
        fretboard.toggle(pos(2, 0)).unwrap();
        assert_eq!(
            fretboard.pitch_classes().iter().collect::<Vec<_>>(),
            vec![PitchClass::E, PitchClass::G, PitchClass::B]
        );
        assert_eq!(
            fretboard.chords(),
            vec![Chord::new(PitchClass::E, Quality::Minor)]
        );
    }

    #[test]
    fn test_retuning_keeps_selection() {
        let mut fretboard = Fretboard::new(Tuning::STANDARD);
        fretboard.set_tuning(Tuning::DROP_D);
        assert_eq!(fretboard.selected()[0].fret, 0);
        assert_eq!(fretboard.selected()[0].note, PitchClass::D);
        assert_eq!(fretboard.tuning(), &Tuning::DROP_D);
    }

    #[test]
    fn test_suggestions_need_two_positions() {
        let mut fretboard = Fretboard::default();
        assert!(fretboard.suggestions().is_empty());

        fretboard.clear();
        fretboard.toggle(pos(1, 3)).unwrap(); // C
        assert!(fretboard.suggestions().is_empty());

        fretboard.toggle(pos(2, 2)).unwrap(); // E
        let suggestions = fretboard.suggestions();
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0], Suggestion::new(PitchClass::G, Quality::Major));
    }

    #[test]
    fn test_positions_of_note() {
        let fretboard = Fretboard::new(Tuning::STANDARD);
        let positions = fretboard.positions_of(PitchClass::E);
        assert_eq!(
            positions,
            vec![
                pos(0, 0),
                pos(0, 12),
                pos(1, 7),
                pos(2, 2),
                pos(3, 9),
                pos(4, 5),
                pos(5, 0),
                pos(5, 12),
            ]
        );
    }

    #[test]
    fn test_scale_positions() {
        let fretboard = Fretboard::new(Tuning::STANDARD);
        let scale = Scale::new(PitchClass::A, ScalePattern::MINOR_PENTATONIC);
        let positions = fretboard.scale_positions(&scale);
        assert!(positions.contains(&pos(0, 5)));
        assert!(positions.contains(&pos(0, 8)));
        assert!(!positions.contains(&pos(0, 1)));
        assert!(positions
            .iter()
            .all(|p| scale.contains(p.resolve(fretboard.tuning()))));
        // The open E is in the scale, so fret 12 doubles it.
        assert_eq!(positions.iter().filter(|p| p.string == 0).count(), 6);
    }

    #[test]
    fn test_apply_suggestion_prefers_empty_strings() {
        let mut fretboard = Fretboard::new(Tuning::STANDARD);
        fretboard.clear();
        fretboard.toggle(pos(1, 3)).unwrap(); // C
        fretboard.toggle(pos(2, 2)).unwrap(); // E

        // Low E string is empty; G is at its third fret.
        assert_eq!(fretboard.apply_suggestion(PitchClass::G), Some(pos(0, 3)));
        assert_eq!(
            fretboard.chords(),
            vec![Chord::new(PitchClass::C, Quality::Major)]
        );
    }

    #[test]
    fn test_apply_suggestion_moves_a_string_when_all_are_busy() {
        let mut fretboard = Fretboard::new(Tuning::STANDARD);
        // Every string rings open; the first G that is not already selected is low E fret 3.
        assert_eq!(fretboard.apply_suggestion(PitchClass::G), Some(pos(0, 3)));
        assert_eq!(fretboard.fret(0), Some(3));
    }

    #[test]
    fn test_apply_suggestion_with_nothing_left() {
        let mut fretboard = Fretboard::new(Tuning::STANDARD);
        fretboard.clear();
        for position in fretboard.positions_of(PitchClass::F) {
            if fretboard.fret(position.string).is_none() {
                fretboard.toggle(position).unwrap();
            }
        }
        // Standard tuning has exactly one F per string below the twelfth fret.
        assert_eq!(fretboard.selected().len(), STRINGS);
        assert_eq!(fretboard.apply_suggestion(PitchClass::F), None);
    }
}
