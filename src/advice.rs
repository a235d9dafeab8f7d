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

//! Requests for learning suggestions from a language model.
//!
//! A [`SuggestionRequest`] captures what the user is exploring: a key, a scale, and the notes
//! selected on the fretboard. It serializes to the JSON body posted to a suggestion relay, and
//! the relay turns it into a tutor prompt with [`SuggestionRequest::prompt`]. Sending the request
//! and interpreting the model's answer are left to the caller.
//!
//! # Examples
//!
//! ```
//! use chord_builder::{
//!     advice::SuggestionRequest,
//!     fretboard::Fretboard,
//!     note::PitchClass,
//!     scale::ScalePattern,
//!     tuning::{FrettedPosition, Tuning},
//! };
//!
//! let mut fretboard = Fretboard::new(Tuning::STANDARD);
//! fretboard.clear();
//! fretboard.toggle(FrettedPosition::new(1, 3))?;
//!
//! let request = SuggestionRequest::new(PitchClass::C, &ScalePattern::MAJOR, &fretboard);
//! assert_eq!(
//!     request.to_json()?,
//!     r#"{"key":"C","scale":"Major","selectedNotes":[{"string":1,"fret":3,"note":"C"}]}"#
//! );
//! assert!(request.prompt().contains("Currently selected notes: C (fret 3)."));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{
    fretboard::{Fretboard, SelectedNote},
    note::PitchClass,
    scale::ScalePattern,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The longest note listing, in characters, that is included in a prompt.
pub const MAX_NOTES_TEXT: usize = 500;

/// The most suggestions a prompt asks for.
pub const MAX_SUGGESTIONS: usize = 3;

/// The body of a request for learning suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub key: PitchClass,
    pub scale: String,
    pub selected_notes: Vec<SelectedNote>,
}

impl SuggestionRequest {
    /// Build a request from the current key, scale, and fretboard selection.
    pub fn new(key: PitchClass, scale: &ScalePattern, fretboard: &Fretboard) -> SuggestionRequest {
        let request = SuggestionRequest {
            key,
            scale: scale.name().to_owned(),
            selected_notes: fretboard.selected(),
        };
        log::debug!(
            "suggestion request for {} {} with {} notes",
            request.key,
            request.scale,
            request.selected_notes.len()
        );
        request
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Serialize)
    }

    /// Parse a request body. Bodies missing the key, scale, or note list are rejected.
    pub fn from_json(body: &str) -> Result<SuggestionRequest> {
        serde_json::from_str(body).map_err(Error::Deserialize)
    }

    /// The selected notes as `"<note> (fret <n>)"`, comma separated, cut off after
    /// [`MAX_NOTES_TEXT`] characters.
    pub fn notes_text(&self) -> String {
        let text = self
            .selected_notes
            .iter()
            .map(|n| format!("{} (fret {})", n.note, n.fret))
            .collect::<Vec<_>>()
            .join(", ");

        match text.char_indices().nth(MAX_NOTES_TEXT) {
            Some((end, _)) => {
                log::warn!(
                    "truncating note list of {} notes to {} characters",
                    self.selected_notes.len(),
                    MAX_NOTES_TEXT
                );
                text[..end].to_owned()
            }
            None => text,
        }
    }

    /// The tutor prompt sent to the language model for this request.
    pub fn prompt(&self) -> String {
        format!(
            "You are an expert guitar tutor.

The user is exploring the {key} key with the {scale} scale on a guitar.
Currently selected notes: {notes}.

Provide at most {max} educational suggestions that help the user learn:
- Guitar techniques related to these notes.
- Scales, chords, or theory concepts demonstrated by these notes.

For each suggestion, include:
1. title - a short descriptive title.
2. source - where it comes from (website, YouTube channel, author).
3. link - if applicable.
4. description - 1-2 sentences explaining why it's useful.

Return the response as a JSON array, like this:

[
  {{ \"title\": \"...\", \"source\": \"...\", \"link\": \"...\", \"description\": \"...\" }},
  ...
]
",
            key = self.key,
            scale = self.scale,
            notes = self.notes_text(),
            max = MAX_SUGGESTIONS,
        )
    }
}

/// A specialized [`Result`] type for suggestion requests.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for encoding and decoding suggestion requests.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to serialize suggestion request: {0}")]
    Serialize(serde_json::Error),
    #[error("invalid suggestion request: {0}")]
    Deserialize(serde_json::Error),
}
