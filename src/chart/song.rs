// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord chart document model.
//!
//! A song is an ordered list of named sections, each holding an ordered
//! list of bars, each accumulating chord symbols. All sequences grow by
//! append only; nothing is ever removed or reordered.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Note-duration resolution stamped onto newly entered chords.
///
/// Expressed as the fraction of a bar the chord occupies. One value is
/// active store-wide at a time; changing it never touches chords that
/// were already entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Full bar
    Whole,
    /// Half bar
    Half,
    /// Quarter bar
    Quarter,
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::Whole
    }
}

impl Resolution {
    /// Fraction of a bar this resolution represents
    pub fn fraction(&self) -> f64 {
        match self {
            Resolution::Whole => 1.0,
            Resolution::Half => 0.5,
            Resolution::Quarter => 0.25,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Resolution::Whole => "1",
            Resolution::Half => "1/2",
            Resolution::Quarter => "1/4",
        };
        write!(f, "{}", s)
    }
}

/// A chord symbol plus the resolution it was entered at
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    /// Free-form chord text (no grammar is enforced)
    text: String,
    /// Resolution active when the chord was created; never changes afterwards
    length: Resolution,
}

impl Chord {
    /// Create a new chord
    pub fn new(text: impl Into<String>, length: Resolution) -> Self {
        Self {
            text: text.into(),
            length,
        }
    }

    /// Get chord text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the resolution the chord was entered at
    pub fn length(&self) -> Resolution {
        self.length
    }
}

/// One measure, accumulating chords by append
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bar {
    chords: Vec<Chord>,
}

impl Bar {
    /// Create an empty bar
    pub fn new() -> Self {
        Self { chords: Vec::new() }
    }

    /// Get all chords
    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    /// Number of chords
    pub fn chord_count(&self) -> usize {
        self.chords.len()
    }

    /// Check if the bar has no chords yet
    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Append a chord
    pub fn push_chord(&mut self, chord: Chord) {
        self.chords.push(chord);
    }
}

/// A named grouping of bars (e.g. Verse, Chorus)
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Section name (duplicates allowed)
    name: String,
    /// Bars in insertion order
    bars: Vec<Bar>,
}

impl Section {
    /// Create a section seeded with a run of empty bars
    pub fn new(name: impl Into<String>, bar_count: usize) -> Self {
        Self {
            name: name.into(),
            bars: vec![Bar::new(); bar_count],
        }
    }

    /// Get section name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get all bars
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Get bar at index
    pub fn bar(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    /// Get mutable bar at index
    pub fn bar_mut(&mut self, index: usize) -> Option<&mut Bar> {
        self.bars.get_mut(index)
    }

    /// Number of bars
    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    /// Append a run of empty bars, leaving existing bars untouched
    pub fn append_empty_bars(&mut self, count: usize) {
        self.bars
            .extend(std::iter::repeat_with(Bar::new).take(count));
    }
}

/// A complete chord chart
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    /// Song title (any string, empty allowed)
    title: String,
    /// Sections in insertion order
    sections: Vec<Section>,
}

impl Song {
    /// Create a song with no sections
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Get song title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set song title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Append a section
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Get section at index
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Get mutable section at index
    pub fn section_mut(&mut self, index: usize) -> Option<&mut Section> {
        self.sections.get_mut(index)
    }

    /// Get all sections
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of sections
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Get total length in bars
    pub fn total_bars(&self) -> usize {
        self.sections.iter().map(|s| s.bar_count()).sum()
    }

    /// Get total number of chords across all sections
    pub fn chord_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| s.bars())
            .map(|b| b.chord_count())
            .sum()
    }

    /// Builder: add section
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }
}
