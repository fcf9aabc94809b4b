// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Mutable chart state and its operation surface.
//!
//! `ChartStore` owns the song being edited along with the active
//! resolution and the structural growth constants. All edits go through
//! its methods; index-addressed operations validate before touching
//! anything, so a failed call leaves the store exactly as it was.

use thiserror::Error;
use tracing::debug;

use crate::chart::song::{Chord, Resolution, Section, Song};
use crate::config::EditorConfig;

/// Errors from index-addressed chart operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// Section index past the end of the song
    #[error("section index {index} out of range (song has {count} sections)")]
    SectionOutOfRange { index: usize, count: usize },
    /// Bar index past the end of a section
    #[error("bar index {index} out of range (section {section} has {count} bars)")]
    BarOutOfRange {
        section: usize,
        index: usize,
        count: usize,
    },
}

/// Owns the song under edit plus the settings that shape new material
pub struct ChartStore {
    song: Song,
    /// Stamped onto chords as they are entered
    resolution: Resolution,
    /// Empty bars seeded into each new section
    bars_per_section: usize,
    /// Empty bars appended per `add_bars` call
    bar_batch: usize,
}

impl ChartStore {
    /// Create a store with the stock starting song: a title placeholder
    /// and empty Verse and Chorus sections
    pub fn new() -> Self {
        let mut store = Self {
            song: Song::new("Title"),
            resolution: Resolution::default(),
            bars_per_section: 4,
            bar_batch: 4,
        };
        store.add_section("Verse");
        store.add_section("Chorus");
        store
    }

    /// Create a store seeded from editor configuration
    pub fn from_config(config: &EditorConfig) -> Self {
        let mut store = Self {
            song: Song::new(config.title.clone()),
            resolution: config.resolution,
            bars_per_section: config.bars_per_section,
            bar_batch: config.bar_batch,
        };
        for name in &config.sections {
            store.add_section(name.clone());
        }
        store
    }

    /// Get the song being edited
    pub fn song(&self) -> &Song {
        &self.song
    }

    /// Get the resolution new chords will be stamped with
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Number of empty bars a new section starts with
    pub fn bars_per_section(&self) -> usize {
        self.bars_per_section
    }

    /// Number of empty bars one `add_bars` call appends
    pub fn bar_batch(&self) -> usize {
        self.bar_batch
    }

    /// Replace the song title (empty string allowed)
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        debug!("Setting title to '{}'", title);
        self.song.set_title(title);
    }

    /// Append a new section seeded with the default run of empty bars.
    /// Duplicate names are allowed.
    pub fn add_section(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!("Adding section '{}' with {} bars", name, self.bars_per_section);
        self.song
            .add_section(Section::new(name, self.bars_per_section));
    }

    /// Append a batch of empty bars to the addressed section
    pub fn add_bars(&mut self, section: usize) -> Result<(), ChartError> {
        let count = self.song.section_count();
        let target = self
            .song
            .section_mut(section)
            .ok_or(ChartError::SectionOutOfRange {
                index: section,
                count,
            })?;
        debug!("Adding {} bars to section {}", self.bar_batch, section);
        target.append_empty_bars(self.bar_batch);
        Ok(())
    }

    /// Append a chord to the addressed bar, stamped with the active
    /// resolution
    pub fn add_chord(
        &mut self,
        text: impl Into<String>,
        section: usize,
        bar: usize,
    ) -> Result<(), ChartError> {
        let section_count = self.song.section_count();
        let target_section =
            self.song
                .section_mut(section)
                .ok_or(ChartError::SectionOutOfRange {
                    index: section,
                    count: section_count,
                })?;
        let bar_count = target_section.bar_count();
        let target_bar = target_section
            .bar_mut(bar)
            .ok_or(ChartError::BarOutOfRange {
                section,
                index: bar,
                count: bar_count,
            })?;
        let text = text.into();
        debug!(
            "Adding chord '{}' at section {} bar {} ({})",
            text, section, bar, self.resolution
        );
        target_bar.push_chord(Chord::new(text, self.resolution));
        Ok(())
    }

    /// Change the resolution stamped onto future chords. Chords already
    /// entered keep the resolution they were created with.
    pub fn set_resolution(&mut self, resolution: Resolution) {
        debug!("Setting resolution to {}", resolution);
        self.resolution = resolution;
    }
}

impl Default for ChartStore {
    fn default() -> Self {
        Self::new()
    }
}
