// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Control system for keyboard input.
//!
//! This module provides:
//! - The editor action vocabulary
//! - Keyboard shortcut handling with configurable bindings

pub mod keyboard;

pub use keyboard::{format_shortcut, KeyBinding, KeyboardController, Shortcut};

use crate::chart::Resolution;

/// Action that can be triggered by controls or text-entry input
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    /// No action
    None,

    // Navigation
    /// Move focus up
    NavigateUp,
    /// Move focus down
    NavigateDown,
    /// Move focus left
    NavigateLeft,
    /// Move focus right
    NavigateRight,

    // Editing
    /// Start entering a chord at the focused bar
    EditChord,
    /// Start editing the song title
    EditTitle,
    /// Start entering a new section name
    NewSection,
    /// Commit the pending chord text
    CommitChord,
    /// Commit the pending title text
    CommitTitle,
    /// Commit the pending section name
    CommitSection,
    /// Abandon the pending text entry
    Cancel,

    // Structure
    /// Append a named section without a name prompt
    QuickSection(String),
    /// Append a batch of bars to the focused section
    AddBars,

    // Resolution
    /// Set the resolution for future chords
    SetResolution(Resolution),

    // UI
    /// Write the chart text to the export file
    ExportText,
    /// Toggle help display
    ToggleHelp,
    /// Quit application
    Quit,
}

impl EditorAction {
    /// Check if this is a focus-movement action
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            EditorAction::NavigateUp
                | EditorAction::NavigateDown
                | EditorAction::NavigateLeft
                | EditorAction::NavigateRight
        )
    }

    /// Check if this action starts or ends a text entry
    pub fn is_text_entry(&self) -> bool {
        matches!(
            self,
            EditorAction::EditChord
                | EditorAction::EditTitle
                | EditorAction::NewSection
                | EditorAction::CommitChord
                | EditorAction::CommitTitle
                | EditorAction::CommitSection
                | EditorAction::Cancel
        )
    }

    /// Check if this action grows the song structure
    pub fn is_structure(&self) -> bool {
        matches!(
            self,
            EditorAction::QuickSection(_) | EditorAction::AddBars
        )
    }
}
