// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord chart system.
//!
//! This module provides:
//! - The song document model: sections, bars, chords, resolutions
//! - The chart store: the mutable state all edits go through
//! - Plain-text rendering for display and export

pub mod song;
pub mod store;
pub mod text;

pub use song::{Bar, Chord, Resolution, Section, Song};
pub use store::{ChartError, ChartStore};
pub use text::{format_bar, render_chart};
