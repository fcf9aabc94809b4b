// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Core library surface for the chordy chart editor.
//!
//! The public modules exposed here keep the API intentionally small so the
//! `bin` target, the integration tests, and the benchmarks all reuse the
//! same pieces.

pub mod chart;
pub mod config;
pub mod control;
pub mod editor;
pub mod ui;

/// The document model and the store every edit goes through.
pub use chart::{Bar, Chord, ChartError, ChartStore, Resolution, Section, Song};

/// Chart text rendering used for display, export, and assertions.
pub use chart::{format_bar, render_chart};

/// Editor configuration loaded once at startup.
pub use config::EditorConfig;

/// The action vocabulary and the keyboard binding table.
pub use control::{EditorAction, KeyboardController};

/// Cursor position and input-mode state of one editing session.
pub use editor::{EditorState, Focus, Mode};
