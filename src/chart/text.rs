// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Plain-text chart rendering.
//!
//! Turns a song into a readable chart for the screen, the export file,
//! and test assertions. The layout is for human eyes only and carries
//! no format stability promise.

use crate::chart::song::{Bar, Song};

/// Render a single bar's chords separated by spaces, or an underscore
/// placeholder when the bar is still empty
pub fn format_bar(bar: &Bar) -> String {
    if bar.is_empty() {
        return "_".to_string();
    }
    bar.chords()
        .iter()
        .map(|c| c.text())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the whole chart: title, then one name line and one bar line
/// per section
pub fn render_chart(song: &Song) -> String {
    let mut out = String::new();
    out.push_str(song.title());
    out.push('\n');
    out.push_str(&"=".repeat(song.title().chars().count().max(1)));
    out.push('\n');

    for section in song.sections() {
        out.push('\n');
        out.push_str(section.name());
        out.push('\n');
        out.push_str("| ");
        let cells: Vec<String> = section.bars().iter().map(format_bar).collect();
        out.push_str(&cells.join(" | "));
        out.push_str(" |\n");
    }

    out
}
