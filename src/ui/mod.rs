// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Terminal UI for the chordy chart editor.
//!
//! Provides a ratatui-based terminal interface with the song title,
//! the section/bar grid, a resolution footer, and a status bar. The
//! whole chart is redrawn from the store every frame.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::chart::ChartStore;
use crate::control::{format_shortcut, KeyboardController};
use crate::editor::{EditorState, Mode};

/// Marker appended to pending text to show the insertion point
const CURSOR: &str = "▏";

/// Transient UI state outside the chart itself
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Help text visible
    pub show_help: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Status message timestamp
    pub status_time: Option<Instant>,
}

impl UiState {
    /// Set a status message that will be displayed temporarily
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_time = Some(Instant::now());
    }

    /// Clear expired status message
    pub fn clear_expired_status(&mut self) {
        if let Some(time) = self.status_time {
            if time.elapsed() > Duration::from_secs(3) {
                self.status_message = None;
                self.status_time = None;
            }
        }
    }
}

/// Terminal UI application
pub struct App {
    /// Terminal handle
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Target frame rate
    frame_rate: u32,
    /// Whether to continue running
    running: bool,
}

impl App {
    /// Create the app and take over the terminal
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            frame_rate: 60,
            running: true,
        })
    }

    /// Set frame rate
    pub fn set_frame_rate(&mut self, fps: u32) {
        self.frame_rate = fps.clamp(1, 120);
    }

    /// Check if running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the app
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Poll for events with timeout
    pub fn poll_event(&self) -> io::Result<Option<Event>> {
        let timeout = Duration::from_millis(1000 / self.frame_rate as u64);
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Draw the UI from the current chart and editor state
    pub fn draw(
        &mut self,
        store: &ChartStore,
        editor: &EditorState,
        ui: &UiState,
        keyboard: &KeyboardController,
    ) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.area();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Title
                    Constraint::Min(5),    // Chart grid
                    Constraint::Length(1), // Resolution footer
                    Constraint::Length(1), // Status bar
                ])
                .split(area);

            render_title(frame, chunks[0], store, editor);
            render_chart_grid(frame, chunks[1], store, editor);
            render_footer(frame, chunks[2], store, editor);
            render_status_bar(frame, chunks[3], ui);

            if ui.show_help {
                render_help_overlay(frame, area, keyboard);
            }
        })?;

        Ok(())
    }

    /// Cleanup terminal on drop
    fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Render the title header
fn render_title(frame: &mut Frame, area: Rect, store: &ChartStore, editor: &EditorState) {
    let block = Block::default().borders(Borders::ALL).title(" Song ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = if editor.mode() == Mode::EditTitle {
        Span::styled(
            format!("{}{}", editor.pending(), CURSOR),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            store.song().title().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )
    };

    frame.render_widget(Paragraph::new(title), inner);
}

/// Compose the display text of one bar cell, splicing the pending
/// chord entry in when the cell is being edited
fn bar_cell_text(chords: &str, editing: Option<&str>) -> String {
    match editing {
        Some(pending) if chords == "_" => format!("{}{}", pending, CURSOR),
        Some(pending) => format!("{} {}{}", chords, pending, CURSOR),
        None => chords.to_string(),
    }
}

/// Render the section/bar grid
fn render_chart_grid(frame: &mut Frame, area: Rect, store: &ChartStore, editor: &EditorState) {
    let block = Block::default().borders(Borders::ALL).title(" Chart ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let focus = editor.focus();
    let mut lines = Vec::new();

    for (si, section) in store.song().sections().iter().enumerate() {
        lines.push(Line::from(Span::styled(
            section.name().to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));

        let mut spans = vec![Span::raw("| ")];
        for (bi, bar) in section.bars().iter().enumerate() {
            let focused = si == focus.section && bi == focus.bar;
            let editing = if focused && editor.mode() == Mode::EditChord {
                Some(editor.pending())
            } else {
                None
            };
            let text = bar_cell_text(&crate::chart::format_bar(bar), editing);

            let style = if focused && editing.is_some() {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else if focused {
                Style::default().fg(Color::Black).bg(Color::White)
            } else if bar.is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };

            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" | "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if editor.mode() == Mode::EditSection {
        lines.push(Line::from(Span::styled(
            format!("New section: {}{}", editor.pending(), CURSOR),
            Style::default().fg(Color::Yellow),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Compose the footer text: resolution and focus position
fn footer_text(store: &ChartStore, editor: &EditorState) -> String {
    format!(
        " Resolution: {}  Position: {}",
        store.resolution(),
        editor.focus().format()
    )
}

/// Render the resolution footer
fn render_footer(frame: &mut Frame, area: Rect, store: &ChartStore, editor: &EditorState) {
    let widget =
        Paragraph::new(footer_text(store, editor)).style(Style::default().fg(Color::Magenta));
    frame.render_widget(widget, area);
}

/// Render status bar
fn render_status_bar(frame: &mut Frame, area: Rect, state: &UiState) {
    let text = if let Some(ref msg) = state.status_message {
        Span::styled(msg.as_str(), Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            " Enter: Chord | t: Title | n/v/c: Section | b: Bars | 1/2/4: Resolution | h: Help | q: Quit",
            Style::default().fg(Color::DarkGray),
        )
    };

    frame.render_widget(Paragraph::new(text), area);
}

/// Render help overlay from the live binding table
fn render_help_overlay(frame: &mut Frame, area: Rect, keyboard: &KeyboardController) {
    let width = 52.min(area.width.saturating_sub(4));
    let height = 24.min(area.height.saturating_sub(4));
    let x = (area.width - width) / 2;
    let y = (area.height - height) / 2;
    let help_area = Rect::new(x, y, width, height);

    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        help_area,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);

    let grouped = keyboard.bindings_by_category();
    let order = ["Navigation", "Editing", "Structure", "Resolution", "UI"];

    let mut lines = Vec::new();
    for category in order {
        let Some(bindings) = grouped.get(category) else {
            continue;
        };
        let mut rows: Vec<(String, &str)> = bindings
            .iter()
            .map(|b| (format_shortcut(&b.shortcut), b.description.as_str()))
            .collect();
        rows.sort();

        lines.push(Line::from(Span::styled(
            category,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (shortcut, description) in rows {
            lines.push(Line::from(format!("  {:<11} {}", shortcut, description)));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from("Text entry: type, Backspace, Enter, Esc"));

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_state_status() {
        let mut state = UiState::default();
        assert!(state.status_message.is_none());

        state.set_status("Test message");
        assert_eq!(state.status_message, Some("Test message".to_string()));
        assert!(state.status_time.is_some());
    }

    #[test]
    fn test_bar_cell_text() {
        assert_eq!(bar_cell_text("Am G", None), "Am G");
        assert_eq!(bar_cell_text("_", Some("C")), format!("C{}", CURSOR));
        assert_eq!(bar_cell_text("Am", Some("G7")), format!("Am G7{}", CURSOR));
    }

    #[test]
    fn test_footer_text() {
        let store = ChartStore::new();
        let editor = EditorState::new();
        let text = footer_text(&store, &editor);
        assert!(text.contains("Resolution: 1"));
        assert!(text.contains("Position: 1:1"));
    }
}
