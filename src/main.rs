// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::fs;
use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chordy::chart::{render_chart, ChartStore};
use chordy::config::EditorConfig;
use chordy::control::{EditorAction, KeyboardController};
use chordy::editor::{EditorState, Mode};
use chordy::ui::{App, UiState};

fn print_usage() {
    println!("chordy - Terminal chord chart editor");
    println!();
    println!("Usage: chordy [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --config <path>   Load editor settings from a YAML file");
    println!("  --print-config    Print the default configuration and exit");
    println!("  --help            Show this help message");
    println!();
    println!("Set CHORDY_LOG (e.g. CHORDY_LOG=debug) to write a chordy.log file.");
}

/// Route logs to a file when requested; the terminal belongs to the UI
fn init_logging() -> Result<()> {
    if let Ok(filter) = env::var("CHORDY_LOG") {
        let file = File::create("chordy.log").context("Failed to create chordy.log")?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }
    Ok(())
}

/// Map a key event in a text-entry mode onto the pending buffer,
/// returning the commit or cancel action when one applies
fn text_entry_action(editor: &mut EditorState, code: KeyCode) -> EditorAction {
    match code {
        KeyCode::Enter => match editor.mode() {
            Mode::EditChord => EditorAction::CommitChord,
            Mode::EditTitle => EditorAction::CommitTitle,
            Mode::EditSection => EditorAction::CommitSection,
            Mode::Chart => EditorAction::None,
        },
        KeyCode::Esc => EditorAction::Cancel,
        KeyCode::Backspace => {
            editor.pop_char();
            EditorAction::None
        }
        KeyCode::Char(c) => {
            editor.push_char(c);
            EditorAction::None
        }
        _ => EditorAction::None,
    }
}

fn export_chart(store: &ChartStore, config: &EditorConfig) -> Result<String> {
    let text = render_chart(store.song());
    fs::write(&config.export_path, text)
        .with_context(|| format!("Failed to write {}", config.export_path))?;
    Ok(config.export_path.clone())
}

fn apply_action(
    action: EditorAction,
    app: &mut App,
    store: &mut ChartStore,
    editor: &mut EditorState,
    ui: &mut UiState,
    config: &EditorConfig,
) {
    match action {
        EditorAction::None => {}

        EditorAction::NavigateLeft => editor.focus_left(store.song()),
        EditorAction::NavigateRight => editor.focus_right(store.song()),
        EditorAction::NavigateUp => editor.focus_up(store.song()),
        EditorAction::NavigateDown => editor.focus_down(store.song()),

        EditorAction::EditChord => editor.start_chord_entry(),
        EditorAction::EditTitle => editor.start_title_entry(store.song().title()),
        EditorAction::NewSection => editor.start_section_entry(),

        EditorAction::CommitChord => {
            let text = editor.take_pending();
            if !text.is_empty() {
                let focus = editor.focus();
                match store.add_chord(text, focus.section, focus.bar) {
                    Ok(()) => editor.clamp_to(store.song()),
                    Err(e) => ui.set_status(e.to_string()),
                }
            }
        }
        EditorAction::CommitTitle => {
            let title = editor.take_pending();
            store.set_title(title);
        }
        EditorAction::CommitSection => {
            let name = editor.take_pending();
            if !name.is_empty() {
                ui.set_status(format!("Added section {}", name));
                store.add_section(name);
            }
        }
        EditorAction::Cancel => editor.cancel(),

        EditorAction::QuickSection(name) => {
            ui.set_status(format!("Added section {}", name));
            store.add_section(name);
        }
        EditorAction::AddBars => {
            let focus = editor.focus();
            match store.add_bars(focus.section) {
                Ok(()) => ui.set_status(format!("Added {} bars", store.bar_batch())),
                Err(e) => ui.set_status(e.to_string()),
            }
        }

        EditorAction::SetResolution(resolution) => {
            store.set_resolution(resolution);
            ui.set_status(format!("Resolution {}", resolution));
        }

        EditorAction::ExportText => match export_chart(store, config) {
            Ok(path) => ui.set_status(format!("Chart written to {}", path)),
            Err(e) => ui.set_status(format!("Export failed: {}", e)),
        },
        EditorAction::ToggleHelp => ui.show_help = !ui.show_help,
        EditorAction::Quit => app.quit(),
    }
}

fn run(config: EditorConfig) -> Result<()> {
    let mut store = ChartStore::from_config(&config);
    let mut editor = EditorState::new();
    let mut ui = UiState::default();
    let keyboard = KeyboardController::with_defaults();

    let mut app = App::new().context("Failed to initialize terminal")?;
    info!("Editor started with {} sections", store.song().section_count());

    while app.is_running() {
        ui.clear_expired_status();
        app.draw(&store, &editor, &ui, &keyboard)?;

        if let Some(Event::Key(key)) = app.poll_event()? {
            let action = match editor.mode() {
                Mode::Chart => keyboard
                    .get_action(key.code, key.modifiers)
                    .unwrap_or(EditorAction::None),
                _ => text_entry_action(&mut editor, key.code),
            };
            apply_action(action, &mut app, &mut store, &mut editor, &mut ui, &config);
        }
    }

    info!("Editor exiting");
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
                config_path = Some(args[i + 1].clone());
                i += 1;
            }
            "--print-config" => {
                print!("{}", EditorConfig::default().to_yaml()?);
                return Ok(());
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    init_logging()?;

    let config = match config_path {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };

    run(config)
}
