// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for chordy
//!
//! These tests verify that multiple components work together correctly.

use std::fs;

use crossterm::event::{KeyCode, KeyModifiers};

use chordy::{
    render_chart, ChartError, ChartStore, EditorAction, EditorConfig, EditorState,
    KeyboardController, Resolution,
};

/// Test a full editing session against the default song: enter chords,
/// change the resolution, grow a section, and append a new one
#[test]
fn test_full_editing_session() {
    let mut store = ChartStore::new();

    // Default song: "Title", Verse and Chorus with four empty bars each
    assert_eq!(store.song().title(), "Title");
    assert_eq!(store.song().section_count(), 2);
    assert_eq!(store.song().total_bars(), 8);

    store.add_chord("Am", 0, 0).unwrap();
    store.set_resolution(Resolution::Half);
    store.add_chord("G", 0, 1).unwrap();
    store.add_bars(1).unwrap();
    store.add_section("Bridge");

    let verse = store.song().section(0).unwrap();
    assert_eq!(verse.bar(0).unwrap().chords()[0].text(), "Am");
    assert_eq!(verse.bar(0).unwrap().chords()[0].length(), Resolution::Whole);
    assert_eq!(verse.bar(0).unwrap().chord_count(), 1);
    assert_eq!(verse.bar(1).unwrap().chords()[0].text(), "G");
    assert_eq!(verse.bar(1).unwrap().chords()[0].length(), Resolution::Half);

    assert_eq!(store.song().section(1).unwrap().bar_count(), 8);
    assert_eq!(store.song().section_count(), 3);
    assert_eq!(store.song().section(2).unwrap().name(), "Bridge");
    assert_eq!(store.song().section(2).unwrap().bar_count(), 4);
    assert_eq!(store.song().total_bars(), 16);
}

/// Test that the editor cursor always addresses a live bar, so chords
/// entered at the focus never hit an out-of-range index
#[test]
fn test_editor_focus_drives_store() {
    let mut store = ChartStore::new();
    let mut editor = EditorState::new();

    // Walk to the end of the whole chart
    for _ in 0..50 {
        editor.focus_right(store.song());
    }
    let focus = editor.focus();
    assert!(store.add_chord("F", focus.section, focus.bar).is_ok());
    assert_eq!(focus.section, 1);
    assert_eq!(focus.bar, 3);

    // Growing the song keeps the cursor valid and reachable
    store.add_bars(focus.section).unwrap();
    editor.clamp_to(store.song());
    for _ in 0..4 {
        editor.focus_right(store.song());
    }
    let focus = editor.focus();
    assert_eq!(focus.bar, 7);
    assert!(store.add_chord("C", focus.section, focus.bar).is_ok());
}

/// Test that the slot coordinate follows the focused bar's contents
#[test]
fn test_focus_slot_tracks_chords() {
    let mut store = ChartStore::new();
    let mut editor = EditorState::new();

    assert_eq!(editor.focus().slot, 0);

    store.add_chord("Dm7", 0, 0).unwrap();
    store.add_chord("G7", 0, 0).unwrap();
    editor.clamp_to(store.song());
    assert_eq!(editor.focus().slot, 2);
}

/// Test that chart-mode key events resolve to actions that mutate the
/// store the way the bindings promise
#[test]
fn test_keyboard_to_store_flow() {
    let keyboard = KeyboardController::with_defaults();
    let mut store = ChartStore::new();

    let action = keyboard
        .get_action(KeyCode::Char('v'), KeyModifiers::NONE)
        .unwrap();
    if let EditorAction::QuickSection(name) = action {
        store.add_section(name);
    } else {
        panic!("expected QuickSection, got {:?}", action);
    }
    assert_eq!(store.song().section(2).unwrap().name(), "Verse");

    let action = keyboard
        .get_action(KeyCode::Char('2'), KeyModifiers::NONE)
        .unwrap();
    if let EditorAction::SetResolution(r) = action {
        store.set_resolution(r);
    } else {
        panic!("expected SetResolution, got {:?}", action);
    }
    assert_eq!(store.resolution(), Resolution::Half);

    let action = keyboard
        .get_action(KeyCode::Char('b'), KeyModifiers::NONE)
        .unwrap();
    assert_eq!(action, EditorAction::AddBars);
    store.add_bars(0).unwrap();
    assert_eq!(store.song().section(0).unwrap().bar_count(), 8);
}

/// Test that invalid indices surface as errors and leave the chart
/// untouched
#[test]
fn test_errors_leave_store_unchanged() {
    let mut store = ChartStore::new();
    store.add_chord("Em", 1, 2).unwrap();
    let before = store.song().clone();

    assert_eq!(
        store.add_bars(7),
        Err(ChartError::SectionOutOfRange { index: 7, count: 2 })
    );
    assert_eq!(
        store.add_chord("A", 0, 99),
        Err(ChartError::BarOutOfRange {
            section: 0,
            index: 99,
            count: 4
        })
    );

    assert_eq!(*store.song(), before);
}

/// Test that a store seeded from configuration reflects every setting
#[test]
fn test_config_seeds_store() {
    let yaml = r#"
title: "So What"
sections: ["A", "A", "B", "A"]
bars_per_section: 8
bar_batch: 2
resolution: quarter
"#;
    let config = EditorConfig::from_yaml(yaml).unwrap();
    config.validate().unwrap();

    let mut store = ChartStore::from_config(&config);
    assert_eq!(store.song().title(), "So What");
    assert_eq!(store.song().section_count(), 4);
    assert_eq!(store.song().section(2).unwrap().name(), "B");
    assert_eq!(store.song().total_bars(), 32);
    assert_eq!(store.resolution(), Resolution::Quarter);

    store.add_bars(0).unwrap();
    assert_eq!(store.song().section(0).unwrap().bar_count(), 10);

    store.add_section("Coda");
    assert_eq!(store.song().section(4).unwrap().bar_count(), 8);
}

/// Test the config file round-trip through a real file on disk
#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chordy.yaml");

    let mut config = EditorConfig::default();
    config.title = "Stella".to_string();
    config.bar_batch = 2;
    config.save(&path).unwrap();

    let loaded = EditorConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

/// Test that the rendered chart text reflects the chart state and
/// survives the trip through an export file
#[test]
fn test_chart_text_export() {
    let mut store = ChartStore::new();
    store.set_title("Take Five");
    store.add_chord("Ebm", 0, 0).unwrap();
    store.add_chord("Bbm7", 0, 0).unwrap();
    store.add_chord("Abm", 0, 1).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.txt");
    fs::write(&path, render_chart(store.song())).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Take Five\n"));
    assert!(text.contains("Verse\n| Ebm Bbm7 | Abm | _ | _ |"));
    assert!(text.contains("Chorus\n| _ | _ | _ | _ |"));
}

/// Test that resolution changes only affect chords entered afterwards,
/// across every operation in between
#[test]
fn test_resolution_stamping_across_operations() {
    let mut store = ChartStore::new();

    store.add_chord("C", 0, 0).unwrap();
    store.set_resolution(Resolution::Quarter);
    store.add_section("Outro");
    store.add_bars(0).unwrap();
    store.add_chord("F", 2, 0).unwrap();
    store.set_resolution(Resolution::Whole);

    let first = &store.song().section(0).unwrap().bar(0).unwrap().chords()[0];
    let second = &store.song().section(2).unwrap().bar(0).unwrap().chords()[0];
    assert_eq!(first.length(), Resolution::Whole);
    assert_eq!(second.length(), Resolution::Quarter);
}
