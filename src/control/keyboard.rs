// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Keyboard shortcut handling.
//!
//! Provides configurable keyboard bindings for chart-mode commands:
//! navigation, text entry, structure growth, and resolution changes.
//! Text-entry modes read key events directly and do not consult the
//! binding table.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};

use super::EditorAction;
use crate::chart::Resolution;

/// A keyboard shortcut definition
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortcut {
    /// Key code
    pub code: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
}

impl Shortcut {
    /// Create a new shortcut
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a shortcut with no modifiers
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Create a shortcut with Ctrl modifier
    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Create a shortcut with Shift modifier
    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Check if this shortcut matches a key event
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.code == code && self.modifiers == modifiers
    }
}

/// A keyboard binding (shortcut to action)
#[derive(Debug, Clone)]
pub struct KeyBinding {
    /// The shortcut
    pub shortcut: Shortcut,
    /// The action to perform
    pub action: EditorAction,
    /// Description for help display
    pub description: String,
    /// Category for grouping in help
    pub category: String,
}

impl KeyBinding {
    /// Create a new key binding
    pub fn new(shortcut: Shortcut, action: EditorAction, description: impl Into<String>) -> Self {
        Self {
            shortcut,
            action,
            description: description.into(),
            category: "General".to_string(),
        }
    }

    /// Set the category
    pub fn category(mut self, cat: impl Into<String>) -> Self {
        self.category = cat.into();
        self
    }
}

/// Keyboard controller with configurable bindings
pub struct KeyboardController {
    bindings: HashMap<Shortcut, KeyBinding>,
}

impl KeyboardController {
    /// Create an empty keyboard controller
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a keyboard controller with default bindings
    pub fn with_defaults() -> Self {
        let mut controller = Self::new();
        controller.add_default_bindings();
        controller
    }

    /// Add default keyboard bindings
    fn add_default_bindings(&mut self) {
        // Navigation
        self.add(
            KeyBinding::new(
                Shortcut::key(KeyCode::Left),
                EditorAction::NavigateLeft,
                "Previous bar",
            )
            .category("Navigation"),
        );

        self.add(
            KeyBinding::new(
                Shortcut::key(KeyCode::Right),
                EditorAction::NavigateRight,
                "Next bar",
            )
            .category("Navigation"),
        );

        self.add(
            KeyBinding::new(
                Shortcut::key(KeyCode::Up),
                EditorAction::NavigateUp,
                "Previous section",
            )
            .category("Navigation"),
        );

        self.add(
            KeyBinding::new(
                Shortcut::key(KeyCode::Down),
                EditorAction::NavigateDown,
                "Next section",
            )
            .category("Navigation"),
        );

        self.add(
            KeyBinding::new(
                Shortcut::key(KeyCode::Tab),
                EditorAction::NavigateRight,
                "Next bar",
            )
            .category("Navigation"),
        );

        self.add(
            KeyBinding::new(
                Shortcut::shift(KeyCode::BackTab),
                EditorAction::NavigateLeft,
                "Previous bar",
            )
            .category("Navigation"),
        );

        // Editing
        self.add(
            KeyBinding::new(
                Shortcut::key(KeyCode::Enter),
                EditorAction::EditChord,
                "Enter chord at focus",
            )
            .category("Editing"),
        );

        self.add(
            KeyBinding::new(
                Shortcut::key(KeyCode::Char('i')),
                EditorAction::EditChord,
                "Enter chord at focus",
            )
            .category("Editing"),
        );

        self.add(
            KeyBinding::new(
                Shortcut::key(KeyCode::Char('t')),
                EditorAction::EditTitle,
                "Edit title",
            )
            .category("Editing"),
        );

        // Structure
        self.add(
            KeyBinding::new(
                Shortcut::key(KeyCode::Char('n')),
                EditorAction::NewSection,
                "New section",
            )
            .category("Structure"),
        );

        self.add(
            KeyBinding::new(
                Shortcut::key(KeyCode::Char('v')),
                EditorAction::QuickSection("Verse".to_string()),
                "Add Verse",
            )
            .category("Structure"),
        );

        self.add(
            KeyBinding::new(
                Shortcut::key(KeyCode::Char('c')),
                EditorAction::QuickSection("Chorus".to_string()),
                "Add Chorus",
            )
            .category("Structure"),
        );

        self.add(
            KeyBinding::new(
                Shortcut::key(KeyCode::Char('b')),
                EditorAction::AddBars,
                "Add bars to section",
            )
            .category("Structure"),
        );

        // Resolution
        self.add(
            KeyBinding::new(
                Shortcut::key(KeyCode::Char('1')),
                EditorAction::SetResolution(Resolution::Whole),
                "Whole-bar chords",
            )
            .category("Resolution"),
        );

        self.add(
            KeyBinding::new(
                Shortcut::key(KeyCode::Char('2')),
                EditorAction::SetResolution(Resolution::Half),
                "Half-bar chords",
            )
            .category("Resolution"),
        );

        self.add(
            KeyBinding::new(
                Shortcut::key(KeyCode::Char('4')),
                EditorAction::SetResolution(Resolution::Quarter),
                "Quarter-bar chords",
            )
            .category("Resolution"),
        );

        // UI
        self.add(
            KeyBinding::new(
                Shortcut::key(KeyCode::Char('x')),
                EditorAction::ExportText,
                "Export chart text",
            )
            .category("UI"),
        );

        self.add(
            KeyBinding::new(
                Shortcut::key(KeyCode::Char('?')),
                EditorAction::ToggleHelp,
                "Toggle Help",
            )
            .category("UI"),
        );

        self.add(
            KeyBinding::new(
                Shortcut::key(KeyCode::Char('h')),
                EditorAction::ToggleHelp,
                "Toggle Help",
            )
            .category("UI"),
        );

        self.add(
            KeyBinding::new(Shortcut::key(KeyCode::Char('q')), EditorAction::Quit, "Quit")
                .category("UI"),
        );

        self.add(
            KeyBinding::new(Shortcut::ctrl(KeyCode::Char('c')), EditorAction::Quit, "Quit")
                .category("UI"),
        );
    }

    /// Add a key binding
    pub fn add(&mut self, binding: KeyBinding) {
        self.bindings.insert(binding.shortcut.clone(), binding);
    }

    /// Remove a key binding
    pub fn remove(&mut self, shortcut: &Shortcut) -> Option<KeyBinding> {
        self.bindings.remove(shortcut)
    }

    /// Get action for a key event
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<EditorAction> {
        let shortcut = Shortcut::new(code, modifiers);
        self.bindings.get(&shortcut).map(|b| b.action.clone())
    }

    /// Get all bindings for help display
    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.values()
    }

    /// Get bindings grouped by category
    pub fn bindings_by_category(&self) -> HashMap<String, Vec<&KeyBinding>> {
        let mut grouped: HashMap<String, Vec<&KeyBinding>> = HashMap::new();

        for binding in self.bindings.values() {
            grouped
                .entry(binding.category.clone())
                .or_default()
                .push(binding);
        }

        grouped
    }

    /// Get binding for a shortcut
    pub fn get_binding(&self, shortcut: &Shortcut) -> Option<&KeyBinding> {
        self.bindings.get(shortcut)
    }
}

impl Default for KeyboardController {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Format a shortcut for display
pub fn format_shortcut(shortcut: &Shortcut) -> String {
    let mut parts = Vec::new();

    if shortcut.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if shortcut.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }
    if shortcut.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }

    let key = match shortcut.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_uppercase().to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        _ => "?".to_string(),
    };

    parts.push(&key);
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_creation() {
        let s = Shortcut::key(KeyCode::Char('a'));
        assert_eq!(s.code, KeyCode::Char('a'));
        assert_eq!(s.modifiers, KeyModifiers::NONE);

        let s = Shortcut::ctrl(KeyCode::Char('c'));
        assert_eq!(s.modifiers, KeyModifiers::CONTROL);

        let s = Shortcut::shift(KeyCode::Up);
        assert_eq!(s.modifiers, KeyModifiers::SHIFT);
    }

    #[test]
    fn test_shortcut_matches() {
        let s = Shortcut::ctrl(KeyCode::Char('c'));
        assert!(s.matches(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!s.matches(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!s.matches(KeyCode::Char('x'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_keyboard_controller_defaults() {
        let controller = KeyboardController::with_defaults();

        // Enter should start chord entry
        let action = controller.get_action(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(action, Some(EditorAction::EditChord));

        // t should edit the title
        let action = controller.get_action(KeyCode::Char('t'), KeyModifiers::NONE);
        assert_eq!(action, Some(EditorAction::EditTitle));

        // Arrows should move focus
        let action = controller.get_action(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(action, Some(EditorAction::NavigateLeft));
    }

    #[test]
    fn test_quick_section_bindings() {
        let controller = KeyboardController::with_defaults();

        let action = controller.get_action(KeyCode::Char('v'), KeyModifiers::NONE);
        assert_eq!(action, Some(EditorAction::QuickSection("Verse".to_string())));

        let action = controller.get_action(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(
            action,
            Some(EditorAction::QuickSection("Chorus".to_string()))
        );
    }

    #[test]
    fn test_resolution_bindings() {
        let controller = KeyboardController::with_defaults();

        for (key, res) in [
            ('1', Resolution::Whole),
            ('2', Resolution::Half),
            ('4', Resolution::Quarter),
        ] {
            let action = controller.get_action(KeyCode::Char(key), KeyModifiers::NONE);
            assert_eq!(action, Some(EditorAction::SetResolution(res)));
        }
    }

    #[test]
    fn test_add_remove_binding() {
        let mut controller = KeyboardController::new();

        let binding = KeyBinding::new(
            Shortcut::key(KeyCode::Char('z')),
            EditorAction::Quit,
            "Custom Quit",
        );

        controller.add(binding);
        assert!(controller
            .get_action(KeyCode::Char('z'), KeyModifiers::NONE)
            .is_some());

        controller.remove(&Shortcut::key(KeyCode::Char('z')));
        assert!(controller
            .get_action(KeyCode::Char('z'), KeyModifiers::NONE)
            .is_none());
    }

    #[test]
    fn test_format_shortcut() {
        let s = Shortcut::key(KeyCode::Char(' '));
        assert_eq!(format_shortcut(&s), "Space");

        let s = Shortcut::ctrl(KeyCode::Char('c'));
        assert_eq!(format_shortcut(&s), "Ctrl+C");

        let s = Shortcut::shift(KeyCode::Up);
        assert_eq!(format_shortcut(&s), "Shift+↑");

        let s = Shortcut::key(KeyCode::Enter);
        assert_eq!(format_shortcut(&s), "Enter");
    }

    #[test]
    fn test_bindings_by_category() {
        let controller = KeyboardController::with_defaults();
        let grouped = controller.bindings_by_category();

        assert!(grouped.contains_key("Navigation"));
        assert!(grouped.contains_key("Editing"));
        assert!(grouped.contains_key("Structure"));
        assert!(grouped.contains_key("Resolution"));
    }
}
