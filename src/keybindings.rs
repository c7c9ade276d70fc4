use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Global desktop actions reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    OpenLauncher,
    LockScreen,
    OpenPowerMenu,
    ShowShortcuts,
    OpenTerminal,
    OpenBrowser,
    OpenFiles,
    CloseActiveWindow,
    CloseOverlay,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::OpenLauncher => "Open app launcher",
            Action::LockScreen => "Lock screen",
            Action::OpenPowerMenu => "Power menu",
            Action::ShowShortcuts => "Show shortcuts",
            Action::OpenTerminal => "Open terminal",
            Action::OpenBrowser => "Open browser",
            Action::OpenFiles => "Open projects",
            Action::CloseActiveWindow => "Close active window",
            Action::CloseOverlay => "Close overlay",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Action::*;
        let mut kb = Self::new();
        kb.add(
            Quit,
            KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        kb.add(
            OpenLauncher,
            KeyCombo::new(KeyCode::Char(' '), KeyModifiers::CONTROL),
        );
        kb.add(
            LockScreen,
            KeyCombo::new(
                KeyCode::Char('l'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT,
            ),
        );
        kb.add(
            OpenPowerMenu,
            KeyCombo::new(KeyCode::Char('p'), KeyModifiers::ALT | KeyModifiers::SHIFT),
        );
        // Terminals report Ctrl+Shift+/ as either the slash or the shifted
        // glyph, so register both.
        kb.add(
            ShowShortcuts,
            KeyCombo::new(
                KeyCode::Char('/'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT,
            ),
        );
        kb.add(
            ShowShortcuts,
            KeyCombo::new(
                KeyCode::Char('?'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT,
            ),
        );
        kb.add(
            OpenTerminal,
            KeyCombo::new(KeyCode::Char('t'), KeyModifiers::ALT | KeyModifiers::SHIFT),
        );
        kb.add(
            OpenBrowser,
            KeyCombo::new(KeyCode::Char('b'), KeyModifiers::ALT | KeyModifiers::SHIFT),
        );
        kb.add(
            OpenFiles,
            KeyCombo::new(KeyCode::Char('f'), KeyModifiers::ALT | KeyModifiers::SHIFT),
        );
        kb.add(
            CloseActiveWindow,
            KeyCombo::new(KeyCode::Char('w'), KeyModifiers::ALT | KeyModifiers::SHIFT),
        );
        kb.add(CloseOverlay, KeyCombo::new(KeyCode::Esc, KeyModifiers::NONE));
        kb
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        if let Some(list) = self.map.get(&action) {
            list.iter().any(|c| c.matches(key))
        } else {
            false
        }
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        for (act, list) in &self.map {
            if list.iter().any(|c| c.matches(key)) {
                return Some(*act);
            }
        }
        None
    }

    /// (action, combo displays) pairs for the shortcut help overlay.
    pub fn help_entries(&self) -> Vec<(Action, Vec<String>)> {
        let mut v: Vec<(Action, Vec<String>)> = self
            .map
            .iter()
            .map(|(act, list)| (*act, list.iter().map(|c| c.display()).collect()))
            .collect();
        // HashMap order is arbitrary; show a stable table.
        v.sort_by_key(|(act, _)| format!("{act}"));
        v
    }

    pub fn combos_for(&self, action: Action) -> Vec<String> {
        self.map
            .get(&action)
            .map(|list| list.iter().map(|c| c.display()).collect())
            .unwrap_or_default()
    }
}
