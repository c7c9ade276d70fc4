//! Shortcut help overlay. The table is derived from the live
//! `KeyBindings` so it can never drift from the actual chords.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::Component;
use crate::keybindings::KeyBindings;
use crate::theme;
use crate::ui::{UiFrame, centered_rect, safe_set_string};

#[derive(Debug, Default)]
pub struct HelpOverlayComponent {
    lines: Vec<String>,
    dismissed: bool,
}

impl HelpOverlayComponent {
    pub fn new(bindings: &KeyBindings) -> Self {
        let lines = bindings
            .help_entries()
            .into_iter()
            .map(|(action, combos)| format!("{:<22} {}", action.to_string(), combos.join(", ")))
            .collect();
        Self {
            lines,
            dismissed: false,
        }
    }

    pub fn open(&mut self) {
        self.dismissed = false;
    }

    pub fn take_dismissed(&mut self) -> bool {
        std::mem::take(&mut self.dismissed)
    }
}

impl Component for HelpOverlayComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect) {
        let height = (self.lines.len() as u16).saturating_add(4).min(area.height);
        let width = self
            .lines
            .iter()
            .map(|l| l.chars().count() as u16 + 4)
            .max()
            .unwrap_or(20)
            .min(area.width);
        let panel = centered_rect(area, width, height);
        frame.dim_except(area, panel);
        frame.fill(
            panel,
            Style::default().bg(theme::overlay_bg()).fg(theme::overlay_fg()),
        );
        let bounds = frame.area();
        let buffer = frame.buffer_mut();
        safe_set_string(
            buffer,
            panel.intersection(bounds),
            panel.x.saturating_add(2),
            panel.y.saturating_add(1),
            "Keyboard shortcuts",
            Style::default()
                .bg(theme::overlay_bg())
                .fg(theme::overlay_fg())
                .add_modifier(Modifier::BOLD),
        );
        for (idx, line) in self.lines.iter().enumerate() {
            safe_set_string(
                buffer,
                panel.intersection(bounds),
                panel.x.saturating_add(2),
                panel.y.saturating_add(3).saturating_add(idx as u16),
                line,
                Style::default()
                    .bg(theme::overlay_bg())
                    .fg(theme::overlay_dim_fg()),
            );
        }
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                self.dismissed = true;
                true
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    #[test]
    fn table_covers_every_bound_action() {
        let bindings = KeyBindings::default();
        let help = HelpOverlayComponent::new(&bindings);
        assert_eq!(help.lines.len(), bindings.help_entries().len());
    }

    #[test]
    fn escape_dismisses() {
        let bindings = KeyBindings::default();
        let mut help = HelpOverlayComponent::new(&bindings);
        help.open();
        let ev = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(help.handle_event(&ev));
        assert!(help.take_dismissed());
    }
}
