//! Power menu overlay: a horizontal row of session actions.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::Component;
use crate::theme;
use crate::ui::{UiFrame, centered_rect, safe_set_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    Lock,
    Logout,
    Restart,
    Shutdown,
    Dismiss,
}

const ITEMS: &[(&str, PowerAction)] = &[
    ("⌁ Lock", PowerAction::Lock),
    ("← Logout", PowerAction::Logout),
    ("↻ Restart", PowerAction::Restart),
    ("⏻ Shutdown", PowerAction::Shutdown),
];

#[derive(Debug, Default)]
pub struct PowerMenuComponent {
    selected: usize,
    pending: Option<PowerAction>,
}

impl PowerMenuComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.selected = 0;
        self.pending = None;
    }

    pub fn take_action(&mut self) -> Option<PowerAction> {
        self.pending.take()
    }
}

impl Component for PowerMenuComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect) {
        let width: u16 = ITEMS
            .iter()
            .map(|(label, _)| label.chars().count() as u16 + 4)
            .sum();
        let panel = centered_rect(area, width.min(area.width), 3);
        frame.dim_except(area, panel);
        frame.fill(
            panel,
            Style::default().bg(theme::overlay_bg()).fg(theme::overlay_fg()),
        );
        let bounds = frame.area();
        let buffer = frame.buffer_mut();
        let mut x = panel.x.saturating_add(1);
        let y = panel.y.saturating_add(1);
        for (idx, (label, _)) in ITEMS.iter().enumerate() {
            let chunk = format!(" {label} ");
            let style = if idx == self.selected {
                Style::default()
                    .bg(theme::overlay_selected_bg())
                    .fg(theme::overlay_selected_fg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .bg(theme::overlay_bg())
                    .fg(theme::overlay_dim_fg())
            };
            safe_set_string(buffer, panel.intersection(bounds), x, y, &chunk, style);
            x = x.saturating_add(chunk.chars().count() as u16 + 1);
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
            KeyCode::Esc => {
                self.pending = Some(PowerAction::Dismiss);
            }
            KeyCode::Left => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Tab => {
                self.selected = (self.selected + 1) % ITEMS.len();
            }
            KeyCode::Enter => {
                self.pending = Some(ITEMS[self.selected].1);
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn arrows_select_and_enter_fires() {
        let mut menu = PowerMenuComponent::new();
        menu.open();
        menu.handle_event(&key(KeyCode::Right));
        menu.handle_event(&key(KeyCode::Right));
        menu.handle_event(&key(KeyCode::Enter));
        assert_eq!(menu.take_action(), Some(PowerAction::Restart));
    }

    #[test]
    fn selection_wraps_right() {
        let mut menu = PowerMenuComponent::new();
        menu.open();
        for _ in 0..ITEMS.len() {
            menu.handle_event(&key(KeyCode::Right));
        }
        menu.handle_event(&key(KeyCode::Enter));
        assert_eq!(menu.take_action(), Some(PowerAction::Lock));
    }

    #[test]
    fn escape_dismisses() {
        let mut menu = PowerMenuComponent::new();
        menu.open();
        menu.handle_event(&key(KeyCode::Esc));
        assert_eq!(menu.take_action(), Some(PowerAction::Dismiss));
    }
}
