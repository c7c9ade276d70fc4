//! Lock screen overlay. Covers everything; any key or click unlocks.

use crossterm::event::{Event, KeyEventKind, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::Component;
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

#[derive(Debug, Default)]
pub struct LockScreenComponent {
    user: Option<String>,
    unlock_requested: bool,
}

impl LockScreenComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_unlock(&mut self) -> bool {
        std::mem::take(&mut self.unlock_requested)
    }

    fn user(&mut self) -> String {
        if let Some(ref user) = self.user {
            return user.clone();
        }
        let user = std::env::var("USER").unwrap_or_else(|_| "visitor".to_string());
        self.user = Some(user.clone());
        user
    }
}

impl Component for LockScreenComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect) {
        frame.fill(
            area,
            Style::default().bg(theme::overlay_bg()).fg(theme::overlay_fg()),
        );
        let user = self.user();
        let mid_y = area.y + area.height / 2;
        let bounds = frame.area();
        let buffer = frame.buffer_mut();
        let lines: [(&str, Style); 3] = [
            (
                "term-desk",
                Style::default()
                    .bg(theme::overlay_bg())
                    .fg(theme::overlay_fg())
                    .add_modifier(Modifier::BOLD),
            ),
            (
                &user,
                Style::default().bg(theme::overlay_bg()).fg(theme::overlay_fg()),
            ),
            (
                "⌁ press any key to unlock",
                Style::default()
                    .bg(theme::overlay_bg())
                    .fg(theme::overlay_dim_fg()),
            ),
        ];
        for (idx, (text, style)) in lines.iter().enumerate() {
            let width = text.chars().count() as u16;
            let x = area.x + area.width.saturating_sub(width) / 2;
            let y = mid_y.saturating_sub(2).saturating_add(idx as u16 * 2);
            safe_set_string(buffer, area.intersection(bounds), x, y, text, *style);
        }
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.unlock_requested = true;
                true
            }
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                self.unlock_requested = true;
                true
            }
            // Everything else (motion, release, resize) stays swallowed
            // without unlocking.
            Event::Key(_) | Event::Mouse(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn key_press_unlocks_once() {
        let mut lock = LockScreenComponent::new();
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert!(lock.handle_event(&ev));
        assert!(lock.take_unlock());
        assert!(!lock.take_unlock());
    }

    #[test]
    fn mouse_motion_does_not_unlock() {
        let mut lock = LockScreenComponent::new();
        let ev = Event::Mouse(crossterm::event::MouseEvent {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert!(lock.handle_event(&ev));
        assert!(!lock.take_unlock());
    }
}
