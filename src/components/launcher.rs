//! Search launcher overlay: type to filter the app catalog, arrows to
//! select, Enter to toggle the selected app.

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::Component;
use crate::apps::{self, AppId};
use crate::theme;
use crate::ui::{UiFrame, centered_rect, safe_set_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherAction {
    Launch(AppId),
    Dismiss,
}

#[derive(Debug, Default)]
pub struct LauncherComponent {
    query: String,
    selected: usize,
    pending: Option<LauncherAction>,
}

impl LauncherComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset transient state when the overlay opens.
    pub fn open(&mut self) {
        self.query.clear();
        self.selected = 0;
        self.pending = None;
    }

    pub fn take_action(&mut self) -> Option<LauncherAction> {
        self.pending.take()
    }

    fn results(&self) -> Vec<&'static apps::AppSpec> {
        apps::search(&self.query)
    }
}

impl Component for LauncherComponent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect) {
        let results = self.results();
        let height = (results.len() as u16).saturating_add(4).max(5).min(area.height);
        let panel = centered_rect(area, 48.min(area.width), height);
        frame.dim_except(area, panel);
        frame.fill(
            panel,
            Style::default().bg(theme::overlay_bg()).fg(theme::overlay_fg()),
        );

        let bounds = frame.area();
        let buffer = frame.buffer_mut();
        let prompt = format!(" ⌕ {}_", self.query);
        safe_set_string(
            buffer,
            panel.intersection(bounds),
            panel.x,
            panel.y.saturating_add(1),
            &prompt,
            Style::default()
                .bg(theme::overlay_bg())
                .fg(theme::overlay_fg())
                .add_modifier(Modifier::BOLD),
        );

        for (idx, app) in results.iter().enumerate() {
            let y = panel.y.saturating_add(3).saturating_add(idx as u16);
            let line = format!("  {}  {:<10} {}", app.icon, app.title, app.description);
            let style = if idx == self.selected {
                Style::default()
                    .bg(theme::overlay_selected_bg())
                    .fg(theme::overlay_selected_fg())
            } else {
                Style::default()
                    .bg(theme::overlay_bg())
                    .fg(theme::overlay_dim_fg())
            };
            safe_set_string(buffer, panel.intersection(bounds), panel.x, y, &line, style);
        }
        if results.is_empty() {
            safe_set_string(
                buffer,
                panel.intersection(bounds),
                panel.x,
                panel.y.saturating_add(3),
                "  no results",
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
        let result_count = self.results().len();
        match key.code {
            KeyCode::Esc => {
                self.pending = Some(LauncherAction::Dismiss);
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if result_count > 0 {
                    self.selected = (self.selected + 1).min(result_count - 1);
                }
            }
            KeyCode::Enter => {
                if let Some(app) = self.results().get(self.selected) {
                    self.pending = Some(LauncherAction::Launch(app.id));
                }
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.selected = 0;
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.selected = 0;
            }
            _ => return false,
        }
        true
    }
}
