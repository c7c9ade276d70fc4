//! The top bar: launcher button on the left, the focused window title in
//! the middle, package/platform/hostname status and the power button on
//! the right.

use crossterm::event::{Event, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::theme;
use crate::ui::{UiFrame, safe_set_string, truncate_to_width};
use crate::window::view::rect_contains;

#[derive(Debug, Default)]
pub struct TopBar {
    launcher_rect: Option<Rect>,
    power_rect: Option<Rect>,
    hostname: Option<String>,
}

impl TopBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.launcher_rect = None;
        self.power_rect = None;
    }

    fn hostname(&mut self) -> String {
        if let Some(ref h) = self.hostname {
            return h.clone();
        }
        // Cached so we don't make a system call every frame.
        let h = hostname::get()
            .ok()
            .and_then(|s| s.into_string().ok())
            .unwrap_or_else(|| "unknown-host".to_string());
        self.hostname = Some(h.clone());
        h
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, focused_title: Option<&str>) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Style::default()
            .bg(theme::top_bar_bg())
            .fg(theme::top_bar_fg());
        frame.fill(area, style);

        let hostname = self.hostname();
        let bounds = frame.area();
        let clip = area.intersection(bounds);
        let buffer = frame.buffer_mut();
        let y = area.y;
        let max_x = area.x.saturating_add(area.width);

        let launcher_label = " ⌕ ";
        safe_set_string(buffer, clip, area.x, y, launcher_label, style);
        self.launcher_rect = Some(Rect {
            x: area.x,
            y,
            width: launcher_label.chars().count() as u16,
            height: 1,
        });

        // Right side: status info then the power button.
        const PKG_NAME: &str = env!("CARGO_PKG_NAME");
        const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
        let platform = std::env::consts::OS;
        let info = format!("{PKG_NAME} {PKG_VERSION} · {platform} · {hostname} ");
        let power_label = " ⏻ ";
        let power_width = power_label.chars().count() as u16;
        let power_x = max_x.saturating_sub(power_width);
        safe_set_string(
            buffer,
            clip,
            power_x,
            y,
            power_label,
            style.fg(theme::top_bar_accent_fg()),
        );
        self.power_rect = Some(Rect {
            x: power_x,
            y,
            width: power_width,
            height: 1,
        });
        let info_width = info.chars().count() as u16;
        let info_x = power_x.saturating_sub(info_width);
        if info_x > area.x + 4 {
            safe_set_string(buffer, clip, info_x, y, &info, style);
        }

        // Center: the focused window title.
        if let Some(title) = focused_title {
            let label = truncate_to_width(title, (area.width / 2) as usize);
            let width = label.chars().count() as u16;
            let x = area.x + area.width.saturating_sub(width) / 2;
            safe_set_string(
                buffer,
                clip,
                x,
                y,
                &label,
                style
                    .fg(theme::top_bar_accent_fg())
                    .add_modifier(Modifier::BOLD),
            );
        }
    }

    pub fn hit_test_launcher(&self, event: &Event) -> bool {
        Self::hit(self.launcher_rect, event)
    }

    pub fn hit_test_power(&self, event: &Event) -> bool {
        Self::hit(self.power_rect, event)
    }

    fn hit(rect: Option<Rect>, event: &Event) -> bool {
        let Event::Mouse(mouse) = event else {
            return false;
        };
        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return false;
        }
        rect.is_some_and(|r| rect_contains(r, mouse.column, mouse.row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent};
    use ratatui::buffer::Buffer;

    fn press(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn hit_tests_false_before_first_render() {
        let bar = TopBar::new();
        assert!(!bar.hit_test_launcher(&press(0, 0)));
        assert!(!bar.hit_test_power(&press(0, 0)));
    }

    #[test]
    fn render_registers_launcher_and_power_hits() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 1,
        };
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        let mut bar = TopBar::new();
        bar.begin_frame();
        bar.render(&mut ui, area, Some("Terminal"));
        assert!(bar.hit_test_launcher(&press(1, 0)));
        assert!(bar.hit_test_power(&press(78, 0)));
        assert!(!bar.hit_test_power(&press(40, 0)));
    }

    #[test]
    fn hostname_is_cached_across_renders() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 1,
        };
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        let mut bar = TopBar::new();
        bar.render(&mut ui, area, None);
        let first = bar.hostname.clone();
        assert!(first.is_some());
        bar.render(&mut ui, area, None);
        assert_eq!(bar.hostname, first);
    }
}
