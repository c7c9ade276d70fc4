//! Boot splash: purely presentational, shown for a fixed duration before
//! the desktop appears. Any key skips it.

use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::theme;
use crate::ui::{UiFrame, centered_rect, safe_set_string};

const LOGO: &str = indoc! {r#"
    ┌┬┐┌─┐┬─┐┌┬┐   ┌┬┐┌─┐┌─┐┬┌─
     │ ├┤ ├┬┘│││ ─  ││├┤ └─┐├┴┐
     ┴ └─┘┴└─┴ ┴   ─┴┘└─┘└─┘┴ ┴
"#};

#[derive(Debug, Default)]
pub struct BootScreenComponent;

impl BootScreenComponent {
    pub fn new() -> Self {
        Self
    }

    /// `progress` runs 0.0..=1.0 across the splash duration.
    pub fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, progress: f32) {
        frame.fill(
            area,
            Style::default().bg(theme::overlay_bg()).fg(theme::overlay_fg()),
        );
        let logo_lines: Vec<&str> = LOGO.lines().filter(|l| !l.is_empty()).collect();
        let logo_width = logo_lines
            .iter()
            .map(|l| l.chars().count() as u16)
            .max()
            .unwrap_or(0);
        let panel = centered_rect(area, logo_width.max(20), logo_lines.len() as u16 + 3);
        let bounds = frame.area();
        let buffer = frame.buffer_mut();
        for (idx, line) in logo_lines.iter().enumerate() {
            safe_set_string(
                buffer,
                panel.intersection(bounds),
                panel.x,
                panel.y.saturating_add(idx as u16),
                line,
                Style::default()
                    .bg(theme::overlay_bg())
                    .fg(theme::overlay_fg())
                    .add_modifier(Modifier::BOLD),
            );
        }
        let filled = ((progress.clamp(0.0, 1.0) * 20.0) as usize).min(20);
        let bar = format!("[{}{}]", "▰".repeat(filled), "▱".repeat(20 - filled));
        let x = panel.x + panel.width.saturating_sub(bar.chars().count() as u16) / 2;
        safe_set_string(
            buffer,
            panel.intersection(bounds),
            x,
            panel.y.saturating_add(logo_lines.len() as u16 + 2),
            &bar,
            Style::default()
                .bg(theme::overlay_bg())
                .fg(theme::overlay_dim_fg()),
        );
    }
}
