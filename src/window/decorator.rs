//! Window chrome: the one-row title bar with minimize/maximize/close
//! buttons, and the hit tests that map pointer presses onto it.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::view::rect_contains;
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};

/// What a press on the window header means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    None,
    Drag,
    Minimize,
    Maximize,
    Close,
}

// Button cells, measured from the right edge of the header row.
const CLOSE_OFFSET: u16 = 2;
const MAXIMIZE_OFFSET: u16 = 4;
const MINIMIZE_OFFSET: u16 = 6;

pub trait WindowDecorator: std::fmt::Debug {
    fn render(
        &self,
        frame: &mut UiFrame<'_>,
        rect: Rect,
        title: &str,
        icon: &str,
        focused: bool,
        maximized: bool,
        show_maximize: bool,
    );

    fn hit_test(&self, rect: Rect, column: u16, row: u16, show_maximize: bool) -> HeaderAction;

    /// The area left for the app payload once the chrome is drawn.
    fn content_rect(&self, rect: Rect) -> Rect {
        Rect {
            x: rect.x,
            y: rect.y.saturating_add(1),
            width: rect.width,
            height: rect.height.saturating_sub(1),
        }
    }
}

#[derive(Debug)]
pub struct DefaultDecorator;

impl DefaultDecorator {
    fn button_column(rect: Rect, offset: u16) -> Option<u16> {
        let right = rect.x.saturating_add(rect.width);
        if rect.width <= offset {
            return None;
        }
        Some(right - offset)
    }
}

impl WindowDecorator for DefaultDecorator {
    fn render(
        &self,
        frame: &mut UiFrame<'_>,
        rect: Rect,
        title: &str,
        icon: &str,
        focused: bool,
        maximized: bool,
        show_maximize: bool,
    ) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        frame.fill(
            rect,
            Style::default()
                .bg(theme::window_body_bg())
                .fg(theme::window_body_fg()),
        );

        let header = Rect {
            height: 1,
            ..rect
        };
        let (header_bg, header_fg) = if focused {
            (theme::header_bg_focused(), theme::header_fg_focused())
        } else {
            (theme::header_bg(), theme::header_fg())
        };
        let header_style = Style::default().bg(header_bg).fg(header_fg);
        frame.fill(header, header_style);

        let bounds = frame.area();
        let buffer = frame.buffer_mut();
        let label = format!(" {icon} {title}");
        // Leave the button cells free on the right.
        let label_bounds = Rect {
            width: rect.width.saturating_sub(MINIMIZE_OFFSET + 1),
            ..header
        };
        let label_bounds = label_bounds.intersection(bounds);
        let title_style = if focused {
            header_style.add_modifier(Modifier::BOLD)
        } else {
            header_style
        };
        safe_set_string(buffer, label_bounds, rect.x, rect.y, &label, title_style);

        let header_bounds = header.intersection(bounds);
        if let Some(col) = Self::button_column(rect, MINIMIZE_OFFSET) {
            safe_set_string(buffer, header_bounds, col, rect.y, "─", header_style);
        }
        if show_maximize && let Some(col) = Self::button_column(rect, MAXIMIZE_OFFSET) {
            let glyph = if maximized { "❐" } else { "□" };
            safe_set_string(buffer, header_bounds, col, rect.y, glyph, header_style);
        }
        if let Some(col) = Self::button_column(rect, CLOSE_OFFSET) {
            let style = header_style.fg(theme::close_button_fg());
            safe_set_string(buffer, header_bounds, col, rect.y, "✕", style);
        }
    }

    fn hit_test(&self, rect: Rect, column: u16, row: u16, show_maximize: bool) -> HeaderAction {
        if rect.height == 0 || row != rect.y || !rect_contains(rect, column, row) {
            return HeaderAction::None;
        }
        if Self::button_column(rect, CLOSE_OFFSET) == Some(column) {
            return HeaderAction::Close;
        }
        if show_maximize && Self::button_column(rect, MAXIMIZE_OFFSET) == Some(column) {
            return HeaderAction::Maximize;
        }
        if Self::button_column(rect, MINIMIZE_OFFSET) == Some(column) {
            return HeaderAction::Minimize;
        }
        HeaderAction::Drag
    }
}
