//! UiFrame: a thin wrapper around `ratatui::Frame` that clamps drawing to
//! the visible area and centralizes clipping logic.
//!
//! Window rectangles routinely drift partially outside the terminal while
//! they are dragged or while the terminal shrinks. Writing out-of-bounds
//! into the underlying `Buffer` can panic or corrupt rendering, so every
//! draw call is routed through this wrapper and clipped to the visible
//! area instead of guarding each call site by hand.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer. Powers
    /// offscreen rendering in tests and the bench harness.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    /// Overwrite every cell in `area` (clipped) with a space in `style`.
    /// Used for chrome backgrounds and overlay backdrops.
    pub fn fill(&mut self, area: Rect, style: Style) {
        let Some(clipped) = self.clip_rect(area) else {
            return;
        };
        for y in clipped.y..clipped.y.saturating_add(clipped.height) {
            for x in clipped.x..clipped.x.saturating_add(clipped.width) {
                if let Some(cell) = self.buffer.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_style(style);
                }
            }
        }
    }

    /// Dim every cell in `area` except those inside `exclude`.
    pub fn dim_except(&mut self, area: Rect, exclude: Rect) {
        let Some(clipped) = self.clip_rect(area) else {
            return;
        };
        let style = Style::default().add_modifier(ratatui::style::Modifier::DIM);
        for y in clipped.y..clipped.y.saturating_add(clipped.height) {
            for x in clipped.x..clipped.x.saturating_add(clipped.width) {
                if x >= exclude.x
                    && x < exclude.x.saturating_add(exclude.width)
                    && y >= exclude.y
                    && y < exclude.y.saturating_add(exclude.height)
                {
                    continue;
                }
                if let Some(cell) = self.buffer.cell_mut((x, y)) {
                    cell.set_style(style);
                }
            }
        }
    }
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    if available == 0 {
        return;
    }
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

/// Center a `width`×`height` box inside `area`, clamping when it does not fit.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    #[test]
    fn truncate_to_width_short_and_long() {
        assert_eq!(truncate_to_width("abc", 5), "abc");
        assert_eq!(truncate_to_width("abcdef", 3), "abc");
    }

    #[test]
    fn safe_set_string_writes_within_bounds() {
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 2,
        };
        let mut buf = Buffer::empty(bounds);
        safe_set_string(&mut buf, bounds, 1, 0, "hello", Style::default());
        let cell = buf.cell((1, 0)).expect("cell present");
        assert!(cell.symbol().starts_with('h'));

        // outside bounds should be ignored (no panic)
        safe_set_string(&mut buf, bounds, 100, 0, "x", Style::default());
    }

    #[test]
    fn fill_clips_to_frame_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 4,
            height: 2,
        };
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        ui.fill(
            Rect {
                x: 2,
                y: 0,
                width: 10,
                height: 10,
            },
            Style::default(),
        );
        // No panic and cells inside the clip were touched.
        assert_eq!(buf.cell((3, 1)).unwrap().symbol(), " ");
    }

    #[test]
    fn centered_rect_centers_and_clamps() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 10,
        };
        let rect = centered_rect(area, 4, 2);
        assert_eq!((rect.x, rect.y), (3, 4));
        let clamped = centered_rect(area, 40, 2);
        assert_eq!(clamped.width, 10);
    }

    #[test]
    fn render_widget_clips_to_frame_area() {
        use ratatui::widgets::Widget;

        let area = Rect {
            x: 0,
            y: 0,
            width: 5,
            height: 3,
        };
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);

        struct FillWidget;
        impl Widget for FillWidget {
            fn render(self, area: Rect, buf: &mut Buffer) {
                for y in area.y..area.y.saturating_add(area.height) {
                    for x in area.x..area.x.saturating_add(area.width) {
                        if let Some(cell) = buf.cell_mut((x, y)) {
                            cell.set_symbol("A");
                        }
                    }
                }
            }
        }

        // Request an area that partially lies outside the right edge.
        ui.render_widget(
            FillWidget,
            Rect {
                x: 3,
                y: 1,
                width: 5,
                height: 2,
            },
        );

        assert!(buf.cell((3, 1)).unwrap().symbol().starts_with('A'));
        assert!(!buf.cell((2, 1)).unwrap().symbol().starts_with('A'));
    }
}
