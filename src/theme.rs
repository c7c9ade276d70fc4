use ratatui::style::Color;

// Centralized theme colors. Keep these as small helpers so the palette
// can change in one place without touching render code.

// Desktop backdrop
pub fn desktop_bg() -> Color {
    Color::Rgb(24, 26, 38)
}
pub fn desktop_fg() -> Color {
    Color::DarkGray
}

// Top bar
pub fn top_bar_bg() -> Color {
    Color::Rgb(16, 18, 28)
}
pub fn top_bar_fg() -> Color {
    Color::Gray
}
pub fn top_bar_accent_fg() -> Color {
    Color::White
}

// Dock
pub fn dock_bg() -> Color {
    Color::Rgb(16, 18, 28)
}
pub fn dock_fg() -> Color {
    Color::Gray
}
pub fn dock_running_fg() -> Color {
    Color::White
}
pub fn dock_bounce_fg() -> Color {
    Color::Yellow
}
pub fn dock_zoom_fg() -> Color {
    Color::Cyan
}

// Window chrome
pub fn header_bg_focused() -> Color {
    Color::Blue
}
pub fn header_fg_focused() -> Color {
    Color::White
}
pub fn header_bg() -> Color {
    Color::DarkGray
}
pub fn header_fg() -> Color {
    Color::Gray
}
pub fn window_body_bg() -> Color {
    Color::Rgb(32, 34, 46)
}
pub fn window_body_fg() -> Color {
    Color::White
}
pub fn close_button_fg() -> Color {
    Color::LightRed
}

// Overlays (launcher, power menu, lock screen, help)
pub fn overlay_bg() -> Color {
    Color::Black
}
pub fn overlay_fg() -> Color {
    Color::White
}
pub fn overlay_dim_fg() -> Color {
    Color::DarkGray
}
pub fn overlay_selected_bg() -> Color {
    Color::Blue
}
pub fn overlay_selected_fg() -> Color {
    Color::White
}

// Indicators
pub fn success_fg() -> Color {
    Color::Green
}
pub fn danger_fg() -> Color {
    Color::Red
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_header_differs_from_unfocused() {
        assert_ne!(header_bg_focused(), header_bg());
    }

    #[test]
    fn bar_palettes_match() {
        // Top bar and dock share the shell chrome background.
        assert_eq!(top_bar_bg(), dock_bg());
    }
}
