//! The app catalog: every launchable application with its display
//! metadata and presentational body.
//!
//! Apps carry no behavior of their own. The registry stores the content
//! payload as an opaque value and the desktop renders it as static copy;
//! nothing in here talks back to the window registry.

use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Wrap};

use crate::theme;
use crate::ui::UiFrame;

pub type AppId = &'static str;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSpec {
    pub id: AppId,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const CATALOG: &[AppSpec] = &[
    AppSpec {
        id: "terminal",
        title: "Terminal",
        icon: ">_",
        description: "Command line interface",
    },
    AppSpec {
        id: "browser",
        title: "Browser",
        icon: "◍",
        description: "Internet browser",
    },
    AppSpec {
        id: "files",
        title: "Projects",
        icon: "▤",
        description: "Portfolio projects",
    },
    AppSpec {
        id: "notepad",
        title: "Resume",
        icon: "▦",
        description: "View the resume",
    },
    AppSpec {
        id: "skills",
        title: "Skills",
        icon: "⚙",
        description: "Technical skills",
    },
    AppSpec {
        id: "settings",
        title: "Settings",
        icon: "✦",
        description: "System preferences",
    },
];

pub fn spec(id: AppId) -> Option<&'static AppSpec> {
    CATALOG.iter().find(|app| app.id == id)
}

/// Case-insensitive catalog filter over titles and descriptions, used by
/// the search launcher.
pub fn search(query: &str) -> Vec<&'static AppSpec> {
    let needle = query.to_lowercase();
    CATALOG
        .iter()
        .filter(|app| {
            app.title.to_lowercase().contains(&needle)
                || app.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Opaque renderable payload stored in the registry per window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppContent {
    body: &'static str,
}

impl AppContent {
    /// Payload for an app id. Unknown ids get a placeholder body so a
    /// launcher with a stale id still opens something sensible.
    pub fn for_app(id: AppId) -> Self {
        let body = match id {
            "terminal" => TERMINAL_BODY,
            "browser" => BROWSER_BODY,
            "files" => FILES_BODY,
            "notepad" => NOTEPAD_BODY,
            "skills" => SKILLS_BODY,
            "settings" => SETTINGS_BODY,
            _ => MISSING_BODY,
        };
        Self { body }
    }

    pub fn render(&self, frame: &mut UiFrame<'_>, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let text = Text::raw(self.body);
        let paragraph = Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .style(
                Style::default()
                    .bg(theme::window_body_bg())
                    .fg(theme::window_body_fg()),
            );
        frame.render_widget(paragraph, area);
    }
}

const TERMINAL_BODY: &str = indoc! {r#"
    visitor@term-desk:~$ whoami
    visitor
    visitor@term-desk:~$ uname -a
    term-desk 0.1.0 (simulated) cells/ratatui
    visitor@term-desk:~$ ls ~/projects
    term-desk   dotfiles   playground
    visitor@term-desk:~$ _
"#};

const BROWSER_BODY: &str = indoc! {r#"
     ┌──────────────────────────────────────┐
     │  https://example.dev                 │
     └──────────────────────────────────────┘

      This browser is a stage prop. There is
      no network stack behind it; the address
      bar accepts wishful thinking only.
"#};

const FILES_BODY: &str = indoc! {r#"
     ~/projects

       ▸ term-desk/        window registry, dock, overlays
       ▸ dotfiles/         shell + editor configuration
       ▸ playground/       scratch experiments
       ▸ archive/          retired prototypes

     4 items
"#};

const NOTEPAD_BODY: &str = indoc! {r#"
     RESUME.txt
     ──────────

     Systems-minded developer. Builds terminal
     user interfaces, window managers, and the
     occasional desktop that only pretends to
     be one.

     Interests: stacking order, cell grids,
     keyboard-first workflows.
"#};

const SKILLS_BODY: &str = indoc! {r#"
     Skills
     ──────

     Rust            ████████░░
     Terminal UIs    █████████░
     Window mgmt     ████████░░
     Browser DOM     ███░░░░░░░  (retired)
"#};

const SETTINGS_BODY: &str = indoc! {r#"
     Settings
     ────────

     Appearance      dark (always)
     Wallpaper       solid
     Animations      dock bounce + zoom
     Telemetry       none, obviously
"#};

const MISSING_BODY: &str = indoc! {r#"
     Nothing is installed at this id.
"#};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn search_matches_title_and_description() {
        let by_title = search("term");
        assert!(by_title.iter().any(|app| app.id == "terminal"));
        let by_description = search("preferences");
        assert!(by_description.iter().any(|app| app.id == "settings"));
        assert!(search("").len() == CATALOG.len());
    }

    #[test]
    fn unknown_app_gets_placeholder_content() {
        assert_eq!(AppContent::for_app("nope"), AppContent { body: MISSING_BODY });
    }
}
