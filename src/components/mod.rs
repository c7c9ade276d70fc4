use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::ui::UiFrame;

pub mod boot_screen;
pub mod help_overlay;
pub mod launcher;
pub mod lock_screen;
pub mod power_menu;

pub use boot_screen::BootScreenComponent;
pub use help_overlay::HelpOverlayComponent;
pub use launcher::{LauncherAction, LauncherComponent};
pub use lock_screen::LockScreenComponent;
pub use power_menu::{PowerAction, PowerMenuComponent};

/// A system overlay drawn above the window stack.
///
/// While visible an overlay consumes input; results surface through each
/// component's `take_*` accessor rather than a return value, so the
/// desktop can drain them after dispatch.
pub trait Component {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect);

    fn handle_event(&mut self, _event: &Event) -> bool {
        false
    }
}
