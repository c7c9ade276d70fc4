//! The desktop shell: owns the window registry and the chrome around it,
//! routes every input event, and draws the whole scene.
//!
//! Dispatch order mirrors the visual stacking: boot splash, then lock
//! screen, then system overlays, then global chords, then pointer input
//! walking the window stack top-down. All registry mutations happen
//! synchronously inside `handle_event`/`tick`; rendering never mutates
//! registry state.

use std::time::Instant;

use crossterm::event::{Event, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::apps::{self, AppContent, AppId};
use crate::components::{
    BootScreenComponent, Component, HelpOverlayComponent, LauncherAction, LauncherComponent,
    LockScreenComponent, PowerAction, PowerMenuComponent,
};
use crate::constants::{
    BOOT_SPLASH_DURATION, DOCK_HEIGHT, DOUBLE_PRESS_WINDOW, NARROW_VIEWPORT_COLS, TOP_BAR_HEIGHT,
};
use crate::dock::{Dock, DockPress};
use crate::keybindings::{Action, KeyBindings};
use crate::state::SystemState;
use crate::theme;
use crate::topbar::TopBar;
use crate::ui::UiFrame;
use crate::window::decorator::DefaultDecorator;
use crate::window::view::{self, GestureTracker, Viewport};
use crate::window::{GestureOutcome, HeaderAction, Point, Size, WindowDecorator, WindowRegistry};

#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopOptions {
    pub skip_boot: bool,
    pub start_locked: bool,
    /// Force the narrow-viewport layout regardless of terminal width.
    pub force_narrow: bool,
}

pub struct Desktop {
    registry: WindowRegistry<AppId, AppContent>,
    system: SystemState,
    dock: Dock,
    topbar: TopBar,
    launcher: LauncherComponent,
    power_menu: PowerMenuComponent,
    lock_screen: LockScreenComponent,
    help: HelpOverlayComponent,
    boot: BootScreenComponent,
    bindings: KeyBindings,
    gestures: GestureTracker<AppId>,
    decorator: Box<dyn WindowDecorator>,
    viewport: Viewport,
    force_narrow: bool,
    boot_started: Option<Instant>,
    last_header_press: Option<(AppId, Instant)>,
    quit_requested: bool,
}

impl Desktop {
    pub fn new(viewport: Viewport, options: DesktopOptions) -> Self {
        let bindings = KeyBindings::default();
        let help = HelpOverlayComponent::new(&bindings);
        let mut system = SystemState::new();
        system.set_booting(!options.skip_boot);
        system.set_locked(options.start_locked);
        Self {
            registry: WindowRegistry::new(viewport.size()),
            system,
            dock: Dock::new(apps::CATALOG),
            topbar: TopBar::new(),
            launcher: LauncherComponent::new(),
            power_menu: PowerMenuComponent::new(),
            lock_screen: LockScreenComponent::new(),
            help,
            boot: BootScreenComponent::new(),
            bindings,
            gestures: GestureTracker::new(),
            decorator: Box::new(DefaultDecorator),
            viewport,
            force_narrow: options.force_narrow,
            boot_started: None,
            last_header_press: None,
            quit_requested: false,
        }
    }

    pub fn registry(&self) -> &WindowRegistry<AppId, AppContent> {
        &self.registry
    }

    pub fn system(&self) -> &SystemState {
        &self.system
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn dock(&self) -> &Dock {
        &self.dock
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// The viewport after the forced-narrow override, which is what every
    /// layout decision uses.
    pub fn viewport(&self) -> Viewport {
        if self.force_narrow {
            Viewport::new(
                self.viewport.width.min(NARROW_VIEWPORT_COLS.saturating_sub(1)),
                self.viewport.height,
            )
        } else {
            self.viewport
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.registry.set_viewport(viewport.size());
    }

    /// Route one input event. Returns true when the event was consumed.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> bool {
        if let Event::Resize(width, height) = event {
            self.set_viewport(Viewport::new(*width, *height));
            return true;
        }
        if self.system.booting() {
            if matches!(event, Event::Key(key) if key.kind == KeyEventKind::Press) {
                self.system.set_booting(false);
            }
            return true;
        }
        if self.system.locked() {
            self.lock_screen.handle_event(event);
            if self.lock_screen.take_unlock() {
                self.system.set_locked(false);
            }
            return true;
        }
        if self.system.power_menu_open() {
            self.power_menu.handle_event(event);
            if let Some(action) = self.power_menu.take_action() {
                self.apply_power_action(action);
            }
            return true;
        }
        if self.system.launcher_open() {
            self.launcher.handle_event(event);
            match self.launcher.take_action() {
                Some(LauncherAction::Launch(id)) => {
                    self.toggle_app(id);
                    self.system.set_launcher_open(false);
                }
                Some(LauncherAction::Dismiss) => self.system.set_launcher_open(false),
                None => {}
            }
            return true;
        }
        if self.system.help_open() {
            self.help.handle_event(event);
            if self.help.take_dismissed() {
                self.system.set_help_open(false);
            }
            return true;
        }
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = self.bindings.action_for_key(key) {
                    return self.perform(action);
                }
                false
            }
            Event::Mouse(mouse) => self.handle_mouse(*mouse, now),
            _ => false,
        }
    }

    /// Advance time-based state: the boot splash deadline and the dock
    /// icon animations (whose completed cycles fire their toggles here).
    pub fn tick(&mut self, now: Instant) {
        if self.system.booting() {
            let started = *self.boot_started.get_or_insert(now);
            if now.duration_since(started) >= BOOT_SPLASH_DURATION {
                self.system.set_booting(false);
            }
            return;
        }
        for id in self.dock.tick(now) {
            self.toggle_app(id);
        }
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, now: Instant) {
        self.topbar.begin_frame();
        self.dock.begin_frame();
        let area = frame.area();
        frame.fill(
            area,
            Style::default()
                .bg(theme::desktop_bg())
                .fg(theme::desktop_fg()),
        );
        if self.system.booting() {
            let progress = self
                .boot_started
                .map(|started| {
                    now.duration_since(started).as_secs_f32()
                        / BOOT_SPLASH_DURATION.as_secs_f32()
                })
                .unwrap_or(0.0);
            self.boot.render(frame, area, progress);
            return;
        }

        let viewport = self.viewport();
        let narrow = viewport.is_narrow();
        for surface in view::draw_plan(&self.registry, viewport, &self.gestures) {
            let Some(window) = self.registry.get(&surface.id) else {
                continue;
            };
            self.decorator.render(
                frame,
                surface.rect,
                window.title(),
                window.icon(),
                surface.focused,
                surface.maximized,
                !narrow,
            );
            let content = self.decorator.content_rect(surface.rect);
            window.content().render(frame, content);
        }

        // The dock hides while any window is maximized; maximized windows
        // own the full strip below the top bar.
        if !self.registry.any_maximized() && area.height > TOP_BAR_HEIGHT + DOCK_HEIGHT {
            let dock_area = Rect {
                x: area.x,
                y: area.y + area.height - DOCK_HEIGHT,
                width: area.width,
                height: DOCK_HEIGHT,
            };
            let registry = &self.registry;
            self.dock
                .render(frame, dock_area, |id| registry.contains(&id));
        }

        let top_area = Rect {
            height: TOP_BAR_HEIGHT.min(area.height),
            ..area
        };
        let focused_title = self
            .registry
            .focused()
            .and_then(|id| self.registry.get(id))
            .map(|w| w.title().to_string());
        self.topbar.render(frame, top_area, focused_title.as_deref());

        if self.system.launcher_open() {
            self.launcher.render(frame, area);
        }
        if self.system.power_menu_open() {
            self.power_menu.render(frame, area);
        }
        if self.system.help_open() {
            self.help.render(frame, area);
        }
        if self.system.locked() {
            self.lock_screen.render(frame, area);
        }
    }

    fn perform(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => self.quit_requested = true,
            Action::OpenLauncher => {
                self.launcher.open();
                self.system.set_launcher_open(true);
            }
            Action::LockScreen => self.system.set_locked(true),
            Action::OpenPowerMenu => {
                self.power_menu.open();
                self.system.set_power_menu_open(true);
            }
            Action::ShowShortcuts => {
                self.help.open();
                self.system.set_help_open(true);
            }
            Action::OpenTerminal => self.open_app("terminal"),
            Action::OpenBrowser => self.open_app("browser"),
            Action::OpenFiles => self.open_app("files"),
            Action::CloseActiveWindow => {
                // "Active" is the highest z-index among open windows, not
                // the advisory focus flag.
                if let Some(id) = self.registry.active().map(|w| *w.id()) {
                    self.registry.close(&id);
                }
            }
            Action::CloseOverlay => return false,
        }
        true
    }

    fn open_app(&mut self, id: AppId) {
        let Some(spec) = apps::spec(id) else {
            return;
        };
        self.registry
            .open(id, spec.title, spec.icon, AppContent::for_app(id));
    }

    fn toggle_app(&mut self, id: AppId) {
        let Some(spec) = apps::spec(id) else {
            return;
        };
        self.registry
            .toggle(id, spec.title, spec.icon, AppContent::for_app(id));
    }

    fn apply_power_action(&mut self, action: PowerAction) {
        match action {
            PowerAction::Lock => self.system.set_locked(true),
            // There is no separate login screen; logging out returns to
            // the lock screen with the session intact.
            PowerAction::Logout => self.system.set_locked(true),
            PowerAction::Restart => self.restart(),
            PowerAction::Shutdown => self.quit_requested = true,
            PowerAction::Dismiss => self.system.set_power_menu_open(false),
        }
    }

    fn restart(&mut self) {
        tracing::info!("session restart requested");
        self.registry = WindowRegistry::new(self.viewport.size());
        self.dock = Dock::new(apps::CATALOG);
        self.gestures.cancel();
        self.last_header_press = None;
        self.system = SystemState::new();
        self.boot_started = None;
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> bool {
        match mouse.kind {
            MouseEventKind::Down(_) => self.handle_mouse_down(mouse, now),
            MouseEventKind::Drag(_) => {
                if self.gestures.is_active() {
                    self.gestures.update(mouse.column, mouse.row);
                    true
                } else {
                    false
                }
            }
            MouseEventKind::Up(_) => self.finish_gesture(),
            _ => false,
        }
    }

    fn handle_mouse_down(&mut self, mouse: MouseEvent, now: Instant) -> bool {
        let event = Event::Mouse(mouse);
        if self.topbar.hit_test_launcher(&event) {
            self.launcher.open();
            self.system.set_launcher_open(true);
            return true;
        }
        if self.topbar.hit_test_power(&event) {
            self.power_menu.open();
            self.system.set_power_menu_open(true);
            return true;
        }
        if let Some(id) = self.dock.hit_test(&event) {
            let is_open = self.registry.contains(&id);
            if self.dock.press(id, is_open, now) == DockPress::Toggle {
                self.toggle_app(id);
            }
            return true;
        }

        let viewport = self.viewport();
        let narrow = viewport.is_narrow();
        let plan = view::draw_plan(&self.registry, viewport, &self.gestures);
        // Topmost surface under the pointer wins; everything below is
        // obscured.
        for surface in plan.iter().rev() {
            if !view::rect_contains(surface.rect, mouse.column, mouse.row) {
                continue;
            }
            let id = surface.id;
            if !surface.fixed
                && let Some(edge) = view::resize_edge_at(surface.rect, mouse.column, mouse.row)
            {
                self.registry.focus(&id);
                self.gestures.begin_resize(
                    id,
                    edge,
                    Point {
                        x: surface.rect.x,
                        y: surface.rect.y,
                    },
                    Size {
                        width: surface.rect.width,
                        height: surface.rect.height,
                    },
                    mouse.column,
                    mouse.row,
                );
                return true;
            }
            match self
                .decorator
                .hit_test(surface.rect, mouse.column, mouse.row, !narrow)
            {
                HeaderAction::Minimize => {
                    self.registry.minimize(&id);
                    self.last_header_press = None;
                }
                HeaderAction::Maximize => {
                    self.registry.toggle_maximize(&id);
                    self.last_header_press = None;
                }
                HeaderAction::Close => {
                    self.registry.close(&id);
                    self.last_header_press = None;
                }
                HeaderAction::Drag => {
                    if !narrow
                        && let Some((prev_id, prev)) = self.last_header_press
                        && prev_id == id
                        && now.duration_since(prev) <= DOUBLE_PRESS_WINDOW
                    {
                        self.registry.toggle_maximize(&id);
                        self.last_header_press = None;
                        return true;
                    }
                    self.last_header_press = Some((id, now));
                    // A drag always raises the window, even if it never moves.
                    self.registry.focus(&id);
                    if !surface.fixed {
                        self.gestures.begin_drag(
                            id,
                            Point {
                                x: surface.rect.x,
                                y: surface.rect.y,
                            },
                            mouse.column,
                            mouse.row,
                        );
                    }
                }
                HeaderAction::None => {
                    self.registry.focus(&id);
                }
            }
            return true;
        }
        false
    }

    fn finish_gesture(&mut self) -> bool {
        match self.gestures.finish() {
            Some(GestureOutcome::Moved { id, x, y }) => {
                self.registry.set_position(&id, x, y);
                true
            }
            Some(GestureOutcome::Resized {
                id,
                x,
                y,
                width,
                height,
            }) => {
                let origin_moved = self
                    .registry
                    .get(&id)
                    .is_some_and(|w| w.position() != Point { x, y });
                self.registry.set_size(&id, width, height);
                if origin_moved {
                    self.registry.set_position(&id, x, y);
                }
                true
            }
            None => false,
        }
    }
}
