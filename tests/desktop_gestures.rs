//! Pointer-driven desktop flows: header buttons, drag/resize gestures,
//! the double-press maximize toggle, and the dock choreography.
//!
//! With a 120x36 viewport the default window rectangle is deterministic:
//! centered at (24, 8) with size 72x18, header row 8, right border
//! column 95, bottom row 25.

use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use term_desk::constants::{
    ICON_BOUNCE_DURATION, ICON_SETTLE_DURATION, ICON_ZOOM_DURATION,
};
use term_desk::desktop::{Desktop, DesktopOptions};
use term_desk::ui::UiFrame;
use term_desk::window::Viewport;

fn desktop() -> Desktop {
    Desktop::new(
        Viewport::new(120, 36),
        DesktopOptions {
            skip_boot: true,
            ..Default::default()
        },
    )
}

fn open_terminal(desk: &mut Desktop) {
    desk.handle_event(
        &Event::Key(KeyEvent::new(
            KeyCode::Char('t'),
            KeyModifiers::ALT | KeyModifiers::SHIFT,
        )),
        Instant::now(),
    );
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn press(desk: &mut Desktop, column: u16, row: u16, now: Instant) {
    desk.handle_event(
        &mouse(MouseEventKind::Down(MouseButton::Left), column, row),
        now,
    );
}

fn drag(desk: &mut Desktop, column: u16, row: u16, now: Instant) {
    desk.handle_event(
        &mouse(MouseEventKind::Drag(MouseButton::Left), column, row),
        now,
    );
}

fn release(desk: &mut Desktop, column: u16, row: u16, now: Instant) {
    desk.handle_event(
        &mouse(MouseEventKind::Up(MouseButton::Left), column, row),
        now,
    );
}

fn render(desk: &mut Desktop) -> Buffer {
    let area = Rect::new(0, 0, 120, 36);
    let mut buf = Buffer::empty(area);
    let mut ui = UiFrame::from_parts(area, &mut buf);
    desk.render(&mut ui, Instant::now());
    buf
}

#[test]
fn header_drag_commits_position_on_release() {
    let mut desk = desktop();
    open_terminal(&mut desk);
    let t = Instant::now();

    press(&mut desk, 30, 8, t);
    drag(&mut desk, 40, 12, t);
    // The registry is untouched until the pointer releases.
    let win = desk.registry().get(&"terminal").unwrap();
    assert_eq!((win.position().x, win.position().y), (24, 8));

    release(&mut desk, 40, 12, t);
    let win = desk.registry().get(&"terminal").unwrap();
    assert_eq!((win.position().x, win.position().y), (34, 12));
}

#[test]
fn header_press_raises_the_window_before_any_movement() {
    let mut desk = desktop();
    open_terminal(&mut desk);
    desk.handle_event(
        &Event::Key(KeyEvent::new(
            KeyCode::Char('b'),
            KeyModifiers::ALT | KeyModifiers::SHIFT,
        )),
        Instant::now(),
    );
    let browser_z = desk.registry().get(&"browser").unwrap().z_index();

    // Both windows share the default rect; the browser is on top. Drag it
    // aside, then press the terminal's now-exposed header.
    let t = Instant::now();
    press(&mut desk, 30, 8, t);
    drag(&mut desk, 30, 20, t);
    release(&mut desk, 30, 20, t);

    let t2 = t + Duration::from_secs(1);
    press(&mut desk, 30, 8, t2);
    let terminal = desk.registry().get(&"terminal").unwrap();
    assert!(terminal.z_index() > browser_z);
    assert_eq!(desk.registry().focused(), Some(&"terminal"));
}

#[test]
fn double_press_on_header_toggles_maximize() {
    let mut desk = desktop();
    open_terminal(&mut desk);
    let t = Instant::now();

    press(&mut desk, 30, 8, t);
    release(&mut desk, 30, 8, t);
    press(&mut desk, 30, 8, t + Duration::from_millis(120));

    assert!(desk.registry().get(&"terminal").unwrap().is_maximized());
}

#[test]
fn slow_second_press_does_not_maximize() {
    let mut desk = desktop();
    open_terminal(&mut desk);
    let t = Instant::now();

    press(&mut desk, 30, 8, t);
    release(&mut desk, 30, 8, t);
    press(&mut desk, 30, 8, t + Duration::from_millis(900));

    assert!(!desk.registry().get(&"terminal").unwrap().is_maximized());
}

#[test]
fn maximized_window_ignores_drag() {
    let mut desk = desktop();
    open_terminal(&mut desk);
    let t = Instant::now();
    press(&mut desk, 30, 8, t);
    release(&mut desk, 30, 8, t);
    press(&mut desk, 30, 8, t + Duration::from_millis(100));
    release(&mut desk, 30, 8, t + Duration::from_millis(100));
    assert!(desk.registry().get(&"terminal").unwrap().is_maximized());

    // The maximized surface spans the viewport below the top bar; its
    // header row is 1. Dragging it does nothing.
    let t2 = t + Duration::from_secs(2);
    press(&mut desk, 30, 1, t2);
    drag(&mut desk, 60, 20, t2);
    release(&mut desk, 60, 20, t2);

    let win = desk.registry().get(&"terminal").unwrap();
    assert!(win.is_maximized());
    assert_eq!((win.position().x, win.position().y), (24, 8));
}

#[test]
fn header_buttons_minimize_maximize_close() {
    let mut desk = desktop();
    open_terminal(&mut desk);
    let t = Instant::now();

    // Maximize button (right edge minus 4).
    press(&mut desk, 92, 8, t);
    assert!(desk.registry().get(&"terminal").unwrap().is_maximized());
    // The maximized header spans the full width; restore via its button.
    press(&mut desk, 116, 1, t + Duration::from_secs(1));
    assert!(!desk.registry().get(&"terminal").unwrap().is_maximized());

    // Minimize button.
    press(&mut desk, 90, 8, t + Duration::from_secs(2));
    assert!(desk.registry().get(&"terminal").unwrap().is_minimized());
    assert_eq!(desk.registry().focused(), None);

    // A minimized window has no surface; re-open and close it.
    open_terminal(&mut desk);
    press(&mut desk, 94, 8, t + Duration::from_secs(3));
    assert!(!desk.registry().contains(&"terminal"));
}

#[test]
fn right_edge_resize_commits_size_on_release() {
    let mut desk = desktop();
    open_terminal(&mut desk);
    let t = Instant::now();

    press(&mut desk, 95, 12, t);
    drag(&mut desk, 105, 12, t);
    release(&mut desk, 105, 12, t);

    let win = desk.registry().get(&"terminal").unwrap();
    assert_eq!((win.size().width, win.size().height), (82, 18));
    assert_eq!((win.position().x, win.position().y), (24, 8));
}

#[test]
fn bottom_left_resize_moves_origin_too() {
    let mut desk = desktop();
    open_terminal(&mut desk);
    let t = Instant::now();

    press(&mut desk, 24, 25, t);
    drag(&mut desk, 20, 28, t);
    release(&mut desk, 20, 28, t);

    let win = desk.registry().get(&"terminal").unwrap();
    assert_eq!((win.position().x, win.position().y), (20, 8));
    assert_eq!((win.size().width, win.size().height), (76, 21));
}

#[test]
fn body_press_focuses_the_topmost_window_under_the_pointer() {
    let mut desk = desktop();
    open_terminal(&mut desk);
    desk.handle_event(
        &Event::Key(KeyEvent::new(
            KeyCode::Char('b'),
            KeyModifiers::ALT | KeyModifiers::SHIFT,
        )),
        Instant::now(),
    );

    // Move the browser out of the way, then press the terminal's body.
    let t = Instant::now();
    press(&mut desk, 30, 8, t);
    drag(&mut desk, 30, 21, t);
    release(&mut desk, 30, 21, t);

    press(&mut desk, 30, 12, t + Duration::from_secs(1));
    assert_eq!(desk.registry().focused(), Some(&"terminal"));
    assert_eq!(
        desk.registry().active().map(|w| *w.id()),
        Some("terminal")
    );
}

#[test]
fn dock_press_plays_bounce_zoom_then_opens() {
    let mut desk = desktop();
    render(&mut desk);
    let icon = desk.dock().icon_rect("terminal").expect("dock icon rect");
    let t0 = Instant::now();

    press(&mut desk, icon.x, icon.y, t0);
    assert!(desk.registry().is_empty());

    desk.tick(t0 + ICON_BOUNCE_DURATION);
    assert!(desk.registry().is_empty());

    desk.tick(t0 + ICON_BOUNCE_DURATION + ICON_ZOOM_DURATION);
    assert!(desk.registry().contains(&"terminal"));
    assert_eq!(desk.registry().focused(), Some(&"terminal"));

    desk.tick(t0 + ICON_BOUNCE_DURATION + ICON_ZOOM_DURATION + ICON_SETTLE_DURATION);
    assert_eq!(desk.registry().len(), 1);
}

#[test]
fn dock_press_on_open_app_toggles_immediately() {
    let mut desk = desktop();
    open_terminal(&mut desk);
    render(&mut desk);
    let icon = desk.dock().icon_rect("terminal").expect("dock icon rect");

    press(&mut desk, icon.x, icon.y, Instant::now());
    assert!(desk.registry().get(&"terminal").unwrap().is_minimized());
}

#[test]
fn dock_hides_while_any_window_is_maximized() {
    let mut desk = desktop();
    open_terminal(&mut desk);
    let t = Instant::now();
    press(&mut desk, 92, 8, t);
    assert!(desk.registry().get(&"terminal").unwrap().is_maximized());

    render(&mut desk);
    assert!(desk.dock().icon_rect("terminal").is_none());
}

#[test]
fn narrow_viewport_disables_gestures_and_maximize_toggle() {
    let mut desk = Desktop::new(
        Viewport::new(120, 36),
        DesktopOptions {
            skip_boot: true,
            force_narrow: true,
            ..Default::default()
        },
    );
    open_terminal(&mut desk);
    assert!(desk.viewport().is_narrow());

    // Surfaces render maximized even though the flag is off.
    let t = Instant::now();
    press(&mut desk, 30, 1, t);
    drag(&mut desk, 60, 20, t);
    release(&mut desk, 60, 20, t);
    let win = desk.registry().get(&"terminal").unwrap();
    assert!(!win.is_maximized());
    assert_eq!((win.position().x, win.position().y), (24, 8));

    // Double press must not toggle maximize on narrow viewports.
    press(&mut desk, 30, 1, t + Duration::from_millis(50));
    press(&mut desk, 30, 1, t + Duration::from_millis(100));
    assert!(!desk.registry().get(&"terminal").unwrap().is_maximized());
}
