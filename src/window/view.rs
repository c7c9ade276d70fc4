//! Geometry adapter between the registry and the screen.
//!
//! Translates registry state into concrete cell rectangles (including the
//! maximized and narrow-viewport overrides) and pointer gestures into the
//! registry calls they stand for. Gesture previews live here so a drag can
//! move a window on screen without mutating the registry until release.

use ratatui::layout::Rect;

use super::{Point, Size, Window, WindowRegistry};
use crate::constants::{
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, NARROW_VIEWPORT_COLS, TOP_BAR_HEIGHT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Below this width every window is forced to the maximized rectangle
    /// and drag/resize gestures are disabled. A responsive override, not a
    /// state mutation: the registry flags are left alone.
    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_VIEWPORT_COLS
    }

    /// Full viewport minus the top bar. Maximized windows cover the dock.
    pub fn maximized_rect(&self) -> Rect {
        Rect {
            x: 0,
            y: TOP_BAR_HEIGHT,
            width: self.width,
            height: self.height.saturating_sub(TOP_BAR_HEIGHT),
        }
    }
}

/// The rectangle a window occupies on screen this frame.
pub fn effective_rect<I, C>(window: &Window<I, C>, viewport: Viewport) -> Rect {
    if window.is_maximized() || viewport.is_narrow() {
        viewport.maximized_rect()
    } else {
        Rect {
            x: window.position().x,
            y: window.position().y,
            width: window.size().width,
            height: window.size().height,
        }
    }
}

/// One entry of the back-to-front draw plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSurface<I> {
    pub id: I,
    pub rect: Rect,
    pub z_index: u64,
    pub focused: bool,
    /// The registry's maximized flag (drives the restore glyph).
    pub maximized: bool,
    /// True when the rectangle is not adjustable: maximized or narrow
    /// viewport. Gates drag, resize, and the double-press toggle.
    pub fixed: bool,
}

/// Visible windows in ascending z-order with effective rectangles and any
/// in-flight gesture preview applied.
pub fn draw_plan<I, C>(
    registry: &WindowRegistry<I, C>,
    viewport: Viewport,
    gestures: &GestureTracker<I>,
) -> Vec<WindowSurface<I>>
where
    I: Clone + Eq + std::fmt::Debug,
{
    let narrow = viewport.is_narrow();
    registry
        .visible_stack()
        .into_iter()
        .map(|window| {
            let fixed = window.is_maximized() || narrow;
            let mut rect = effective_rect(window, viewport);
            if !fixed {
                rect = gestures.preview_rect(window.id(), rect);
            }
            WindowSurface {
                id: window.id().clone(),
                rect,
                z_index: window.z_index(),
                focused: registry.focused() == Some(window.id()),
                maximized: window.is_maximized(),
                fixed,
            }
        })
        .collect()
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
    Bottom,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    fn moves_left(self) -> bool {
        matches!(self, ResizeEdge::Left | ResizeEdge::BottomLeft)
    }

    fn moves_right(self) -> bool {
        matches!(self, ResizeEdge::Right | ResizeEdge::BottomRight)
    }

    fn moves_bottom(self) -> bool {
        matches!(
            self,
            ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight
        )
    }
}

/// Which resize handle, if any, sits at the given cell of a window
/// rectangle. The top row belongs to the title bar, so resizing is
/// offered on the side and bottom borders only; the left handles are the
/// ones that move the origin.
pub fn resize_edge_at(rect: Rect, column: u16, row: u16) -> Option<ResizeEdge> {
    if !rect_contains(rect, column, row) || rect.width < 2 || rect.height < 2 {
        return None;
    }
    if row == rect.y {
        return None;
    }
    let right = rect.x + rect.width - 1;
    let bottom = rect.y + rect.height - 1;
    let on_left = column == rect.x;
    let on_right = column == right;
    let on_bottom = row == bottom;
    match (on_left, on_right, on_bottom) {
        (true, _, true) => Some(ResizeEdge::BottomLeft),
        (_, true, true) => Some(ResizeEdge::BottomRight),
        (_, _, true) => Some(ResizeEdge::Bottom),
        (true, _, false) => Some(ResizeEdge::Left),
        (_, true, false) => Some(ResizeEdge::Right),
        _ => None,
    }
}

#[derive(Debug, Clone)]
enum Gesture<I> {
    Drag {
        id: I,
        origin: Point,
        start: (u16, u16),
    },
    Resize {
        id: I,
        edge: ResizeEdge,
        origin: Point,
        size: Size,
        start: (u16, u16),
    },
}

/// What a finished gesture asks the registry to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome<I> {
    Moved { id: I, x: u16, y: u16 },
    Resized { id: I, x: u16, y: u16, width: u16, height: u16 },
}

/// Tracks at most one in-flight pointer gesture.
///
/// The tracker never touches the registry itself: `preview_rect` feeds the
/// draw plan while the pointer moves, and `finish` hands back the final
/// geometry for the caller to commit via `set_position`/`set_size`.
#[derive(Debug)]
pub struct GestureTracker<I> {
    gesture: Option<Gesture<I>>,
    cursor: (u16, u16),
}

impl<I: Clone + Eq> Default for GestureTracker<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Clone + Eq> GestureTracker<I> {
    pub fn new() -> Self {
        Self {
            gesture: None,
            cursor: (0, 0),
        }
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn begin_drag(&mut self, id: I, origin: Point, column: u16, row: u16) {
        self.cursor = (column, row);
        self.gesture = Some(Gesture::Drag {
            id,
            origin,
            start: (column, row),
        });
    }

    pub fn begin_resize(
        &mut self,
        id: I,
        edge: ResizeEdge,
        origin: Point,
        size: Size,
        column: u16,
        row: u16,
    ) {
        self.cursor = (column, row);
        self.gesture = Some(Gesture::Resize {
            id,
            edge,
            origin,
            size,
            start: (column, row),
        });
    }

    pub fn update(&mut self, column: u16, row: u16) {
        if self.gesture.is_some() {
            self.cursor = (column, row);
        }
    }

    pub fn cancel(&mut self) {
        self.gesture = None;
    }

    /// Complete the gesture and return the registry call it stands for.
    pub fn finish(&mut self) -> Option<GestureOutcome<I>> {
        let gesture = self.gesture.take()?;
        match gesture {
            Gesture::Drag { id, origin, start } => {
                let (x, y) = dragged_origin(origin, start, self.cursor);
                Some(GestureOutcome::Moved { id, x, y })
            }
            Gesture::Resize {
                id,
                edge,
                origin,
                size,
                start,
            } => {
                let (point, resized) = resized_geometry(origin, size, edge, start, self.cursor);
                Some(GestureOutcome::Resized {
                    id,
                    x: point.x,
                    y: point.y,
                    width: resized.width,
                    height: resized.height,
                })
            }
        }
    }

    /// The rectangle `id` should render at while its gesture is in flight.
    /// Windows without an active gesture pass through unchanged.
    pub fn preview_rect(&self, id: &I, base: Rect) -> Rect {
        match &self.gesture {
            Some(Gesture::Drag {
                id: active,
                origin,
                start,
            }) if active == id => {
                let (x, y) = dragged_origin(*origin, *start, self.cursor);
                Rect {
                    x,
                    y,
                    ..base
                }
            }
            Some(Gesture::Resize {
                id: active,
                edge,
                origin,
                size,
                start,
            }) if active == id => {
                let (point, resized) =
                    resized_geometry(*origin, *size, *edge, *start, self.cursor);
                Rect {
                    x: point.x,
                    y: point.y,
                    width: resized.width,
                    height: resized.height,
                }
            }
            _ => base,
        }
    }
}

fn dragged_origin(origin: Point, start: (u16, u16), cursor: (u16, u16)) -> (u16, u16) {
    let dx = i32::from(cursor.0) - i32::from(start.0);
    let dy = i32::from(cursor.1) - i32::from(start.1);
    let x = (i32::from(origin.x) + dx).clamp(0, i32::from(u16::MAX)) as u16;
    // Keep the header row below the top bar so the window stays grabbable.
    let y = (i32::from(origin.y) + dy).clamp(i32::from(TOP_BAR_HEIGHT), i32::from(u16::MAX)) as u16;
    (x, y)
}

fn resized_geometry(
    origin: Point,
    size: Size,
    edge: ResizeEdge,
    start: (u16, u16),
    cursor: (u16, u16),
) -> (Point, Size) {
    let dx = i32::from(cursor.0) - i32::from(start.0);
    let dy = i32::from(cursor.1) - i32::from(start.1);
    let mut x = i32::from(origin.x);
    let mut y = i32::from(origin.y);
    let mut width = i32::from(size.width);
    let mut height = i32::from(size.height);

    if edge.moves_right() {
        width += dx;
    }
    if edge.moves_bottom() {
        height += dy;
    }
    if edge.moves_left() {
        x += dx;
        width -= dx;
    }

    // Enforce the floor while keeping the stationary edge fixed.
    let min_width = i32::from(MIN_WINDOW_WIDTH);
    let min_height = i32::from(MIN_WINDOW_HEIGHT);
    if width < min_width {
        if edge.moves_left() {
            x -= min_width - width;
        }
        width = min_width;
    }
    if height < min_height {
        height = min_height;
    }
    if x < 0 {
        width += x;
        x = 0;
        width = width.max(min_width);
    }
    if y < i32::from(TOP_BAR_HEIGHT) {
        y = i32::from(TOP_BAR_HEIGHT);
    }

    (
        Point {
            x: x as u16,
            y: y as u16,
        },
        Size {
            width: width as u16,
            height: height as u16,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewport_forces_maximized_rect() {
        let mut reg: WindowRegistry<&str, ()> = WindowRegistry::new(Size {
            width: 60,
            height: 20,
        });
        reg.open("terminal", "Terminal", ">", ());
        let viewport = Viewport::new(60, 20);
        let window = reg.get(&"terminal").unwrap();
        assert!(!window.is_maximized());
        assert_eq!(effective_rect(window, viewport), viewport.maximized_rect());
    }

    #[test]
    fn draw_plan_ascends_by_z() {
        let mut reg: WindowRegistry<&str, ()> = WindowRegistry::new(Size {
            width: 120,
            height: 36,
        });
        reg.open("a", "A", "a", ());
        reg.open("b", "B", "b", ());
        reg.focus(&"a");
        let plan = draw_plan(&reg, Viewport::new(120, 36), &GestureTracker::new());
        let ids: Vec<&str> = plan.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert!(plan[1].focused);
        assert!(plan[0].z_index < plan[1].z_index);
    }

    #[test]
    fn drag_preview_moves_without_registry_writes() {
        let origin = Point { x: 10, y: 5 };
        let mut gestures: GestureTracker<&str> = GestureTracker::new();
        gestures.begin_drag("a", origin, 12, 6);
        gestures.update(20, 9);
        let base = Rect {
            x: 10,
            y: 5,
            width: 40,
            height: 12,
        };
        let preview = gestures.preview_rect(&"a", base);
        assert_eq!((preview.x, preview.y), (18, 8));
        // Other ids pass through untouched.
        assert_eq!(gestures.preview_rect(&"b", base), base);
    }

    #[test]
    fn drag_cannot_escape_above_top_bar() {
        let mut gestures: GestureTracker<&str> = GestureTracker::new();
        gestures.begin_drag("a", Point { x: 4, y: 2 }, 5, 3);
        gestures.update(5, 0);
        match gestures.finish().unwrap() {
            GestureOutcome::Moved { y, .. } => assert_eq!(y, TOP_BAR_HEIGHT),
            other => panic!("expected move, got {other:?}"),
        }
    }

    #[test]
    fn left_resize_moves_origin_and_respects_floor() {
        let mut gestures: GestureTracker<&str> = GestureTracker::new();
        let origin = Point { x: 20, y: 5 };
        let size = Size {
            width: 50,
            height: 14,
        };
        gestures.begin_resize("a", ResizeEdge::Left, origin, size, 20, 8);
        // Push far right: width would drop below the floor.
        gestures.update(70, 8);
        match gestures.finish().unwrap() {
            GestureOutcome::Resized { x, width, height, .. } => {
                assert_eq!(width, MIN_WINDOW_WIDTH);
                // The right edge (x + width) stays where it was.
                assert_eq!(x + width, 20 + 50);
                assert_eq!(height, 14);
            }
            other => panic!("expected resize, got {other:?}"),
        }
    }

    #[test]
    fn bottom_right_resize_grows_both_axes() {
        let mut gestures: GestureTracker<&str> = GestureTracker::new();
        gestures.begin_resize(
            "a",
            ResizeEdge::BottomRight,
            Point { x: 5, y: 3 },
            Size {
                width: 44,
                height: 12,
            },
            48,
            14,
        );
        gestures.update(58, 20);
        match gestures.finish().unwrap() {
            GestureOutcome::Resized { x, y, width, height, .. } => {
                assert_eq!((x, y), (5, 3));
                assert_eq!((width, height), (54, 18));
            }
            other => panic!("expected resize, got {other:?}"),
        }
    }

    #[test]
    fn resize_edges_map_to_window_borders() {
        let rect = Rect {
            x: 10,
            y: 5,
            width: 40,
            height: 12,
        };
        assert_eq!(resize_edge_at(rect, 10, 8), Some(ResizeEdge::Left));
        assert_eq!(resize_edge_at(rect, 49, 8), Some(ResizeEdge::Right));
        assert_eq!(resize_edge_at(rect, 30, 16), Some(ResizeEdge::Bottom));
        assert_eq!(resize_edge_at(rect, 10, 16), Some(ResizeEdge::BottomLeft));
        assert_eq!(resize_edge_at(rect, 49, 16), Some(ResizeEdge::BottomRight));
        // Header row is for dragging, not resizing.
        assert_eq!(resize_edge_at(rect, 10, 5), None);
        // Interior cells are content.
        assert_eq!(resize_edge_at(rect, 30, 8), None);
    }
}
