pub mod decorator;
pub mod registry;
pub mod view;

pub use decorator::{HeaderAction, WindowDecorator};
pub use registry::WindowRegistry;
pub use view::{GestureOutcome, GestureTracker, ResizeEdge, Viewport, WindowSurface};

/// Top-left corner of a window on the cell grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

/// One open application window tracked by the registry.
///
/// `position`/`size` always hold the window's normal geometry; while the
/// window is maximized the effective rectangle is derived by the view and
/// the normal geometry is preserved untouched. The registry is the only
/// writer; everything else reads through the accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Window<I, C> {
    id: I,
    title: String,
    icon: String,
    content: C,
    minimized: bool,
    maximized: bool,
    z_index: u64,
    position: Point,
    size: Size,
    saved_position: Option<Point>,
    saved_size: Option<Size>,
}

impl<I, C> Window<I, C> {
    pub fn id(&self) -> &I {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn z_index(&self) -> u64 {
        self.z_index
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn saved_position(&self) -> Option<Point> {
        self.saved_position
    }

    pub fn saved_size(&self) -> Option<Size> {
        self.saved_size
    }
}
