use std::fmt;

use super::{Point, Size, Window};
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, DOCK_HEIGHT, TOP_BAR_HEIGHT, Z_INDEX_BASE,
};

/// Sole source of truth for which windows exist and their state.
///
/// Every operation is a total function: unknown ids degrade to no-ops so
/// callers never branch on failure, and each call leaves the registry in a
/// fully consistent state. The registry owns no rendering concerns; the
/// content payload `C` is opaque and never inspected.
///
/// Focus is tracked separately from the z-order. The z-index counter is
/// monotonically increasing for the lifetime of the registry, so two
/// windows never share a z-index and stacking comparisons stay valid even
/// across closes.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRegistry<I, C> {
    windows: Vec<Window<I, C>>,
    focused: Option<I>,
    z_counter: u64,
    viewport: Size,
}

impl<I, C> WindowRegistry<I, C>
where
    I: Clone + Eq + fmt::Debug,
{
    /// `viewport` is the full terminal size; default placement centers new
    /// windows in the strip below the top bar and above the dock.
    pub fn new(viewport: Size) -> Self {
        Self {
            windows: Vec::new(),
            focused: None,
            z_counter: Z_INDEX_BASE,
            viewport,
        }
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    fn next_z(&mut self) -> u64 {
        self.z_counter = self.z_counter.saturating_add(1);
        self.z_counter
    }

    fn index_of(&self, id: &I) -> Option<usize> {
        self.windows.iter().position(|w| w.id == *id)
    }

    fn default_placement(&self) -> (Point, Size) {
        let size = Size {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        };
        let avail_h = self
            .viewport
            .height
            .saturating_sub(TOP_BAR_HEIGHT)
            .saturating_sub(DOCK_HEIGHT);
        let x = self.viewport.width.saturating_sub(size.width) / 2;
        let y = TOP_BAR_HEIGHT.saturating_add(avail_h.saturating_sub(size.height) / 2);
        (Point { x, y }, size)
    }

    /// Open a window, or bring an already-open one back to the front.
    ///
    /// Re-opening an existing id never duplicates the entry and leaves its
    /// geometry and content untouched; it only clears the minimized flag,
    /// bumps the z-index, and takes focus.
    pub fn open(&mut self, id: I, title: impl Into<String>, icon: impl Into<String>, content: C) {
        if let Some(idx) = self.index_of(&id) {
            let z = self.next_z();
            let win = &mut self.windows[idx];
            win.minimized = false;
            win.z_index = z;
            self.focused = Some(id.clone());
            tracing::debug!(window_id = ?id, z_index = z, "reactivated window");
            return;
        }
        let z = self.next_z();
        let (position, size) = self.default_placement();
        tracing::debug!(window_id = ?id, z_index = z, "opened window");
        self.windows.push(Window {
            id: id.clone(),
            title: title.into(),
            icon: icon.into(),
            content,
            minimized: false,
            maximized: false,
            z_index: z,
            position,
            size,
            saved_position: None,
            saved_size: None,
        });
        self.focused = Some(id);
    }

    /// Remove the window entirely. If it held focus, focus becomes unset;
    /// the next-highest window is deliberately not promoted.
    pub fn close(&mut self, id: &I) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        tracing::debug!(window_id = ?id, "closed window");
        self.windows.remove(idx);
        if self.focused.as_ref() == Some(id) {
            self.focused = None;
        }
    }

    /// Hide the window without touching its geometry or stacking position,
    /// so un-minimizing restores it in place rather than always-on-top.
    pub fn minimize(&mut self, id: &I) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        self.windows[idx].minimized = true;
        if self.focused.as_ref() == Some(id) {
            self.focused = None;
        }
    }

    /// Dock/launcher icon behavior: a press on the frontmost visible app
    /// hides it, any other press opens or re-activates it.
    pub fn toggle(&mut self, id: I, title: impl Into<String>, icon: impl Into<String>, content: C) {
        let frontmost_visible = self.focused.as_ref() == Some(&id)
            && self.get(&id).is_some_and(|w| !w.minimized);
        if frontmost_visible {
            self.minimize(&id);
        } else {
            self.open(id, title, icon, content);
        }
    }

    /// Toggle maximize. Entering the maximized state snapshots the normal
    /// geometry; leaving it restores the snapshot and clears it so no
    /// stale snapshot survives. Both directions raise and focus.
    pub fn toggle_maximize(&mut self, id: &I) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        let z = self.next_z();
        let win = &mut self.windows[idx];
        if win.maximized {
            win.position = win.saved_position.take().unwrap_or(win.position);
            win.size = win.saved_size.take().unwrap_or(win.size);
            win.maximized = false;
        } else {
            win.saved_position = Some(win.position);
            win.saved_size = Some(win.size);
            win.maximized = true;
        }
        win.z_index = z;
        self.focused = Some(win.id.clone());
    }

    /// Raise the window to the top of the stack and give it focus. Also
    /// clears the minimized flag: bringing a hidden window forward
    /// implicitly restores its visibility.
    pub fn focus(&mut self, id: &I) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        let z = self.next_z();
        let win = &mut self.windows[idx];
        win.minimized = false;
        win.z_index = z;
        self.focused = Some(win.id.clone());
    }

    /// Overwrite the normal position. Rejected while maximized: maximized
    /// windows have no freely settable geometry, and the view should not
    /// have issued the call in the first place.
    pub fn set_position(&mut self, id: &I, x: u16, y: u16) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        let win = &mut self.windows[idx];
        if win.maximized {
            return;
        }
        win.position = Point { x, y };
    }

    /// Overwrite the normal size. Same maximized guard as `set_position`.
    pub fn set_size(&mut self, id: &I, width: u16, height: u16) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        let win = &mut self.windows[idx];
        if win.maximized {
            return;
        }
        win.size = Size { width, height };
    }

    pub fn get(&self, id: &I) -> Option<&Window<I, C>> {
        self.windows.iter().find(|w| w.id == *id)
    }

    pub fn contains(&self, id: &I) -> bool {
        self.index_of(id).is_some()
    }

    /// All open windows in insertion order.
    pub fn windows(&self) -> &[Window<I, C>] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// The advisory focus reference. May be unset even while windows are
    /// open (e.g. right after the focused window closed).
    pub fn focused(&self) -> Option<&I> {
        self.focused.as_ref()
    }

    /// The entry with the highest z-index among all open windows,
    /// minimized ones included. This is the authoritative "active window"
    /// used by the close-active shortcut, independent of the focus flag.
    pub fn active(&self) -> Option<&Window<I, C>> {
        self.windows.iter().max_by_key(|w| w.z_index)
    }

    pub fn any_maximized(&self) -> bool {
        self.windows.iter().any(|w| w.maximized)
    }

    /// Non-minimized windows in ascending z-order, ready to draw back to
    /// front (the last entry paints on top and receives pointer input).
    pub fn visible_stack(&self) -> Vec<&Window<I, C>> {
        let mut stack: Vec<&Window<I, C>> =
            self.windows.iter().filter(|w| !w.minimized).collect();
        stack.sort_by_key(|w| w.z_index);
        stack
    }
}
