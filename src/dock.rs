//! The dock: one entry per catalog app, a running indicator for open
//! apps, and the press choreography (bounce, zoom, then toggle).
//!
//! The animation is a tiny explicit state machine driven by deadline
//! instants on the tick loop. It is deliberately non-reentrant: one cycle
//! per icon at most, and a press while a cycle runs fires an immediate
//! toggle and cancels the pending one, so a toggle can never fire twice
//! for a single intent.

use std::time::Instant;

use crossterm::event::{Event, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::apps::{AppId, AppSpec};
use crate::constants::{ICON_BOUNCE_DURATION, ICON_SETTLE_DURATION, ICON_ZOOM_DURATION};
use crate::theme;
use crate::ui::{UiFrame, safe_set_string};
use crate::window::view::rect_contains;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Bouncing,
    Zooming,
    Settling,
}

#[derive(Debug, Clone, Copy)]
struct IconAnimation {
    phase: AnimationPhase,
    deadline: Instant,
}

#[derive(Debug)]
struct DockEntry {
    app: &'static AppSpec,
    animation: Option<IconAnimation>,
    hit: Option<Rect>,
}

/// What a dock press resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockPress {
    /// Toggle the app right away (already open, or a cycle was cancelled).
    Toggle,
    /// The bounce/zoom cycle started; the toggle fires from `tick`.
    Animating,
}

#[derive(Debug)]
pub struct Dock {
    entries: Vec<DockEntry>,
}

impl Dock {
    pub fn new(catalog: &'static [AppSpec]) -> Self {
        Self {
            entries: catalog
                .iter()
                .map(|app| DockEntry {
                    app,
                    animation: None,
                    hit: None,
                })
                .collect(),
        }
    }

    pub fn begin_frame(&mut self) {
        for entry in &mut self.entries {
            entry.hit = None;
        }
    }

    /// Resolve a press on `id`. `is_open` comes from the registry; an
    /// open app skips the launch animation entirely.
    pub fn press(&mut self, id: AppId, is_open: bool, now: Instant) -> DockPress {
        let Some(entry) = self.entries.iter_mut().find(|e| e.app.id == id) else {
            return DockPress::Toggle;
        };
        if entry.animation.take().is_some() {
            // Mid-cycle press: the pending toggle is cancelled above and
            // replaced by this immediate one.
            return DockPress::Toggle;
        }
        if is_open {
            return DockPress::Toggle;
        }
        entry.animation = Some(IconAnimation {
            phase: AnimationPhase::Bouncing,
            deadline: now + ICON_BOUNCE_DURATION,
        });
        DockPress::Animating
    }

    /// Advance animations; returns ids whose cycle completed this tick and
    /// whose toggle should fire now.
    pub fn tick(&mut self, now: Instant) -> Vec<AppId> {
        let mut due = Vec::new();
        for entry in &mut self.entries {
            let Some(anim) = entry.animation else {
                continue;
            };
            if now < anim.deadline {
                continue;
            }
            entry.animation = match anim.phase {
                AnimationPhase::Bouncing => Some(IconAnimation {
                    phase: AnimationPhase::Zooming,
                    deadline: anim.deadline + ICON_ZOOM_DURATION,
                }),
                AnimationPhase::Zooming => {
                    due.push(entry.app.id);
                    Some(IconAnimation {
                        phase: AnimationPhase::Settling,
                        deadline: anim.deadline + ICON_SETTLE_DURATION,
                    })
                }
                AnimationPhase::Settling => None,
            };
        }
        due
    }

    pub fn animation_phase(&self, id: AppId) -> Option<AnimationPhase> {
        self.entries
            .iter()
            .find(|e| e.app.id == id)
            .and_then(|e| e.animation.map(|a| a.phase))
    }

    pub fn hit_test(&self, event: &Event) -> Option<AppId> {
        let Event::Mouse(mouse) = event else {
            return None;
        };
        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return None;
        }
        self.entries
            .iter()
            .find(|e| {
                e.hit
                    .is_some_and(|rect| rect_contains(rect, mouse.column, mouse.row))
            })
            .map(|e| e.app.id)
    }

    /// Hit rectangle of an icon as of the last render, if it was drawn.
    pub fn icon_rect(&self, id: AppId) -> Option<Rect> {
        self.entries.iter().find(|e| e.app.id == id).and_then(|e| e.hit)
    }

    /// Draw the dock across `area` (icon row plus indicator row).
    /// `is_open` reports whether an app currently has a registry entry.
    pub fn render<F>(&mut self, frame: &mut UiFrame<'_>, area: Rect, is_open: F)
    where
        F: Fn(AppId) -> bool,
    {
        if area.width == 0 || area.height == 0 {
            return;
        }
        frame.fill(
            area,
            Style::default().bg(theme::dock_bg()).fg(theme::dock_fg()),
        );
        let bounds = frame.area();
        let buffer = frame.buffer_mut();
        let total: u16 = self
            .entries
            .iter()
            .map(|e| e.app.icon.chars().count() as u16 + 3)
            .sum();
        let mut x = area.x + area.width.saturating_sub(total) / 2;
        let icon_y = area.y;
        let indicator_y = area.y.saturating_add(1);
        for entry in &mut self.entries {
            let chunk = format!(" {} ", entry.app.icon);
            let width = chunk.chars().count() as u16;
            let style = match entry.animation.map(|a| a.phase) {
                Some(AnimationPhase::Bouncing) => Style::default()
                    .bg(theme::dock_bg())
                    .fg(theme::dock_bounce_fg())
                    .add_modifier(Modifier::BOLD),
                Some(AnimationPhase::Zooming) => Style::default()
                    .bg(theme::dock_bg())
                    .fg(theme::dock_zoom_fg())
                    .add_modifier(Modifier::REVERSED),
                Some(AnimationPhase::Settling) | None => {
                    Style::default().bg(theme::dock_bg()).fg(theme::dock_fg())
                }
            };
            safe_set_string(buffer, area.intersection(bounds), x, icon_y, &chunk, style);
            if is_open(entry.app.id) && indicator_y < area.y + area.height {
                let dot_x = x + width / 2;
                safe_set_string(
                    buffer,
                    area.intersection(bounds),
                    dot_x,
                    indicator_y,
                    "•",
                    Style::default()
                        .bg(theme::dock_bg())
                        .fg(theme::dock_running_fg()),
                );
            }
            entry.hit = Some(Rect {
                x,
                y: icon_y,
                width,
                height: area.height.min(2),
            });
            x = x.saturating_add(width + 1);
        }
    }
}
