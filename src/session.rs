//! Ties the desktop to a terminal: one event loop that dispatches input,
//! advances time-based state on each poll tick, and redraws.

use std::io;
use std::time::{Duration, Instant};

use ratatui::Terminal;
use ratatui::backend::Backend;
use thiserror::Error;

use crate::desktop::Desktop;
use crate::drivers::InputDriver;
use crate::event_loop::{ControlFlow, EventLoop};
use crate::ui::UiFrame;

/// Errors at the session edge. The registry itself is total and never
/// produces errors; only terminal setup, input, and drawing can fail.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid option: {0}")]
    InvalidOption(String),
}

pub fn run<B, D>(
    terminal: &mut Terminal<B>,
    driver: D,
    desktop: &mut Desktop,
    poll_interval: Duration,
) -> Result<(), SessionError>
where
    B: Backend,
    D: InputDriver,
{
    let mut event_loop = EventLoop::new(driver, poll_interval);
    event_loop.run(|_driver, event| {
        let now = Instant::now();
        match event {
            Some(event) => {
                desktop.handle_event(&event, now);
            }
            None => {
                desktop.tick(now);
                terminal
                    .draw(|frame| {
                        let mut ui = UiFrame::new(frame);
                        desktop.render(&mut ui, now);
                    })
                    .map_err(|err| io::Error::other(err.to_string()))?;
            }
        }
        if desktop.quit_requested() {
            Ok(ControlFlow::Quit)
        } else {
            Ok(ControlFlow::Continue)
        }
    })?;
    Ok(())
}
