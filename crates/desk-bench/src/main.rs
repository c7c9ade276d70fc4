//! Headless throughput benchmark: hammers the window registry with a
//! deterministic operation mix, then renders full desktop frames into an
//! offscreen buffer. No terminal is touched, so runs are repeatable and
//! CI-friendly.

use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use term_desk::desktop::{Desktop, DesktopOptions};
use term_desk::ui::UiFrame;
use term_desk::window::{Size, Viewport, WindowRegistry};

#[derive(Parser, Debug)]
#[command(
    name = "desk-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Registry and render throughput benchmark for term-desk"
)]
struct BenchCli {
    /// Registry operations to execute.
    #[arg(short = 'o', long = "ops", value_name = "COUNT", default_value_t = 200_000)]
    ops: u64,

    /// Distinct window ids to churn through.
    #[arg(short = 'w', long = "windows", value_name = "COUNT", default_value_t = 16)]
    windows: u32,

    /// Frames to render in the draw phase.
    #[arg(short = 'n', long = "frames", value_name = "COUNT", default_value_t = 2_000)]
    frames: u64,
}

impl BenchCli {
    fn validate(&self) -> Result<(), String> {
        if self.ops == 0 || self.frames == 0 {
            return Err("ops and frames must be positive".to_string());
        }
        if !(1..=256u32).contains(&self.windows) {
            return Err("windows must be between 1 and 256".to_string());
        }
        Ok(())
    }
}

fn main() -> io::Result<()> {
    let cli = BenchCli::parse();
    cli.validate()
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    let registry_stats = run_registry_phase(&cli);
    let render_stats = run_render_phase(&cli);

    println!("{registry_stats}");
    println!("{render_stats}");
    Ok(())
}

struct PhaseStats {
    label: &'static str,
    count: u64,
    elapsed: Duration,
}

impl std::fmt::Display for PhaseStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secs = self.elapsed.as_secs_f64();
        let rate = if secs > 0.0 {
            self.count as f64 / secs
        } else {
            0.0
        };
        write!(
            f,
            "{}: {} in {:.3}s ({:.0}/s)",
            self.label, self.count, secs, rate
        )
    }
}

/// Deterministic mix of registry operations across `windows` ids. The mix
/// leans on focus/open the way a real session does, with periodic
/// minimize/maximize/geometry churn and occasional closes.
fn run_registry_phase(cli: &BenchCli) -> PhaseStats {
    let mut registry: WindowRegistry<u32, ()> = WindowRegistry::new(Size {
        width: 240,
        height: 72,
    });
    let start = Instant::now();
    for op in 0..cli.ops {
        let id = (op % u64::from(cli.windows)) as u32;
        match op % 11 {
            0 | 1 | 2 => registry.open(id, format!("window {id}"), "·", ()),
            3 | 4 => registry.focus(&id),
            5 => registry.minimize(&id),
            6 => registry.toggle_maximize(&id),
            7 => registry.set_position(&id, (op % 100) as u16, (op % 40) as u16),
            8 => registry.set_size(&id, 40 + (op % 60) as u16, 10 + (op % 20) as u16),
            9 => registry.toggle(id, format!("window {id}"), "·", ()),
            _ => registry.close(&id),
        }
        let _ = registry.active();
    }
    PhaseStats {
        label: "registry ops",
        count: cli.ops,
        elapsed: start.elapsed(),
    }
}

/// Render the full desktop (several windows open, one mid-stack
/// minimized) into an offscreen buffer.
fn run_render_phase(cli: &BenchCli) -> PhaseStats {
    let area = Rect::new(0, 0, 160, 48);
    let mut desktop = Desktop::new(
        Viewport::new(area.width, area.height),
        DesktopOptions {
            skip_boot: true,
            ..Default::default()
        },
    );
    for c in ['t', 'b', 'f'] {
        desktop.handle_event(
            &Event::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::ALT | KeyModifiers::SHIFT,
            )),
            Instant::now(),
        );
    }

    let mut buffer = Buffer::empty(area);
    let start = Instant::now();
    for _ in 0..cli.frames {
        buffer.reset();
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        desktop.render(&mut frame, Instant::now());
    }
    PhaseStats {
        label: "frames",
        count: cli.frames,
        elapsed: start.elapsed(),
    }
}
