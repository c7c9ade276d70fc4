use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use term_desk::desktop::{Desktop, DesktopOptions};
use term_desk::drivers::ConsoleInputDriver;
use term_desk::session::{self, SessionError};
use term_desk::tracing_sub;
use term_desk::window::Viewport;

#[derive(Parser, Debug)]
#[command(
    name = "term-desk",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simulated desktop environment for terminal shells"
)]
struct Cli {
    /// Target frames per second for the render tick.
    #[arg(short = 'f', long = "fps", value_name = "FPS", default_value_t = 30.0)]
    fps: f64,

    /// Skip the boot splash.
    #[arg(long = "no-boot")]
    no_boot: bool,

    /// Start with the screen locked.
    #[arg(long = "locked")]
    locked: bool,

    /// Force the narrow-viewport layout regardless of terminal width.
    #[arg(long = "narrow")]
    narrow: bool,
}

fn main() -> Result<(), SessionError> {
    let cli = Cli::parse();
    if !(1.0..=240.0).contains(&cli.fps) {
        return Err(SessionError::InvalidOption(
            "fps must be between 1 and 240".to_string(),
        ));
    }
    tracing_sub::init_default();
    let poll_interval = Duration::from_secs_f64(1.0 / cli.fps);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (width, height) = terminal::size()?;
    let mut desktop = Desktop::new(
        Viewport::new(width, height),
        DesktopOptions {
            skip_boot: cli.no_boot,
            start_locked: cli.locked,
            force_narrow: cli.narrow,
        },
    );

    let result = session::run(
        &mut terminal,
        ConsoleInputDriver::new(),
        &mut desktop,
        poll_interval,
    );

    terminal::disable_raw_mode()?;
    execute!(
        io::stdout(),
        DisableMouseCapture,
        LeaveAlternateScreen,
        cursor::Show
    )?;

    result
}
