use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::Level;

/// Where the log sink lives. A raw-mode TUI owns stdout/stderr, so logs
/// go to a file; `TERM_DESK_LOG` overrides the default temp path.
fn default_log_path() -> PathBuf {
    std::env::var_os("TERM_DESK_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("term-desk.log"))
}

/// Initialize the global tracing subscriber against the default log file.
/// Safe to call multiple times; subsequent calls are no-ops. If the file
/// cannot be opened, logging is silently disabled rather than corrupting
/// the terminal.
pub fn init_default() {
    let _ = init_with_file(&default_log_path());
}

pub fn init_with_file(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_with_file_creates_the_sink() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.log");
        init_with_file(&path).expect("init");
        tracing::debug!("sink smoke test");
        assert!(path.exists());
    }
}
