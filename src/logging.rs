//! File logging. The terminal belongs to the UI, so nothing goes to stdout.

use std::io;
use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

pub const LOG_FILE: &str = "site.log";

/// Default filter directive for a `-v` count, used when `RUST_LOG` is unset
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Opens `dir/site.log` for appending. Fails instead of panicking when the
/// directory or file cannot be created.
fn file_appender(dir: &Path) -> io::Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// Installs the global subscriber writing to `dir/site.log`.
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init(dir: &Path, verbose: u8) -> io::Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let (non_blocking, guard) = NonBlocking::new(file_appender(dir)?);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    Registry::default().with(env_filter).with(file_layer).init();
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "info");
        assert_eq!(default_directive(1), "debug");
        assert_eq!(default_directive(5), "trace");
    }

    #[test]
    fn test_file_appender_creates_log() {
        let dir = tempfile::tempdir().unwrap();
        file_appender(dir.path()).unwrap();
        assert!(dir.path().join(LOG_FILE).exists());
    }

    #[test]
    fn test_file_appender_unusable_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        assert!(file_appender(&blocker.join("logs")).is_err());
    }
}
