//! Tracing subscriber setup

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{trace, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when neither `RUST_LOG` nor `--log` is given
pub const DEFAULT_FILTER: &str = "letreco=info";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Append to a file; used while the TUI owns the terminal
    File(PathBuf),
}

/// Pick the filter: `RUST_LOG` first, then `directive`, then the default
#[must_use]
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::options().create(true).append(true).open(path)
}

/// Opened log destination
struct Sink {
    /// Where lines actually go
    active: LogTarget,
    file: Option<File>,
    /// Why the requested file was not used
    failure: Option<io::Error>,
}

/// Open the sink for `target`, falling back to stderr when the file is unusable
fn open_sink(target: &LogTarget) -> Sink {
    match target {
        LogTarget::Stderr => Sink {
            active: LogTarget::Stderr,
            file: None,
            failure: None,
        },
        LogTarget::File(path) => match open_log_file(path) {
            Ok(file) => Sink {
                active: target.clone(),
                file: Some(file),
                failure: None,
            },
            Err(err) => Sink {
                active: LogTarget::Stderr,
                file: None,
                failure: Some(err),
            },
        },
    }
}

/// Install the global subscriber and return where logs actually go
///
/// A log file that cannot be created falls back to stderr with a warning.
/// A second call is a no-op.
pub fn init_tracing(directive: Option<&str>, target: &LogTarget) -> LogTarget {
    let Sink {
        active,
        file,
        failure,
    } = open_sink(target);

    let (stderr_layer, file_layer) = match file {
        Some(file) => (
            None,
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file))),
        ),
        None => (Some(fmt::layer().with_writer(io::stderr)), None),
    };

    let _ = tracing_subscriber::registry()
        .with(build_filter(directive))
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    if let (Some(err), LogTarget::File(path)) = (failure, target) {
        warn!(%err, path = %path.display(), "log file unavailable, logging to stderr");
    }
    trace!("finished");
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stderr_target_opens_nothing() {
        let sink = open_sink(&LogTarget::Stderr);
        assert_eq!(sink.active, LogTarget::Stderr);
        assert!(sink.file.is_none());
        assert!(sink.failure.is_none());
    }

    #[test]
    fn log_file_and_parents_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("letreco.log");
        let target = LogTarget::File(path.clone());

        let sink = open_sink(&target);
        assert_eq!(sink.active, target);
        assert!(sink.file.is_some());
        assert!(sink.failure.is_none());
        assert!(path.is_file());
    }

    #[test]
    fn unwritable_log_path_falls_back_to_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let target = LogTarget::File(blocker.join("sub").join("letreco.log"));

        let sink = open_sink(&target);
        assert_eq!(sink.active, LogTarget::Stderr);
        assert!(sink.file.is_none());
        assert!(sink.failure.is_some());
    }
}
