//! Diagnostics for hosts that want to see what motions and timelines do.
//!
//! Library code logs through the `log` facade (`log_debug!`, `log_info!`,
//! `log_warn!`) and emits per-tick events through `tracing` (`trace_debug!`).
//! [`init`] routes both into a single destination controlled by the
//! functions in this module. Nothing is written until a file or stdout is
//! selected.

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATE_TARGET: &str = "scroll_motion";
const DEFAULT_FILTER: &str = "scroll_motion=debug,warn";

struct LoggerState {
    enabled: bool,
    verbose: bool,
    to_stdout: bool,
    file: Option<File>,
}

static STATE: Mutex<LoggerState> = Mutex::new(LoggerState {
    enabled: false,
    verbose: false,
    to_stdout: false,
    file: None,
});

/// Write one formatted line to every active destination.
fn emit(line: &[u8]) {
    let mut state = STATE.lock();
    if !state.enabled {
        return;
    }
    if let Some(file) = state.file.as_mut() {
        let _ = file.write_all(line);
        let _ = file.flush();
    }
    if state.to_stdout {
        let _ = io::stdout().write_all(line);
    }
}

struct MotionLogger;

static LOGGER: MotionLogger = MotionLogger;

impl log::Log for MotionLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let state = STATE.lock();
        if !state.enabled {
            return false;
        }
        // Other crates stay at warn unless verbose
        if state.verbose || metadata.target().starts_with(CRATE_TARGET) {
            metadata.level() <= Level::Debug
        } else {
            metadata.level() <= Level::Warn
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "{} {} [{}] - {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );
        emit(line.as_bytes());
    }

    fn flush(&self) {}
}

/// `tracing` output goes through the same gate as `log` records.
#[derive(Clone, Copy)]
struct TracingWriter;

impl Write for TracingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        emit(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> fmt::MakeWriter<'a> for TracingWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        *self
    }
}

/// Install the `log` logger and the `tracing` subscriber, then enable output.
///
/// Safe to call more than once. Fails only when the host already installed
/// both a `log` logger and a global `tracing` subscriber.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    use std::sync::OnceLock;
    static INIT_RESULT: OnceLock<Result<(), String>> = OnceLock::new();

    let result = INIT_RESULT.get_or_init(|| {
        if std::env::var("SCROLL_MOTION_VERBOSE").is_ok()
            || std::env::var("RUST_LOG").is_ok_and(|v| v.contains("debug") || v.contains("trace"))
        {
            set_verbose_logging(true);
        }
        enable_logging();

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
        let fmt_layer = fmt::Layer::new()
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::ChronoUtc::rfc_3339())
            .with_writer(TracingWriter);

        let tracing_result = Registry::default().with(env_filter).with(fmt_layer).try_init();
        let log_result =
            log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Debug));

        match (tracing_result, log_result) {
            (Err(tracing_err), Err(log_err)) => Err(format!(
                "failed to initialize logging: tracing={tracing_err}, log={log_err}"
            )),
            _ => Ok(()),
        }
    });

    result.clone().map_err(Into::into)
}

pub fn enable_logging() {
    STATE.lock().enabled = true;
}

pub fn disable_logging() {
    STATE.lock().enabled = false;
}

/// Let debug records from other crates through, not just warnings.
pub fn set_verbose_logging(enabled: bool) {
    STATE.lock().verbose = enabled;
}

/// Append log output to `path`, creating the file if needed.
pub fn set_log_file(path: impl AsRef<Path>) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    STATE.lock().file = Some(file);
    Ok(())
}

pub fn clear_log_file() {
    STATE.lock().file = None;
}

pub fn set_log_to_stdout(enabled: bool) {
    STATE.lock().to_stdout = enabled;
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! trace_debug {
    (target: $target:expr, $($arg:tt)*) => {
        tracing::debug!(target: $target, $($arg)*)
    };
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    // Logger state is process-wide
    static SERIAL: Mutex<()> = Mutex::new(());

    fn with_log_file(test: impl FnOnce()) -> String {
        let _guard = SERIAL.lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("motion.log");
        init().unwrap();
        set_log_file(&path).unwrap();

        test();

        clear_log_file();
        enable_logging();
        std::fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn test_init_is_idempotent() {
        let _guard = SERIAL.lock();
        assert!(init().is_ok());
        assert!(init().is_ok());
    }

    #[test]
    fn test_log_file_receives_records() {
        let contents = with_log_file(|| {
            crate::log_warn!("stop-list sanity check");
            crate::trace_debug!("tick at scroll {}", 42);
        });

        assert!(contents.contains("stop-list sanity check"));
        assert!(contents.contains("tick at scroll 42"));
        assert!(!contents.contains('\u{1b}'), "file output must not carry ANSI codes");
    }

    #[test]
    fn test_disable_logging_suppresses_output() {
        let contents = with_log_file(|| {
            disable_logging();
            crate::log_warn!("written while disabled");
            crate::trace_debug!("traced while disabled");
            enable_logging();
            crate::log_warn!("written after re-enable");
        });

        assert!(!contents.contains("written while disabled"));
        assert!(!contents.contains("traced while disabled"));
        assert!(contents.contains("written after re-enable"));
    }

    #[test]
    fn test_verbose_admits_foreign_debug_records() {
        let contents = with_log_file(|| {
            set_verbose_logging(false);
            log::debug!(target: "host_app", "quiet host detail");
            set_verbose_logging(true);
            log::debug!(target: "host_app", "verbose host detail");
            set_verbose_logging(false);
        });

        assert!(!contents.contains("quiet host detail"));
        assert!(contents.contains("verbose host detail"));
    }
}
