//! A pluggable, instance-scoped logger.
//!
//! Grounded on `genericLogger.h` from the C original this engine wraps:
//! nine RFC5424-style levels, a callback + userdata pair, and a
//! configured threshold below which messages are dropped. Unlike a
//! process-global logging facade, every `Grammar` owns (or shares) its
//! own `Logger`; no singleton is required.
use std::fmt::Arguments;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
  Trace,
  Debug,
  Info,
  Notice,
  Warning,
  Error,
  Critical,
  Alert,
  Emergency,
}

/// Receives formatted log lines. Implement this to route engine
/// diagnostics into an application's own logging stack.
pub trait Sink: Send + Sync {
  fn log(&self, level: LogLevel, message: &str);
}

/// A `Sink` that writes to stderr, used when a `Grammar` is created
/// without an explicit logger. Mirrors `genericLogger_defaultCallback`'s
/// role in the C original.
pub struct StderrSink;

impl Sink for StderrSink {
  fn log(&self, level: LogLevel, message: &str) {
    eprintln!("[{level:?}] {message}");
  }
}

#[derive(Clone)]
pub struct Logger {
  level: LogLevel,
  sink: Option<Arc<dyn Sink>>,
}

impl std::fmt::Debug for Logger {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Logger").field("level", &self.level).field("sink", &self.sink.is_some()).finish()
  }
}

impl Default for Logger {
  /// Default level is `Warning`, matching `genericLoggerOption_t`'s
  /// documented default.
  fn default() -> Self {
    Self { level: LogLevel::Warning, sink: Some(Arc::new(StderrSink)) }
  }
}

impl Logger {
  pub fn new(level: LogLevel, sink: Option<Arc<dyn Sink>>) -> Self {
    Self { level, sink }
  }

  pub fn silent() -> Self {
    Self { level: LogLevel::Emergency, sink: None }
  }

  pub fn level(&self) -> LogLevel {
    self.level
  }

  pub fn set_level(&mut self, level: LogLevel) {
    self.level = level;
  }

  #[inline]
  pub fn enabled(&self, level: LogLevel) -> bool {
    level >= self.level
  }

  pub fn log(&self, level: LogLevel, args: Arguments<'_>) {
    if !self.enabled(level) {
      return;
    }
    if let Some(sink) = &self.sink {
      sink.log(level, &args.to_string());
    }
  }
}

macro_rules! log_trace {
  ($logger:expr, $($arg:tt)*) => {
    $logger.log($crate::logger::LogLevel::Trace, format_args!($($arg)*))
  };
}
macro_rules! log_debug {
  ($logger:expr, $($arg:tt)*) => {
    $logger.log($crate::logger::LogLevel::Debug, format_args!($($arg)*))
  };
}
macro_rules! log_info {
  ($logger:expr, $($arg:tt)*) => {
    $logger.log($crate::logger::LogLevel::Info, format_args!($($arg)*))
  };
}
macro_rules! log_warning {
  ($logger:expr, $($arg:tt)*) => {
    $logger.log($crate::logger::LogLevel::Warning, format_args!($($arg)*))
  };
}
macro_rules! log_error {
  ($logger:expr, $($arg:tt)*) => {
    $logger.log($crate::logger::LogLevel::Error, format_args!($($arg)*))
  };
}

#[allow(unused_imports)]
pub(crate) use log_debug;
pub(crate) use log_error;
#[allow(unused_imports)]
pub(crate) use log_info;
#[allow(unused_imports)]
pub(crate) use log_trace;
pub(crate) use log_warning;
