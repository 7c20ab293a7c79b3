//! Logging utilities for cgen render passes.
//!
//! Provides macros for:
//! - Debug traces by component (`trace_dbg!`)
//! - Verbose logging (`log_dbg!`, `log_trc!`)
//!
//! All output goes to stderr so it never mixes with rendered source.

pub use colored;

use cgen_config::{CgenConfig, DebugTrace};

pub fn effective_verbose(config: &CgenConfig) -> u8 {
  if config.quiet {
    return 0;
  }

  if config.debug && config.verbose < 2 {
    return 2;
  }

  config.verbose
}

pub fn log_debug(config: &CgenConfig) -> bool {
  effective_verbose(config) >= 2
}

pub fn log_trace(config: &CgenConfig) -> bool {
  effective_verbose(config) >= 3
}

pub fn debug_trace_enabled(
  config: &CgenConfig,
  trace: DebugTrace,
) -> bool {
  !config.quiet && (config.debug || config.debug_trace.contains(&trace))
}

/// Returns lowercase name of a DebugTrace variant for log output.
pub fn trace_name(trace: DebugTrace) -> &'static str {
  match trace {
    DebugTrace::Source => "source",
    DebugTrace::Block => "block",
    DebugTrace::Decl => "decl",
  }
}

/// Log a debug trace for a specific render component.
///
/// Output format: `debug[component]: message`
///
/// # Examples
///
/// ```ignore
/// trace_dbg!(config, DebugTrace::Block, "omitting braces around {} statement", 1);
/// // Output: debug[block]: omitting braces around 1 statement
/// ```
#[macro_export]
macro_rules! trace_dbg {
  ($config:expr, $trace:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::debug_trace_enabled($config, $trace) {
      use $crate::colored::Colorize;
      eprintln!(
        "{}[{}]: {}",
        "debug".bright_blue().bold(),
        $crate::trace_name($trace),
        format!($fmt $(, $arg)*)
      );
    }
  }};
}

/// Log a verbose debug message (verbosity >= 2).
///
/// # Examples
///
/// ```ignore
/// log_dbg!(config, "rendering {} elements", count);
/// // Output: debug: rendering 3 elements
/// ```
#[macro_export]
macro_rules! log_dbg {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_debug($config) {
      use $crate::colored::Colorize;
      eprintln!("{}: {}", "debug".bright_blue().bold(), format!($fmt $(, $arg)*));
    }
  }};
}

/// Log a trace message (verbosity >= 3).
///
/// # Examples
///
/// ```ignore
/// log_trc!(config, "element {} done", idx);
/// // Output: trace: element 0 done
/// ```
#[macro_export]
macro_rules! log_trc {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_trace($config) {
      use $crate::colored::Colorize;
      eprintln!("{}: {}", "trace".dimmed(), format!($fmt $(, $arg)*));
    }
  }};
}

#[cfg(test)]
mod tests {
  use super::*;
  use cgen_config::SourceConfig;

  fn config() -> CgenConfig {
    CgenConfig::new(SourceConfig::C)
  }

  #[test]
  fn test_default_config_is_silent() {
    let config = config();

    assert_eq!(effective_verbose(&config), 0);
    assert!(!log_debug(&config));
    assert!(!debug_trace_enabled(&config, DebugTrace::Block));
  }

  #[test]
  fn test_debug_raises_verbosity() {
    let mut config = config();
    config.debug = true;

    assert_eq!(effective_verbose(&config), 2);
    assert!(log_debug(&config));
    assert!(!log_trace(&config));
    assert!(debug_trace_enabled(&config, DebugTrace::Decl));
  }

  #[test]
  fn test_quiet_wins() {
    let mut config = config().with_trace(DebugTrace::Source);
    config.verbose = 3;
    config.quiet = true;

    assert_eq!(effective_verbose(&config), 0);
    assert!(!debug_trace_enabled(&config, DebugTrace::Source));
  }

  #[test]
  fn test_selected_trace_only() {
    let config = config().with_trace(DebugTrace::Block);

    assert!(debug_trace_enabled(&config, DebugTrace::Block));
    assert!(!debug_trace_enabled(&config, DebugTrace::Decl));
    assert_eq!(trace_name(DebugTrace::Block), "block");
  }
}
