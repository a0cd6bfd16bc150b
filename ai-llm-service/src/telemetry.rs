//! Log output for events emitted by this crate.
//!
//! The binary owns the subscriber; this module only supplies the pieces:
//! a formatting [`layer`] restricted to `ai_llm_service::*` targets and an
//! [`EnvFilter`] that honours `RUST_LOG` when it is set.

use std::io::{self, IsTerminal};
use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::fmt::format::{FmtSpan, Writer};
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, filter, fmt};

/// Target prefix of every event this crate emits.
pub const TARGET_PREFIX: &str = "ai_llm_service";

/// `2025-09-12T10:20:30Z`
#[derive(Clone, Copy, Debug, Default)]
struct UtcSeconds;

impl FormatTime for UtcSeconds {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        w.write_str(&now)
    }
}

/// Returns `true` for events emitted by this crate.
pub fn is_library_target(target: &str) -> bool {
    target.starts_with(TARGET_PREFIX)
}

/// Compact `file:line` formatter for this crate's events only, with span
/// durations on close. Colors are enabled when stdout is a terminal.
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_ansi(io::stdout().is_terminal())
        .with_span_events(FmtSpan::CLOSE)
        .event_format(
            fmt::format()
                .with_timer(UtcSeconds)
                .compact()
                .with_target(true)
                .with_source_location(true),
        )
        .with_filter(filter::filter_fn(|meta| is_library_target(meta.target())))
}

/// `ai_llm_service=<level>`.
pub fn level_directive(level: Level) -> Directive {
    let raw = format!("{TARGET_PREFIX}={}", level.as_str().to_lowercase());
    Directive::from_str(&raw).unwrap_or_else(|_| LevelFilter::INFO.into())
}

/// Filter for the process: `RUST_LOG` verbatim when set and valid, otherwise
/// `default` plus `ai_llm_service=<level>`.
pub fn env_filter_with_level(default: &str, level: Level) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(from_env.as_deref(), default, level)
}

/// Same as [`env_filter_with_level`] with the `RUST_LOG` value passed in.
pub fn filter_from(rust_log: Option<&str>, default: &str, level: Level) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(format!("{default},{}", level_directive(level))))
}
