//! Logging configuration
//!
//! # Environment Variables
//! - `LOG_FORMAT`: Output format - `json` (default) or `pretty`
//! - `RUST_LOG`: Log level filter (default: `info`)
//!
//! Logs go to stderr; stdout carries only the scanner's match lines.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Machine-parseable JSON lines for production
    Json,
    /// Human-readable multi-line output for development
    Pretty,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything but `pretty` falls back to JSON.
    pub fn parse(value: &str) -> Self {
        match value {
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }

    /// Read `LOG_FORMAT` from the process environment
    pub fn from_env() -> Self {
        std::env::var("LOG_FORMAT")
            .map(|v| Self::parse(&v))
            .unwrap_or(LogFormat::Json)
    }
}

/// Build the subscriber for `format`, writing events to `writer`
pub fn build_subscriber<W>(format: LogFormat, env_filter: EnvFilter, writer: W) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .pretty()
                .finish(),
        ),
        LogFormat::Json => Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .json()
                .finish(),
        ),
    }
}

/// Initialize the global tracing subscriber on stderr
///
/// Must be called once per process, before the first event is emitted.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = build_subscriber(LogFormat::from_env(), env_filter, std::io::stderr);

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Logging already initialized: {}", e);
    }
}
