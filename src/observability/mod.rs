//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → OtlpFileExporter → menuboard-otlp.json
//! ```
//!
//! - Traces go to `~/.local/share/zellij/menuboard/menuboard-otlp.json`, one
//!   OTLP/JSON document per line
//! - The file rotates at 10 MB into numbered backups, keeping 3
//! - Verbosity follows the `trace_level` plugin option (an `EnvFilter`
//!   directive, default `info`)
//!
//! ```rust,no_run
//! use menuboard::observability::init_tracing;
//! use menuboard::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
