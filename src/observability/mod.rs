//! OpenTelemetry-based observability with file-based span export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Each exported span becomes one JSON line in the configured trace file. The file
//! rotates once it grows past a size limit, keeping a bounded number of backups.
//!
//! # Configuration
//!
//! - `trace_file`: where spans go; export is disabled when unset
//! - `trace_level`: `EnvFilter` directive, default `"info"`
//!
//! # Usage
//!
//! ```rust
//! use permview::observability::init_tracing;
//! use permview::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("component initialized");
//! ```

mod exporter;
mod file_writer;
mod init;

pub use init::init_tracing;
