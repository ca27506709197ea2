//! ---
//! fme_section: "02-logging"
//! fme_subsection: "module"
//! fme_type: "source"
//! fme_scope: "code"
//! fme_description: "Structured logging adapters and sinks."
//! fme_version: "v1.2.0"
//! fme_owner: "sdk-platform"
//! ---
#![warn(missing_docs)]

//! Tracing setup for VWO FME binaries plus context-enriched event macros.

use std::io;
use std::path::PathBuf;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::daily;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Registry;
use vwo_fme_version::sdk_meta::{self, SdkMeta};

pub mod macros;

/// Environment variable holding a filter directive, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "VWO_FME_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();
static CONSOLE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Available log formats for the console.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    StructuredJson,
    /// Human readable lines.
    Pretty,
}

fn default_logging_directory() -> PathBuf {
    PathBuf::from("target/logs")
}

fn default_log_format() -> LogFormat {
    LogFormat::StructuredJson
}

/// Where and how [`init_tracing`] writes events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Directory for the daily rolling log file.
    #[serde(default = "default_logging_directory")]
    pub directory: PathBuf,
    /// Console format.
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
    /// File name prefix; defaults to the service name.
    #[serde(default)]
    pub file_prefix: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_logging_directory(),
            format: default_log_format(),
            file_prefix: None,
        }
    }
}

/// Initialize a baseline tracing subscriber suitable for development.
pub fn init() {
    let _ = Registry::default()
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .try_init();
}

/// Resolve the filter: `VWO_FME_LOG`, then `RUST_LOG`, then `info`.
fn resolve_filter() -> EnvFilter {
    match std::env::var(LOG_ENV) {
        Ok(directive) => EnvFilter::try_new(&directive).unwrap_or_else(|err| {
            eprintln!(
                "invalid {} directive ({}); defaulting to {} logging",
                LOG_ENV, err, DEFAULT_DIRECTIVE
            );
            EnvFilter::new(DEFAULT_DIRECTIVE)
        }),
        Err(_) => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
    }
}

/// Base name of the daily log file; the appender adds a date suffix.
pub fn log_file_name(service_name: &str, config: &LoggingConfig) -> String {
    let prefix = config.file_prefix.as_deref().unwrap_or(service_name);
    format!("{prefix}.log")
}

/// Initialize console and daily-file tracing for `service_name`.
///
/// The console layer writes to stderr so stdout stays free for command
/// output. It follows `config.format`; the file is always JSON. A subscriber
/// installed earlier wins and this call only logs the banner.
pub fn init_tracing(service_name: &str, config: &LoggingConfig) -> io::Result<()> {
    std::fs::create_dir_all(&config.directory)?;

    let file_appender = daily(&config.directory, log_file_name(service_name, config));
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);
    let (console_writer, console_guard) = tracing_appender::non_blocking(io::stderr());

    let _ = FILE_GUARD.set(file_guard);
    let _ = CONSOLE_GUARD.set(console_guard);

    let fmt_layer = match config.format {
        LogFormat::StructuredJson => fmt::layer()
            .with_target(false)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .json()
            .with_writer(console_writer)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_writer(console_writer)
            .boxed(),
    };

    let file_layer = fmt::layer()
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .json()
        .with_writer(file_writer)
        .boxed();

    tracing_subscriber::registry()
        .with(resolve_filter())
        .with(fmt_layer)
        .with(file_layer)
        .try_init()
        .ok();

    let meta = sdk_meta::installed()
        .cloned()
        .unwrap_or_else(SdkMeta::builtin);
    info!(
        service = %service_name,
        sdk = %meta.name,
        version = %meta.version,
        version_number = vwo_fme_version::version_number(),
        log_dir = %config.directory.display(),
        format = ?config.format,
        "tracing initialised"
    );
    Ok(())
}

/// Structured logging context propagated by the convenience macros.
#[derive(Debug, Default, Clone)]
pub struct LogContext<'a> {
    /// SDK name associated with the log event.
    pub sdk: Option<&'a str>,
    /// SDK version associated with the log event.
    pub version: Option<&'a str>,
    /// Target platform.
    pub platform: Option<&'a str>,
    /// Free-form component label (`cli`, `config`, ...).
    pub component: Option<&'a str>,
}

impl<'a> LogContext<'a> {
    /// Create an empty logging context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context populated from an SDK identity.
    pub fn from_meta(meta: &'a SdkMeta) -> Self {
        Self {
            sdk: Some(meta.name.as_str()),
            version: Some(meta.version.as_str()),
            platform: Some(meta.platform.as_str()),
            component: None,
        }
    }

    /// Attach an SDK name.
    pub fn with_sdk(mut self, sdk: &'a str) -> Self {
        self.sdk = Some(sdk);
        self
    }

    /// Attach an SDK version.
    pub fn with_version(mut self, version: &'a str) -> Self {
        self.version = Some(version);
        self
    }

    /// Attach a component label.
    pub fn with_component(mut self, component: &'a str) -> Self {
        self.component = Some(component);
        self
    }
}

/// High-level outcome used when emitting lifecycle log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemEventOutcome {
    /// The operation completed successfully.
    Success,
    /// The operation failed or was aborted.
    Fault,
}

impl SystemEventOutcome {
    fn as_str(&self) -> &'static str {
        match self {
            SystemEventOutcome::Success => "success",
            SystemEventOutcome::Fault => "fault",
        }
    }
}

/// Emit a standardized system event with a success/fault outcome.
pub fn log_system_event(
    context: Option<&LogContext>,
    event: &str,
    message: &str,
    outcome: SystemEventOutcome,
) {
    let default_ctx = LogContext::default();
    let ctx = context.unwrap_or(&default_ctx);
    match outcome {
        SystemEventOutcome::Success => tracing::event!(
            Level::INFO,
            event,
            outcome = outcome.as_str(),
            sdk = ctx.sdk.unwrap_or(""),
            version = ctx.version.unwrap_or(""),
            platform = ctx.platform.unwrap_or(""),
            component = ctx.component.unwrap_or(""),
            message = %message
        ),
        SystemEventOutcome::Fault => tracing::event!(
            Level::ERROR,
            event,
            outcome = outcome.as_str(),
            sdk = ctx.sdk.unwrap_or(""),
            version = ctx.version.unwrap_or(""),
            platform = ctx.platform.unwrap_or(""),
            component = ctx.component.unwrap_or(""),
            message = %message
        ),
    }
}
