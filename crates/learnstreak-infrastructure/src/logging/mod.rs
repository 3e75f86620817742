//! Logging bootstrap.
//!
//! Every event goes to a daily-rolling file as one-line JSON with:
//! timestamp (ISO 8601, millisecond precision, local offset), level, target,
//! pid, thread id, file and line, message, and the structured fields.
//!
//! Debug builds additionally print a colored, human-readable line to stdout.
//! `RUST_LOG` overrides the default filters for both layers.

use log::LevelFilter;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

const LOG_FILE_PREFIX: &str = "learnstreak.log";

static LOGGER_READY: OnceLock<()> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logger(log_dir: PathBuf) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    std::fs::create_dir_all(&log_dir)?;

    // Route `log` records (sqlx emits through it) into tracing
    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let file_appender = rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = FILE_GUARD.set(guard);

    let json_layer = fmt::layer()
        .with_writer(non_blocking)
        .event_format(JsonFormatter::new())
        .with_filter(env_filter_or(default_file_directives()));

    let stdout_layer = if cfg!(debug_assertions) {
        Some(
            fmt::layer()
                .with_ansi(true)
                .event_format(HumanReadableFormatter::new())
                .with_filter(env_filter_or("debug,learnstreak=trace,sqlx=warn")),
        )
    } else {
        None
    };

    let subscriber = Registry::default().with(json_layer).with(stdout_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::info!(
        target: "learnstreak::logging",
        log_dir = %log_dir.display(),
        version = env!("CARGO_PKG_VERSION"),
        profile = if cfg!(debug_assertions) { "Debug" } else { "Release" },
        "Logger initialized"
    );

    Ok(())
}

fn default_file_directives() -> &'static str {
    if cfg!(debug_assertions) {
        "debug,learnstreak=trace,sqlx=info"
    } else {
        "info,learnstreak=info,sqlx=warn"
    }
}

fn env_filter_or(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

// ============================================================
// Formatters
// ============================================================

use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// One-line JSON
struct JsonFormatter {
    pid: u32,
}

impl JsonFormatter {
    fn new() -> Self {
        Self {
            pid: std::process::id(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for JsonFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();

        let mut visitor = FieldCollector::default();
        event.record(&mut visitor);
        let message = visitor.fields.remove("message");

        let mut json = serde_json::json!({
            "timestamp": chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            "level": metadata.level().to_string(),
            "target": metadata.target(),
            "pid": self.pid,
            "tid": format!("{:?}", std::thread::current().id()),
            "version": env!("CARGO_PKG_VERSION"),
        });

        if let Some(file) = metadata.file() {
            json["file"] = serde_json::json!(file);
        }
        if let Some(line) = metadata.line() {
            json["line"] = serde_json::json!(line);
        }
        if let Some(message) = message {
            json["message"] = message;
        }
        if !visitor.fields.is_empty() {
            json["fields"] = serde_json::Value::Object(visitor.fields);
        }

        writeln!(writer, "{}", serde_json::to_string(&json).unwrap_or_default())
    }
}

/// `2025-03-10 09:12:44.031 [INFO] (learnstreak::streak) pid=1 tid=ThreadId(1) user_id=a@b.c - message (src/x.rs:42)`
struct HumanReadableFormatter {
    pid: u32,
}

impl HumanReadableFormatter {
    fn new() -> Self {
        Self {
            pid: std::process::id(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for HumanReadableFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();

        let level = match *metadata.level() {
            Level::ERROR => "\x1b[31mERROR\x1b[0m",
            Level::WARN => "\x1b[33mWARN\x1b[0m",
            Level::INFO => "\x1b[32mINFO\x1b[0m",
            Level::DEBUG => "\x1b[36mDEBUG\x1b[0m",
            Level::TRACE => "\x1b[35mTRACE\x1b[0m",
        };

        let mut visitor = FieldCollector::default();
        event.record(&mut visitor);

        let message = visitor
            .fields
            .remove("message")
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();

        let fields: String = visitor
            .fields
            .iter()
            .map(|(key, value)| format!(" {}={}", key, value))
            .collect();

        let location = match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => format!(" ({}:{})", file, line),
            _ => String::new(),
        };

        writeln!(
            writer,
            "{} [{}] ({}) pid={} tid={:?}{} - {}{}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            level,
            metadata.target(),
            self.pid,
            std::thread::current().id(),
            fields,
            message,
            location
        )
    }
}

/// Collects event fields into a JSON map
#[derive(Default)]
struct FieldCollector {
    fields: serde_json::Map<String, serde_json::Value>,
}

impl tracing::field::Visit for FieldCollector {
    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.fields.insert(
            field.name().to_string(),
            serde_json::json!(format!("{:?}", value)),
        );
    }
}
