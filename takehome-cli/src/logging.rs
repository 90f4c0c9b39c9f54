use anyhow::{Context, Result};
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::Mutex,
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

// --- Formatter ---

struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        if writer.has_ansi_escapes() {
            let color = match *meta.level() {
                Level::ERROR => "\x1b[1;31m",
                Level::WARN => "\x1b[1;33m",
                Level::INFO => "\x1b[1;32m",
                Level::DEBUG => "\x1b[1;34m",
                Level::TRACE => "\x1b[1;35m",
            };
            write!(
                writer,
                "\x1b[2m{timestamp}\x1b[0m {color}{:>5}\x1b[0m \x1b[36m{}\x1b[0m ",
                meta.level(),
                meta.target()
            )?;
        } else {
            write!(writer, "{timestamp} {:>5} {} ", meta.level(), meta.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Settings ---

/// Where log records go for one run of the CLI.
#[derive(Debug, Clone, Copy)]
pub struct LogSettings<'a> {
    /// `--log-level`; wins over `RUST_LOG` and the config file.
    pub explicit_level: Option<&'a str>,
    /// `logging.level` from the config file.
    pub configured_level: &'a str,
    /// Colored output on stderr. Off with `--quiet`.
    pub console: bool,
    /// Append plain records to this file as well.
    pub file: Option<&'a Path>,
}

/// Picks the filter directives: the command-line flag, then a non-empty
/// `RUST_LOG`, then the configured level.
fn select_directives<'a>(
    explicit: Option<&'a str>,
    from_env: Option<&'a str>,
    configured: &'a str,
) -> &'a str {
    explicit
        .or(from_env.filter(|env| !env.trim().is_empty()))
        .unwrap_or(configured)
}

fn level_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).with_context(|| format!("invalid log level '{directives}'"))
}

fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

/// Installs the global subscriber. Call once, after the config is loaded.
///
/// Console records go to stderr so table and JSON output on stdout stays
/// clean.
pub fn init_logging(settings: &LogSettings<'_>) -> Result<()> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = level_filter(select_directives(
        settings.explicit_level,
        from_env.as_deref(),
        settings.configured_level,
    ))?;

    let console_layer = settings.console.then(|| {
        tracing_subscriber::fmt::layer()
            .event_format(LocalFmt)
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
    });

    let file_layer = match settings.file {
        Some(path) => Some(
            tracing_subscriber::fmt::layer()
                .event_format(LocalFmt)
                .with_ansi(false)
                .with_writer(Mutex::new(open_log_file(path)?)),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")
}
