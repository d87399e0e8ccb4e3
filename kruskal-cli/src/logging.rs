//! Tracing setup for the `kruskal` binary.
//!
//! Events go to stderr so the report on stdout stays machine-readable.
//! `KRUSKAL_LOG_FORMAT` picks `human` (the default) or `json` lines, and
//! `RUST_LOG` holds filter directives. Records emitted through the `log`
//! facade are forwarded into `tracing`.

use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing::{debug, warn};
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, filter::ParseError, fmt::format::FmtSpan, layer::SubscriberExt,
};

/// Variable selecting the output format.
pub const FORMAT_VAR: &str = "KRUSKAL_LOG_FORMAT";
/// Variable holding filter directives such as `kruskal_core=debug`.
pub const FILTER_VAR: &str = "RUST_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Shape of each emitted line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Plain text for terminals.
    #[default]
    Human,
    /// One JSON object per event, carrying the enclosing spans.
    Json,
}

/// A format name other than `human` or `json`.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("unsupported log format `{0}`; expected `human` or `json`")]
pub struct UnsupportedFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnsupportedFormat;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        if value.eq_ignore_ascii_case("human") {
            Ok(Self::Human)
        } else if value.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(UnsupportedFormat(value.to_owned()))
        }
    }
}

/// Reasons the logging environment could not be read.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A variable held bytes that are not UTF-8.
    #[error("`{name}` is not valid UTF-8")]
    NotUnicode {
        /// The variable that was read.
        name: &'static str,
        /// Lookup failure.
        #[source]
        source: VarError,
    },
    /// `KRUSKAL_LOG_FORMAT` named an unknown format.
    #[error(transparent)]
    Format(#[from] UnsupportedFormat),
}

/// Logging options resolved from the environment.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LogSettings {
    /// Line format.
    pub format: LogFormat,
    /// Raw filter directives; `None` means `info`.
    pub directives: Option<String>,
}

impl LogSettings {
    /// Reads the settings from the process environment.
    ///
    /// # Errors
    /// See [`LogSettings::from_lookup`].
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|name| env::var(name))
    }

    /// Resolves the settings through `lookup`, which behaves like
    /// [`env::var`].
    ///
    /// Unset or blank directives fall back to the default filter.
    ///
    /// # Errors
    /// Returns [`LoggingError::NotUnicode`] for a variable that is not UTF-8
    /// and [`LoggingError::Format`] for an unknown format name.
    ///
    /// # Examples
    /// ```
    /// use std::env::VarError;
    /// use kruskal_cli::logging::{FORMAT_VAR, LogFormat, LogSettings};
    ///
    /// let settings = LogSettings::from_lookup(|name| match name {
    ///     FORMAT_VAR => Ok("json".to_owned()),
    ///     _ => Err(VarError::NotPresent),
    /// })?;
    /// assert_eq!(settings.format, LogFormat::Json);
    /// assert_eq!(settings.directives, None);
    /// # Ok::<(), kruskal_cli::logging::LoggingError>(())
    /// ```
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Result<String, VarError>,
    ) -> Result<Self, LoggingError> {
        let read = |name: &'static str| match lookup(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(source) => Err(LoggingError::NotUnicode { name, source }),
        };

        let format = read(FORMAT_VAR)?
            .map(|raw| raw.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();
        let directives = read(FILTER_VAR)?.filter(|raw| !raw.trim().is_empty());
        Ok(Self { format, directives })
    }

    /// Builds the event filter, returning the parse failure when the
    /// directives were unusable and the default was substituted.
    fn filter(&self) -> (EnvFilter, Option<ParseError>) {
        match self.directives.as_deref().map(EnvFilter::try_new) {
            Some(Ok(filter)) => (filter, None),
            Some(Err(err)) => (EnvFilter::new(DEFAULT_DIRECTIVE), Some(err)),
            None => (EnvFilter::new(DEFAULT_DIRECTIVE), None),
        }
    }
}

/// Installs the global subscriber once per process.
///
/// Later calls return `Ok(())` without touching the subscriber. If another
/// global subscriber is already set it is kept and events flow to it.
///
/// # Errors
/// Returns [`LoggingError`] when the environment cannot be read.
pub fn init_logging() -> Result<(), LoggingError> {
    let settings = LogSettings::from_env()?;
    if INSTALLED.swap(true, Ordering::AcqRel) {
        return Ok(());
    }
    install(&settings);
    Ok(())
}

fn install(settings: &LogSettings) {
    let (filter, rejected) = settings.filter();
    let output = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let output = match settings.format {
        LogFormat::Human => output.boxed(),
        LogFormat::Json => output
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(output);
    match tracing::subscriber::set_global_default(subscriber) {
        Ok(()) => debug!(format = ?settings.format, "logging initialised"),
        Err(err) => debug!(error = %err, "keeping the existing global subscriber"),
    }
    // Fails only when a `log` logger is already registered.
    let _ = LogTracer::init();

    if let Some(err) = rejected {
        warn!(
            var = FILTER_VAR,
            error = %err,
            fallback = DEFAULT_DIRECTIVE,
            "ignoring unparseable filter directives"
        );
    }
}
