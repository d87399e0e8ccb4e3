//! Command implementations and argument parsing for the kruskal CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use kruskal_core::{EdgeSource, KruskalBuilder, MalformedRecordPolicy, MstError, MstResult};
use kruskal_providers_delimited::{DEFAULT_DELIMITER, DelimitedSource, DelimitedSourceError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Prompt shown when `run` is invoked without a path.
pub const PATH_PROMPT: &str = "Enter the file path for the CSV file: ";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kruskal",
    about = "Compute the minimum spanning tree of a weighted adjacency list."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build the minimum spanning tree of a delimited adjacency file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Adjacency file; prompted for on stdin when omitted.
    pub path: Option<PathBuf>,

    /// Field delimiter.
    #[arg(long, default_value_t = DEFAULT_DELIMITER)]
    pub delimiter: char,

    /// What to do with a record whose names or weight are malformed.
    #[arg(long = "on-malformed", value_enum, default_value_t = OnMalformed::Abort)]
    pub on_malformed: OnMalformed,

    /// Maximum number of edges to ingest before failing.
    #[arg(long = "max-edges")]
    pub max_edges: Option<usize>,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Malformed-record handling selectable on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OnMalformed {
    /// Stop at the first malformed record.
    #[default]
    Abort,
    /// Warn about malformed records and continue without them.
    Skip,
}

impl OnMalformed {
    const fn label(self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Skip => "skip",
        }
    }
}

impl From<OnMalformed> for MalformedRecordPolicy {
    fn from(value: OnMalformed) -> Self {
        match value {
            OnMalformed::Abort => Self::Abort,
            OnMalformed::Skip => Self::Skip,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening the input.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Prompting for the input path failed.
    #[error("failed to read the input path: {0}")]
    Prompt(#[source] io::Error),
    /// The prompt was answered with an empty line or end of input.
    #[error("no input path was provided")]
    MissingPath,
    /// The adjacency file was structurally invalid.
    #[error(transparent)]
    Source(#[from] DelimitedSourceError),
    /// Ingesting or building the tree failed.
    #[error(transparent)]
    Core(#[from] MstError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported by the data source.
    pub data_source: String,
    /// The minimum spanning forest.
    pub result: MstResult,
    /// Records dropped under [`OnMalformed::Skip`].
    pub skipped: usize,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading the input or building the tree fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{Cli, Command, OnMalformed, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "A,B,1,D,10\nB,C,2\nC,D,3\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: Some(file.path().to_path_buf()),
///         delimiter: ',',
///         on_malformed: OnMalformed::Abort,
///         max_edges: None,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.result.total_weight(), 6);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(on_malformed = field::Empty, max_edges = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    span.record("on_malformed", field::display(command.on_malformed.label()));
    if let Some(limit) = command.max_edges {
        span.record("max_edges", limit);
    }

    let path = match command.path.as_deref() {
        Some(path) => path.to_path_buf(),
        None => prompt_for_path(io::stdin().lock(), io::stdout().lock())?,
    };
    let summary = run_delimited(&path, &command)?;

    info!(
        data_source = summary.data_source.as_str(),
        edges = summary.result.edges().len(),
        total_weight = summary.result.total_weight(),
        "command completed"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.run_delimited",
    err,
    skip(path, command),
    fields(path = field::Empty, delimiter = field::Empty, override_name = field::Empty),
)]
pub(super) fn run_delimited(
    path: &Path,
    command: &RunCommand,
) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("delimiter", field::debug(command.delimiter));
    span.record(
        "override_name",
        field::display(command.name.as_deref().unwrap_or("<derived>")),
    );

    let chosen_name = derive_data_source_name(path, command.name.as_deref());
    let reader = open_reader(path)?;
    let source = DelimitedSource::try_from_reader(chosen_name, reader, command.delimiter)?;

    let mut builder = KruskalBuilder::new();
    if let Some(limit) = command.max_edges {
        builder = builder.with_edge_limit(limit);
    }
    let report = builder.ingest_source(&source, command.on_malformed.into())?;
    let result = builder.build()?;

    Ok(ExecutionSummary {
        data_source: source.name().to_owned(),
        result,
        skipped: report.skipped(),
    })
}

#[instrument(name = "cli.open_reader", err, fields(path = field::Empty))]
pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Writes [`PATH_PROMPT`] to `writer` and reads one path from `reader`.
///
/// A blank line is written once the answer is read, separating the prompt
/// from the report. Surrounding whitespace is trimmed from the answer.
///
/// # Errors
/// Returns [`CliError::Prompt`] if either stream fails and
/// [`CliError::MissingPath`] when the answer is blank.
///
/// # Examples
/// ```
/// # use std::io::Cursor;
/// # use std::path::PathBuf;
/// # use kruskal_cli::cli::{PATH_PROMPT, prompt_for_path};
/// let mut shown = Vec::new();
/// let path = prompt_for_path(Cursor::new("graph.csv\n"), &mut shown)?;
/// assert_eq!(path, PathBuf::from("graph.csv"));
/// assert_eq!(shown, format!("{PATH_PROMPT}\n").as_bytes());
/// # Ok::<(), kruskal_cli::cli::CliError>(())
/// ```
pub fn prompt_for_path(
    mut reader: impl BufRead,
    mut writer: impl Write,
) -> Result<PathBuf, CliError> {
    writer
        .write_all(PATH_PROMPT.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(CliError::Prompt)?;

    let mut answer = String::new();
    reader.read_line(&mut answer).map_err(CliError::Prompt)?;
    writeln!(writer)
        .and_then(|()| writer.flush())
        .map_err(CliError::Prompt)?;
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        return Err(CliError::MissingPath);
    }
    Ok(PathBuf::from(trimmed))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "data_source".to_owned())
}

/// Renders `summary` to `writer` as a numbered edge list and total distance.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{ExecutionSummary, render_report};
/// # use kruskal_core::KruskalBuilder;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut builder = KruskalBuilder::new();
/// builder.ingest("A", "B", "4")?;
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     result: builder.build()?,
///     skipped: 0,
/// };
/// let mut buffer = Vec::new();
/// render_report(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "data source: demo\n1.) A to B: 4\n\nThe total distance is 4\ncomponents: 1\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_report(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    for (index, edge) in summary.result.edges().iter().enumerate() {
        writeln!(writer, "{}.) {edge}", index + 1)?;
    }
    writeln!(writer)?;
    writeln!(
        writer,
        "The total distance is {}",
        summary.result.total_weight()
    )?;
    writeln!(writer, "components: {}", summary.result.component_count())?;
    if summary.skipped > 0 {
        writeln!(writer, "skipped records: {}", summary.skipped)?;
    }
    Ok(())
}
