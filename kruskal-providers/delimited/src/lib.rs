//! Delimited adjacency-list provider implementing [`EdgeSource`].
//!
//! Every non-blank line names a vertex followed by `neighbour, weight` pairs:
//!
//! ```text
//! Dallas,Austin,195,Houston,239
//! Austin,Houston,162
//! ```
//!
//! Each pair becomes one [`EdgeRecord`]. Weights stay as text so the builder
//! validates them and reports failures against the originating line. A line
//! holding only a vertex name yields a record with a blank neighbour, which
//! the builder rejects as a malformed record rather than failing the read.
use std::io::{self, BufRead};

use kruskal_core::{EdgeRecord, EdgeSource};
use thiserror::Error;
use tracing::debug;

/// Field delimiter used when none is configured.
pub const DEFAULT_DELIMITER: char = ',';

/// Errors raised while reading a delimited source.
#[derive(Debug, Error)]
pub enum DelimitedSourceError {
    /// Reading from the underlying source failed.
    #[error("failed to read delimited input: {0}")]
    Io(#[from] io::Error),
    /// A neighbour name was not followed by a weight.
    #[error("line {line}: neighbour has no weight")]
    DanglingNeighbour {
        /// One-based line number.
        line: usize,
    },
}

/// Edge records parsed from delimited adjacency lines.
#[derive(Clone, Debug)]
pub struct DelimitedSource {
    name: String,
    records: Vec<EdgeRecord>,
}

impl DelimitedSource {
    /// Reads records from `reader`, splitting fields on `delimiter`.
    ///
    /// Fields are trimmed and blank lines are skipped. Names and weights are
    /// not validated here. Input without any records yields an empty source.
    ///
    /// # Errors
    /// Returns [`DelimitedSourceError::Io`] if reading fails and
    /// [`DelimitedSourceError::DanglingNeighbour`] when a neighbour is not
    /// followed by a weight.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use kruskal_core::EdgeSource;
    /// use kruskal_providers_delimited::{DEFAULT_DELIMITER, DelimitedSource};
    ///
    /// let input = Cursor::new("A,B,1,C,4\nB,C,2\n");
    /// let source = DelimitedSource::try_from_reader("demo", input, DEFAULT_DELIMITER)?;
    /// assert_eq!(source.len(), 3);
    /// assert_eq!(source.records()[1].right(), "C");
    /// # Ok::<(), kruskal_providers_delimited::DelimitedSourceError>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
        delimiter: char,
    ) -> Result<Self, DelimitedSourceError> {
        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let raw = line?;
            if raw.trim().is_empty() {
                continue;
            }
            parse_line(index + 1, &raw, delimiter, &mut records)?;
        }

        let source = Self {
            name: name.into(),
            records,
        };
        debug!(
            source = source.name.as_str(),
            records = source.records.len(),
            "delimited input parsed"
        );
        Ok(source)
    }
}

fn parse_line(
    line: usize,
    raw: &str,
    delimiter: char,
    records: &mut Vec<EdgeRecord>,
) -> Result<(), DelimitedSourceError> {
    let mut fields = raw.split(delimiter).map(str::trim);
    let vertex = fields.next().unwrap_or_default();
    let mut pairs = 0_usize;

    while let Some(neighbour) = fields.next() {
        let weight = fields
            .next()
            .ok_or(DelimitedSourceError::DanglingNeighbour { line })?;
        records.push(EdgeRecord::new(line, vertex, neighbour, weight));
        pairs += 1;
    }

    if pairs == 0 {
        records.push(EdgeRecord::new(line, vertex, "", ""));
    }
    Ok(())
}

impl EdgeSource for DelimitedSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn records(&self) -> &[EdgeRecord] {
        &self.records
    }
}
