//! Edge source abstractions consumed by [`crate::KruskalBuilder::ingest_source`].

/// One `(name, name, weight)` record read from an external source.
///
/// The weight is kept as text so that the builder owns weight validation and
/// reports malformed values with the record's line number.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EdgeRecord {
    line: usize,
    left: String,
    right: String,
    weight: String,
}

impl EdgeRecord {
    /// Creates a record originating from the one-based `line` of its source.
    #[must_use]
    pub fn new(
        line: usize,
        left: impl Into<String>,
        right: impl Into<String>,
        weight: impl Into<String>,
    ) -> Self {
        Self {
            line,
            left: left.into(),
            right: right.into(),
            weight: weight.into(),
        }
    }

    /// Returns the one-based line the record came from.
    #[must_use]
    #[rustfmt::skip]
    pub fn line(&self) -> usize { self.line }

    /// Returns the first endpoint name.
    #[must_use]
    #[rustfmt::skip]
    pub fn left(&self) -> &str { &self.left }

    /// Returns the second endpoint name.
    #[must_use]
    #[rustfmt::skip]
    pub fn right(&self) -> &str { &self.right }

    /// Returns the raw weight text.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> &str { &self.weight }
}

/// Abstraction over a collection of edge records.
///
/// # Examples
/// ```
/// use kruskal_core::{EdgeRecord, EdgeSource};
///
/// struct Fixed(Vec<EdgeRecord>);
///
/// impl EdgeSource for Fixed {
///     fn name(&self) -> &str { "fixed" }
///     fn records(&self) -> &[EdgeRecord] { &self.0 }
/// }
///
/// let source = Fixed(vec![EdgeRecord::new(1, "A", "B", "4")]);
/// assert_eq!(source.len(), 1);
/// assert!(!source.is_empty());
/// ```
pub trait EdgeSource {
    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the records in source order.
    fn records(&self) -> &[EdgeRecord];

    /// Returns the number of records.
    fn len(&self) -> usize {
        self.records().len()
    }

    /// Returns whether the source holds no records.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// How [`crate::KruskalBuilder::ingest_source`] treats a malformed record.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MalformedRecordPolicy {
    /// Stop at the first malformed record and return its error.
    #[default]
    Abort,
    /// Log a warning, count the record as skipped, and continue.
    Skip,
}

/// Outcome of draining an [`EdgeSource`] into a builder.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct IngestReport {
    pub(crate) accepted: usize,
    pub(crate) skipped: usize,
}

impl IngestReport {
    /// Returns the number of records that became edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn accepted(&self) -> usize { self.accepted }

    /// Returns the number of malformed records skipped under
    /// [`MalformedRecordPolicy::Skip`].
    #[must_use]
    #[rustfmt::skip]
    pub fn skipped(&self) -> usize { self.skipped }
}
