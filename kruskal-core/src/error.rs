//! Error types for the Kruskal core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, num::ParseIntError};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Reasons a textual edge weight was refused.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum WeightError {
    /// The weight field was empty after trimming.
    #[error("weight is empty")]
    Empty,
    /// The weight carried a leading minus sign.
    #[error("weight must be non-negative")]
    Negative,
    /// The weight was not a whole number that fits in 64 bits.
    #[error("weight is not a whole number: {0}")]
    Invalid(#[from] ParseIntError),
}

/// Errors returned by the disjoint-set forest and the Kruskal builder.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// A forest was requested with a negative element count.
    #[error("disjoint-set forest size must be non-negative (got {requested})")]
    InvalidSize {
        /// The element count supplied by the caller.
        requested: i64,
    },
    /// An element index fell outside the forest.
    #[error("element {index} is out of range for a forest of {len} elements")]
    OutOfRange {
        /// The offending element index.
        index: usize,
        /// The number of elements in the forest.
        len: usize,
    },
    /// A weight field could not be interpreted as a non-negative integer.
    #[error("weight `{raw}` on edge `{left}` -> `{right}` is invalid: {reason}")]
    ParseWeight {
        /// Name of the first endpoint as supplied.
        left: String,
        /// Name of the second endpoint as supplied.
        right: String,
        /// The raw weight text.
        raw: String,
        /// Why the weight was refused.
        #[source]
        reason: WeightError,
    },
    /// A vertex name was empty after trimming.
    #[error("vertex names must not be empty")]
    EmptyVertexName,
    /// Edges were offered after the builder produced its result.
    #[error("the builder has already been finalised; ingest is no longer accepted")]
    AlreadyFinalized,
    /// The host-imposed cap on pending edges was reached.
    #[error("edge limit of {limit} reached")]
    EdgeLimitExceeded {
        /// The configured maximum number of edges.
        limit: usize,
    },
    /// The accumulated tree weight does not fit in a `u64`.
    #[error("total tree weight overflowed u64")]
    WeightOverflow,
    /// A record from an edge source failed to ingest.
    #[error("record on line {line} rejected: {source}")]
    Record {
        /// One-based line number of the record in its source.
        line: usize,
        /// The underlying ingestion failure.
        #[source]
        source: Box<MstError>,
    },
}

impl MstError {
    /// Returns `true` when the error concerns a single malformed record and
    /// the caller may skip it and continue.
    #[must_use]
    pub const fn is_record_level(&self) -> bool {
        matches!(self, Self::ParseWeight { .. } | Self::EmptyVertexName)
    }
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// A forest was requested with a negative element count.
        InvalidSize => InvalidSize { .. } => "MST_INVALID_SIZE",
        /// An element index fell outside the forest.
        OutOfRange => OutOfRange { .. } => "MST_OUT_OF_RANGE",
        /// A weight field could not be parsed.
        ParseWeight => ParseWeight { .. } => "MST_PARSE_WEIGHT",
        /// A vertex name was empty.
        EmptyVertexName => EmptyVertexName => "MST_EMPTY_VERTEX_NAME",
        /// Ingest was attempted after finalisation.
        AlreadyFinalized => AlreadyFinalized => "MST_ALREADY_FINALIZED",
        /// The pending edge cap was reached.
        EdgeLimitExceeded => EdgeLimitExceeded { .. } => "MST_EDGE_LIMIT_EXCEEDED",
        /// The total weight overflowed.
        WeightOverflow => WeightOverflow => "MST_WEIGHT_OVERFLOW",
        /// A source record failed to ingest.
        Record => Record { .. } => "MST_RECORD",
    }
}

/// Convenient result alias for Kruskal core operations.
pub type Result<T, E = MstError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(MstError::InvalidSize { requested: -1 }, "MST_INVALID_SIZE")]
    #[case(MstError::OutOfRange { index: 4, len: 2 }, "MST_OUT_OF_RANGE")]
    #[case(MstError::EmptyVertexName, "MST_EMPTY_VERTEX_NAME")]
    #[case(MstError::AlreadyFinalized, "MST_ALREADY_FINALIZED")]
    #[case(MstError::EdgeLimitExceeded { limit: 3 }, "MST_EDGE_LIMIT_EXCEEDED")]
    #[case(MstError::WeightOverflow, "MST_WEIGHT_OVERFLOW")]
    fn codes_are_stable(#[case] error: MstError, #[case] expected: &str) {
        assert_eq!(error.code().as_str(), expected);
        assert_eq!(error.code().to_string(), expected);
    }

    #[test]
    fn record_wraps_the_underlying_message() {
        let error = MstError::Record {
            line: 7,
            source: Box::new(MstError::EmptyVertexName),
        };
        assert_eq!(error.code(), MstErrorCode::Record);
        assert_eq!(
            error.to_string(),
            "record on line 7 rejected: vertex names must not be empty"
        );
    }

    #[test]
    fn only_malformed_record_errors_are_skippable() {
        let parse = MstError::ParseWeight {
            left: "A".into(),
            right: "B".into(),
            raw: "x".into(),
            reason: WeightError::Empty,
        };
        assert!(parse.is_record_level());
        assert!(MstError::EmptyVertexName.is_record_level());
        assert!(!MstError::AlreadyFinalized.is_record_level());
        assert!(!MstError::EdgeLimitExceeded { limit: 1 }.is_record_level());
    }
}
