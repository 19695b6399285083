//! Error types for schema translation.

use thiserror::Error;

use crate::field::FieldKind;

/// Boxed error reported by a [`Catalog`](crate::catalog::Catalog) backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while translating fields or talking to the catalog.
#[derive(Debug, Error)]
pub enum Error {
    /// The dialect has no column type for the field's kind.
    #[error("invalid sql type {type_name} ({kind}) for {dialect}")]
    UnsupportedType {
        /// Language-level type name of the field.
        type_name: String,
        /// Category the field was classified as.
        kind: FieldKind,
        /// Name of the dialect that rejected it.
        dialect: &'static str,
    },

    /// A tag string contained a key outside the recognized set.
    #[error("unknown tag setting: {0}")]
    UnknownTag(String),

    /// The catalog backend failed to run a statement or query.
    #[error("catalog error: {0}")]
    Catalog(#[source] BoxError),
}

impl Error {
    /// Wraps a backend error as [`Error::Catalog`].
    #[must_use]
    pub fn catalog(err: impl Into<BoxError>) -> Self {
        Self::Catalog(err.into())
    }
}

/// Result type alias for schema translation.
pub type Result<T> = std::result::Result<T, Error>;
