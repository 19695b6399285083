//! Field descriptors.
//!
//! A [`FieldDescriptor`] is the dialect-facing description of one model
//! field: its category, declared size, key status and tags. Dialects turn
//! descriptors into column type strings.

mod descriptor;
mod kind;

pub use descriptor::{FieldDescriptor, DEFAULT_SIZE};
pub use kind::FieldType;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primitive category of a field.
///
/// Classification happens once, when the descriptor is built; dialects only
/// ever switch on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Boolean.
    Bool,
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Pointer-sized signed integer.
    Isize,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Unsigned 64-bit integer.
    Uint64,
    /// Pointer-sized unsigned integer.
    Usize,
    /// Single-precision float.
    Float32,
    /// Double-precision float.
    Float64,
    /// Text.
    String,
    /// Raw byte sequence.
    Bytes,
    /// Point in time.
    Timestamp,
    /// Any other composite value.
    Struct,
    /// Anything that fits no other category.
    Other,
}

impl FieldKind {
    /// Returns the lower-case name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Isize => "isize",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Usize => "usize",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Timestamp => "timestamp",
            Self::Struct => "struct",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
