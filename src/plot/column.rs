//! Typed column input boundary
//!
//! The resolver only needs two things from a column: the kind of its elements
//! and, for labelling, its name. `TypedColumn` captures that so the resolver
//! works the same on a materialized `Series`, a frame `Column`, or a bare
//! schema entry.

use polars::prelude::{Column, DataType, Series};
use serde::{Deserialize, Serialize};

/// Kind of the elements held by a column.
///
/// Only the kinds the resolver understands get their own variant. Everything
/// else is carried as `Other` with the host type name so errors can name it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Signed or unsigned integers of any width
    Integer,
    /// Floating-point numbers
    Float,
    /// Strings and categorical labels
    Text,
    /// Any other element type (dates, booleans, nested types, ...)
    Other(String),
}

impl ElementKind {
    /// Map a Polars data type to an element kind.
    ///
    /// - Int*, UInt* → Integer
    /// - Float32, Float64 → Float
    /// - String, Categorical, Enum → Text
    /// - anything else → Other, named by the Polars display name (`bool`, `date`, ...)
    pub fn from_dtype(dtype: &DataType) -> Self {
        match dtype {
            DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64 => ElementKind::Integer,
            DataType::Float32 | DataType::Float64 => ElementKind::Float,
            DataType::String | DataType::Categorical(..) | DataType::Enum(..) => ElementKind::Text,
            other => ElementKind::Other(other.to_string()),
        }
    }

    /// Name used in error messages and logs
    pub fn name(&self) -> &str {
        match self {
            ElementKind::Integer => "integer",
            ElementKind::Float => "float",
            ElementKind::Text => "text",
            ElementKind::Other(name) => name,
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A named, ordered sequence of values of a single declared element kind.
///
/// Implementations are only read, never mutated.
pub trait TypedColumn {
    /// Declared kind of the column's elements
    fn element_kind(&self) -> ElementKind;

    /// Column name, or `None` for anonymous columns
    fn column_name(&self) -> Option<&str>;
}

impl TypedColumn for Series {
    fn element_kind(&self) -> ElementKind {
        ElementKind::from_dtype(self.dtype())
    }

    fn column_name(&self) -> Option<&str> {
        crate::naming::display_name(self.name().as_str())
    }
}

impl TypedColumn for Column {
    fn element_kind(&self) -> ElementKind {
        ElementKind::from_dtype(self.dtype())
    }

    fn column_name(&self) -> Option<&str> {
        crate::naming::display_name(self.name().as_str())
    }
}

/// Column metadata without data, for callers that only have a schema
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    pub dtype: DataType,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, dtype: DataType) -> Self {
        Self {
            name: name.into(),
            dtype,
        }
    }
}

impl TypedColumn for ColumnInfo {
    fn element_kind(&self) -> ElementKind {
        ElementKind::from_dtype(&self.dtype)
    }

    fn column_name(&self) -> Option<&str> {
        crate::naming::display_name(&self.name)
    }
}
