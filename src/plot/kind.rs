//! Chart kind selection
//!
//! A chart kind is either supplied explicitly by the caller or derived from
//! the axis type of the x column. Distribution plots skip inference entirely
//! and always use a fixed kind.
//!
//! # Example
//!
//! ```rust,ignore
//! use chartframe::plot::{default_chart_kind, AxisType, ChartKind, PlotVariant};
//!
//! assert_eq!(default_chart_kind(AxisType::Categorical, PlotVariant::Table), ChartKind::Bar);
//! assert_eq!(default_chart_kind(AxisType::Linear, PlotVariant::Sequence), ChartKind::Line);
//! ```

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

use super::axis::{classify_axis, AxisType};
use super::column::TypedColumn;
use crate::Result;

/// Chart family to draw.
///
/// Explicit kinds that do not name a known family are kept as `Other` and
/// forwarded untouched. Whether they can be drawn is decided when the chart
/// is dispatched onto a builder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Line,
    Scatter,
    Area,
    /// Kernel density estimate curve
    DensityCurve,
    Histogram,
    /// Caller-supplied kind with no built-in meaning
    Other(String),
}

impl ChartKind {
    /// Parse a kind name.
    ///
    /// Only exact builder names are recognized. Anything else, including case
    /// variants and padded names, becomes `ChartKind::Other` with the text as
    /// given.
    pub fn from_name(name: &str) -> Self {
        match name {
            "bar" => ChartKind::Bar,
            "line" => ChartKind::Line,
            "scatter" => ChartKind::Scatter,
            "area" => ChartKind::Area,
            "kde" => ChartKind::DensityCurve,
            "histogram" => ChartKind::Histogram,
            _ => ChartKind::Other(name.to_string()),
        }
    }

    /// Canonical name of the kind, as understood by chart builders
    pub fn name(&self) -> &str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Area => "area",
            ChartKind::DensityCurve => "kde",
            ChartKind::Histogram => "histogram",
            ChartKind::Other(name) => name,
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ChartKind {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ChartKind::from_name(s))
    }
}

impl From<&str> for ChartKind {
    fn from(name: &str) -> Self {
        ChartKind::from_name(name)
    }
}

impl Serialize for ChartKind {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ChartKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(ChartKind::from_name(&name))
    }
}

/// Call shape of a relational plot.
///
/// The two variants hand different column conventions to the chart builder.
/// They do not change which kind is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotVariant {
    /// Two or three columns of a data frame (x, y, optional color)
    Table,
    /// A single series plotted against its index
    Sequence,
}

/// Distribution plots with a fixed chart kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    Density,
    Histogram,
}

/// Default chart kind for an axis type: bar for categorical, line for linear.
pub fn default_chart_kind(axis_type: AxisType, variant: PlotVariant) -> ChartKind {
    let kind = match axis_type {
        AxisType::Categorical => ChartKind::Bar,
        AxisType::Linear => ChartKind::Line,
    };
    tracing::debug!(%axis_type, ?variant, %kind, "default chart kind");
    kind
}

/// Chart kind for a distribution plot. The column is never inspected.
pub fn distribution_chart_kind(distribution: Distribution) -> ChartKind {
    match distribution {
        Distribution::Density => ChartKind::DensityCurve,
        Distribution::Histogram => ChartKind::Histogram,
    }
}

/// Resolve the chart kind for a column.
///
/// An explicit kind is returned unchanged without looking at the column.
/// Otherwise the column is classified and the default kind for its axis type
/// is returned.
pub fn resolve<C: TypedColumn + ?Sized>(
    column: &C,
    explicit_kind: Option<ChartKind>,
) -> Result<ChartKind> {
    if let Some(kind) = explicit_kind {
        tracing::debug!(%kind, "using explicit chart kind");
        return Ok(kind);
    }

    let axis_type = classify_axis(column)?;
    Ok(default_chart_kind(axis_type, PlotVariant::Table))
}
