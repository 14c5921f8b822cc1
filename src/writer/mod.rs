//! Chart builder and output writer abstractions for chartframe
//!
//! Drawing is delegated to a chart-building collaborator. The writer module
//! defines the two seams involved:
//!
//! # Architecture
//!
//! - `ChartBuilder`: the collaborator a [`Chart`] is replayed onto. It is
//!   configured with the axis types, receives one draw call for the chart
//!   kind, then the axis labels.
//! - `Writer`: turns a [`Chart`] into a finished output (JSON, bytes, ...),
//!   usually by driving a `ChartBuilder` of its own.
//!
//! # Example
//!
//! ```rust,ignore
//! use chartframe::prelude::*;
//! use chartframe::writer::VegaLiteWriter;
//!
//! let chart = df.ch_plot("date", "revenue", None, None)?;
//! let json = VegaLiteWriter::new().write(&chart)?;
//! println!("{}", json);
//! ```

use crate::plot::{AxisConfig, Chart, ChartKind, PlotColumns};
use crate::{ChartframeError, DataFrame, Result};

#[cfg(feature = "vegalite")]
pub mod vegalite;

#[cfg(feature = "vegalite")]
pub use vegalite::{VegaLiteBuilder, VegaLiteWriter};

/// Chart-building collaborator
///
/// One method per chart family. Families a builder cannot draw keep the
/// default implementation, which fails with
/// `ChartframeError::MissingCapability` when the chart is dispatched.
pub trait ChartBuilder {
    /// Set up axis types and label defaults before anything is drawn
    fn configure(&mut self, config: &AxisConfig) -> Result<()>;

    /// Set the x axis title
    fn set_xaxis_label(&mut self, label: &str) -> Result<()>;

    /// Set the y axis title
    fn set_yaxis_label(&mut self, label: &str) -> Result<()>;

    fn bar(&mut self, _data: &DataFrame, _columns: &PlotColumns) -> Result<()> {
        Err(ChartframeError::MissingCapability(ChartKind::Bar))
    }

    fn line(&mut self, _data: &DataFrame, _columns: &PlotColumns) -> Result<()> {
        Err(ChartframeError::MissingCapability(ChartKind::Line))
    }

    fn scatter(&mut self, _data: &DataFrame, _columns: &PlotColumns) -> Result<()> {
        Err(ChartframeError::MissingCapability(ChartKind::Scatter))
    }

    fn area(&mut self, _data: &DataFrame, _columns: &PlotColumns) -> Result<()> {
        Err(ChartframeError::MissingCapability(ChartKind::Area))
    }

    /// Kernel density estimate of a values column
    fn kde(&mut self, _data: &DataFrame, _columns: &PlotColumns) -> Result<()> {
        Err(ChartframeError::MissingCapability(ChartKind::DensityCurve))
    }

    fn histogram(&mut self, _data: &DataFrame, _columns: &PlotColumns) -> Result<()> {
        Err(ChartframeError::MissingCapability(ChartKind::Histogram))
    }
}

/// Trait for chart output writers
///
/// Writers take a resolved [`Chart`] and produce formatted output.
///
/// # Associated Types
///
/// * `Output` - The type returned by `write()`. Use `String` for text output,
///   `Vec<u8>` for binary, etc.
pub trait Writer {
    /// The output type produced by this writer.
    type Output;

    /// Generate output for a chart
    ///
    /// # Errors
    ///
    /// Returns `ChartframeError::WriterError` if:
    /// - The chart references columns missing from its data
    /// - Output generation fails
    ///
    /// Returns `ChartframeError::UnsupportedChartKind` or
    /// `ChartframeError::MissingCapability` if the chart kind cannot be drawn.
    fn write(&self, chart: &Chart) -> Result<Self::Output>;

    /// Validate that a chart is compatible with this writer
    ///
    /// Checks whether the chart can be written without generating output.
    fn validate(&self, chart: &Chart) -> Result<()>;
}
