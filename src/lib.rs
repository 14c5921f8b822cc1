/*!
# chartframe - Plotting helpers for Polars data

Attaches chart helpers to Polars `DataFrame` and `Series` values. Each helper
detects the axis type of the x column, picks a default chart kind, and hands
the result to a chart-building collaborator.

## Example

```rust,ignore
use chartframe::prelude::*;
use polars::prelude::*;

let df = df! {
    "region" => &["north", "south", "east"],
    "revenue" => &[120.0, 95.5, 143.2],
}?;

// `region` is text, so the x axis is categorical and the chart is a bar chart
let chart = df.ch_plot("region", "revenue", None, None)?;
assert_eq!(chart.kind, ChartKind::Bar);

let json = chart.to_vegalite()?;
```

## Architecture

- **Axis inference** → element kind of a column mapped to `linear` / `categorical`
- **Kind selection** → explicit kind wins, otherwise bar for categorical, line for linear
- **Distribution plots** → fixed `kde` / `histogram` kinds, no inference
- **Output** → a [`Chart`] dispatched onto a pluggable [`writer::ChartBuilder`]

## Core Components

- [`plot`] - Axis types, chart kinds, and the `Chart` description
- [`frame`] - Extension traits for `DataFrame` and `Series`
- [`writer`] - Chart builder and output writer abstractions
*/

pub mod frame;
pub mod naming;
pub mod plot;
pub mod writer;

// Re-export key types for convenience
pub use frame::{DataFramePlotExt, SeriesPlotExt};
pub use plot::{
    classify_axis, default_chart_kind, distribution_chart_kind, resolve, AxisConfig, AxisType,
    Chart, ChartKind, ColumnInfo, Distribution, ElementKind, PlotColumns, PlotVariant,
    TypedColumn, ValueAxisType,
};

// DataFrame abstraction (wraps Polars)
pub use polars::prelude::{DataFrame, Series};

/// Commonly used traits and types
pub mod prelude {
    pub use crate::frame::{DataFramePlotExt, SeriesPlotExt};
    pub use crate::plot::{AxisType, Chart, ChartKind, PlotColumns, TypedColumn};
    pub use crate::writer::{ChartBuilder, Writer};
}

/// Main library error type
#[derive(thiserror::Error, Debug)]
pub enum ChartframeError {
    #[error("unknown axis type: {0}")]
    UnsupportedAxisType(String),

    #[error("Unsupported chart kind: {0}")]
    UnsupportedChartKind(String),

    #[error("Chart builder cannot draw '{0}' charts")]
    MissingCapability(ChartKind),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Index has {index} rows but the series has {values}")]
    LengthMismatch { index: usize, values: usize },

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Output generation error: {0}")]
    WriterError(String),
}

pub type Result<T> = std::result::Result<T, ChartframeError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
#[cfg(feature = "vegalite")]
mod integration_tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_end_to_end_categorical_frame() {
        let df = df! {
            "category" => &["A", "B", "C"],
            "value" => &[10, 20, 30],
        }
        .unwrap();

        let chart = df.ch_plot("category", "value", None, None).unwrap();
        let json = chart.to_vegalite().unwrap();
        let vl_spec: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(vl_spec["mark"]["type"], "bar");
        assert_eq!(vl_spec["encoding"]["x"]["type"], "nominal");
        assert_eq!(vl_spec["encoding"]["y"]["type"], "quantitative");
        assert_eq!(vl_spec["encoding"]["x"]["title"], "category");
        assert_eq!(vl_spec["data"]["values"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_end_to_end_numeric_series() {
        let s = Series::new("temperature".into(), &[20.5, 21.0, 19.8, 22.3]);

        let chart = s.ch_plot().unwrap();
        let json = chart.to_vegalite().unwrap();
        let vl_spec: serde_json::Value = serde_json::from_str(&json).unwrap();

        // Default row-number index is numeric, so this is a line chart
        assert_eq!(vl_spec["mark"]["type"], "line");
        assert_eq!(vl_spec["encoding"]["x"]["field"], naming::INDEX_COLUMN);
        assert_eq!(vl_spec["encoding"]["x"]["type"], "quantitative");
        assert_eq!(vl_spec["encoding"]["y"]["field"], naming::VALUE_COLUMN);
        assert_eq!(vl_spec["encoding"]["y"]["title"], "temperature");
        // No index name, so the x title stays blank
        assert_eq!(vl_spec["encoding"]["x"]["title"], serde_json::Value::Null);
    }

    #[test]
    fn test_end_to_end_kde_of_density_named_series() {
        let s = Series::new("density".into(), &[1.0, 2.0, 3.0]);

        let json = s.ch_kde().unwrap().to_vegalite().unwrap();
        let vl_spec: serde_json::Value = serde_json::from_str(&json).unwrap();

        let x_field = &vl_spec["encoding"]["x"]["field"];
        let y_field = &vl_spec["encoding"]["y"]["field"];
        assert_eq!(x_field, "density");
        assert_ne!(x_field, y_field);
        assert_eq!(vl_spec["transform"][0]["as"][1], *y_field);
    }

    #[test]
    fn test_end_to_end_unsupported_axis_type() {
        let df = df! {
            "flag" => &[true, false],
            "value" => &[1.0, 2.0],
        }
        .unwrap();

        let err = df.ch_plot("flag", "value", None, None).unwrap_err();
        assert!(matches!(err, ChartframeError::UnsupportedAxisType(_)));
        assert_eq!(err.to_string(), "unknown axis type: bool");
    }

    #[test]
    fn test_end_to_end_unknown_kind_fails_at_dispatch() {
        let df = df! {
            "x" => &[1, 2, 3],
            "y" => &[4, 5, 6],
        }
        .unwrap();

        // Building the chart succeeds: the explicit kind is forwarded untouched
        let chart = df
            .ch_plot("x", "y", None, Some(ChartKind::from_name("sunburst")))
            .unwrap();
        assert_eq!(chart.kind, ChartKind::Other("sunburst".to_string()));

        // Dispatch onto the collaborator is where it fails
        let err = chart.to_vegalite().unwrap_err();
        assert!(matches!(err, ChartframeError::UnsupportedChartKind(ref k) if k == "sunburst"));
    }
}
