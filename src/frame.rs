//! Plotting helpers for Polars `DataFrame` and `Series`
//!
//! Bring the extension traits into scope to call the helpers as methods:
//!
//! ```rust,ignore
//! use chartframe::{DataFramePlotExt, SeriesPlotExt};
//!
//! let chart = df.ch_plot("month", "sales", Some("region"), None)?;
//! let hist = df.column("sales")?.as_materialized_series().ch_hist()?;
//! ```
//!
//! Every helper returns a [`Chart`]. Axis classification errors surface when
//! the chart is built; kinds the chart builder cannot draw surface when the
//! chart is rendered.

use polars::prelude::*;

use crate::naming;
use crate::plot::{
    classify_axis, default_chart_kind, distribution_chart_kind, AxisConfig, AxisType, Chart,
    ChartKind, Distribution, PlotColumns, PlotVariant, TypedColumn, ValueAxisType,
};
use crate::{ChartframeError, Result};

/// Table plots on a `DataFrame`
pub trait DataFramePlotExt {
    /// Plot two or three columns of the frame.
    ///
    /// The x axis type is inferred from the `x` column. Without an explicit
    /// `kind`, categorical x axes get a bar chart and linear ones a line
    /// chart. `color` optionally groups the data by a third column.
    fn ch_plot(
        &self,
        x: &str,
        y: &str,
        color: Option<&str>,
        kind: Option<ChartKind>,
    ) -> Result<Chart>;
}

impl DataFramePlotExt for DataFrame {
    fn ch_plot(
        &self,
        x: &str,
        y: &str,
        color: Option<&str>,
        kind: Option<ChartKind>,
    ) -> Result<Chart> {
        let x_column = lookup(self, x)?;
        lookup(self, y)?;
        if let Some(color) = color {
            lookup(self, color)?;
        }

        let x_axis_type = classify_axis(x_column)?;
        let kind = kind.unwrap_or_else(|| default_chart_kind(x_axis_type, PlotVariant::Table));

        tracing::debug!(x, y, ?color, %x_axis_type, %kind, "table plot");

        let config = AxisConfig {
            x_axis_type: Some(x_axis_type),
            ..Default::default()
        };
        let columns = PlotColumns::XY {
            x: x.to_string(),
            y: y.to_string(),
            color: color.map(str::to_string),
        };
        Ok(Chart::new(config, kind, self.clone(), columns)
            .with_x_label(x)
            .with_y_label(y))
    }
}

fn lookup<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| ChartframeError::ColumnNotFound(name.to_string()))
}

/// Sequence, density and histogram plots on a `Series`
pub trait SeriesPlotExt {
    /// Plot the series against its row number
    fn ch_plot(&self) -> Result<Chart>;

    /// Plot the series against an index of the same length.
    ///
    /// The x axis type is inferred from the index: a text index gives a bar
    /// chart, a numeric one a line chart.
    fn ch_plot_with_index(&self, index: &Series) -> Result<Chart>;

    /// Density curve of the series values. Never inspects the element type.
    fn ch_kde(&self) -> Result<Chart>;

    /// Histogram of the series values. Never inspects the element type.
    fn ch_hist(&self) -> Result<Chart>;
}

impl SeriesPlotExt for Series {
    fn ch_plot(&self) -> Result<Chart> {
        let row_numbers: Vec<i64> = (0..self.len() as i64).collect();
        let index = Series::new(PlSmallStr::EMPTY, row_numbers);
        self.ch_plot_with_index(&index)
    }

    fn ch_plot_with_index(&self, index: &Series) -> Result<Chart> {
        if index.len() != self.len() {
            return Err(ChartframeError::LengthMismatch {
                index: index.len(),
                values: self.len(),
            });
        }

        let x_axis_type = classify_axis(index)?;
        let kind = default_chart_kind(x_axis_type, PlotVariant::Sequence);

        let data = DataFrame::new(vec![
            index.clone().with_name(naming::INDEX_COLUMN.into()).into(),
            self.clone().with_name(naming::VALUE_COLUMN.into()).into(),
        ])
        .map_err(|e| ChartframeError::DataError(e.to_string()))?;

        let columns = match x_axis_type {
            AxisType::Categorical => PlotColumns::CategoryValue {
                categorical: naming::INDEX_COLUMN.to_string(),
                numeric: naming::VALUE_COLUMN.to_string(),
            },
            AxisType::Linear => PlotColumns::XY {
                x: naming::INDEX_COLUMN.to_string(),
                y: naming::VALUE_COLUMN.to_string(),
                color: None,
            },
        };

        tracing::debug!(
            series = self.column_name().unwrap_or_default(),
            %x_axis_type,
            %kind,
            "sequence plot"
        );

        let config = AxisConfig {
            x_axis_type: Some(x_axis_type),
            ..Default::default()
        };
        let mut chart = Chart::new(config, kind, data, columns);
        if let Some(name) = self.column_name() {
            chart = chart.with_y_label(name);
        }
        if let Some(name) = index.column_name() {
            chart = chart.with_x_label(name);
        }
        Ok(chart)
    }

    fn ch_kde(&self) -> Result<Chart> {
        distribution_chart(self, Distribution::Density)
    }

    fn ch_hist(&self) -> Result<Chart> {
        distribution_chart(self, Distribution::Histogram)
    }
}

fn distribution_chart(series: &Series, distribution: Distribution) -> Result<Chart> {
    let kind = distribution_chart_kind(distribution);
    let values = naming::values_column(series.name().as_str()).to_string();

    let data = DataFrame::new(vec![series.clone().with_name(values.as_str().into()).into()])
        .map_err(|e| ChartframeError::DataError(e.to_string()))?;

    tracing::debug!(series = %values, %kind, "distribution plot");

    let config = AxisConfig {
        x_axis_type: None,
        y_axis_type: ValueAxisType::Density,
        blank_labels: true,
    };
    Ok(Chart::new(config, kind, data, PlotColumns::Values { values }))
}
