//! Chart description and kind dispatch
//!
//! A `Chart` is everything a chart builder needs to draw one plot: the axis
//! configuration, the chart kind, the data, which columns play which role, and
//! the axis labels. `Chart::render` replays it onto a [`ChartBuilder`], picking
//! the builder method for the chart kind from a static dispatch table.

use polars::prelude::DataFrame;

use super::axis::{AxisType, ValueAxisType};
use super::kind::ChartKind;
use crate::writer::ChartBuilder;
use crate::{ChartframeError, Result};

/// Axis configuration a chart builder is created with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisConfig {
    /// Semantic type of the x axis. `None` leaves it to the builder.
    pub x_axis_type: Option<AxisType>,
    /// Semantic type of the value axis
    pub y_axis_type: ValueAxisType,
    /// Start with empty axis titles instead of builder defaults
    pub blank_labels: bool,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            x_axis_type: None,
            y_axis_type: ValueAxisType::Linear,
            blank_labels: true,
        }
    }
}

/// Column roles handed to the chart builder.
///
/// Table plots and sequence plots name their columns differently, and
/// distribution plots only have a values column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotColumns {
    /// x/y positions with an optional color grouping
    XY {
        x: String,
        y: String,
        color: Option<String>,
    },
    /// One categorical column and one numeric column
    CategoryValue { categorical: String, numeric: String },
    /// A single column of values
    Values { values: String },
}

impl PlotColumns {
    /// Every column referenced by these roles, in role order
    pub fn column_names(&self) -> Vec<&str> {
        match self {
            PlotColumns::XY { x, y, color } => {
                let mut names = vec![x.as_str(), y.as_str()];
                if let Some(color) = color {
                    names.push(color.as_str());
                }
                names
            }
            PlotColumns::CategoryValue {
                categorical,
                numeric,
            } => vec![categorical.as_str(), numeric.as_str()],
            PlotColumns::Values { values } => vec![values.as_str()],
        }
    }
}

/// A fully resolved chart, ready to be drawn by a [`ChartBuilder`]
#[derive(Debug, Clone)]
pub struct Chart {
    pub config: AxisConfig,
    pub kind: ChartKind,
    pub data: DataFrame,
    pub columns: PlotColumns,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

impl Chart {
    pub fn new(config: AxisConfig, kind: ChartKind, data: DataFrame, columns: PlotColumns) -> Self {
        Self {
            config,
            kind,
            data,
            columns,
            x_label: None,
            y_label: None,
        }
    }

    /// Set the x axis label
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Set the y axis label
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Check that every referenced column exists in the chart data
    pub fn validate_columns(&self) -> Result<()> {
        let available = self.data.get_column_names();
        for name in self.columns.column_names() {
            if !available.iter().any(|c| c.as_str() == name) {
                return Err(ChartframeError::ColumnNotFound(name.to_string()));
            }
        }
        Ok(())
    }

    /// Draw this chart onto a builder.
    ///
    /// Configures the builder, invokes the builder method for the chart kind,
    /// then sets the axis labels. Kinds with no entry in the dispatch table
    /// fail with `ChartframeError::UnsupportedChartKind`.
    pub fn render(&self, builder: &mut dyn ChartBuilder) -> Result<()> {
        let draw = draw_fn(&self.kind)
            .ok_or_else(|| ChartframeError::UnsupportedChartKind(self.kind.to_string()))?;

        builder.configure(&self.config)?;
        tracing::trace!(kind = %self.kind, "dispatching chart");
        draw(builder, &self.data, &self.columns)?;

        if let Some(label) = &self.x_label {
            builder.set_xaxis_label(label)?;
        }
        if let Some(label) = &self.y_label {
            builder.set_yaxis_label(label)?;
        }
        Ok(())
    }

    /// Render this chart to a Vega-Lite JSON string
    #[cfg(feature = "vegalite")]
    pub fn to_vegalite(&self) -> Result<String> {
        use crate::writer::{VegaLiteWriter, Writer};
        VegaLiteWriter::new().write(self)
    }
}

/// Builder method invoked for a chart kind
pub type DrawFn = fn(&mut dyn ChartBuilder, &DataFrame, &PlotColumns) -> Result<()>;

/// Chart kind name → builder method
pub const DISPATCH_TABLE: &[(&str, DrawFn)] = &[
    ("bar", draw_bar),
    ("line", draw_line),
    ("scatter", draw_scatter),
    ("area", draw_area),
    ("kde", draw_kde),
    ("histogram", draw_histogram),
];

/// Look up the builder method for a chart kind
pub fn draw_fn(kind: &ChartKind) -> Option<DrawFn> {
    if matches!(kind, ChartKind::Other(_)) {
        return None;
    }
    DISPATCH_TABLE
        .iter()
        .find(|(name, _)| *name == kind.name())
        .map(|(_, f)| *f)
}

fn draw_bar(b: &mut dyn ChartBuilder, data: &DataFrame, columns: &PlotColumns) -> Result<()> {
    b.bar(data, columns)
}

fn draw_line(b: &mut dyn ChartBuilder, data: &DataFrame, columns: &PlotColumns) -> Result<()> {
    b.line(data, columns)
}

fn draw_scatter(b: &mut dyn ChartBuilder, data: &DataFrame, columns: &PlotColumns) -> Result<()> {
    b.scatter(data, columns)
}

fn draw_area(b: &mut dyn ChartBuilder, data: &DataFrame, columns: &PlotColumns) -> Result<()> {
    b.area(data, columns)
}

fn draw_kde(b: &mut dyn ChartBuilder, data: &DataFrame, columns: &PlotColumns) -> Result<()> {
    b.kde(data, columns)
}

fn draw_histogram(
    b: &mut dyn ChartBuilder,
    data: &DataFrame,
    columns: &PlotColumns,
) -> Result<()> {
    b.histogram(data, columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use polars::prelude::*;

    /// Builder that records the calls it receives
    #[derive(Default)]
    struct RecordingBuilder {
        calls: Vec<String>,
        config: Option<AxisConfig>,
    }

    impl ChartBuilder for RecordingBuilder {
        fn configure(&mut self, config: &AxisConfig) -> Result<()> {
            self.config = Some(*config);
            self.calls.push("configure".to_string());
            Ok(())
        }

        fn set_xaxis_label(&mut self, label: &str) -> Result<()> {
            self.calls.push(format!("xlabel:{}", label));
            Ok(())
        }

        fn set_yaxis_label(&mut self, label: &str) -> Result<()> {
            self.calls.push(format!("ylabel:{}", label));
            Ok(())
        }

        fn bar(&mut self, _data: &DataFrame, columns: &PlotColumns) -> Result<()> {
            self.calls.push(format!("bar:{}", columns.column_names().join(",")));
            Ok(())
        }

        fn line(&mut self, _data: &DataFrame, columns: &PlotColumns) -> Result<()> {
            self.calls.push(format!("line:{}", columns.column_names().join(",")));
            Ok(())
        }
        // No scatter/area/kde/histogram: those fall back to MissingCapability
    }

    fn sample_chart(kind: ChartKind) -> Chart {
        let df = df! {
            "x" => &[1, 2, 3],
            "y" => &[2.0, 4.0, 8.0],
        }
        .unwrap();
        Chart::new(
            AxisConfig {
                x_axis_type: Some(AxisType::Linear),
                ..Default::default()
            },
            kind,
            df,
            PlotColumns::XY {
                x: "x".to_string(),
                y: "y".to_string(),
                color: None,
            },
        )
    }

    #[test]
    fn test_render_call_order() {
        let chart = sample_chart(ChartKind::Line)
            .with_x_label("x")
            .with_y_label("y");
        let mut builder = RecordingBuilder::default();
        chart.render(&mut builder).unwrap();

        assert_eq!(
            builder.calls,
            vec!["configure", "line:x,y", "xlabel:x", "ylabel:y"]
        );
        assert_eq!(
            builder.config.unwrap().x_axis_type,
            Some(AxisType::Linear)
        );
    }

    #[test]
    fn test_render_skips_missing_labels() {
        let chart = sample_chart(ChartKind::Bar);
        let mut builder = RecordingBuilder::default();
        chart.render(&mut builder).unwrap();
        assert_eq!(builder.calls, vec!["configure", "bar:x,y"]);
    }

    #[test]
    fn test_unknown_kind_fails_before_builder_is_touched() {
        let chart = sample_chart(ChartKind::Other("sankey".to_string()));
        let mut builder = RecordingBuilder::default();
        let err = chart.render(&mut builder).unwrap_err();

        assert!(matches!(err, ChartframeError::UnsupportedChartKind(ref k) if k == "sankey"));
        assert!(builder.calls.is_empty());
    }

    #[test]
    fn test_other_kind_with_builtin_name_is_not_dispatched() {
        // Only parsed kinds dispatch; a hand-built Other never aliases a builtin
        assert!(draw_fn(&ChartKind::Other("bar".to_string())).is_none());
        assert!(draw_fn(&ChartKind::Bar).is_some());
    }

    #[test]
    fn test_missing_capability() {
        let chart = sample_chart(ChartKind::DensityCurve);
        let mut builder = RecordingBuilder::default();
        let err = chart.render(&mut builder).unwrap_err();
        assert!(matches!(
            err,
            ChartframeError::MissingCapability(ChartKind::DensityCurve)
        ));
    }

    #[test]
    fn test_dispatch_table_covers_builtin_kinds() {
        for kind in [
            ChartKind::Bar,
            ChartKind::Line,
            ChartKind::Scatter,
            ChartKind::Area,
            ChartKind::DensityCurve,
            ChartKind::Histogram,
        ] {
            assert!(draw_fn(&kind).is_some(), "no dispatch entry for {}", kind);
        }
    }

    #[test]
    fn test_plot_columns_names() {
        let xy = PlotColumns::XY {
            x: "a".to_string(),
            y: "b".to_string(),
            color: Some("c".to_string()),
        };
        assert_eq!(xy.column_names(), vec!["a", "b", "c"]);

        let cv = PlotColumns::CategoryValue {
            categorical: "index".to_string(),
            numeric: "value".to_string(),
        };
        assert_eq!(cv.column_names(), vec!["index", "value"]);
    }

    #[test]
    fn test_validate_columns() {
        let chart = sample_chart(ChartKind::Line);
        assert!(chart.validate_columns().is_ok());

        let mut broken = sample_chart(ChartKind::Line);
        broken.columns = PlotColumns::Values {
            values: "missing".to_string(),
        };
        assert!(matches!(
            broken.validate_columns(),
            Err(ChartframeError::ColumnNotFound(ref c)) if c == "missing"
        ));
    }
}
