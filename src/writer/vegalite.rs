//! Vega-Lite JSON writer implementation
//!
//! Turns a chartframe [`Chart`] into a single-view Vega-Lite specification.
//!
//! # Mapping Strategy
//!
//! - Chart kind → Vega-Lite mark type (`kde` → `area` over a density transform,
//!   `histogram` → binned `bar` with a count aggregate)
//! - Column roles → `x` / `y` / `color` encoding channels
//! - Axis type → encoding field type (`linear` → quantitative, `categorical` → nominal)
//! - Polars DataFrame → inline `data.values`
//!
//! # Example
//!
//! ```rust,ignore
//! use chartframe::writer::{Writer, VegaLiteWriter};
//!
//! let writer = VegaLiteWriter::new();
//! let vega_json = writer.write(&chart)?;
//! // Can be rendered in browser with vega-embed
//! ```

mod data;

use crate::naming;
use crate::plot::{draw_fn, AxisConfig, AxisType, Chart, ChartKind, PlotColumns};
use crate::writer::{ChartBuilder, Writer};
use crate::{ChartframeError, DataFrame, Result};
use serde_json::{json, Map, Value};

const VEGALITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v6.json";

/// Vega-Lite chart builder
///
/// Accumulates one chart's mark, encoding, transforms, and data, then
/// assembles them in [`VegaLiteBuilder::finish`].
#[derive(Debug, Clone)]
pub struct VegaLiteBuilder {
    config: AxisConfig,
    values: Vec<Value>,
    mark: Option<Value>,
    encoding: Map<String, Value>,
    transform: Vec<Value>,
    x_title: Option<String>,
    y_title: Option<String>,
}

impl VegaLiteBuilder {
    pub fn new() -> Self {
        Self {
            config: AxisConfig::default(),
            values: Vec::new(),
            mark: None,
            encoding: Map::new(),
            transform: Vec::new(),
            x_title: None,
            y_title: None,
        }
    }

    /// Assemble the Vega-Lite specification
    ///
    /// Fails if nothing has been drawn.
    pub fn finish(self) -> Result<Value> {
        let mark = self.mark.ok_or_else(|| {
            ChartframeError::WriterError("No chart has been drawn".to_string())
        })?;

        let mut encoding = self.encoding;
        for (channel, title) in [("x", self.x_title), ("y", self.y_title)] {
            let Some(Value::Object(channel_obj)) = encoding.get_mut(channel) else {
                continue;
            };
            match title {
                Some(title) => {
                    channel_obj.insert("title".to_string(), json!(title));
                }
                // A null title hides the axis title instead of showing the field name
                None if self.config.blank_labels => {
                    channel_obj.insert("title".to_string(), Value::Null);
                }
                None => {}
            }
        }

        let mut vl_spec = json!({
            "$schema": VEGALITE_SCHEMA,
            "data": {"values": self.values},
            "mark": mark,
            "encoding": encoding,
        });
        if !self.transform.is_empty() {
            vl_spec["transform"] = Value::Array(self.transform);
        }
        Ok(vl_spec)
    }

    /// Field type of the x channel, from the configured axis type
    fn x_field_type(&self) -> &'static str {
        match self.config.x_axis_type {
            Some(AxisType::Categorical) => "nominal",
            Some(AxisType::Linear) | None => "quantitative",
        }
    }

    fn require_columns(data: &DataFrame, columns: &PlotColumns) -> Result<()> {
        let available = data.get_column_names();
        for name in columns.column_names() {
            if !available.iter().any(|c| c.as_str() == name) {
                return Err(ChartframeError::WriterError(format!(
                    "Column '{}' not found in chart data",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Draw an x/y chart with the given mark type
    fn relational(
        &mut self,
        kind: ChartKind,
        mark_type: &str,
        data: &DataFrame,
        columns: &PlotColumns,
    ) -> Result<()> {
        Self::require_columns(data, columns)?;

        let mut encoding = Map::new();
        match columns {
            PlotColumns::XY { x, y, color } => {
                encoding.insert(
                    "x".to_string(),
                    json!({"field": x, "type": self.x_field_type()}),
                );
                encoding.insert("y".to_string(), json!({"field": y, "type": "quantitative"}));
                if let Some(color) = color {
                    encoding.insert(
                        "color".to_string(),
                        json!({"field": color, "type": "nominal"}),
                    );
                }
            }
            PlotColumns::CategoryValue {
                categorical,
                numeric,
            } => {
                encoding.insert(
                    "x".to_string(),
                    json!({"field": categorical, "type": "nominal"}),
                );
                encoding.insert(
                    "y".to_string(),
                    json!({"field": numeric, "type": "quantitative"}),
                );
            }
            PlotColumns::Values { values } => {
                return Err(ChartframeError::WriterError(format!(
                    "'{}' charts need x and y columns, got only '{}'",
                    kind, values
                )));
            }
        }

        self.values = data::dataframe_to_values(data, columns)?;
        self.encoding = encoding;
        self.transform.clear();
        self.mark = Some(json!({"type": mark_type, "clip": true}));
        Ok(())
    }

    /// Column holding the values of a distribution plot
    fn distribution_column(columns: &PlotColumns) -> &str {
        match columns {
            PlotColumns::Values { values } => values,
            PlotColumns::XY { x, .. } => x,
            PlotColumns::CategoryValue { numeric, .. } => numeric,
        }
    }
}

impl Default for VegaLiteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartBuilder for VegaLiteBuilder {
    fn configure(&mut self, config: &AxisConfig) -> Result<()> {
        self.config = *config;
        Ok(())
    }

    fn set_xaxis_label(&mut self, label: &str) -> Result<()> {
        self.x_title = Some(label.to_string());
        Ok(())
    }

    fn set_yaxis_label(&mut self, label: &str) -> Result<()> {
        self.y_title = Some(label.to_string());
        Ok(())
    }

    fn bar(&mut self, data: &DataFrame, columns: &PlotColumns) -> Result<()> {
        self.relational(ChartKind::Bar, "bar", data, columns)
    }

    fn line(&mut self, data: &DataFrame, columns: &PlotColumns) -> Result<()> {
        self.relational(ChartKind::Line, "line", data, columns)
    }

    fn scatter(&mut self, data: &DataFrame, columns: &PlotColumns) -> Result<()> {
        self.relational(ChartKind::Scatter, "point", data, columns)
    }

    fn area(&mut self, data: &DataFrame, columns: &PlotColumns) -> Result<()> {
        self.relational(ChartKind::Area, "area", data, columns)
    }

    fn kde(&mut self, data: &DataFrame, columns: &PlotColumns) -> Result<()> {
        Self::require_columns(data, columns)?;
        let field = Self::distribution_column(columns);
        let density = naming::density_column(field);

        self.values = data::dataframe_to_values(data, columns)?;
        self.transform = vec![json!({
            "density": field,
            "as": [field, density],
        })];
        self.encoding = Map::new();
        self.encoding.insert(
            "x".to_string(),
            json!({"field": field, "type": "quantitative"}),
        );
        self.encoding.insert(
            "y".to_string(),
            json!({"field": density, "type": "quantitative"}),
        );
        self.mark = Some(json!({"type": "area", "clip": true}));
        Ok(())
    }

    fn histogram(&mut self, data: &DataFrame, columns: &PlotColumns) -> Result<()> {
        Self::require_columns(data, columns)?;
        let field = Self::distribution_column(columns);

        self.values = data::dataframe_to_values(data, columns)?;
        self.transform.clear();
        self.encoding = Map::new();
        self.encoding.insert(
            "x".to_string(),
            json!({"field": field, "bin": true, "type": "quantitative"}),
        );
        self.encoding.insert(
            "y".to_string(),
            json!({"aggregate": "count", "type": "quantitative"}),
        );
        self.mark = Some(json!({"type": "bar", "clip": true}));
        Ok(())
    }
}

/// Vega-Lite JSON writer
///
/// Generates Vega-Lite v6 specifications from charts.
pub struct VegaLiteWriter {
    /// Emit indented JSON
    pretty: bool,
}

impl VegaLiteWriter {
    /// Create a new Vega-Lite writer with default settings
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Emit compact single-line JSON
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Build the Vega-Lite specification as a JSON value
    pub fn to_value(&self, chart: &Chart) -> Result<Value> {
        self.validate(chart)?;
        let mut builder = VegaLiteBuilder::new();
        chart.render(&mut builder)?;
        builder.finish()
    }
}

impl Default for VegaLiteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for VegaLiteWriter {
    type Output = String;

    fn write(&self, chart: &Chart) -> Result<String> {
        let vl_spec = self.to_value(chart)?;
        let json = if self.pretty {
            serde_json::to_string_pretty(&vl_spec)
        } else {
            serde_json::to_string(&vl_spec)
        };
        json.map_err(|e| ChartframeError::WriterError(format!("Failed to serialize JSON: {}", e)))
    }

    fn validate(&self, chart: &Chart) -> Result<()> {
        chart
            .validate_columns()
            .map_err(|e| ChartframeError::WriterError(e.to_string()))?;

        if draw_fn(&chart.kind).is_none() {
            return Err(ChartframeError::UnsupportedChartKind(chart.kind.to_string()));
        }
        Ok(())
    }
}
