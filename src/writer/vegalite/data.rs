//! DataFrame to JSON conversion utilities for the Vega-Lite writer
//!
//! Only the columns a chart references are emitted. Numbers stay numbers,
//! booleans stay booleans and nulls stay null. Any other column type (dates,
//! categoricals, ...) is cast to its string form once per column before rows
//! are emitted.

use crate::plot::PlotColumns;
use crate::{ChartframeError, DataFrame, Result};
use polars::prelude::*;
use serde_json::{json, Map, Value};

/// Convert the plotted columns of a Polars DataFrame to Vega-Lite data values
/// (array of objects)
pub(super) fn dataframe_to_values(df: &DataFrame, plotted: &PlotColumns) -> Result<Vec<Value>> {
    let mut names: Vec<&str> = Vec::new();
    for name in plotted.column_names() {
        if !names.contains(&name) {
            names.push(name);
        }
    }

    let columns = names
        .into_iter()
        .map(|name| {
            let column = df.column(name).map_err(|e| {
                ChartframeError::WriterError(format!("Column '{}' not found: {}", name, e))
            })?;
            json_ready_series(column.as_materialized_series())
        })
        .collect::<Result<Vec<_>>>()?;

    let mut values = Vec::with_capacity(df.height());
    for row_idx in 0..df.height() {
        let mut row_obj = Map::new();
        for series in &columns {
            let value = series_value_at(series, row_idx)?;
            row_obj.insert(series.name().to_string(), value);
        }
        values.push(Value::Object(row_obj));
    }

    Ok(values)
}

/// Cast columns without a native JSON representation to strings
fn json_ready_series(series: &Series) -> Result<Series> {
    use DataType::*;

    match series.dtype() {
        Int8 | Int16 | Int32 | Int64 | UInt8 | UInt16 | UInt32 | UInt64 | Float32 | Float64
        | Boolean | String => Ok(series.clone()),
        _ => series.cast(&DataType::String).map_err(|e| {
            ChartframeError::DataError(format!(
                "Failed to convert column '{}' to strings: {}",
                series.name(),
                e
            ))
        }),
    }
}

fn cast_error(target: &str, e: PolarsError) -> ChartframeError {
    ChartframeError::WriterError(format!("Failed to cast to {}: {}", target, e))
}

/// Get a single value from a series at a given index as JSON Value
fn series_value_at(series: &Series, idx: usize) -> Result<Value> {
    use DataType::*;

    let value = match series.dtype() {
        Int8 => series.i8().map_err(|e| cast_error("i8", e))?.get(idx).map(|v| json!(v)),
        Int16 => series.i16().map_err(|e| cast_error("i16", e))?.get(idx).map(|v| json!(v)),
        Int32 => series.i32().map_err(|e| cast_error("i32", e))?.get(idx).map(|v| json!(v)),
        Int64 => series.i64().map_err(|e| cast_error("i64", e))?.get(idx).map(|v| json!(v)),
        UInt8 => series.u8().map_err(|e| cast_error("u8", e))?.get(idx).map(|v| json!(v)),
        UInt16 => series.u16().map_err(|e| cast_error("u16", e))?.get(idx).map(|v| json!(v)),
        UInt32 => series.u32().map_err(|e| cast_error("u32", e))?.get(idx).map(|v| json!(v)),
        UInt64 => series.u64().map_err(|e| cast_error("u64", e))?.get(idx).map(|v| json!(v)),
        Float32 => series.f32().map_err(|e| cast_error("f32", e))?.get(idx).map(|v| json!(v)),
        Float64 => series.f64().map_err(|e| cast_error("f64", e))?.get(idx).map(|v| json!(v)),
        Boolean => series.bool().map_err(|e| cast_error("bool", e))?.get(idx).map(|v| json!(v)),
        // Strings stay strings, even when they look numeric: a categorical
        // axis of "1", "2", "3" must not turn into numbers.
        String => series.str().map_err(|e| cast_error("string", e))?.get(idx).map(|v| json!(v)),
        other => {
            return Err(ChartframeError::WriterError(format!(
                "Column '{}' has unconverted type {}",
                series.name(),
                other
            )))
        }
    };

    Ok(value.unwrap_or(Value::Null))
}
