//! Axis type inference
//!
//! Maps the element kind of a column onto the semantic type of the axis that
//! will display it. The mapping is a narrow whitelist: numbers are linear,
//! text is categorical, and everything else is rejected so callers normalize
//! exotic types before plotting.

use serde::{Deserialize, Serialize};

use super::column::{ElementKind, TypedColumn};
use crate::{ChartframeError, Result};

/// Semantic type of an x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    /// Continuous numeric range
    Linear,
    /// Set of discrete labels
    Categorical,
}

impl AxisType {
    pub fn is_categorical(&self) -> bool {
        matches!(self, AxisType::Categorical)
    }
}

impl std::fmt::Display for AxisType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AxisType::Linear => "linear",
            AxisType::Categorical => "categorical",
        };
        write!(f, "{}", s)
    }
}

/// Semantic type of the value (y) axis of a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueAxisType {
    #[default]
    Linear,
    /// Probability density, used by distribution plots
    Density,
}

impl std::fmt::Display for ValueAxisType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ValueAxisType::Linear => "linear",
            ValueAxisType::Density => "density",
        };
        write!(f, "{}", s)
    }
}

/// Classify the axis type of a column from its element kind.
///
/// - Integer, Float → `Linear`
/// - Text → `Categorical`
/// - anything else → `ChartframeError::UnsupportedAxisType` naming the kind
pub fn classify_axis<C: TypedColumn + ?Sized>(column: &C) -> Result<AxisType> {
    let kind = column.element_kind();
    let axis_type = match kind {
        ElementKind::Integer | ElementKind::Float => AxisType::Linear,
        ElementKind::Text => AxisType::Categorical,
        ElementKind::Other(name) => {
            tracing::debug!(
                column = column.column_name().unwrap_or_default(),
                kind = %name.as_str(),
                "no axis type for element kind"
            );
            return Err(ChartframeError::UnsupportedAxisType(name));
        }
    };

    tracing::debug!(
        column = column.column_name().unwrap_or_default(),
        %axis_type,
        "classified axis"
    );
    Ok(axis_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::ColumnInfo;
    use polars::prelude::*;

    #[test]
    fn test_numeric_columns_are_linear() {
        let ints = Series::new("n".into(), &[1i64, 2, 3]);
        let small_ints = Series::new("n".into(), &[1i32, 2, 3]);
        let unsigned = Series::new("n".into(), &[1u64, 2, 3]);
        let floats = Series::new("f".into(), &[0.5f64, 1.5]);
        let small_floats = Series::new("f".into(), &[0.5f32, 1.5]);

        assert_eq!(classify_axis(&ints).unwrap(), AxisType::Linear);
        assert_eq!(classify_axis(&small_ints).unwrap(), AxisType::Linear);
        assert_eq!(classify_axis(&unsigned).unwrap(), AxisType::Linear);
        assert_eq!(classify_axis(&floats).unwrap(), AxisType::Linear);
        assert_eq!(classify_axis(&small_floats).unwrap(), AxisType::Linear);
    }

    #[test]
    fn test_text_columns_are_categorical() {
        let labels = Series::new("label".into(), &["a", "b", "c"]);
        assert_eq!(classify_axis(&labels).unwrap(), AxisType::Categorical);

        // Nulls do not change the declared kind
        let with_nulls = Series::new("label".into(), &[Some("a"), None, Some("c")]);
        assert_eq!(classify_axis(&with_nulls).unwrap(), AxisType::Categorical);
    }

    #[test]
    fn test_empty_columns_use_declared_kind() {
        let empty: Vec<f64> = vec![];
        let s = Series::new("empty".into(), empty);
        assert_eq!(classify_axis(&s).unwrap(), AxisType::Linear);
    }

    #[test]
    fn test_temporal_column_is_unsupported() {
        let dates = Series::new("day".into(), &[19_000i32, 19_001])
            .cast(&DataType::Date)
            .unwrap();

        let err = classify_axis(&dates).unwrap_err();
        match err {
            ChartframeError::UnsupportedAxisType(name) => assert_eq!(name, "date"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_boolean_column_is_unsupported() {
        let flags = Series::new("flag".into(), &[true, false]);
        let err = classify_axis(&flags).unwrap_err();
        assert_eq!(err.to_string(), "unknown axis type: bool");
    }

    #[test]
    fn test_schema_only_column() {
        let info = ColumnInfo::new("ts", DataType::Time);
        assert!(matches!(
            classify_axis(&info),
            Err(ChartframeError::UnsupportedAxisType(ref name)) if name == "time"
        ));

        let info = ColumnInfo::new("count", DataType::UInt32);
        assert_eq!(classify_axis(&info).unwrap(), AxisType::Linear);
    }

    #[test]
    fn test_axis_type_display() {
        assert_eq!(AxisType::Linear.to_string(), "linear");
        assert_eq!(AxisType::Categorical.to_string(), "categorical");
        assert_eq!(ValueAxisType::Density.to_string(), "density");
        assert_eq!(ValueAxisType::default(), ValueAxisType::Linear);
    }

    #[test]
    fn test_axis_type_serde() {
        assert_eq!(
            serde_json::to_string(&AxisType::Categorical).unwrap(),
            "\"categorical\""
        );
        let parsed: AxisType = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(parsed, AxisType::Linear);
    }
}
