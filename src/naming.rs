//! Centralized naming conventions for chartframe-generated column names.
//!
//! Sequence plots reshape a series and its index into a two-column frame.
//! The column names used for that frame, and for columns produced by chart
//! transforms, live here so that the call sites and the writers agree.

/// Column holding the index (x positions) of a reshaped series
pub const INDEX_COLUMN: &str = "index";

/// Column holding the values of a reshaped series. Also the name given to an
/// unnamed series when it is plotted as a distribution.
pub const VALUE_COLUMN: &str = "value";

/// Column produced by a density estimate transform
pub const DENSITY_COLUMN: &str = "density";

/// Density output column used when the values column is itself named
/// [`DENSITY_COLUMN`]
pub const DENSITY_FALLBACK_COLUMN: &str = "__chartframe_density__";

/// Treat an empty column name as no name at all.
///
/// Polars always carries a name on a `Series`, using `""` for anonymous
/// ones. Axis labels are only set for names that carry information.
///
/// # Example
/// ```
/// use chartframe::naming;
/// assert_eq!(naming::display_name("revenue"), Some("revenue"));
/// assert_eq!(naming::display_name(""), None);
/// ```
pub fn display_name(name: &str) -> Option<&str> {
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Name to use for the values column of a distribution plot
pub fn values_column(name: &str) -> &str {
    display_name(name).unwrap_or(VALUE_COLUMN)
}

/// Name of the density estimate column for a values column.
///
/// The estimate is written next to the values, so it must not reuse their name.
///
/// # Example
/// ```
/// use chartframe::naming;
/// assert_eq!(naming::density_column("height"), "density");
/// assert_eq!(naming::density_column("density"), "__chartframe_density__");
/// ```
pub fn density_column(values: &str) -> &'static str {
    if values == DENSITY_COLUMN {
        DENSITY_FALLBACK_COLUMN
    } else {
        DENSITY_COLUMN
    }
}
