//! Plot types for chartframe
//!
//! This module contains the decision logic that turns a typed column into an
//! axis type and a chart kind, plus the `Chart` description that is handed to
//! a chart builder.
//!
//! # Architecture
//!
//! The module is organized into submodules:
//!
//! - `column` - The `TypedColumn` input boundary and `ElementKind`
//! - `axis` - `AxisType` and axis classification
//! - `kind` - `ChartKind`, default kind selection and explicit overrides
//! - `chart` - The `Chart` struct, column roles and kind dispatch

pub mod axis;
pub mod chart;
pub mod column;
pub mod kind;

// Re-export all types for convenience
pub use axis::*;
pub use chart::*;
pub use column::*;
pub use kind::*;
