// File: crates/tierstack-core/src/lib.rs
// Summary: Core library entry point; exports the dataset, series, assembly and emission API.

pub mod types;
pub mod error;
pub mod dataset;
pub mod config;
pub mod bounds;
pub mod series;
pub mod document;
pub mod assemble;
pub mod emit;

pub use types::{Sample, Tier, MISSING};
pub use error::{ChartError, Result};
pub use dataset::Dataset;
pub use config::{ChartConfig, TierOrdering};
pub use bounds::{sample_bounds, Bounds};
pub use series::{build_series, TierSeries, TierSeriesSet};
pub use document::{ChartDocument, ChartValue};
pub use assemble::assemble_chart;
pub use emit::{render_chart, render_document, target_name, write_chart, TARGET_PREFIX_LEN};
