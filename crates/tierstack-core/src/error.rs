// File: crates/tierstack-core/src/error.rs
// Summary: Error type shared by loaders, series building, assembly and emission.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Tier;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid sample for item '{item}': {reason}")]
    InvalidSample { item: String, reason: String },

    #[error("unsupported input '{}' (expected .csv or .json)", .0.display())]
    UnsupportedInput(PathBuf),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("tier ordering is empty")]
    EmptyOrdering,

    #[error("item '{0}' is not present in the dataset")]
    UnknownItem(String),

    #[error("no color configured for tier {0}")]
    MissingTierColor(Tier),

    /// An interpolation rule needed a tier outside the ordering.
    #[error("item '{item}' at tier {tier}: neighbor at offset {offset} is outside the tier ordering")]
    NeighborOutOfRange { item: String, tier: Tier, offset: isize },

    #[error("cannot derive chart target from '{}': {reason}", .path.display())]
    TargetName { path: PathBuf, reason: String },
}

impl ChartError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
