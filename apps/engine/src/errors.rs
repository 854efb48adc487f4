use thiserror::Error;

use crate::layout::measure::MeasureError;

/// Application-level error type shared by the stores, the exporters, and the
/// runner. Validation findings are not errors; they are returned as data by
/// `validation::validate` and never raised.
#[derive(Debug, Error)]
pub enum AppError {
    /// The text-measurement capability failed. This is a collaborator
    /// contract violation, not a data problem; the layout pass that hit it
    /// is aborted with no partial output.
    #[error("Measurement error: {0}")]
    Measure(#[from] MeasureError),

    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
