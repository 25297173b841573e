use std::path::PathBuf;

use thiserror::Error;

/// Errors that terminate a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input table could not be opened or read.
    #[error("failed to read '{}': {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fewer than two rows carried a numeric timestamp and value.
    #[error("minimum 2 samples required, found {found}")]
    InsufficientSamples { found: usize },

    /// The first two timestamps do not describe a usable sample period.
    #[error("cannot infer sample rate from a leading interval of {delta} s")]
    DegenerateInterval { delta: f64 },

    /// A rate override of zero was supplied.
    #[error("sample rate must be greater than zero")]
    InvalidRate,

    /// The column delimiter was empty.
    #[error("delimiter cannot be empty")]
    EmptyDelimiter,

    /// No base name could be derived from the input path.
    #[error("failed to derive a base name for the input file")]
    InvalidInputName,

    /// The written file did not decode to what was encoded.
    #[error("output verification failed: {0}")]
    VerificationFailed(String),

    #[error(transparent)]
    Wav(#[from] hound::Error),
}
