//! Error types for character generation.

use crate::builder::DrawStep;
use crate::sampler::SampleError;

/// Errors that can occur while building a character.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// One of the four draws could not be made.
    #[error("{step} draw failed: {source}")]
    Draw {
        /// The draw that failed.
        step: DrawStep,
        /// Why the sampler refused.
        #[source]
        source: SampleError,
    },
}

/// Convenience result type for generation.
pub type GenResult<T> = Result<T, GenError>;
