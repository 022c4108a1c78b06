//! Error type for PEM loading.

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

use crate::kind::ObjectKind;

/// Errors produced while loading PEM objects.
///
/// Every variant is fatal to the whole `load` invocation: no partial
/// collection is ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum PemError {
    /// The source could not be opened or read.
    #[error("{}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input ended while a body was still open.
    #[error("missing end marker for {kind} block")]
    MalformedEnvelope { kind: ObjectKind },

    /// A body line is not valid base64, or decodes past the per-line bound.
    #[error("corrupt base64 body: {0}")]
    DecodeFailure(#[source] base64::DecodeSliceError),

    /// Growing the object buffer or the collection failed.
    #[error("allocation failed: {0}")]
    AllocationFailure(#[from] TryReserveError),
}
