//! Pipeline failure modes.

use std::io;

use thiserror::Error;

/// A fatal I/O failure during a streaming run.
///
/// There is no recoverable-error category inside the repair logic itself:
/// classification and repair are total functions over arbitrary bytes. The
/// only failures are the source read and sink write, both fatal; the sink is
/// left holding whatever was flushed before the failure.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Reading from the input source failed.
    #[error("read from input failed after {bytes_read} bytes")]
    Read {
        /// Bytes successfully consumed before the failure.
        bytes_read: u64,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing to the output sink failed.
    #[error("write to output failed after {bytes_emitted} bytes")]
    Write {
        /// Bytes successfully emitted before the failure.
        bytes_emitted: u64,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}
