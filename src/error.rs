//! Error types for the checked entry and lookup boundaries.
//!
//! The ring's core operations do not fail: admission is pure index arithmetic
//! and a lookup miss is reported as `None`. These variants exist for callers
//! that build descriptors from a separately tracked length, or that prefer to
//! propagate a lookup miss with `?`.

use thiserror::Error;

/// Errors from constructing entries or resolving stream offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EntryError {
    /// A caller-supplied length is larger than the content it describes.
    #[error("entry length {len} exceeds content length {available}")]
    LengthExceedsContent { len: usize, available: usize },
    /// The offset lies at or past the end of the virtual stream.
    #[error("offset {offset} is out of bounds (stream length: {stream_len})")]
    OffsetOutOfBounds { offset: usize, stream_len: usize },
}
