//! Error types for the frame decoder.

/// Errors produced by [`FrameDecoder`](crate::FrameDecoder).
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The input string contains characters that are not hex digits.
    #[error("invalid hex input: {source}")]
    InvalidHex {
        #[source]
        source: hex::FromHexError,
    },

    /// A name in the layout order has no definition in the schema.
    #[error("field '{field}' is not defined in the schema")]
    UnknownField { field: String },

    /// The frame ended before the field could be read.
    #[error(
        "field '{field}' needs {width} byte(s) at offset {offset}, but the frame is {len} byte(s) long"
    )]
    OutOfRange {
        field: String,
        offset: usize,
        width: usize,
        len: usize,
    },
}
