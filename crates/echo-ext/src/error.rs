// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type shared by every extension group.

use thiserror::Error;

/// Result alias defaulting to [`ExtError`].
pub type Result<T, E = ExtError> = core::result::Result<T, E>;

/// Argument-validation failures raised by the extension traits.
///
/// Every fallible helper validates its inputs before touching caller state, so
/// an `Err` never leaves a destination buffer partially written.
#[derive(Debug, Error)]
pub enum ExtError {
    /// Destination buffer cannot hold the encoded value.
    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall {
        /// Bytes (or slots) required.
        needed: usize,
        /// Bytes (or slots) available.
        actual: usize,
    },
    /// Operation requires at least one element.
    #[error("source contains no elements")]
    EmptySequence,
    /// Operation is undefined for negative input.
    #[error("argument must be non-negative, got {0}")]
    NegativeArgument(i128),
    /// Result does not fit the return type.
    #[error("arithmetic overflow")]
    Overflow,
    /// Range does not fit inside the target.
    #[error("range {start}..{end} out of bounds for length {len}")]
    OutOfRange {
        /// Inclusive start of the requested range.
        start: usize,
        /// Exclusive end of the requested range.
        end: usize,
        /// Length of the target.
        len: usize,
    },
    /// More bits supplied than the packed integer can hold.
    #[error("cannot pack {actual} bits into a {max}-bit integer")]
    TooManyBits {
        /// Width of the target integer.
        max: usize,
        /// Number of bits supplied.
        actual: usize,
    },
    /// Year zero does not exist in the Gregorian calendar.
    #[error("year cannot be zero")]
    YearZero,
    /// Input was empty or whitespace only.
    #[error("input is empty or whitespace")]
    BlankInput,
    /// Text could not be parsed into the requested type.
    #[error("parse error: {0}")]
    Parse(String),
    /// Timestamp outside the representable date range.
    #[error("timestamp out of range: {0}")]
    Timestamp(#[from] time::error::ComponentRange),
    /// JSON serialization/deserialization failure.
    #[cfg(feature = "json")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid base64 input.
    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
    /// Decoded bytes are not valid UTF-8.
    #[error("invalid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
