//! Error types for point decoding.

use thiserror::Error;

/// Errors that can occur while decoding an encoded curve point.
///
/// Arithmetic never returns these: only the codec validates its input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum KoblitzError {
    /// The leading tag byte is not one of `0x02`, `0x03` or `0x04`.
    #[error("invalid point encoding tag {0:#04x}")]
    InvalidEncoding(u8),

    /// The encoding does not have the length required by its tag.
    ///
    /// Compressed points are `1 + ceil(bit_size / 8)` bytes long, uncompressed
    /// points `1 + 2 * ceil(bit_size / 8)` bytes.
    #[error("invalid encoded point length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The decoded coordinates do not describe a point on the curve.
    ///
    /// For compressed points this means `x³ + B` has no square root modulo `P`.
    #[error("point is not on the curve")]
    PointNotOnCurve,
}

/// Error returned when parsing a curve name that is not one of the SEC 2
/// Koblitz curves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown curve name {0:?}")]
pub struct UnknownCurve(pub String);
