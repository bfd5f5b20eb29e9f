//! SEC 1 point encoding.
//!
//! Compressed points are `[tag] ‖ X` with tag `0x02` for an even and `0x03`
//! for an odd y-coordinate. Uncompressed points are `[0x04] ‖ X ‖ Y`. Every
//! coordinate is big-endian and left-padded to `ceil(bit_size / 8)` bytes.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::affine::AffinePoint;
use crate::constants::{TAG_COMPRESSED_EVEN, TAG_COMPRESSED_ODD, TAG_UNCOMPRESSED};
use crate::curve::EllipticCurve;
use crate::errors::KoblitzError;
use crate::sqrt::sqrt_mod;

/// Append `value` to `out` as exactly `width` big-endian bytes.
///
/// `value` must fit in `width` bytes, which holds for every coordinate
/// reduced modulo `P`.
fn put_padded(out: &mut Vec<u8>, value: &BigUint, width: usize) {
    let bytes = value.to_bytes_be();
    debug_assert!(
        bytes.len() <= width,
        "coordinate is {} bytes wide, field elements are {width}",
        bytes.len()
    );
    let start = bytes.len().saturating_sub(width);
    out.resize(out.len() + width.saturating_sub(bytes.len()), 0);
    out.extend_from_slice(&bytes[start..]);
}

/// Compressed encoding of `point`: `1 + ceil(bit_size / 8)` bytes.
pub fn compress<C: EllipticCurve + ?Sized>(curve: &C, point: &AffinePoint) -> Vec<u8> {
    let width = curve.params().byte_len();
    let mut out = Vec::with_capacity(1 + width);

    out.push(if point.y_is_odd() {
        TAG_COMPRESSED_ODD
    } else {
        TAG_COMPRESSED_EVEN
    });
    put_padded(&mut out, &point.x, width);

    out
}

/// Decode a SEC 1 encoded point.
///
/// Tags `0x02` and `0x03` are decompressed by solving `y² = x³ + B` and
/// picking the root with the requested parity. Tag `0x04` is handed to
/// [`decode_uncompressed`].
pub fn decompress<C: EllipticCurve + ?Sized>(
    curve: &C,
    bytes: &[u8],
) -> Result<AffinePoint, KoblitzError> {
    let params = curve.params();
    let width = params.byte_len();

    let (&tag, payload) = bytes.split_first().ok_or(KoblitzError::InvalidLength {
        expected: 1 + width,
        actual: 0,
    })?;

    let y_is_odd = match tag {
        TAG_COMPRESSED_EVEN => false,
        TAG_COMPRESSED_ODD => true,
        TAG_UNCOMPRESSED => return decode_uncompressed(curve, bytes),
        other => return Err(KoblitzError::InvalidEncoding(other)),
    };

    if payload.len() != width {
        return Err(KoblitzError::InvalidLength {
            expected: 1 + width,
            actual: bytes.len(),
        });
    }

    let p = &params.p;
    let x = BigUint::from_bytes_be(payload);
    if &x >= p {
        return Err(KoblitzError::PointNotOnCurve);
    }

    // y² = x³ + B, a = 0
    let y2 = (&x * &x * &x + &params.b) % p;
    let mut y = sqrt_mod(&y2, p);
    if y.is_zero() && !y2.is_zero() {
        return Err(KoblitzError::PointNotOnCurve);
    }

    if y.bit(0) != y_is_odd {
        if y.is_zero() {
            // the only root is 0, which is even
            return Err(KoblitzError::PointNotOnCurve);
        }
        y = p - y;
    }

    Ok(AffinePoint::new(x, y))
}

/// Uncompressed encoding of `point`: `1 + 2·ceil(bit_size / 8)` bytes.
pub fn encode_uncompressed<C: EllipticCurve + ?Sized>(curve: &C, point: &AffinePoint) -> Vec<u8> {
    let width = curve.params().byte_len();
    let mut out = Vec::with_capacity(1 + 2 * width);

    out.push(TAG_UNCOMPRESSED);
    put_padded(&mut out, &point.x, width);
    put_padded(&mut out, &point.y, width);

    out
}

/// Decode an uncompressed point, checking that it lies on `curve`.
pub fn decode_uncompressed<C: EllipticCurve + ?Sized>(
    curve: &C,
    bytes: &[u8],
) -> Result<AffinePoint, KoblitzError> {
    let params = curve.params();
    let width = params.byte_len();
    let expected = 1 + 2 * width;

    match bytes.first() {
        None => {
            return Err(KoblitzError::InvalidLength {
                expected,
                actual: 0,
            })
        }
        Some(&TAG_UNCOMPRESSED) => {}
        Some(&other) => return Err(KoblitzError::InvalidEncoding(other)),
    }
    if bytes.len() != expected {
        return Err(KoblitzError::InvalidLength {
            expected,
            actual: bytes.len(),
        });
    }

    let x = BigUint::from_bytes_be(&bytes[1..1 + width]);
    let y = BigUint::from_bytes_be(&bytes[1 + width..]);
    if x >= params.p || y >= params.p {
        return Err(KoblitzError::PointNotOnCurve);
    }

    let point = AffinePoint::new(x, y);
    if !curve.is_on_curve(&point) {
        return Err(KoblitzError::PointNotOnCurve);
    }

    Ok(point)
}
