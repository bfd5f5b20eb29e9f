//! Scalar multiplication.

use num_bigint::BigUint;

use crate::affine::AffinePoint;
use crate::jacobian::JacobianPoint;
use crate::params::CurveParams;

/// Compute `k·base`, where `k` is an unsigned integer in big-endian form.
///
/// Left-to-right double-and-add performed entirely in Jacobian coordinates.
/// The identity cannot be represented in affine form, so the accumulator
/// starts at `base` and the first set bit of `k` only selects it. Returns
/// `None` when `k ≡ 0 (mod N)`, i.e. when the result is the identity.
///
/// `k` is reduced modulo `N` first. Every named curve has cofactor 1, so any
/// point on the curve has order dividing `N`, and with `1 <= k < N` the
/// accumulator never equals `±base` before an addition. The degenerate cases
/// of [`JacobianPoint::add`] are therefore not reached. Runtime depends on the
/// bit length and Hamming weight of the reduced `k`.
pub fn scalar_mult(params: &CurveParams, base: &AffinePoint, k: &[u8]) -> Option<AffinePoint> {
    let k = (BigUint::from_bytes_be(k) % &params.n).to_bytes_be();
    let base = JacobianPoint::from_affine(base);
    let mut acc: Option<JacobianPoint> = None;

    for byte in &k {
        for bit in (0..8).rev() {
            if let Some(point) = acc.as_mut() {
                *point = point.double(params);
            }

            if (byte >> bit) & 1 == 1 {
                acc = Some(match acc {
                    Some(point) => base.add(&point, params),
                    None => base.clone(),
                });
            }
        }
    }

    acc?.to_affine(params)
}

/// Compute `k·G`, where `G` is the base point of the curve.
pub fn scalar_base_mult(params: &CurveParams, k: &[u8]) -> Option<AffinePoint> {
    scalar_mult(params, &params.generator(), k)
}
