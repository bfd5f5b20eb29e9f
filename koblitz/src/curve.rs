//! The curve abstraction tying parameters, arithmetic and encoding together.

use num_bigint::BigUint;

use crate::affine::AffinePoint;
use crate::codec;
use crate::errors::KoblitzError;
use crate::jacobian::JacobianPoint;
use crate::mul;
use crate::params::CurveParams;
use crate::registry::NamedCurve;
use crate::sqrt::sqrt_mod;

/// Generic interface over a prime-field curve with affine inputs and outputs.
///
/// Results that would be the point at infinity are `None`.
pub trait EllipticCurve {
    fn params(&self) -> &CurveParams;

    fn add(&self, a: &AffinePoint, b: &AffinePoint) -> Option<AffinePoint>;
    fn double(&self, point: &AffinePoint) -> Option<AffinePoint>;
    fn scalar_mult(&self, base: &AffinePoint, k: &[u8]) -> Option<AffinePoint>;

    #[inline]
    fn is_on_curve(&self, point: &AffinePoint) -> bool {
        point.is_on_curve(self.params())
    }

    #[inline]
    fn scalar_base_mult(&self, k: &[u8]) -> Option<AffinePoint> {
        self.scalar_mult(&self.params().generator(), k)
    }
}

/// One of the named Koblitz curves.
///
/// Obtained from a [`CurveRegistry`](crate::CurveRegistry) or the accessor
/// functions such as [`secp256k1`](crate::secp256k1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    named: NamedCurve,
    params: CurveParams,
}

impl Curve {
    pub(crate) fn new(named: NamedCurve, params: CurveParams) -> Self {
        Curve { named, params }
    }

    /// Which named curve this is.
    #[inline]
    pub fn named(&self) -> NamedCurve {
        self.named
    }

    /// SEC 2 name of the curve, e.g. `"secp256k1"`.
    #[inline]
    pub fn name(&self) -> &str {
        self.named.as_str()
    }

    /// Domain parameters `{P, N, B, Gx, Gy, BitSize}`.
    #[inline]
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// The base point `G`.
    pub fn generator(&self) -> AffinePoint {
        self.params.generator()
    }

    /// Check if `point` lies on the curve.
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        point.is_on_curve(&self.params)
    }

    /// Sum of two points.
    ///
    /// Equal inputs are doubled and mutually inverse inputs give `None`,
    /// since the Jacobian addition formula is undefined for both.
    pub fn add(&self, a: &AffinePoint, b: &AffinePoint) -> Option<AffinePoint> {
        if a.x == b.x {
            if a.y == b.y {
                return self.double(a);
            }
            return None;
        }

        JacobianPoint::from_affine(a)
            .add(&JacobianPoint::from_affine(b), &self.params)
            .to_affine(&self.params)
    }

    /// `2·point`.
    pub fn double(&self, point: &AffinePoint) -> Option<AffinePoint> {
        JacobianPoint::from_affine(point)
            .double(&self.params)
            .to_affine(&self.params)
    }

    /// `-point`.
    pub fn negate(&self, point: &AffinePoint) -> AffinePoint {
        point.negate(&self.params)
    }

    /// `k·base` for a big-endian scalar `k`. See [`mul::scalar_mult`].
    pub fn scalar_mult(&self, base: &AffinePoint, k: &[u8]) -> Option<AffinePoint> {
        mul::scalar_mult(&self.params, base, k)
    }

    /// `k·G` for a big-endian scalar `k`.
    pub fn scalar_base_mult(&self, k: &[u8]) -> Option<AffinePoint> {
        mul::scalar_base_mult(&self.params, k)
    }

    /// SEC 1 compressed encoding of `point`.
    pub fn compress_point(&self, point: &AffinePoint) -> Vec<u8> {
        codec::compress(self, point)
    }

    /// Decode a compressed (or uncompressed) SEC 1 point.
    pub fn decompress_point(&self, bytes: &[u8]) -> Result<AffinePoint, KoblitzError> {
        codec::decompress(self, bytes)
    }

    /// SEC 1 uncompressed encoding of `point`.
    pub fn marshal(&self, point: &AffinePoint) -> Vec<u8> {
        codec::encode_uncompressed(self, point)
    }

    /// Decode an uncompressed SEC 1 point.
    pub fn unmarshal(&self, bytes: &[u8]) -> Result<AffinePoint, KoblitzError> {
        codec::decode_uncompressed(self, bytes)
    }

    /// Square root modulo `P`; zero when `a` is a non-residue.
    pub fn sqrt(&self, a: &BigUint) -> BigUint {
        sqrt_mod(a, &self.params.p)
    }
}

impl EllipticCurve for Curve {
    #[inline]
    fn params(&self) -> &CurveParams {
        Self::params(self)
    }

    #[inline]
    fn is_on_curve(&self, point: &AffinePoint) -> bool {
        Self::is_on_curve(self, point)
    }

    #[inline]
    fn add(&self, a: &AffinePoint, b: &AffinePoint) -> Option<AffinePoint> {
        Self::add(self, a, b)
    }

    #[inline]
    fn double(&self, point: &AffinePoint) -> Option<AffinePoint> {
        Self::double(self, point)
    }

    #[inline]
    fn scalar_mult(&self, base: &AffinePoint, k: &[u8]) -> Option<AffinePoint> {
        Self::scalar_mult(self, base, k)
    }

    #[inline]
    fn scalar_base_mult(&self, k: &[u8]) -> Option<AffinePoint> {
        Self::scalar_base_mult(self, k)
    }
}
