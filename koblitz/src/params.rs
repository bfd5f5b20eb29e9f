//! Domain parameters of a Koblitz curve `y² = x³ + B (mod P)`.

use core::fmt::{self, Display, Formatter};

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::affine::AffinePoint;
use crate::constants::RawParams;

/// Immutable domain parameters of one curve.
///
/// `(gx, gy)` lies on the curve, `p` is prime and `n` is the order of the
/// subgroup generated by `(gx, gy)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParams {
    /// SEC 2 name of the curve
    pub name: String,
    /// Order of the underlying prime field
    pub p: BigUint,
    /// Order of the base point
    pub n: BigUint,
    /// Constant term of the curve equation
    pub b: BigUint,
    /// x-coordinate of the base point
    pub gx: BigUint,
    /// y-coordinate of the base point
    pub gy: BigUint,
    /// Bit length of the underlying field
    pub bit_size: usize,
}

impl CurveParams {
    pub(crate) fn from_raw(name: &str, raw: &RawParams) -> Self {
        Self {
            name: name.to_owned(),
            p: BigUint::from_bytes_be(raw.p),
            n: BigUint::from_bytes_be(raw.n),
            b: BigUint::from_bytes_be(raw.b),
            gx: BigUint::from_bytes_be(raw.gx),
            gy: BigUint::from_bytes_be(raw.gy),
            bit_size: raw.bit_size,
        }
    }

    /// Width in bytes of one encoded field element: `ceil(bit_size / 8)`.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bit_size.div_ceil(8)
    }

    /// The base point `G`.
    pub fn generator(&self) -> AffinePoint {
        AffinePoint::new(self.gx.clone(), self.gy.clone())
    }
}

impl Display for CurveParams {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-bit, P = {:#x})", self.name, self.bit_size, self.p)
    }
}
