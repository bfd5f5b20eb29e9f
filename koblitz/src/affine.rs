//! Affine points.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::params::CurveParams;

/// Point on a Koblitz curve in affine coordinates `(x, y)`, both in `[0, P)`.
///
/// There is no affine representation of the point at infinity. Operations
/// whose result may be the identity return `Option<AffinePoint>` and use
/// `None` for it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AffinePoint {
    /// The x-coordinate of the point
    pub x: BigUint,
    /// The y-coordinate of the point
    pub y: BigUint,
}

impl AffinePoint {
    /// Create a new affine point. The coordinates are not validated.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        AffinePoint { x, y }
    }

    /// Check if the point satisfies `y² = x³ + B (mod P)`.
    pub fn is_on_curve(&self, params: &CurveParams) -> bool {
        let y2 = &self.y * &self.y % &params.p;
        let x3 = (&self.x * &self.x * &self.x + &params.b) % &params.p;

        x3 == y2
    }

    /// Negate a point: `(x, P - y)`.
    pub fn negate(&self, params: &CurveParams) -> Self {
        let y = &self.y % &params.p;
        if y.is_zero() {
            return AffinePoint::new(self.x.clone(), y);
        }
        AffinePoint::new(self.x.clone(), &params.p - y)
    }

    /// Whether the y-coordinate is odd, as used by point compression.
    #[inline]
    pub fn y_is_odd(&self) -> bool {
        self.y.bit(0)
    }
}
