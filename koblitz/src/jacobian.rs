//! Jacobian coordinates.
//!
//! A point `(x, y)` on the curve has Jacobian coordinates `(X, Y, Z)` with
//! `x = X/Z²` and `y = Y/Z³`. Working inside the transform avoids a modular
//! inversion per group operation; only the final conversion back to affine
//! coordinates inverts `Z`.
//!
//! Formulas are from the Explicit-Formulas Database for `a = 0` short
//! Weierstrass curves:
//! <https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html>

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::affine::AffinePoint;
use crate::params::CurveParams;

/// Point in Jacobian coordinates `(X:Y:Z)`.
///
/// `Z = 1` is an affine point lifted into the transform and `Z ≡ 0` is the
/// point at infinity. Jacobian points only live for the duration of one
/// arithmetic call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JacobianPoint {
    /// X-coordinate, `x·Z²` for the affine `x`
    pub x: BigUint,
    /// Y-coordinate, `y·Z³` for the affine `y`
    pub y: BigUint,
    /// Z-coordinate, zero for the point at infinity
    pub z: BigUint,
}

/// `(a - b) mod p`, normalized into `[0, p)`.
#[inline]
pub(crate) fn sub_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    let a = a % p;
    let b = b % p;
    if a >= b {
        a - b
    } else {
        p - b + a
    }
}

impl JacobianPoint {
    /// Create a new Jacobian point.
    pub fn new(x: BigUint, y: BigUint, z: BigUint) -> Self {
        JacobianPoint { x, y, z }
    }

    /// Lift an affine point into Jacobian coordinates with `Z = 1`.
    pub fn from_affine(point: &AffinePoint) -> Self {
        JacobianPoint::new(point.x.clone(), point.y.clone(), BigUint::one())
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self, params: &CurveParams) -> bool {
        (&self.z % &params.p).is_zero()
    }

    /// Reverse the Jacobian transform.
    ///
    /// Returns `None` for the point at infinity, which has no affine form.
    pub fn to_affine(&self, params: &CurveParams) -> Option<AffinePoint> {
        let p = &params.p;
        let z_inv = self.z.modinv(p)?;
        let z_inv2 = &z_inv * &z_inv % p;

        let x = &self.x * &z_inv2 % p;
        let z_inv3 = z_inv2 * &z_inv % p;
        let y = &self.y * z_inv3 % p;

        Some(AffinePoint::new(x, y))
    }

    /// Point addition, `add-2007-bl`.
    ///
    /// The formula degenerates when both inputs are the same point
    /// (`H = 0` and `r = 0`, yielding `Z = 0`) or are inverses of each other
    /// (yielding the point at infinity). Equal points must be doubled with
    /// [`JacobianPoint::double`] instead.
    pub fn add(&self, other: &Self, params: &CurveParams) -> Self {
        let p = &params.p;
        let (x1, y1, z1) = (&self.x, &self.y, &self.z);
        let (x2, y2, z2) = (&other.x, &other.y, &other.z);

        let z1z1 = z1 * z1 % p;
        let z2z2 = z2 * z2 % p;

        let u1 = x1 * &z2z2 % p;
        let u2 = x2 * &z1z1 % p;
        let h = sub_mod(&u2, &u1, p);

        let i = {
            let h2 = &h << 1u32;
            &h2 * &h2 % p
        };
        let j = &h * &i % p;

        let s1 = y1 * z2 * &z2z2 % p;
        let s2 = y2 * z1 * &z1z1 % p;
        let r = (sub_mod(&s2, &s1, p) << 1u32) % p;
        let v = &u1 * &i % p;

        // X3 = r² - J - 2V
        let x3 = sub_mod(&sub_mod(&(&r * &r), &j, p), &(&v << 1u32), p);

        // Y3 = r(V - X3) - 2·S1·J
        let y3 = sub_mod(
            &(&r * sub_mod(&v, &x3, p)),
            &((&s1 * &j) << 1u32),
            p,
        );

        // Z3 = ((Z1 + Z2)² - Z1Z1 - Z2Z2)·H
        let z1_plus_z2 = z1 + z2;
        let z3 = sub_mod(
            &sub_mod(&(&z1_plus_z2 * &z1_plus_z2), &z1z1, p),
            &z2z2,
            p,
        ) * &h
            % p;

        JacobianPoint::new(x3, y3, z3)
    }

    /// Point doubling, `dbl-2009-l`.
    pub fn double(&self, params: &CurveParams) -> Self {
        let p = &params.p;
        let (x, y, z) = (&self.x, &self.y, &self.z);

        let a = x * x % p;
        let b = y * y % p;
        let c = &b * &b % p;

        // D = 2·((X1 + B)² - A - C)
        let x_plus_b = x + &b;
        let d = (sub_mod(&sub_mod(&(&x_plus_b * &x_plus_b), &a, p), &c, p) << 1u32) % p;

        let e = &a * 3u32 % p;
        let f = &e * &e % p;

        // X3 = F - 2D
        let x3 = sub_mod(&f, &(&d << 1u32), p);

        // Y3 = E(D - X3) - 8C
        let y3 = sub_mod(&(&e * sub_mod(&d, &x3, p)), &(&c << 3u32), p);

        // Z3 = 2·Y1·Z1
        let z3 = (y * z << 1u32) % p;

        JacobianPoint::new(x3, y3, z3)
    }
}
