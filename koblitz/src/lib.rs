//! Point arithmetic for the SEC 2 Koblitz curves `y² = x³ + B (mod P)`.
//!
//! This crate provides the four named curves secp160k1, secp192k1, secp224k1
//! and secp256k1, with point addition, doubling and scalar multiplication
//! carried out in Jacobian coordinates, and SEC 1 point compression backed by
//! a Tonelli–Shanks modular square root. Integers are `num_bigint::BigUint`.
//!
//! No operation is constant time.
//!
//! ```
//! let curve = koblitz::secp256k1();
//! let g = curve.generator();
//!
//! let p = curve.scalar_base_mult(&[0x2a]).expect("42G is not the identity");
//! assert!(curve.is_on_curve(&p));
//!
//! let compressed = curve.compress_point(&g);
//! assert_eq!(compressed[0], 0x02);
//! assert_eq!(curve.decompress_point(&compressed), Ok(g));
//! ```

mod affine;
mod codec;
mod constants;
mod curve;
mod errors;
mod jacobian;
mod mul;
mod params;
mod registry;
mod sqrt;

#[cfg(test)]
mod tests;

pub use affine::AffinePoint;
pub use codec::{compress, decode_uncompressed, decompress, encode_uncompressed};
pub use constants::{TAG_COMPRESSED_EVEN, TAG_COMPRESSED_ODD, TAG_UNCOMPRESSED};
pub use curve::{Curve, EllipticCurve};
pub use errors::{KoblitzError, UnknownCurve};
pub use jacobian::JacobianPoint;
pub use mul::{scalar_base_mult, scalar_mult};
pub use params::CurveParams;
pub use registry::{secp160k1, secp192k1, secp224k1, secp256k1, CurveRegistry, NamedCurve};
pub use sqrt::{legendre_symbol, sqrt_mod};
