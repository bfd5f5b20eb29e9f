//! Registry of the named SEC 2 Koblitz curves.
//!
//! A [`CurveRegistry`] owns one [`Curve`] per named curve. The process-wide
//! instance behind [`CurveRegistry::global`] is built on first use; racing
//! first callers block until construction has finished, and every caller
//! sees the same fully initialized registry afterwards.

use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::{RawParams, SECP160K1, SECP192K1, SECP224K1, SECP256K1};
use crate::curve::Curve;
use crate::errors::UnknownCurve;
use crate::params::CurveParams;

static REGISTRY: Lazy<CurveRegistry> = Lazy::new(CurveRegistry::new);

/// The named curves, in ascending field size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedCurve {
    Secp160k1,
    Secp192k1,
    Secp224k1,
    Secp256k1,
}

impl NamedCurve {
    /// All named curves, in ascending field size.
    pub const ALL: [NamedCurve; 4] = [
        NamedCurve::Secp160k1,
        NamedCurve::Secp192k1,
        NamedCurve::Secp224k1,
        NamedCurve::Secp256k1,
    ];

    /// SEC 2 name of the curve.
    pub const fn as_str(self) -> &'static str {
        match self {
            NamedCurve::Secp160k1 => "secp160k1",
            NamedCurve::Secp192k1 => "secp192k1",
            NamedCurve::Secp224k1 => "secp224k1",
            NamedCurve::Secp256k1 => "secp256k1",
        }
    }

    /// Bit length of the underlying field.
    pub const fn bit_size(self) -> usize {
        self.raw().bit_size
    }

    const fn raw(self) -> &'static RawParams {
        match self {
            NamedCurve::Secp160k1 => &SECP160K1,
            NamedCurve::Secp192k1 => &SECP192K1,
            NamedCurve::Secp224k1 => &SECP224K1,
            NamedCurve::Secp256k1 => &SECP256K1,
        }
    }
}

impl Display for NamedCurve {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamedCurve {
    type Err = UnknownCurve;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedCurve::ALL
            .into_iter()
            .find(|named| named.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCurve(s.to_owned()))
    }
}

/// The four named curves, constructed together.
#[derive(Debug)]
pub struct CurveRegistry {
    curves: [Curve; 4],
}

impl CurveRegistry {
    /// Build all four curves from their SEC 2 constants.
    pub fn new() -> Self {
        CurveRegistry {
            curves: NamedCurve::ALL.map(|named| {
                Curve::new(named, CurveParams::from_raw(named.as_str(), named.raw()))
            }),
        }
    }

    /// The process-wide registry, initialized exactly once.
    #[inline]
    pub fn global() -> &'static CurveRegistry {
        &REGISTRY
    }

    /// Look up a curve by name.
    #[inline]
    pub fn get(&self, named: NamedCurve) -> &Curve {
        // `ALL` and `curves` share the declaration order
        &self.curves[named as usize]
    }

    /// Look up a curve by field bit size (160, 192, 224 or 256).
    pub fn by_bit_size(&self, bit_size: usize) -> Option<&Curve> {
        self.iter().find(|curve| curve.params().bit_size == bit_size)
    }

    /// All curves, in ascending field size.
    pub fn iter(&self) -> impl Iterator<Item = &Curve> {
        self.curves.iter()
    }

    /// secp160k1, SEC 2 section 2.4.1.
    pub fn secp160k1(&self) -> &Curve {
        self.get(NamedCurve::Secp160k1)
    }

    /// secp192k1, SEC 2 section 2.5.1.
    pub fn secp192k1(&self) -> &Curve {
        self.get(NamedCurve::Secp192k1)
    }

    /// secp224k1, SEC 2 section 2.6.1.
    pub fn secp224k1(&self) -> &Curve {
        self.get(NamedCurve::Secp224k1)
    }

    /// secp256k1, SEC 2 section 2.7.1.
    pub fn secp256k1(&self) -> &Curve {
        self.get(NamedCurve::Secp256k1)
    }
}

impl Default for CurveRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// secp160k1 from the global registry.
pub fn secp160k1() -> &'static Curve {
    CurveRegistry::global().secp160k1()
}

/// secp192k1 from the global registry.
pub fn secp192k1() -> &'static Curve {
    CurveRegistry::global().secp192k1()
}

/// secp224k1 from the global registry.
pub fn secp224k1() -> &'static Curve {
    CurveRegistry::global().secp224k1()
}

/// secp256k1 from the global registry.
pub fn secp256k1() -> &'static Curve {
    CurveRegistry::global().secp256k1()
}
