//! Modular square roots over a prime field.
//!
//! Decompressing a point needs `y = sqrt(x³ + B) mod P`. For primes
//! `P ≡ 3 (mod 4)` this is a single exponentiation; otherwise (secp224k1)
//! the Tonelli–Shanks algorithm is used.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Legendre symbol `(a | p)` for an odd prime `p`.
///
/// Returns `0` if `a ≡ 0 (mod p)`, `1` if `a` is a quadratic residue and `-1`
/// if it is a non-residue.
pub fn legendre_symbol(a: &BigUint, p: &BigUint) -> i8 {
    if (a % p).is_zero() {
        return 0;
    }

    let p_minus_one = p - 1u32;
    let ls = a.modpow(&(&p_minus_one >> 1u32), p);

    if ls == p_minus_one {
        -1
    } else {
        1
    }
}

/// Square root of `a` modulo the odd prime `p`.
///
/// Returns `r` with `r² ≡ a (mod p)`. When no root exists the result is zero,
/// which callers have to tell apart from the genuine root of `a ≡ 0`.
pub fn sqrt_mod(a: &BigUint, p: &BigUint) -> BigUint {
    let a = a % p;
    if legendre_symbol(&a, p) != 1 {
        return BigUint::zero();
    }

    if p.bit(0) && p.bit(1) {
        // p ≡ 3 (mod 4)
        return a.modpow(&((p + 1u32) >> 2u32), p);
    }

    tonelli_shanks(&a, p)
}

/// General Tonelli–Shanks path of [`sqrt_mod`]. `a` must be a non-zero
/// quadratic residue modulo `p`.
///
/// The loop keeps the invariant `x² ≡ a·b (mod p)` and stops once the fudge
/// factor `b` reaches 1.
pub(crate) fn tonelli_shanks(a: &BigUint, p: &BigUint) -> BigUint {
    // p - 1 = s·2^e with s odd
    let p_minus_one = p - 1u32;
    let e = p_minus_one.trailing_zeros().unwrap_or(0);
    let s = &p_minus_one >> e;

    // any quadratic non-residue
    let mut n = BigUint::from(2u32);
    while legendre_symbol(&n, p) != -1 {
        n += 1u32;
    }

    let mut x = a.modpow(&((&s + 1u32) >> 1u32), p);
    let mut b = a.modpow(&s, p);
    let mut g = n.modpow(&s, p);
    let mut r = e;

    loop {
        // smallest m in [0, r) with b^(2^m) ≡ 1
        let mut t = b.clone();
        let mut m = 0u64;
        while m < r {
            if t.is_one() {
                break;
            }
            t = &t * &t % p;
            m += 1;
        }

        if m == 0 {
            return x;
        }
        if m == r {
            // a was not a residue after all (p not prime)
            return BigUint::zero();
        }

        let gs = g.modpow(&(BigUint::one() << (r - m - 1)), p);
        g = &gs * &gs % p;
        x = x * &gs % p;
        b = b * &g % p;
        r = m;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SECP224K1, SECP256K1};

    fn small_primes() -> Vec<u32> {
        vec![3, 5, 7, 11, 13, 17, 29, 41, 97, 113, 257, 65537]
    }

    #[test]
    fn test_legendre_zero() {
        for p in small_primes() {
            let p = BigUint::from(p);
            assert_eq!(legendre_symbol(&BigUint::zero(), &p), 0);
            assert_eq!(legendre_symbol(&p, &p), 0);
            assert_eq!(legendre_symbol(&(&p * 3u32), &p), 0);
        }
    }

    #[test]
    fn test_legendre_matches_squares() {
        for p in small_primes().into_iter().filter(|&p| p < 300) {
            let squares: Vec<u32> = (1..p).map(|i| i * i % p).collect();
            let big_p = BigUint::from(p);
            for a in 1..p {
                let expected = if squares.contains(&a) { 1 } else { -1 };
                assert_eq!(legendre_symbol(&BigUint::from(a), &big_p), expected, "a={a} p={p}");
            }
        }
    }

    #[test]
    fn test_sqrt_small_primes() {
        for p in small_primes() {
            let big_p = BigUint::from(p);
            for a in 1..p.min(300) {
                let a = BigUint::from(a);
                let root = sqrt_mod(&a, &big_p);
                if legendre_symbol(&a, &big_p) == 1 {
                    assert_eq!(&root * &root % &big_p, a, "p={p}");
                } else {
                    assert!(root.is_zero());
                }
            }
        }
    }

    #[test]
    fn test_sqrt_of_zero() {
        let p = BigUint::from(17u32);
        assert!(sqrt_mod(&BigUint::zero(), &p).is_zero());
    }

    #[test]
    fn test_tonelli_shanks_high_two_adicity() {
        // 65537 - 1 = 2^16, so the loop runs for several rounds
        let p = BigUint::from(65537u32);
        for a in [2u32, 9, 10, 12345, 65536] {
            let a = BigUint::from(a);
            if legendre_symbol(&a, &p) == 1 {
                let root = tonelli_shanks(&a, &p);
                assert_eq!(&root * &root % &p, a);
            }
        }
    }

    #[test]
    fn test_fast_path_matches_tonelli_shanks() {
        let p = BigUint::from_bytes_be(SECP256K1.p);
        assert!(p.bit(0) && p.bit(1), "secp256k1 P is 3 mod 4");

        let gx = BigUint::from_bytes_be(SECP256K1.gx);
        let gy = BigUint::from_bytes_be(SECP256K1.gy);
        let y2 = &gy * &gy % &p;

        let fast = sqrt_mod(&y2, &p);
        assert_eq!(fast, tonelli_shanks(&y2, &p));
        assert!(fast == gy || fast == &p - &gy);

        let rhs = (&gx * &gx * &gx + 7u32) % &p;
        assert_eq!(sqrt_mod(&rhs, &p), fast);
    }

    #[test]
    fn test_sqrt_secp224k1_general_path() {
        let p = BigUint::from_bytes_be(SECP224K1.p);
        assert!(p.bit(0) && !p.bit(1), "secp224k1 P is 1 mod 4");

        let gy = BigUint::from_bytes_be(SECP224K1.gy);
        let y2 = &gy * &gy % &p;
        let root = sqrt_mod(&y2, &p);

        assert!(root == gy || root == &p - &gy);
    }

    #[test]
    fn test_sqrt_non_residue_is_zero() {
        let p = BigUint::from_bytes_be(SECP256K1.p);
        // -1 is a non-residue modulo any p ≡ 3 (mod 4)
        let minus_one = &p - 1u32;
        assert_eq!(legendre_symbol(&minus_one, &p), -1);
        assert!(sqrt_mod(&minus_one, &p).is_zero());
    }
}
