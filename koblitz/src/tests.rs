use super::*;
use num_bigint::BigUint;
use num_traits::Zero;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reduce big-endian bytes modulo the group order, mapping zero to one.
fn scalar(curve: &Curve, bytes: &[u8]) -> BigUint {
    let k = BigUint::from_bytes_be(bytes) % &curve.params().n;
    if k.is_zero() {
        BigUint::from(1u32)
    } else {
        k
    }
}

fn curve_strategy() -> impl Strategy<Value = &'static Curve> {
    prop::sample::select(NamedCurve::ALL.to_vec()).prop_map(|named| CurveRegistry::global().get(named))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn scalar_mult_is_homomorphic(
        curve in curve_strategy(),
        a in any::<[u8; 32]>(),
        b in any::<[u8; 32]>(),
    ) {
        let n = &curve.params().n;
        let k1 = scalar(curve, &a);
        let k2 = scalar(curve, &b);
        let sum = (&k1 + &k2) % n;
        prop_assume!(!sum.is_zero());

        let p1 = curve.scalar_base_mult(&k1.to_bytes_be()).expect("k1·G is finite");
        let p2 = curve.scalar_base_mult(&k2.to_bytes_be()).expect("k2·G is finite");

        prop_assert_eq!(curve.scalar_base_mult(&sum.to_bytes_be()), curve.add(&p1, &p2));
    }

    #[test]
    fn add_self_matches_double(curve in curve_strategy(), bytes in any::<[u8; 32]>()) {
        let k = scalar(curve, &bytes);
        let point = curve.scalar_base_mult(&k.to_bytes_be()).expect("k·G is finite");

        let doubled = curve.double(&point);
        prop_assert_eq!(curve.add(&point, &point), doubled.clone());
        prop_assert!(curve.is_on_curve(&doubled.expect("2k·G is finite")));
    }

    #[test]
    fn compression_roundtrip(curve in curve_strategy(), bytes in any::<[u8; 32]>()) {
        let k = scalar(curve, &bytes);
        let point = curve.scalar_base_mult(&k.to_bytes_be()).expect("k·G is finite");

        let compressed = curve.compress_point(&point);
        prop_assert_eq!(compressed.len(), 1 + curve.params().byte_len());
        prop_assert_eq!(curve.decompress_point(&compressed), Ok(point.clone()));

        let uncompressed = curve.marshal(&point);
        prop_assert_eq!(curve.unmarshal(&uncompressed), Ok(point));
    }

    #[test]
    fn scalar_mult_reduces_modulo_order(
        curve in curve_strategy(),
        bytes in any::<[u8; 32]>(),
        small in 1u32..=4,
    ) {
        // k·G == (k + N)·G, including scalars whose reduction is tiny
        let n = &curve.params().n;
        for k in [scalar(curve, &bytes), BigUint::from(small)] {
            let shifted = &k + n;

            prop_assert_eq!(
                curve.scalar_base_mult(&k.to_bytes_be()),
                curve.scalar_base_mult(&shifted.to_bytes_be())
            );
        }
    }
}

#[test]
fn test_seeded_points_stay_on_curve() {
    let mut rng = StdRng::seed_from_u64(42);
    for curve in CurveRegistry::global().iter() {
        let mut bytes = vec![0u8; curve.params().byte_len()];
        for _ in 0..4 {
            rng.fill(&mut bytes[..]);
            let k = scalar(curve, &bytes);
            let point = curve.scalar_base_mult(&k.to_bytes_be()).expect("k·G is finite");

            assert!(curve.is_on_curve(&point), "{}", curve.name());
            assert!(point.x < curve.params().p && point.y < curve.params().p);
        }
    }
}

#[test]
fn test_scalar_mult_of_nonbase_point() {
    // k1·(k2·G) == (k1·k2 mod N)·G
    let mut rng = StdRng::seed_from_u64(7);
    let curve = secp256k1();
    let n = &curve.params().n;

    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    rng.fill(&mut a);
    rng.fill(&mut b);
    let k1 = scalar(curve, &a);
    let k2 = scalar(curve, &b);

    let base = curve.scalar_base_mult(&k2.to_bytes_be()).expect("k2·G is finite");
    let lhs = curve.scalar_mult(&base, &k1.to_bytes_be());
    let rhs = curve.scalar_base_mult(&((&k1 * &k2) % n).to_bytes_be());
    assert_eq!(lhs, rhs);
}

#[test]
fn test_generic_decoder_over_trait_object() {
    let curve: &dyn EllipticCurve = secp192k1();
    let g = curve.params().generator();

    let encoded = encode_uncompressed(curve, &g);
    assert_eq!(decode_uncompressed(curve, &encoded), Ok(g.clone()));
    assert_eq!(decompress(curve, &compress(curve, &g)), Ok(g));
}

#[test]
fn test_affine_point_serde_roundtrip() {
    let g = secp224k1().generator();
    let bytes = bincode::serialize(&g).expect("serialize point");
    let back: AffinePoint = bincode::deserialize(&bytes).expect("deserialize point");
    assert_eq!(back, g);
}
