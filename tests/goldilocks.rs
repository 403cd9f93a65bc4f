// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

//! Integration tests for the Goldilocks engine.

#![allow(non_snake_case)]

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use edwards_groups::constants;
use edwards_groups::goldilocks::{CompressedGoldilocks, Goldilocks, GoldilocksPoint};
use edwards_groups::scalar::Scalar448;
use edwards_groups::traits::{Identity, IsIdentity};
use edwards_groups::Error;

fn random_scalar<R: RngCore>(rng: &mut R) -> Scalar448 {
    let mut bytes = [0u8; 56];
    rng.fill_bytes(&mut bytes);
    Scalar448::from_bytes(bytes)
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x6f6c_6469_6c6f_636b)
}

/// Number of random points each group-law property is checked on.
const ITERATIONS: usize = 256;

/// RFC 8032, section 7.4, "Blank": the clamped secret scalar and the
/// public key it produces.
#[test]
fn rfc8032_ed448_public_key() {
    let scalar = hex::decode(
        "e83930a0cea0808ec7ed6667f472a588b411f0545ba4f3ee75025e1d38519cb9\
         05c036d81eeed17483f9f56615ceee4fa70501a71fc0bbb7",
    )
    .unwrap();
    let public = hex::decode(
        "5fd7449b59b461fd2ce787ec616ad46a1da1342485a70e1f8a0ea75d80e96778\
         edf124769b46c7061bd6783df1e50f6cd1fa1abeafe8256180",
    )
    .unwrap();

    let curve = Goldilocks::new();
    let k = Scalar448::from_slice(&scalar).unwrap();
    let A = curve.scalar_base_mult(&k);
    assert_eq!(&curve.marshal(&A)[..], &public[..]);

    let decoded = CompressedGoldilocks::from_slice(&public)
        .unwrap()
        .decompress()
        .unwrap();
    assert!(curve.equal(&decoded, &A));
}

#[test]
fn generator_constants_agree() {
    let G = Goldilocks::generator();
    assert!(G.is_on_curve());
    assert_eq!(G.compress(), constants::GOLDILOCKS_GENERATOR_COMPRESSED);
    assert!(bool::from(
        subtle::ConstantTimeEq::ct_eq(&G, &constants::GOLDILOCKS_GENERATOR_POINT)
    ));
}

#[test]
fn fixed_base_agrees_with_variable_base() {
    let curve = Goldilocks::new();
    let G = Goldilocks::generator();
    let mut rng = rng();
    for _ in 0..8 {
        let k = random_scalar(&mut rng);
        assert!(curve.equal(&curve.scalar_base_mult(&k), &curve.scalar_mult(&k, &G)));
    }
}

#[test]
fn combined_mult_agrees_with_separate_mults() {
    let curve = Goldilocks::new();
    let mut rng = rng();
    let P = curve.scalar_base_mult(&random_scalar(&mut rng));
    for _ in 0..4 {
        let k = random_scalar(&mut rng);
        let l = random_scalar(&mut rng);
        let expected = curve.add(&curve.scalar_mult(&k, &P), &curve.scalar_base_mult(&l));
        assert!(curve.equal(&curve.combined_mult(&P, &k, &l), &expected));
    }
}

#[test]
fn scalar_mult_is_linear() {
    let curve = Goldilocks::new();
    let mut rng = rng();
    let a = Scalar448::from_bytes_mod_order(random_scalar(&mut rng).to_bytes());
    let b = Scalar448::from_bytes_mod_order(random_scalar(&mut rng).to_bytes());
    let lhs = curve.scalar_base_mult(&(a + b));
    let rhs = curve.scalar_base_mult(&a) + curve.scalar_base_mult(&b);
    assert!(curve.equal(&lhs, &rhs));

    let ab = curve.scalar_base_mult(&(a * b));
    let a_then_b = curve.scalar_mult(&b, &curve.scalar_base_mult(&a));
    assert!(curve.equal(&ab, &a_then_b));
}

#[test]
fn unreduced_scalars_match_reduced_ones_on_the_subgroup() {
    let curve = Goldilocks::new();
    let k = Scalar448::from_bytes([0xff; 56]);
    assert!(curve.equal(&curve.scalar_base_mult(&k), &curve.scalar_base_mult(&k.reduce())));
}

#[test]
fn group_law_properties() {
    let curve = Goldilocks::new();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let P = curve.scalar_base_mult(&random_scalar(&mut rng));
        let Q = curve.scalar_base_mult(&random_scalar(&mut rng));

        assert!(curve.equal(&curve.add(&P, &Q), &curve.add(&Q, &P)));
        assert!(curve.equal(&curve.add(&P, &P), &curve.double(&P)));
        assert!(curve.equal(&curve.add(&P, &curve.identity()), &P));

        let mut minus_P = P;
        curve.neg(&mut minus_P);
        assert!(curve.add(&P, &minus_P).is_identity());
    }
}

#[test]
fn sixteen_additions_equal_four_doublings() {
    let curve = Goldilocks::new();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let P = curve.scalar_base_mult(&random_scalar(&mut rng));
        let mut sixteen_adds = GoldilocksPoint::identity();
        for _ in 0..16 {
            sixteen_adds = curve.add(&sixteen_adds, &P);
        }
        let four_doubles = curve.double(&curve.double(&curve.double(&curve.double(&P))));
        assert!(curve.equal(&sixteen_adds, &four_doubles));
        assert_eq!(curve.marshal(&sixteen_adds), curve.marshal(&four_doubles));
    }
}

#[test]
fn encoding_round_trips() {
    let curve = Goldilocks::new();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let P = curve.scalar_base_mult(&random_scalar(&mut rng));
        let bytes = curve.marshal(&P);
        let Q = curve.unmarshal(&bytes).unwrap();
        assert!(curve.equal(&P, &Q));
        assert_eq!(curve.marshal(&Q), bytes);

        let (x, y) = curve.to_affine(&P);
        let R = curve.from_affine(&x, &y).unwrap();
        assert!(curve.equal(&P, &R));
        assert!(curve.is_on_curve(&R));

        let mut corrupted = bytes;
        corrupted[56] |= 0x01;
        assert_eq!(curve.unmarshal(&corrupted), Err(Error::Decode));
    }
}

#[test]
fn identity_encoding() {
    let curve = Goldilocks::new();
    assert_eq!(
        curve.identity().compress(),
        CompressedGoldilocks::identity()
    );
    assert!(curve
        .unmarshal(CompressedGoldilocks::identity().as_bytes())
        .unwrap()
        .is_identity());
}

#[cfg(feature = "alloc")]
#[test]
fn boxed_descriptor() {
    let curve = Goldilocks::new_boxed();
    let k = Scalar448::from(3u64);
    let G = Goldilocks::generator();
    assert!(curve.equal(&curve.scalar_base_mult(&k), &(&G + &G.double())));
}

#[cfg(feature = "alloc")]
#[test]
fn boxed_descriptor_builds_on_a_small_stack() {
    let encoded = std::thread::Builder::new()
        .stack_size(96 * 1024)
        .spawn(|| {
            let curve = Goldilocks::new_boxed();
            curve.marshal(&curve.scalar_base_mult(&Scalar448::ONE))
        })
        .unwrap()
        .join()
        .unwrap();
    assert_eq!(&encoded, constants::GOLDILOCKS_GENERATOR_COMPRESSED.as_bytes());
}

#[cfg(feature = "rand_core")]
#[test]
fn random_scalars_are_reduced() {
    let curve = Goldilocks::new();
    let mut rng = rand_core::OsRng;
    let k = Scalar448::random(&mut rng);
    assert!(bool::from(k.is_canonical()));
    let l = curve.scalar_base_mult(&(-k));
    assert!(curve.add(&curve.scalar_base_mult(&k), &l).is_identity());
}
