// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

//! Integration tests for the edwards25519 engine.

#![allow(non_snake_case)]

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use sha2::{Digest, Sha512};

use edwards_groups::constants;
use edwards_groups::edwards::{CompressedEdwardsY, Ed25519, EdwardsPoint};
use edwards_groups::scalar::Scalar25519;
use edwards_groups::traits::{Identity, IsIdentity};
use edwards_groups::Error;

fn random_scalar<R: RngCore>(rng: &mut R) -> Scalar25519 {
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    Scalar25519::from_bytes(bytes)
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(25519)
}

/// Number of random points each group-law property is checked on.
const ITERATIONS: usize = 256;

/// RFC 8032, section 7.1, TEST 1: derive the public key from the secret
/// key with SHA-512 and clamping.
#[test]
fn rfc8032_ed25519_public_key() {
    let secret =
        hex::decode("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60").unwrap();
    let public =
        hex::decode("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a").unwrap();

    let h = Sha512::digest(&secret);
    let mut bits = [0u8; 32];
    bits.copy_from_slice(&h[..32]);
    bits[0] &= 248;
    bits[31] &= 127;
    bits[31] |= 64;

    let curve = Ed25519::new();
    let A = curve.fixed_mult(&Scalar25519::from_bytes(bits));
    assert_eq!(&A.compress().as_bytes()[..], &public[..]);

    let decoded = CompressedEdwardsY::from_slice(&public)
        .unwrap()
        .decompress()
        .unwrap();
    assert!(curve.is_equal(&decoded, &A));
}

#[test]
fn basepoint_constants_agree() {
    assert_eq!(
        Ed25519::basepoint().compress(),
        constants::ED25519_BASEPOINT_COMPRESSED
    );
    let curve = Ed25519::new();
    assert!(curve
        .fixed_mult(&constants::ED25519_BASEPOINT_ORDER)
        .is_identity());
}

#[test]
fn fixed_mult_agrees_with_double_mult() {
    let curve = Ed25519::new();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let P = curve.fixed_mult(&random_scalar(&mut rng));
        let k = random_scalar(&mut rng);
        assert!(curve.is_equal(
            &curve.fixed_mult(&k),
            &curve.double_mult(&P, &Scalar25519::ZERO, &k)
        ));
    }
}

#[test]
fn double_mult_agrees_with_generic_multiplication() {
    let curve = Ed25519::new();
    let mut rng = rng();
    let P = curve.fixed_mult(&random_scalar(&mut rng));
    for _ in 0..8 {
        let k = random_scalar(&mut rng);
        let l = random_scalar(&mut rng);
        let expected = &curve.fixed_mult(&l) + &(&P * &k);
        assert!(curve.is_equal(&curve.double_mult(&P, &k, &l), &expected));
    }
}

#[test]
fn fixed_mult_agrees_with_variable_base() {
    let curve = Ed25519::new();
    let B = Ed25519::basepoint();
    let mut rng = rng();
    for _ in 0..8 {
        let k = random_scalar(&mut rng);
        assert!(curve.is_equal(&curve.fixed_mult(&k), &(&B * &k)));
    }
}

#[test]
fn cached_forms_agree() {
    let curve = Ed25519::new();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let P = curve.fixed_mult(&random_scalar(&mut rng));
        let Q = curve.fixed_mult(&random_scalar(&mut rng));

        let sum = &P + &Q;
        assert!(curve.is_equal(&curve.add(&P, &Q.as_projective_niels()), &sum));
        assert!(curve.is_equal(&curve.mix_add(&P, &Q.as_affine_niels()), &sum));

        let mut doubled = P;
        curve.double(&mut doubled);
        assert!(curve.is_equal(&doubled, &(&P + &P)));
    }
}

#[test]
fn sixteen_additions_equal_four_doublings() {
    let curve = Ed25519::new();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let P = curve.fixed_mult(&random_scalar(&mut rng));
        let P_niels = P.as_projective_niels();

        let mut added = curve.identity();
        for _ in 0..16 {
            added = curve.add(&added, &P_niels);
        }
        let mut doubled = P;
        for _ in 0..4 {
            curve.double(&mut doubled);
        }
        assert!(curve.is_equal(&added, &doubled));
        assert_eq!(added.compress(), doubled.compress());
    }
}

#[test]
fn encoding_round_trips() {
    let curve = Ed25519::new();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let P = curve.fixed_mult(&random_scalar(&mut rng));
        let encoded = P.compress();
        let Q = encoded.decompress().unwrap();
        assert!(curve.is_equal(&P, &Q));
        assert_eq!(Q.compress(), encoded);

        let (x, y) = curve.to_affine(&P);
        let R = EdwardsPoint::from_affine(&x, &y).unwrap();
        assert!(curve.is_equal(&P, &R));
        assert!(R.is_on_curve());
    }
}

#[test]
fn negation_and_subtraction() {
    let curve = Ed25519::new();
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let P = curve.fixed_mult(&random_scalar(&mut rng));
        assert!((&P + &(-&P)).is_identity());
        assert!(curve.add(&P, &(-&P).as_projective_niels()).is_identity());
        assert!((&P - &P).is_identity());
    }
    assert!((-EdwardsPoint::identity()).is_identity());
}

#[test]
fn slice_constructors_reject_wrong_lengths() {
    assert_eq!(CompressedEdwardsY::from_slice(&[]), Err(Error::Decode));
    assert_eq!(Scalar25519::from_slice(&[0u8; 33]), Err(Error::Decode));
    assert_eq!(
        CompressedEdwardsY::identity().decompress().map(|P| P.is_identity()),
        Ok(true)
    );
}

#[cfg(feature = "digest")]
#[test]
fn from_hash_matches_wide_reduction() {
    let msg = b"edwards25519 scalar from a 64-byte digest";
    let s1 = Scalar25519::hash_from_bytes::<Sha512>(msg);

    let mut wide = [0u8; 64];
    wide.copy_from_slice(&Sha512::digest(msg));
    let s2 = Scalar25519::from_bytes_mod_order_wide(&wide);
    assert_eq!(s1, s2);
    assert!(bool::from(s1.is_canonical()));
}

#[cfg(feature = "alloc")]
#[test]
fn boxed_descriptor() {
    let curve = Ed25519::new_boxed();
    let k = Scalar25519::from(2u64);
    assert!(curve.is_equal(&curve.fixed_mult(&k), &Ed25519::basepoint().double()));
}

#[cfg(feature = "rand_core")]
#[test]
fn random_scalars_are_reduced() {
    let curve = Ed25519::new();
    let mut rng = rand_core::OsRng;
    let k = Scalar25519::random(&mut rng);
    assert!(bool::from(k.is_canonical()));
    assert!((&curve.fixed_mult(&k) + &curve.fixed_mult(&(-k))).is_identity());
}
