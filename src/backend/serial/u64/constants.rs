// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

//! This module contains backend-specific constant values, such as the 64-bit limbs of curve constants.

use super::field::FieldElement51;
use super::field448::FieldElement56;

/// Edwards `d` value, equal to `-121665/121666 mod p`.
pub(crate) const EDWARDS_D: FieldElement51 = FieldElement51::from_limbs([
    929955233495203,
    466365720129213,
    1662059464998953,
    2033849074728123,
    1442794654840575,
]);

/// Edwards `2*d` value, equal to `2*(-121665/121666) mod p`.
pub(crate) const EDWARDS_D2: FieldElement51 = FieldElement51::from_limbs([
    1859910466990425,
    932731440258426,
    1072319116312658,
    1815898335770999,
    633789495995903,
]);

/// Precomputed value of one of the square roots of -1 (mod p)
pub(crate) const SQRT_M1: FieldElement51 = FieldElement51::from_limbs([
    1718705420411056,
    234908883556509,
    2233514472574048,
    2117202627021982,
    765476049583133,
]);

/// Affine `x` of the Ed25519 basepoint.
pub(crate) const ED25519_BASEPOINT_X: FieldElement51 = FieldElement51::from_limbs([
    1738742601995546,
    1146398526822698,
    2070867633025821,
    562264141797630,
    587772402128613,
]);

/// Affine `y = 4/5` of the Ed25519 basepoint.
pub(crate) const ED25519_BASEPOINT_Y: FieldElement51 = FieldElement51::from_limbs([
    1801439850948184,
    1351079888211148,
    450359962737049,
    900719925474099,
    1801439850948198,
]);

/// `x*y` of the Ed25519 basepoint.
pub(crate) const ED25519_BASEPOINT_T: FieldElement51 = FieldElement51::from_limbs([
    1841354044333475,
    16398895984059,
    755974180946558,
    900171276175154,
    1821297809914039,
]);

/// The Goldilocks `d = -39081 mod p`.
pub(crate) const GOLDILOCKS_D: FieldElement56 = FieldElement56::from_limbs([
    0xffffffffff6756,
    0xffffffffffffff,
    0xffffffffffffff,
    0xffffffffffffff,
    0xfffffffffffffe,
    0xffffffffffffff,
    0xffffffffffffff,
    0xffffffffffffff,
]);

/// Affine `x` of the Goldilocks generator.
pub(crate) const GOLDILOCKS_BASE_X: FieldElement56 = FieldElement56::from_limbs([
    0x26a82bc70cc05e,
    0x80e18b00938e26,
    0xf72ab66511433b,
    0xa3d3a46412ae1a,
    0x0f1767ea6de324,
    0x36da9e14657047,
    0xed221d15a622bf,
    0x4f1970c66bed0d,
]);

/// Affine `y` of the Goldilocks generator.
pub(crate) const GOLDILOCKS_BASE_Y: FieldElement56 = FieldElement56::from_limbs([
    0x08795bf230fa14,
    0x132c4ed7c8ad98,
    0x1ce67c39c4fdbd,
    0x05a0c2d73ad3ff,
    0xa3984087789c1e,
    0xc7624bea73736c,
    0x248876203756c9,
    0x693f46716eb6bc,
]);

/// `x*y` of the Goldilocks generator.
pub(crate) const GOLDILOCKS_BASE_T: FieldElement56 = FieldElement56::from_limbs([
    0x06624e82af95f3,
    0xa07d85662d1deb,
    0x90b5b27da1f78f,
    0xe2356d58f179de,
    0x8451d260d71667,
    0x91c9c5056a183f,
    0x6ccec39d2d508d,
    0xc75eb58aee221c,
]);
