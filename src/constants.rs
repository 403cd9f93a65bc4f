// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

//! Curve constants: generators, their encodings, and group orders.
//!
//! ```
//! use edwards_groups::constants;
//! use edwards_groups::traits::IsIdentity;
//!
//! let B = constants::ED25519_BASEPOINT_POINT;
//! let l = constants::ED25519_BASEPOINT_ORDER;
//!
//! assert!((&B * &l).is_identity());
//! ```

#![allow(non_snake_case)]

use crate::backend::serial::u64::constants;
use crate::edwards::{CompressedEdwardsY, Ed25519, EdwardsPoint};
use crate::field::{FieldElement, FieldElement448};
use crate::goldilocks::{CompressedGoldilocks, Goldilocks, GoldilocksPoint};
use crate::scalar::{Scalar25519, Scalar448};

/// The Ed25519 basepoint has y = 4/5; the sign bit is 0 since \\(x\\)
/// is chosen to be positive.
pub const ED25519_BASEPOINT_COMPRESSED: CompressedEdwardsY = CompressedEdwardsY([
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66,
]);

/// The Ed25519 basepoint, as an `EdwardsPoint`.
pub const ED25519_BASEPOINT_POINT: EdwardsPoint = EdwardsPoint {
    X: constants::ED25519_BASEPOINT_X,
    Y: constants::ED25519_BASEPOINT_Y,
    Z: FieldElement::ONE,
    T: constants::ED25519_BASEPOINT_T,
};

/// \\( \ell = 2\^{252} + 27742317777372353535851937790883648493 \\), the
/// order of the Ed25519 basepoint.
pub const ED25519_BASEPOINT_ORDER: Scalar25519 = Ed25519::order();

/// The Goldilocks generator, encoded.
pub const GOLDILOCKS_GENERATOR_COMPRESSED: CompressedGoldilocks = CompressedGoldilocks([
    0x14, 0xfa, 0x30, 0xf2, 0x5b, 0x79, 0x08, 0x98, 0xad, 0xc8, 0xd7, 0x4e, 0x2c, 0x13, 0xbd,
    0xfd, 0xc4, 0x39, 0x7c, 0xe6, 0x1c, 0xff, 0xd3, 0x3a, 0xd7, 0xc2, 0xa0, 0x05, 0x1e, 0x9c,
    0x78, 0x87, 0x40, 0x98, 0xa3, 0x6c, 0x73, 0x73, 0xea, 0x4b, 0x62, 0xc7, 0xc9, 0x56, 0x37,
    0x20, 0x76, 0x88, 0x24, 0xbc, 0xb6, 0x6e, 0x71, 0x46, 0x3f, 0x69, 0x00,
]);

/// The Goldilocks generator, as a `GoldilocksPoint`.
pub const GOLDILOCKS_GENERATOR_POINT: GoldilocksPoint = GoldilocksPoint {
    X: constants::GOLDILOCKS_BASE_X,
    Y: constants::GOLDILOCKS_BASE_Y,
    Z: FieldElement448::ONE,
    T: constants::GOLDILOCKS_BASE_T,
};

/// The order \\( \ell \\) of the Goldilocks generator.
pub const GOLDILOCKS_ORDER: Scalar448 = Goldilocks::order();
