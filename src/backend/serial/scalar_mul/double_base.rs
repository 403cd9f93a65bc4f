// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

#![allow(non_snake_case)]

use crate::backend::serial::curve_models::{AffineNielsPoint, ProjectiveNielsPoint};
use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar25519;
use crate::traits::Identity;
use crate::window::LookupTable;

use super::times_16;

/// Compute \\(aA + bB\\) in constant time, where `basepoint_table`
/// holds \\( [1..8]B \\).
///
/// Both digit expansions are walked together from the top, so the
/// sixty-four rounds of four doublings are shared.  Each round adds one
/// projective Niels entry for \\(A\\) and one affine Niels entry for
/// \\(B\\).
pub(crate) fn mul(
    a: &Scalar25519,
    A: &EdwardsPoint,
    b: &Scalar25519,
    basepoint_table: &LookupTable<AffineNielsPoint>,
) -> EdwardsPoint {
    let table_A = LookupTable::<ProjectiveNielsPoint>::from(A);

    let a_digits = a.as_radix_16();
    let b_digits = b.as_radix_16();

    let mut acc = &EdwardsPoint::identity() + &table_A.select(a_digits[64]);
    acc = &acc.as_extended() + &basepoint_table.select(b_digits[64]);
    for i in (0..64).rev() {
        acc = &times_16(&acc) + &table_A.select(a_digits[i]);
        acc = &acc.as_extended() + &basepoint_table.select(b_digits[i]);
    }
    acc.as_extended()
}
