// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

use crate::backend::serial::curve_models::ProjectiveNielsPoint;
use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar25519;
use crate::traits::Identity;
use crate::window::LookupTable;

use super::times_16;

/// Compute \\( kP \\) in constant time.
///
/// All 256 bits of the scalar are used, so on a point with a torsion
/// component the result depends on the unreduced bytes.
pub(crate) fn mul(point: &EdwardsPoint, scalar: &Scalar25519) -> EdwardsPoint {
    let table = LookupTable::<ProjectiveNielsPoint>::from(point);
    let digits = scalar.as_radix_16();

    // Horner's rule from the top digit, which is 0 or 1.
    let mut acc = &EdwardsPoint::identity() + &table.select(digits[64]);
    for i in (0..64).rev() {
        acc = &times_16(&acc) + &table.select(digits[i]);
    }
    acc.as_extended()
}
