// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

//! Constant-time edwards25519 scalar multiplication.
//!
//! Digit recoding, loop bounds and table scans do not depend on the
//! scalars.  Fixed-base multiplication lives with its table in
//! [`crate::edwards::EdwardsBasepointTable`].

#![allow(non_snake_case)]

use crate::backend::serial::curve_models::CompletedPoint;
use crate::edwards::EdwardsPoint;

/// \\( kP \\) for a variable point \\( P \\).
pub mod variable_base;

/// \\( kP + lB \\) for a fixed basepoint \\( B \\).
pub mod double_base;

/// Multiply by 16 with four doublings, staying in \\( \mathbb P\^2 \\)
/// between them.
fn times_16(P: &CompletedPoint) -> EdwardsPoint {
    let mut Q = P.as_projective().double();
    for _ in 0..3 {
        Q = Q.as_projective().double();
    }
    Q.as_extended()
}
