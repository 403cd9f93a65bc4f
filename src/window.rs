// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

//! Signed-digit window tables, shared by both curves.

#![allow(non_snake_case)]

use core::fmt::Debug;

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use crate::traits::Identity;

use crate::backend::serial::curve_models::AffineNielsPoint;
use crate::backend::serial::curve_models::ProjectiveNielsPoint;
use crate::edwards::EdwardsPoint;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// The multiples \\( P, 2P, \ldots, 8P \\) of one point, read back with
/// [`LookupTable::select`] for any digit in \\( [-8, 8] \\).
///
/// There is deliberately no `Index` impl: every read goes through the
/// constant-time scan.
#[derive(Copy, Clone)]
pub struct LookupTable<T>(pub(crate) [T; 8]);

impl<T: Copy> LookupTable<T> {
    /// Fill a table from \\( P \\), where `next` maps \\( jP \\) to
    /// \\( (j+1)P \\).
    pub(crate) fn from_multiples<F>(P: T, mut next: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        let mut points = [P; 8];
        for j in 1..8 {
            points[j] = next(&points[j - 1]);
        }
        LookupTable(points)
    }
}

impl<T> LookupTable<T>
where
    T: Identity + ConditionallySelectable + ConditionallyNegatable,
{
    /// Return \\( xP \\) for \\( -8 \leq x \leq 8 \\).  All eight entries
    /// are touched whatever the digit.
    pub fn select(&self, x: i8) -> T {
        debug_assert!((-8..=8).contains(&x));

        // All ones when x < 0.
        let sign = x >> 7;
        let magnitude = ((x ^ sign) - sign) as u8;

        let mut t = T::identity();
        for (j, point) in (1u8..).zip(self.0.iter()) {
            t.conditional_assign(point, magnitude.ct_eq(&j));
        }
        t.conditional_negate(Choice::from((sign & 1) as u8));

        t
    }
}

impl<T: Debug> Debug for LookupTable<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "LookupTable({:?})", self.0)
    }
}

impl<'a> From<&'a EdwardsPoint> for LookupTable<ProjectiveNielsPoint> {
    fn from(P: &'a EdwardsPoint) -> Self {
        LookupTable::from_multiples(P.as_projective_niels(), |jP| {
            (P + jP).as_extended().as_projective_niels()
        })
    }
}

impl<'a> From<&'a EdwardsPoint> for LookupTable<AffineNielsPoint> {
    /// One inversion per entry.
    fn from(P: &'a EdwardsPoint) -> Self {
        LookupTable::from_multiples(P.as_affine_niels(), |jP| {
            (P + jP).as_extended().as_affine_niels()
        })
    }
}

#[cfg(feature = "zeroize")]
impl<T> Zeroize for LookupTable<T>
where
    T: Copy + Zeroize,
{
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
