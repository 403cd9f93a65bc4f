// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

//! Traits shared by the point types of both curves.

use subtle::ConstantTimeEq;

/// Point types with a neutral element.
pub trait Identity {
    /// The neutral element \\( (0, 1) \\).
    fn identity() -> Self;
}

/// Comparison against the neutral element.
pub trait IsIdentity {
    /// Whether this point is the neutral element.  A point with
    /// \\( Z = 0 \\) is not.
    fn is_identity(&self) -> bool;
}

impl<T> IsIdentity for T
where
    T: ConstantTimeEq + Identity,
{
    fn is_identity(&self) -> bool {
        self.ct_eq(&T::identity()).into()
    }
}

/// Curve-equation check on internal coordinates, for debug assertions
/// and tests.  Not constant time.
pub(crate) trait ValidityCheck {
    fn is_valid(&self) -> bool;
}
