// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

//! Errors which may occur when parsing points or scalars from wire
//! formats, or when building a point from affine coordinates.

use core::fmt;
use core::fmt::Display;

/// Errors which may occur while decoding points and scalars.
///
/// Decoding and `from_affine` are the only fallible entry points of the
/// crate; every other operation is total on validated operands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Malformed or non-canonical bytes: a field element or scalar
    /// encoding at or above its modulus, a set reserved bit, the
    /// negative-zero `x` encoding, or a slice of the wrong length.
    Decode,
    /// The coordinates do not satisfy the curve equation, either as
    /// supplied or as recovered from an encoded `y`.
    NotOnCurve,
    /// An internal invariant was violated.  Unreachable for points that
    /// were produced by this crate or that passed validation.
    InvalidPoint,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Decode => write!(f, "Malformed or non-canonical encoding"),
            Error::NotOnCurve => write!(f, "Coordinates are not on the curve"),
            Error::InvalidPoint => write!(f, "Point failed an internal validity check"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
