// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

//! Group operations for the edwards25519 curve,
//! \\( -x\^2 + y\^2 = 1 + d x\^2 y\^2 \\) with \\( d = -121665/121666 \\).
//!
//! # Representations
//!
//! An [`EdwardsPoint`] holds extended coordinates \\( (X:Y:Z:T) \\) and is
//! the accumulator of every loop.  Points that are added repeatedly are
//! converted once into a cached form:
//!
//! * [`EdwardsPoint::as_projective_niels`] yields a
//!   [`ProjectiveNielsPoint`], added with [`EdwardsPoint::add_projective_niels`];
//! * [`EdwardsPoint::as_affine_niels`] yields an [`AffineNielsPoint`]
//!   (one inversion), added with [`EdwardsPoint::add_affine_niels`].
//!
//! All three types denote the same affine point; only these explicit
//! conversions cross between them.
//!
//! # Equality and the poison value
//!
//! A point whose \\( Z \\) coordinate is zero is not a point: it marks a
//! failed computation.  Equality testing ([`EdwardsPoint::is_equal`], `==`
//! and `ct_eq`) is false whenever either side has \\( Z = 0 \\), even when
//! a poisoned point is compared with itself.  For that reason
//! `EdwardsPoint` implements `PartialEq` but not `Eq`.
//!
//! # Encoding
//!
//! Points are encoded as in RFC 8032: the 255-bit \\( y \\) coordinate in
//! little-endian order, with the sign of \\( x \\) in the top bit.
//! [`CompressedEdwardsY::decompress`] rejects non-canonical \\( y \\)
//! values and the encoding of \\( x = 0 \\) with the sign bit set.
//!
//! # Scalar multiplication
//!
//! The curve descriptor [`Ed25519`] owns the precomputed basepoint table
//! and provides fixed-base ([`Ed25519::fixed_mult`]) and double-base
//! ([`Ed25519::double_mult`]) multiplication.  Variable-base
//! multiplication is `&point * &scalar`.  All three run in constant time
//! and accept every 32-byte scalar pattern.

#![allow(non_snake_case)]

use core::fmt::Debug;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Neg, Sub, SubAssign};

#[cfg(feature = "alloc")]
use alloc::boxed::Box;

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

pub use crate::backend::serial::curve_models::AffineNielsPoint;
pub use crate::backend::serial::curve_models::ProjectiveNielsPoint;

use crate::backend::serial::curve_models::CompletedPoint;
use crate::backend::serial::curve_models::ProjectivePoint;
use crate::backend::serial::scalar_mul;
use crate::backend::serial::u64::constants;
use crate::errors::Error;
use crate::field::FieldElement;
use crate::scalar::Scalar25519;
use crate::traits::{Identity, IsIdentity, ValidityCheck};
use crate::window::LookupTable;

// ------------------------------------------------------------------------
// Compressed points
// ------------------------------------------------------------------------

/// In "Edwards y" / "Ed25519" format, the curve point \\((x,y)\\) is
/// determined by the \\(y\\)-coordinate and the sign of \\(x\\).
///
/// The first 255 bits of a `CompressedEdwardsY` represent the
/// \\(y\\)-coordinate.  The high bit of the 32nd byte gives the sign of \\(x\\).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct CompressedEdwardsY(pub [u8; 32]);

impl ConstantTimeEq for CompressedEdwardsY {
    fn ct_eq(&self, other: &CompressedEdwardsY) -> Choice {
        self.as_bytes().ct_eq(other.as_bytes())
    }
}

impl Debug for CompressedEdwardsY {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CompressedEdwardsY: {:?}", self.as_bytes())
    }
}

impl CompressedEdwardsY {
    /// View this `CompressedEdwardsY` as an array of bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy this `CompressedEdwardsY` to an array of bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Construct a `CompressedEdwardsY` from a slice of bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the input `bytes` slice does not have
    /// a length of 32.
    pub fn from_slice(bytes: &[u8]) -> Result<CompressedEdwardsY, Error> {
        bytes
            .try_into()
            .map(CompressedEdwardsY)
            .map_err(|_| Error::Decode)
    }

    /// Attempt to decompress to an `EdwardsPoint`.
    ///
    /// # Errors
    ///
    /// * [`Error::Decode`] if the \\(y\\)-coordinate is not canonical
    ///   (at least \\(p\\)), or if \\(x = 0\\) is encoded with the sign
    ///   bit set;
    /// * [`Error::NotOnCurve`] if no point has this \\(y\\)-coordinate.
    pub fn decompress(&self) -> Result<EdwardsPoint, Error> {
        let (is_canonical_y, is_valid_y_coord, X, Y, Z) = decompress::step_1(self);

        if !bool::from(is_canonical_y) {
            return Err(Error::Decode);
        }
        if !bool::from(is_valid_y_coord) {
            return Err(Error::NotOnCurve);
        }

        decompress::step_2(self, X, Y, Z)
    }
}

mod decompress {
    use super::*;

    #[rustfmt::skip] // keep alignment of explanatory comments
    pub(super) fn step_1(
        repr: &CompressedEdwardsY,
    ) -> (Choice, Choice, FieldElement, FieldElement, FieldElement) {
        let Y = FieldElement::from_bytes(repr.as_bytes());
        let Z = FieldElement::ONE;

        // from_bytes ignores the sign bit; compare the rest byte-for-byte
        // with the canonical encoding.
        let mut y_bytes = repr.to_bytes();
        y_bytes[31] &= 0x7f;
        let is_canonical_y = Y.to_bytes().ct_eq(&y_bytes);

        let YY = Y.square();
        let u = &YY - &Z;                            // u =  y²-1
        let v = &(&YY * &constants::EDWARDS_D) + &Z; // v = dy²+1
        let (is_valid_y_coord, X) = FieldElement::sqrt_ratio_i(&u, &v);

        (is_canonical_y, is_valid_y_coord, X, Y, Z)
    }

    #[rustfmt::skip]
    pub(super) fn step_2(
        repr: &CompressedEdwardsY,
        mut X: FieldElement,
        Y: FieldElement,
        Z: FieldElement,
    ) -> Result<EdwardsPoint, Error> {
        // FieldElement::sqrt_ratio_i always returns the nonnegative square root,
        // so we negate according to the supplied sign bit.
        let compressed_sign_bit = Choice::from(repr.as_bytes()[31] >> 7);

        // The only nonnegative x with a negative counterpart equal to
        // itself is zero, so a set sign bit there is a second encoding.
        if bool::from(X.is_zero() & compressed_sign_bit) {
            return Err(Error::Decode);
        }

        X.conditional_negate(compressed_sign_bit);

        Ok(EdwardsPoint {
            X,
            Y,
            Z,
            T: &X * &Y,
        })
    }
}

impl TryFrom<&[u8]> for CompressedEdwardsY {
    type Error = Error;

    fn try_from(slice: &[u8]) -> Result<CompressedEdwardsY, Error> {
        Self::from_slice(slice)
    }
}

impl Identity for CompressedEdwardsY {
    fn identity() -> CompressedEdwardsY {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        CompressedEdwardsY(bytes)
    }
}

impl Default for CompressedEdwardsY {
    /// Returns the identity
    fn default() -> CompressedEdwardsY {
        CompressedEdwardsY::identity()
    }
}

// ------------------------------------------------------------------------
// Serde support
// ------------------------------------------------------------------------
// Serializes to and from `EdwardsPoint` directly, doing compression
// and decompression internally.

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde")]
impl Serialize for EdwardsPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(32)?;
        for byte in self.compress().as_bytes().iter() {
            tup.serialize_element(byte)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl Serialize for CompressedEdwardsY {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(32)?;
        for byte in self.as_bytes().iter() {
            tup.serialize_element(byte)?;
        }
        tup.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for EdwardsPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EdwardsPointVisitor;

        impl<'de> Visitor<'de> for EdwardsPointVisitor {
            type Value = EdwardsPoint;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("a valid point in Edwards y + sign format")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<EdwardsPoint, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut bytes = [0u8; 32];
                #[allow(clippy::needless_range_loop)]
                for i in 0..32 {
                    bytes[i] = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &"expected 32 bytes"))?;
                }
                CompressedEdwardsY(bytes)
                    .decompress()
                    .map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_tuple(32, EdwardsPointVisitor)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CompressedEdwardsY {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CompressedEdwardsYVisitor;

        impl<'de> Visitor<'de> for CompressedEdwardsYVisitor {
            type Value = CompressedEdwardsY;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                formatter.write_str("32 bytes of data")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<CompressedEdwardsY, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut bytes = [0u8; 32];
                #[allow(clippy::needless_range_loop)]
                for i in 0..32 {
                    bytes[i] = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &"expected 32 bytes"))?;
                }
                Ok(CompressedEdwardsY(bytes))
            }
        }

        deserializer.deserialize_tuple(32, CompressedEdwardsYVisitor)
    }
}

// ------------------------------------------------------------------------
// Internal point representations
// ------------------------------------------------------------------------

/// An `EdwardsPoint` represents a point on the Edwards form of Curve25519.
#[derive(Copy, Clone)]
#[allow(missing_docs)]
pub struct EdwardsPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

// ------------------------------------------------------------------------
// Constructors
// ------------------------------------------------------------------------

impl Identity for EdwardsPoint {
    fn identity() -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ONE,
            Z: FieldElement::ONE,
            T: FieldElement::ZERO,
        }
    }
}

impl Default for EdwardsPoint {
    fn default() -> EdwardsPoint {
        EdwardsPoint::identity()
    }
}

// ------------------------------------------------------------------------
// Zeroize implementations for wiping points from memory
// ------------------------------------------------------------------------

#[cfg(feature = "zeroize")]
impl Zeroize for CompressedEdwardsY {
    /// Reset this `CompressedEdwardsY` to the compressed form of the identity element.
    fn zeroize(&mut self) {
        self.0.zeroize();
        self.0[0] = 1;
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for EdwardsPoint {
    /// Reset this `EdwardsPoint` to the identity element.
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Y = FieldElement::ONE;
        self.Z = FieldElement::ONE;
        self.T.zeroize();
    }
}

// ------------------------------------------------------------------------
// Validity checks (for debugging, not CT)
// ------------------------------------------------------------------------

impl ValidityCheck for EdwardsPoint {
    fn is_valid(&self) -> bool {
        let point_on_curve = self.as_projective().is_valid();
        let on_segre_image = (&self.X * &self.Y) == (&self.Z * &self.T);

        point_on_curve && on_segre_image
    }
}

// ------------------------------------------------------------------------
// Constant-time assignment
// ------------------------------------------------------------------------

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &EdwardsPoint, b: &EdwardsPoint, choice: Choice) -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T: FieldElement::conditional_select(&a.T, &b.T, choice),
        }
    }
}

// ------------------------------------------------------------------------
// Equality
// ------------------------------------------------------------------------

impl ConstantTimeEq for EdwardsPoint {
    /// Compare the affine points by cross-multiplying, with no
    /// inversion.  Returns `Choice(0)` if either `Z` is zero.
    fn ct_eq(&self, other: &EdwardsPoint) -> Choice {
        // We would like to check that the point (X/Z, Y/Z) is equal to
        // the point (X'/Z', Y'/Z') without converting into affine
        // coordinates (x, y) and (x', y'), which requires two inversions.
        // We have that X = xZ and X' = x'Z'. Thus, x = x' is equivalent to
        // (xZ)Z' = (x'Z')Z, and similarly for the y-coordinate.
        let both_defined = !self.Z.is_zero() & !other.Z.is_zero();

        (&self.X * &other.Z).ct_eq(&(&other.X * &self.Z))
            & (&self.Y * &other.Z).ct_eq(&(&other.Y * &self.Z))
            & both_defined
    }
}

/// `==` follows [`EdwardsPoint::is_equal`]: a point with `Z = 0` is not
/// equal to itself, so there is no `Eq` impl.
impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

// ------------------------------------------------------------------------
// Point conversions
// ------------------------------------------------------------------------

impl EdwardsPoint {
    /// Construct the point \\((x, y)\\) from affine coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotOnCurve`] unless
    /// \\( -x\^2 + y\^2 = 1 + d x\^2 y\^2 \\).
    pub fn from_affine(x: &FieldElement, y: &FieldElement) -> Result<EdwardsPoint, Error> {
        let xx = x.square();
        let yy = y.square();
        let lhs = &yy - &xx;
        let rhs = &FieldElement::ONE + &(&constants::EDWARDS_D * &(&xx * &yy));
        if !bool::from(lhs.ct_eq(&rhs)) {
            return Err(Error::NotOnCurve);
        }

        Ok(EdwardsPoint {
            X: *x,
            Y: *y,
            Z: FieldElement::ONE,
            T: x * y,
        })
    }

    /// Return the affine coordinates \\((x, y)\\), using one inversion.
    ///
    /// A point with `Z = 0` maps to \\((0, 0)\\), which is not on the curve.
    pub fn to_affine(&self) -> (FieldElement, FieldElement) {
        let recip = self.Z.invert();
        (&self.X * &recip, &self.Y * &recip)
    }

    /// Convert to a ProjectiveNielsPoint, the form used for an operand
    /// that is added repeatedly.
    pub fn as_projective_niels(&self) -> ProjectiveNielsPoint {
        ProjectiveNielsPoint {
            Y_plus_X: &self.Y + &self.X,
            Y_minus_X: &self.Y - &self.X,
            Z: self.Z,
            T2d: &self.T * &constants::EDWARDS_D2,
        }
    }

    /// Convert the representation of this point from extended
    /// coordinates to projective coordinates.
    ///
    /// Free.
    pub(crate) const fn as_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: self.X,
            Y: self.Y,
            Z: self.Z,
        }
    }

    /// Dehomogenize to a AffineNielsPoint.
    /// Mainly for use in precomputations.
    pub fn as_affine_niels(&self) -> AffineNielsPoint {
        let recip = self.Z.invert();
        let x = &self.X * &recip;
        let y = &self.Y * &recip;
        let xy2d = &(&x * &y) * &constants::EDWARDS_D2;
        AffineNielsPoint {
            y_plus_x: &y + &x,
            y_minus_x: &y - &x,
            xy2d,
        }
    }

    /// Compress this point to `CompressedEdwardsY` format.
    pub fn compress(&self) -> CompressedEdwardsY {
        let recip = self.Z.invert();
        let x = &self.X * &recip;
        let y = &self.Y * &recip;
        let mut s: [u8; 32];

        s = y.to_bytes();
        s[31] ^= x.is_negative().unwrap_u8() << 7;
        CompressedEdwardsY(s)
    }

    /// Check the homogenized curve equation and \\( XY = ZT \\).  Not
    /// constant time.  A point with `Z = 0` is rejected.
    pub fn is_on_curve(&self) -> bool {
        !bool::from(self.Z.is_zero()) && self.is_valid()
    }
}

// ------------------------------------------------------------------------
// Doubling and mixed additions
// ------------------------------------------------------------------------

impl EdwardsPoint {
    /// Add `self` and `other`, where `other` is in projective Niels form.
    pub fn add_projective_niels(&self, other: &ProjectiveNielsPoint) -> EdwardsPoint {
        (self + other).as_extended()
    }

    /// Subtract `other`, in projective Niels form, from `self`.
    pub fn sub_projective_niels(&self, other: &ProjectiveNielsPoint) -> EdwardsPoint {
        (self - other).as_extended()
    }

    /// Add `self` and `other`, where `other` is in affine Niels form.
    pub fn add_affine_niels(&self, other: &AffineNielsPoint) -> EdwardsPoint {
        (self + other).as_extended()
    }

    /// Subtract `other`, in affine Niels form, from `self`.
    pub fn sub_affine_niels(&self, other: &AffineNielsPoint) -> EdwardsPoint {
        (self - other).as_extended()
    }

    /// Add this point to itself.
    pub fn double(&self) -> EdwardsPoint {
        self.as_projective().double().as_extended()
    }

    /// Replace this point with its double.
    pub fn double_in_place(&mut self) {
        *self = self.double();
    }

    /// Compare with `other` without inverting.  This is the same relation
    /// as `==`: false whenever either point has `Z = 0`, including when a
    /// point with `Z = 0` is compared with itself.
    pub fn is_equal(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

// ------------------------------------------------------------------------
// Addition and Subtraction
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    fn add(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        (self + &other.as_projective_niels()).as_extended()
    }
}

define_add_variants!(
    LHS = EdwardsPoint,
    RHS = EdwardsPoint,
    Output = EdwardsPoint
);

impl<'b> AddAssign<&'b EdwardsPoint> for EdwardsPoint {
    fn add_assign(&mut self, _rhs: &'b EdwardsPoint) {
        *self = (self as &EdwardsPoint) + _rhs;
    }
}

define_add_assign_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint);

impl<'a, 'b> Sub<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    fn sub(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        (self - &other.as_projective_niels()).as_extended()
    }
}

define_sub_variants!(
    LHS = EdwardsPoint,
    RHS = EdwardsPoint,
    Output = EdwardsPoint
);

impl<'b> SubAssign<&'b EdwardsPoint> for EdwardsPoint {
    fn sub_assign(&mut self, _rhs: &'b EdwardsPoint) {
        *self = (self as &EdwardsPoint) - _rhs;
    }
}

define_sub_assign_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint);

// ------------------------------------------------------------------------
// Negation
// ------------------------------------------------------------------------

impl<'a> Neg for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        EdwardsPoint {
            X: -(&self.X),
            Y: self.Y,
            Z: self.Z,
            T: -(&self.T),
        }
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        -&self
    }
}

// ------------------------------------------------------------------------
// Scalar multiplication
// ------------------------------------------------------------------------

impl<'b> MulAssign<&'b Scalar25519> for EdwardsPoint {
    fn mul_assign(&mut self, scalar: &'b Scalar25519) {
        let result = (self as &EdwardsPoint) * scalar;
        *self = result;
    }
}

define_mul_assign_variants!(LHS = EdwardsPoint, RHS = Scalar25519);

define_mul_variants!(LHS = EdwardsPoint, RHS = Scalar25519, Output = EdwardsPoint);
define_mul_variants!(LHS = Scalar25519, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'a, 'b> Mul<&'b Scalar25519> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    /// Scalar multiplication: compute `scalar * self`.
    ///
    /// For scalar multiplication of a basepoint,
    /// `Ed25519::fixed_mult` is approximately 4x faster.
    fn mul(self, scalar: &'b Scalar25519) -> EdwardsPoint {
        scalar_mul::variable_base::mul(self, scalar)
    }
}

impl<'a, 'b> Mul<&'b EdwardsPoint> for &'a Scalar25519 {
    type Output = EdwardsPoint;

    /// Scalar multiplication: compute `scalar * self`.
    fn mul(self, point: &'b EdwardsPoint) -> EdwardsPoint {
        point * self
    }
}

impl EdwardsPoint {
    /// Multiply by the cofactor: return \\(\[8\]P\\).
    pub fn mul_by_cofactor(&self) -> EdwardsPoint {
        self.mul_by_pow_2(3)
    }

    /// Compute \\([2\^k] P \\) by successive doublings. Requires \\( k > 0 \\).
    pub(crate) fn mul_by_pow_2(&self, k: u32) -> EdwardsPoint {
        debug_assert!(k > 0);
        let mut r: CompletedPoint;
        let mut s = self.as_projective();
        for _ in 0..(k - 1) {
            r = s.double();
            s = r.as_projective();
        }
        // Unroll last iteration so we can go directly as_extended()
        s.double().as_extended()
    }

    /// Determine if this point is of small order.
    ///
    /// # Return
    ///
    /// * `true` if `self` is in the torsion subgroup \\( \mathcal E\[8\] \\);
    /// * `false` if `self` is not in the torsion subgroup \\( \mathcal E\[8\] \\).
    pub fn is_small_order(&self) -> bool {
        self.mul_by_cofactor().is_identity()
    }

    /// Determine if this point is “torsion-free”, i.e., is contained in
    /// the prime-order subgroup.
    pub fn is_torsion_free(&self) -> bool {
        (self * &Ed25519::order()).is_identity()
    }
}

// ------------------------------------------------------------------------
// Precomputed basepoint table
// ------------------------------------------------------------------------

/// A precomputed table of multiples of a basepoint, for accelerating
/// fixed-base scalar multiplication.  One table, for the Ed25519
/// basepoint, is owned by every [`Ed25519`] descriptor.
///
/// Entry `i` holds \\( [1..8] \cdot 256\^i B \\) in affine Niels form.
/// Thirty-three entries cover the 65 radix-16 digits of a 32-byte
/// scalar.
#[derive(Clone)]
pub struct EdwardsBasepointTable(pub(crate) [LookupTable<AffineNielsPoint>; 33]);

impl EdwardsBasepointTable {
    /// Create a table of precomputed multiples of `basepoint`.
    pub fn create(basepoint: &EdwardsPoint) -> EdwardsBasepointTable {
        let mut P = *basepoint;
        EdwardsBasepointTable(core::array::from_fn(|_| {
            let table = LookupTable::<AffineNielsPoint>::from(&P);
            P = P.mul_by_pow_2(8);
            table
        }))
    }

    /// Get the basepoint for this table as an `EdwardsPoint`.
    pub fn basepoint(&self) -> EdwardsPoint {
        // self.0[0].select(1) = 1*(16^2)^0*B
        // but as an `AffineNielsPoint`, so add identity to convert to extended.
        EdwardsPoint::identity().add_affine_niels(&self.0[0].select(1))
    }

    /// The multiples \\( [1..8]B \\) of the basepoint.
    pub(crate) fn first_window(&self) -> &LookupTable<AffineNielsPoint> {
        &self.0[0]
    }

    /// Compute \\( aB \\) with the even/odd digit split.
    ///
    /// Write \\( a = \sum\_{i=0}\^{64} a\_i 16\^i \\) with signed digits
    /// \\( -8 \leq a\_i < 8 \\) (the last one in \\( \{0, 1\} \\)).  Entry
    /// `self.0[j]` holds \\( [1..8] \cdot 256\^j B \\), so
    /// $$
    ///     aB = \sum\_{j} a\_{2j} 256\^j B + 16 \sum\_{j} a\_{2j+1} 256\^j B
    /// $$
    /// needs 65 table selections and four doublings.
    pub(crate) fn mul(&self, scalar: &Scalar25519) -> EdwardsPoint {
        let a = scalar.as_radix_16();

        let tables = &self.0;
        let mut P = EdwardsPoint::identity();

        for i in (0..65).filter(|x| x % 2 == 1) {
            P = P.add_affine_niels(&tables[i / 2].select(a[i]));
        }

        P = P.mul_by_pow_2(4);

        for i in (0..65).filter(|x| x % 2 == 0) {
            P = P.add_affine_niels(&tables[i / 2].select(a[i]));
        }

        P
    }
}

impl Debug for EdwardsBasepointTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "EdwardsBasepointTable([\n")?;
        for i in 0..33 {
            write!(f, "\t{:?},\n", &self.0[i])?;
        }
        write!(f, "])")
    }
}

// ------------------------------------------------------------------------
// Curve descriptor
// ------------------------------------------------------------------------

/// The edwards25519 curve: its constants, and the basepoint table used
/// by fixed-base and double-base multiplication.
///
/// Building a descriptor computes the table (33 windows of 8 affine
/// points, one inversion each); after that the descriptor is immutable
/// and can be shared between threads by reference.
#[derive(Clone, Debug)]
pub struct Ed25519 {
    table: EdwardsBasepointTable,
}

impl Ed25519 {
    /// Build the descriptor and its basepoint table.
    pub fn new() -> Ed25519 {
        log::debug!("building edwards25519 basepoint table (33 windows)");
        let table = EdwardsBasepointTable::create(&Ed25519::basepoint());
        log::debug!("edwards25519 basepoint table ready");
        Ed25519 { table }
    }

    /// Build the descriptor on the heap.
    #[cfg(feature = "alloc")]
    pub fn new_boxed() -> Box<Ed25519> {
        Box::new(Ed25519::new())
    }

    /// The Ed25519 basepoint \\(B\\), with \\(y = 4/5\\) and \\(x\\)
    /// positive.
    pub fn basepoint() -> EdwardsPoint {
        crate::constants::ED25519_BASEPOINT_POINT
    }

    /// The order \\( \ell \\) of the basepoint, as an unreduced scalar.
    pub const fn order() -> Scalar25519 {
        Scalar25519::from_bytes([
            0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9,
            0xde, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x10,
        ])
    }

    /// The cofactor: the group has order \\( 8 \ell \\).
    pub const fn cofactor() -> u8 {
        8
    }

    /// The identity \\( (0, 1) \\).
    pub fn identity(&self) -> EdwardsPoint {
        EdwardsPoint::identity()
    }

    /// The precomputed basepoint table.
    pub fn basepoint_table(&self) -> &EdwardsBasepointTable {
        &self.table
    }

    /// Compute \\( kB \\) for the basepoint \\( B \\) through the
    /// precomputed table.
    pub fn fixed_mult(&self, k: &Scalar25519) -> EdwardsPoint {
        self.table.mul(k)
    }

    /// Compute \\( kP + lB \\) in one interleaved pass, in constant time.
    pub fn double_mult(&self, P: &EdwardsPoint, k: &Scalar25519, l: &Scalar25519) -> EdwardsPoint {
        scalar_mul::double_base::mul(k, P, l, self.table.first_window())
    }

    /// Add `Q`, in projective Niels form, into `P`.
    pub fn add(&self, P: &EdwardsPoint, Q: &ProjectiveNielsPoint) -> EdwardsPoint {
        P.add_projective_niels(Q)
    }

    /// Add `Q`, in affine Niels form, into `P`.
    pub fn mix_add(&self, P: &EdwardsPoint, Q: &AffineNielsPoint) -> EdwardsPoint {
        P.add_affine_niels(Q)
    }

    /// Double `P` in place.
    pub fn double(&self, P: &mut EdwardsPoint) {
        P.double_in_place();
    }

    /// See [`EdwardsPoint::is_equal`].
    pub fn is_equal(&self, P: &EdwardsPoint, Q: &EdwardsPoint) -> bool {
        P.is_equal(Q)
    }

    /// Affine coordinates of `P`, with a single inversion.
    pub fn to_affine(&self, P: &EdwardsPoint) -> (FieldElement, FieldElement) {
        P.to_affine()
    }
}

impl Default for Ed25519 {
    fn default() -> Ed25519 {
        Ed25519::new()
    }
}

// ------------------------------------------------------------------------
// Debug traits
// ------------------------------------------------------------------------

impl Debug for EdwardsPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "EdwardsPoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?},\n\tT: {:?}\n}}",
            &self.X, &self.Y, &self.Z, &self.T
        )
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
