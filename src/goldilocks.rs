// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

//! Group operations for the Goldilocks curve,
//! \\( x\^2 + y\^2 = 1 + d x\^2 y\^2 \\) with \\( d = -39081 \\) over
//! \\( \mathbb F\_p \\), \\( p = 2\^{448} - 2\^{224} - 1 \\).
//!
//! The group has order \\( 4 \ell \\), where \\( \ell \\) is a 446-bit
//! prime.  Since \\( d \\) is not a square, the unified addition law used
//! here is complete: the same branch-free formula handles doubling, the
//! identity and points of small order.
//!
//! Points are held in extended coordinates \\( (X : Y : Z : T) \\) with
//! \\( x = X/Z \\), \\( y = Y/Z \\) and \\( TZ = XY \\).
//!
//! # Encoding
//!
//! A point is encoded in 57 bytes: \\( y \\) as 56 little-endian bytes,
//! followed by a byte whose top bit is the sign (low bit) of \\( x \\).
//! The seven low bits of the last byte are reserved and must be zero.
//!
//! # Scalar multiplication
//!
//! [`Goldilocks`] owns a table of multiples of the generator and provides
//! [`Goldilocks::scalar_base_mult`], [`Goldilocks::scalar_mult`] and
//! [`Goldilocks::combined_mult`].  All of them use signed radix-16 digits
//! and constant-time table selection, so neither branches nor memory
//! accesses depend on the scalar.

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

use crate::backend::serial::u64::constants;
use crate::errors::Error;
use crate::field::FieldElement448;
use crate::scalar::Scalar448;
use crate::traits::{Identity, IsIdentity, ValidityCheck};
use crate::window::LookupTable;

/// Number of radix-16 digits of a 56-byte scalar.
const DIGITS: usize = 113;

/// Number of fixed-base windows: one per pair of digits.
const WINDOWS: usize = 57;

// ------------------------------------------------------------------------
// Compressed points
// ------------------------------------------------------------------------

/// The 57-byte encoding of a Goldilocks point.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct CompressedGoldilocks(pub [u8; 57]);

impl ConstantTimeEq for CompressedGoldilocks {
    fn ct_eq(&self, other: &CompressedGoldilocks) -> Choice {
        self.as_bytes().ct_eq(other.as_bytes())
    }
}

impl Debug for CompressedGoldilocks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CompressedGoldilocks: {:?}", &self.0[..])
    }
}

impl CompressedGoldilocks {
    /// View this `CompressedGoldilocks` as an array of bytes.
    pub const fn as_bytes(&self) -> &[u8; 57] {
        &self.0
    }

    /// Copy this `CompressedGoldilocks` to an array of bytes.
    pub const fn to_bytes(&self) -> [u8; 57] {
        self.0
    }

    /// Construct a `CompressedGoldilocks` from a slice of bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if `bytes` is not 57 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<CompressedGoldilocks, Error> {
        bytes
            .try_into()
            .map(CompressedGoldilocks)
            .map_err(|_| Error::Decode)
    }

    /// Attempt to decompress to a `GoldilocksPoint`.
    ///
    /// # Errors
    ///
    /// * [`Error::Decode`] if a reserved bit is set, if \\( y \geq p \\),
    ///   or if \\( x = 0 \\) is encoded with the sign bit set;
    /// * [`Error::NotOnCurve`] if no point has this \\( y \\).
    pub fn decompress(&self) -> Result<GoldilocksPoint, Error> {
        let sign_byte = self.0[56];
        if sign_byte & 0x7f != 0 {
            return Err(Error::Decode);
        }

        let mut y_bytes = [0u8; 56];
        y_bytes.copy_from_slice(&self.0[..56]);
        let y = FieldElement448::from_bytes(&y_bytes);
        if !bool::from(y.to_bytes().ct_eq(&y_bytes)) {
            return Err(Error::Decode);
        }

        // x^2 = (y^2 - 1) / (d y^2 - 1)
        let yy = y.square();
        let u = &yy - &FieldElement448::ONE;
        let v = &(&yy * &constants::GOLDILOCKS_D) - &FieldElement448::ONE;
        let (is_square, mut x) = FieldElement448::sqrt_ratio(&u, &v);
        if !bool::from(is_square) {
            return Err(Error::NotOnCurve);
        }

        let sign = Choice::from(sign_byte >> 7);
        if bool::from(x.is_zero() & sign) {
            return Err(Error::Decode);
        }
        x.conditional_negate(sign);

        Ok(GoldilocksPoint {
            X: x,
            Y: y,
            Z: FieldElement448::ONE,
            T: &x * &y,
        })
    }
}

impl TryFrom<&[u8]> for CompressedGoldilocks {
    type Error = Error;

    fn try_from(slice: &[u8]) -> Result<CompressedGoldilocks, Error> {
        Self::from_slice(slice)
    }
}

impl Identity for CompressedGoldilocks {
    fn identity() -> CompressedGoldilocks {
        let mut bytes = [0u8; 57];
        bytes[0] = 1;
        CompressedGoldilocks(bytes)
    }
}

impl Default for CompressedGoldilocks {
    fn default() -> CompressedGoldilocks {
        CompressedGoldilocks::identity()
    }
}

// ------------------------------------------------------------------------
// Serde support
// ------------------------------------------------------------------------

#[cfg(feature = "serde")]
use serde::de::Visitor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "serde")]
fn serialize_57<S: Serializer>(bytes: &[u8; 57], serializer: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeTuple;
    let mut tup = serializer.serialize_tuple(57)?;
    for byte in bytes.iter() {
        tup.serialize_element(byte)?;
    }
    tup.end()
}

#[cfg(feature = "serde")]
struct Bytes57Visitor;

#[cfg(feature = "serde")]
impl<'de> Visitor<'de> for Bytes57Visitor {
    type Value = [u8; 57];

    fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        formatter.write_str("57 bytes of data")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<[u8; 57], A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut bytes = [0u8; 57];
        #[allow(clippy::needless_range_loop)]
        for i in 0..57 {
            bytes[i] = seq
                .next_element()?
                .ok_or_else(|| serde::de::Error::invalid_length(i, &"expected 57 bytes"))?;
        }
        Ok(bytes)
    }
}

#[cfg(feature = "serde")]
impl Serialize for CompressedGoldilocks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_57(self.as_bytes(), serializer)
    }
}

#[cfg(feature = "serde")]
impl Serialize for GoldilocksPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_57(self.compress().as_bytes(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CompressedGoldilocks {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_tuple(57, Bytes57Visitor)
            .map(CompressedGoldilocks)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for GoldilocksPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = deserializer.deserialize_tuple(57, Bytes57Visitor)?;
        CompressedGoldilocks(bytes)
            .decompress()
            .map_err(serde::de::Error::custom)
    }
}

// ------------------------------------------------------------------------
// Points
// ------------------------------------------------------------------------

/// A point on the Goldilocks curve in extended coordinates.
#[derive(Copy, Clone)]
pub struct GoldilocksPoint {
    pub(crate) X: FieldElement448,
    pub(crate) Y: FieldElement448,
    pub(crate) Z: FieldElement448,
    pub(crate) T: FieldElement448,
}

impl Identity for GoldilocksPoint {
    fn identity() -> GoldilocksPoint {
        GoldilocksPoint {
            X: FieldElement448::ZERO,
            Y: FieldElement448::ONE,
            Z: FieldElement448::ONE,
            T: FieldElement448::ZERO,
        }
    }
}

impl Default for GoldilocksPoint {
    fn default() -> GoldilocksPoint {
        GoldilocksPoint::identity()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for GoldilocksPoint {
    /// Reset this point to the identity.
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Y = FieldElement448::ONE;
        self.Z = FieldElement448::ONE;
        self.T.zeroize();
    }
}

impl ConditionallySelectable for GoldilocksPoint {
    fn conditional_select(
        a: &GoldilocksPoint,
        b: &GoldilocksPoint,
        choice: Choice,
    ) -> GoldilocksPoint {
        GoldilocksPoint {
            X: FieldElement448::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement448::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement448::conditional_select(&a.Z, &b.Z, choice),
            T: FieldElement448::conditional_select(&a.T, &b.T, choice),
        }
    }
}

impl ConstantTimeEq for GoldilocksPoint {
    /// Cross-multiplied comparison.  `Choice(0)` if either `Z` is zero.
    fn ct_eq(&self, other: &GoldilocksPoint) -> Choice {
        let both_defined = !self.Z.is_zero() & !other.Z.is_zero();

        (&self.X * &other.Z).ct_eq(&(&other.X * &self.Z))
            & (&self.Y * &other.Z).ct_eq(&(&other.Y * &self.Z))
            & both_defined
    }
}

/// A point with `Z = 0` is not equal to itself; there is no `Eq` impl.
impl PartialEq for GoldilocksPoint {
    fn eq(&self, other: &GoldilocksPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl ValidityCheck for GoldilocksPoint {
    fn is_valid(&self) -> bool {
        // X^2 + Y^2 = Z^2 + d T^2
        let lhs = &self.X.square() + &self.Y.square();
        let rhs = &self.Z.square() + &(&constants::GOLDILOCKS_D * &self.T.square());
        let on_segre_image = (&self.T * &self.Z) == (&self.X * &self.Y);

        lhs == rhs && on_segre_image
    }
}

impl Debug for GoldilocksPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "GoldilocksPoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?},\n\tT: {:?}\n}}",
            &self.X, &self.Y, &self.Z, &self.T
        )
    }
}

impl GoldilocksPoint {
    /// Construct the point \\((x, y)\\).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotOnCurve`] unless
    /// \\( x\^2 + y\^2 = 1 + d x\^2 y\^2 \\).
    pub fn from_affine(
        x: &FieldElement448,
        y: &FieldElement448,
    ) -> Result<GoldilocksPoint, Error> {
        let P = GoldilocksPoint {
            X: *x,
            Y: *y,
            Z: FieldElement448::ONE,
            T: x * y,
        };
        if !P.is_valid() {
            return Err(Error::NotOnCurve);
        }
        Ok(P)
    }

    /// Return \\((x, y)\\) using one inversion.
    pub fn to_affine(&self) -> (FieldElement448, FieldElement448) {
        let recip = self.Z.invert();
        (&self.X * &recip, &self.Y * &recip)
    }

    /// Encode this point in 57 bytes.
    pub fn compress(&self) -> CompressedGoldilocks {
        let (x, y) = self.to_affine();
        let mut bytes = [0u8; 57];
        bytes[..56].copy_from_slice(&y.to_bytes());
        bytes[56] = x.is_negative().unwrap_u8() << 7;
        CompressedGoldilocks(bytes)
    }

    /// Check \\( X\^2 + Y\^2 = Z\^2 + d T\^2 \\) and \\( TZ = XY \\).
    /// A point with `Z = 0` (such as all-zero coordinates) is rejected.
    pub fn is_on_curve(&self) -> bool {
        !bool::from(self.Z.is_zero()) && self.is_valid()
    }

    /// Complete doubling.
    #[rustfmt::skip] // keep alignment of explanatory comments
    pub fn double(&self) -> GoldilocksPoint {
        let A = self.X.square();                              // X^2
        let B = self.Y.square();                              // Y^2
        let C = &self.Z.square() + &self.Z.square();          // 2Z^2
        let E = &(&(&self.X + &self.Y).square() - &A) - &B;   // 2XY
        let G = &A + &B;
        let F = &G - &C;
        let H = &A - &B;

        GoldilocksPoint {
            X: &E * &F,
            Y: &G * &H,
            Z: &F * &G,
            T: &E * &H,
        }
    }

    /// Compute \\( [2\^k] P \\), \\( k > 0 \\).
    pub(crate) fn mul_by_pow_2(&self, k: u32) -> GoldilocksPoint {
        debug_assert!(k > 0);
        let mut P = self.double();
        for _ in 1..k {
            P = P.double();
        }
        P
    }

    /// Negate in place by flipping the signs of `X` and `T`.
    pub fn negate(&mut self) {
        self.X.negate();
        self.T.negate();
    }

    /// Compute \\( [4] P \\), clearing the small-order component.
    pub fn mul_by_cofactor(&self) -> GoldilocksPoint {
        self.mul_by_pow_2(2)
    }

    /// Whether `self` lies in the 4-torsion subgroup.
    pub fn is_small_order(&self) -> bool {
        self.mul_by_cofactor().is_identity()
    }

    /// Whether `self` lies in the subgroup of order \\( \ell \\).
    pub fn is_torsion_free(&self) -> bool {
        (self * &Goldilocks::order()).is_identity()
    }

    /// Constant-time variable-base multiplication, walking the 113
    /// signed radix-16 digits from the top.
    fn mul_variable_base(&self, scalar: &Scalar448) -> GoldilocksPoint {
        let table = LookupTable::<GoldilocksPoint>::from(self);
        let digits: [i8; DIGITS] = scalar.as_radix_16();

        let mut Q = table.select(digits[DIGITS - 1]);
        for i in (0..DIGITS - 1).rev() {
            Q = Q.mul_by_pow_2(4);
            Q = &Q + &table.select(digits[i]);
        }
        Q
    }
}

impl<'a> From<&'a GoldilocksPoint> for LookupTable<GoldilocksPoint> {
    fn from(P: &'a GoldilocksPoint) -> Self {
        LookupTable::from_multiples(*P, |jP| P + jP)
    }
}

// ------------------------------------------------------------------------
// Addition and Subtraction
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b GoldilocksPoint> for &'a GoldilocksPoint {
    type Output = GoldilocksPoint;

    /// Complete unified addition.
    #[rustfmt::skip] // keep alignment of explanatory comments
    fn add(self, other: &'b GoldilocksPoint) -> GoldilocksPoint {
        let A = &self.X * &other.X;
        let B = &self.Y * &other.Y;
        let C = &constants::GOLDILOCKS_D * &(&self.T * &other.T);
        let D = &self.Z * &other.Z;
        let E = &(&(&(&self.X + &self.Y) * &(&other.X + &other.Y)) - &A) - &B; // X1Y2 + Y1X2
        let F = &D - &C;
        let G = &D + &C;
        let H = &B - &A;

        GoldilocksPoint {
            X: &E * &F,
            Y: &G * &H,
            Z: &F * &G,
            T: &E * &H,
        }
    }
}

define_add_variants!(
    LHS = GoldilocksPoint,
    RHS = GoldilocksPoint,
    Output = GoldilocksPoint
);

impl<'b> AddAssign<&'b GoldilocksPoint> for GoldilocksPoint {
    fn add_assign(&mut self, rhs: &'b GoldilocksPoint) {
        *self = (self as &GoldilocksPoint) + rhs;
    }
}

define_add_assign_variants!(LHS = GoldilocksPoint, RHS = GoldilocksPoint);

impl<'a, 'b> Sub<&'b GoldilocksPoint> for &'a GoldilocksPoint {
    type Output = GoldilocksPoint;
    fn sub(self, other: &'b GoldilocksPoint) -> GoldilocksPoint {
        self + &(-other)
    }
}

define_sub_variants!(
    LHS = GoldilocksPoint,
    RHS = GoldilocksPoint,
    Output = GoldilocksPoint
);

impl<'b> SubAssign<&'b GoldilocksPoint> for GoldilocksPoint {
    fn sub_assign(&mut self, rhs: &'b GoldilocksPoint) {
        *self = (self as &GoldilocksPoint) - rhs;
    }
}

define_sub_assign_variants!(LHS = GoldilocksPoint, RHS = GoldilocksPoint);

impl<'a> Neg for &'a GoldilocksPoint {
    type Output = GoldilocksPoint;

    fn neg(self) -> GoldilocksPoint {
        let mut P = *self;
        P.negate();
        P
    }
}

impl Neg for GoldilocksPoint {
    type Output = GoldilocksPoint;

    fn neg(self) -> GoldilocksPoint {
        -&self
    }
}

// ------------------------------------------------------------------------
// Scalar multiplication
// ------------------------------------------------------------------------

impl<'a, 'b> Mul<&'b Scalar448> for &'a GoldilocksPoint {
    type Output = GoldilocksPoint;

    fn mul(self, scalar: &'b Scalar448) -> GoldilocksPoint {
        self.mul_variable_base(scalar)
    }
}

impl<'a, 'b> Mul<&'b GoldilocksPoint> for &'a Scalar448 {
    type Output = GoldilocksPoint;

    fn mul(self, point: &'b GoldilocksPoint) -> GoldilocksPoint {
        point * self
    }
}

define_mul_variants!(LHS = GoldilocksPoint, RHS = Scalar448, Output = GoldilocksPoint);
define_mul_variants!(LHS = Scalar448, RHS = GoldilocksPoint, Output = GoldilocksPoint);

impl<'b> MulAssign<&'b Scalar448> for GoldilocksPoint {
    fn mul_assign(&mut self, scalar: &'b Scalar448) {
        *self = (self as &GoldilocksPoint) * scalar;
    }
}

define_mul_assign_variants!(LHS = GoldilocksPoint, RHS = Scalar448);

// ------------------------------------------------------------------------
// Curve descriptor
// ------------------------------------------------------------------------

/// The Goldilocks curve together with its fixed-base table.
///
/// Window `i` of the table holds \\( [1..8] \cdot 256\^i G \\).  Building
/// it takes a few hundred point operations; afterwards the descriptor is
/// read-only.
#[derive(Clone, Debug)]
pub struct Goldilocks {
    tables: [LookupTable<GoldilocksPoint>; WINDOWS],
}

impl Goldilocks {
    /// Build the descriptor and its generator table.
    ///
    /// The descriptor is over 100 KiB; use [`Goldilocks::new_boxed`] on
    /// threads with small stacks.
    pub fn new() -> Goldilocks {
        let mut curve = Goldilocks {
            tables: [LookupTable([GoldilocksPoint::identity(); 8]); WINDOWS],
        };
        curve.fill_tables();
        curve
    }

    /// Build the descriptor directly on the heap.  The table is filled in
    /// place, one window at a time, so it never passes through the stack.
    #[cfg(feature = "alloc")]
    pub fn new_boxed() -> Box<Goldilocks> {
        use alloc::alloc::{alloc_zeroed, handle_alloc_error, Layout};

        let layout = Layout::new::<Goldilocks>();
        // SAFETY: `Goldilocks` has nonzero size, and it is plain `u64`
        // limbs all the way down, so all-zero bytes are a valid value.
        // The allocation comes from the global allocator with the layout
        // of `Goldilocks`, as `Box::from_raw` requires.
        let mut curve = unsafe {
            let ptr = alloc_zeroed(layout) as *mut Goldilocks;
            if ptr.is_null() {
                handle_alloc_error(layout);
            }
            Box::from_raw(ptr)
        };
        curve.fill_tables();
        curve
    }

    fn fill_tables(&mut self) {
        log::debug!("building goldilocks generator table ({} windows)", WINDOWS);
        let mut P = Goldilocks::generator();
        for table in self.tables.iter_mut() {
            *table = LookupTable::<GoldilocksPoint>::from(&P);
            P = P.mul_by_pow_2(8);
        }
        log::debug!("goldilocks generator table ready");
    }

    /// The identity \\( (0, 1) \\).
    pub fn identity(&self) -> GoldilocksPoint {
        GoldilocksPoint::identity()
    }

    /// The standard generator \\( G \\) of the order-\\( \ell \\) subgroup.
    pub fn generator() -> GoldilocksPoint {
        crate::constants::GOLDILOCKS_GENERATOR_POINT
    }

    /// The order \\( \ell = 2\^{446} - 13818066809895115352007386748515426880336692474882178609894547503885 \\),
    /// as an unreduced scalar.
    pub const fn order() -> Scalar448 {
        Scalar448::from_bytes([
            0xf3, 0x44, 0x58, 0xab, 0x92, 0xc2, 0x78, 0x23, 0x55, 0x8f, 0xc5, 0x8d, 0x72, 0xc2,
            0x6c, 0x21, 0x90, 0x36, 0xd6, 0xae, 0x49, 0xdb, 0x4e, 0xc4, 0xe9, 0x23, 0xca, 0x7c,
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x3f,
        ])
    }

    /// The cofactor: the group has order \\( 4 \ell \\).
    pub const fn cofactor() -> u8 {
        4
    }

    /// See [`GoldilocksPoint::is_on_curve`].
    pub fn is_on_curve(&self, P: &GoldilocksPoint) -> bool {
        P.is_on_curve()
    }

    /// Return \\( [2] P \\).
    pub fn double(&self, P: &GoldilocksPoint) -> GoldilocksPoint {
        P.double()
    }

    /// Return \\( P + Q \\).
    pub fn add(&self, P: &GoldilocksPoint, Q: &GoldilocksPoint) -> GoldilocksPoint {
        P + Q
    }

    /// Negate `P` in place.
    pub fn neg(&self, P: &mut GoldilocksPoint) {
        P.negate();
    }

    /// Cross-multiplied comparison; false whenever either `Z` is zero.
    pub fn equal(&self, P: &GoldilocksPoint, Q: &GoldilocksPoint) -> bool {
        P.ct_eq(Q).into()
    }

    /// See [`GoldilocksPoint::to_affine`].
    pub fn to_affine(&self, P: &GoldilocksPoint) -> (FieldElement448, FieldElement448) {
        P.to_affine()
    }

    /// See [`GoldilocksPoint::from_affine`].
    pub fn from_affine(
        &self,
        x: &FieldElement448,
        y: &FieldElement448,
    ) -> Result<GoldilocksPoint, Error> {
        GoldilocksPoint::from_affine(x, y)
    }

    /// Compute \\( kG \\) through the generator table.
    ///
    /// Odd-indexed digits are accumulated first and multiplied by 16,
    /// then the even-indexed digits are added, so each window serves two
    /// digits.
    pub fn scalar_base_mult(&self, k: &Scalar448) -> GoldilocksPoint {
        let a: [i8; DIGITS] = k.as_radix_16();

        let mut P = GoldilocksPoint::identity();
        for i in (0..DIGITS).filter(|x| x % 2 == 1) {
            P = &P + &self.tables[i / 2].select(a[i]);
        }

        P = P.mul_by_pow_2(4);

        for i in (0..DIGITS).filter(|x| x % 2 == 0) {
            P = &P + &self.tables[i / 2].select(a[i]);
        }

        P
    }

    /// Compute \\( kP \\).
    pub fn scalar_mult(&self, k: &Scalar448, P: &GoldilocksPoint) -> GoldilocksPoint {
        P * k
    }

    /// Compute \\( kP + lG \\), sharing one chain of doublings between
    /// the two scalars.
    pub fn combined_mult(
        &self,
        P: &GoldilocksPoint,
        k: &Scalar448,
        l: &Scalar448,
    ) -> GoldilocksPoint {
        let table_P = LookupTable::<GoldilocksPoint>::from(P);
        let table_G = &self.tables[0];
        let k_digits: [i8; DIGITS] = k.as_radix_16();
        let l_digits: [i8; DIGITS] = l.as_radix_16();

        let mut Q = &table_P.select(k_digits[DIGITS - 1]) + &table_G.select(l_digits[DIGITS - 1]);
        for i in (0..DIGITS - 1).rev() {
            Q = Q.mul_by_pow_2(4);
            Q = &Q + &table_P.select(k_digits[i]);
            Q = &Q + &table_G.select(l_digits[i]);
        }
        Q
    }

    /// Encode `P` in 57 bytes.
    pub fn marshal(&self, P: &GoldilocksPoint) -> [u8; 57] {
        P.compress().to_bytes()
    }

    /// Decode a 57-byte encoding.  See [`CompressedGoldilocks::decompress`].
    pub fn unmarshal(&self, bytes: &[u8; 57]) -> Result<GoldilocksPoint, Error> {
        CompressedGoldilocks(*bytes).decompress()
    }
}

impl Default for Goldilocks {
    fn default() -> Goldilocks {
        Goldilocks::new()
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
