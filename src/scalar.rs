// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

//! Arithmetic on scalars (integers mod the group orders).
//!
//! The prime-order subgroup of edwards25519 has order
//! \\( \ell\_{25519} = 2\^{252} + 27742317777372353535851937790883648493 \\),
//! and the one of Goldilocks has order
//! \\( \ell\_{448} = 2\^{446} - 13818066809895115352007386748515426880336692474882178609894547503885 \\).
//!
//! A scalar is stored as its little-endian byte string (32 bytes for
//! [`Scalar25519`], 56 bytes for [`Scalar448`]).  Scalar multiplication
//! accepts every byte pattern of that width: the full width is recoded
//! into signed radix-16 digits, so no reduction is needed first.  The
//! arithmetic operators (`+`, `-`, `*`, unary `-`) always return results
//! reduced modulo \\( \ell \\).
//!
//! # Constructing a scalar
//!
//! * [`Scalar25519::from_bytes`] keeps the bytes as they are;
//! * [`Scalar25519::from_bytes_mod_order`] reduces them;
//! * [`Scalar25519::from_bytes_mod_order_wide`] reduces a 512-bit integer;
//! * [`Scalar25519::from_canonical_bytes`] rejects values \\( \geq \ell \\).
//!
//! ```
//! use edwards_groups::scalar::Scalar25519;
//!
//! let l_plus_two_bytes: [u8; 32] = [
//!    0xef, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58,
//!    0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
//!    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
//!    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
//! ];
//! assert!(Scalar25519::from_canonical_bytes(l_plus_two_bytes).is_err());
//!
//! let a = Scalar25519::from_bytes_mod_order(l_plus_two_bytes);
//! let two = Scalar25519::ONE + Scalar25519::ONE;
//! assert_eq!(a, two);
//! ```
//!
//! The same constructors exist on [`Scalar448`], with 56-byte inputs and
//! 114-byte wide inputs.

use core::borrow::Borrow;
use core::fmt::Debug;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Neg, Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "rand_core")]
use rand_core::CryptoRngCore;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::errors::Error;

// ------------------------------------------------------------------------
// Limb engine
// ------------------------------------------------------------------------

/// Constant-time arithmetic modulo an odd `m < 2^(64L - 1)`, on `L`
/// little-endian `u64` limbs.  Every value handed between these
/// functions is fully reduced, except the left operand of
/// `montgomery_mul`, which only has to fit in `L` limbs.
mod limbs {
    use subtle::Choice;
    use subtle::ConditionallySelectable;

    /// The constants Montgomery arithmetic needs for one modulus.
    pub(super) struct Modulus<const L: usize> {
        /// The modulus \\( m \\).
        pub(super) m: [u64; L],
        /// \\( R \bmod m \\), with \\( R = 2\^{64L} \\).
        pub(super) r: [u64; L],
        /// \\( R\^2 \bmod m \\).
        pub(super) rr: [u64; L],
        /// \\( -m\^{-1} \bmod 2\^{64} \\).
        pub(super) minv: u64,
    }

    /// Compute `a + b * c + carry`, returning the low and high words.
    #[inline(always)]
    fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
        let r = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
        (r as u64, (r >> 64) as u64)
    }

    /// Compute `a - b`, returning the difference and the final borrow.
    #[inline(always)]
    fn sub<const L: usize>(a: &[u64; L], b: &[u64; L]) -> ([u64; L], Choice) {
        let mut out = [0u64; L];
        let mut borrow = 0u64;
        for i in 0..L {
            let (d, b1) = a[i].overflowing_sub(b[i]);
            let (d, b2) = d.overflowing_sub(borrow);
            out[i] = d;
            borrow = (b1 | b2) as u64;
        }
        (out, Choice::from(borrow as u8))
    }

    /// Compute `a + b`, discarding the final carry.
    #[inline(always)]
    fn add<const L: usize>(a: &[u64; L], b: &[u64; L]) -> [u64; L] {
        let mut out = [0u64; L];
        let mut carry = 0u64;
        for i in 0..L {
            let (s, c1) = a[i].overflowing_add(b[i]);
            let (s, c2) = s.overflowing_add(carry);
            out[i] = s;
            carry = (c1 | c2) as u64;
        }
        out
    }

    /// Given `r < 2m`, return `r mod m`.
    #[inline(always)]
    fn sub_m_if_needed<const L: usize>(r: &[u64; L], m: &[u64; L]) -> [u64; L] {
        let (t, borrow) = sub(r, m);
        let mut out = [0u64; L];
        for i in 0..L {
            out[i] = u64::conditional_select(&t[i], &r[i], borrow);
        }
        out
    }

    /// Compute `a * b / R mod m`, interleaving the product with the
    /// reduction one word of `b` at a time.
    ///
    /// `a` may be any `L`-limb value; `b` must be reduced.  The sum
    /// before the final subtraction is then below `2m`.
    pub(super) fn montgomery_mul<const L: usize>(
        a: &[u64; L],
        b: &[u64; L],
        modulus: &Modulus<L>,
    ) -> [u64; L] {
        let m = &modulus.m;
        let mut t = [0u64; L];
        let mut t_hi = 0u64;
        for i in 0..L {
            let mut carry = 0u64;
            for j in 0..L {
                let (lo, hi) = mac(t[j], a[j], b[i], carry);
                t[j] = lo;
                carry = hi;
            }
            let (sum, overflow) = t_hi.overflowing_add(carry);
            t_hi = sum;
            let t_top = overflow as u64;

            // Add q * m so the low word vanishes, then shift down a word.
            let q = t[0].wrapping_mul(modulus.minv);
            let (_, mut carry) = mac(t[0], q, m[0], 0);
            for j in 1..L {
                let (lo, hi) = mac(t[j], q, m[j], carry);
                t[j - 1] = lo;
                carry = hi;
            }
            let (sum, overflow) = t_hi.overflowing_add(carry);
            t[L - 1] = sum;
            t_hi = t_top + overflow as u64;
        }
        debug_assert!(t_hi == 0);
        sub_m_if_needed(&t, m)
    }

    /// Load up to `8L` little-endian bytes into limbs.
    fn load<const L: usize>(bytes: &[u8]) -> [u64; L] {
        debug_assert!(bytes.len() <= 8 * L);
        let mut out = [0u64; L];
        for (i, byte) in bytes.iter().enumerate() {
            out[i / 8] |= (*byte as u64) << (8 * (i % 8));
        }
        out
    }

    /// Reduce a little-endian byte string of any length modulo `m`,
    /// one `L`-limb block at a time from the most significant end.
    pub(super) fn reduce_bytes<const L: usize>(bytes: &[u8], modulus: &Modulus<L>) -> [u64; L] {
        let mut acc = [0u64; L];
        for block in bytes.chunks(8 * L).rev() {
            // acc * R + block, with both terms reduced first.
            let shifted = montgomery_mul(&acc, &modulus.rr, modulus);
            let low = montgomery_mul(&load::<L>(block), &modulus.r, modulus);
            acc = add_mod(&shifted, &low, &modulus.m);
        }
        acc
    }

    pub(super) fn add_mod<const L: usize>(a: &[u64; L], b: &[u64; L], m: &[u64; L]) -> [u64; L] {
        sub_m_if_needed(&add(a, b), m)
    }

    pub(super) fn sub_mod<const L: usize>(a: &[u64; L], b: &[u64; L], m: &[u64; L]) -> [u64; L] {
        let (d, borrow) = sub(a, b);
        let mut masked = [0u64; L];
        for i in 0..L {
            masked[i] = u64::conditional_select(&0, &m[i], borrow);
        }
        add(&d, &masked)
    }

    /// Compute `a * b mod m` as two Montgomery multiplications, the
    /// second one by \\( R\^2 \\) to cancel both factors of \\( R\^{-1} \\).
    pub(super) fn mul_mod<const L: usize>(
        a: &[u64; L],
        b: &[u64; L],
        modulus: &Modulus<L>,
    ) -> [u64; L] {
        let ab = montgomery_mul(a, b, modulus);
        montgomery_mul(&ab, &modulus.rr, modulus)
    }

    pub(super) fn to_bytes<const L: usize, const N: usize>(limbs: &[u64; L]) -> [u8; N] {
        debug_assert!(N <= 8 * L);
        let mut out = [0u8; N];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = (limbs[i / 8] >> (8 * (i % 8))) as u8;
        }
        out
    }
}

// ------------------------------------------------------------------------
// Signed radix-16 recoding
// ------------------------------------------------------------------------

/// Write the `N`-byte little-endian integer `bytes` as
///
/// $$
///    a = a\_0 + a\_1 16\^1 + \cdots + a\_{D-1} 16\^{D-1},
/// $$
///
/// with \\(D = 2N + 1\\), \\(-8 \leq a\_i < 8\\) for \\(i < 2N\\), and
/// the final carry digit \\(a\_{2N} \in \\{0, 1\\}\\).
///
/// The whole width is recoded, so inputs with the top bit set are fine.
pub(crate) fn as_radix_16<const N: usize, const D: usize>(bytes: &[u8; N]) -> [i8; D] {
    debug_assert!(D == 2 * N + 1);

    let mut output = [0i8; D];

    // Step 1: change radix.
    // Convert from radix 256 (bytes) to radix 16 (nibbles)
    #[allow(clippy::identity_op)]
    #[inline(always)]
    fn bot_half(x: u8) -> u8 {
        (x >> 0) & 15
    }
    #[inline(always)]
    fn top_half(x: u8) -> u8 {
        (x >> 4) & 15
    }

    for i in 0..N {
        output[2 * i] = bot_half(bytes[i]) as i8;
        output[2 * i + 1] = top_half(bytes[i]) as i8;
    }
    // Step 2: recenter coefficients from [0,16) to [-8,8)
    for i in 0..(2 * N) {
        let carry = (output[i] + 8) >> 4;
        output[i] -= carry << 4;
        output[i + 1] += carry;
    }
    // The last digit holds the final carry.

    output
}

// ------------------------------------------------------------------------
// Scalar types
// ------------------------------------------------------------------------

macro_rules! define_scalar {
    (
        $(#[$meta:meta])*
        $name:ident,
        bytes = $n:expr,
        limbs = $l:expr,
        digits = $d:expr,
        wide = $w:expr,
        order = $order:expr,
        r = $r:expr,
        rr = $rr:expr,
        minv = $minv:expr
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Hash)]
        pub struct $name {
            /// `bytes` is a little-endian byte encoding of an integer.
            /// It is not necessarily reduced.
            pub(crate) bytes: [u8; $n],
        }

        impl $name {
            /// The order \\( \ell \\) as little-endian `u64` limbs, with its
            /// Montgomery constants.
            const MODULUS: limbs::Modulus<$l> = limbs::Modulus {
                m: $order,
                r: $r,
                rr: $rr,
                minv: $minv,
            };

            /// The scalar \\( 0 \\).
            pub const ZERO: Self = Self { bytes: [0u8; $n] };

            /// The scalar \\( 1 \\).
            pub const ONE: Self = {
                let mut bytes = [0u8; $n];
                bytes[0] = 1;
                Self { bytes }
            };

            /// Construct a scalar from its little-endian bytes, without
            /// reducing.  Every byte pattern is a valid multiplier.
            pub const fn from_bytes(bytes: [u8; $n]) -> Self {
                Self { bytes }
            }

            /// Construct a scalar from a byte slice without reducing.
            ///
            /// Returns [`Error::Decode`] if the slice has the wrong length.
            pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
                let bytes: [u8; $n] = bytes.try_into().map_err(|_| Error::Decode)?;
                Ok(Self { bytes })
            }

            /// Construct a scalar by reducing a little-endian integer
            /// modulo the group order \\( \ell \\).
            pub fn from_bytes_mod_order(bytes: [u8; $n]) -> Self {
                Self::from_limbs(&limbs::reduce_bytes(&bytes, &Self::MODULUS))
            }

            /// Construct a scalar by reducing a double-width little-endian
            /// integer modulo the group order \\( \ell \\).
            pub fn from_bytes_mod_order_wide(input: &[u8; $w]) -> Self {
                Self::from_limbs(&limbs::reduce_bytes(input, &Self::MODULUS))
            }

            /// Attempt to construct a scalar from a canonical byte
            /// representation.
            ///
            /// # Return
            ///
            /// - `Ok(s)` if `bytes` encodes an integer `s < ℓ`;
            /// - `Err(Error::Decode)` otherwise.
            pub fn from_canonical_bytes(bytes: [u8; $n]) -> Result<Self, Error> {
                let candidate = Self::from_bytes(bytes);
                if bool::from(candidate.is_canonical()) {
                    Ok(candidate)
                } else {
                    Err(Error::Decode)
                }
            }

            /// Convert this scalar to its underlying sequence of bytes.
            pub const fn to_bytes(&self) -> [u8; $n] {
                self.bytes
            }

            /// View the little-endian byte encoding of the integer representing this scalar.
            pub const fn as_bytes(&self) -> &[u8; $n] {
                &self.bytes
            }

            /// Reduce this scalar modulo \\( \ell \\).
            pub fn reduce(&self) -> Self {
                Self::from_bytes_mod_order(self.bytes)
            }

            /// Check whether this scalar is the canonical representative
            /// mod \\( \ell \\).
            pub fn is_canonical(&self) -> Choice {
                self.bytes.ct_eq(&self.reduce().bytes)
            }

            /// Return a scalar chosen uniformly at random, by reducing a
            /// double-width string of random bytes.
            #[cfg(feature = "rand_core")]
            pub fn random<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Self {
                let mut scalar_bytes = [0u8; $w];
                rng.fill_bytes(&mut scalar_bytes);
                Self::from_bytes_mod_order_wide(&scalar_bytes)
            }

            /// Signed radix-16 digits of the full byte width.
            pub(crate) fn as_radix_16(&self) -> [i8; $d] {
                as_radix_16::<$n, $d>(&self.bytes)
            }

            fn limbs(&self) -> [u64; $l] {
                limbs::reduce_bytes(&self.bytes, &Self::MODULUS)
            }

            fn from_limbs(limbs: &[u64; $l]) -> Self {
                Self {
                    bytes: limbs::to_bytes::<$l, $n>(limbs),
                }
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}{{\n\tbytes: {:?},\n}}", stringify!($name), &self.bytes)
            }
        }

        impl Default for $name {
            fn default() -> $name {
                $name::ZERO
            }
        }

        impl Eq for $name {}
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.ct_eq(other).into()
            }
        }

        impl ConstantTimeEq for $name {
            /// Compares the byte encodings, so an unreduced scalar is not
            /// equal to its reduction.
            fn ct_eq(&self, other: &Self) -> Choice {
                self.bytes.ct_eq(&other.bytes)
            }
        }

        impl ConditionallySelectable for $name {
            fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
                let mut bytes = [0u8; $n];
                #[allow(clippy::needless_range_loop)]
                for i in 0..$n {
                    bytes[i] = u8::conditional_select(&a.bytes[i], &b.bytes[i], choice);
                }
                $name { bytes }
            }
        }

        impl<'a, 'b> Add<&'b $name> for &'a $name {
            type Output = $name;
            fn add(self, rhs: &'b $name) -> $name {
                let m = &$name::MODULUS.m;
                $name::from_limbs(&limbs::add_mod(&self.limbs(), &rhs.limbs(), m))
            }
        }

        define_add_variants!(LHS = $name, RHS = $name, Output = $name);

        impl<'b> AddAssign<&'b $name> for $name {
            fn add_assign(&mut self, rhs: &'b $name) {
                *self = &*self + rhs;
            }
        }

        define_add_assign_variants!(LHS = $name, RHS = $name);

        impl<'a, 'b> Sub<&'b $name> for &'a $name {
            type Output = $name;
            fn sub(self, rhs: &'b $name) -> $name {
                let m = &$name::MODULUS.m;
                $name::from_limbs(&limbs::sub_mod(&self.limbs(), &rhs.limbs(), m))
            }
        }

        define_sub_variants!(LHS = $name, RHS = $name, Output = $name);

        impl<'b> SubAssign<&'b $name> for $name {
            fn sub_assign(&mut self, rhs: &'b $name) {
                *self = &*self - rhs;
            }
        }

        define_sub_assign_variants!(LHS = $name, RHS = $name);

        impl<'a, 'b> Mul<&'b $name> for &'a $name {
            type Output = $name;
            fn mul(self, rhs: &'b $name) -> $name {
                let modulus = &$name::MODULUS;
                $name::from_limbs(&limbs::mul_mod(&self.limbs(), &rhs.limbs(), modulus))
            }
        }

        define_mul_variants!(LHS = $name, RHS = $name, Output = $name);

        impl<'b> MulAssign<&'b $name> for $name {
            fn mul_assign(&mut self, rhs: &'b $name) {
                *self = &*self * rhs;
            }
        }

        define_mul_assign_variants!(LHS = $name, RHS = $name);

        impl<'a> Neg for &'a $name {
            type Output = $name;
            fn neg(self) -> $name {
                &$name::ZERO - self
            }
        }

        impl Neg for $name {
            type Output = $name;
            fn neg(self) -> $name {
                -&self
            }
        }

        impl<T> Sum<T> for $name
        where
            T: Borrow<$name>,
        {
            fn sum<I>(iter: I) -> Self
            where
                I: Iterator<Item = T>,
            {
                iter.fold($name::ZERO, |acc, item| acc + item.borrow())
            }
        }

        impl<T> Product<T> for $name
        where
            T: Borrow<$name>,
        {
            fn product<I>(iter: I) -> Self
            where
                I: Iterator<Item = T>,
            {
                iter.fold($name::ONE, |acc, item| acc * item.borrow())
            }
        }

        impl From<u64> for $name {
            /// Construct a scalar from the given `u64`.
            fn from(x: u64) -> $name {
                let mut bytes = [0u8; $n];
                bytes[..8].copy_from_slice(&x.to_le_bytes());
                $name { bytes }
            }
        }

        #[cfg(feature = "zeroize")]
        impl Zeroize for $name {
            fn zeroize(&mut self) {
                self.bytes.zeroize();
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                use serde::ser::SerializeTuple;
                let mut tup = serializer.serialize_tuple($n)?;
                for byte in self.as_bytes().iter() {
                    tup.serialize_element(byte)?;
                }
                tup.end()
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct ScalarVisitor;

                impl<'de> serde::de::Visitor<'de> for ScalarVisitor {
                    type Value = $name;

                    fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                        formatter.write_str(concat!(
                            "a canonical ",
                            stringify!($n),
                            "-byte little-endian scalar"
                        ))
                    }

                    fn visit_seq<A>(self, mut seq: A) -> Result<$name, A::Error>
                    where
                        A: serde::de::SeqAccess<'de>,
                    {
                        let mut bytes = [0u8; $n];
                        #[allow(clippy::needless_range_loop)]
                        for i in 0..$n {
                            bytes[i] = seq.next_element()?.ok_or_else(|| {
                                serde::de::Error::invalid_length(i, &concat!("expected ", stringify!($n), " bytes"))
                            })?;
                        }
                        $name::from_canonical_bytes(bytes).map_err(|_| {
                            serde::de::Error::custom(concat!(stringify!($name), " was not canonically encoded"))
                        })
                    }
                }

                deserializer.deserialize_tuple($n, ScalarVisitor)
            }
        }
    };
}

define_scalar!(
    /// An integer modulo \\( \ell\_{25519} \\), the order of the
    /// edwards25519 basepoint.
    Scalar25519,
    bytes = 32,
    limbs = 4,
    digits = 65,
    wide = 64,
    order = [
        0x5812631a5cf5d3ed,
        0x14def9dea2f79cd6,
        0x0000000000000000,
        0x1000000000000000,
    ],
    r = [
        0xd6ec31748d98951d,
        0xc6ef5bf4737dcf70,
        0xfffffffffffffffe,
        0x0fffffffffffffff,
    ],
    rr = [
        0xa40611e3449c0f01,
        0xd00e1ba768859347,
        0xceec73d217f5be65,
        0x0399411b7c309a3d,
    ],
    minv = 0xd2b51da312547e1b
);

define_scalar!(
    /// An integer modulo \\( \ell\_{448} \\), the order of the Goldilocks
    /// generator.
    Scalar448,
    bytes = 56,
    limbs = 7,
    digits = 113,
    wide = 114,
    order = [
        0x2378c292ab5844f3,
        0x216cc2728dc58f55,
        0xc44edb49aed63690,
        0xffffffff7cca23e9,
        0xffffffffffffffff,
        0xffffffffffffffff,
        0x3fffffffffffffff,
    ],
    r = [
        0x721cf5b5529eec34,
        0x7a4cf635c8e9c2ab,
        0xeec492d944a725bf,
        0x000000020cd77058,
        0x0000000000000000,
        0x0000000000000000,
        0x0000000000000000,
    ],
    rr = [
        0xe3539257049b9b60,
        0x7af32c4bc1b195d9,
        0x0d66de2388ea1859,
        0xae17cf725ee4d838,
        0x1a9cc14ba3c47c44,
        0x2052bcb7e4d070af,
        0x3402a939f823b729,
    ],
    minv = 0x03bd440fae918bc5
);

impl Scalar25519 {
    /// Construct a scalar from an existing `Digest` instance with a
    /// 64-byte output, reducing the digest modulo \\( \ell \\).
    ///
    /// ```
    /// # #[cfg(feature = "digest")]
    /// # {
    /// use edwards_groups::scalar::Scalar25519;
    /// use sha2::{Digest, Sha512};
    ///
    /// let mut h = Sha512::new();
    /// h.update(b"To really appreciate architecture, you may even need to commit a murder.");
    /// let s = Scalar25519::from_hash(h);
    /// assert!(bool::from(s.is_canonical()));
    /// # }
    /// ```
    #[cfg(feature = "digest")]
    pub fn from_hash<D>(hash: D) -> Scalar25519
    where
        D: digest::Digest<OutputSize = digest::generic_array::typenum::U64>,
    {
        let mut output = [0u8; 64];
        output.copy_from_slice(hash.finalize().as_slice());
        Scalar25519::from_bytes_mod_order_wide(&output)
    }

    /// Hash a slice of bytes into a scalar, using the digest `D`.
    #[cfg(feature = "digest")]
    pub fn hash_from_bytes<D>(input: &[u8]) -> Scalar25519
    where
        D: digest::Digest<OutputSize = digest::generic_array::typenum::U64> + Default,
    {
        let mut hash = D::default();
        hash.update(input);
        Scalar25519::from_hash(hash)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn pattern<const N: usize>(mul: u8, add: u8) -> [u8; N] {
        let mut out = [0u8; N];
        for (i, b) in out.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(mul).wrapping_add(add);
        }
        out
    }

    /// The order of the edwards25519 basepoint.
    static L25519_BYTES: [u8; 32] = [
        0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
        0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x10,
    ];

    /// The order of the Goldilocks generator.
    static L448_BYTES: [u8; 56] = [
        0xf3, 0x44, 0x58, 0xab, 0x92, 0xc2, 0x78, 0x23, 0x55, 0x8f, 0xc5, 0x8d, 0x72, 0xc2, 0x6c,
        0x21, 0x90, 0x36, 0xd6, 0xae, 0x49, 0xdb, 0x4e, 0xc4, 0xe9, 0x23, 0xca, 0x7c, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x3f,
    ];

    /// pattern(7, 3) mod l_25519
    static A25519_REDUCED: [u8; 32] = [
        0xfa, 0x46, 0x95, 0x5f, 0xc8, 0x1d, 0x3e, 0xbb, 0x58, 0x4b, 0xb6, 0x09, 0x09, 0xae, 0x12,
        0x5d, 0x72, 0x7a, 0x81, 0x88, 0x8f, 0x96, 0x9d, 0xa4, 0xab, 0xb2, 0xb9, 0xc0, 0xc7, 0xce,
        0xd5, 0x0c,
    ];

    /// pattern(7, 3) * pattern(13, 101) mod l_25519
    static AB25519: [u8; 32] = [
        0xd9, 0x29, 0xc3, 0x01, 0xdc, 0xa9, 0x07, 0x6e, 0x21, 0x3a, 0x28, 0x61, 0xc8, 0x85, 0x14,
        0xa8, 0x93, 0x7a, 0x6c, 0xb7, 0xf0, 0x61, 0xc6, 0xb6, 0x2c, 0x83, 0xc8, 0x13, 0xee, 0xe6,
        0xeb, 0x0b,
    ];

    /// (2^512 - 1) mod l_25519
    static WIDE_ONES_25519: [u8; 32] = [
        0x00, 0x0f, 0x9c, 0x44, 0xe3, 0x11, 0x06, 0xa4, 0x47, 0x93, 0x85, 0x68, 0xa7, 0x1b, 0x0e,
        0xd0, 0x65, 0xbe, 0xf5, 0x17, 0xd2, 0x73, 0xec, 0xce, 0x3d, 0x9a, 0x30, 0x7c, 0x1b, 0x41,
        0x99, 0x03,
    ];

    /// pattern(7, 3) mod l_448
    static A448_REDUCED: [u8; 56] = [
        0x1d, 0x80, 0x60, 0xc1, 0xf9, 0xa0, 0x3b, 0xed, 0x90, 0x23, 0xbe, 0x34, 0x72, 0xd9, 0x8b,
        0x29, 0x53, 0x0d, 0xd5, 0x2a, 0xfc, 0xdf, 0xff, 0x1b, 0xd8, 0x6a, 0x25, 0xc7, 0xc8, 0xce,
        0xd5, 0xdc, 0xe3, 0xea, 0xf1, 0xf8, 0xff, 0x06, 0x0d, 0x14, 0x1b, 0x22, 0x29, 0x30, 0x37,
        0x3e, 0x45, 0x4c, 0x53, 0x5a, 0x61, 0x68, 0x6f, 0x76, 0x7d, 0x04,
    ];

    /// pattern(7, 3) * pattern(13, 101) mod l_448
    static AB448: [u8; 56] = [
        0x39, 0x66, 0x4d, 0xe9, 0x33, 0x25, 0x85, 0x57, 0xf4, 0x50, 0x5e, 0xa5, 0xa6, 0x54, 0x80,
        0x0a, 0x38, 0x36, 0x37, 0xbe, 0xd4, 0x54, 0x43, 0x09, 0xa9, 0x95, 0xdd, 0x38, 0x07, 0xdc,
        0x43, 0x48, 0xf6, 0x7b, 0x26, 0x10, 0x93, 0xfb, 0xf6, 0xcb, 0x01, 0x3d, 0xba, 0x64, 0xe3,
        0xa1, 0xd9, 0x5e, 0x5d, 0xe8, 0x8c, 0xc7, 0x56, 0x32, 0xd6, 0x15,
    ];

    /// pattern(7, 3) - pattern(13, 101) mod l_448
    static A_MINUS_B448: [u8; 56] = [
        0xab, 0x52, 0x39, 0xe0, 0xf2, 0xbc, 0x00, 0x50, 0x18, 0xd8, 0x9b, 0xcd, 0xe2, 0x8d, 0xdd,
        0x22, 0xae, 0x01, 0x5c, 0x7d, 0xdc, 0x44, 0xcb, 0x4f, 0x24, 0xe4, 0x37, 0x7f, 0xf6, 0xef,
        0xe9, 0xe3, 0xdd, 0xd8, 0xd2, 0xcc, 0xc6, 0xc0, 0xb9, 0xb3, 0xad, 0xa7, 0xa1, 0x9b, 0x95,
        0x8f, 0x89, 0x83, 0x7d, 0x77, 0x71, 0x6b, 0x65, 0x60, 0x5a, 0x14,
    ];

    /// (2^912 - 1) mod l_448
    static WIDE_ONES_448: [u8; 56] = [
        0x81, 0xde, 0xe7, 0x31, 0xa9, 0x3f, 0x88, 0x11, 0x2e, 0x1d, 0xad, 0x87, 0x07, 0x16, 0x0f,
        0x80, 0x29, 0x3e, 0xa6, 0x37, 0xfb, 0x19, 0xe3, 0x20, 0xc5, 0xb6, 0x24, 0xbb, 0x85, 0xc9,
        0x72, 0xcf, 0x17, 0xae, 0x44, 0x7c, 0xc4, 0xa3, 0x4b, 0xc1, 0x9c, 0x1a, 0xaf, 0x70, 0xd0,
        0xe4, 0xb7, 0xbc, 0x52, 0x20, 0x29, 0xb7, 0x23, 0xf8, 0x39, 0x29,
    ];

    /// (2^256 - 1)^2 mod l_25519
    static A25519_FULL_SQUARE: [u8; 32] = [
        0xa2, 0x8c, 0x56, 0xe3, 0x2e, 0x75, 0x52, 0xa6, 0x12, 0x2e, 0x79, 0xc7, 0x7b, 0x57, 0xed,
        0x6b, 0x68, 0xbe, 0xf5, 0x17, 0xd2, 0x73, 0xec, 0xce, 0x3d, 0x9a, 0x30, 0x7c, 0x1b, 0x41,
        0x99, 0x03,
    ];

    /// (2^448 - 1)^2 mod l_448
    static A448_FULL_SQUARE: [u8; 56] = [
        0xf9, 0xc2, 0x5d, 0x5f, 0xec, 0xa6, 0x19, 0xff, 0x82, 0x10, 0xde, 0x2f, 0xe0, 0x3f, 0x59,
        0x86, 0xda, 0xcc, 0x9b, 0xff, 0x70, 0xb8, 0xdd, 0x2f, 0x86, 0xf7, 0x35, 0x45, 0x6e, 0xcf,
        0x17, 0xae, 0x44, 0x7c, 0xc4, 0xa3, 0x4b, 0xc1, 0x9c, 0x1a, 0xaf, 0x70, 0xd0, 0xe4, 0xb7,
        0xbc, 0x52, 0x20, 0x29, 0xb7, 0x23, 0xf8, 0x39, 0xa9, 0x02, 0x34,
    ];

    #[test]
    fn montgomery_constants() {
        let modulus = &Scalar25519::MODULUS;
        assert_eq!(modulus.m[0].wrapping_mul(modulus.minv), u64::MAX);
        let mut r = [0u8; 33];
        r[32] = 1;
        assert_eq!(limbs::reduce_bytes(&r, modulus), modulus.r);
        let mut rr = [0u8; 65];
        rr[64] = 1;
        assert_eq!(limbs::reduce_bytes(&rr, modulus), modulus.rr);

        let modulus = &Scalar448::MODULUS;
        assert_eq!(modulus.m[0].wrapping_mul(modulus.minv), u64::MAX);
        let mut r = [0u8; 57];
        r[56] = 1;
        assert_eq!(limbs::reduce_bytes(&r, modulus), modulus.r);
        let mut rr = [0u8; 113];
        rr[112] = 1;
        assert_eq!(limbs::reduce_bytes(&rr, modulus), modulus.rr);
    }

    #[test]
    fn full_width_products() {
                let a = Scalar25519::from_bytes([0xff; 32]);
        let expected = Scalar25519::from_bytes(A25519_FULL_SQUARE);
        assert_eq!(a * a, expected);

        let a = Scalar448::from_bytes([0xff; 56]);
        let expected = Scalar448::from_bytes(A448_FULL_SQUARE);
        assert_eq!(a * a, expected);
    }

    #[test]
    fn order_reduces_to_zero() {
        assert_eq!(Scalar25519::from_bytes_mod_order(L25519_BYTES), Scalar25519::ZERO);
        assert_eq!(Scalar448::from_bytes_mod_order(L448_BYTES), Scalar448::ZERO);
    }

    #[test]
    fn canonical_decoding() {
        assert_eq!(Scalar25519::from_canonical_bytes(L25519_BYTES), Err(Error::Decode));
        assert_eq!(Scalar448::from_canonical_bytes(L448_BYTES), Err(Error::Decode));

        let mut l_minus_one = L25519_BYTES;
        l_minus_one[0] -= 1;
        assert!(Scalar25519::from_canonical_bytes(l_minus_one).is_ok());

        let mut l_minus_one = L448_BYTES;
        l_minus_one[0] -= 1;
        assert!(Scalar448::from_canonical_bytes(l_minus_one).is_ok());

        // High bit set is not canonical for either order.
        let mut high = [0u8; 32];
        high[31] = 0x80;
        assert!(Scalar25519::from_canonical_bytes(high).is_err());
        let mut high = [0u8; 56];
        high[55] = 0x80;
        assert!(Scalar448::from_canonical_bytes(high).is_err());
    }

    #[test]
    fn raw_bytes_are_kept() {
        let raw = [0xffu8; 56];
        let s = Scalar448::from_bytes(raw);
        assert_eq!(s.to_bytes(), raw);
        assert!(!bool::from(s.is_canonical()));
        assert!(bool::from(s.reduce().is_canonical()));
    }

    #[test]
    fn from_slice_checks_length() {
        assert_eq!(Scalar25519::from_slice(&[0u8; 31]), Err(Error::Decode));
        assert_eq!(Scalar25519::from_slice(&[1u8; 32]), Ok(Scalar25519::from_bytes([1u8; 32])));
        assert_eq!(Scalar448::from_slice(&[0u8; 57]), Err(Error::Decode));
        assert!(Scalar448::from_slice(&[0u8; 56]).is_ok());
    }

    #[test]
    fn reduction_vectors() {
        let a = Scalar25519::from_bytes(pattern(7, 3));
        assert_eq!(a.reduce().to_bytes(), A25519_REDUCED);
        let a = Scalar448::from_bytes(pattern(7, 3));
        assert_eq!(a.reduce().to_bytes(), A448_REDUCED);

        assert_eq!(
            Scalar25519::from_bytes_mod_order_wide(&[0xff; 64]).to_bytes(),
            WIDE_ONES_25519
        );
        assert_eq!(
            Scalar448::from_bytes_mod_order_wide(&[0xff; 114]).to_bytes(),
            WIDE_ONES_448
        );
    }

    #[test]
    fn mul_vectors() {
        let a = Scalar25519::from_bytes(pattern(7, 3));
        let b = Scalar25519::from_bytes(pattern(13, 101));
        assert_eq!((a * b).to_bytes(), AB25519);

        let a = Scalar448::from_bytes(pattern(7, 3));
        let b = Scalar448::from_bytes(pattern(13, 101));
        assert_eq!((a * b).to_bytes(), AB448);
        assert_eq!((a - b).to_bytes(), A_MINUS_B448);
    }

    #[test]
    fn add_sub_neg() {
        let a = Scalar448::from_bytes(pattern(7, 3));
        let b = Scalar448::from_bytes(pattern(13, 101));
        assert_eq!(&(&a - &b) + &b, a.reduce());
        assert_eq!(a + (-a), Scalar448::ZERO);
        assert_eq!(-Scalar448::ZERO, Scalar448::ZERO);

        let a = Scalar25519::from_bytes(pattern(7, 3));
        let b = Scalar25519::from_bytes(pattern(13, 101));
        let mut c = a;
        c += b;
        c -= b;
        assert_eq!(c, a.reduce());

        let minus_one = -Scalar25519::ONE;
        assert_eq!(minus_one * minus_one, Scalar25519::ONE);
    }

    #[test]
    fn sum_and_product() {
        let xs = [Scalar448::from(2u64), Scalar448::from(3u64), Scalar448::from(7u64)];
        assert_eq!(xs.iter().sum::<Scalar448>(), Scalar448::from(12u64));
        assert_eq!(xs.iter().product::<Scalar448>(), Scalar448::from(42u64));
        let empty: [Scalar25519; 0] = [];
        assert_eq!(empty.iter().sum::<Scalar25519>(), Scalar25519::ZERO);
        assert_eq!(empty.iter().product::<Scalar25519>(), Scalar25519::ONE);
    }

    /// Recompose the digits modulo the order and compare.
    fn check_radix_16_448(bytes: [u8; 56]) {
        let digits = Scalar448::from_bytes(bytes).as_radix_16();
        assert!(digits[112] == 0 || digits[112] == 1);
        let sixteen = Scalar448::from(16u64);
        let mut acc = Scalar448::ZERO;
        for i in (0..113).rev() {
            let d = digits[i];
            if i < 112 {
                assert!((-8..8).contains(&d));
            }
            let mut term = Scalar448::from(d.unsigned_abs() as u64);
            if d < 0 {
                term = -term;
            }
            acc = &(&acc * &sixteen) + &term;
        }
        assert_eq!(acc, Scalar448::from_bytes_mod_order(bytes));
    }

    #[test]
    fn radix_16_recomposes() {
        check_radix_16_448([0xff; 56]);
        check_radix_16_448([0x88; 56]);
        check_radix_16_448(pattern(7, 3));
        check_radix_16_448([0u8; 56]);
    }

    #[test]
    fn radix_16_top_carry() {
        // Every nibble of 0x88.. carries, all the way into the top digit.
        let digits = Scalar25519::from_bytes([0x88; 32]).as_radix_16();
        assert_eq!(digits[64], 1);
        let digits = Scalar25519::from_bytes([0x77; 32]).as_radix_16();
        assert_eq!(digits[64], 0);
        assert!(digits[..64].iter().all(|&d| d == 7));
    }

    #[test]
    fn from_u64() {
        let s = Scalar25519::from(0x0102030405060708u64);
        assert_eq!(&s.as_bytes()[..8], &[8, 7, 6, 5, 4, 3, 2, 1]);
        assert!(s.as_bytes()[8..].iter().all(|&b| b == 0));
    }
}
