// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2\^{448} - 2\^{224} - 1\\), using
//! \\(64\\)-bit limbs with \\(128\\)-bit products.
//!
//! Reduction uses the identity \\(2\^{448} \equiv 2\^{224} + 1 \pmod p\\):
//! anything carried out of limb 7 is folded back into limbs 0 and 4.

use core::fmt::Debug;
use core::ops::Neg;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// A `FieldElement56` represents an element of the field
/// \\( \mathbb Z / (2\^{448} - 2\^{224} - 1)\\).
///
/// The element is stored in radix \\(2\^{56}\\) as eight `u64`s. Between
/// operations every limb is kept below \\(2\^{57}\\); only `to_bytes`
/// produces the canonical representative.
#[derive(Copy, Clone)]
pub struct FieldElement56(pub(crate) [u64; 8]);

const LOW_56_BIT_MASK: u64 = (1u64 << 56) - 1;

/// The limbs of \\(4p\\), added before subtracting so no limb underflows.
const FOUR_P: [u64; 8] = [
    4 * LOW_56_BIT_MASK,
    4 * LOW_56_BIT_MASK,
    4 * LOW_56_BIT_MASK,
    4 * LOW_56_BIT_MASK,
    4 * (LOW_56_BIT_MASK - 1),
    4 * LOW_56_BIT_MASK,
    4 * LOW_56_BIT_MASK,
    4 * LOW_56_BIT_MASK,
];

/// The limbs of \\(p\\) itself.
const P: [u64; 8] = [
    LOW_56_BIT_MASK,
    LOW_56_BIT_MASK,
    LOW_56_BIT_MASK,
    LOW_56_BIT_MASK,
    LOW_56_BIT_MASK - 1,
    LOW_56_BIT_MASK,
    LOW_56_BIT_MASK,
    LOW_56_BIT_MASK,
];

impl Debug for FieldElement56 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement56({:?})", &self.0[..])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement56 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<'b> AddAssign<&'b FieldElement56> for FieldElement56 {
    fn add_assign(&mut self, rhs: &'b FieldElement56) {
        let result = &*self + rhs;
        self.0 = result.0;
    }
}

impl<'a, 'b> Add<&'b FieldElement56> for &'a FieldElement56 {
    type Output = FieldElement56;
    fn add(self, rhs: &'b FieldElement56) -> FieldElement56 {
        let mut limbs = [0u64; 8];
        for i in 0..8 {
            limbs[i] = self.0[i] + rhs.0[i];
        }
        FieldElement56::weak_reduce(limbs)
    }
}

impl<'b> SubAssign<&'b FieldElement56> for FieldElement56 {
    fn sub_assign(&mut self, rhs: &'b FieldElement56) {
        let result = &*self - rhs;
        self.0 = result.0;
    }
}

impl<'a, 'b> Sub<&'b FieldElement56> for &'a FieldElement56 {
    type Output = FieldElement56;
    fn sub(self, rhs: &'b FieldElement56) -> FieldElement56 {
        // rhs limbs are below 2^57, so adding 4p first keeps every
        // difference nonnegative.
        let mut limbs = [0u64; 8];
        for i in 0..8 {
            limbs[i] = (self.0[i] + FOUR_P[i]) - rhs.0[i];
        }
        FieldElement56::weak_reduce(limbs)
    }
}

impl<'b> MulAssign<&'b FieldElement56> for FieldElement56 {
    fn mul_assign(&mut self, rhs: &'b FieldElement56) {
        let result = &*self * rhs;
        self.0 = result.0;
    }
}

impl<'a, 'b> Mul<&'b FieldElement56> for &'a FieldElement56 {
    type Output = FieldElement56;

    fn mul(self, rhs: &'b FieldElement56) -> FieldElement56 {
        /// Multiply two 64-bit integers with 128 bits of output.
        #[inline(always)]
        fn m(x: u64, y: u64) -> u128 {
            (x as u128) * (y as u128)
        }

        let a: &[u64; 8] = &self.0;
        let b: &[u64; 8] = &rhs.0;

        for i in 0..8 {
            debug_assert!(a[i] < (1 << 57));
            debug_assert!(b[i] < (1 << 57));
        }

        // Schoolbook product: each of the 15 coefficients is a sum of at
        // most eight products below 2^114.
        let mut c = [0u128; 15];
        for i in 0..8 {
            for j in 0..8 {
                c[i + j] += m(a[i], b[j]);
            }
        }

        // Fold the top half, highest coefficient first, since folding
        // c[12..15] lands partly in c[8..11].
        for k in (8..15).rev() {
            let hi = c[k];
            c[k - 8] += hi;
            c[k - 4] += hi;
        }

        let mut r = [0u128; 8];
        r.copy_from_slice(&c[..8]);

        // Two carry passes: the first leaves limbs 0 and 4 below 2^65,
        // the second brings everything below 2^56 + 1.
        for _ in 0..2 {
            for i in 0..7 {
                r[i + 1] += r[i] >> 56;
                r[i] &= LOW_56_BIT_MASK as u128;
            }
            let top = r[7] >> 56;
            r[7] &= LOW_56_BIT_MASK as u128;
            r[0] += top;
            r[4] += top;
        }

        let mut limbs = [0u64; 8];
        for i in 0..8 {
            limbs[i] = r[i] as u64;
        }
        FieldElement56(limbs)
    }
}

impl<'a> Neg for &'a FieldElement56 {
    type Output = FieldElement56;
    fn neg(self) -> FieldElement56 {
        let mut output = *self;
        output.negate();
        output
    }
}

impl ConditionallySelectable for FieldElement56 {
    fn conditional_select(
        a: &FieldElement56,
        b: &FieldElement56,
        choice: Choice,
    ) -> FieldElement56 {
        let mut limbs = [0u64; 8];
        for i in 0..8 {
            limbs[i] = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement56(limbs)
    }

    fn conditional_swap(a: &mut FieldElement56, b: &mut FieldElement56, choice: Choice) {
        for i in 0..8 {
            u64::conditional_swap(&mut a.0[i], &mut b.0[i], choice);
        }
    }

    fn conditional_assign(&mut self, other: &FieldElement56, choice: Choice) {
        for i in 0..8 {
            self.0[i].conditional_assign(&other.0[i], choice);
        }
    }
}

impl FieldElement56 {
    pub(crate) const fn from_limbs(limbs: [u64; 8]) -> FieldElement56 {
        FieldElement56(limbs)
    }

    /// The scalar \\( 0 \\).
    pub const ZERO: FieldElement56 = FieldElement56::from_limbs([0; 8]);
    /// The scalar \\( 1 \\).
    pub const ONE: FieldElement56 = FieldElement56::from_limbs([1, 0, 0, 0, 0, 0, 0, 0]);
    /// The scalar \\( -1 \\).
    pub const MINUS_ONE: FieldElement56 = FieldElement56::from_limbs([
        LOW_56_BIT_MASK - 1,
        LOW_56_BIT_MASK,
        LOW_56_BIT_MASK,
        LOW_56_BIT_MASK,
        LOW_56_BIT_MASK - 1,
        LOW_56_BIT_MASK,
        LOW_56_BIT_MASK,
        LOW_56_BIT_MASK,
    ]);

    /// Invert the sign of this field element
    pub fn negate(&mut self) {
        let mut limbs = [0u64; 8];
        for i in 0..8 {
            limbs[i] = FOUR_P[i] - self.0[i];
        }
        self.0 = FieldElement56::weak_reduce(limbs).0;
    }

    /// Carry every limb into the next and fold the carry out of limb 7
    /// back into limbs 0 and 4.  Input limbs may use all 64 bits; the
    /// output limbs are below \\(2\^{56} + 2\^8\\).
    #[inline(always)]
    fn weak_reduce(mut limbs: [u64; 8]) -> FieldElement56 {
        let top = limbs[7] >> 56;
        limbs[7] &= LOW_56_BIT_MASK;
        limbs[0] += top;
        limbs[4] += top;

        for i in 0..7 {
            limbs[i + 1] += limbs[i] >> 56;
            limbs[i] &= LOW_56_BIT_MASK;
        }

        FieldElement56(limbs)
    }

    /// Reduce to the unique representative in \\([0, p)\\).
    fn strong_reduce(&self) -> [u64; 8] {
        let mut limbs = FieldElement56::weak_reduce(self.0).0;

        // The weakly reduced value is below 2p, so one conditional
        // subtraction suffices.  Subtract p unconditionally, then add it
        // back if that borrowed.
        let mut scarry: i128 = 0;
        for i in 0..8 {
            scarry += limbs[i] as i128 - P[i] as i128;
            limbs[i] = (scarry as u64) & LOW_56_BIT_MASK;
            scarry >>= 56;
        }
        debug_assert!(scarry == 0 || scarry == -1);

        let mask = scarry as u64;
        let mut carry: u128 = 0;
        for i in 0..8 {
            carry += limbs[i] as u128 + (P[i] & mask) as u128;
            limbs[i] = (carry as u64) & LOW_56_BIT_MASK;
            carry >>= 56;
        }

        limbs
    }

    /// Load a `FieldElement56` from 56 little-endian bytes.
    ///
    /// # Warning
    ///
    /// Any 448-bit value is accepted, including the non-canonical ones in
    /// \\([p, 2\^{448})\\).  Callers that need canonical input re-encode
    /// and compare.
    pub fn from_bytes(bytes: &[u8; 56]) -> FieldElement56 {
        let mut limbs = [0u64; 8];
        for (i, limb) in limbs.iter_mut().enumerate() {
            for j in 0..7 {
                *limb |= (bytes[7 * i + j] as u64) << (8 * j);
            }
        }
        FieldElement56(limbs)
    }

    /// Serialize this `FieldElement56` to a 56-byte array.  The encoding
    /// is canonical.
    pub fn to_bytes(self) -> [u8; 56] {
        let limbs = self.strong_reduce();
        let mut s = [0u8; 56];
        for i in 0..8 {
            for j in 0..7 {
                s[7 * i + j] = (limbs[i] >> (8 * j)) as u8;
            }
        }
        s
    }

    /// Given `k > 0`, return `self^(2^k)`.
    pub fn pow2k(&self, mut k: u32) -> FieldElement56 {
        debug_assert!(k > 0);
        let mut a = *self;
        loop {
            a = &a * &a;
            k -= 1;
            if k == 0 {
                break;
            }
        }
        a
    }

    /// Returns the square of this field element.
    pub fn square(&self) -> FieldElement56 {
        self * self
    }
}
