// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

//! Field arithmetic modulo the two curve primes.
//!
//! The limb arithmetic lives in [`crate::backend::serial::u64`]; this
//! module fixes the type aliases used by the point engines and provides
//! the operations defined in terms of the limb arithmetic: equality,
//! sign, inversion and square roots of ratios.
//!
//! Every operation here is constant time.

#![allow(unused_qualifications)]

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use crate::backend;
use crate::backend::serial::u64::constants;

/// An element of \\( \mathbb Z / (2\^{255} - 19)\\).
pub type FieldElement = backend::serial::u64::field::FieldElement51;

/// An element of \\( \mathbb Z / (2\^{448} - 2\^{224} - 1)\\).
pub type FieldElement448 = backend::serial::u64::field448::FieldElement56;

impl Eq for FieldElement {}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for FieldElement {
    /// Test equality between two `FieldElement`s.  Since the
    /// internal representation is not canonical, the field elements
    /// are normalized to wire format before comparison.
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl FieldElement {
    /// Determine if this `FieldElement` is negative, in the sense
    /// used in the ed25519 paper: `x` is negative if the low bit is
    /// set.
    ///
    /// # Return
    ///
    /// If negative, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    pub fn is_negative(&self) -> Choice {
        let bytes = self.to_bytes();
        (bytes[0] & 1).into()
    }

    /// Determine if this `FieldElement` is zero.
    ///
    /// # Return
    ///
    /// If zero, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    pub fn is_zero(&self) -> Choice {
        let zero = [0u8; 32];
        let bytes = self.to_bytes();

        bytes.ct_eq(&zero)
    }

    /// Compute (self^(2^250-1), self^11), used as a helper function
    /// within invert() and pow22523().
    #[rustfmt::skip] // keep alignment of explanatory comments
    fn pow22501(&self) -> (FieldElement, FieldElement) {
        // Instead of managing which temporary variables are used
        // for what, we define as many as we need and leave stack
        // allocation to the compiler
        //
        // Each temporary variable t_i is of the form (self)^e_i.
        // Squaring t_i corresponds to multiplying e_i by 2,
        // so the pow2k function shifts e_i left by k places.
        // Multiplying t_i and t_j corresponds to adding e_i + e_j.
        //
        // Temporary t_i                      Nonzero bits of e_i
        //
        let t0  = self.square();           // 1         e_0 = 2^1
        let t1  = t0.square().square();    // 3         e_1 = 2^3
        let t2  = self * &t1;              // 3,0       e_2 = 2^3 + 2^0
        let t3  = &t0 * &t2;               // 3,1,0
        let t4  = t3.square();             // 4,2,1
        let t5  = &t2 * &t4;               // 4,3,2,1,0
        let t6  = t5.pow2k(5);             // 9,8,7,6,5
        let t7  = &t6 * &t5;               // 9,8,7,6,5,4,3,2,1,0
        let t8  = t7.pow2k(10);            // 19..10
        let t9  = &t8 * &t7;               // 19..0
        let t10 = t9.pow2k(20);            // 39..20
        let t11 = &t10 * &t9;              // 39..0
        let t12 = t11.pow2k(10);           // 49..10
        let t13 = &t12 * &t7;              // 49..0
        let t14 = t13.pow2k(50);           // 99..50
        let t15 = &t14 * &t13;             // 99..0
        let t16 = t15.pow2k(100);          // 199..100
        let t17 = &t16 * &t15;             // 199..0
        let t18 = t17.pow2k(50);           // 249..50
        let t19 = &t18 * &t13;             // 249..0

        (t19, t3)
    }

    /// Given a nonzero field element, compute its inverse.
    ///
    /// The inverse is computed as self^(p-2), since
    /// x^(p-2)x = x^(p-1) = 1 (mod p).
    ///
    /// This function returns zero on input zero.
    #[rustfmt::skip] // keep alignment of explanatory comments
    #[allow(clippy::let_and_return)]
    pub fn invert(&self) -> FieldElement {
        // The bits of p-2 = 2^255 -19 -2 are 11010111111...11.
        //
        //                                 nonzero bits of exponent
        let (t19, t3) = self.pow22501();   // t19: 249..0 ; t3: 3,1,0
        let t20 = t19.pow2k(5);            // 254..5
        let t21 = &t20 * &t3;              // 254..5,3,1,0

        t21
    }

    /// Raise this field element to the power (p-5)/8 = 2^252 -3.
    #[rustfmt::skip] // keep alignment of explanatory comments
    #[allow(clippy::let_and_return)]
    fn pow_p58(&self) -> FieldElement {
        // The bits of (p-5)/8 are 101111.....11.
        //
        //                                 nonzero bits of exponent
        let (t19, _) = self.pow22501();    // 249..0
        let t20 = t19.pow2k(2);            // 251..2
        let t21 = self * &t20;             // 251..2,0

        t21
    }

    /// Given `FieldElements` `u` and `v`, compute either `sqrt(u/v)`
    /// or `sqrt(i*u/v)` in constant time.
    ///
    /// This function always returns the nonnegative square root.
    ///
    /// # Return
    ///
    /// - `(Choice(1), +sqrt(u/v))  ` if `v` is nonzero and `u/v` is square;
    /// - `(Choice(1), zero)        ` if `u` is zero;
    /// - `(Choice(0), zero)        ` if `v` is zero and `u` is nonzero;
    /// - `(Choice(0), +sqrt(i*u/v))` if `u/v` is nonsquare (so `i*u/v` is square).
    pub fn sqrt_ratio_i(u: &FieldElement, v: &FieldElement) -> (Choice, FieldElement) {
        // Using the same trick as in ed25519 decoding, we merge the
        // inversion, the square root, and the square test as follows.
        //
        // To compute sqrt(α), we can compute β = α^((p+3)/8).
        // Then β^2 = ±α, so multiplying β by sqrt(-1) if necessary
        // gives sqrt(α).
        //
        // To compute 1/sqrt(α), we observe that
        //    1/β = α^(p-1 - (p+3)/8) = α^((7p-11)/8)
        //                            = α^3 * (α^7)^((p-5)/8).
        //
        // We can therefore compute sqrt(u/v) = sqrt(u)/sqrt(v)
        // by first computing
        //    r = u^((p+3)/8) v^(p-1-(p+3)/8)
        //      = u u^((p-5)/8) v^3 (v^7)^((p-5)/8)
        //      = (uv^3) (uv^7)^((p-5)/8).
        //
        // If v is nonzero and u/v is square, then r^2 = ±u/v,
        //                                     so vr^2 = ±u.
        // If vr^2 =  u, then sqrt(u/v) = r.
        // If vr^2 = -u, then sqrt(u/v) = r*sqrt(-1).
        //
        // If v is zero, r is also zero.

        let v3 = &v.square() * v;
        let v7 = &v3.square() * v;
        let mut r = &(u * &v3) * &(u * &v7).pow_p58();
        let check = v * &r.square();

        let i = &constants::SQRT_M1;

        let correct_sign_sqrt = check.ct_eq(u);
        let flipped_sign_sqrt = check.ct_eq(&(-u));
        let flipped_sign_sqrt_i = check.ct_eq(&(&(-u) * i));

        let r_prime = &constants::SQRT_M1 * &r;
        r.conditional_assign(&r_prime, flipped_sign_sqrt | flipped_sign_sqrt_i);

        // Choose the nonnegative square root.
        let r_is_negative = r.is_negative();
        r.conditional_negate(r_is_negative);

        let was_nonzero_square = correct_sign_sqrt | flipped_sign_sqrt;

        (was_nonzero_square, r)
    }
}

impl Eq for FieldElement448 {}

impl PartialEq for FieldElement448 {
    fn eq(&self, other: &FieldElement448) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for FieldElement448 {
    fn ct_eq(&self, other: &FieldElement448) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl FieldElement448 {
    /// `x` is negative if the low bit of its canonical encoding is set.
    pub fn is_negative(&self) -> Choice {
        let bytes = self.to_bytes();
        (bytes[0] & 1).into()
    }

    /// Determine if this `FieldElement448` is zero.
    pub fn is_zero(&self) -> Choice {
        let zero = [0u8; 56];
        let bytes = self.to_bytes();

        bytes.ct_eq(&zero)
    }

    /// Raise this field element to the power (p-3)/4 = 2^446 - 2^222 - 1.
    #[rustfmt::skip] // keep alignment of explanatory comments
    fn pow_p34(&self) -> FieldElement448 {
        // Each t_n below is self^(2^n - 1).
        let t1   = *self;
        let t2   = &t1.square() * self;            // 1,0
        let t3   = &t2.square() * self;            // 2..0
        let t6   = &t3.pow2k(3) * &t3;             // 5..0
        let t12  = &t6.pow2k(6) * &t6;             // 11..0
        let t24  = &t12.pow2k(12) * &t12;          // 23..0
        let t30  = &t24.pow2k(6) * &t6;            // 29..0
        let t48  = &t24.pow2k(24) * &t24;          // 47..0
        let t96  = &t48.pow2k(48) * &t48;          // 95..0
        let t192 = &t96.pow2k(96) * &t96;          // 191..0
        let t222 = &t192.pow2k(30) * &t30;         // 221..0
        let t223 = &t222.square() * self;          // 222..0

        &t223.pow2k(223) * &t222                   // 445..223,221..0
    }

    /// Given a nonzero field element, compute its inverse as
    /// `self^(p-2)`.  Returns zero on input zero.
    pub fn invert(&self) -> FieldElement448 {
        // p - 2 = 4 * (p-3)/4 + 1
        &self.pow_p34().pow2k(2) * self
    }

    /// Given `u` and `v`, compute `sqrt(u/v)` in constant time, using
    /// `p = 3 (mod 4)` to merge the inversion into the exponentiation:
    ///
    /// `x = u^3 v (u^5 v^3)^((p-3)/4)`.
    ///
    /// This function always returns the nonnegative square root.
    ///
    /// # Return
    ///
    /// - `(Choice(1), +sqrt(u/v))` if `v` is nonzero and `u/v` is square;
    /// - `(Choice(1), zero)      ` if `u` is zero;
    /// - `(Choice(0), _)         ` otherwise.
    pub fn sqrt_ratio(u: &FieldElement448, v: &FieldElement448) -> (Choice, FieldElement448) {
        let u2 = u.square();
        let u3 = &u2 * u;
        let u5 = &u3 * &u2;
        let v3 = &v.square() * v;

        let mut x = &(&u3 * v) * &(&u5 * &v3).pow_p34();
        let check = v * &x.square();
        let was_square = check.ct_eq(u);

        let x_is_negative = x.is_negative();
        x.conditional_negate(x_is_negative);

        (was_square, x)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use subtle::ConditionallyNegatable;

    /// Random element a of GF(2^255-19), from Sage
    /// a = 1070314506888354081329385823235218444233221\
    ///     2228051251926706380353716438957572
    static A_BYTES: [u8; 32] = [
        0x04, 0xfe, 0xdf, 0x98, 0xa7, 0xfa, 0x0a, 0x68, 0x84, 0x92, 0xbd, 0x59, 0x08, 0x07, 0xa7,
        0x03, 0x9e, 0xd1, 0xf6, 0xf2, 0xe1, 0xd9, 0xe2, 0xa4, 0xa4, 0x51, 0x47, 0x36, 0xf3, 0xc3,
        0xa9, 0x17,
    ];

    /// Byte representation of a**2
    static ASQ_BYTES: [u8; 32] = [
        0x75, 0x97, 0x24, 0x9e, 0xe6, 0x06, 0xfe, 0xab, 0x24, 0x04, 0x56, 0x68, 0x07, 0x91, 0x2d,
        0x5d, 0x0b, 0x0f, 0x3f, 0x1c, 0xb2, 0x6e, 0xf2, 0xe2, 0x63, 0x9c, 0x12, 0xba, 0x73, 0x0b,
        0xe3, 0x62,
    ];

    /// Byte representation of 1/a
    static AINV_BYTES: [u8; 32] = [
        0x96, 0x1b, 0xcd, 0x8d, 0x4d, 0x5e, 0xa2, 0x3a, 0xe9, 0x36, 0x37, 0x93, 0xdb, 0x7b, 0x4d,
        0x70, 0xb8, 0x0d, 0xc0, 0x55, 0xd0, 0x4c, 0x1d, 0x7b, 0x90, 0x71, 0xd8, 0xe9, 0xb6, 0x18,
        0xe6, 0x30,
    ];

    #[test]
    fn a_mul_a_vs_a_squared_constant() {
        let a = FieldElement::from_bytes(&A_BYTES);
        let asq = FieldElement::from_bytes(&ASQ_BYTES);
        assert_eq!(asq, &a * &a);
    }

    #[test]
    fn a_square_vs_a_squared_constant() {
        let a = FieldElement::from_bytes(&A_BYTES);
        let asq = FieldElement::from_bytes(&ASQ_BYTES);
        assert_eq!(asq, a.square());
    }

    #[test]
    fn a_square2_vs_a_squared_constant() {
        let a = FieldElement::from_bytes(&A_BYTES);
        let asq = FieldElement::from_bytes(&ASQ_BYTES);
        assert_eq!(a.square2(), &asq + &asq);
    }

    #[test]
    fn a_invert_vs_inverse_of_a_constant() {
        let a = FieldElement::from_bytes(&A_BYTES);
        let ainv = FieldElement::from_bytes(&AINV_BYTES);
        let should_be_inverse = a.invert();
        assert_eq!(ainv, should_be_inverse);
        assert_eq!(FieldElement::ONE, &a * &should_be_inverse);
    }

    #[test]
    fn sqrt_ratio_behavior() {
        let zero = FieldElement::ZERO;
        let one = FieldElement::ONE;
        let i = constants::SQRT_M1;
        let two = &one + &one; // 2 is nonsquare mod p.
        let four = &two + &two; // 4 is square mod p.

        // 0/0 should return (1, 0) since u is 0
        let (choice, sqrt) = FieldElement::sqrt_ratio_i(&zero, &zero);
        assert!(bool::from(choice));
        assert_eq!(sqrt, zero);
        assert!(!bool::from(sqrt.is_negative()));

        // 1/0 should return (0, 0) since v is 0, u is nonzero
        let (choice, sqrt) = FieldElement::sqrt_ratio_i(&one, &zero);
        assert!(!bool::from(choice));
        assert_eq!(sqrt, zero);
        assert!(!bool::from(sqrt.is_negative()));

        // 2/1 is nonsquare, so we expect (0, sqrt(i*2))
        let (choice, sqrt) = FieldElement::sqrt_ratio_i(&two, &one);
        assert!(!bool::from(choice));
        assert_eq!(sqrt.square(), &two * &i);
        assert!(!bool::from(sqrt.is_negative()));

        // 4/1 is square, so we expect (1, sqrt(4))
        let (choice, sqrt) = FieldElement::sqrt_ratio_i(&four, &one);
        assert!(bool::from(choice));
        assert_eq!(sqrt.square(), four);
        assert!(!bool::from(sqrt.is_negative()));

        // 1/4 is square, so we expect (1, 1/sqrt(4))
        let (choice, sqrt) = FieldElement::sqrt_ratio_i(&one, &four);
        assert!(bool::from(choice));
        assert_eq!(&sqrt.square() * &four, one);
        assert!(!bool::from(sqrt.is_negative()));
    }

    #[test]
    fn from_bytes_highbit_is_ignored() {
        let mut cleared_bytes = A_BYTES;
        cleared_bytes[31] &= 127u8;
        let with_highbit_set = {
            let mut bytes = A_BYTES;
            bytes[31] |= 128u8;
            FieldElement::from_bytes(&bytes)
        };
        let without_highbit_set = FieldElement::from_bytes(&cleared_bytes);
        assert_eq!(without_highbit_set, with_highbit_set);
    }

    #[test]
    fn conditional_negate() {
        let one = FieldElement::ONE;
        let minus_one = FieldElement::MINUS_ONE;
        let mut x = one;
        x.conditional_negate(Choice::from(1));
        assert_eq!(x, minus_one);
        x.conditional_negate(Choice::from(0));
        assert_eq!(x, minus_one);
        x.conditional_negate(Choice::from(1));
        assert_eq!(x, one);
    }

    #[test]
    fn encoding_is_canonical() {
        // Encode 1 wrongly as 1 + (2^255 - 19) = 2^255 - 18
        let one_encoded_wrongly_bytes: [u8; 32] = [
            0xee, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0x7f,
        ];
        // Decode to a field element
        let one = FieldElement::from_bytes(&one_encoded_wrongly_bytes);
        // .. then check that the encoding is correct
        let one_bytes = one.to_bytes();
        assert_eq!(one_bytes[0], 1);
        for byte in &one_bytes[1..] {
            assert_eq!(*byte, 0);
        }
    }

    fn fe448(seed: u8) -> FieldElement448 {
        let mut bytes = [0u8; 56];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = seed.wrapping_mul(i as u8).wrapping_add(0x3b);
        }
        FieldElement448::from_bytes(&bytes)
    }

    #[test]
    fn invert_448() {
        let a = fe448(7);
        assert_eq!(&a * &a.invert(), FieldElement448::ONE);
        assert_eq!(FieldElement448::ZERO.invert(), FieldElement448::ZERO);
        assert_eq!(FieldElement448::MINUS_ONE.invert(), FieldElement448::MINUS_ONE);
    }

    #[test]
    fn sqrt_ratio_448_behavior() {
        let zero = FieldElement448::ZERO;
        let one = FieldElement448::ONE;

        let (choice, sqrt) = FieldElement448::sqrt_ratio(&zero, &one);
        assert!(bool::from(choice));
        assert_eq!(sqrt, zero);

        let (choice, _) = FieldElement448::sqrt_ratio(&one, &zero);
        assert!(!bool::from(choice));

        // a^2 / b^2 is always square, and the root is +-(a/b).
        let a = fe448(11);
        let b = fe448(29);
        let (choice, sqrt) = FieldElement448::sqrt_ratio(&a.square(), &b.square());
        assert!(bool::from(choice));
        assert!(!bool::from(sqrt.is_negative()));
        let ratio = &a * &b.invert();
        assert!(sqrt == ratio || sqrt == -&ratio);

        // p = 3 mod 4, so -1 is a nonsquare.
        let (choice, _) = FieldElement448::sqrt_ratio(&FieldElement448::MINUS_ONE, &one);
        assert!(!bool::from(choice));
    }

    #[test]
    fn is_negative_448() {
        // 1 is odd
        assert!(bool::from(FieldElement448::ONE.is_negative()));
        // -1 = p - 1 is even
        assert!(!bool::from(FieldElement448::MINUS_ONE.is_negative()));
        let two = &FieldElement448::ONE + &FieldElement448::ONE;
        assert!(!bool::from(two.is_negative()));
        // -2 = p - 2 is odd
        assert!(bool::from((-&two).is_negative()));
        assert!(!bool::from(FieldElement448::ZERO.is_negative()));
    }
}
