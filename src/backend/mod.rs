// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

//! Arithmetic backends.
//!
//! Only the portable serial backend exists: 64-bit limbs with 128-bit
//! products for both field primes.

pub mod serial;
