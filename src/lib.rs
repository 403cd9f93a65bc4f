// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs, rust_2018_idioms)]

//! Constant-time group engines for two twisted Edwards curves:
//!
//! * [`goldilocks`]: the Goldilocks curve used by Ed448, a single
//!   extended-coordinate representation with a complete addition law;
//! * [`edwards`]: edwards25519, with a general accumulator form and two
//!   cached operand forms for repeated additions.
//!
//! Each curve is described by a value ([`goldilocks::Goldilocks`],
//! [`edwards::Ed25519`]) that owns its precomputed fixed-base tables.
//! Every scalar-dependent path runs in constant time.
//!
//! ```
//! use edwards_groups::goldilocks::Goldilocks;
//! use edwards_groups::scalar::Scalar448;
//!
//! let curve = Goldilocks::new();
//! let k = Scalar448::from(7u64);
//! let P = curve.scalar_base_mult(&k);
//! let bytes = curve.marshal(&P);
//! assert!(curve.equal(&curve.unmarshal(&bytes).unwrap(), &P));
//! ```

//------------------------------------------------------------------------
// External dependencies:
//------------------------------------------------------------------------

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "digest")]
pub use digest;

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

//------------------------------------------------------------------------
// edwards-groups public modules
//------------------------------------------------------------------------

// Scalar arithmetic modulo the two group orders
pub mod scalar;

// Point operations on edwards25519
pub mod edwards;

// Point operations on the Goldilocks curve
pub mod goldilocks;

// Finite field arithmetic mod p = 2^255 - 19 and p = 2^448 - 2^224 - 1
pub mod field;

// Generators, encodings and orders
pub mod constants;

// External (and internal) traits.
pub mod traits;

// Error taxonomy shared by both engines
pub mod errors;

//------------------------------------------------------------------------
// edwards-groups internal modules
//------------------------------------------------------------------------

// Limb arithmetic, curve models and multiplication loops
pub(crate) mod backend;

// Generic code for window lookups
pub(crate) mod window;

pub use crate::errors::Error;
