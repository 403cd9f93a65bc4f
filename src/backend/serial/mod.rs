// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

//! Serial implementations of field arithmetic, point arithmetic and
//! scalar multiplication.
//!
//! The edwards25519 engine uses the mixed-model strategy for point
//! operations; see the [`curve_models`] and [`scalar_mul`] documentation
//! for more information.  The Goldilocks engine works in extended
//! coordinates throughout and lives in [`crate::goldilocks`].

pub mod u64;

pub mod curve_models;

pub mod scalar_mul;
