// -*- mode: rust; -*-
//
// This file is part of edwards-groups.
// See LICENSE for licensing information.

#![allow(non_snake_case)]

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x00c0_ffee)
}

mod goldilocks_benches {
    use super::*;

    use edwards_groups::goldilocks::Goldilocks;
    use edwards_groups::scalar::Scalar448;

    fn random_scalar<R: RngCore>(rng: &mut R) -> Scalar448 {
        let mut bytes = [0u8; 56];
        rng.fill_bytes(&mut bytes);
        Scalar448::from_bytes(bytes)
    }

    fn descriptor_construction(c: &mut Criterion) {
        c.bench_function("Goldilocks descriptor construction", |b| {
            b.iter(Goldilocks::new)
        });
    }

    fn add_and_double(c: &mut Criterion) {
        let curve = Goldilocks::new();
        let P = curve.scalar_base_mult(&random_scalar(&mut rng()));
        let G = Goldilocks::generator();
        c.bench_function("Goldilocks addition", |b| b.iter(|| curve.add(&P, &G)));
        c.bench_function("Goldilocks doubling", |b| b.iter(|| curve.double(&P)));
    }

    fn marshal_unmarshal(c: &mut Criterion) {
        let curve = Goldilocks::new();
        let P = curve.scalar_base_mult(&random_scalar(&mut rng()));
        let bytes = curve.marshal(&P);
        c.bench_function("Goldilocks marshal", |b| b.iter(|| curve.marshal(&P)));
        c.bench_function("Goldilocks unmarshal", |b| {
            b.iter(|| curve.unmarshal(&bytes).unwrap())
        });
    }

    fn scalar_mults(c: &mut Criterion) {
        let curve = Goldilocks::new();
        let mut rng = rng();
        let P = curve.scalar_base_mult(&random_scalar(&mut rng));

        c.bench_function("Goldilocks fixed-base scalar mul", |b| {
            b.iter_batched(
                || random_scalar(&mut rng),
                |k| curve.scalar_base_mult(&k),
                BatchSize::SmallInput,
            )
        });
        c.bench_function("Goldilocks variable-base scalar mul", |b| {
            b.iter_batched(
                || random_scalar(&mut rng),
                |k| curve.scalar_mult(&k, &P),
                BatchSize::SmallInput,
            )
        });
        c.bench_function("Goldilocks combined kP + lG", |b| {
            b.iter_batched(
                || (random_scalar(&mut rng), random_scalar(&mut rng)),
                |(k, l)| curve.combined_mult(&P, &k, &l),
                BatchSize::SmallInput,
            )
        });
    }

    criterion_group! {
        name = goldilocks_benches;
        config = Criterion::default();
        targets =
        descriptor_construction,
        add_and_double,
        marshal_unmarshal,
        scalar_mults,
    }
}

mod edwards_benches {
    use super::*;

    use edwards_groups::edwards::Ed25519;
    use edwards_groups::scalar::Scalar25519;

    fn random_scalar<R: RngCore>(rng: &mut R) -> Scalar25519 {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Scalar25519::from_bytes(bytes)
    }

    fn compress_decompress(c: &mut Criterion) {
        let B = Ed25519::basepoint();
        let B_comp = B.compress();
        c.bench_function("EdwardsPoint compression", move |b| b.iter(|| B.compress()));
        c.bench_function("EdwardsPoint decompression", move |b| {
            b.iter(|| B_comp.decompress().unwrap())
        });
    }

    fn cached_additions(c: &mut Criterion) {
        let curve = Ed25519::new();
        let P = curve.fixed_mult(&random_scalar(&mut rng()));
        let B = Ed25519::basepoint();
        let B_projective = B.as_projective_niels();
        let B_affine = B.as_affine_niels();
        c.bench_function("EdwardsPoint + ProjectiveNielsPoint", |b| {
            b.iter(|| curve.add(&P, &B_projective))
        });
        c.bench_function("EdwardsPoint + AffineNielsPoint", |b| {
            b.iter(|| curve.mix_add(&P, &B_affine))
        });
        c.bench_function("EdwardsPoint doubling", |b| {
            b.iter_batched(
                || P,
                |mut Q| {
                    curve.double(&mut Q);
                    Q
                },
                BatchSize::SmallInput,
            )
        });
    }

    fn scalar_mults(c: &mut Criterion) {
        let curve = Ed25519::new();
        let mut rng = rng();
        let A = curve.fixed_mult(&random_scalar(&mut rng));

        c.bench_function("Constant-time fixed-base scalar mul", |b| {
            b.iter_batched(
                || random_scalar(&mut rng),
                |k| curve.fixed_mult(&k),
                BatchSize::SmallInput,
            )
        });
        c.bench_function("Constant-time variable-base scalar mul", |b| {
            b.iter_batched(
                || random_scalar(&mut rng),
                |k| &A * &k,
                BatchSize::SmallInput,
            )
        });
        c.bench_function("Constant-time aA+bB, A variable, B fixed", |b| {
            b.iter_batched(
                || (random_scalar(&mut rng), random_scalar(&mut rng)),
                |(k, l)| curve.double_mult(&A, &k, &l),
                BatchSize::SmallInput,
            )
        });
    }

    criterion_group! {
        name = edwards_benches;
        config = Criterion::default();
        targets =
        compress_decompress,
        cached_additions,
        scalar_mults,
    }
}

criterion_main!(
    goldilocks_benches::goldilocks_benches,
    edwards_benches::edwards_benches,
);
