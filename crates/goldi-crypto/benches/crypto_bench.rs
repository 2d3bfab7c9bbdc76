use criterion::{criterion_group, criterion_main, Criterion};

use goldi_bignum::BigNum;
use goldi_crypto::dhies;
use goldi_crypto::edwards::AffinePoint;
use goldi_crypto::keypair::KeyPair;
use goldi_crypto::schnorr;

fn bench_scalar_mul(c: &mut Criterion) {
    let g = AffinePoint::generator();
    let k = BigNum::random_bits(448).unwrap();
    c.bench_function("edwards/scalar_mul_448", |b| {
        b.iter(|| g.scalar_mul(&k).unwrap())
    });
}

fn bench_key_derivation(c: &mut Criterion) {
    c.bench_function("keypair/from_passphrase", |b| {
        b.iter(|| KeyPair::from_passphrase(b"benchmark passphrase").unwrap())
    });
}

fn bench_dhies(c: &mut Criterion) {
    let kp = KeyPair::from_passphrase(b"benchmark passphrase").unwrap();
    let message = vec![0xA5u8; 1024];

    c.bench_function("dhies/encrypt_1kib", |b| {
        b.iter(|| dhies::encrypt(&message, kp.public_key()).unwrap())
    });

    let cg = dhies::encrypt(&message, kp.public_key()).unwrap();
    c.bench_function("dhies/decrypt_1kib", |b| {
        b.iter(|| dhies::decrypt(&cg, b"benchmark passphrase").unwrap())
    });
}

fn bench_schnorr(c: &mut Criterion) {
    let kp = KeyPair::from_passphrase(b"benchmark passphrase").unwrap();
    let message = vec![0x5Au8; 1024];

    c.bench_function("schnorr/sign_1kib", |b| {
        b.iter(|| schnorr::sign(&message, &kp).unwrap())
    });

    let sig = schnorr::sign(&message, &kp).unwrap();
    c.bench_function("schnorr/verify_1kib", |b| {
        b.iter(|| schnorr::verify(&sig, &message, kp.public_key()).unwrap())
    });
}

criterion_group!(
    benches,
    bench_scalar_mul,
    bench_key_derivation,
    bench_dhies,
    bench_schnorr
);
criterion_main!(benches);
