//! # Elliptic curve VRFs with additional data
//!
//! Verifiable Random Functions bind a pseudorandom output to a secret key and
//! an input, in a way that anyone holding the public key can check. This crate
//! implements three linked schemes on top of the [Arkworks](https://arkworks.rs)
//! algebra stack, each extended to bind optional *additional data* into the
//! proof:
//!
//! - **IETF VRF**: the ECVRF construction of
//!   [RFC 9381](https://datatracker.ietf.org/doc/rfc9381) ([`ietf`]).
//! - **Pedersen VRF**: a key-hiding variant where the proof commits to the
//!   public key instead of exposing it ([`pedersen`]).
//! - **Ring VRF**: a Pedersen VRF plus a succinct KZG-based argument that the
//!   committed key belongs to a declared ring of public keys ([`ring`],
//!   behind the `ring` feature).
//!
//! Input points are derived via RFC 9380/9381 hash-to-curve (Elligator 2,
//! SSWU, or try-and-increment depending on the suite). The VRF output point
//! hashes to the canonical pseudorandom byte string.
//!
//! ## Suites
//!
//! Pre-configured cipher suites, each behind its feature flag:
//!
//! - `bandersnatch`: Twisted Edwards form (SHA-512, Elligator 2) with IETF,
//!   Pedersen and Ring support, plus a Short Weierstrass form (SHA-512, TAI).
//! - `ed25519` (SHA-512, TAI), `jubjub` (SHA-512, TAI), `baby-jubjub`
//!   (SHA-512, TAI): IETF support.
//! - `secp256r1` (SHA-256, TAI, SEC1 encoding): the RFC 9381 P-256 suite,
//!   with IETF and Pedersen support.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ec_vrfs::suites::bandersnatch::*;
//!
//! let secret = Secret::from_seed(b"example seed");
//! let public = secret.public();
//! let input = Input::new(b"example input").unwrap();
//! let output = secret.output(input);
//! // Canonical VRF randomness.
//! let bytes = output.hash();
//! ```
//!
//! ## Features
//!
//! - `default`: `std` + `full`.
//! - `full`: every curve suite plus `ring`.
//! - `ring`: the ring VRF backend (KZG, ring arithmetization).
//! - `secret-split`: splits secret scalars in two random shares during
//!   sensitive multiplications, trading speed for side-channel margin.
//! - `parallel`, `asm`: forwarded to the arkworks backends.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{One, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::vec::Vec;

use digest::Digest;
use zeroize::Zeroize;

pub mod codec;
pub mod ietf;
pub mod pedersen;
pub mod suites;
pub mod utils;

#[cfg(feature = "ring")]
pub mod ring;

#[cfg(test)]
mod testing;

/// Re-exports for downstream users of the raw algebra types.
pub mod reexports {
    pub use ark_ec;
    pub use ark_ff;
    pub use ark_serialize;
    pub use ark_std;
}

use codec::Codec;

pub type AffinePoint<S> = <S as Suite>::Affine;
pub type BaseField<S> = <AffinePoint<S> as AffineRepr>::BaseField;
pub type ScalarField<S> = <AffinePoint<S> as AffineRepr>::ScalarField;
pub type CurveConfig<S> = <AffinePoint<S> as AffineRepr>::Config;

pub type HashOutput<S> = digest::Output<<S as Suite>::Hasher>;

/// Errors surfaced by the public operations.
///
/// Variants deliberately carry no payload derived from secret material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Malformed encoding: wrong length, not on curve, or not in the
    /// prime order subgroup.
    InvalidEncoding,
    /// Proof rejected: equation mismatch, challenge mismatch or pairing
    /// check failure.
    InvalidProof,
    /// The prover public key is not a member of the ring.
    KeyNotInRing,
    /// Ring or SRS can't accommodate the requested domain size.
    DomainMismatch,
    /// Unexpected internal condition, e.g. an evaluation point falling
    /// inside the domain or map-to-curve exhausting its attempts.
    InternalInvariant,
}

impl From<ark_serialize::SerializationError> for Error {
    fn from(_err: ark_serialize::SerializationError) -> Self {
        Error::InvalidEncoding
    }
}

/// A VRF cipher suite.
///
/// Bundles the curve, the hash, the codec and the RFC 9381 sub-procedures
/// (nonce, challenge, encode-to-curve, proof-to-hash). The provided method
/// defaults follow RFC 9381 section 5.5; exotic suites can override them.
pub trait Suite: Copy {
    /// Suite identifier (`suite_string` in RFC 9381 terms).
    const SUITE_ID: &'static [u8];

    /// Challenge length in bytes. Must not exceed the hash output length.
    const CHALLENGE_LEN: usize;

    /// Group element in affine form.
    ///
    /// The `AffineRepr` bound guarantees points are handled within the
    /// prime order subgroup.
    type Affine: AffineRepr;

    /// Suite hasher, used for nonces, challenges and output hashing.
    type Hasher: Digest;

    /// Point and scalar wire format.
    type Codec: codec::Codec<Self>;

    /// Deterministic nonce (RFC 9381 section 5.4.2).
    ///
    /// Defaults to the RFC 8032 derived variant of section 5.4.2.2.
    /// Requires a hasher with at least 64 bytes of output.
    #[inline(always)]
    fn nonce(sk: &ScalarField<Self>, pt: Input<Self>) -> ScalarField<Self> {
        utils::nonce_rfc_8032::<Self>(sk, &pt.0)
    }

    /// Challenge scalar over a sequence of points plus additional data
    /// (RFC 9381 section 5.4.3, extended with the `ad` suffix).
    #[inline(always)]
    fn challenge(pts: &[&AffinePoint<Self>], ad: &[u8]) -> ScalarField<Self> {
        utils::challenge_rfc_9381::<Self>(pts, ad)
    }

    /// Map arbitrary data to a curve point.
    ///
    /// Defaults to try-and-increment (RFC 9381 section 5.4.1.1). The input
    /// is expected to already carry any salt prefix.
    #[inline(always)]
    fn data_to_point(data: &[u8]) -> Option<AffinePoint<Self>> {
        utils::hash_to_curve_tai_rfc_9381::<Self>(data)
    }

    /// Map a point to its output hash (RFC 9381 section 5.2, without
    /// cofactor multiplication as points live in the prime subgroup).
    #[inline(always)]
    fn point_to_hash(pt: &AffinePoint<Self>) -> HashOutput<Self> {
        utils::point_to_hash_rfc_9381::<Self>(pt, false)
    }

    /// Group generator used throughout the suite.
    #[inline(always)]
    fn generator() -> AffinePoint<Self> {
        Self::Affine::generator()
    }
}

/// VRF secret key.
///
/// Holds the secret scalar together with its cached public counterpart.
/// The scalar is wiped when the value is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Secret<S: Suite> {
    /// Secret scalar.
    pub scalar: ScalarField<S>,
    /// Cached public key.
    pub public: Public<S>,
}

impl<S: Suite> Drop for Secret<S> {
    fn drop(&mut self) {
        self.scalar.zeroize()
    }
}

impl<S: Suite> CanonicalSerialize for Secret<S> {
    fn serialize_with_mode<W: ark_serialize::Write>(
        &self,
        writer: W,
        compress: ark_serialize::Compress,
    ) -> Result<(), ark_serialize::SerializationError> {
        self.scalar.serialize_with_mode(writer, compress)
    }

    fn serialized_size(&self, compress: ark_serialize::Compress) -> usize {
        self.scalar.serialized_size(compress)
    }
}

impl<S: Suite> CanonicalDeserialize for Secret<S> {
    fn deserialize_with_mode<R: ark_serialize::Read>(
        reader: R,
        compress: ark_serialize::Compress,
        validate: ark_serialize::Validate,
    ) -> Result<Self, ark_serialize::SerializationError> {
        let scalar = <ScalarField<S> as CanonicalDeserialize>::deserialize_with_mode(
            reader, compress, validate,
        )?;
        Ok(Self::from_scalar(scalar))
    }
}

impl<S: Suite> ark_serialize::Valid for Secret<S> {
    fn check(&self) -> Result<(), ark_serialize::SerializationError> {
        self.scalar.check()
    }
}

impl<S: Suite> Secret<S> {
    /// Secret key from the given scalar.
    pub fn from_scalar(scalar: ScalarField<S>) -> Self {
        let public = Public((S::generator() * scalar).into_affine());
        Self { scalar, public }
    }

    /// Secret key with scalar derived by hashing `seed`.
    ///
    /// A zero scalar is replaced by one, so the key is always usable.
    pub fn from_seed(seed: &[u8]) -> Self {
        let bytes = utils::hash::<S::Hasher>(seed);
        let mut scalar = ScalarField::<S>::from_le_bytes_mod_order(&bytes[..]);
        if scalar.is_zero() {
            scalar.set_one();
        }
        Self::from_scalar(scalar)
    }

    /// Ephemeral secret key from the given randomness source.
    pub fn from_rand(rng: &mut impl ark_std::rand::RngCore) -> Self {
        let mut seed = [0u8; 32];
        rng.fill_bytes(&mut seed);
        Self::from_seed(&seed)
    }

    /// Associated public key.
    pub fn public(&self) -> Public<S> {
        self.public
    }

    /// VRF output point for the given input: `gamma = sk·H`.
    pub fn output(&self, input: Input<S>) -> Output<S> {
        Output(utils::mul_secret::<S>(input.0, self.scalar).into_affine())
    }
}

/// VRF public key: a point in the suite's prime order subgroup.
#[derive(Debug, Copy, Clone, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Public<S: Suite>(pub AffinePoint<S>);

impl<S: Suite> Public<S> {
    /// Public key from a raw affine point.
    pub fn from(value: AffinePoint<S>) -> Self {
        Self(value)
    }
}

/// VRF input point, typically derived from data via the suite's
/// encode-to-curve procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Input<S: Suite>(pub AffinePoint<S>);

impl<S: Suite> Input<S> {
    /// Input point from arbitrary data via [`Suite::data_to_point`].
    ///
    /// Fails with [`Error::InternalInvariant`] if the suite's mapping can't
    /// produce a valid point (for try-and-increment this means all 256
    /// counter values were exhausted).
    pub fn new(data: &[u8]) -> Result<Self, Error> {
        S::data_to_point(data)
            .map(Input)
            .ok_or(Error::InternalInvariant)
    }

    /// Input from a raw affine point.
    pub fn from(value: AffinePoint<S>) -> Self {
        Self(value)
    }
}

/// VRF output point (`gamma`).
///
/// The canonical VRF randomness is obtained via [`Output::hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Output<S: Suite>(pub AffinePoint<S>);

impl<S: Suite> Output<S> {
    /// Output from a raw affine point.
    pub fn from(value: AffinePoint<S>) -> Self {
        Self(value)
    }

    /// Hash the output point into the suite's pseudorandom byte string.
    pub fn hash(&self) -> HashOutput<S> {
        S::point_to_hash(&self.0)
    }
}

/// Type aliases for the given suite.
#[macro_export]
macro_rules! suite_types {
    ($suite:ident) => {
        #[allow(dead_code)]
        pub type Secret = $crate::Secret<$suite>;
        #[allow(dead_code)]
        pub type Public = $crate::Public<$suite>;
        #[allow(dead_code)]
        pub type Input = $crate::Input<$suite>;
        #[allow(dead_code)]
        pub type Output = $crate::Output<$suite>;
        #[allow(dead_code)]
        pub type AffinePoint = $crate::AffinePoint<$suite>;
        #[allow(dead_code)]
        pub type ScalarField = $crate::ScalarField<$suite>;
        #[allow(dead_code)]
        pub type BaseField = $crate::BaseField<$suite>;
        #[allow(dead_code)]
        pub type IetfProof = $crate::ietf::Proof<$suite>;
    };
}

/// Extra type aliases for suites supporting the Pedersen scheme.
#[macro_export]
macro_rules! pedersen_suite_types {
    ($suite:ident) => {
        #[allow(dead_code)]
        pub type PedersenProof = $crate::pedersen::Proof<$suite>;
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use suites::testing::TestSuite;
    use testing::{random_val, TEST_SEED};

    #[test]
    fn secret_from_seed_never_zero() {
        let secret = Secret::<TestSuite>::from_seed(TEST_SEED);
        assert!(!secret.scalar.is_zero());
        assert!(!secret.public().0.is_zero());
    }

    #[test]
    fn output_is_deterministic() {
        let secret = Secret::<TestSuite>::from_seed(TEST_SEED);
        let input = Input::<TestSuite>::from(random_val(None));
        let o1 = secret.output(input);
        let o2 = secret.output(input);
        assert_eq!(o1, o2);
        assert_eq!(o1.hash(), o2.hash());
    }

    #[test]
    fn secret_serialization_roundtrip() {
        let secret = Secret::<TestSuite>::from_seed(TEST_SEED);
        let mut buf = Vec::new();
        secret.serialize_compressed(&mut buf).unwrap();
        let secret2 = Secret::<TestSuite>::deserialize_compressed(&mut &buf[..]).unwrap();
        assert_eq!(secret, secret2);
    }
}
