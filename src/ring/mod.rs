//! # Ring VRF
//!
//! Anonymous VRF: a [Pedersen VRF](crate::pedersen) proof plus a succinct
//! argument that the committed key belongs to a declared ring of public
//! keys. The argument is a small polynomial IOP over the pairing curve's
//! scalar field, compiled with KZG commitments; the ring itself is digested
//! into a fixed-size *ring root* that verifiers can keep around instead of
//! the key list.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ec_vrfs::ring::Prover;
//!
//! let params = RingProofParams::from_seed(RING_SIZE, seed);
//!
//! let prover_idx = params.key_index(&ring, &public.0)?;
//! let prover_key = params.prover_key(&ring)?;
//! let prover = params.prover(prover_key, prover_idx);
//! let proof = secret.prove(input, output, ad, &prover)?;
//!
//! let verifier_key = params.verifier_key(&ring)?;
//! let verifier = params.verifier(verifier_key);
//! Public::verify(input, output, ad, &proof, &verifier)?;
//!
//! // Fixed-size ring digest, reusable across verifications.
//! let ring_root = verifier_key.commitment();
//! ```

use crate::pedersen::{PedersenSuite, Proof as PedersenProof};
use crate::utils::te_sw_map::TEMapping;
use crate::*;
use ark_ec::pairing::Pairing;
use ark_ec::twisted_edwards::TECurveConfig;

pub mod domain;
pub mod pcs;
pub mod piop;
pub mod ring_builder;
pub mod transcript;

mod prover;
mod verifier;

pub use prover::RingProver as SnarkProver;
pub use verifier::RingVerifier as SnarkVerifier;

use domain::Domain;
use transcript::Transcript;

/// Generation seed for [`RingSuite::ACCUMULATOR_BASE`] of the built-in suites.
///
/// (en) *"The foundation of the accumulator which in the silence of time guards the hidden secret"*
pub const ACCUMULATOR_BASE_SEED: &[u8] =
    b"substratum accumulatoris quod in silentio temporis arcanum absconditum custodit";

/// Generation seed for [`RingSuite::PADDING`] of the built-in suites.
///
/// (en) *"A shadow that fills the void left by lost souls echoing among the darkness"*
pub const PADDING_SEED: &[u8] =
    b"umbra quae vacuum implet ab animabus perditis relictum inter tenebras resonans";

/// A suite equipped with the ring membership argument.
///
/// Requires a Twisted Edwards curve whose base field is the scalar field of
/// a pairing-friendly curve.
pub trait RingSuite:
    PedersenSuite<
    Affine: AffineRepr<BaseField: ark_ff::PrimeField, Config: TECurveConfig + Clone>
                + TEMapping<<Self::Affine as AffineRepr>::Config>,
>
{
    /// Pairing for the KZG layer.
    type Pairing: Pairing<ScalarField = BaseField<Self>>;

    /// Accumulator seed point.
    ///
    /// Must belong to the prime order subgroup; keeps the conditional
    /// addition trace away from the exceptional points of the addition law.
    const ACCUMULATOR_BASE: AffinePoint<Self>;

    /// Padding point for unused ring slots. Nothing-up-my-sleeve, discrete
    /// log unknown, so a padded slot can't be proven from.
    const PADDING: AffinePoint<Self>;
}

/// KZG universal setup (powers of tau).
pub type PcsParams<S> = pcs::Urs<<S as RingSuite>::Pairing>;

/// Ring argument parameters.
pub type PiopParams<S> = piop::PiopParams<BaseField<S>, CurveConfig<S>>;

/// Ring root: the fixed-size commitment to the ring.
pub type RingCommitment<S> = piop::FixedColumnsCommitted<<S as RingSuite>::Pairing>;

/// Prover-side indexed ring.
pub type RingProverKey<S> = piop::ProverKey<<S as RingSuite>::Pairing, CurveConfig<S>>;

/// Verifier-side indexed ring.
pub type RingVerifierKey<S> = piop::VerifierKey<<S as RingSuite>::Pairing>;

/// Ring argument prover handle.
pub type RingProver<S> = prover::RingProver<<S as RingSuite>::Pairing, CurveConfig<S>>;

/// Ring argument verifier handle.
pub type RingVerifier<S> = verifier::RingVerifier<<S as RingSuite>::Pairing, CurveConfig<S>>;

/// The bare membership argument attached to a Pedersen proof.
pub type RingBareProof<S> = piop::RingProof<<S as RingSuite>::Pairing>;

/// Incrementally constructible ring commitment.
pub type RingBuilder<S> = ring_builder::Ring<<S as RingSuite>::Pairing, CurveConfig<S>>;

/// Lagrangian SRS slice used by [`RingBuilder`].
pub type RingBuilderKey<S> = ring_builder::RingBuilderKey<<S as RingSuite>::Pairing>;

/// Pairing G1 affine point.
pub type G1Affine<S> = <<S as RingSuite>::Pairing as Pairing>::G1Affine;

/// Ring VRF proof: VRF correctness under a committed key, plus membership
/// of that key in the ring.
#[derive(Clone, Debug, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof<S: RingSuite> {
    pub pedersen_proof: PedersenProof<S>,
    pub ring_proof: RingBareProof<S>,
}

/// Ring VRF proof generation.
pub trait Prover<S: RingSuite> {
    /// Prove that `output` is this key's evaluation over `input`, and that
    /// the key sits in the ring committed to by `ring_prover`.
    fn prove(
        &self,
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        ring_prover: &RingProver<S>,
    ) -> Result<Proof<S>, Error>;
}

/// Ring VRF proof verification.
pub trait Verifier<S: RingSuite> {
    /// Check `proof` for `(input, output, ad)` against the ring committed
    /// to by `verifier`.
    fn verify(
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        proof: &Proof<S>,
        verifier: &RingVerifier<S>,
    ) -> Result<(), Error>;
}

impl<S: RingSuite> Prover<S> for Secret<S> {
    fn prove(
        &self,
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        ring_prover: &RingProver<S>,
    ) -> Result<Proof<S>, Error> {
        use pedersen::Prover as PedersenProver;
        let (pedersen_proof, secret_blinding) =
            <Self as PedersenProver<S>>::prove(self, input, output, ad);
        let ring_proof = ring_prover.prove(secret_blinding)?;
        Ok(Proof {
            pedersen_proof,
            ring_proof,
        })
    }
}

impl<S: RingSuite> Verifier<S> for Public<S> {
    fn verify(
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        proof: &Proof<S>,
        verifier: &RingVerifier<S>,
    ) -> Result<(), Error> {
        use pedersen::Verifier as PedersenVerifier;
        <Self as PedersenVerifier<S>>::verify(input, output, ad, &proof.pedersen_proof)?;
        let key_commitment = proof.pedersen_proof.key_commitment().into_te();
        if !verifier.verify(&proof.ring_proof, key_commitment) {
            return Err(Error::InvalidProof);
        }
        Ok(())
    }
}

pub(crate) fn piop_params<S: RingSuite>(domain_size: usize) -> Result<PiopParams<S>, Error> {
    let domain = Domain::new(domain_size)?;
    PiopParams::<S>::setup(
        domain,
        S::BLINDING_BASE.into_te(),
        S::ACCUMULATOR_BASE.into_te(),
        S::PADDING.into_te(),
    )
}

/// Ring proof parameters: KZG setup plus the domain layout.
#[derive(Clone)]
pub struct RingProofParams<S: RingSuite> {
    /// KZG setup.
    pub pcs: PcsParams<S>,
    /// Argument parameters.
    pub piop: PiopParams<S>,
}

impl<S: RingSuite> RingProofParams<S> {
    /// Deterministic parameters for the given ring size (ChaCha20 from `seed`).
    ///
    /// Test and development convenience; production setups load a ceremony
    /// transcript through [`Self::from_pcs_params`].
    pub fn from_seed(ring_size: usize, seed: [u8; 32]) -> Result<Self, Error> {
        use ark_std::rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha20Rng::from_seed(seed);
        Self::from_rand(ring_size, &mut rng)
    }

    /// Parameters with a freshly generated setup of sufficient degree.
    pub fn from_rand(
        ring_size: usize,
        rng: &mut impl ark_std::rand::RngCore,
    ) -> Result<Self, Error> {
        let max_degree = pcs_domain_size::<S>(ring_size) - 1;
        let pcs_params = PcsParams::<S>::generate(max_degree, rng);
        Self::from_pcs_params(ring_size, pcs_params)
    }

    /// Parameters from an existing KZG setup, truncated to the requirement.
    ///
    /// Fails with [`Error::DomainMismatch`] if the setup is too small for
    /// `ring_size`.
    pub fn from_pcs_params(ring_size: usize, mut pcs_params: PcsParams<S>) -> Result<Self, Error> {
        let pcs_domain_size = pcs_domain_size::<S>(ring_size);
        if pcs_params.powers_in_g1.len() < pcs_domain_size || pcs_params.powers_in_g2.len() < 2 {
            return Err(Error::DomainMismatch);
        }
        pcs_params.powers_in_g1.truncate(pcs_domain_size);
        pcs_params.powers_in_g2.truncate(2);
        let piop_domain_size = piop_domain_size::<S>(ring_size);
        Ok(Self {
            pcs: pcs_params,
            piop: piop_params::<S>(piop_domain_size)?,
        })
    }

    /// Max number of keys the parameters support.
    #[inline(always)]
    pub fn max_ring_size(&self) -> usize {
        self.piop.keyset_part_size
    }

    /// Position of `pk` in the ring.
    pub fn key_index(pks: &[AffinePoint<S>], pk: &AffinePoint<S>) -> Result<usize, Error> {
        pks.iter().position(|p| p == pk).ok_or(Error::KeyNotInRing)
    }

    /// Index the ring for proving. Keys beyond capacity are ignored.
    pub fn prover_key(&self, pks: &[AffinePoint<S>]) -> Result<RingProverKey<S>, Error> {
        let pks = TEMapping::to_te_slice(&pks[..pks.len().min(self.max_ring_size())]);
        Ok(piop::index(&self.pcs, &self.piop, &pks)?.0)
    }

    /// Prover handle for the ring position `key_index`.
    pub fn prover(&self, prover_key: RingProverKey<S>, key_index: usize) -> RingProver<S> {
        RingProver::<S>::init(
            prover_key,
            self.piop.clone(),
            key_index,
            Transcript::new(S::SUITE_ID),
        )
    }

    /// Index the ring for verification. Keys beyond capacity are ignored.
    pub fn verifier_key(&self, pks: &[AffinePoint<S>]) -> Result<RingVerifierKey<S>, Error> {
        let pks = TEMapping::to_te_slice(&pks[..pks.len().min(self.max_ring_size())]);
        Ok(piop::index(&self.pcs, &self.piop, &pks)?.1)
    }

    /// The ring root for the given keys: the fixed-size commitment verifiers
    /// retain instead of the key list.
    pub fn ring_root(&self, pks: &[AffinePoint<S>]) -> Result<RingCommitment<S>, Error> {
        Ok(self.verifier_key(pks)?.commitment())
    }

    /// Verifier key straight from a ring root, without the key list.
    pub fn verifier_key_from_commitment(
        &self,
        commitment: RingCommitment<S>,
    ) -> RingVerifierKey<S> {
        RingVerifierKey::<S>::from_commitment_and_kzg_vk(commitment, self.pcs.raw_vk())
    }

    /// Verifier handle for a verifier key.
    pub fn verifier(&self, verifier_key: RingVerifierKey<S>) -> RingVerifier<S> {
        RingVerifier::<S>::init(
            verifier_key,
            self.piop.clone(),
            Transcript::new(S::SUITE_ID),
        )
    }

    /// Verifier handle without the full parameters at hand; derives the
    /// domain layout from `ring_size` on the fly.
    pub fn verifier_no_context(
        verifier_key: RingVerifierKey<S>,
        ring_size: usize,
    ) -> Result<RingVerifier<S>, Error> {
        Ok(RingVerifier::<S>::init(
            verifier_key,
            piop_params::<S>(piop_domain_size::<S>(ring_size))?,
            Transcript::new(S::SUITE_ID),
        ))
    }

    /// Lagrangian SRS slice for incremental ring building.
    pub fn ring_builder_key(&self) -> Result<RingBuilderKey<S>, Error> {
        RingBuilderKey::<S>::from_srs(&self.pcs, self.piop.domain.size())
    }

    /// The padding point: stands in for any unused ring slot.
    #[inline(always)]
    pub const fn padding_point() -> AffinePoint<S> {
        S::PADDING
    }
}

impl<S: RingSuite> CanonicalSerialize for RingProofParams<S> {
    fn serialize_with_mode<W: ark_serialize::Write>(
        &self,
        mut writer: W,
        compress: ark_serialize::Compress,
    ) -> Result<(), ark_serialize::SerializationError> {
        self.pcs.serialize_with_mode(&mut writer, compress)
    }

    fn serialized_size(&self, compress: ark_serialize::Compress) -> usize {
        self.pcs.serialized_size(compress)
    }
}

impl<S: RingSuite> CanonicalDeserialize for RingProofParams<S> {
    fn deserialize_with_mode<R: ark_serialize::Read>(
        mut reader: R,
        compress: ark_serialize::Compress,
        validate: ark_serialize::Validate,
    ) -> Result<Self, ark_serialize::SerializationError> {
        let pcs_params = <PcsParams<S> as CanonicalDeserialize>::deserialize_with_mode(
            &mut reader,
            compress,
            validate,
        )?;
        let piop_domain_size = piop_domain_size_from_pcs_domain_size(pcs_params.powers_in_g1.len());
        let piop = piop_params::<S>(piop_domain_size)
            .map_err(|_| ark_serialize::SerializationError::InvalidData)?;
        Ok(Self {
            pcs: pcs_params,
            piop,
        })
    }
}

impl<S: RingSuite> ark_serialize::Valid for RingProofParams<S> {
    fn check(&self) -> Result<(), ark_serialize::SerializationError> {
        self.pcs.check()
    }
}

/// Domain size bookkeeping.
///
/// Three related sizes:
/// 1. `ring_size`: keys the caller wants to fit;
/// 2. `piop_domain_size`: the power-of-two column length,
///    `(ring_size + overhead).next_power_of_two()` with
///    `overhead = scalar bits + idle rows`;
/// 3. `pcs_domain_size = 3·piop_domain_size + 1`: G1 powers the prover
///    needs (the aggregated constraint has degree slightly under `4N`, so
///    the quotient stays under `3N`).
///
/// Power-of-two rounding means many ring sizes share one domain; e.g. with
/// a 253-bit scalar every ring size up to 255 lands on `N = 512`.
pub mod dom_utils {
    use super::*;

    /// Overhead rows: the blinding bit trace plus the idle tail.
    pub const fn piop_overhead<S: Suite>() -> usize {
        domain::IDLE_ROWS + ScalarField::<S>::MODULUS_BIT_SIZE as usize
    }

    /// Smallest power-of-two domain fitting `min_ring_size` keys.
    pub const fn piop_domain_size<S: Suite>(min_ring_size: usize) -> usize {
        (min_ring_size + piop_overhead::<S>()).next_power_of_two()
    }

    /// Largest ring a given domain fits.
    pub const fn max_ring_size_from_piop_domain_size<S: Suite>(piop_domain_size: usize) -> usize {
        piop_domain_size - piop_overhead::<S>()
    }

    /// Actual key capacity bought by asking for `min_ring_size`.
    pub const fn max_ring_size<S: Suite>(min_ring_size: usize) -> usize {
        max_ring_size_from_piop_domain_size::<S>(piop_domain_size::<S>(min_ring_size))
    }

    /// G1 powers needed for `min_ring_size` keys.
    pub const fn pcs_domain_size<S: Suite>(min_ring_size: usize) -> usize {
        pcs_domain_size_from_piop_domain_size(piop_domain_size::<S>(min_ring_size))
    }

    /// `3·piop_domain_size + 1`.
    pub const fn pcs_domain_size_from_piop_domain_size(piop_domain_size: usize) -> usize {
        3 * piop_domain_size + 1
    }

    /// Largest power-of-two domain a given setup length covers.
    pub const fn piop_domain_size_from_pcs_domain_size(pcs_domain_size: usize) -> usize {
        1 << ((pcs_domain_size - 1) / 3).ilog2()
    }

    /// Largest ring a given setup length covers.
    pub const fn max_ring_size_from_pcs_domain_size<S: Suite>(pcs_domain_size: usize) -> usize {
        max_ring_size_from_piop_domain_size::<S>(piop_domain_size_from_pcs_domain_size(
            pcs_domain_size,
        ))
    }
}
pub use dom_utils::*;

/// Type aliases for the given ring suite.
#[macro_export]
macro_rules! ring_suite_types {
    ($suite:ident) => {
        #[allow(dead_code)]
        pub type PcsParams = $crate::ring::PcsParams<$suite>;
        #[allow(dead_code)]
        pub type PiopParams = $crate::ring::PiopParams<$suite>;
        #[allow(dead_code)]
        pub type RingProofParams = $crate::ring::RingProofParams<$suite>;
        #[allow(dead_code)]
        pub type RingProverKey = $crate::ring::RingProverKey<$suite>;
        #[allow(dead_code)]
        pub type RingVerifierKey = $crate::ring::RingVerifierKey<$suite>;
        #[allow(dead_code)]
        pub type RingCommitment = $crate::ring::RingCommitment<$suite>;
        #[allow(dead_code)]
        pub type RingProver = $crate::ring::RingProver<$suite>;
        #[allow(dead_code)]
        pub type RingVerifier = $crate::ring::RingVerifier<$suite>;
        #[allow(dead_code)]
        pub type RingProof = $crate::ring::Proof<$suite>;
        #[allow(dead_code)]
        pub type RingBuilder = $crate::ring::RingBuilder<$suite>;
        #[allow(dead_code)]
        pub type RingBuilderKey = $crate::ring::RingBuilderKey<$suite>;
    };
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::testing::{self as common, CheckPoint, TEST_SEED};

    pub const TEST_RING_SIZE: usize = 8;

    pub fn prove_verify<S: RingSuite>()
    where
        BaseField<S>: ark_ff::PrimeField,
    {
        let rng = &mut ark_std::test_rng();
        let params = RingProofParams::<S>::from_rand(TEST_RING_SIZE, rng).unwrap();

        let secret = Secret::<S>::from_seed(TEST_SEED);
        let public = secret.public();
        let input = Input::from(common::random_val(Some(rng)));
        let output = secret.output(input);

        let mut pks = common::random_vec::<AffinePoint<S>>(TEST_RING_SIZE, Some(rng));
        let prover_idx = 3;
        pks[prover_idx] = public.0;
        assert_eq!(
            RingProofParams::<S>::key_index(&pks, &public.0).unwrap(),
            prover_idx
        );

        let prover_key = params.prover_key(&pks).unwrap();
        let prover = params.prover(prover_key, prover_idx);
        let proof = secret.prove(input, output, b"foo", &prover).unwrap();

        let verifier_key = params.verifier_key(&pks).unwrap();
        let verifier = params.verifier(verifier_key);
        assert!(Public::verify(input, output, b"foo", &proof, &verifier).is_ok());

        // Tampering with any public input must be rejected.
        assert!(Public::verify(input, output, b"bar", &proof, &verifier).is_err());
        let other_input = Input::<S>::from(common::random_val(Some(rng)));
        assert!(Public::verify(other_input, output, b"foo", &proof, &verifier).is_err());

        // A ring differing in one key must be rejected.
        let mut other_pks = pks.clone();
        other_pks[0] = common::random_val(Some(rng));
        let other_vk = params.verifier_key(&other_pks).unwrap();
        let other_verifier = params.verifier(other_vk);
        assert!(Public::verify(input, output, b"foo", &proof, &other_verifier).is_err());

        // A key outside the ring can't be proven from.
        let outsider = Secret::<S>::from_seed(b"outsider");
        assert_eq!(
            RingProofParams::<S>::key_index(&pks, &outsider.public().0),
            Err(Error::KeyNotInRing)
        );
    }

    pub fn proof_is_bit_fragile<S: RingSuite>()
    where
        BaseField<S>: ark_ff::PrimeField,
    {
        let rng = &mut ark_std::test_rng();
        let params = RingProofParams::<S>::from_rand(TEST_RING_SIZE, rng).unwrap();

        let secret = Secret::<S>::from_seed(TEST_SEED);
        let input = Input::from(common::random_val(Some(rng)));
        let output = secret.output(input);

        let mut pks = common::random_vec::<AffinePoint<S>>(TEST_RING_SIZE, Some(rng));
        pks[2] = secret.public().0;

        let prover = params.prover(params.prover_key(&pks).unwrap(), 2);
        let proof = secret.prove(input, output, b"foo", &prover).unwrap();
        let verifier = params.verifier(params.verifier_key(&pks).unwrap());

        let mut buf = Vec::new();
        proof.serialize_compressed(&mut buf).unwrap();

        // Flip one bit somewhere in the middle and reparse: either the
        // encoding breaks or the proof is rejected.
        let pos = buf.len() / 2;
        buf[pos] ^= 0x01;
        match Proof::<S>::deserialize_compressed(&mut &buf[..]) {
            Ok(bad) => {
                assert!(Public::verify(input, output, b"foo", &bad, &verifier).is_err())
            }
            Err(_) => (),
        }
    }

    pub fn ring_root_is_deterministic_and_updatable<S: RingSuite>()
    where
        BaseField<S>: ark_ff::PrimeField,
    {
        let rng = &mut ark_std::test_rng();
        let params = RingProofParams::<S>::from_rand(TEST_RING_SIZE, rng).unwrap();
        let pks = common::random_vec::<AffinePoint<S>>(TEST_RING_SIZE, Some(rng));

        // Monomial path.
        let root = params.verifier_key(&pks).unwrap().commitment();
        let root_again = params.verifier_key(&pks).unwrap().commitment();
        assert_eq!(root, root_again);

        // Lagrangian path, built in one shot and incrementally.
        let builder_key = params.ring_builder_key().unwrap();
        let te_pks = TEMapping::to_te_slice(&pks);
        let one_shot = RingBuilder::<S>::with_keys(&params.piop, &te_pks, &builder_key).unwrap();
        assert_eq!(RingCommitment::<S>::from_ring(&one_shot), root);

        let mut incremental = RingBuilder::<S>::empty(&params.piop, &builder_key).unwrap();
        assert_eq!(incremental.slots_left(), params.max_ring_size());
        incremental.append(&te_pks[..3], &builder_key).unwrap();
        incremental.append(&te_pks[3..], &builder_key).unwrap();
        assert_eq!(RingCommitment::<S>::from_ring(&incremental), root);

        // A verifier key rebuilt from the root alone is fully functional.
        let secret = Secret::<S>::from_seed(TEST_SEED);
        let mut pks = pks;
        pks[0] = secret.public().0;
        let root = params.verifier_key(&pks).unwrap().commitment();
        let vk = params.verifier_key_from_commitment(root);
        let input = Input::<S>::from(common::random_val(Some(rng)));
        let output = secret.output(input);
        let prover = params.prover(params.prover_key(&pks).unwrap(), 0);
        let proof = secret.prove(input, output, b"", &prover).unwrap();
        let verifier = params.verifier(vk);
        assert!(Public::verify(input, output, b"", &proof, &verifier).is_ok());
    }

    pub fn padding_check<S: RingSuite>()
    where
        AffinePoint<S>: CheckPoint,
    {
        assert_eq!(S::PADDING, S::data_to_point(PADDING_SEED).unwrap());
        assert!(S::PADDING.check(true).is_ok());
    }

    pub fn accumulator_base_check<S: RingSuite>()
    where
        AffinePoint<S>: CheckPoint,
    {
        assert_eq!(
            S::ACCUMULATOR_BASE,
            S::data_to_point(ACCUMULATOR_BASE_SEED).unwrap()
        );
        assert!(S::ACCUMULATOR_BASE.check(true).is_ok());
    }

    pub fn domain_size_conversions<S: RingSuite>() {
        let overhead = piop_overhead::<S>();

        for ring_size in [1, 10, 200, 300, 500, 1000, 2000, 10000] {
            let piop_dom_size = piop_domain_size::<S>(ring_size);
            let pcs_dom_size = pcs_domain_size::<S>(ring_size);
            let max_ring_size = max_ring_size_from_piop_domain_size::<S>(piop_dom_size);

            assert!(piop_dom_size.is_power_of_two());
            assert_eq!(pcs_dom_size, 3 * piop_dom_size + 1);
            assert!(piop_dom_size >= ring_size + overhead);
            assert!(piop_dom_size / 2 < ring_size + overhead);
            assert!(ring_size <= max_ring_size);
            assert_eq!(piop_dom_size, piop_domain_size::<S>(max_ring_size));
            assert_eq!(dom_utils::max_ring_size::<S>(ring_size), max_ring_size);

            let piop_dom_rt = piop_domain_size_from_pcs_domain_size(pcs_dom_size);
            assert_eq!(piop_dom_size, piop_dom_rt);
            assert_eq!(
                max_ring_size,
                max_ring_size_from_pcs_domain_size::<S>(pcs_dom_size)
            );

            assert!(piop_domain_size::<S>(max_ring_size + 1) > piop_dom_size);
        }
    }

    #[macro_export]
    macro_rules! ring_suite_tests {
        ($suite:ty) => {
            mod ring {
                use super::*;

                #[test]
                fn prove_verify() {
                    $crate::ring::testing::prove_verify::<$suite>()
                }

                #[test]
                fn proof_is_bit_fragile() {
                    $crate::ring::testing::proof_is_bit_fragile::<$suite>()
                }

                #[test]
                fn ring_root_is_deterministic_and_updatable() {
                    $crate::ring::testing::ring_root_is_deterministic_and_updatable::<$suite>()
                }

                #[test]
                fn padding_check() {
                    $crate::ring::testing::padding_check::<$suite>()
                }

                #[test]
                fn accumulator_base_check() {
                    $crate::ring::testing::accumulator_base_check::<$suite>()
                }

                #[test]
                fn domain_size_conversions() {
                    $crate::ring::testing::domain_size_conversions::<$suite>()
                }
            }
        };
    }
}
