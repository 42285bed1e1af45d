//! # IETF VRF
//!
//! The ECVRF scheme of [RFC 9381](https://datatracker.ietf.org/doc/rfc9381),
//! extended so that arbitrary additional data can be bound into the
//! challenge.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ec_vrfs::ietf::{Prover, Verifier};
//!
//! let secret = Secret::<MySuite>::from_seed(b"seed");
//! let input = Input::new(b"data").unwrap();
//! let output = secret.output(input);
//!
//! let proof = secret.prove(input, output, b"aux");
//! assert!(secret.public().verify(input, output, b"aux", &proof).is_ok());
//! ```

use super::*;
use ark_ec::VariableBaseMSM;

pub trait IetfSuite: Suite {}

impl<T> IetfSuite for T where T: Suite {}

/// IETF VRF proof: a Schnorr-style pair.
///
/// - `c`: challenge scalar, truncated to the suite challenge length on the
///   wire;
/// - `s`: response scalar satisfying `s = k + c·sk`.
#[derive(Debug, Clone)]
pub struct Proof<S: IetfSuite> {
    pub c: ScalarField<S>,
    pub s: ScalarField<S>,
}

impl<S: IetfSuite> CanonicalSerialize for Proof<S> {
    fn serialize_with_mode<W: ark_serialize::Write>(
        &self,
        mut writer: W,
        compress: ark_serialize::Compress,
    ) -> Result<(), ark_serialize::SerializationError> {
        let c_buf = codec::scalar_encode::<S>(&self.c);
        if c_buf.len() < S::CHALLENGE_LEN {
            return Err(ark_serialize::SerializationError::NotEnoughSpace);
        }
        // The challenge is shortened to CHALLENGE_LEN significant bytes.
        let buf = if S::Codec::BIG_ENDIAN {
            &c_buf[c_buf.len() - S::CHALLENGE_LEN..]
        } else {
            &c_buf[..S::CHALLENGE_LEN]
        };
        writer.write_all(buf)?;
        self.s.serialize_with_mode(&mut writer, compress)?;
        Ok(())
    }

    fn serialized_size(&self, _compress: ark_serialize::Compress) -> usize {
        S::CHALLENGE_LEN + self.s.compressed_size()
    }
}

impl<S: IetfSuite> CanonicalDeserialize for Proof<S> {
    fn deserialize_with_mode<R: ark_serialize::Read>(
        mut reader: R,
        compress: ark_serialize::Compress,
        validate: ark_serialize::Validate,
    ) -> Result<Self, ark_serialize::SerializationError> {
        let mut c_buf = ark_std::vec![0; S::CHALLENGE_LEN];
        if reader.read_exact(&mut c_buf[..]).is_err() {
            return Err(ark_serialize::SerializationError::InvalidData);
        }
        let c = S::Codec::scalar_decode(&c_buf);
        let s = <ScalarField<S> as CanonicalDeserialize>::deserialize_with_mode(
            &mut reader,
            compress,
            validate,
        )?;
        Ok(Proof { c, s })
    }
}

impl<S: IetfSuite> ark_serialize::Valid for Proof<S> {
    fn check(&self) -> Result<(), ark_serialize::SerializationError> {
        self.c.check()?;
        self.s.check()?;
        Ok(())
    }
}

/// IETF VRF proof generation.
pub trait Prover<S: IetfSuite> {
    /// Prove that `output` is the evaluation over `input` under this key,
    /// binding `ad` into the challenge.
    fn prove(&self, input: Input<S>, output: Output<S>, ad: impl AsRef<[u8]>) -> Proof<S>;
}

/// IETF VRF proof verification.
pub trait Verifier<S: IetfSuite> {
    /// Check `proof` for the `(input, output, ad)` triple against this
    /// public key.
    fn verify(
        &self,
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        proof: &Proof<S>,
    ) -> Result<(), Error>;
}

impl<S: IetfSuite> Prover<S> for Secret<S> {
    /// RFC 9381 section 5.1 proving procedure:
    ///
    /// 1. deterministic nonce `k` from the secret and the input;
    /// 2. nonce commitments `k·G` and `k·H`;
    /// 3. challenge over the public points, the commitments and `ad`;
    /// 4. response `s = k + c·sk`.
    fn prove(&self, input: Input<S>, output: Output<S>, ad: impl AsRef<[u8]>) -> Proof<S> {
        let k = S::nonce(&self.scalar, input);

        let k_b = utils::mul_secret::<S>(S::generator(), k).into_affine();
        let k_h = utils::mul_secret::<S>(input.0, k).into_affine();

        let c = S::challenge(
            &[&self.public.0, &input.0, &output.0, &k_b, &k_h],
            ad.as_ref(),
        );
        let s = k + c * self.scalar;
        Proof { c, s }
    }
}

impl<S: IetfSuite> Verifier<S> for Public<S> {
    /// RFC 9381 section 5.3 verification procedure:
    ///
    /// 1. `U = s·G − c·Y`, `V = s·H − c·gamma`, each computed as one
    ///    simultaneous double-scalar multiplication;
    /// 2. accept iff the recomputed challenge matches the proof's.
    fn verify(
        &self,
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        proof: &Proof<S>,
    ) -> Result<(), Error> {
        type Prj<S> = <AffinePoint<S> as AffineRepr>::Group;
        let Proof { c, s } = proof;

        let u = Prj::<S>::msm_unchecked(&[S::generator(), self.0], &[*s, -*c]).into_affine();
        let v = Prj::<S>::msm_unchecked(&[input.0, output.0], &[*s, -*c]).into_affine();

        let c_exp = S::challenge(&[&self.0, &input.0, &output.0, &u, &v], ad.as_ref());
        (&c_exp == c).then_some(()).ok_or(Error::InvalidProof)
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use crate::testing as common;

    pub fn prove_verify<S: IetfSuite>() {
        let secret = Secret::<S>::from_seed(common::TEST_SEED);
        let public = secret.public();
        let input = Input::from(common::random_val(None));
        let output = secret.output(input);

        let proof = secret.prove(input, output, b"foo");
        assert!(public.verify(input, output, b"foo", &proof).is_ok());

        // Challenge binding: any public input change must be rejected.
        assert!(public.verify(input, output, b"bar", &proof).is_err());
        let other = Input::from(common::random_val(None));
        assert!(public.verify(other, output, b"foo", &proof).is_err());
    }

    pub fn proof_encoding<S: IetfSuite>() {
        let secret = Secret::<S>::from_seed(common::TEST_SEED);
        let public = secret.public();
        let input = Input::from(common::random_val(None));
        let output = secret.output(input);
        let proof = secret.prove(input, output, b"foo");

        let mut buf = Vec::new();
        proof.serialize_compressed(&mut buf).unwrap();
        assert_eq!(buf.len(), proof.compressed_size());

        let proof2 = Proof::<S>::deserialize_compressed(&mut &buf[..]).unwrap();
        assert!(public.verify(input, output, b"foo", &proof2).is_ok());
    }

    #[macro_export]
    macro_rules! ietf_suite_tests {
        ($suite:ty) => {
            mod ietf {
                use super::*;

                #[test]
                fn prove_verify() {
                    $crate::ietf::testing::prove_verify::<$suite>();
                }

                #[test]
                fn proof_encoding() {
                    $crate::ietf::testing::proof_encoding::<$suite>();
                }
            }
        };
    }
}
