//! # Pedersen VRF
//!
//! Key-hiding VRF ([BCHSV23](https://eprint.iacr.org/2023/002)): instead of
//! the public key, the proof carries a Pedersen commitment `pk_com = sk·G +
//! b·B` to it, together with a proof of knowledge that the same `sk` produced
//! the VRF output. Verification never learns which key signed.
//!
//! The blinding factor is derived deterministically from the secret, the
//! input and the additional data, so proving stays a pure function of its
//! arguments. Anyone knowing the blinding can still link the commitment to a
//! specific key:
//!
//! ```rust,ignore
//! let (proof, blinding) = secret.prove(input, output, ad);
//! let unblinded = (proof.key_commitment() - MySuite::BLINDING_BASE * blinding).into_affine();
//! assert_eq!(public.0, unblinded);
//! ```

use crate::ietf::IetfSuite;
use crate::*;
use ark_ec::VariableBaseMSM;

/// Generation seed for [`PedersenSuite::BLINDING_BASE`] of the built-in suites.
///
/// (en) *"the blinding foundation of hidden light which eludes the mind and creates darkness for those who see"*
pub const PEDERSEN_BASE_SEED: &[u8] =
    b"basis caecans lucis occultae quae mentem fugit et tenebras iis qui vident creat";

pub trait PedersenSuite: IetfSuite {
    /// Second generator `B`, independent from `G` (unknown mutual discrete
    /// log). Derived by hashing [`PEDERSEN_BASE_SEED`] to the curve.
    const BLINDING_BASE: AffinePoint<Self>;

    /// Blinding factor derivation.
    ///
    /// Deterministic, loosely shaped after the RFC 9381 challenge procedure.
    /// Every parameter except `secret` is public.
    fn blinding(
        secret: &ScalarField<Self>,
        input: &AffinePoint<Self>,
        ad: &[u8],
    ) -> ScalarField<Self> {
        const DOM_SEP_START: u8 = 0xCC;
        const DOM_SEP_END: u8 = 0x00;
        let mut buf = [Self::SUITE_ID, &[DOM_SEP_START]].concat();
        Self::Codec::scalar_encode_into(secret, &mut buf);
        Self::Codec::point_encode_into(input, &mut buf);
        buf.extend_from_slice(ad);
        buf.push(DOM_SEP_END);
        let hash = &utils::hash::<Self::Hasher>(&buf);
        ScalarField::<Self>::from_be_bytes_mod_order(hash)
    }
}

/// Pedersen VRF proof.
///
/// - `pk_com`: key commitment `sk·G + b·B`;
/// - `r`: nonce commitment `k·G + kb·B`;
/// - `ok`: nonce commitment `k·H` over the input point;
/// - `s`, `sb`: responses for the secret and the blinding respectively.
#[derive(Debug, Clone, PartialEq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof<S: PedersenSuite> {
    pk_com: AffinePoint<S>,
    r: AffinePoint<S>,
    ok: AffinePoint<S>,
    s: ScalarField<S>,
    sb: ScalarField<S>,
}

impl<S: PedersenSuite> Proof<S> {
    /// Public key commitment carried by the proof.
    pub fn key_commitment(&self) -> AffinePoint<S> {
        self.pk_com
    }
}

/// Pedersen VRF proof generation.
pub trait Prover<S: PedersenSuite> {
    /// Prove that `output` is the evaluation over `input` under the key
    /// committed to in the proof, binding `ad` into the challenge.
    ///
    /// Returns the proof together with the blinding factor used for the key
    /// commitment; the ring layer consumes the latter.
    fn prove(
        &self,
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
    ) -> (Proof<S>, ScalarField<S>);
}

/// Pedersen VRF proof verification.
pub trait Verifier<S: PedersenSuite> {
    /// Check `proof` for the `(input, output, ad)` triple against the key
    /// commitment embedded in the proof itself.
    fn verify(
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        proof: &Proof<S>,
    ) -> Result<(), Error>;
}

impl<S: PedersenSuite> Prover<S> for Secret<S> {
    fn prove(
        &self,
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
    ) -> (Proof<S>, ScalarField<S>) {
        let blinding = S::blinding(&self.scalar, &input.0, ad.as_ref());

        // Nonces for the secret and the blinding.
        let k = S::nonce(&self.scalar, input);
        let kb = S::nonce(&blinding, input);

        // pk_com = sk*G + b*B
        let sk_g = utils::mul_secret::<S>(S::generator(), self.scalar);
        let b_b = utils::mul_secret::<S>(S::BLINDING_BASE, blinding);
        let pk_com = (sk_g + b_b).into_affine();

        // R = k*G + kb*B
        let k_g = utils::mul_secret::<S>(S::generator(), k);
        let kb_b = utils::mul_secret::<S>(S::BLINDING_BASE, kb);
        let r = (k_g + kb_b).into_affine();

        // Ok = k*H
        let ok = utils::mul_secret::<S>(input.0, k).into_affine();

        // c = Hash(pk_com, H, gamma, R, Ok, ad)
        let c = S::challenge(&[&pk_com, &input.0, &output.0, &r, &ok], ad.as_ref());

        let s = k + c * self.scalar;
        let sb = kb + c * blinding;

        let proof = Proof {
            pk_com,
            r,
            ok,
            s,
            sb,
        };
        (proof, blinding)
    }
}

impl<S: PedersenSuite> Verifier<S> for Public<S> {
    fn verify(
        input: Input<S>,
        output: Output<S>,
        ad: impl AsRef<[u8]>,
        proof: &Proof<S>,
    ) -> Result<(), Error> {
        type Prj<S> = <AffinePoint<S> as AffineRepr>::Group;
        let Proof {
            pk_com,
            r,
            ok,
            s,
            sb,
        } = proof;

        // c = Hash(pk_com, H, gamma, R, Ok, ad)
        let c = S::challenge(&[pk_com, &input.0, &output.0, r, ok], ad.as_ref());

        // s*H - c*gamma == Ok
        let got = Prj::<S>::msm_unchecked(&[input.0, output.0], &[*s, -c]);
        if got != ok.into_group() {
            return Err(Error::InvalidProof);
        }

        // s*G + sb*B - c*pk_com == R
        let got =
            Prj::<S>::msm_unchecked(&[S::generator(), S::BLINDING_BASE, *pk_com], &[*s, *sb, -c]);
        if got != r.into_group() {
            return Err(Error::InvalidProof);
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::testing::{self as common, CheckPoint, TEST_SEED};

    pub fn prove_verify<S: PedersenSuite>() {
        let secret = Secret::<S>::from_seed(TEST_SEED);
        let input = Input::from(common::random_val(None));
        let output = secret.output(input);

        let (proof, blinding) = secret.prove(input, output, b"foo");
        assert!(Public::verify(input, output, b"foo", &proof).is_ok());

        // The commitment opens to the actual public key.
        assert_eq!(
            proof.key_commitment(),
            (secret.public().0 + S::BLINDING_BASE * blinding).into()
        );

        // Tampered transcript inputs are rejected.
        assert!(Public::<S>::verify(input, output, b"bar", &proof).is_err());
    }

    pub fn repeated_prove_is_stable<S: PedersenSuite>()
    where
        Proof<S>: core::fmt::Debug + PartialEq,
        Output<S>: core::fmt::Debug + PartialEq,
    {
        let secret = Secret::<S>::from_seed(TEST_SEED);
        let input = Input::from(common::random_val(None));
        let output = secret.output(input);

        // Blinding is deterministic: same inputs, same proof, same gamma.
        let (p1, b1) = secret.prove(input, output, b"foo");
        let (p2, b2) = secret.prove(input, output, b"foo");
        assert_eq!(b1, b2);
        assert_eq!(p1, p2);
        assert!(Public::verify(input, output, b"foo", &p1).is_ok());
        assert!(Public::verify(input, output, b"foo", &p2).is_ok());

        // Different ad re-blinds the key commitment, gamma is unaffected.
        let (p3, _) = secret.prove(input, output, b"baz");
        assert_ne!(p1.key_commitment(), p3.key_commitment());
        assert_eq!(secret.output(input), output);
    }

    pub fn blinding_base_check<S: PedersenSuite>()
    where
        AffinePoint<S>: CheckPoint,
    {
        // The base must come out of the published generation seed.
        assert_eq!(
            S::BLINDING_BASE,
            S::data_to_point(PEDERSEN_BASE_SEED).unwrap()
        );
        assert!(S::BLINDING_BASE.check(true).is_ok());
    }

    #[macro_export]
    macro_rules! pedersen_suite_tests {
        ($suite:ty) => {
            mod pedersen {
                use super::*;

                #[test]
                fn prove_verify() {
                    $crate::pedersen::testing::prove_verify::<$suite>();
                }

                #[test]
                fn repeated_prove_is_stable() {
                    $crate::pedersen::testing::repeated_prove_is_stable::<$suite>();
                }

                #[test]
                fn blinding_base_check() {
                    $crate::pedersen::testing::blinding_base_check::<$suite>();
                }
            }
        };
    }
}
