//! Suite used by the crate's own tests.

use crate::{pedersen::PedersenSuite, *};
use ark_ff::MontFp;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TestSuite;

impl Suite for TestSuite {
    const SUITE_ID: &'static [u8] = b"ec-vrfs-testing";
    const CHALLENGE_LEN: usize = 16;

    type Affine = ark_ed25519::EdwardsAffine;
    type Hasher = sha2::Sha256;
    type Codec = codec::ArkworksCodec;
}

impl PedersenSuite for TestSuite {
    const BLINDING_BASE: AffinePoint = {
        const X: BaseField =
            MontFp!("2842812182132742151291439804105987992770071362848070020835328675429531065386");
        const Y: BaseField = MontFp!(
            "51537589290258453714586392305999864217349499404270029291993413345863140891436"
        );
        AffinePoint::new_unchecked(X, Y)
    };
}

suite_types!(TestSuite);
pedersen_suite_types!(TestSuite);

/// Same curve and hash, different suite identifier: exists to check that
/// proofs never survive a suite swap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TestSuiteAlt;

impl Suite for TestSuiteAlt {
    const SUITE_ID: &'static [u8] = b"ec-vrfs-testing-alt";
    const CHALLENGE_LEN: usize = 16;

    type Affine = ark_ed25519::EdwardsAffine;
    type Hasher = sha2::Sha256;
    type Codec = codec::ArkworksCodec;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{random_val, TEST_SEED};
    use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

    codec_suite_tests!(TestSuite);
    ietf_suite_tests!(TestSuite);

    // The Pedersen battery minus the base provenance check: this suite's
    // blinding base is just a fixed subgroup point, not seed-derived.
    mod pedersen {
        use super::*;

        #[test]
        fn prove_verify() {
            crate::pedersen::testing::prove_verify::<TestSuite>();
        }

        #[test]
        fn repeated_prove_is_stable() {
            crate::pedersen::testing::repeated_prove_is_stable::<TestSuite>();
        }
    }

    /// A proof produced under one suite must fail under another, even with
    /// identical curve, hash and key material.
    #[test]
    fn cross_suite_rejection() {
        use crate::ietf::{Prover, Verifier};

        let secret = Secret::from_seed(TEST_SEED);
        let pt: AffinePoint = random_val(None);
        let input = Input::from(pt);
        let output = secret.output(input);
        let proof = secret.prove(input, output, b"ad");

        let mut buf = Vec::new();
        proof.serialize_compressed(&mut buf).unwrap();

        // Re-interpret every component under the alternative suite.
        let alt_proof =
            crate::ietf::Proof::<TestSuiteAlt>::deserialize_compressed(&mut &buf[..]).unwrap();
        let alt_public = crate::Public::<TestSuiteAlt>::from(secret.public().0);
        let alt_input = crate::Input::<TestSuiteAlt>::from(pt);
        let alt_output = crate::Output::<TestSuiteAlt>::from(output.0);

        assert!(alt_public
            .verify(alt_input, alt_output, b"ad", &alt_proof)
            .is_err());
    }
}
