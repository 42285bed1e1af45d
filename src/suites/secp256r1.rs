//! `ECVRF P-256 SHA-256 TAI` suite.
//!
//! Configuration (RFC-9381):
//!
//! *  `suite_string` = [0x01].
//!
//! *  The EC group G is the NIST P-256 elliptic curve, with the finite
//!    field and curve parameters as specified in Section 3.2.1.3 of
//!    [SP-800-186](https://csrc.nist.gov/pubs/sp/800/186/final) and
//!    Section 2.6 of [RFC-5114](https://www.rfc-editor.org/rfc/rfc5114).
//!    For this group, `fLen = qLen = 32` and `cofactor = 1`.
//!
//! *  `cLen` = 16.
//!
//! *  The key pair generation primitive is specified in Section 3.2.1 of
//!    SECG1. In this ciphersuite, the secret scalar x is equal to the
//!    secret key SK.
//!
//! *  The ECVRF_nonce_generation function is as specified in
//!    Section 5.4.2.1 (RFC-6979 based).
//!
//! *  The int_to_string function is the I2OSP function specified in
//!    Section 4.1 of RFC-8017 (big-endian representation).
//!
//! *  The point_to_string function converts a point on E to an octet
//!    string according to the encoding specified in Section 2.3.3 of
//!    SECG1 with point compression on. This implies `ptLen = fLen + 1 = 33`.
//!
//! *  The string_to_point function converts an octet string to a point
//!    on E according to the encoding specified in Section 2.3.4 of
//!    SECG1. This function MUST output "INVALID" if the octet string
//!    does not decode to a point on the curve E.
//!
//! *  The hash function Hash is SHA-256 as specified in RFC-6234, with
//!    hLen = 32.
//!
//! *  The ECVRF_encode_to_curve function is as specified in
//!    Section 5.4.1.1, with `interpret_hash_value_as_a_point(s) =
//!    string_to_point(0x02 || s)`.

use crate::{pedersen::PedersenSuite, *};
use ark_ff::MontFp;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Secp256r1Sha256Tai;

type ThisSuite = Secp256r1Sha256Tai;

suite_types!(ThisSuite);
pedersen_suite_types!(ThisSuite);

impl Suite for ThisSuite {
    const SUITE_ID: &'static [u8] = &[0x01];
    const CHALLENGE_LEN: usize = 16;

    type Affine = ark_secp256r1::Affine;
    type Hasher = sha2::Sha256;
    type Codec = codec::Sec1Codec;

    fn nonce(sk: &ScalarField, pt: Input) -> ScalarField {
        utils::nonce_rfc_6979::<Self>(sk, &pt.0)
    }
}

impl PedersenSuite for ThisSuite {
    const BLINDING_BASE: AffinePoint = {
        const X: BaseField = MontFp!(
            "55516455597544811540149985232155473070193196202193483189274003004283034832642"
        );
        const Y: BaseField = MontFp!(
            "48580550536742846740990228707183741745344724157532839324866819111997786854582"
        );
        AffinePoint::new_unchecked(X, Y)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ietf::{Prover, Verifier};
    use ark_ff::PrimeField;

    ietf_suite_tests!(ThisSuite);
    pedersen_suite_tests!(ThisSuite);
    codec_suite_tests!(ThisSuite);

    /// RFC 9381 appendix B.1, example 10 (ECVRF-P256-SHA256-TAI).
    #[test]
    fn rfc_9381_vector_p256_tai() {
        let sk_bytes =
            hex::decode("c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721")
                .unwrap();
        let secret = Secret::from_scalar(ScalarField::from_be_bytes_mod_order(&sk_bytes));

        let pk_bytes = crate::codec::point_encode::<ThisSuite>(&secret.public().0);
        assert_eq!(
            hex::encode(&pk_bytes),
            "0360fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6"
        );

        // H = encode_to_curve(salt || alpha), salt defaulting to the
        // encoded public key.
        let alpha = b"sample";
        let data = [&pk_bytes[..], alpha].concat();
        let h = ThisSuite::data_to_point(&data).unwrap();
        assert_eq!(
            hex::encode(crate::codec::point_encode::<ThisSuite>(&h)),
            "0272a877532e9ac193aff4401234266f59900a4a9e3fc3cfc6a4b7e467a15d06d4"
        );

        let input = Input::from(h);
        let output = secret.output(input);
        assert_eq!(
            hex::encode(crate::codec::point_encode::<ThisSuite>(&output.0)),
            "035b5c726e8c0e2c488a107c600578ee75cb702343c153cb1eb8dec77f4b5071b4"
        );

        let proof = secret.prove(input, output, b"");
        assert!(secret.public().verify(input, output, b"", &proof).is_ok());

        let mut pi = crate::codec::point_encode::<ThisSuite>(&output.0);
        proof.serialize_compressed(&mut pi).unwrap();
        assert_eq!(
            hex::encode(&pi),
            concat!(
                "035b5c726e8c0e2c488a107c600578ee75cb702343c153cb1eb8dec77f4b5071b4",
                "a53f0a46f018bc2c56e58d383f2305e0",
                "975972c26feea0eb122fe7893c15af376b33edf7de17c6ea056d4d82de6bc02f"
            )
        );

        assert_eq!(
            hex::encode(output.hash()),
            "a3ad7b0ef73d8fc6655053ea22f9bede8c743f08bbed3d38821f0e16474b505e"
        );
    }
}
