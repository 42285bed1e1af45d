//! `ECVRF Bandersnatch SHA-512 Elligator2` suite.
//!
//! Configuration:
//!
//! * `suite_string` = b"Bandersnatch_SHA-512_ELL2" for Twisted Edwards form.
//!
//! - The EC group <G> is the prime subgroup of the Bandersnatch elliptic curve,
//!   in Twisted Edwards form, with finite field and curve parameters as specified in
//!   [MSZ21](https://eprint.iacr.org/2021/1152).
//!   For this group, `fLen` = `qLen` = $32$ and `cofactor` = $4$.
//!
//! - The prime subgroup generator G in <G> is defined as follows:
//!   - G.x = 0x29c132cc2c0b34c5743711777bbe42f32b79c022ad998465e1e71866a252ae18
//!   - G.y = 0x2a6c669eda123e0f157d8b50badcd586358cad81eee464605e3167b6cc974166
//!
//! * `cLen` = 32.
//!
//! * The key pair generation primitive is `PK = sk * G`, with sk the secret
//!   key scalar and `G` the group generator.
//!
//! * The ECVRF_nonce_generation function is as specified in Section 5.4.2.2
//!   of RFC-9381.
//!
//! * The int_to_string function encodes into the 32 bytes little endian
//!   representation.
//!
//! * The point_to_string function converts a point in <G> to an octet
//!   string using compressed form. The y coordinate is encoded using
//!   int_to_string function and the most significant bit of the last
//!   octet is used to keep track of the x's sign. This implies that
//!   the point is encoded on 32 bytes.
//!
//! * The string_to_point function tries to decompress the point encoded
//!   according to `point_to_string` procedure. This function MUST outputs
//!   "INVALID" if the octet string does not decode to a point on G.
//!
//! * The hash function Hash is SHA-512 as specified in
//!   [RFC6234](https://www.rfc-editor.org/rfc/rfc6234), with hLen = 64.
//!
//! * The `ECVRF_encode_to_curve` function uses *Elligator2* method described in
//!   section 6.8.2 of [RFC-9380](https://datatracker.ietf.org/doc/rfc9380) and is
//!   described in section 5.4.1.2 of [RFC-9381](https://datatracker.ietf.org/doc/rfc9381),
//!   with `h2c_suite_ID_string` = `"Bandersnatch_XMD:SHA-512_ELL2_RO_"`
//!   and domain separation tag `DST = "ECVRF_" || h2c_suite_ID_string || suite_string`.
//!
//! A Short Weierstrass form companion suite is provided as well, with
//! `suite_string` = b"Bandersnatch_SW_SHA-512_TAI" and try-and-increment
//! point hashing over the SEC 1 codec.

use crate::{pedersen::PedersenSuite, *};
use ark_ff::MontFp;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BandersnatchSha512Ell2;

type ThisSuite = BandersnatchSha512Ell2;

suite_types!(ThisSuite);
pedersen_suite_types!(ThisSuite);

impl Suite for ThisSuite {
    const SUITE_ID: &'static [u8] = b"Bandersnatch_SHA-512_ELL2";
    const CHALLENGE_LEN: usize = 32;

    type Affine = ark_ed_on_bls12_381_bandersnatch::EdwardsAffine;
    type Hasher = sha2::Sha512;
    type Codec = codec::ArkworksCodec;

    /// Elligator2 hash-to-curve as per RFC-9380 (random oracle variant).
    fn data_to_point(data: &[u8]) -> Option<AffinePoint> {
        let h2c_suite_id = b"Bandersnatch_XMD:SHA-512_ELL2_RO_";
        utils::hash_to_curve_ell2_rfc_9380::<Self>(data, h2c_suite_id)
    }
}

impl PedersenSuite for ThisSuite {
    const BLINDING_BASE: AffinePoint = {
        const X: BaseField = MontFp!(
            "6150229251051246713677296363717454238956877613358614224171740096471278798312"
        );
        const Y: BaseField = MontFp!(
            "28442734166467795856797249030329035618871580593056783094884474814923353898473"
        );
        AffinePoint::new_unchecked(X, Y)
    };
}

#[cfg(feature = "ring")]
pub mod ring {
    use super::*;
    use crate::ring as ring_suite;

    impl ring_suite::RingSuite for ThisSuite {
        type Pairing = ark_bls12_381::Bls12_381;

        const ACCUMULATOR_BASE: AffinePoint = {
            const X: BaseField = MontFp!(
                "37805570861274048643170021838972902516980894313648523898085159469000338764576"
            );
            const Y: BaseField = MontFp!(
                "14738305321141000190236674389841754997202271418876976886494444739226156422510"
            );
            AffinePoint::new_unchecked(X, Y)
        };

        const PADDING: AffinePoint = {
            const X: BaseField = MontFp!(
                "26287722405578650394504321825321286533153045350760430979437739593351290020913"
            );
            const Y: BaseField = MontFp!(
                "19058981610000167534379068105702216971787064146691007947119244515951752366738"
            );
            AffinePoint::new_unchecked(X, Y)
        };
    }

    ring_suite_types!(BandersnatchSha512Ell2);
}

#[cfg(feature = "ring")]
pub use ring::*;

/// Short Weierstrass form suite.
pub mod weierstrass {
    use super::*;

    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct BandersnatchSWSha512Tai;

    impl Suite for BandersnatchSWSha512Tai {
        const SUITE_ID: &'static [u8] = b"Bandersnatch_SW_SHA-512_TAI";
        const CHALLENGE_LEN: usize = 32;

        type Affine = ark_ed_on_bls12_381_bandersnatch::SWAffine;
        type Hasher = sha2::Sha512;
        type Codec = codec::Sec1Codec;
    }

    suite_types!(BandersnatchSWSha512Tai);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::PrimeField;

    ietf_suite_tests!(BandersnatchSha512Ell2);
    pedersen_suite_tests!(BandersnatchSha512Ell2);
    codec_suite_tests!(BandersnatchSha512Ell2);

    mod sw {
        use super::*;
        use weierstrass::BandersnatchSWSha512Tai;

        ietf_suite_tests!(BandersnatchSWSha512Tai);
        codec_suite_tests!(BandersnatchSWSha512Tai);
    }

    #[test]
    fn elligator2_hash_to_curve() {
        let p = BandersnatchSha512Ell2::data_to_point(b"foo").unwrap();
        assert!(p.is_on_curve());
        assert!(p.is_in_correct_subgroup_assuming_on_curve());

        // The nonuniform variant also lands in the prime subgroup and
        // differs from the random oracle variant.
        let h2c_suite_id = b"Bandersnatch_XMD:SHA-512_ELL2_NU_";
        let q =
            utils::encode_to_curve_ell2_rfc_9380::<BandersnatchSha512Ell2>(b"foo", h2c_suite_id)
                .unwrap();
        assert!(q.is_on_curve());
        assert!(q.is_in_correct_subgroup_assuming_on_curve());
        assert_ne!(p, q);
    }

    #[test]
    fn sswu_hash_to_curve_sw_form() {
        use weierstrass::BandersnatchSWSha512Tai;
        let h2c_suite_id = b"Bandersnatch_SW_XMD:SHA-512_SSWU_RO_";
        let p = utils::hash_to_curve_sswu_rfc_9380::<BandersnatchSWSha512Tai>(b"foo", h2c_suite_id)
            .unwrap();
        assert!(p.is_on_curve());
        assert!(p.is_in_correct_subgroup_assuming_on_curve());

        let q =
            utils::encode_to_curve_sswu_rfc_9380::<BandersnatchSWSha512Tai>(b"foo", h2c_suite_id)
                .unwrap();
        assert!(q.is_on_curve());
        assert!(q.is_in_correct_subgroup_assuming_on_curve());
    }

    // The 96 byte signature layout: gamma (32) || challenge (32) || response (32).
    #[test]
    fn ietf_signature_layout() {
        use crate::ietf::{Prover, Verifier};
        use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

        let sk_bytes =
            hex::decode("3d6406500d4009fdf2604546093665911e753f2213570a29521fd88bc30ede18")
                .unwrap();
        let secret = Secret::from_scalar(ScalarField::from_le_bytes_mod_order(&sk_bytes));
        let public = secret.public();

        let input = Input::new(b"").unwrap();
        let output = secret.output(input);
        let proof = secret.prove(input, output, b"");
        assert!(public.verify(input, output, b"", &proof).is_ok());

        let mut buf = Vec::new();
        output.serialize_compressed(&mut buf).unwrap();
        proof.serialize_compressed(&mut buf).unwrap();
        assert_eq!(buf.len(), 96);

        // Corrupting any byte of the signature must break verification.
        buf[50] ^= 0xFF;
        let output2 = Output::deserialize_compressed(&mut &buf[..32]).unwrap();
        match IetfProof::deserialize_compressed(&mut &buf[32..]) {
            Ok(proof2) => assert!(public.verify(input, output2, b"", &proof2).is_err()),
            Err(_) => (),
        }
    }

    // The 192 byte signature layout:
    // gamma (32) || pk_com (32) || R (32) || Ok (32) || s (32) || sb (32).
    #[test]
    fn pedersen_signature_layout() {
        use crate::pedersen::{Prover, Verifier};
        use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

        let secret = Secret::from_seed(b"pedersen layout");
        let input = Input::new(b"").unwrap();
        let output = secret.output(input);

        let (proof, _blinding) = secret.prove(input, output, b"");
        assert!(Public::verify(input, output, b"", &proof).is_ok());

        let mut buf = Vec::new();
        output.serialize_compressed(&mut buf).unwrap();
        proof.serialize_compressed(&mut buf).unwrap();
        assert_eq!(buf.len(), 192);

        // Corrupting any byte of the signature must break verification.
        buf[100] ^= 0xFF;
        let output2 = Output::deserialize_compressed(&mut &buf[..32]).unwrap();
        match PedersenProof::deserialize_compressed(&mut &buf[32..]) {
            Ok(proof2) => assert!(Public::verify(input, output2, b"", &proof2).is_err()),
            Err(_) => (),
        }
    }

    #[cfg(feature = "ring")]
    mod ring_tests {
        use super::*;
        use crate::ring::{Prover as _, RingSuite, Verifier as _};
        use ark_serialize::CanonicalSerialize;

        ring_suite_tests!(BandersnatchSha512Ell2);

        #[test]
        fn suite_constants_sanity() {
            use crate::testing::CheckPoint;
            assert!(BandersnatchSha512Ell2::BLINDING_BASE.check(true).is_ok());
            assert!(BandersnatchSha512Ell2::ACCUMULATOR_BASE.check(true).is_ok());
            assert!(BandersnatchSha512Ell2::PADDING.check(true).is_ok());
        }

        // Eight keys in a 512 slot domain: the wire sizes of the root and
        // the proof are fixed regardless of ring occupancy.
        #[test]
        fn small_ring_sizes_and_rejections() {
            use crate::testing as common;

            let rng = &mut ark_std::test_rng();
            let params = RingProofParams::from_seed(8, [0x55; 32]).unwrap();
            assert_eq!(params.piop.domain.size(), 512);

            let secret = Secret::from_seed(b"ring test");
            let mut pks = common::random_vec::<AffinePoint>(8, Some(rng));
            pks[5] = secret.public().0;

            let input = Input::new(b"ring input").unwrap();
            let output = secret.output(input);

            let prover = params.prover(params.prover_key(&pks).unwrap(), 5);
            let proof = secret.prove(input, output, b"ad", &prover).unwrap();

            let root = params.ring_root(&pks).unwrap();
            let mut root_bytes = Vec::new();
            root.serialize_compressed(&mut root_bytes).unwrap();
            assert_eq!(root_bytes.len(), 144);

            let mut proof_bytes = Vec::new();
            proof.ring_proof.serialize_compressed(&mut proof_bytes).unwrap();
            assert_eq!(proof_bytes.len(), 592);

            let mut full = Vec::new();
            output.serialize_compressed(&mut full).unwrap();
            proof.serialize_compressed(&mut full).unwrap();
            assert_eq!(full.len(), 784);

            let verifier = params.verifier(params.verifier_key_from_commitment(root));
            assert!(Public::verify(input, output, b"ad", &proof, &verifier).is_ok());
        }

        // A thousand keys force the 2048 slot domain; proof size is unchanged.
        #[test]
        fn large_ring_keeps_proof_size() {
            use crate::testing as common;

            let rng = &mut ark_std::test_rng();
            let params = RingProofParams::from_rand(1023, rng).unwrap();
            assert_eq!(params.piop.domain.size(), 2048);

            let secret = Secret::from_seed(b"large ring");
            let mut pks = common::random_vec::<AffinePoint>(1023, Some(rng));
            pks[1000] = secret.public().0;

            let input = Input::new(b"large ring input").unwrap();
            let output = secret.output(input);

            let idx = RingProofParams::key_index(&pks, &secret.public().0).unwrap();
            let prover = params.prover(params.prover_key(&pks).unwrap(), idx);
            let proof = secret.prove(input, output, b"", &prover).unwrap();

            let mut proof_bytes = Vec::new();
            proof.ring_proof.serialize_compressed(&mut proof_bytes).unwrap();
            assert_eq!(proof_bytes.len(), 592);

            let verifier = params.verifier(params.verifier_key(&pks).unwrap());
            assert!(Public::verify(input, output, b"", &proof, &verifier).is_ok());

            // An outsider key is refused at indexing time.
            let outsider = Secret::from_seed(b"not in ring");
            assert_eq!(
                RingProofParams::key_index(&pks, &outsider.public().0),
                Err(Error::KeyNotInRing)
            );
        }
    }
}
