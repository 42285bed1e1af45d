//! `ECVRF Ed25519 SHA-512 TAI` suite.
//!
//! Configuration:
//!
//! * `suite_string` = b"Ed25519_SHA-512_TAI".
//!
//! - The EC group <G> is the prime subgroup of the twisted Edwards form of
//!   Curve25519, as specified in [RFC8032](https://tools.ietf.org/html/rfc8032).
//!   For this group, `fLen` = `qLen` = 32 and `cofactor` = 8.
//!
//! * `cLen` = 16.
//!
//! * The ECVRF_nonce_generation function is as specified in Section 5.4.2.2
//!   of RFC-9381.
//!
//! * The int_to_string function encodes into the 32 bytes little endian
//!   representation.
//!
//! * The point_to_string function converts a point in <G> to an octet
//!   string using the RFC-8032 compressed form: 32 bytes, x sign in the
//!   most significant bit of the last octet.
//!
//! * The hash function Hash is SHA-512 as specified in
//!   [RFC6234](https://www.rfc-editor.org/rfc/rfc6234), with hLen = 64.
//!
//! * The `ECVRF_encode_to_curve` function uses try-and-increment as
//!   described in section 5.4.1.1 of RFC-9381.

use crate::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ed25519Sha512Tai;

type ThisSuite = Ed25519Sha512Tai;

suite_types!(ThisSuite);

impl Suite for ThisSuite {
    const SUITE_ID: &'static [u8] = b"Ed25519_SHA-512_TAI";
    const CHALLENGE_LEN: usize = 16;

    type Affine = ark_ed25519::EdwardsAffine;
    type Hasher = sha2::Sha512;
    type Codec = codec::ArkworksCodec;
}

#[cfg(test)]
mod tests {
    use super::*;

    ietf_suite_tests!(ThisSuite);
    codec_suite_tests!(ThisSuite);

    #[test]
    fn tai_point_is_in_prime_subgroup() {
        let p = ThisSuite::data_to_point(b"test data").unwrap();
        assert!(p.is_on_curve());
        assert!(p.is_in_correct_subgroup_assuming_on_curve());
    }
}
