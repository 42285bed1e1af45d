//! `ECVRF Baby-JubJub SHA-512 TAI` suite.
//!
//! Configuration:
//!
//! * `suite_string` = b"BabyJubJub_SHA-512_TAI".
//!
//! - The EC group <G> is the prime subgroup of the Baby-JubJub elliptic
//!   curve, the twisted Edwards curve defined over the BN254 scalar field.
//!   For this group, `fLen` = `qLen` = 32 and `cofactor` = 8.
//!
//! * `cLen` = 32.
//!
//! * The ECVRF_nonce_generation function is as specified in Section 5.4.2.2
//!   of RFC-9381.
//!
//! * The int_to_string function encodes into the 32 bytes little endian
//!   representation.
//!
//! * The point_to_string function converts a point in <G> to a 32 byte
//!   compressed octet string, x sign in the most significant bit of the
//!   last octet.
//!
//! * The hash function Hash is SHA-512 as specified in
//!   [RFC6234](https://www.rfc-editor.org/rfc/rfc6234), with hLen = 64.
//!
//! * The `ECVRF_encode_to_curve` function uses try-and-increment as
//!   described in section 5.4.1.1 of RFC-9381.

use crate::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BabyJubJubSha512Tai;

type ThisSuite = BabyJubJubSha512Tai;

suite_types!(ThisSuite);

impl Suite for ThisSuite {
    const SUITE_ID: &'static [u8] = b"BabyJubJub_SHA-512_TAI";
    const CHALLENGE_LEN: usize = 32;

    type Affine = ark_ed_on_bn254::EdwardsAffine;
    type Hasher = sha2::Sha512;
    type Codec = codec::ArkworksCodec;
}
