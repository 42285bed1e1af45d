//! RFC 9380 / RFC 9381 building blocks: hash-to-curve mappings, nonce
//! generation, challenge derivation and output hashing.

use crate::*;
use ark_ec::hashing::{
    curve_maps::{elligator2::Elligator2Config, elligator2::Elligator2Map, swu::SWUConfig, swu::SWUMap},
    map_to_curve_hasher::{MapToCurve, MapToCurveBasedHasher},
    HashToCurve,
};
use ark_ff::field_hashers::{DefaultFieldHasher, HashToField};
use ark_ff::Field;
use digest::{crypto_common::BlockSizeUser, Digest, FixedOutputReset};

/// RFC 9380 security parameter, in bits.
const H2C_SEC_PARAM: usize = 128;

/// One-shot digest.
#[inline(always)]
pub fn hash<H: Digest>(data: &[u8]) -> digest::Output<H> {
    H::new().chain_update(data).finalize()
}

/// HMAC-SHA-256 (RFC 2104), used by the RFC 6979 nonce construction.
pub fn hmac(sk: &[u8], data: &[u8]) -> Vec<u8> {
    use hmac::{Hmac, Mac};
    use sha2::Sha256;
    let mut mac =
        <Hmac<Sha256>>::new_from_slice(sk).expect("HMAC accepts keys of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn h2c_dst<S: Suite>(h2c_suite_id: &[u8]) -> Vec<u8> {
    [b"ECVRF_", h2c_suite_id, S::SUITE_ID].concat()
}

/// Try-and-increment point hashing (RFC 9381 section 5.4.1.1).
///
/// Hashes the counter-suffixed message until the digest decodes to a curve
/// point through the suite codec, then clears the cofactor. For the SEC 1
/// codec this is the `string_to_point(0x02 || hash)` convention of the RFC;
/// Edwards suites decode the digest as a compressed point directly.
///
/// `data` is expected to be `salt || alpha` per the RFC. On the standard
/// suites a valid point is found after about two attempts; the counter is
/// still hard-bounded so adversarial inputs can't loop forever.
pub fn hash_to_curve_tai_rfc_9381<S: Suite>(data: &[u8]) -> Option<AffinePoint<S>> {
    const DOM_SEP_FRONT: u8 = 0x01;
    const DOM_SEP_BACK: u8 = 0x00;

    let mod_size = (<<BaseField<S> as Field>::BasePrimeField as PrimeField>::MODULUS_BIT_SIZE
        as usize
        + 7)
        / 8;
    if <S::Hasher as Digest>::output_size() < mod_size {
        return None;
    }

    let mut buf = [S::SUITE_ID, &[DOM_SEP_FRONT], data, &[0x00, DOM_SEP_BACK]].concat();
    let ctr_pos = buf.len() - 2;

    for ctr in 0..=255u8 {
        buf[ctr_pos] = ctr;
        let hash = hash::<S::Hasher>(&buf);
        if let Ok(pt) = S::Codec::point_decode(&hash[..mod_size]) {
            let pt = pt.clear_cofactor();
            if !pt.is_zero() {
                return Some(pt);
            }
        }
    }
    None
}

/// Elligator 2 hash-to-curve, random-oracle variant (RFC 9380 section 6.8.2,
/// `hash_to_curve`): two field elements, two mapped points, sum, cofactor
/// cleared. DST is `"ECVRF_" || h2c_suite_id || suite_id`.
pub fn hash_to_curve_ell2_rfc_9380<S: Suite>(
    data: &[u8],
    h2c_suite_id: &[u8],
) -> Option<AffinePoint<S>>
where
    CurveConfig<S>: ark_ec::twisted_edwards::TECurveConfig + Elligator2Config,
    Elligator2Map<CurveConfig<S>>: MapToCurve<<AffinePoint<S> as AffineRepr>::Group>,
    S::Hasher: Default + Clone + FixedOutputReset + BlockSizeUser,
{
    let dst = h2c_dst::<S>(h2c_suite_id);
    let hasher = MapToCurveBasedHasher::<
        <AffinePoint<S> as AffineRepr>::Group,
        DefaultFieldHasher<S::Hasher, H2C_SEC_PARAM>,
        Elligator2Map<CurveConfig<S>>,
    >::new(&dst)
    .ok()?;
    hasher.hash(data).ok()
}

/// Elligator 2 encode-to-curve, nonuniform variant (RFC 9380
/// `encode_to_curve`): a single field element mapped and cofactor cleared.
pub fn encode_to_curve_ell2_rfc_9380<S: Suite>(
    data: &[u8],
    h2c_suite_id: &[u8],
) -> Option<AffinePoint<S>>
where
    CurveConfig<S>: ark_ec::twisted_edwards::TECurveConfig + Elligator2Config,
    Elligator2Map<CurveConfig<S>>: MapToCurve<<AffinePoint<S> as AffineRepr>::Group>,
    S::Hasher: Default + Clone + FixedOutputReset + BlockSizeUser,
{
    let dst = h2c_dst::<S>(h2c_suite_id);
    Elligator2Map::<CurveConfig<S>>::check_parameters().ok()?;
    let field_hasher =
        <DefaultFieldHasher<S::Hasher, H2C_SEC_PARAM> as HashToField<BaseField<S>>>::new(&dst);
    let [u] = field_hasher.hash_to_field::<1>(data);
    let q = Elligator2Map::<CurveConfig<S>>::map_to_curve(u).ok()?;
    let pt = q.clear_cofactor();
    (!pt.is_zero()).then_some(pt)
}

/// Simplified SWU hash-to-curve, random-oracle variant (RFC 9380
/// section 6.6.2, `hash_to_curve`).
pub fn hash_to_curve_sswu_rfc_9380<S: Suite>(
    data: &[u8],
    h2c_suite_id: &[u8],
) -> Option<AffinePoint<S>>
where
    CurveConfig<S>: SWUConfig,
    SWUMap<CurveConfig<S>>: MapToCurve<<AffinePoint<S> as AffineRepr>::Group>,
    S::Hasher: Default + Clone + FixedOutputReset + BlockSizeUser,
{
    let dst = h2c_dst::<S>(h2c_suite_id);
    let hasher = MapToCurveBasedHasher::<
        <AffinePoint<S> as AffineRepr>::Group,
        DefaultFieldHasher<S::Hasher, H2C_SEC_PARAM>,
        SWUMap<CurveConfig<S>>,
    >::new(&dst)
    .ok()?;
    hasher.hash(data).ok()
}

/// Simplified SWU encode-to-curve, nonuniform variant (RFC 9380
/// `encode_to_curve`).
pub fn encode_to_curve_sswu_rfc_9380<S: Suite>(
    data: &[u8],
    h2c_suite_id: &[u8],
) -> Option<AffinePoint<S>>
where
    CurveConfig<S>: SWUConfig,
    SWUMap<CurveConfig<S>>: MapToCurve<<AffinePoint<S> as AffineRepr>::Group>,
    S::Hasher: Default + Clone + FixedOutputReset + BlockSizeUser,
{
    let dst = h2c_dst::<S>(h2c_suite_id);
    SWUMap::<CurveConfig<S>>::check_parameters().ok()?;
    let field_hasher =
        <DefaultFieldHasher<S::Hasher, H2C_SEC_PARAM> as HashToField<BaseField<S>>>::new(&dst);
    let [u] = field_hasher.hash_to_field::<1>(data);
    let q = SWUMap::<CurveConfig<S>>::map_to_curve(u).ok()?;
    let pt = q.clear_cofactor();
    (!pt.is_zero()).then_some(pt)
}

/// Deterministic nonce, RFC 9381 section 5.4.2.2 (the RFC 8032 section 5.1.6
/// construction).
///
/// The suite hasher output must be at least 64 bytes; the top half of the
/// hashed secret seeds the derivation.
pub fn nonce_rfc_8032<S: Suite>(sk: &ScalarField<S>, input: &AffinePoint<S>) -> ScalarField<S> {
    let raw = codec::scalar_encode::<S>(sk);
    let sk_hash = &hash::<S::Hasher>(&raw)[32..];

    let raw = codec::point_encode::<S>(input);
    let v = [sk_hash, &raw[..]].concat();
    let h = &hash::<S::Hasher>(&v)[..];

    ScalarField::<S>::from_le_bytes_mod_order(h)
}

/// Deterministic nonce, RFC 9381 section 5.4.2.1 (the RFC 6979 section 3.2
/// construction).
pub fn nonce_rfc_6979<S: Suite>(sk: &ScalarField<S>, input: &AffinePoint<S>) -> ScalarField<S> {
    let raw = codec::point_encode::<S>(input);
    let h1 = hash::<S::Hasher>(&raw);

    let v = [1; 32];
    let k = [0; 32];

    // K = HMAC_K(V || 0x00 || int2octets(x) || bits2octets(h1))
    let x = codec::scalar_encode::<S>(sk);
    let raw = [&v[..], &[0x00], &x[..], &h1[..]].concat();
    let k = hmac(&k, &raw);

    // V = HMAC_K(V)
    let v = hmac(&k, &v);

    // K = HMAC_K(V || 0x01 || int2octets(x) || bits2octets(h1))
    let raw = [&v[..], &[0x01], &x[..], &h1[..]].concat();
    let k = hmac(&k, &raw);

    // V = HMAC_K(V)
    let v = hmac(&k, &v);

    // T = HMAC_K(V)
    let t = hmac(&k, &v);

    ScalarField::<S>::from_be_bytes_mod_order(&t[..])
}

/// Challenge generation, RFC 9381 section 5.4.3 extended with additional
/// data before the terminating domain separator.
pub fn challenge_rfc_9381<S: Suite>(pts: &[&AffinePoint<S>], ad: &[u8]) -> ScalarField<S> {
    const DOM_SEP_START: u8 = 0x02;
    const DOM_SEP_END: u8 = 0x00;

    let mut buf = [S::SUITE_ID, &[DOM_SEP_START]].concat();
    pts.iter()
        .for_each(|p| S::Codec::point_encode_into(p, &mut buf));
    buf.extend_from_slice(ad);
    buf.push(DOM_SEP_END);

    let hash = &hash::<S::Hasher>(&buf)[..S::CHALLENGE_LEN];
    S::Codec::scalar_decode(hash)
}

/// Output point hashing, RFC 9381 section 5.2.
///
/// `clear_cofactor` should be set only for suites whose output point may
/// live outside the prime subgroup; ours never do.
pub fn point_to_hash_rfc_9381<S: Suite>(pt: &AffinePoint<S>, clear_cofactor: bool) -> HashOutput<S> {
    const DOM_SEP_START: u8 = 0x03;
    const DOM_SEP_END: u8 = 0x00;

    let cleared;
    let pt = if clear_cofactor {
        cleared = pt.clear_cofactor();
        &cleared
    } else {
        pt
    };

    let mut buf = [S::SUITE_ID, &[DOM_SEP_START]].concat();
    S::Codec::point_encode_into(pt, &mut buf);
    buf.push(DOM_SEP_END);
    hash::<S::Hasher>(&buf)
}
