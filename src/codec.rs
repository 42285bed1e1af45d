//! Wire formats for points and scalars.
//!
//! Every suite picks one [`Codec`]: the arkworks-native little-endian
//! compressed format used by the Edwards suites, or the big-endian SEC 1
//! format used by the NIST-style Weierstrass suites.

use ark_ec::short_weierstrass::SWCurveConfig;
use utils::te_sw_map;

use super::*;

/// Encoding seam between suite-level types and bytes.
pub trait Codec<S: Suite> {
    /// True for big-endian scalar and coordinate encodings.
    const BIG_ENDIAN: bool;

    /// Compressed point length in bytes.
    const POINT_ENCODED_LEN: usize;

    /// Scalar length in bytes.
    const SCALAR_ENCODED_LEN: usize;

    /// Append the point encoding to `buf`.
    fn point_encode_into(pt: &AffinePoint<S>, buf: &mut Vec<u8>);

    /// Encode a point.
    fn point_encode(pt: &AffinePoint<S>) -> Vec<u8> {
        let mut buf = Vec::new();
        Self::point_encode_into(pt, &mut buf);
        buf
    }

    /// Decode a point, validating curve membership.
    fn point_decode(buf: &[u8]) -> Result<AffinePoint<S>, Error>;

    /// Append the scalar encoding to `buf`.
    fn scalar_encode_into(sc: &ScalarField<S>, buf: &mut Vec<u8>);

    /// Encode a scalar.
    fn scalar_encode(sc: &ScalarField<S>) -> Vec<u8> {
        let mut buf = Vec::new();
        Self::scalar_encode_into(sc, &mut buf);
        buf
    }

    /// Decode a scalar, reducing out-of-range values modulo the group order.
    fn scalar_decode(buf: &[u8]) -> ScalarField<S>;
}

/// Flag bits carried by the arkworks compressed point encoding.
///
/// Twisted Edwards points spend one bit on the x sign; Short Weierstrass
/// points spend two (infinity marker plus y sign).
pub trait CompressFlagBits {
    const FLAG_BITS: u32;
}

impl<P: ark_ec::twisted_edwards::TECurveConfig> CompressFlagBits
    for ark_ec::twisted_edwards::Affine<P>
{
    const FLAG_BITS: u32 = 1;
}

impl<P: SWCurveConfig> CompressFlagBits for ark_ec::short_weierstrass::Affine<P> {
    const FLAG_BITS: u32 = 2;
}

/// Arkworks-native codec: little endian, compression on, flags in the top
/// bits of the final byte. Matches the RFC 8032 style for Edwards points.
pub struct ArkworksCodec;

impl<S: Suite> Codec<S> for ArkworksCodec
where
    BaseField<S>: PrimeField,
    AffinePoint<S>: CompressFlagBits,
{
    const BIG_ENDIAN: bool = false;

    // Matches arkworks `serialized_size_with_flags`:
    // ceil((MODULUS_BIT_SIZE + FLAG_BITS) / 8).
    const POINT_ENCODED_LEN: usize =
        (BaseField::<S>::MODULUS_BIT_SIZE as usize + AffinePoint::<S>::FLAG_BITS as usize + 7) / 8;
    const SCALAR_ENCODED_LEN: usize = (ScalarField::<S>::MODULUS_BIT_SIZE as usize + 7) / 8;

    fn point_encode_into(pt: &AffinePoint<S>, buf: &mut Vec<u8>) {
        pt.serialize_compressed(&mut *buf)
            .expect("writing to a Vec can't fail");
    }

    fn point_decode(buf: &[u8]) -> Result<AffinePoint<S>, Error> {
        AffinePoint::<S>::deserialize_compressed_unchecked(buf).map_err(Into::into)
    }

    fn scalar_encode_into(sc: &ScalarField<S>, buf: &mut Vec<u8>) {
        sc.serialize_compressed(&mut *buf)
            .expect("writing to a Vec can't fail");
    }

    fn scalar_decode(buf: &[u8]) -> ScalarField<S> {
        ScalarField::<S>::from_le_bytes_mod_order(buf)
    }
}

/// SEC 1 codec (<https://www.secg.org/sec1-v2.pdf>): big endian, compression
/// on, flag byte up front.
pub struct Sec1Codec;

impl<S: Suite> Codec<S> for Sec1Codec
where
    BaseField<S>: PrimeField,
    CurveConfig<S>: SWCurveConfig,
    AffinePoint<S>: te_sw_map::SWMapping<CurveConfig<S>>,
{
    const BIG_ENDIAN: bool = true;

    // One flag byte plus the big-endian x coordinate.
    const POINT_ENCODED_LEN: usize = 1 + (BaseField::<S>::MODULUS_BIT_SIZE as usize + 7) / 8;
    const SCALAR_ENCODED_LEN: usize = (ScalarField::<S>::MODULUS_BIT_SIZE as usize + 7) / 8;

    fn point_encode_into(pt: &AffinePoint<S>, buf: &mut Vec<u8>) {
        use ark_ff::biginteger::BigInteger;
        use te_sw_map::SWMapping;

        if pt.is_zero() {
            buf.push(0x00);
            return;
        }
        let mut tmp = Vec::new();
        let sw = pt.into_sw();

        let is_odd = sw.y.into_bigint().is_odd();
        buf.push(if is_odd { 0x03 } else { 0x02 });

        sw.x.serialize_compressed(&mut tmp)
            .expect("writing to a Vec can't fail");
        tmp.reverse();
        buf.extend_from_slice(&tmp[..]);
    }

    /// Decode a SEC 1 point.
    ///
    /// Inputs one byte shorter than the standard encoding are accepted and
    /// interpreted as lacking the sign byte, with even y implied. The
    /// try-and-increment hasher leans on this: it feeds raw hash output as a
    /// candidate x coordinate, which is exactly the `0x02 || x` convention of
    /// RFC 9381 section 5.4.1.1.
    fn point_decode(buf: &[u8]) -> Result<AffinePoint<S>, Error> {
        use ark_ff::biginteger::BigInteger;
        use te_sw_map::SWMapping;
        type SWAffine<C> = ark_ec::short_weierstrass::Affine<C>;

        if buf.len() == 1 && buf[0] == 0x00 {
            return Ok(AffinePoint::<S>::zero());
        }
        let mut buf = buf.to_vec();
        buf.reverse();

        let enc_len = <Self as Codec<S>>::POINT_ENCODED_LEN;
        let y_flag = if buf.len() + 1 == enc_len {
            0x02
        } else if buf.len() == enc_len {
            buf.pop().expect("length checked above")
        } else {
            return Err(Error::InvalidEncoding);
        };

        let x = BaseField::<S>::deserialize_compressed(&mut &buf[..])?;
        let (y1, y2) =
            SWAffine::<CurveConfig<S>>::get_ys_from_x_unchecked(x).ok_or(Error::InvalidEncoding)?;
        let y = if ((y_flag & 0x01) != 0) == y1.into_bigint().is_odd() {
            y1
        } else {
            y2
        };
        let sw = SWAffine::<CurveConfig<S>>::new_unchecked(x, y);
        Ok(AffinePoint::<S>::from_sw(sw))
    }

    fn scalar_encode_into(sc: &ScalarField<S>, buf: &mut Vec<u8>) {
        let mut tmp = Vec::new();
        sc.serialize_compressed(&mut tmp)
            .expect("writing to a Vec can't fail");
        tmp.reverse();
        buf.extend_from_slice(&tmp[..]);
    }

    fn scalar_decode(buf: &[u8]) -> ScalarField<S> {
        ScalarField::<S>::from_be_bytes_mod_order(buf)
    }
}

/// Encode a point with the suite codec.
pub fn point_encode<S: Suite>(pt: &AffinePoint<S>) -> Vec<u8> {
    S::Codec::point_encode(pt)
}

/// Decode a point with the suite codec.
pub fn point_decode<S: Suite>(buf: &[u8]) -> Result<AffinePoint<S>, Error> {
    S::Codec::point_decode(buf)
}

/// Encode a scalar with the suite codec.
pub fn scalar_encode<S: Suite>(sc: &ScalarField<S>) -> Vec<u8> {
    S::Codec::scalar_encode(sc)
}

/// Decode a scalar with the suite codec.
pub fn scalar_decode<S: Suite>(buf: &[u8]) -> ScalarField<S> {
    S::Codec::scalar_decode(buf)
}
