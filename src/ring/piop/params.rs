//! Application parameters of the ring argument.
//!
//! Fixes the domain layout: ring key slots first, then one row per bit of
//! the inner scalar field for the blinding trace, then the idle tail.

use crate::ring::domain::{AffineColumn, Domain, FieldColumn, IDLE_ROWS};
use crate::Error;
use ark_ec::{
    twisted_edwards::{Affine as TEAffine, TECurveConfig},
    AffineRepr, CurveGroup,
};
use ark_ff::{AdditiveGroup, BigInteger, One, PrimeField, Zero};
use ark_std::{vec, vec::Vec};

/// Fixed (verifier-known) columns: the point table and the keyset selector.
#[derive(Clone, Debug)]
pub struct FixedColumns<F: PrimeField, C: TECurveConfig<BaseField = F>> {
    pub(crate) points: AffineColumn<F, C>,
    pub(crate) selector: FieldColumn<F>,
}

/// Ring argument parameters for a given domain.
#[derive(Clone, Debug)]
pub struct PiopParams<F: PrimeField, C: TECurveConfig<BaseField = F>> {
    /// Evaluation domain shared by every column.
    pub domain: Domain<F>,
    /// Number of rows available for ring public keys.
    pub keyset_part_size: usize,
    /// Bit length of the inner scalar field, i.e. rows of the blinding trace.
    pub(crate) scalar_bitlen: usize,
    /// Pedersen blinding base `B`.
    pub h: TEAffine<C>,
    /// Accumulator seed point `K`, keeping the trace clear of the identity.
    pub seed: TEAffine<C>,
    /// Padding point filling unused key slots; discrete log unknown.
    pub padding_point: TEAffine<C>,
}

impl<F: PrimeField, C: TECurveConfig<BaseField = F>> PiopParams<F, C> {
    /// Lay out the domain for the given bases.
    ///
    /// Fails with [`Error::DomainMismatch`] when the domain can't fit the
    /// scalar trace plus the idle tail, leaving no key slots (see the
    /// domain-size helpers in the parent module for proper sizing).
    pub fn setup(
        domain: Domain<F>,
        h: TEAffine<C>,
        seed: TEAffine<C>,
        padding_point: TEAffine<C>,
    ) -> Result<Self, Error> {
        let scalar_bitlen = C::ScalarField::MODULUS_BIT_SIZE as usize;
        if domain.size() <= scalar_bitlen + IDLE_ROWS {
            return Err(Error::DomainMismatch);
        }
        let keyset_part_size = domain.size() - scalar_bitlen - IDLE_ROWS;
        Ok(Self {
            domain,
            keyset_part_size,
            scalar_bitlen,
            h,
            seed,
            padding_point,
        })
    }

    /// `B, 2B, 4B, ..., 2^(bits-1) B`.
    pub fn power_of_2_multiples_of_h(&self) -> Vec<TEAffine<C>> {
        let mut acc = self.h.into_group();
        let mut multiples = Vec::with_capacity(self.scalar_bitlen);
        for _ in 0..self.scalar_bitlen {
            multiples.push(acc);
            acc.double_in_place();
        }
        CurveGroup::normalize_batch(&multiples)
    }

    /// Little-endian bits of `scalar`, one per trace row.
    pub(crate) fn scalar_bits_le(&self, scalar: C::ScalarField) -> Vec<bool> {
        let mut bits = scalar.into_bigint().to_bits_le();
        bits.truncate(self.scalar_bitlen);
        bits.resize(self.scalar_bitlen, false);
        bits
    }

    /// The full point table column:
    /// `keys ∥ padding... ∥ B, 2B, ..., 2^(bits-1)B ∥ (0,0) x 4`.
    pub(crate) fn points_column(&self, keys: &[TEAffine<C>]) -> Result<AffineColumn<F, C>, Error> {
        if keys.len() > self.keyset_part_size {
            return Err(Error::DomainMismatch);
        }
        let padding_len = self.keyset_part_size - keys.len();
        let dummy = TEAffine::<C>::new_unchecked(F::zero(), F::zero());
        let points: Vec<_> = keys
            .iter()
            .copied()
            .chain(ark_std::iter::repeat(self.padding_point).take(padding_len))
            .chain(self.power_of_2_multiples_of_h())
            .chain(ark_std::iter::repeat(dummy).take(IDLE_ROWS))
            .collect();
        Ok(AffineColumn::from_points(&self.domain, points))
    }

    /// Keyset selector column: `1` over the key slots, `0` elsewhere.
    pub(crate) fn selector_column(&self) -> FieldColumn<F> {
        let mut evals = vec![F::one(); self.keyset_part_size];
        evals.resize(self.domain.size(), F::zero());
        FieldColumn::from_evals(&self.domain, evals)
    }

    /// Both fixed columns for the given ring keys.
    ///
    /// Fails with [`Error::DomainMismatch`] when `keys` exceeds the key
    /// slot capacity.
    pub fn fixed_columns(&self, keys: &[TEAffine<C>]) -> Result<FixedColumns<F, C>, Error> {
        Ok(FixedColumns {
            points: self.points_column(keys)?,
            selector: self.selector_column(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::domain::Domain;
    use ark_bls12_381::Fr;
    use ark_ed_on_bls12_381_bandersnatch::{BandersnatchConfig, EdwardsAffine};
    use ark_std::UniformRand;

    fn test_params() -> PiopParams<Fr, BandersnatchConfig> {
        let rng = &mut ark_std::test_rng();
        let domain = Domain::new(512).unwrap();
        PiopParams::setup(
            domain,
            EdwardsAffine::rand(rng),
            EdwardsAffine::rand(rng),
            EdwardsAffine::rand(rng),
        )
        .unwrap()
    }

    #[test]
    fn undersized_domain_is_rejected() {
        let rng = &mut ark_std::test_rng();
        // 256 rows can't fit the 253 bit trace plus the idle tail.
        let domain = Domain::new(256).unwrap();
        let res = PiopParams::<Fr, BandersnatchConfig>::setup(
            domain,
            EdwardsAffine::rand(rng),
            EdwardsAffine::rand(rng),
            EdwardsAffine::rand(rng),
        );
        assert_eq!(res.err(), Some(crate::Error::DomainMismatch));
    }

    #[test]
    fn layout_covers_the_domain() {
        let params = test_params();
        assert_eq!(params.scalar_bitlen, 253);
        assert_eq!(params.keyset_part_size, 512 - 253 - IDLE_ROWS);

        let keys: Vec<EdwardsAffine> = (0..8)
            .map(|_| EdwardsAffine::rand(&mut ark_std::test_rng()))
            .collect();
        let col = params.points_column(&keys).unwrap();
        assert_eq!(col.points.len(), 512);
        assert_eq!(col.points[0], keys[0]);
        assert_eq!(col.points[8], params.padding_point);
        assert_eq!(col.points[params.keyset_part_size], params.h);
        assert!(col.points[511].x.is_zero() && col.points[511].y.is_zero());

        // Oversized key lists are refused rather than truncated here;
        // truncation is a policy of the ring glue layer.
        let too_many = vec![keys[0]; params.keyset_part_size + 1];
        assert!(params.points_column(&too_many).is_err());
    }

    #[test]
    fn scalar_bits_recompose() {
        use ark_ed_on_bls12_381_bandersnatch::Fr as ScalarField;
        let params = test_params();
        let rng = &mut ark_std::test_rng();
        let scalar = ScalarField::rand(rng);
        let bits = params.scalar_bits_le(scalar);
        assert_eq!(bits.len(), params.scalar_bitlen);

        // sum b_i 2^i B == scalar B
        let powers = params.power_of_2_multiples_of_h();
        let mut acc = ark_ed_on_bls12_381_bandersnatch::EdwardsProjective::zero();
        for (b, p) in bits.iter().zip(powers.iter()) {
            if *b {
                acc += p;
            }
        }
        assert_eq!(acc.into_affine(), (params.h * scalar).into_affine());
    }
}
