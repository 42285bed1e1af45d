//! Incrementally updatable ring commitment over a Lagrangian SRS.
//!
//! The fixed columns commit to the vector
//! `pk_1, .., pk_n, padding, .., padding, B, 2B, .., 2^(s-1)B, (0,0) x 4`
//! coordinate-wise. With the SRS in Lagrangian form `L_i(tau)·G1`, the
//! commitment of a column is a plain MSM of its entries, so replacing a
//! padding slot with a freshly appended key only costs the difference
//! term. Commitments built this way are bit-identical to the monomial-basis
//! ones produced by [`crate::ring::piop::index`].

use crate::ring::pcs::Urs;
use crate::ring::piop::{FixedColumnsCommitted, PiopParams};
use crate::ring::domain::IDLE_ROWS;
use crate::Error;
use ark_ec::{
    pairing::Pairing,
    twisted_edwards::{Affine as TEAffine, TECurveConfig},
    AffineRepr, CurveGroup, VariableBaseMSM,
};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{iter, vec::Vec};

/// Ring commitment under construction.
///
/// Tracks how many key slots are already occupied; the remaining ones hold
/// the padding point.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Ring<E: Pairing, C: TECurveConfig<BaseField = E::ScalarField>> {
    /// Commitments to the coordinate columns.
    pub cx: E::G1Affine,
    pub cy: E::G1Affine,
    /// Commitment to the keyset selector column.
    pub selector: E::G1Affine,
    /// Key slot capacity.
    pub max_keys: usize,
    /// Occupied key slots.
    pub curr_keys: usize,
    pub padding_point: TEAffine<C>,
}

impl<E, C> Ring<E, C>
where
    E: Pairing,
    C: TECurveConfig<BaseField = E::ScalarField>,
{
    /// Commitment to the empty ring: all key slots hold the padding point.
    ///
    /// The column splits as `padding · (sum of all L_i)` plus a correction
    /// over the trailing rows, so only the tail of the Lagrangian SRS is
    /// needed. `sum L_i(tau) G1 = G1` since the Lagrange basis sums to one.
    pub fn empty(
        piop_params: &PiopParams<E::ScalarField, C>,
        srs: &RingBuilderKey<E>,
    ) -> Result<Self, Error> {
        let domain_size = piop_params.domain.size();
        if srs.lis_in_g1.len() < domain_size {
            return Err(Error::DomainMismatch);
        }
        let padding_point = piop_params.padding_point;
        let (padding_x, padding_y) = (padding_point.x, padding_point.y);
        let g1 = srs.g1;
        let c1x = g1 * padding_x;
        let c1y = g1 * padding_y;

        // Correction over the scalar-trace and idle rows:
        // `2^i B - padding` on the trace, `-padding` on the idle tail.
        let powers_of_h = piop_params.power_of_2_multiples_of_h();
        let (mut xs, mut ys): (Vec<_>, Vec<_>) = powers_of_h
            .iter()
            .map(|p| (p.x - padding_x, p.y - padding_y))
            .unzip();
        xs.resize(xs.len() + IDLE_ROWS, -padding_x);
        ys.resize(ys.len() + IDLE_ROWS, -padding_y);

        let tail = &srs.lis_in_g1[piop_params.keyset_part_size..domain_size];
        let c2x = E::G1::msm_unchecked(tail, &xs);
        let c2y = E::G1::msm_unchecked(tail, &ys);

        let selector_complement: E::G1 = tail.iter().map(|p| p.into_group()).sum();
        let selector = g1 - selector_complement;

        let affine = E::G1::normalize_batch(&[c1x + c2x, c1y + c2y, selector]);
        Ok(Self {
            cx: affine[0],
            cy: affine[1],
            selector: affine[2],
            max_keys: piop_params.keyset_part_size,
            curr_keys: 0,
            padding_point,
        })
    }

    /// Replace the next `keys.len()` padding slots with `keys`.
    pub fn append(&mut self, keys: &[TEAffine<C>], srs: &RingBuilderKey<E>) -> Result<(), Error> {
        let new_size = self.curr_keys + keys.len();
        if new_size > self.max_keys || srs.lis_in_g1.len() < new_size {
            return Err(Error::DomainMismatch);
        }
        let (padding_x, padding_y) = (self.padding_point.x, self.padding_point.y);
        let (xs, ys): (Vec<_>, Vec<_>) = keys
            .iter()
            .map(|p| (p.x - padding_x, p.y - padding_y))
            .unzip();
        let segment = &srs.lis_in_g1[self.curr_keys..new_size];
        let cx_delta = E::G1::msm_unchecked(segment, &xs);
        let cy_delta = E::G1::msm_unchecked(segment, &ys);

        let affine = E::G1::normalize_batch(&[self.cx + cx_delta, self.cy + cy_delta]);
        self.cx = affine[0];
        self.cy = affine[1];
        self.curr_keys = new_size;
        Ok(())
    }

    /// Build the ring for `keys` in one shot.
    pub fn with_keys(
        piop_params: &PiopParams<E::ScalarField, C>,
        keys: &[TEAffine<C>],
        srs: &RingBuilderKey<E>,
    ) -> Result<Self, Error> {
        if keys.len() > piop_params.keyset_part_size {
            return Err(Error::DomainMismatch);
        }
        let domain_size = piop_params.domain.size();
        if srs.lis_in_g1.len() < domain_size {
            return Err(Error::DomainMismatch);
        }
        let padding_point = piop_params.padding_point;
        let (padding_x, padding_y) = (padding_point.x, padding_point.y);
        let powers_of_h = piop_params.power_of_2_multiples_of_h();

        // One MSM per coordinate over
        // `(pk_i - padding) ∥ (2^i B - padding) ∥ -padding x IDLE ∥ padding`,
        // the last term riding on the plain generator.
        let (xs, ys): (Vec<_>, Vec<_>) = keys
            .iter()
            .chain(&powers_of_h)
            .map(|p| (p.x - padding_x, p.y - padding_y))
            .chain(iter::repeat((-padding_x, -padding_y)).take(IDLE_ROWS))
            .chain(iter::once((padding_x, padding_y)))
            .unzip();

        let tail = &srs.lis_in_g1[piop_params.keyset_part_size..domain_size];
        let bases: Vec<E::G1Affine> = srs.lis_in_g1[..keys.len()]
            .iter()
            .chain(tail.iter())
            .copied()
            .chain(iter::once(srs.g1.into_affine()))
            .collect();

        let cx = E::G1::msm_unchecked(&bases, &xs);
        let cy = E::G1::msm_unchecked(&bases, &ys);
        let selector_complement: E::G1 = tail.iter().map(|p| p.into_group()).sum();
        let selector = srs.g1 - selector_complement;

        let affine = E::G1::normalize_batch(&[cx, cy, selector]);
        Ok(Self {
            cx: affine[0],
            cy: affine[1],
            selector: affine[2],
            max_keys: piop_params.keyset_part_size,
            curr_keys: keys.len(),
            padding_point,
        })
    }

    /// Free key slots left.
    pub fn slots_left(&self) -> usize {
        self.max_keys - self.curr_keys
    }
}

impl<E: Pairing> FixedColumnsCommitted<E> {
    /// Ring root from a builder-constructed ring.
    pub fn from_ring<C: TECurveConfig<BaseField = E::ScalarField>>(ring: &Ring<E, C>) -> Self {
        Self {
            points: [ring.cx, ring.cy],
            selector: ring.selector,
        }
    }
}

/// The Lagrangian SRS slice needed for ring building.
#[derive(Clone, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct RingBuilderKey<E: Pairing> {
    /// `L_i(tau) G1` over the full domain.
    pub lis_in_g1: Vec<E::G1Affine>,
    /// SRS generator.
    pub g1: E::G1,
}

impl<E: Pairing> RingBuilderKey<E> {
    pub fn from_srs(srs: &Urs<E>, domain_size: usize) -> Result<Self, Error> {
        let lis_in_g1 = srs.lagrangian_ck(domain_size)?;
        let g1 = srs.powers_in_g1[0].into_group();
        Ok(Self { lis_in_g1, g1 })
    }
}
