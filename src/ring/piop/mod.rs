//! Arithmetization of the ring membership relation.
//!
//! The statement: the prover knows an index `k` and a blinding `b` such that
//! `result = ring[k] + b·B`, where `result` is the Pedersen key commitment
//! handed to the verifier. Columns over the shared domain encode the ring
//! key coordinates (fixed), the signer selection plus the bits of `b`
//! (witness), and the running conditional-addition accumulator (witness).
//! The constraint set is aggregated with a Fiat-Shamir challenge and divided
//! by the domain's vanishing polynomial; openings at a random point plus a
//! shifted opening of the linearization polynomial complete the argument.

use crate::ring::pcs::{Kzg, RawKzgVerifierKey, Urs};
use crate::Error;
use ark_ec::{pairing::Pairing, twisted_edwards::TECurveConfig};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::vec::Vec;

pub mod params;
pub(crate) mod prover;

pub use params::{FixedColumns, PiopParams};

/// Commitments to the witness columns, in transcript order.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct RingCommitments<E: Pairing> {
    pub bits: E::G1Affine,
    pub inn_prod_acc: E::G1Affine,
    pub cond_add_acc: [E::G1Affine; 2],
}

/// Column evaluations at the opening point, in transcript order.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct RingEvaluations<F: PrimeField> {
    /// Fixed point-table coordinate columns.
    pub points: [F; 2],
    /// Fixed keyset selector column.
    pub selector: F,
    /// Witness columns: bits, inner product, accumulator coordinates.
    pub bits: F,
    pub inn_prod_acc: F,
    pub cond_add_acc: [F; 2],
}

/// Commitments to the fixed columns.
///
/// This is the *ring root*: a fixed-size digest of the whole ring. The
/// selector commitment is fully determined by the domain layout, binding
/// the domain size and padding scheme into the root.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct FixedColumnsCommitted<E: Pairing> {
    /// Commitments to the x and y point-table columns.
    pub points: [E::G1Affine; 2],
    /// Commitment to the keyset selector column.
    pub selector: E::G1Affine,
}

/// The ring membership argument carried inside a ring VRF proof.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct RingProof<E: Pairing> {
    pub column_commitments: RingCommitments<E>,
    pub columns_at_zeta: RingEvaluations<E::ScalarField>,
    pub quotient_commitment: E::G1Affine,
    pub lin_at_zeta_omega: E::ScalarField,
    pub agg_at_zeta_proof: E::G1Affine,
    pub lin_at_zeta_omega_proof: E::G1Affine,
}

/// Prover-side indexed ring.
#[derive(Clone)]
pub struct ProverKey<E: Pairing, C: TECurveConfig<BaseField = E::ScalarField>> {
    pub(crate) pcs_ck: Vec<E::G1Affine>,
    pub(crate) fixed_columns: FixedColumns<E::ScalarField, C>,
    // Also held by the prover: the verifier key seeds the Fiat-Shamir
    // transcript on both sides.
    pub(crate) verifier_key: VerifierKey<E>,
}

/// Verifier-side indexed ring: the raw KZG key plus the ring root.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct VerifierKey<E: Pairing> {
    pub(crate) pcs_raw_vk: RawKzgVerifierKey<E>,
    pub(crate) fixed_columns_committed: FixedColumnsCommitted<E>,
}

impl<E: Pairing> VerifierKey<E> {
    /// Rebuild a verifier key from a ring root and a raw KZG key.
    pub fn from_commitment_and_kzg_vk(
        commitment: FixedColumnsCommitted<E>,
        kzg_vk: RawKzgVerifierKey<E>,
    ) -> Self {
        Self {
            pcs_raw_vk: kzg_vk,
            fixed_columns_committed: commitment,
        }
    }

    /// The ring root.
    pub fn commitment(&self) -> FixedColumnsCommitted<E> {
        self.fixed_columns_committed.clone()
    }
}

/// Index a ring: interpolate and commit the fixed columns, split the result
/// into prover and verifier keys.
pub fn index<E, C>(
    urs: &Urs<E>,
    piop_params: &PiopParams<E::ScalarField, C>,
    keys: &[ark_ec::twisted_edwards::Affine<C>],
) -> Result<(ProverKey<E, C>, VerifierKey<E>), Error>
where
    E: Pairing,
    C: TECurveConfig<BaseField = E::ScalarField>,
{
    let fixed_columns = piop_params.fixed_columns(keys)?;
    let pcs_ck = urs.powers_in_g1.clone();
    let fixed_columns_committed = FixedColumnsCommitted {
        points: [
            Kzg::<E>::commit(&pcs_ck, fixed_columns.points.xs.as_poly())?,
            Kzg::<E>::commit(&pcs_ck, fixed_columns.points.ys.as_poly())?,
        ],
        selector: Kzg::<E>::commit(&pcs_ck, fixed_columns.selector.as_poly())?,
    };
    let verifier_key = VerifierKey {
        pcs_raw_vk: urs.raw_vk(),
        fixed_columns_committed,
    };
    let prover_key = ProverKey {
        pcs_ck,
        fixed_columns,
        verifier_key: verifier_key.clone(),
    };
    Ok((prover_key, verifier_key))
}

/// Scalar-side view of the aggregated constraint at the opening point.
///
/// `m_at_zeta` collects every term free of shifted-row accesses; the `q_*`
/// factors are the coefficients the shifted accumulator and inner-product
/// columns enter with. The full identity is
/// `m + q_ip·ip(ζω) + q_cx·accx(ζω) + q_cy·accy(ζω) = t(ζ)·Z_H(ζ)`,
/// which both sides exploit: the prover to form the linearization
/// polynomial `q_ip·ip + q_cx·accx + q_cy·accy`, the verifier to derive
/// `t(ζ)` from the opened evaluations.
pub(crate) struct ConstraintPieces<F: PrimeField> {
    pub m_at_zeta: F,
    pub q_ip: F,
    pub q_cx: F,
    pub q_cy: F,
}

pub(crate) fn constraint_pieces<F, C>(
    params: &PiopParams<F, C>,
    evals: &RingEvaluations<F>,
    alpha: F,
    zeta: F,
    fin: ark_ec::twisted_edwards::Affine<C>,
) -> Option<ConstraintPieces<F>>
where
    F: PrimeField,
    C: TECurveConfig<BaseField = F>,
{
    use ark_ff::{Field, One};

    let domain = &params.domain;
    let (l_first, l_last) = domain.evaluate_boundary_selectors(zeta)?;
    let nl = zeta - domain.last_point();

    let one = F::one();
    let b = evals.bits;
    let sel = evals.selector;
    let ip = evals.inn_prod_acc;
    let [x2, y2] = evals.points;
    let [x1, y1] = evals.cond_add_acc;
    let te_a = C::COEFF_A;
    let seed = params.seed;

    // Powers of the aggregation challenge, one per constraint.
    let mut alphas = [one; 10];
    for i in 1..10 {
        alphas[i] = alphas[i - 1] * alpha;
    }

    let x1y1 = x1 * y1;
    let x2y2 = x2 * y2;

    let m_at_zeta =
        // booleanity
        alphas[0] * (b.square() - b)
        // inner product recurrence, sans the shifted term
        + alphas[1] * nl * (-ip - b * sel)
        // conditional addition gates, sans the shifted terms
        + alphas[2] * nl * (-b * (x1y1 + x2y2) - (one - b) * x1)
        + alphas[3] * nl * (-b * (x1y1 - x2y2) - (one - b) * y1)
        // accumulator boundary values
        + alphas[4] * l_first * (x1 - seed.x)
        + alphas[5] * l_first * (y1 - seed.y)
        + alphas[6] * l_last * (x1 - fin.x)
        + alphas[7] * l_last * (y1 - fin.y)
        // inner product boundary values
        + alphas[8] * l_first * ip
        + alphas[9] * l_last * (ip - one);

    let q_ip = alphas[1] * nl;
    let q_cx = alphas[2] * nl * (b * (y1 * y2 + te_a * x1 * x2) + one - b);
    let q_cy = alphas[3] * nl * (b * (x1 * y2 - x2 * y1) + one - b);

    Some(ConstraintPieces {
        m_at_zeta,
        q_ip,
        q_cx,
        q_cy,
    })
}
