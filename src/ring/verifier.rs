//! Ring argument verifier.

use crate::ring::pcs::{Kzg, OpeningClaim};
use crate::ring::piop::{self, PiopParams, RingProof, VerifierKey};
use crate::ring::transcript::Transcript;
use ark_ec::{
    pairing::Pairing,
    twisted_edwards::{Affine as TEAffine, TECurveConfig},
    CurveGroup,
};
use ark_ff::{Field, One, Zero};

/// Verifier handle for a committed ring.
pub struct RingVerifier<E: Pairing, C: TECurveConfig<BaseField = E::ScalarField>> {
    verifier_key: VerifierKey<E>,
    piop_params: PiopParams<E::ScalarField, C>,
    transcript: Transcript,
}

impl<E, C> RingVerifier<E, C>
where
    E: Pairing,
    C: TECurveConfig<BaseField = E::ScalarField>,
{
    pub fn init(
        verifier_key: VerifierKey<E>,
        piop_params: PiopParams<E::ScalarField, C>,
        transcript: Transcript,
    ) -> Self {
        Self {
            verifier_key,
            piop_params,
            transcript,
        }
    }

    pub fn verifier_key(&self) -> &VerifierKey<E> {
        &self.verifier_key
    }

    /// Check that `result` (the Pedersen key commitment) equals
    /// `ring[k] + b·B` for some position `k` of the committed ring and some
    /// blinding known to the prover.
    ///
    /// Recomputes the Fiat-Shamir transcript, derives the quotient
    /// evaluation from the constraint identity, and checks both openings
    /// with one batched pairing equation.
    pub fn verify(&self, proof: &RingProof<E>, result: TEAffine<C>) -> bool {
        let params = &self.piop_params;
        let vk = &self.verifier_key;

        let mut transcript = self.transcript.clone();
        transcript.append(b"verifier-key", vk);
        transcript.append(b"instance", &result);
        transcript.append(b"columns", &proof.column_commitments);
        let alpha = transcript.challenge(b"alpha");
        transcript.append(b"quotient", &proof.quotient_commitment);
        let zeta: E::ScalarField = transcript.challenge(b"zeta");

        let zh_at_zeta = params.domain.evaluate_vanishing(zeta);
        if zh_at_zeta.is_zero() {
            return false;
        }

        transcript.append(b"evals", &proof.columns_at_zeta);
        transcript.append(b"lin-eval", &proof.lin_at_zeta_omega);
        let nu: E::ScalarField = transcript.challenge(b"nu");

        // Constraint identity at zeta: recover t(zeta) from the opened
        // column evaluations and the claimed linearization value.
        let fin = (params.seed + result).into_affine();
        let Some(pieces) =
            piop::constraint_pieces(params, &proof.columns_at_zeta, alpha, zeta, fin)
        else {
            return false;
        };
        let Some(zh_inv) = zh_at_zeta.inverse() else {
            return false;
        };
        let quotient_at_zeta = (pieces.m_at_zeta + proof.lin_at_zeta_omega) * zh_inv;

        // Aggregate commitments and evaluations in the prover's order.
        let evals = &proof.columns_at_zeta;
        let commitments = [
            vk.fixed_columns_committed.points[0],
            vk.fixed_columns_committed.points[1],
            vk.fixed_columns_committed.selector,
            proof.column_commitments.bits,
            proof.column_commitments.inn_prod_acc,
            proof.column_commitments.cond_add_acc[0],
            proof.column_commitments.cond_add_acc[1],
            proof.quotient_commitment,
        ];
        let values = [
            evals.points[0],
            evals.points[1],
            evals.selector,
            evals.bits,
            evals.inn_prod_acc,
            evals.cond_add_acc[0],
            evals.cond_add_acc[1],
            quotient_at_zeta,
        ];
        let mut agg_commitment = E::G1::zero();
        let mut agg_value = E::ScalarField::zero();
        let mut mult = E::ScalarField::one();
        for (c, v) in commitments.iter().zip(values.iter()) {
            agg_commitment += *c * mult;
            agg_value += *v * mult;
            mult *= nu;
        }

        // Commitment to the linearization polynomial.
        let lin_commitment = proof.column_commitments.inn_prod_acc * pieces.q_ip
            + proof.column_commitments.cond_add_acc[0] * pieces.q_cx
            + proof.column_commitments.cond_add_acc[1] * pieces.q_cy;

        let zeta_omega = zeta * params.domain.omega();
        transcript.append(b"agg-proof", &proof.agg_at_zeta_proof);
        transcript.append(b"lin-proof", &proof.lin_at_zeta_omega_proof);
        let delta = transcript.challenge(b"delta");

        let claims = [
            OpeningClaim {
                commitment: agg_commitment.into_affine(),
                point: zeta,
                value: agg_value,
                proof: proof.agg_at_zeta_proof,
            },
            OpeningClaim {
                commitment: lin_commitment.into_affine(),
                point: zeta_omega,
                value: proof.lin_at_zeta_omega,
                proof: proof.lin_at_zeta_omega_proof,
            },
        ];
        Kzg::<E>::verify_batch(&vk.pcs_raw_vk, &claims, delta)
    }
}
