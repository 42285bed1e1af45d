//! Ring argument prover.

use crate::ring::domain::scaled;
use crate::ring::pcs::Kzg;
use crate::ring::piop::{
    self, prover as piop_prover, PiopParams, ProverKey, RingCommitments, RingEvaluations,
    RingProof,
};
use crate::ring::transcript::Transcript;
use crate::Error;
use ark_ec::{pairing::Pairing, twisted_edwards::TECurveConfig, CurveGroup};
use ark_ff::{One, Zero};
use ark_poly::Polynomial;

/// Prover handle for one ring position.
pub struct RingProver<E: Pairing, C: TECurveConfig<BaseField = E::ScalarField>> {
    prover_key: ProverKey<E, C>,
    piop_params: PiopParams<E::ScalarField, C>,
    key_index: usize,
    transcript: Transcript,
}

impl<E, C> RingProver<E, C>
where
    E: Pairing,
    C: TECurveConfig<BaseField = E::ScalarField>,
{
    pub fn init(
        prover_key: ProverKey<E, C>,
        piop_params: PiopParams<E::ScalarField, C>,
        key_index: usize,
        transcript: Transcript,
    ) -> Self {
        Self {
            prover_key,
            piop_params,
            key_index,
            transcript,
        }
    }

    pub fn key_index(&self) -> usize {
        self.key_index
    }

    /// Prove that `result = ring[key_index] + blinding·B` for the committed
    /// ring, where `result` is the Pedersen key commitment.
    pub fn prove(&self, blinding: C::ScalarField) -> Result<RingProof<E>, Error> {
        let params = &self.piop_params;
        let fixed = &self.prover_key.fixed_columns;
        let ck = &self.prover_key.pcs_ck[..];

        let witness = piop_prover::build_witness(params, fixed, self.key_index, blinding)?;

        let mut transcript = self.transcript.clone();
        transcript.append(b"verifier-key", &self.prover_key.verifier_key);
        transcript.append(b"instance", &witness.result);

        // The witness column commitments are independent MSMs.
        let column_polys = [
            witness.bits.as_poly(),
            witness.inn_prod_acc.as_poly(),
            witness.acc_x.as_poly(),
            witness.acc_y.as_poly(),
        ];
        #[cfg(feature = "parallel")]
        let commits = {
            use rayon::prelude::*;
            column_polys
                .par_iter()
                .map(|p| Kzg::<E>::commit(ck, p))
                .collect::<Result<Vec<_>, _>>()?
        };
        #[cfg(not(feature = "parallel"))]
        let commits = column_polys
            .iter()
            .map(|p| Kzg::<E>::commit(ck, p))
            .collect::<Result<Vec<_>, _>>()?;
        let column_commitments = RingCommitments::<E> {
            bits: commits[0],
            inn_prod_acc: commits[1],
            cond_add_acc: [commits[2], commits[3]],
        };
        transcript.append(b"columns", &column_commitments);
        let alpha = transcript.challenge(b"alpha");

        let quotient = piop_prover::quotient_poly(params, fixed, &witness, alpha)?;
        let quotient_commitment = Kzg::<E>::commit(ck, &quotient)?;
        transcript.append(b"quotient", &quotient_commitment);
        let zeta: E::ScalarField = transcript.challenge(b"zeta");
        // A challenge inside the domain would break the linearization math;
        // unreachable in practice.
        if params.domain.evaluate_vanishing(zeta).is_zero() {
            return Err(Error::InternalInvariant);
        }

        let columns_at_zeta = RingEvaluations {
            points: [
                fixed.points.xs.evaluate(&zeta),
                fixed.points.ys.evaluate(&zeta),
            ],
            selector: fixed.selector.evaluate(&zeta),
            bits: witness.bits.evaluate(&zeta),
            inn_prod_acc: witness.inn_prod_acc.evaluate(&zeta),
            cond_add_acc: [witness.acc_x.evaluate(&zeta), witness.acc_y.evaluate(&zeta)],
        };

        let fin = (params.seed + witness.result).into_affine();
        let pieces = piop::constraint_pieces(params, &columns_at_zeta, alpha, zeta, fin)
            .ok_or(Error::InternalInvariant)?;

        // Linearization polynomial: the committed columns entering the
        // identity through their shifted evaluations, with scalar weights
        // fixed by the evaluations at zeta.
        let lin = &(&scaled(witness.inn_prod_acc.as_poly(), pieces.q_ip)
            + &scaled(witness.acc_x.as_poly(), pieces.q_cx))
            + &scaled(witness.acc_y.as_poly(), pieces.q_cy);
        let zeta_omega = zeta * params.domain.omega();
        let lin_at_zeta_omega = lin.evaluate(&zeta_omega);

        transcript.append(b"evals", &columns_at_zeta);
        transcript.append(b"lin-eval", &lin_at_zeta_omega);
        let nu: E::ScalarField = transcript.challenge(b"nu");

        // Aggregated opening at zeta over every column plus the quotient.
        let polys = [
            fixed.points.xs.as_poly(),
            fixed.points.ys.as_poly(),
            fixed.selector.as_poly(),
            witness.bits.as_poly(),
            witness.inn_prod_acc.as_poly(),
            witness.acc_x.as_poly(),
            witness.acc_y.as_poly(),
            &quotient,
        ];
        let mut agg = ark_poly::univariate::DensePolynomial::zero();
        let mut mult = E::ScalarField::one();
        for p in polys {
            agg = &agg + &scaled(p, mult);
            mult *= nu;
        }
        let (_, agg_at_zeta_proof) = Kzg::<E>::open(ck, &agg, zeta)?;
        let (_, lin_at_zeta_omega_proof) = Kzg::<E>::open(ck, &lin, zeta_omega)?;

        Ok(RingProof {
            column_commitments,
            columns_at_zeta,
            quotient_commitment,
            lin_at_zeta_omega,
            agg_at_zeta_proof,
            lin_at_zeta_omega_proof,
        })
    }
}
