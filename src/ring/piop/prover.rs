//! Witness construction and constraint assembly.

use super::params::{FixedColumns, PiopParams};
use crate::ring::domain::{minus_constant, scaled, shifted_by, FieldColumn};
use crate::Error;
use ark_ec::{
    twisted_edwards::{Affine as TEAffine, TECurveConfig},
    CurveGroup,
};
use ark_ff::{One, PrimeField, Zero};
use ark_poly::{
    univariate::{DenseOrSparsePolynomial, DensePolynomial},
    DenseUVPolynomial, EvaluationDomain,
};
use ark_std::{vec, vec::Vec};

/// Witness columns for one proof.
pub(crate) struct Witness<F: PrimeField, C: TECurveConfig<BaseField = F>> {
    /// Signer one-hot over the key slots, then the blinding bits.
    pub bits: FieldColumn<F>,
    /// Running inner product of `bits` with the keyset selector.
    pub inn_prod_acc: FieldColumn<F>,
    /// Conditional-addition accumulator coordinates.
    pub acc_x: FieldColumn<F>,
    pub acc_y: FieldColumn<F>,
    /// `ring[k] + b·B`: the value the trace accumulates on top of the seed.
    pub result: TEAffine<C>,
}

pub(crate) fn build_witness<F, C>(
    params: &PiopParams<F, C>,
    fixed: &FixedColumns<F, C>,
    key_index: usize,
    blinding: C::ScalarField,
) -> Result<Witness<F, C>, Error>
where
    F: PrimeField,
    C: TECurveConfig<BaseField = F>,
{
    let domain = &params.domain;
    let n = domain.size();
    if key_index >= params.keyset_part_size {
        return Err(Error::KeyNotInRing);
    }

    let mut bits = vec![false; n];
    bits[key_index] = true;
    let scalar_bits = params.scalar_bits_le(blinding);
    for (i, bit) in scalar_bits.into_iter().enumerate() {
        bits[params.keyset_part_size + i] = bit;
    }

    let sel = &fixed.selector.evals;
    let mut inn_prod = Vec::with_capacity(n);
    inn_prod.push(F::zero());
    for i in 0..n - 1 {
        let term = if bits[i] { sel[i] } else { F::zero() };
        inn_prod.push(inn_prod[i] + term);
    }

    let mut acc_x = Vec::with_capacity(n);
    let mut acc_y = Vec::with_capacity(n);
    let mut cur = params.seed;
    for i in 0..n {
        acc_x.push(cur.x);
        acc_y.push(cur.y);
        if i + 1 < n && bits[i] {
            cur = (cur + fixed.points.points[i]).into_affine();
        }
    }

    let result = (fixed.points.points[key_index] + params.h * blinding).into_affine();
    debug_assert_eq!(cur, (params.seed + result).into_affine());

    let bits = bits
        .into_iter()
        .map(|b| if b { F::one() } else { F::zero() })
        .collect();

    Ok(Witness {
        bits: FieldColumn::from_evals(domain, bits),
        inn_prod_acc: FieldColumn::from_evals(domain, inn_prod),
        acc_x: FieldColumn::from_evals(domain, acc_x),
        acc_y: FieldColumn::from_evals(domain, acc_y),
        result,
    })
}

/// Aggregate every constraint with powers of `alpha` and divide out the
/// vanishing polynomial of the domain.
///
/// Constraint order matches [`super::constraint_pieces`]. A non-zero
/// remainder means the witness does not satisfy the relation, which can only
/// be an internal bug.
pub(crate) fn quotient_poly<F, C>(
    params: &PiopParams<F, C>,
    fixed: &FixedColumns<F, C>,
    witness: &Witness<F, C>,
    alpha: F,
) -> Result<DensePolynomial<F>, Error>
where
    F: PrimeField,
    C: TECurveConfig<BaseField = F>,
{
    let domain = &params.domain;
    let omega = domain.omega();

    let b = witness.bits.as_poly();
    let ip = witness.inn_prod_acc.as_poly();
    let x1 = witness.acc_x.as_poly();
    let y1 = witness.acc_y.as_poly();
    let x2 = fixed.points.xs.as_poly();
    let y2 = fixed.points.ys.as_poly();
    let sel = fixed.selector.as_poly();

    let x3 = shifted_by(x1, omega);
    let y3 = shifted_by(y1, omega);
    let ip_next = shifted_by(ip, omega);

    let not_last = domain.not_last_poly();
    let l_first = domain.l_first_poly();
    let l_last = domain.l_last_poly();
    let one = DensePolynomial::from_coefficients_vec(vec![F::one()]);
    let one_minus_b = &one - b;

    let fin = (params.seed + witness.result).into_affine();

    // booleanity: b(b - 1)
    let c0 = &(b * b) - b;

    // inner product recurrence: ip(wx) - ip(x) - b(x) sel(x), off the last row
    let c1 = &not_last * &(&(&ip_next - ip) - &(b * sel));

    // Conditional Twisted Edwards addition in the d-free dual law,
    // `(x1, y1) + b (x2, y2) = (x3, y3)`:
    //   b (x3 (y1 y2 + a x1 x2) - (x1 y1 + x2 y2)) + (1 - b)(x3 - x1)
    //   b (y3 (x1 y2 - x2 y1) - (x1 y1 - x2 y2)) + (1 - b)(y3 - y1)
    let x1x2 = x1 * x2;
    let y1y2 = y1 * y2;
    let x1y1 = x1 * y1;
    let x2y2 = x2 * y2;
    let x1y2 = x1 * y2;
    let x2y1 = x2 * y1;

    let t = &y1y2 + &scaled(&x1x2, C::COEFF_A);
    let gate_x = &(b * &(&(&x3 * &t) - &(&x1y1 + &x2y2))) + &(&one_minus_b * &(&x3 - x1));
    let c2 = &not_last * &gate_x;

    let u = &x1y2 - &x2y1;
    let gate_y = &(b * &(&(&y3 * &u) - &(&x1y1 - &x2y2))) + &(&one_minus_b * &(&y3 - y1));
    let c3 = &not_last * &gate_y;

    // Boundary pinning.
    let c4 = &l_first * &minus_constant(x1, params.seed.x);
    let c5 = &l_first * &minus_constant(y1, params.seed.y);
    let c6 = &l_last * &minus_constant(x1, fin.x);
    let c7 = &l_last * &minus_constant(y1, fin.y);
    let c8 = &l_first * ip;
    let c9 = &l_last * &minus_constant(ip, F::one());

    let constraints = [c0, c1, c2, c3, c4, c5, c6, c7, c8, c9];
    let mut agg = DensePolynomial::zero();
    let mut mult = F::one();
    for c in &constraints {
        agg = &agg + &scaled(c, mult);
        mult *= alpha;
    }

    let vanishing: DenseOrSparsePolynomial<F> = domain.domain.vanishing_polynomial().into();
    let (quotient, remainder) = DenseOrSparsePolynomial::from(agg)
        .divide_with_q_and_r(&vanishing)
        .ok_or(Error::InternalInvariant)?;
    if !remainder.is_zero() {
        return Err(Error::InternalInvariant);
    }
    Ok(quotient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::domain::Domain;
    use ark_bls12_381::Fr;
    use ark_ed_on_bls12_381_bandersnatch::{BandersnatchConfig, EdwardsAffine, Fr as InnerScalar};
    use ark_poly::Polynomial;
    use ark_std::UniformRand;

    #[test]
    fn witness_satisfies_constraints() {
        let rng = &mut ark_std::test_rng();
        let domain = Domain::new(512).unwrap();
        let params = PiopParams::<Fr, BandersnatchConfig>::setup(
            domain,
            EdwardsAffine::rand(rng),
            EdwardsAffine::rand(rng),
            EdwardsAffine::rand(rng),
        )
        .unwrap();
        let keys: Vec<EdwardsAffine> = (0..10).map(|_| EdwardsAffine::rand(rng)).collect();
        let fixed = params.fixed_columns(&keys).unwrap();

        let blinding = InnerScalar::rand(rng);
        let witness = build_witness(&params, &fixed, 3, blinding).unwrap();
        assert_eq!(
            witness.result,
            (keys[3] + params.h * blinding).into_affine()
        );

        // The aggregated constraint must be divisible by Z_H.
        let alpha = Fr::rand(rng);
        let q = quotient_poly(&params, &fixed, &witness, alpha).unwrap();
        assert!(q.degree() <= 3 * params.domain.size());

        // Spot check the identity at a random point through the
        // linearization split.
        let zeta = Fr::rand(rng);
        let evals = super::super::RingEvaluations {
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
        let pieces = super::super::constraint_pieces(&params, &evals, alpha, zeta, fin).unwrap();
        let zw = params.domain.omega() * zeta;
        let lin = pieces.q_ip * witness.inn_prod_acc.evaluate(&zw)
            + pieces.q_cx * witness.acc_x.evaluate(&zw)
            + pieces.q_cy * witness.acc_y.evaluate(&zw);
        let zh = params.domain.evaluate_vanishing(zeta);
        assert_eq!(pieces.m_at_zeta + lin, q.evaluate(&zeta) * zh);
    }
}
