//! KZG polynomial commitments over a pairing-friendly curve.
//!
//! The universal setup is the usual powers-of-tau string. Commitments and
//! opening proofs are G1 points; verification is a pairing equation. Two
//! openings at distinct points batch into a single equation via a random
//! combiner. Multi-scalar multiplications go through a narrow backend seam
//! so a delegated implementation can replace the built-in one.

use crate::Error;
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{Field, One, Zero};
use ark_poly::{
    univariate::DensePolynomial, DenseUVPolynomial, EvaluationDomain, GeneralEvaluationDomain,
    Polynomial,
};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{marker::PhantomData, vec, vec::Vec};

/// Multi-scalar multiplication backend.
///
/// Implementations must be interchangeable bit-for-bit; only speed may
/// differ.
pub trait MsmBackend<E: Pairing> {
    fn msm_g1(bases: &[E::G1Affine], scalars: &[E::ScalarField]) -> E::G1;
}

/// Arkworks Pippenger MSM (default).
pub struct ArkMsm;

impl<E: Pairing> MsmBackend<E> for ArkMsm {
    #[inline(always)]
    fn msm_g1(bases: &[E::G1Affine], scalars: &[E::ScalarField]) -> E::G1 {
        E::G1::msm_unchecked(bases, scalars)
    }
}

/// Portable serial MSM fallback.
pub struct SerialMsm;

impl<E: Pairing> MsmBackend<E> for SerialMsm {
    fn msm_g1(bases: &[E::G1Affine], scalars: &[E::ScalarField]) -> E::G1 {
        bases
            .iter()
            .zip(scalars.iter())
            .map(|(b, s)| *b * *s)
            .sum()
    }
}

/// Universal reference string: powers of tau in G1 plus `[1, tau]` in G2.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Urs<E: Pairing> {
    pub powers_in_g1: Vec<E::G1Affine>,
    pub powers_in_g2: Vec<E::G2Affine>,
}

/// Minimal verifier-side view of the setup.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct RawKzgVerifierKey<E: Pairing> {
    pub g1: E::G1Affine,
    pub g2: E::G2Affine,
    pub tau_in_g2: E::G2Affine,
}

impl<E: Pairing> Urs<E> {
    /// Generate a setup of the given degree with a locally sampled tau.
    ///
    /// Suitable for tests and development; production deployments load a
    /// ceremony transcript via `CanonicalDeserialize` instead.
    pub fn generate(max_degree: usize, rng: &mut impl ark_std::rand::RngCore) -> Self {
        use ark_std::UniformRand;
        let tau = E::ScalarField::rand(rng);

        let g1 = E::G1Affine::generator();
        let mut powers = Vec::with_capacity(max_degree + 1);
        let mut cur = g1.into_group();
        for _ in 0..=max_degree {
            powers.push(cur);
            cur *= tau;
        }
        let powers_in_g1 = E::G1::normalize_batch(&powers);

        let g2 = E::G2Affine::generator();
        let powers_in_g2 = E::G2::normalize_batch(&[g2.into_group(), g2 * tau]);

        Self {
            powers_in_g1,
            powers_in_g2,
        }
    }

    /// Highest committable polynomial degree.
    #[inline(always)]
    pub fn max_degree(&self) -> usize {
        self.powers_in_g1.len() - 1
    }

    /// Verifier key extraction.
    pub fn raw_vk(&self) -> RawKzgVerifierKey<E> {
        RawKzgVerifierKey {
            g1: self.powers_in_g1[0],
            g2: self.powers_in_g2[0],
            tau_in_g2: self.powers_in_g2[1],
        }
    }

    /// Commitment key in the Lagrangian basis of a domain of `domain_size`:
    /// `L_i(tau) G1`, obtained with one IFFT over the monomial powers.
    pub fn lagrangian_ck(&self, domain_size: usize) -> Result<Vec<E::G1Affine>, Error> {
        if domain_size > self.powers_in_g1.len() {
            return Err(Error::DomainMismatch);
        }
        let domain = GeneralEvaluationDomain::<E::ScalarField>::new(domain_size)
            .filter(|d| d.size() == domain_size)
            .ok_or(Error::DomainMismatch)?;
        let monomial: Vec<E::G1> = self.powers_in_g1[..domain_size]
            .iter()
            .map(|p| p.into_group())
            .collect();
        let lagrangian = domain.ifft(&monomial);
        Ok(E::G1::normalize_batch(&lagrangian))
    }
}

/// A single opening claim: `commitment` opens to `value` at `point`,
/// witnessed by `proof`.
pub struct OpeningClaim<E: Pairing> {
    pub commitment: E::G1Affine,
    pub point: E::ScalarField,
    pub value: E::ScalarField,
    pub proof: E::G1Affine,
}

/// KZG scheme functions, parameterized by the MSM backend.
pub struct Kzg<E: Pairing, M: MsmBackend<E> = ArkMsm>(PhantomData<(E, M)>);

impl<E: Pairing, M: MsmBackend<E>> Kzg<E, M> {
    /// Commit to `poly`: an MSM of its coefficients over the G1 powers.
    pub fn commit(
        ck: &[E::G1Affine],
        poly: &DensePolynomial<E::ScalarField>,
    ) -> Result<E::G1Affine, Error> {
        if poly.coeffs.len() > ck.len() {
            return Err(Error::DomainMismatch);
        }
        Ok(M::msm_g1(&ck[..poly.coeffs.len()], &poly.coeffs).into_affine())
    }

    /// Open `poly` at `z`: commitment to the quotient `(p(x) - p(z))/(x - z)`.
    pub fn open(
        ck: &[E::G1Affine],
        poly: &DensePolynomial<E::ScalarField>,
        z: E::ScalarField,
    ) -> Result<(E::ScalarField, E::G1Affine), Error> {
        let value = poly.evaluate(&z);
        let quotient = divide_by_linear(poly, z);
        let proof = Self::commit(ck, &quotient)?;
        Ok((value, proof))
    }

    /// Check one opening: `e(C - v G1 + z W, G2) == e(W, tau G2)`.
    pub fn verify(vk: &RawKzgVerifierKey<E>, claim: &OpeningClaim<E>) -> bool {
        let acc = claim.commitment.into_group() - vk.g1 * claim.value + claim.proof * claim.point;
        E::pairing(acc, vk.g2) == E::pairing(claim.proof, vk.tau_in_g2)
    }

    /// Check several openings with one pairing equation, folding the claims
    /// with powers of `delta`:
    /// `e(sum delta^i (C_i - v_i G1 + z_i W_i), G2) == e(sum delta^i W_i, tau G2)`.
    pub fn verify_batch(
        vk: &RawKzgVerifierKey<E>,
        claims: &[OpeningClaim<E>],
        delta: E::ScalarField,
    ) -> bool {
        let mut acc = E::G1::zero();
        let mut w_acc = E::G1::zero();
        let mut mult = E::ScalarField::one();
        for claim in claims {
            let term = claim.commitment.into_group() - vk.g1 * claim.value
                + claim.proof * claim.point;
            acc += term * mult;
            w_acc += claim.proof * mult;
            mult *= delta;
        }
        E::pairing(acc, vk.g2) == E::pairing(w_acc, vk.tau_in_g2)
    }
}

/// Ruffini division by `(x - z)`; the remainder (the evaluation) is dropped.
pub(crate) fn divide_by_linear<F: Field>(poly: &DensePolynomial<F>, z: F) -> DensePolynomial<F> {
    let n = poly.coeffs.len();
    if n <= 1 {
        return DensePolynomial::from_coefficients_vec(vec![]);
    }
    let mut quotient = vec![F::zero(); n - 1];
    let mut acc = F::zero();
    for i in (1..n).rev() {
        acc = poly.coeffs[i] + z * acc;
        quotient[i - 1] = acc;
    }
    DensePolynomial::from_coefficients_vec(quotient)
}
