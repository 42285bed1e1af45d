//! Evaluation domain and column representations for the ring argument.
//!
//! A column is a vector of evaluations over the domain together with its
//! interpolating polynomial; constraints are assembled in coefficient form,
//! so both views are kept side by side.

use crate::Error;
use ark_ec::twisted_edwards::{Affine as TEAffine, TECurveConfig};
use ark_ff::{FftField, Field};
use ark_poly::{
    univariate::DensePolynomial, DenseUVPolynomial, EvaluationDomain, GeneralEvaluationDomain,
    Polynomial,
};
use ark_std::{vec, vec::Vec};

/// Reserved tail rows: they keep the accumulator still after the scalar
/// trace ends, so the last row carries the final value.
pub(crate) const IDLE_ROWS: usize = 4;

/// Radix-2 evaluation domain `H = <omega>` of size `N = 2^k`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain<F: FftField> {
    pub(crate) domain: GeneralEvaluationDomain<F>,
}

impl<F: FftField> Domain<F> {
    /// Build a domain of exactly `size` points.
    ///
    /// Fails with [`Error::DomainMismatch`] when `size` is not a power of two
    /// supported by the field's two-adicity.
    pub fn new(size: usize) -> Result<Self, Error> {
        let domain = GeneralEvaluationDomain::new(size)
            .filter(|d| d.size() == size)
            .ok_or(Error::DomainMismatch)?;
        Ok(Self { domain })
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.domain.size()
    }

    /// Domain generator `omega`.
    #[inline(always)]
    pub fn omega(&self) -> F {
        self.domain.group_gen()
    }

    /// Last domain point `omega^(N-1)`.
    #[inline(always)]
    pub(crate) fn last_point(&self) -> F {
        self.domain.group_gen_inv()
    }

    /// Interpolate evaluations (padded with zeros up to the domain size).
    pub(crate) fn interpolate(&self, mut evals: Vec<F>) -> DensePolynomial<F> {
        debug_assert!(evals.len() <= self.size());
        evals.resize(self.size(), F::zero());
        DensePolynomial::from_coefficients_vec(self.domain.ifft(&evals))
    }

    /// Lagrange basis polynomial at the first domain point.
    pub(crate) fn l_first_poly(&self) -> DensePolynomial<F> {
        let mut evals = vec![F::zero(); self.size()];
        evals[0] = F::one();
        self.interpolate(evals)
    }

    /// Lagrange basis polynomial at the last domain point.
    pub(crate) fn l_last_poly(&self) -> DensePolynomial<F> {
        let mut evals = vec![F::zero(); self.size()];
        evals[self.size() - 1] = F::one();
        self.interpolate(evals)
    }

    /// Linear factor vanishing at the last domain point: `x - omega^(N-1)`.
    pub(crate) fn not_last_poly(&self) -> DensePolynomial<F> {
        DensePolynomial::from_coefficients_vec(vec![-self.last_point(), F::one()])
    }

    /// `Z_H(z) = z^N - 1`.
    #[inline(always)]
    pub(crate) fn evaluate_vanishing(&self, z: F) -> F {
        self.domain.evaluate_vanishing_polynomial(z)
    }

    /// `L_0(z)` and `L_{N-1}(z)` from the closed form
    /// `L_i(z) = omega^i (z^N - 1) / (N (z - omega^i))`.
    ///
    /// Returns `None` when `z` lies in the domain.
    pub(crate) fn evaluate_boundary_selectors(&self, z: F) -> Option<(F, F)> {
        let zh = self.evaluate_vanishing(z);
        if zh.is_zero() {
            return None;
        }
        let n_inv = self.domain.size_as_field_element().inverse()?;
        let last = self.last_point();
        let l_first = zh * n_inv * (z - F::one()).inverse()?;
        let l_last = zh * n_inv * last * (z - last).inverse()?;
        Some((l_first, l_last))
    }
}

/// A column: evaluations over the domain plus the interpolating polynomial.
#[derive(Clone, Debug)]
pub struct FieldColumn<F: FftField> {
    pub(crate) evals: Vec<F>,
    pub(crate) poly: DensePolynomial<F>,
}

impl<F: FftField> FieldColumn<F> {
    pub(crate) fn from_evals(domain: &Domain<F>, evals: Vec<F>) -> Self {
        debug_assert_eq!(evals.len(), domain.size());
        let poly = domain.interpolate(evals.clone());
        Self { evals, poly }
    }

    #[inline(always)]
    pub fn as_poly(&self) -> &DensePolynomial<F> {
        &self.poly
    }

    #[inline(always)]
    pub fn evaluate(&self, z: &F) -> F {
        self.poly.evaluate(z)
    }
}

/// Coordinate columns of a vector of Twisted Edwards points.
///
/// Rows may carry the off-curve filler `(0, 0)`; it is never touched by an
/// active conditional-addition gate.
#[derive(Clone, Debug)]
pub struct AffineColumn<F: FftField, C: TECurveConfig<BaseField = F>> {
    pub(crate) points: Vec<TEAffine<C>>,
    pub(crate) xs: FieldColumn<F>,
    pub(crate) ys: FieldColumn<F>,
}

impl<F: FftField, C: TECurveConfig<BaseField = F>> AffineColumn<F, C> {
    pub(crate) fn from_points(domain: &Domain<F>, points: Vec<TEAffine<C>>) -> Self {
        #[cfg(feature = "parallel")]
        use rayon::prelude::*;

        debug_assert_eq!(points.len(), domain.size());
        #[cfg(feature = "parallel")]
        let (xs, ys): (Vec<F>, Vec<F>) = points.par_iter().map(|p| (p.x, p.y)).unzip();
        #[cfg(not(feature = "parallel"))]
        let (xs, ys): (Vec<F>, Vec<F>) = points.iter().map(|p| (p.x, p.y)).unzip();
        Self {
            xs: FieldColumn::from_evals(domain, xs),
            ys: FieldColumn::from_evals(domain, ys),
            points,
        }
    }
}

/// Multiply by a scalar, coefficient-wise.
pub(crate) fn scaled<F: Field>(p: &DensePolynomial<F>, k: F) -> DensePolynomial<F> {
    DensePolynomial::from_coefficients_vec(p.coeffs.iter().map(|c| *c * k).collect())
}

/// Subtract a constant term.
pub(crate) fn minus_constant<F: Field>(p: &DensePolynomial<F>, k: F) -> DensePolynomial<F> {
    p - &DensePolynomial::from_coefficients_vec(vec![k])
}

/// `p(omega * x)`: scale the i-th coefficient by `omega^i`.
pub(crate) fn shifted_by<F: Field>(p: &DensePolynomial<F>, omega: F) -> DensePolynomial<F> {
    let mut pow = F::one();
    let coeffs = p
        .coeffs
        .iter()
        .map(|c| {
            let c = *c * pow;
            pow *= omega;
            c
        })
        .collect();
    DensePolynomial::from_coefficients_vec(coeffs)
}
