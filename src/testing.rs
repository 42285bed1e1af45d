//! Shared test helpers.

use crate::*;
use ark_ec::{
    short_weierstrass::{Affine as SWAffine, SWCurveConfig},
    twisted_edwards::{Affine as TEAffine, TECurveConfig},
};
use ark_std::{rand::RngCore, UniformRand};

pub const TEST_SEED: &[u8] = b"seed";

#[inline(always)]
pub fn random_vec<T: UniformRand>(n: usize, rng: Option<&mut dyn RngCore>) -> Vec<T> {
    let mut local_rng = ark_std::test_rng();
    let rng = rng.unwrap_or(&mut local_rng);
    (0..n).map(|_| T::rand(rng)).collect()
}

#[inline(always)]
pub fn random_val<T: UniformRand>(rng: Option<&mut dyn RngCore>) -> T {
    let mut local_rng = ark_std::test_rng();
    let rng = rng.unwrap_or(&mut local_rng);
    T::rand(rng)
}

/// Curve and subgroup sanity checks for suite constants.
pub trait CheckPoint {
    fn check(&self, require_subgroup: bool) -> Result<(), &'static str>;
}

impl<C: TECurveConfig> CheckPoint for TEAffine<C> {
    fn check(&self, require_subgroup: bool) -> Result<(), &'static str> {
        if !self.is_on_curve() {
            return Err("point not on curve");
        }
        if require_subgroup && !self.is_in_correct_subgroup_assuming_on_curve() {
            return Err("point not in prime subgroup");
        }
        Ok(())
    }
}

impl<C: SWCurveConfig> CheckPoint for SWAffine<C> {
    fn check(&self, require_subgroup: bool) -> Result<(), &'static str> {
        if !self.is_on_curve() {
            return Err("point not on curve");
        }
        if require_subgroup && !self.is_in_correct_subgroup_assuming_on_curve() {
            return Err("point not in prime subgroup");
        }
        Ok(())
    }
}

