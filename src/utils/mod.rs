//! Common utilities.

pub mod common;
pub mod te_sw_map;

pub use common::*;
pub use te_sw_map::*;

use crate::{AffinePoint, ScalarField, Suite};
use ark_ec::AffineRepr;

type Projective<S> = <AffinePoint<S> as AffineRepr>::Group;

/// Scalar multiplication of a secret scalar, with secret splitting.
///
/// The scalar is split into two random shares with the original sum, each
/// multiplied separately. Costs an extra scalar multiplication but decouples
/// the schedule of curve operations from the secret bits.
#[cfg(feature = "secret-split")]
#[inline(always)]
pub(crate) fn mul_secret<S: Suite>(p: AffinePoint<S>, s: ScalarField<S>) -> Projective<S> {
    use ark_std::UniformRand;
    let mut rng = ark_std::rand::rngs::OsRng;
    let x1 = ScalarField::<S>::rand(&mut rng);
    let x2 = s - x1;
    p * x1 + p * x2
}

/// Scalar multiplication of a secret scalar, plain variant.
#[cfg(not(feature = "secret-split"))]
#[inline(always)]
pub(crate) fn mul_secret<S: Suite>(p: AffinePoint<S>, s: ScalarField<S>) -> Projective<S> {
    p * s
}
