//! Seams bridging the curve forms used across the crate.
//!
//! The SEC 1 codec speaks Short Weierstrass regardless of the suite's native
//! form, and the ring backend speaks Twisted Edwards. These traits let
//! generic code request the form it needs; for suites already in the right
//! form the conversion is free. The Elligator 2 Montgomery step is internal
//! to `ark_ec::hashing` and needs no bridging here.

use ark_ec::{
    short_weierstrass::{Affine as SWAffine, SWCurveConfig},
    twisted_edwards::{Affine as TEAffine, TECurveConfig},
};
use ark_std::borrow::Cow;

/// View of a point in Short Weierstrass form.
pub trait SWMapping<C: SWCurveConfig>: Clone {
    fn from_sw(sw: SWAffine<C>) -> Self;

    fn into_sw(&self) -> Cow<SWAffine<C>>;
}

impl<C: SWCurveConfig> SWMapping<C> for SWAffine<C> {
    #[inline(always)]
    fn from_sw(sw: SWAffine<C>) -> Self {
        sw
    }

    #[inline(always)]
    fn into_sw(&self) -> Cow<SWAffine<C>> {
        Cow::Borrowed(self)
    }
}

/// View of a point in Twisted Edwards form.
pub trait TEMapping<C: TECurveConfig>: Clone {
    fn from_te(te: TEAffine<C>) -> Self;

    fn into_te(&self) -> TEAffine<C>;

    fn to_te_slice(slice: &[Self]) -> Cow<[TEAffine<C>]>;
}

impl<C: TECurveConfig> TEMapping<C> for TEAffine<C> {
    #[inline(always)]
    fn from_te(te: TEAffine<C>) -> Self {
        te
    }

    #[inline(always)]
    fn into_te(&self) -> TEAffine<C> {
        *self
    }

    #[inline(always)]
    fn to_te_slice(slice: &[Self]) -> Cow<[TEAffine<C>]> {
        Cow::Borrowed(slice)
    }
}
