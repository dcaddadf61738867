//! Capability probes used by `#[derive(StructuralEq)]`.
//!
//! Each probe has two impls: one on `Probe<F>` bounded by the capability and
//! an unbounded fallback on `&Probe<F>`. Calling the method on `&Probe<F>`
//! resolves to the bounded impl when `F` has the capability and to the
//! fallback otherwise, which only works where `F` is a concrete type. That is
//! why the probes are expanded in place by [`__field_equality!`] instead of
//! being called from a generic function.
//!
//! Probe method names must not clash with methods of public traits that may
//! be in scope at the expansion site (`Handle::referent` is implemented for
//! every `&T`), hence the `probe_` prefix.
use crate::traits::handle::Handle;
use crate::traits::structural_eq::StructuralEq;
use core::marker::PhantomData;

pub struct Probe<F>(PhantomData<fn() -> F>);

impl<F> Probe<F> {
    pub const fn new() -> Self {
        Probe(PhantomData)
    }
}

impl<F> Default for Probe<F> {
    fn default() -> Self {
        Probe::new()
    }
}

pub trait NativeOperatorProbe<F> {
    fn probe_native_operator(&self) -> Option<fn(&F, &F) -> bool>;
}

impl<F: PartialEq> NativeOperatorProbe<F> for Probe<F> {
    fn probe_native_operator(&self) -> Option<fn(&F, &F) -> bool> {
        let eq: fn(&F, &F) -> bool = <F as PartialEq>::eq;
        Some(eq)
    }
}

pub trait NoNativeOperatorProbe<F> {
    fn probe_native_operator(&self) -> Option<fn(&F, &F) -> bool>;
}

impl<F> NoNativeOperatorProbe<F> for &Probe<F> {
    fn probe_native_operator(&self) -> Option<fn(&F, &F) -> bool> {
        None
    }
}

pub trait StronglyTypedEqualsProbe<F> {
    fn probe_strongly_typed_equals(&self) -> Option<fn(&F, &F) -> bool>;
}

impl<F: StructuralEq> StronglyTypedEqualsProbe<F> for Probe<F> {
    fn probe_strongly_typed_equals(&self) -> Option<fn(&F, &F) -> bool> {
        let eq: fn(&F, &F) -> bool = <F as StructuralEq>::structural_eq;
        Some(eq)
    }
}

pub trait NoStronglyTypedEqualsProbe<F> {
    fn probe_strongly_typed_equals(&self) -> Option<fn(&F, &F) -> bool>;
}

impl<F> NoStronglyTypedEqualsProbe<F> for &Probe<F> {
    fn probe_strongly_typed_equals(&self) -> Option<fn(&F, &F) -> bool> {
        None
    }
}

pub trait HandleProbe<F> {
    fn probe_referent(&self) -> Option<fn(&F) -> Option<*const ()>>;
}

impl<F: Handle> HandleProbe<F> for Probe<F> {
    fn probe_referent(&self) -> Option<fn(&F) -> Option<*const ()>> {
        let referent: fn(&F) -> Option<*const ()> = <F as Handle>::referent;
        Some(referent)
    }
}

pub trait NoHandleProbe<F> {
    fn probe_referent(&self) -> Option<fn(&F) -> Option<*const ()>>;
}

impl<F> NoHandleProbe<F> for &Probe<F> {
    fn probe_referent(&self) -> Option<fn(&F) -> Option<*const ()>> {
        None
    }
}

/// Collects the [`FieldEquality`](crate::descriptor::FieldEquality) of a
/// concrete field type.
#[doc(hidden)]
#[macro_export]
macro_rules! __field_equality {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::__private::{
            HandleProbe as _, NativeOperatorProbe as _, NoHandleProbe as _,
            NoNativeOperatorProbe as _, NoStronglyTypedEqualsProbe as _,
            StronglyTypedEqualsProbe as _,
        };
        $crate::descriptor::FieldEquality::<$ty> {
            native: (&$crate::__private::Probe::<$ty>::new()).probe_native_operator(),
            typed: (&$crate::__private::Probe::<$ty>::new())
                .probe_strongly_typed_equals(),
            referent: (&$crate::__private::Probe::<$ty>::new()).probe_referent(),
        }
    }};
}
