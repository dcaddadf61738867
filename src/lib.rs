//! Synthesized structural equality.
//!
//! For every type that derives [`StructuralEq`], a comparator is assembled on
//! first use from the type's field layout: each field is compared with the
//! cheapest equality it supports (`==`, a same-type `structural_eq`, or an
//! identity fallback), the checks are joined into one short-circuiting
//! conjunction, and the result is cached for the rest of the process.
//!
//! ```
//! use fieldwise::StructuralEq;
//!
//! #[derive(StructuralEq, Debug)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! assert!(fieldwise::equal(&Point { x: 1, y: 2 }, &Point { x: 1, y: 2 }));
//! assert!(!fieldwise::equal(&Point { x: 1, y: 2 }, &Point { x: 3, y: 2 }));
//! ```
extern crate alloc;
extern crate self as fieldwise;

pub mod assembler;
pub mod cache;
pub mod comparator;
pub mod descriptor;
pub mod error;
pub mod logger;
pub mod strategy;
pub mod structural;
pub mod traits;

#[doc(hidden)]
pub mod __private;

pub use comparator::Comparator;
pub use descriptor::{ShapeCategory, TypeDescriptor};
pub use error::IntrospectionError;
pub use fieldwise_macros::StructuralEq;
pub use strategy::EqualityStrategy;
pub use structural::Structural;
pub use traits::{
    comparable::Comparable, handle::Handle, reflect::Reflect,
    structural_eq::StructuralEq,
};

use log::error;

/// Returns the cached comparator for `S`, building it on first request.
pub fn comparator<S: Comparable>() -> Result<Comparator<S>, IntrospectionError> {
    cache::get::<S>()
}

/// Builds a fresh descriptor of `S` without touching the comparator cache.
pub fn describe<S: Comparable>() -> Result<TypeDescriptor<S>, IntrospectionError>
{
    TypeDescriptor::build()
}

/// Compares `a` and `b` field by field, reporting introspection failures.
pub fn try_equal<S: Comparable>(
    a: &S,
    b: &S,
) -> Result<bool, IntrospectionError> {
    Ok(comparator::<S>()?.compare(a, b))
}

/// Compares `a` and `b` field by field.
///
/// # Panics
///
/// Panics if the field layout of `S` cannot be introspected. Use
/// [`try_equal`] to handle that case.
pub fn equal<S: Comparable>(a: &S, b: &S) -> bool {
    match try_equal(a, b) {
        Ok(equal) => equal,
        Err(err) => {
            error!("Structural comparison failed: {err}");
            panic!("{err}");
        }
    }
}

/// Like [`equal`], for call sites where either side may be missing.
pub fn equal_generic<S: Comparable>(a: Option<&S>, b: Option<&S>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => equal(a, b),
        _ => false,
    }
}
