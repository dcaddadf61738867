//! Per-field strategy selection.
//!
//! Rules are tried in order and the first one the field type supports wins:
//!
//! 1. [`EqualityStrategy::NativeOperator`]: the type implements `PartialEq`.
//! 2. [`EqualityStrategy::StronglyTypedEquals`]: the type implements
//!    [`StructuralEq`](crate::StructuralEq), whose method takes exactly `&Self`.
//! 3. A fallback that compares identities. Handles (`&T`, `Box`, `Rc`, `Arc`
//!    and `Option`s of them) compare their referents behind a null guard,
//!    every other field only equals itself.
//!
//! The fallback always applies, so selection never fails. A field without
//! any equality contract therefore degrades to identity for that field only.
use crate::descriptor::{FieldCheck, FieldDescriptor, Fields};
use log::trace;
use strum::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum EqualityStrategy {
    /// `a == b`
    NativeOperator,
    /// `a.structural_eq(b)`
    StronglyTypedEquals,
    /// Storage identity of a value-typed field.
    GenericFallback,
    /// Both null equal, one null unequal, otherwise referent identity.
    NullGuardedFallback,
}

pub fn select_strategy<T>(field: &FieldDescriptor<T>) -> EqualityStrategy {
    if field.has_native_equality_operator() {
        EqualityStrategy::NativeOperator
    } else if field.has_strongly_typed_equals_method() {
        EqualityStrategy::StronglyTypedEquals
    } else if field.is_value_type() {
        EqualityStrategy::GenericFallback
    } else {
        EqualityStrategy::NullGuardedFallback
    }
}

/// Compiles one check per field, keeping the field order.
pub(crate) fn field_checks<T: 'static>(fields: &Fields<T>) -> Vec<FieldCheck<T>> {
    fields
        .iter()
        .map(|field| {
            let strategy = select_strategy(field);
            trace!(
                "Field `{}: {}` uses {strategy}",
                field.name(),
                field.declared_type()
            );
            field.check(strategy)
        })
        .collect()
}
