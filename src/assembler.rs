use crate::comparator::Comparator;
use crate::descriptor::{ShapeCategory, TypeDescriptor};
use crate::strategy::field_checks;
use crate::traits::comparable::Comparable;

/// Joins the field checks of `descriptor` into one short-circuiting
/// conjunction and applies the null handling of its shape.
///
/// The returned comparator only owns the compiled checks, the descriptor can
/// be dropped afterwards.
pub fn assemble<S: Comparable>(descriptor: &TypeDescriptor<S>) -> Comparator<S> {
    let checks = field_checks(descriptor.fields());
    let fieldwise = move |a: &S::Target, b: &S::Target| {
        checks.iter().all(|check| check(a, b))
    };

    match descriptor.shape() {
        ShapeCategory::Value => {
            Comparator::new(move |a: &S, b: &S| match (a.target(), b.target()) {
                (Some(a), Some(b)) => fieldwise(a, b),
                // value shapes always project onto themselves
                _ => false,
            })
        }
        ShapeCategory::Reference | ShapeCategory::NullableValue => {
            Comparator::new(move |a: &S, b: &S| {
                if !a.same_presence(b) {
                    return false;
                }
                match (a.target(), b.target()) {
                    (None, None) => true,
                    (Some(a), Some(b)) => fieldwise(a, b),
                    _ => false,
                }
            })
        }
    }
}
