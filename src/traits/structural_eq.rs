use alloc::rc::Rc;
use alloc::sync::Arc;

/// Same-type equality. `#[derive(StructuralEq)]` implements it through the
/// synthesized comparator; hand-written impls are picked up the same way
/// when the type is used as a field.
pub trait StructuralEq {
    /// Check if two values are equal in every stored field.
    fn structural_eq(&self, other: &Self) -> bool;
}

#[macro_export]
macro_rules! assert_structural_eq {
    ($left_val:expr, $right_val:expr $(,)?) => {
        match (&$left_val, &$right_val) {
            (left_val, right_val) => {
                if !$crate::equal(left_val, right_val) {
                    core::panic!(
                        "structural equality assertion failed: `(left == right)`\n  left: `{:?}`,\n right: `{:?}`",
                        left_val, right_val
                    );
                }
            }
        }
    };
}

#[macro_export]
macro_rules! assert_structural_ne {
    ($left_val:expr, $right_val:expr $(,)?) => {
        match (&$left_val, &$right_val) {
            (left_val, right_val) => {
                if $crate::equal(left_val, right_val) {
                    core::panic!(
                        "structural inequality assertion failed: `(left != right)`\n  left: `{:?}`,\n right: `{:?}`",
                        left_val, right_val
                    );
                }
            }
        }
    };
}

impl<T: StructuralEq> StructuralEq for Option<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.structural_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: StructuralEq + ?Sized> StructuralEq for Box<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        (**self).structural_eq(other)
    }
}

impl<T: StructuralEq + ?Sized> StructuralEq for Rc<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        (**self).structural_eq(other)
    }
}

impl<T: StructuralEq + ?Sized> StructuralEq for Arc<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        (**self).structural_eq(other)
    }
}
