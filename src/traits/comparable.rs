use crate::descriptor::ShapeCategory;
use crate::traits::reflect::Reflect;
use alloc::rc::Rc;
use alloc::sync::Arc;

/// A type a comparator can be requested for.
///
/// `Target` is the struct whose fields are compared, `SHAPE` decides how
/// missing values are treated at the top level. Only the statically named
/// type is consulted: comparing two values through `Comparable for Base`
/// never looks at fields of whatever struct the values were borrowed from.
pub trait Comparable: 'static {
    type Target: Reflect;
    const SHAPE: ShapeCategory;

    /// The compared struct, `None` for a null handle or an absent value.
    fn target(&self) -> Option<&Self::Target>;

    /// Whether both sides are present at every wrapping level, so that
    /// `None` and `Some(None)` stay distinct.
    fn same_presence(&self, _other: &Self) -> bool {
        true
    }
}

impl<X: Comparable> Comparable for Option<X> {
    type Target = X::Target;
    const SHAPE: ShapeCategory = match X::SHAPE {
        ShapeCategory::Value => ShapeCategory::NullableValue,
        shape => shape,
    };

    fn target(&self) -> Option<&Self::Target> {
        self.as_ref().and_then(X::target)
    }

    fn same_presence(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same_presence(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<X: Comparable> Comparable for Box<X> {
    type Target = X::Target;
    const SHAPE: ShapeCategory = ShapeCategory::Reference;

    fn target(&self) -> Option<&Self::Target> {
        (**self).target()
    }

    fn same_presence(&self, other: &Self) -> bool {
        (**self).same_presence(other)
    }
}

impl<X: Comparable> Comparable for Rc<X> {
    type Target = X::Target;
    const SHAPE: ShapeCategory = ShapeCategory::Reference;

    fn target(&self) -> Option<&Self::Target> {
        (**self).target()
    }

    fn same_presence(&self, other: &Self) -> bool {
        (**self).same_presence(other)
    }
}

impl<X: Comparable> Comparable for Arc<X> {
    type Target = X::Target;
    const SHAPE: ShapeCategory = ShapeCategory::Reference;

    fn target(&self) -> Option<&Self::Target> {
        (**self).target()
    }

    fn same_presence(&self, other: &Self) -> bool {
        (**self).same_presence(other)
    }
}
