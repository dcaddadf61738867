use crate::strategy::EqualityStrategy;
use alloc::sync::Arc;
use core::fmt::{Debug, Formatter};

/// A compiled equality check for one field of `T`.
pub type FieldCheck<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Equality capabilities of a field type `F`.
///
/// Collected by [`__field_equality!`](crate::__field_equality) where `F` is
/// spelled out, since only there the compiler knows which traits it has.
pub struct FieldEquality<F> {
    /// `F: PartialEq`
    pub native: Option<fn(&F, &F) -> bool>,
    /// `F: StructuralEq`
    pub typed: Option<fn(&F, &F) -> bool>,
    /// `F: Handle`
    pub referent: Option<fn(&F) -> Option<*const ()>>,
}

impl<F> FieldEquality<F> {
    /// No capabilities at all, every check falls back to storage identity.
    pub const fn opaque() -> Self {
        FieldEquality {
            native: None,
            typed: None,
            referent: None,
        }
    }
}

impl<F> Clone for FieldEquality<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for FieldEquality<F> {}

/// Turns a strategy into a check over the owning struct.
trait FieldAccess<T>: Send + Sync {
    fn check(&self, strategy: EqualityStrategy) -> FieldCheck<T>;
}

/// A field declared directly on `T`.
struct Declared<T, F> {
    access: fn(&T) -> &F,
    equality: FieldEquality<F>,
}

impl<T: 'static, F: 'static> FieldAccess<T> for Declared<T, F> {
    fn check(&self, strategy: EqualityStrategy) -> FieldCheck<T> {
        let access = self.access;
        let FieldEquality {
            native,
            typed,
            referent,
        } = self.equality;
        match (strategy, native, typed, referent) {
            (EqualityStrategy::NativeOperator, Some(eq), _, _)
            | (EqualityStrategy::StronglyTypedEquals, _, Some(eq), _) => {
                Arc::new(move |a: &T, b: &T| eq(access(a), access(b)))
            }
            (EqualityStrategy::NullGuardedFallback, _, _, Some(referent)) => {
                Arc::new(move |a: &T, b: &T| {
                    same_referent(referent(access(a)), referent(access(b)))
                })
            }
            _ => Arc::new(move |a: &T, b: &T| core::ptr::eq(access(a), access(b))),
        }
    }
}

/// A field reached through a flattened ancestor `B` of `T`.
struct Inherited<T, B> {
    project: fn(&T) -> &B,
    inner: Arc<dyn FieldAccess<B>>,
}

impl<T: 'static, B: 'static> FieldAccess<T> for Inherited<T, B> {
    fn check(&self, strategy: EqualityStrategy) -> FieldCheck<T> {
        let project = self.project;
        let inner = self.inner.check(strategy);
        Arc::new(move |a: &T, b: &T| inner(project(a), project(b)))
    }
}

fn same_referent(a: Option<*const ()>, b: Option<*const ()>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => core::ptr::eq(a, b),
        _ => false,
    }
}

/// One field of `T` as seen by the strategy selector.
pub struct FieldDescriptor<T> {
    name: String,
    declared_type: &'static str,
    is_value_type: bool,
    has_native_equality_operator: bool,
    has_strongly_typed_equals_method: bool,
    access: Arc<dyn FieldAccess<T>>,
}

impl<T: 'static> FieldDescriptor<T> {
    pub fn new<F: 'static>(
        name: impl Into<String>,
        access: fn(&T) -> &F,
        equality: FieldEquality<F>,
    ) -> Self {
        FieldDescriptor {
            name: name.into(),
            declared_type: core::any::type_name::<F>(),
            is_value_type: equality.referent.is_none(),
            has_native_equality_operator: equality.native.is_some(),
            has_strongly_typed_equals_method: equality.typed.is_some(),
            access: Arc::new(Declared { access, equality }),
        }
    }

    /// Re-roots this field onto `D`, which reaches `T` through `project`.
    pub(crate) fn nest_under<D: 'static>(
        self,
        ancestor: &str,
        project: fn(&D) -> &T,
    ) -> FieldDescriptor<D> {
        FieldDescriptor {
            name: format!("{ancestor}.{}", self.name),
            declared_type: self.declared_type,
            is_value_type: self.is_value_type,
            has_native_equality_operator: self.has_native_equality_operator,
            has_strongly_typed_equals_method: self
                .has_strongly_typed_equals_method,
            access: Arc::new(Inherited {
                project,
                inner: self.access,
            }),
        }
    }

    /// Compiles the check for `strategy`. Strategies the field type lacks
    /// the capability for degrade to storage identity.
    pub fn check(&self, strategy: EqualityStrategy) -> FieldCheck<T> {
        self.access.check(strategy)
    }
}

impl<T> FieldDescriptor<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_type(&self) -> &'static str {
        self.declared_type
    }

    pub fn is_value_type(&self) -> bool {
        self.is_value_type
    }

    pub fn has_native_equality_operator(&self) -> bool {
        self.has_native_equality_operator
    }

    pub fn has_strongly_typed_equals_method(&self) -> bool {
        self.has_strongly_typed_equals_method
    }
}

impl<T> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        FieldDescriptor {
            name: self.name.clone(),
            declared_type: self.declared_type,
            is_value_type: self.is_value_type,
            has_native_equality_operator: self.has_native_equality_operator,
            has_strongly_typed_equals_method: self
                .has_strongly_typed_equals_method,
            access: Arc::clone(&self.access),
        }
    }
}

impl<T> Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("declared_type", &self.declared_type)
            .field("is_value_type", &self.is_value_type)
            .field(
                "has_native_equality_operator",
                &self.has_native_equality_operator,
            )
            .field(
                "has_strongly_typed_equals_method",
                &self.has_strongly_typed_equals_method,
            )
            .finish_non_exhaustive()
    }
}
