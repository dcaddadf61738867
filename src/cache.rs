//! Process-wide comparator cache.
//!
//! One comparator per distinct type, built on first request and kept for the
//! rest of the process. Builds run outside the lock: concurrent first
//! requests for the same type may build redundantly, the first insert wins
//! and every caller ends up with that comparator.
use crate::comparator::Comparator;
use crate::descriptor::TypeDescriptor;
use crate::error::IntrospectionError;
use crate::traits::comparable::Comparable;
use core::any::{Any, TypeId, type_name};
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

lazy_static::lazy_static! {
    static ref COMPARATORS: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>> =
        RwLock::new(HashMap::new());
}

/// Returns the comparator for `S`, building and caching it on first use.
/// Failed builds are reported and not cached.
pub fn get<S: Comparable>() -> Result<Comparator<S>, IntrospectionError> {
    let key = TypeId::of::<S>();
    if let Some(comparator) = lookup::<S>(key) {
        return Ok(comparator);
    }

    debug!("Building comparator for `{}`", type_name::<S>());
    let built = TypeDescriptor::<S>::build()
        .inspect_err(|err| {
            warn!("Cannot build comparator for `{}`: {err}", type_name::<S>())
        })?
        .into_comparator();

    let mut comparators =
        COMPARATORS.write().unwrap_or_else(PoisonError::into_inner);
    let cached = comparators
        .entry(key)
        .or_insert_with(|| Box::new(built.clone()) as Box<dyn Any + Send + Sync>)
        .downcast_ref::<Comparator<S>>()
        .cloned();
    Ok(cached.unwrap_or(built))
}

/// Number of cached comparators.
pub fn len() -> usize {
    COMPARATORS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .len()
}

fn lookup<S: Comparable>(key: TypeId) -> Option<Comparator<S>> {
    COMPARATORS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
        .and_then(|comparator| comparator.downcast_ref::<Comparator<S>>())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::{get, len};
    use crate::descriptor::{Fields, ShapeCategory};
    use crate::error::IntrospectionError;
    use crate::traits::comparable::Comparable;
    use crate::traits::reflect::Reflect;
    use crate::StructuralEq;

    #[derive(StructuralEq)]
    struct Cached {
        value: u8,
    }

    struct Broken;

    impl Reflect for Broken {
        fn fields() -> Result<Fields<Self>, IntrospectionError> {
            Err(IntrospectionError::inaccessible::<Broken>("no layout"))
        }
    }

    impl Comparable for Broken {
        type Target = Self;
        const SHAPE: ShapeCategory = ShapeCategory::Value;

        fn target(&self) -> Option<&Self> {
            Some(self)
        }
    }

    #[test]
    fn test_referentially_stable() {
        let first = get::<Cached>().unwrap();
        let second = get::<Cached>().unwrap();
        assert!(first.ptr_eq(&second));
        assert!(first.compare(&Cached { value: 1 }, &Cached { value: 1 }));
        assert!(len() >= 1);
    }

    #[test]
    fn test_wrappers_are_cached_separately() {
        let plain = get::<Cached>().unwrap();
        let optional = get::<Option<Cached>>().unwrap();
        assert!(optional.compare(&None, &None));
        assert!(plain.compare(&Cached { value: 2 }, &Cached { value: 2 }));
        assert!(get::<Option<Cached>>().unwrap().ptr_eq(&optional));
    }

    #[test]
    fn test_failures_are_not_cached() {
        let err = get::<Broken>().unwrap_err();
        assert!(matches!(err, IntrospectionError::Inaccessible { .. }));
        assert_eq!(get::<Broken>().unwrap_err(), err);
    }
}
