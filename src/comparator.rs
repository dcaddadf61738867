use alloc::sync::Arc;
use core::fmt::{Debug, Formatter};

/// A synthesized structural equality function for `T`.
///
/// Pure and free of interior state, so it can be shared across threads and
/// kept for as long as needed. Clones share the same function.
pub struct Comparator<T: ?Sized> {
    inner: Arc<dyn Fn(&T, &T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Comparator<T> {
    pub fn new(compare: impl Fn(&T, &T) -> bool + Send + Sync + 'static) -> Self {
        Comparator {
            inner: Arc::new(compare),
        }
    }

    pub fn compare(&self, a: &T, b: &T) -> bool {
        (self.inner)(a, b)
    }

    /// Whether both handles share the same synthesized function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: ?Sized> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Comparator {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> Debug for Comparator<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Comparator<{}>", core::any::type_name::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::Comparator;

    #[test]
    fn test_compare() {
        let same_parity = Comparator::new(|a: &u8, b: &u8| a % 2 == b % 2);
        assert!(same_parity.compare(&1, &3));
        assert!(!same_parity.compare(&1, &2));
    }

    #[test]
    fn test_clones_share_function() {
        let comparator = Comparator::new(|a: &u8, b: &u8| a == b);
        let clone = comparator.clone();
        assert!(comparator.ptr_eq(&clone));
        assert!(!comparator.ptr_eq(&Comparator::new(|a: &u8, b: &u8| a == b)));
        assert_eq!(format!("{clone:?}"), "Comparator<u8>");
    }
}
