use crate::traits::comparable::Comparable;
use core::fmt::{Debug, Display, Formatter};
use core::ops::Deref;

/// Compares the wrapped value structurally through `==`.
///
/// Lets structural equality flow into APIs that expect `PartialEq`, for
/// example `assert_eq!(Structural(a), Structural(b))`.
pub struct Structural<T>(pub T);

impl<T> Structural<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Comparable> PartialEq for Structural<T> {
    fn eq(&self, other: &Self) -> bool {
        crate::equal(&self.0, &other.0)
    }
}

impl<T: Comparable> PartialEq<T> for Structural<T> {
    fn eq(&self, other: &T) -> bool {
        crate::equal(&self.0, other)
    }
}

impl<T> Deref for Structural<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: Debug> Debug for Structural<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        T::fmt(&self.0, f)
    }
}

impl<T: Display> Display for Structural<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        T::fmt(&self.0, f)
    }
}
