use alloc::rc::Rc;
use alloc::sync::Arc;

/// Pointer-like field types whose identity is the address they point to.
///
/// Fields of these types that support neither `==` nor `structural_eq` are
/// compared by referent, with `None` acting as the null handle.
pub trait Handle {
    /// Address of the referenced value, `None` for a null handle.
    fn referent(&self) -> Option<*const ()>;
}

impl<T: ?Sized> Handle for &T {
    fn referent(&self) -> Option<*const ()> {
        Some((*self as *const T).cast())
    }
}

impl<T: ?Sized> Handle for Box<T> {
    fn referent(&self) -> Option<*const ()> {
        Some((&**self as *const T).cast())
    }
}

impl<T: ?Sized> Handle for Rc<T> {
    fn referent(&self) -> Option<*const ()> {
        Some(Rc::as_ptr(self).cast())
    }
}

impl<T: ?Sized> Handle for Arc<T> {
    fn referent(&self) -> Option<*const ()> {
        Some(Arc::as_ptr(self).cast())
    }
}

impl<H: Handle> Handle for Option<H> {
    fn referent(&self) -> Option<*const ()> {
        self.as_ref().and_then(Handle::referent)
    }
}
