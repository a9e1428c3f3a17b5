use std::{fmt, rc::Rc};

/// Compares an `Rc` by the allocation it points at, not by value.
///
/// Used as a memo key for inputs whose identity is the dependency (the data
/// slice, a callback), so a new allocation invalidates the cache even when
/// its contents are equal and no deep comparison ever runs.
pub struct RcKey<T: ?Sized>(Rc<T>);

impl<T: ?Sized> RcKey<T> {
    pub fn new(rc: &Rc<T>) -> Self {
        Self(Rc::clone(rc))
    }

    pub fn get(&self) -> &Rc<T> {
        &self.0
    }
}

impl<T: ?Sized> Clone for RcKey<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for RcKey<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Eq for RcKey<T> {}

impl<T: ?Sized> fmt::Debug for RcKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RcKey({:p})", Rc::as_ptr(&self.0).cast::<()>())
    }
}
