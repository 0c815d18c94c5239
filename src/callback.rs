use std::{
    fmt::{Debug, Formatter},
    rc::Rc,
};

/// A user callback.
///
/// Clones share the underlying closure and compare equal. Two callbacks created from
/// separate closures never compare equal, even if the closures are identical.
pub struct Callback<T: ?Sized> {
    f: Rc<dyn Fn(&T)>,
}

impl<T: ?Sized> Callback<T> {
    pub fn new<F: Fn(&T) + 'static>(f: F) -> Self {
        Self { f: Rc::new(f) }
    }

    pub fn call(&self, data: &T) {
        (self.f)(data)
    }
}

impl<T: ?Sized> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self { f: self.f.clone() }
    }
}

impl<T: ?Sized> PartialEq for Callback<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.f, &other.f)
    }
}

impl<T: ?Sized> Eq for Callback<T> {}

impl<T: ?Sized> Debug for Callback<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Callback({:p})", Rc::as_ptr(&self.f) as *const u8)
    }
}
