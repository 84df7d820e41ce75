/// Reference-like values that can hold nothing.
///
/// Only types that can actually be null implement this trait, so
/// [`check_not_null`](crate::convert::check_not_null) cannot be called on a
/// plain value that is never empty.
///
/// # Examples
///
/// ```
/// use fault_rail::traits::Nullable;
///
/// let present: Option<&str> = Some("config");
/// assert_eq!(present.into_non_null(), Some("config"));
///
/// let dangling: *const u8 = std::ptr::null();
/// assert!(dangling.into_non_null().is_none());
/// ```
pub trait Nullable {
    /// What is handed back once the value is known to be present.
    type Target;

    /// Returns the value if it is present, `None` if it is null.
    fn into_non_null(self) -> Option<Self::Target>;
}

impl<T> Nullable for Option<T> {
    type Target = T;

    #[inline]
    fn into_non_null(self) -> Option<T> {
        self
    }
}

impl<T: ?Sized> Nullable for *const T {
    type Target = *const T;

    #[inline]
    fn into_non_null(self) -> Option<*const T> {
        (!self.is_null()).then_some(self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    type Target = *mut T;

    #[inline]
    fn into_non_null(self) -> Option<*mut T> {
        (!self.is_null()).then_some(self)
    }
}
