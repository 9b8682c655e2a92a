use crate::{canonical_empty, CanonicalEmpty};

/// Extension for optional references to containers.
///
/// Works for any `CanonicalEmpty` type, not only containers;
/// `None::<&u32>.or_empty()` is `&0`.
pub trait OrEmpty {
    type Output;

    /// Returns the contained reference,
    /// or the canonical empty instance if there isn't one.
    fn or_empty(self) -> Self::Output;
}

impl<'a, C: CanonicalEmpty> OrEmpty for Option<&'a C> {
    type Output = &'a C;

    #[inline]
    fn or_empty(self) -> &'a C {
        match self {
            Some(container) => container,
            None => canonical_empty(),
        }
    }
}
