//! The platform primitives a [`ScopedHandle`](crate::ScopedHandle) consumes.

use crate::ffi::HGdiObj;

/// Provider of the release primitive for GDI objects.
///
/// [`Gdi`] is the real Win32 implementation. Other implementations can stand
/// in for it, for example to record releases in tests or to track leaks.
pub trait Platform {
    /// Free the object named by `handle`. Returns `false` if the platform
    /// reported a failure.
    ///
    /// # Safety
    ///
    /// `handle` is non-null and owned by the caller, which gives up
    /// ownership with this call.
    unsafe fn delete_object(&self, handle: HGdiObj) -> bool;

    /// Object-type code of `handle` (`GetObjectType` encoding), or 0 if the
    /// object cannot be identified.
    fn object_type(&self, handle: HGdiObj) -> u32 {
        let _ = handle;
        0
    }
}

impl<P: Platform + ?Sized> Platform for &P {
    unsafe fn delete_object(&self, handle: HGdiObj) -> bool {
        (**self).delete_object(handle)
    }

    fn object_type(&self, handle: HGdiObj) -> u32 {
        (**self).object_type(handle)
    }
}

/// The Win32 GDI (`DeleteObject` / `GetObjectType`).
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gdi;

#[cfg(windows)]
impl Platform for Gdi {
    unsafe fn delete_object(&self, handle: HGdiObj) -> bool {
        crate::ffi::delete_object(handle)
    }

    fn object_type(&self, handle: HGdiObj) -> u32 {
        crate::ffi::object_type(handle)
    }
}
