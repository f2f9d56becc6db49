//! Handle types for opaque references to GDI objects.
//!
//! Each handle type is a transparent newtype around the platform's
//! pointer-sized handle value, so it crosses the FFI boundary unchanged.

use std::ffi::c_void;
use std::ptr;

use crate::types::ObjectKind;

/// A raw GDI handle that can be widened to the generic object handle and
/// narrowed back from it.
///
/// Narrowing through [`GdiHandle::from_object`] is a reinterpretation only.
/// Nothing checks that the object really is of the narrower kind; use
/// [`ScopedHandle::try_as`](crate::ScopedHandle::try_as) when that matters.
pub trait GdiHandle: Copy {
    /// Kind of object this handle names, or `None` for the generic handle.
    const KIND: Option<ObjectKind>;

    /// Reinterpret a generic object handle as this handle type.
    fn from_object(obj: HGdiObj) -> Self;

    /// Widen this handle to the generic object handle.
    fn into_object(self) -> HGdiObj;
}

/// Macro to define a handle type.
macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(*mut c_void);

        impl $name {
            /// Create a null handle.
            #[inline]
            pub const fn null() -> Self {
                Self(ptr::null_mut())
            }

            /// Wrap a raw handle value as returned by the platform.
            #[inline]
            pub const fn from_ptr(raw: *mut c_void) -> Self {
                Self(raw)
            }

            /// Wrap a handle given by its numeric value.
            #[inline]
            pub fn from_addr(addr: usize) -> Self {
                Self(addr as *mut c_void)
            }

            /// The raw handle value.
            #[inline]
            pub const fn as_ptr(self) -> *mut c_void {
                self.0
            }

            /// The numeric value of the handle.
            #[inline]
            pub fn addr(self) -> usize {
                self.0 as usize
            }

            /// Check if this handle is null.
            #[inline]
            pub fn is_null(self) -> bool {
                self.0.is_null()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::null()
            }
        }

        impl GdiHandle for $name {
            const KIND: Option<ObjectKind> = $kind;

            #[inline]
            fn from_object(obj: HGdiObj) -> Self {
                Self(obj.as_ptr())
            }

            #[inline]
            fn into_object(self) -> HGdiObj {
                HGdiObj::from_ptr(self.0)
            }
        }
    };
}

define_handle!(
    /// Generic GDI object handle (`HGDIOBJ`).
    HGdiObj => None
);
define_handle!(
    /// Region handle (`HRGN`).
    HRgn => Some(ObjectKind::Region)
);
define_handle!(
    /// Pen handle (`HPEN`), cosmetic or extended.
    HPen => Some(ObjectKind::Pen)
);
define_handle!(
    /// Brush handle (`HBRUSH`).
    HBrush => Some(ObjectKind::Brush)
);
define_handle!(
    /// Logical font handle (`HFONT`).
    HFont => Some(ObjectKind::Font)
);
define_handle!(
    /// Bitmap handle (`HBITMAP`).
    HBitmap => Some(ObjectKind::Bitmap)
);
define_handle!(
    /// Logical palette handle (`HPALETTE`).
    HPalette => Some(ObjectKind::Palette)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        assert!(HGdiObj::default().is_null());
        assert!(HRgn::default().is_null());
        assert_eq!(HBrush::null().addr(), 0);
    }

    #[test]
    fn test_widen_and_narrow_keep_value() {
        let rgn = HRgn::from_addr(0x2a);
        let obj = rgn.into_object();
        assert_eq!(obj.addr(), 0x2a);
        assert_eq!(HRgn::from_object(obj), rgn);
        assert_eq!(HFont::from_object(obj).addr(), 0x2a);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(HGdiObj::KIND, None);
        assert_eq!(HRgn::KIND, Some(ObjectKind::Region));
        assert_eq!(HPalette::KIND, Some(ObjectKind::Palette));
    }
}
