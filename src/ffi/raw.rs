//! Raw Win32 GDI bindings.
//!
//! Thin shims over the `windows` crate so the rest of the crate only deals
//! in the handle types from [`super::handles`].

use windows::Win32::Graphics::Gdi::{
    DeleteObject, GetObjectType, HBITMAP, HBRUSH, HFONT, HGDIOBJ, HPALETTE, HPEN, HRGN,
};

use super::handles::*;

/// Macro to convert between our handle types and the `windows` crate's.
macro_rules! impl_win32_conversions {
    ($($ours:ident <=> $theirs:ident),* $(,)?) => {
        $(
            impl From<$theirs> for $ours {
                #[inline]
                fn from(h: $theirs) -> Self {
                    $ours::from_ptr(h.0)
                }
            }

            impl From<$ours> for $theirs {
                #[inline]
                fn from(h: $ours) -> Self {
                    $theirs(h.as_ptr())
                }
            }
        )*
    };
}

impl_win32_conversions! {
    HGdiObj <=> HGDIOBJ,
    HRgn <=> HRGN,
    HPen <=> HPEN,
    HBrush <=> HBRUSH,
    HFont <=> HFONT,
    HBitmap <=> HBITMAP,
    HPalette <=> HPALETTE,
}

/// Delete a GDI object. Returns `false` if the platform rejected the handle.
///
/// # Safety
///
/// `handle` must not be selected into a device context and must not be
/// used again by anyone after this call.
pub unsafe fn delete_object(handle: HGdiObj) -> bool {
    DeleteObject(HGDIOBJ::from(handle)).as_bool()
}

/// Query the object-type code of a GDI handle; 0 if the handle is invalid.
pub fn object_type(handle: HGdiObj) -> u32 {
    // SAFETY: GetObjectType only inspects the handle table and tolerates
    // stale or null handles.
    unsafe { GetObjectType(HGDIOBJ::from(handle)) }
}
