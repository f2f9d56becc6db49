//! Exclusive ownership of GDI object handles.
//!
//! GDI objects (regions, pens, brushes, fonts, bitmaps, palettes) are a
//! limited, process-wide resource. A long-running process that forgets to
//! delete them eventually stops being able to draw at all. This crate
//! provides [`ScopedHandle`], which owns one such handle and deletes it
//! exactly once: on drop, on reassignment, or on an explicit
//! [`release`](ScopedHandle::release).
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(windows)]
//! # fn main() -> gdiobj::Result<()> {
//! use gdiobj::{GdiObject, HRgn};
//! use windows::Win32::Graphics::Gdi::CreateRectRgn;
//!
//! // Adopt the region; a null result becomes `Error::InvalidHandle`.
//! let region = unsafe { GdiObject::checked(HRgn::from(CreateRectRgn(0, 0, 100, 100))) }?;
//!
//! // Borrow it for calls that only read the handle.
//! let rgn: HRgn = region.try_as()?;
//! println!("region handle: {:?}", rgn);
//!
//! // `DeleteObject` runs here, when `region` goes out of scope.
//! # Ok(())
//! # }
//! # #[cfg(not(windows))]
//! # fn main() {}
//! ```
//!
//! # Threading
//!
//! Handles wrap raw pointers, so a [`ScopedHandle`] is neither `Send` nor
//! `Sync`. Coordination across threads is up to the caller.

pub mod error;
mod ffi;
pub mod platform;
pub mod scoped;
pub mod types;

// Re-export main types at the crate root
pub use error::{Error, Result};
pub use ffi::{GdiHandle, HBitmap, HBrush, HFont, HGdiObj, HPalette, HPen, HRgn};
#[cfg(windows)]
pub use platform::Gdi;
pub use platform::Platform;
#[cfg(windows)]
pub use scoped::GdiObject;
pub use scoped::ScopedHandle;
pub use types::ObjectKind;
