//! FFI bindings to Win32 GDI.
//!
//! This module contains the raw handle types and, on Windows, the low-level
//! GDI calls. Users should prefer [`ScopedHandle`](crate::ScopedHandle).

pub mod handles;
#[cfg(windows)]
pub mod raw;

pub use handles::*;
#[cfg(windows)]
pub use raw::*;
