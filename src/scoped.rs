//! Exclusive ownership of a single GDI object handle.

use std::fmt;
use std::mem;

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::ffi::{GdiHandle, HGdiObj, HRgn};
use crate::platform::Platform;
use crate::types::ObjectKind;

/// Owns zero or one GDI object and deletes it exactly once.
///
/// The object is deleted when the wrapper is dropped, when it is reassigned
/// with [`assign`](Self::assign), or when [`release`](Self::release) is
/// called explicitly. The wrapper cannot be cloned; ownership only moves.
///
/// # Example
///
/// ```
/// use gdiobj::{HGdiObj, HRgn, Platform, ScopedHandle};
///
/// #[derive(Default)]
/// struct Noop;
///
/// impl Platform for Noop {
///     unsafe fn delete_object(&self, _handle: HGdiObj) -> bool {
///         true
///     }
/// }
///
/// let mut region: ScopedHandle<Noop> = unsafe { ScopedHandle::from_raw(HRgn::from_addr(42)) };
/// assert!(region.is_valid());
/// assert_eq!(region.as_region().addr(), 42);
///
/// region.release();
/// assert!(!region.is_valid());
/// assert!(region.as_raw().is_null());
/// ```
pub struct ScopedHandle<P: Platform> {
    handle: HGdiObj,
    platform: P,
}

impl<P: Platform + Default> ScopedHandle<P> {
    /// Create a wrapper that owns nothing.
    pub fn new() -> Self {
        Self::new_in(P::default())
    }

    /// Take ownership of `handle`. Null is accepted and owns nothing.
    ///
    /// # Safety
    ///
    /// The handle must not be owned by anything else: nobody may delete it
    /// independently once it has been moved into the wrapper.
    pub unsafe fn from_raw<H: GdiHandle>(handle: H) -> Self {
        Self::from_raw_in(handle, P::default())
    }

    /// Take ownership of the result of an allocation call, which reports
    /// failure with a null handle.
    ///
    /// # Safety
    ///
    /// Same contract as [`from_raw`](Self::from_raw).
    pub unsafe fn checked<H: GdiHandle>(handle: H) -> Result<Self> {
        Self::checked_in(handle, P::default())
    }
}

impl<P: Platform> ScopedHandle<P> {
    /// Create a wrapper that owns nothing and releases through `platform`.
    pub fn new_in(platform: P) -> Self {
        Self {
            handle: HGdiObj::null(),
            platform,
        }
    }

    /// Take ownership of `handle`, releasing it through `platform`.
    ///
    /// # Safety
    ///
    /// Same contract as [`from_raw`](Self::from_raw).
    pub unsafe fn from_raw_in<H: GdiHandle>(handle: H, platform: P) -> Self {
        let handle = handle.into_object();
        if !handle.is_null() {
            trace!(handle = ?handle, "adopting GDI object");
        }
        Self { handle, platform }
    }

    /// Like [`checked`](Self::checked), releasing through `platform`.
    ///
    /// # Safety
    ///
    /// Same contract as [`from_raw`](Self::from_raw).
    pub unsafe fn checked_in<H: GdiHandle>(handle: H, platform: P) -> Result<Self> {
        let handle = handle.into_object();
        if handle.is_null() {
            return Err(Error::InvalidHandle);
        }
        Ok(Self::from_raw_in(handle, platform))
    }

    /// Delete the owned object, if any, and leave the wrapper empty.
    ///
    /// Calling this on an empty wrapper does nothing. A failure reported by
    /// the platform is logged and otherwise ignored.
    pub fn release(&mut self) {
        if self.handle.is_null() {
            return;
        }

        let handle = mem::take(&mut self.handle);
        debug!(handle = ?handle, "releasing GDI object");
        // SAFETY: the wrapper owned `handle` exclusively and no longer holds it.
        let deleted = unsafe { self.platform.delete_object(handle) };
        if !deleted {
            warn!(handle = ?handle, "platform failed to delete GDI object");
        }
    }

    /// Release the owned object, then take ownership of `handle`.
    ///
    /// Assigning the handle that is already owned keeps it alive.
    ///
    /// # Safety
    ///
    /// Same contract as [`from_raw`](Self::from_raw).
    pub unsafe fn assign<H: GdiHandle>(&mut self, handle: H) {
        let handle = handle.into_object();
        if handle == self.handle {
            return;
        }

        self.release();
        if !handle.is_null() {
            trace!(handle = ?handle, "adopting GDI object");
        }
        self.handle = handle;
    }

    /// The owned handle, or null, for passing to calls that borrow it.
    ///
    /// Ownership stays with the wrapper; the value must not be deleted or
    /// kept past the wrapper's lifetime.
    #[inline]
    pub fn as_raw(&self) -> HGdiObj {
        self.handle
    }

    /// The owned handle reinterpreted as a narrower handle type.
    ///
    /// This is unchecked: nothing verifies that the object is really a `T`.
    /// See [`try_as`](Self::try_as) for the checked variant.
    #[inline]
    pub fn as_typed<T: GdiHandle>(&self) -> T {
        T::from_object(self.handle)
    }

    /// The owned handle viewed as a region, unchecked.
    #[inline]
    pub fn as_region(&self) -> HRgn {
        self.as_typed()
    }

    /// The owned handle as a `T`, after asking the platform whether the
    /// object really is of that kind.
    pub fn try_as<T: GdiHandle>(&self) -> Result<T> {
        if self.handle.is_null() {
            return Err(Error::InvalidHandle);
        }

        let Some(expected) = T::KIND else {
            return Ok(T::from_object(self.handle));
        };

        let actual = ObjectKind::from_code(self.platform.object_type(self.handle));
        match actual {
            Some(kind) if kind.satisfies(expected) => Ok(T::from_object(self.handle)),
            _ => Err(Error::KindMismatch { expected, actual }),
        }
    }

    /// Check if an object is owned.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.handle.is_null()
    }

    /// Move the owned handle out, leaving the wrapper empty. The object is
    /// not deleted; the caller now owns it.
    pub fn take(&mut self) -> HGdiObj {
        mem::take(&mut self.handle)
    }

    /// Consume the wrapper and hand ownership of the handle to the caller
    /// without deleting it.
    pub fn into_raw(mut self) -> HGdiObj {
        self.take()
    }

    /// The platform used to release the handle.
    pub fn platform(&self) -> &P {
        &self.platform
    }
}

impl<P: Platform + Default> Default for ScopedHandle<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Platform> fmt::Debug for ScopedHandle<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedHandle")
            .field("handle", &self.handle)
            .field("valid", &self.is_valid())
            .finish()
    }
}

impl<P: Platform> Drop for ScopedHandle<P> {
    fn drop(&mut self) {
        if self.handle.is_null() {
            return;
        }
        trace!(handle = ?self.handle, "dropping owner of GDI object");
        self.release();
    }
}

/// A GDI object released with `DeleteObject`.
#[cfg(windows)]
pub type GdiObject = ScopedHandle<crate::platform::Gdi>;

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::ffi::{HBrush, HPen};

    #[derive(Default)]
    struct Recorder {
        deleted: RefCell<Vec<usize>>,
        kind: Cell<u32>,
    }

    impl Recorder {
        fn deleted(&self) -> Vec<usize> {
            self.deleted.borrow().clone()
        }
    }

    impl Platform for Recorder {
        unsafe fn delete_object(&self, handle: HGdiObj) -> bool {
            self.deleted.borrow_mut().push(handle.addr());
            true
        }

        fn object_type(&self, _handle: HGdiObj) -> u32 {
            self.kind.get()
        }
    }

    fn adopt(addr: usize, recorder: &Recorder) -> ScopedHandle<&Recorder> {
        unsafe { ScopedHandle::from_raw_in(HGdiObj::from_addr(addr), recorder) }
    }

    #[test]
    fn test_drop_releases_once() {
        let recorder = Recorder::default();
        drop(adopt(42, &recorder));
        assert_eq!(recorder.deleted(), vec![42]);
    }

    #[test]
    fn test_drop_null_releases_nothing() {
        let recorder = Recorder::default();
        drop(adopt(0, &recorder));
        drop(ScopedHandle::new_in(&recorder));
        assert!(recorder.deleted().is_empty());
    }

    #[test]
    fn test_release_scenario() {
        let recorder = Recorder::default();
        let mut w = adopt(42, &recorder);

        assert_eq!(w.as_raw().addr(), 42);
        assert!(w.is_valid());

        w.release();
        assert_eq!(recorder.deleted(), vec![42]);
        assert!(!w.is_valid());
        assert!(w.as_raw().is_null());

        w.release();
        drop(w);
        assert_eq!(recorder.deleted(), vec![42]);
    }

    #[test]
    fn test_assign_releases_previous() {
        let recorder = Recorder::default();
        let mut w = adopt(1, &recorder);

        unsafe { w.assign(HBrush::from_addr(2)) };
        assert_eq!(recorder.deleted(), vec![1]);
        assert_eq!(w.as_raw().addr(), 2);

        drop(w);
        assert_eq!(recorder.deleted(), vec![1, 2]);
    }

    #[test]
    fn test_assign_same_handle_keeps_it() {
        let recorder = Recorder::default();
        let mut w = adopt(7, &recorder);

        unsafe { w.assign(HGdiObj::from_addr(7)) };
        assert!(recorder.deleted().is_empty());
        assert!(w.is_valid());
    }

    #[test]
    fn test_assign_null_empties() {
        let recorder = Recorder::default();
        let mut w = adopt(3, &recorder);

        unsafe { w.assign(HGdiObj::null()) };
        assert_eq!(recorder.deleted(), vec![3]);
        assert!(!w.is_valid());
    }

    #[test]
    fn test_take_and_into_raw_do_not_release() {
        let recorder = Recorder::default();

        let mut w = adopt(5, &recorder);
        assert_eq!(w.take().addr(), 5);
        assert!(!w.is_valid());
        drop(w);

        let w = adopt(6, &recorder);
        assert_eq!(w.into_raw().addr(), 6);

        assert!(recorder.deleted().is_empty());
    }

    #[test]
    fn test_checked_rejects_null() {
        let recorder = Recorder::default();
        let err = unsafe { ScopedHandle::checked_in(HRgn::null(), &recorder) }.unwrap_err();
        assert!(err.is_invalid_handle());

        let w = unsafe { ScopedHandle::checked_in(HRgn::from_addr(9), &recorder) }.unwrap();
        assert_eq!(w.as_region().addr(), 9);
    }

    #[test]
    fn test_typed_views_are_unchecked() {
        let recorder = Recorder::default();
        let w = adopt(11, &recorder);
        assert_eq!(w.as_region().addr(), 11);
        assert_eq!(w.as_typed::<HPen>().addr(), 11);
    }

    #[test]
    fn test_try_as_checks_kind() {
        let recorder = Recorder::default();
        let w = adopt(12, &recorder);

        recorder.kind.set(ObjectKind::Region.code());
        assert_eq!(w.try_as::<HRgn>().unwrap().addr(), 12);
        assert_eq!(w.try_as::<HGdiObj>().unwrap().addr(), 12);

        let err = w.try_as::<HBrush>().unwrap_err();
        assert_eq!(
            err,
            Error::KindMismatch {
                expected: ObjectKind::Brush,
                actual: Some(ObjectKind::Region),
            }
        );

        recorder.kind.set(ObjectKind::ExtPen.code());
        assert!(w.try_as::<HPen>().is_ok());

        recorder.kind.set(0);
        let err = w.try_as::<HPen>().unwrap_err();
        assert_eq!(
            err,
            Error::KindMismatch {
                expected: ObjectKind::Pen,
                actual: None,
            }
        );
    }

    #[test]
    fn test_try_as_empty_is_invalid() {
        let recorder = Recorder::default();
        let w = ScopedHandle::new_in(&recorder);
        assert!(w.try_as::<HRgn>().unwrap_err().is_invalid_handle());
    }

    #[test]
    fn test_platform_is_the_one_given() {
        let recorder = Recorder::default();
        let w = ScopedHandle::new_in(&recorder);
        assert!(std::ptr::eq(*w.platform(), &recorder));
    }

    #[test]
    fn test_debug_output() {
        let recorder = Recorder::default();
        let w = ScopedHandle::new_in(&recorder);
        let text = format!("{:?}", w);
        assert!(text.starts_with("ScopedHandle"));
        assert!(text.contains("valid: false"));
    }
}
