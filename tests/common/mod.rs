//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;

use gdiobj::{HGdiObj, Platform};

/// Platform that records every delete instead of calling GDI.
#[derive(Default)]
pub struct Recorder {
    deleted: RefCell<Vec<usize>>,
}

impl Recorder {
    /// Addresses deleted so far, in call order.
    pub fn deleted(&self) -> Vec<usize> {
        self.deleted.borrow().clone()
    }

    /// Number of deletes recorded for `addr`.
    pub fn count(&self, addr: usize) -> usize {
        self.deleted.borrow().iter().filter(|&&a| a == addr).count()
    }
}

impl Platform for Recorder {
    unsafe fn delete_object(&self, handle: HGdiObj) -> bool {
        assert!(!handle.is_null(), "delete_object called with a null handle");
        self.deleted.borrow_mut().push(handle.addr());
        true
    }
}

/// Platform whose deletes always fail.
#[derive(Default)]
pub struct Failing {
    attempts: RefCell<usize>,
}

impl Failing {
    pub fn attempts(&self) -> usize {
        *self.attempts.borrow()
    }
}

impl Platform for Failing {
    unsafe fn delete_object(&self, _handle: HGdiObj) -> bool {
        *self.attempts.borrow_mut() += 1;
        false
    }
}
