//! # Builder Handle
//!
//! This module defines the client-side handle that owns a builder and shares it with a
//! director.
//!
//! A [`Director`](crate::Director) holds only a *non-owning* reference to the builder it
//! orchestrates: it must never construct, destroy, or reset one. The handle is the owning
//! half of that relation. The client keeps the handle (and with it the builder's lifetime);
//! [`Director::attach`](crate::Director::attach) takes a downgraded reference that dies
//! with the handle.
//!
//! # Concurrency Model
//! Construction is single-threaded and synchronous throughout, so the shared state is an
//! `Rc<RefCell<_>>` rather than anything lock-based. The handle is intentionally `!Send`:
//! handing a build in progress to another thread is a compile error, not a data race.

use crate::builder::{Builder, Retrieve};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Owning, cloneable handle to a builder, shared between the client and a director.
///
/// Cloning is cheap (reference-count bump) and every clone addresses the same build in
/// progress, which is what lets a client interleave direct [`BuilderHandle::apply`] calls
/// with director-driven recipe steps on the same output.
pub struct BuilderHandle<B> {
    inner: Rc<RefCell<B>>,
}

impl<B> Clone for BuilderHandle<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<B: Builder> BuilderHandle<B> {
    /// Wraps a freshly constructed builder.
    pub fn new(builder: B) -> Self {
        Self {
            inner: Rc::new(RefCell::new(builder)),
        }
    }

    /// Applies one step directly, bypassing any director.
    ///
    /// Direct steps and recipe-driven steps act on the same build in progress and may be
    /// freely interleaved.
    pub fn apply(&self, step: &B::Step) {
        self.inner.borrow_mut().apply(step);
    }

    /// Non-owning reference for a director to hold.
    pub(crate) fn downgrade(&self) -> Weak<RefCell<B>> {
        Rc::downgrade(&self.inner)
    }
}

impl<B: Retrieve> BuilderHandle<B> {
    /// Takes the finished output and resets the builder for the next build cycle.
    pub fn take(&self) -> B::Output {
        self.inner.borrow_mut().take()
    }

    /// Discards the build in progress.
    pub fn reset(&self) {
        self.inner.borrow_mut().reset();
    }

    /// Inspects the build in progress without consuming it.
    ///
    /// Borrow-scoped: the closure runs while the builder is borrowed, so the output
    /// reference cannot escape the call.
    pub fn with_output<R>(&self, f: impl FnOnce(&B::Output) -> R) -> R {
        f(self.inner.borrow().output())
    }
}
