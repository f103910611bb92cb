//! # Mock Builder & Testing Guide
//!
//! The [`Recording`] type produces builders that implement the same [`Builder`] capability
//! as a production builder but assemble nothing: they only record which steps were applied,
//! in order. That makes director orchestration testable in isolation: no concrete output
//! type, no golden strings, just the step trace.
//!
//! ## When to use a Recording vs a Real Builder
//!
//! | Feature | Recording | Real Builder |
//! |---------|-----------|--------------|
//! | **Observes** | Step sequence only | Finished output |
//! | **Use Case** | Testing recipe/director logic | Testing a concrete builder or full flow |
//! | **Assertions** | `expect_steps` + `verify` | Compare retrieved output |
//!
//! ## Example
//!
//! ```rust
//! use builder_framework::mock::Recording;
//! use builder_framework::{BuilderHandle, Director, RecipeBook};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Step { A, B }
//!
//! // 1. Setup the recording and its expectation
//! let mut recording = Recording::new();
//! recording.expect_steps(vec![Step::A, Step::B, Step::A]);
//!
//! // 2. Hand the recording builder to a director
//! let handle = BuilderHandle::new(recording.builder());
//! let recipes = RecipeBook::new().with("aba", vec![Step::A, Step::B, Step::A]);
//! let mut director = Director::new(recipes);
//! director.attach(&handle);
//!
//! // 3. Run, then verify the trace
//! director.run_recipe("aba").unwrap();
//! recording.verify();
//! ```
//!
//! Note: this module ships in the library proper (not behind `#[cfg(test)]`) so it works
//! with integration tests and downstream crates' test suites.

use crate::builder::Builder;
use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

/// Test-side observer for a [`RecordingBuilder`].
///
/// Owns the step log and the expectation; hand out builders via [`Recording::builder`] and
/// assert afterwards with [`Recording::verify`] or [`Recording::applied`].
pub struct Recording<S> {
    log: Rc<RefCell<Vec<S>>>,
    expected: Option<Vec<S>>,
}

impl<S: Clone + Debug + PartialEq> Recording<S> {
    /// Creates a recording with an empty log and no expectation.
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            expected: None,
        }
    }

    /// Produces a builder that appends every applied step to this recording's log.
    ///
    /// Builders are cheap to produce and all feed the same log, mirroring how clones of a
    /// [`BuilderHandle`](crate::BuilderHandle) share one build in progress.
    pub fn builder(&self) -> RecordingBuilder<S> {
        RecordingBuilder {
            log: Rc::clone(&self.log),
        }
    }

    /// Sets the exact step sequence [`Recording::verify`] will assert.
    pub fn expect_steps(&mut self, steps: Vec<S>) {
        self.expected = Some(steps);
    }

    /// The steps applied so far, in order.
    pub fn applied(&self) -> Vec<S> {
        self.log.borrow().clone()
    }

    /// Asserts that exactly the expected steps were applied, in order.
    ///
    /// # Panics
    /// Panics (test semantics) if no expectation was set or the trace differs.
    pub fn verify(&self) {
        let expected = self
            .expected
            .as_ref()
            .expect("verify() called without expect_steps()");
        let applied = self.log.borrow();
        assert_eq!(
            &*applied, expected,
            "recorded steps do not match expectation"
        );
    }
}

impl<S: Clone + Debug + PartialEq> Default for Recording<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// A builder that assembles nothing and records every applied step.
pub struct RecordingBuilder<S> {
    log: Rc<RefCell<Vec<S>>>,
}

impl<S: Clone + Debug> Builder for RecordingBuilder<S> {
    type Step = S;

    fn apply(&mut self, step: &S) {
        self.log.borrow_mut().push(step.clone());
    }
}
