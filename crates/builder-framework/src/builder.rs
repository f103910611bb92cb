//! # Builder Traits
//!
//! The [`Builder`] trait defines the contract that every staged builder must implement to be
//! orchestrated by a [`Director`](crate::Director). It specifies an associated step type (the
//! enumerable set of construction operations) and a single `apply` entry point. The
//! [`Retrieve`] trait adds the concrete-side lifecycle (inspect, reset, take) for builders
//! whose output type is known to the caller.
//!
//! # Architecture Note
//! Why two traits?
//! The Director only ever *applies steps*; it must never reset a builder or walk away with
//! its output; that remains the client's responsibility. Splitting the step capability
//! ([`Builder`]) from the harvest lifecycle ([`Retrieve`]) encodes that division of labor in
//! the type system: a `Director<B>` is bounded on `B: Builder` alone, so it *cannot* touch
//! the build result even by accident.
//!
//! We use an "Associated Type" (`type Step`) to enforce type safety. A `ProductBuilder`
//! accepts `ProductStep`s, and you can't accidentally feed it a `HouseStep`. Recipes are
//! checked against the builder's step type at compile time, so a recipe book can never name
//! a step the attached builder doesn't understand.

use std::fmt::Debug;

/// The step-application capability every staged builder exposes.
///
/// # Architecture Note
/// By defining a contract (`Builder`) that all concrete builders must satisfy, we can write
/// the [`Director`](crate::Director) orchestration logic *once* and reuse it everywhere.
///
/// # Ordering
/// A builder imposes **no ordering constraint** on its steps: any order, any multiplicity.
/// Ordering semantics belong to the caller: either a client invoking steps directly, or a
/// `Director` replaying a named recipe. Repeating a step simply appends another part.
pub trait Builder {
    /// The enumerable set of construction steps this builder understands.
    /// Typically a small fieldless (or data-carrying) enum.
    type Step: Clone + Debug;

    /// Applies one construction step to the build in progress.
    ///
    /// Side effect only: each application appends exactly one part to the active output.
    /// Infallible; there are no preconditions beyond "the builder exists".
    fn apply(&mut self, step: &Self::Step);
}

/// Harvest lifecycle for builders whose output type is known to the caller.
///
/// This is deliberately *not* part of [`Builder`]: different concrete builders may produce
/// entirely unrelated outputs, and only the client that chose the concrete type knows what
/// it is getting back.
///
/// # Design Note: Retrieval Policy
///
/// Two policies are supported, and both are always available:
///
/// - **Take-and-reset** ([`Retrieve::take`]), the ergonomic default. Returns the finished
///   output by value and atomically resets, so the builder is immediately ready for the
///   next build cycle. Calling `take` twice in a row yields an empty output the second time.
/// - **Inspect-then-reset** ([`Retrieve::output`] + [`Retrieve::reset`]), which lets a caller
///   examine the build in progress without losing it, at the cost of an explicit reset.
pub trait Retrieve: Builder {
    /// The finished artifact this builder produces.
    type Output;

    /// Borrows the build in progress without consuming it.
    fn output(&self) -> &Self::Output;

    /// Discards the build in progress and starts a fresh, empty one.
    ///
    /// Must leave the builder equivalent to a freshly constructed instance.
    fn reset(&mut self);

    /// Transfers the finished output to the caller and resets in the same motion.
    fn take(&mut self) -> Self::Output;
}
