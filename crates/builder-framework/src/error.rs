//! # Framework Errors
//!
//! This module defines the common error types used throughout the builder framework.
//! By centralizing error definitions, we ensure consistent error handling across
//! directors and clients.
//!
//! The taxonomy is intentionally minimal: step application, reset, and retrieval are all
//! infallible, so the only fallible operation in the framework is
//! [`Director::run_recipe`](crate::Director::run_recipe).

/// Errors that can occur when a director runs a recipe.
#[derive(Debug, thiserror::Error)]
pub enum DirectorError {
    /// No live builder is attached to the director.
    ///
    /// This framework takes the strict stance: running a recipe with nobody to build is a
    /// programming error and is surfaced, not silently skipped. Raised both when `attach`
    /// was never called and when the attached builder has since been dropped (the
    /// director's reference is non-owning).
    #[error("No builder attached")]
    Unattached,
    /// The named recipe does not exist in the director's recipe book.
    ///
    /// Surfaced regardless of attachment state, since it indicates a programming error
    /// rather than a runtime condition.
    #[error("Unknown recipe: {0}")]
    UnknownRecipe(String),
}
