//! # Recipe Data Model
//!
//! A *recipe* is a named, ordered sequence of step identifiers describing one complete
//! build variant. Recipes are **pure data**: the [`Director`](crate::Director) replays
//! whatever sequence the book holds, so adding a build variant means inserting a new
//! entry, never modifying director code.
//!
//! # Builder Interaction
//! [`RecipeBook`] is generic over the step type `S`, which in practice is the
//! [`Builder::Step`](crate::Builder::Step) of the builder the director orchestrates. This
//! guarantees at compile time that a recipe can only name steps the builder understands.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named table of build recipes: recipe name → ordered step sequence.
///
/// Cheap to construct in code via [`RecipeBook::with`] chaining, and serde-serializable so
/// recipe tables can equally live in configuration data.
///
/// # Example
///
/// ```rust
/// use builder_framework::RecipeBook;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Step { Frame, Roof, Paint }
///
/// let book = RecipeBook::new()
///     .with("shell", vec![Step::Frame, Step::Roof])
///     .with("finished", vec![Step::Frame, Step::Roof, Step::Paint]);
///
/// assert_eq!(book.get("shell"), Some(&[Step::Frame, Step::Roof][..]));
/// assert!(book.get("bogus").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeBook<S> {
    recipes: HashMap<String, Vec<S>>,
}

impl<S> RecipeBook<S> {
    /// Creates an empty recipe book.
    pub fn new() -> Self {
        Self {
            recipes: HashMap::new(),
        }
    }

    /// Inserts (or replaces) a named recipe.
    pub fn insert(&mut self, name: impl Into<String>, steps: Vec<S>) {
        self.recipes.insert(name.into(), steps);
    }

    /// Chaining form of [`RecipeBook::insert`] for building books inline.
    pub fn with(mut self, name: impl Into<String>, steps: Vec<S>) -> Self {
        self.insert(name, steps);
        self
    }

    /// Looks up the ordered step sequence for a recipe name.
    pub fn get(&self, name: &str) -> Option<&[S]> {
        self.recipes.get(name).map(Vec::as_slice)
    }

    /// Whether a recipe with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.recipes.contains_key(name)
    }

    /// Iterates over the recipe names (unordered).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.keys().map(String::as_str)
    }

    /// Number of recipes in the book.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the book holds no recipes at all.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<S> Default for RecipeBook<S> {
    fn default() -> Self {
        Self::new()
    }
}
