//! # Builder Framework
//!
//! This crate provides the foundational building blocks for staged object construction in
//! Rust. It implements the classic **Builder + Director** separation: builders know *how*
//! to perform individual construction steps, directors know *which* steps make up a named
//! build variant, and neither knows the other's internals.
//!
//! ## Why Builder + Director?
//!
//! ### Builder
//!
//! - A fixed, enumerable set of independent construction steps
//! - Each step appends exactly one part to the build in progress
//! - Reusable across many build cycles via reset
//!
//! ### Director
//!
//! - Named **recipes**: ordered step sequences modeled as pure data
//! - Orchestrates a builder it does not own and cannot inspect
//! - Extending the repertoire means adding a recipe, never changing code
//!
//! ### The Synergy
//!
//! - **Separation**: output shape lives in the builder; assembly order lives in the recipe
//!   book. Changing one never ripples into the other.
//! - **Polymorphism**: the same director (and the same recipe names) drive any builder
//!   with a matching step type, so swapping the concrete builder swaps the final output.
//! - **Interleaving**: clients may bypass the director and apply steps directly; both
//!   paths act on the same build in progress.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Capability Layer** ([`Builder`], [`Retrieve`]) - your step logic and output type
//! 2. **Policy Layer** ([`Director`], [`RecipeBook`]) - named, ordered step sequences
//! 3. **Ownership Layer** ([`BuilderHandle`]) - who holds the build in progress
//!
//! You write your step logic **once** in the builder traits, and the framework handles
//! recipe lookup, sequencing, and the non-owning attachment between director and builder.
//!
//! ## Quick Start
//!
//! ```rust
//! use builder_framework::{Builder, BuilderHandle, Director, RecipeBook, Retrieve};
//!
//! // 1. Define the step set and the builder
//! #[derive(Clone, Debug)]
//! enum HouseStep { Walls, Roof, Garden }
//!
//! #[derive(Default)]
//! struct HouseBuilder { rooms: Vec<&'static str> }
//!
//! impl Builder for HouseBuilder {
//!     type Step = HouseStep;
//!     fn apply(&mut self, step: &HouseStep) {
//!         self.rooms.push(match step {
//!             HouseStep::Walls => "walls",
//!             HouseStep::Roof => "roof",
//!             HouseStep::Garden => "garden",
//!         });
//!     }
//! }
//!
//! impl Retrieve for HouseBuilder {
//!     type Output = Vec<&'static str>;
//!     fn output(&self) -> &Self::Output { &self.rooms }
//!     fn reset(&mut self) { self.rooms.clear(); }
//!     fn take(&mut self) -> Self::Output { std::mem::take(&mut self.rooms) }
//! }
//!
//! // 2. Describe the build variants as data
//! let recipes = RecipeBook::new()
//!     .with("shell", vec![HouseStep::Walls, HouseStep::Roof])
//!     .with("villa", vec![HouseStep::Walls, HouseStep::Roof, HouseStep::Garden]);
//!
//! // 3. Attach and run
//! let handle = BuilderHandle::new(HouseBuilder::default());
//! let mut director = Director::new(recipes);
//! director.attach(&handle);
//!
//! director.run_recipe("shell").unwrap();
//! assert_eq!(handle.take(), vec!["walls", "roof"]);
//!
//! // The builder reset on take; the next cycle starts clean.
//! director.run_recipe("villa").unwrap();
//! assert_eq!(handle.take(), vec!["walls", "roof", "garden"]);
//! ```
//!
//! ## Ownership Model
//!
//! The client owns the builder through a [`BuilderHandle`]; the director holds only a
//! downgraded reference. Dropping the last handle implicitly detaches the director, and a
//! subsequent [`Director::run_recipe`] surfaces [`DirectorError::Unattached`] rather than
//! orchestrating a ghost.
//!
//! ## Concurrency Model
//!
//! Construction is single-threaded and synchronous: no step suspends, blocks, or yields,
//! and every operation completes in time linear in the number of steps applied. The shared
//! build in progress is `Rc`-based and deliberately `!Send`.
//!
//! ## Testing
//!
//! The framework provides a **Recording** builder that implements the same [`Builder`]
//! capability as a production builder but only records which steps were applied, letting
//! you test director and recipe logic without any concrete output type. See the [`mock`]
//! module for the full API and usage patterns.

pub mod builder;
pub mod director;
pub mod error;
pub mod handle;
pub mod mock;
pub mod recipe;
pub mod tracing;

// Re-export core types for convenience
pub use builder::{Builder, Retrieve};
pub use director::Director;
pub use error::DirectorError;
pub use handle::BuilderHandle;
pub use recipe::RecipeBook;
