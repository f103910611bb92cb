//! # Director
//!
//! This module defines the [`Director`], the orchestrator that replays named recipes
//! against an attached builder. It implements the "policy" side of staged construction:
//! *which* steps run, and in *what order*, without knowing anything about the shape of the
//! output being assembled.

use crate::builder::Builder;
use crate::error::DirectorError;
use crate::handle::BuilderHandle;
use crate::recipe::RecipeBook;
use std::cell::RefCell;
use std::rc::Weak;
use tracing::{debug, info, warn};

/// Replays named recipes against an attached builder.
///
/// # Architecture Note
/// The director holds two things: a [`RecipeBook`] (pure data, the assembly policy) and an
/// **optional, non-owning** reference to the builder it currently orchestrates. It never
/// constructs, destroys, or resets a builder; the client owns the builder through its
/// [`BuilderHandle`] and merely lends it to the director via [`Director::attach`].
///
/// **Attachment model**:
/// The director has exactly two states, *unattached* (initial) and *attached*. Attaching a
/// new builder simply replaces the reference; detaching (or dropping the client's handle)
/// returns it to unattached. There is no terminal state: a director is reusable
/// indefinitely across attach/run cycles.
///
/// # Usage Pattern
///
/// The canonical flow is:
///
/// 1. **Create**: build a [`RecipeBook`] and a `Director` around it.
/// 2. **Attach**: lend a builder to the director via its handle.
/// 3. **Run**: replay recipes; harvest the output from the *handle* between cycles.
///
/// ```rust
/// use builder_framework::{Builder, BuilderHandle, Director, RecipeBook, Retrieve};
///
/// // Minimal builder definition
/// #[derive(Clone, Debug)]
/// enum Step { Base, Trim }
///
/// #[derive(Default)]
/// struct LabelBuilder { label: String }
///
/// impl Builder for LabelBuilder {
///     type Step = Step;
///     fn apply(&mut self, step: &Step) {
///         self.label.push_str(match step { Step::Base => "base ", Step::Trim => "trim " });
///     }
/// }
///
/// impl Retrieve for LabelBuilder {
///     type Output = String;
///     fn output(&self) -> &String { &self.label }
///     fn reset(&mut self) { self.label.clear(); }
///     fn take(&mut self) -> String { std::mem::take(&mut self.label) }
/// }
///
/// // 1. Create
/// let recipes = RecipeBook::new().with("plain", vec![Step::Base]);
/// let mut director = Director::new(recipes);
///
/// // 2. Attach
/// let handle = BuilderHandle::new(LabelBuilder::default());
/// director.attach(&handle);
///
/// // 3. Run & harvest
/// director.run_recipe("plain").unwrap();
/// assert_eq!(handle.take(), "base ");
/// ```
///
/// # Failure Policy
///
/// `run_recipe` is the only fallible operation in the framework:
///
/// * An unknown recipe name is always [`DirectorError::UnknownRecipe`], attached or not;
///   it indicates a programming error, never a runtime condition.
/// * Running with no live builder attached is [`DirectorError::Unattached`]. This is the
///   strict stance; the director does not silently skip steps.
pub struct Director<B: Builder> {
    builder: Option<Weak<RefCell<B>>>,
    recipes: RecipeBook<B::Step>,
}

impl<B: Builder> Director<B> {
    /// Creates an unattached director over the given recipe book.
    pub fn new(recipes: RecipeBook<B::Step>) -> Self {
        Self {
            builder: None,
            recipes,
        }
    }

    /// Attaches a builder, replacing any previously held reference.
    ///
    /// O(1); the builder itself is neither inspected nor mutated. The director keeps only
    /// a downgraded reference, so dropping the client's last handle detaches implicitly.
    pub fn attach(&mut self, handle: &BuilderHandle<B>) {
        self.builder = Some(handle.downgrade());
        debug!(builder_type = builder_type::<B>(), "Builder attached");
    }

    /// Drops the held reference, returning the director to the unattached state.
    pub fn detach(&mut self) {
        self.builder = None;
        debug!(builder_type = builder_type::<B>(), "Builder detached");
    }

    /// Whether a builder is attached *and still alive*.
    pub fn is_attached(&self) -> bool {
        self.builder
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Read access to the recipe book.
    pub fn recipes(&self) -> &RecipeBook<B::Step> {
        &self.recipes
    }

    /// Adds (or replaces) a named recipe.
    ///
    /// Recipes are pure data: extending the director's repertoire never requires touching
    /// its orchestration logic.
    pub fn add_recipe(&mut self, name: impl Into<String>, steps: Vec<B::Step>) {
        self.recipes.insert(name, steps);
    }

    /// Replays the named recipe's steps against the attached builder, in order,
    /// synchronously.
    ///
    /// The output stays with the builder; harvest it from the client's
    /// [`BuilderHandle`] between cycles.
    pub fn run_recipe(&self, name: &str) -> Result<(), DirectorError> {
        let builder_type = builder_type::<B>();

        // Recipe lookup comes first: an unknown name is an error even when unattached.
        let Some(steps) = self.recipes.get(name) else {
            warn!(builder_type, recipe = name, "Unknown recipe");
            return Err(DirectorError::UnknownRecipe(name.to_string()));
        };

        let Some(builder) = self.builder.as_ref().and_then(Weak::upgrade) else {
            warn!(builder_type, recipe = name, "No builder attached");
            return Err(DirectorError::Unattached);
        };

        let mut builder = builder.borrow_mut();
        for step in steps {
            debug!(builder_type, recipe = name, ?step, "Applying step");
            builder.apply(step);
        }

        info!(builder_type, recipe = name, steps = steps.len(), "Recipe complete");
        Ok(())
    }
}

// Extract just the type name (e.g., "ProductBuilder" instead of
// "builder_sample::builders::ProductBuilder") for log fields.
fn builder_type<B>() -> &'static str {
    std::any::type_name::<B>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
