//! # Standard Recipes
//!
//! The build variants shipped with the sample, as pure data. New variants belong here (or
//! in configuration), never in director code.

use crate::model::ProductStep;
use builder_framework::RecipeBook;

/// The sample's recipe book:
///
/// - `"minimal"`: the bare viable product: PartA only.
/// - `"full"`: the fully featured product: PartA, PartB, PartC, in that order.
pub fn standard_recipes() -> RecipeBook<ProductStep> {
    RecipeBook::new()
        .with("minimal", vec![ProductStep::PartA])
        .with(
            "full",
            vec![ProductStep::PartA, ProductStep::PartB, ProductStep::PartC],
        )
}
