//! # Product Builder
//!
//! The concrete builder for [`Product`]: each applied [`ProductStep`] appends the matching
//! part to the build in progress.

use crate::model::{Product, ProductStep};
use builder_framework::{Builder, Retrieve};

/// Assembles [`Product`]s one part at a time.
///
/// A fresh builder holds a blank product. All step applications work on that same instance
/// until it is taken, at which point the builder resets and is immediately ready for the
/// next build cycle.
#[derive(Debug, Default)]
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Builder for ProductBuilder {
    type Step = ProductStep;

    fn apply(&mut self, step: &ProductStep) {
        self.product.add_part(step.part_name());
    }
}

impl Retrieve for ProductBuilder {
    type Output = Product;

    fn output(&self) -> &Product {
        &self.product
    }

    fn reset(&mut self) {
        self.product = Product::default();
    }

    // mem::take leaves a Default product behind, which is exactly what reset produces.
    fn take(&mut self) -> Product {
        std::mem::take(&mut self.product)
    }
}
