//! # Product Model
//!
//! The `Product` is a passive value holder: an ordered list of part identifiers that only
//! grows during a build cycle and is never mutated after retrieval.

use serde::{Deserialize, Serialize};

/// The object under construction: an ordered accumulation of named parts.
///
/// # Builder Framework
/// A `Product` is assembled by a [`ProductBuilder`](crate::builders::ProductBuilder);
/// insertion order reflects assembly order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    parts: Vec<String>,
}

impl Product {
    /// Appends a part identifier. Repetition is allowed; appending never fails.
    pub fn add_part(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    /// The accumulated parts, in assembly order.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Deterministic, human-readable rendering of the parts in assembly order.
    ///
    /// Stable output, suitable for golden-output tests:
    /// `"Product parts: PartA, PartB, PartC"`.
    pub fn describe(&self) -> String {
        format!("Product parts: {}", self.parts.join(", "))
    }
}

/// The construction steps a [`ProductBuilder`](crate::builders::ProductBuilder)
/// understands. Each step appends exactly one matching part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStep {
    PartA,
    PartB,
    PartC,
}

impl ProductStep {
    /// The part identifier this step appends.
    pub fn part_name(self) -> &'static str {
        match self {
            ProductStep::PartA => "PartA",
            ProductStep::PartB => "PartB",
            ProductStep::PartC => "PartC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_lists_parts_in_insertion_order() {
        let mut product = Product::default();
        product.add_part("PartC");
        product.add_part("PartA");
        product.add_part("PartA");

        assert_eq!(product.describe(), "Product parts: PartC, PartA, PartA");
    }

    #[test]
    fn empty_product_describes_no_parts() {
        assert_eq!(Product::default().describe(), "Product parts: ");
    }
}
