//! # Concrete Builders
//!
//! Builders that implement the framework's [`Builder`](builder_framework::Builder)
//! capability for the sample's domain models.

pub mod product_builder;

pub use product_builder::*;
