//! # Domain Models
//!
//! Pure data structures for the sample: the [`Product`] under construction and the
//! [`ProductStep`] set that assembles it.

pub mod product;

pub use product::*;
