//! # Builder Sample Library
//!
//! This library exposes the sample's modules for integration testing.

pub mod builders;
pub mod model;
pub mod recipes;
