//! # Builder Framework Sample
//!
//! A reference implementation of staged construction on top of `builder-framework`.
//!
//! ## Core Components
//!
//! - **`model`**: Pure data structures (`Product`, `ProductStep`).
//! - **`builders`**: Concrete builders (`ProductBuilder`) implementing the framework's
//!   step capability.
//! - **`recipes`**: The standard build variants, as data.
//!
//! ## Quick Start
//!
//! The entry point in [`main`] demonstrates the three canonical flows:
//! 1. A director-driven `"minimal"` build.
//! 2. A director-driven `"full"` build.
//! 3. A custom build applying steps directly on the handle, bypassing the director.

use builder_framework::tracing::setup_tracing;
use builder_framework::{BuilderHandle, Director, DirectorError};
use builder_sample::builders::ProductBuilder;
use builder_sample::model::ProductStep;
use builder_sample::recipes::standard_recipes;
use tracing::info;

fn main() -> Result<(), DirectorError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting staged construction demo");

    // The client owns the builder; the director only borrows it.
    let handle = BuilderHandle::new(ProductBuilder::new());
    let mut director = Director::new(standard_recipes());
    director.attach(&handle);

    // 1. Minimal viable product
    director.run_recipe("minimal")?;
    let product = handle.take();
    info!(product = %product.describe(), "Minimal build complete");
    println!("Minimal viable product:\n{}", product.describe());

    // 2. Full featured product
    director.run_recipe("full")?;
    let product = handle.take();
    info!(product = %product.describe(), "Full build complete");
    println!("Full featured product:\n{}", product.describe());

    // 3. Custom product, driven by the client without the director
    handle.apply(&ProductStep::PartA);
    handle.apply(&ProductStep::PartB);
    let product = handle.take();
    info!(product = %product.describe(), "Custom build complete");
    println!("Custom product:\n{}", product.describe());

    info!("Demo completed successfully");
    Ok(())
}
