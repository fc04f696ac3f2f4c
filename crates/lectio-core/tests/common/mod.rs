use std::collections::BTreeMap;

use lectio_core::{Generator, GeneratorBuilder, Plan};

/// Helper function to create a generator with fixed defaults
pub fn create_test_generator() -> Generator {
    GeneratorBuilder::new()
        .with_default_author("Test Suite")
        .with_default_version("0.0.1")
        .build()
}

/// Count the readings per book by walking every day of the plan
pub fn recount(plan: &Plan) -> BTreeMap<u32, u32> {
    let mut counts = BTreeMap::new();
    for portion in plan.daily_readings.iter().flatten() {
        *counts.entry(portion.book_code).or_insert(0) += 1;
    }
    counts
}
