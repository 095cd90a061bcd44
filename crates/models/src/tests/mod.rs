
/// Derived values: nutrition totals and compliance scores
pub mod derived_tests;

/// Entity round trips against a migrated in-memory database
pub mod entity_tests;
