/// Validation and serialization rules of the domain types
pub mod auto_tests;
