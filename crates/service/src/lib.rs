//! Service layer for the autos API.
//! - Separates business rules (validation, VIN normalisation) from storage.
//! - Reuses the domain types and validation in the `models` crate.
//! - Storage backends are swappable behind `AutoRepository`.

pub mod errors;
pub mod autos;
pub mod runtime;
pub mod storage;

pub use autos::service::{AutoManager, AutoService};
