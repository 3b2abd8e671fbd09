//! Data model for the autos API.
//! - `auto`: wire/domain types and their validation rules.
//! - `auto_record`: SeaORM entity backing the `autos` table.
//! - `db`: connection helpers driven by `configs::DatabaseConfig`.

pub mod errors;
pub mod auto;
pub mod auto_record;
pub mod db;

pub use auto::{Auto, AutosList, UpdateAuto};

#[cfg(test)]
mod tests;
