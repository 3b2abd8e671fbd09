//! Autos business module: repository abstraction, storage backends and the
//! `AutoService` consumed by the HTTP layer.

pub mod repository;
pub mod repo;
pub mod service;
