//! Infrastructure layer: database-backed trait implementations.

pub mod persistence;
