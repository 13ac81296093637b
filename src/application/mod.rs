//! Application layer: business logic over the domain contracts.

pub mod services;
