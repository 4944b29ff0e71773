//! Application layer orchestrating domain logic.

pub mod services;
