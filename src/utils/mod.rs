//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Short code generation and custom-code validation
//! - [`client_ip`] - Client IP extraction from request headers

pub mod client_ip;
pub mod code_generator;
