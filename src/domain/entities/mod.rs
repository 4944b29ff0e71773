//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic beyond simple
//! derived state (expiry, liveness).
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping with activation and expiry state
//! - [`Click`] - A click event on a shortened link
//!
//! Creation inputs are modeled as separate structs (`NewLink`, `NewClick`).

pub mod click;
pub mod link;

pub use click::{Click, NewClick};
pub use link::{Link, NewLink};
