//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain logic following Clean Architecture
//! principles. It defines entities, repository interfaces, and the click
//! tracking pipeline independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click tracking event model
//! - [`click_worker`] - Asynchronous click processing worker
//!
//! # Click Processing Flow
//!
//! 1. HTTP handler receives a redirect request for a live link
//! 2. [`click_event::ClickEvent`] is sent to an async channel
//! 3. [`click_worker::run_click_worker`] consumes events
//! 4. One [`entities::Click`] row is inserted and the link's counter is
//!    incremented with an atomic relative update

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
