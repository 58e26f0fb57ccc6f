//! Aurum Core - Shared types library.
//!
//! This crate provides common types used across all Aurum Atelier components:
//! - `store` - The shared state container and its persistence layer
//! - `cli` - Command-line tools for seeding and store management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no clocks.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails,
//!   categories, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
