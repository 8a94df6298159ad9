//! Yobraf Core - Shared types library.
//!
//! This crate provides common types used across the Yobraf storefront
//! components:
//! - `storefront` - Cart, checkout, and order-history client logic
//!
//! # Architecture
//!
//! The core crate contains only types and small pure functions - no I/O,
//! no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money parsing and
//!   formatting, and order statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
