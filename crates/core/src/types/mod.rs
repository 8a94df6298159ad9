//! Core types for the Yobraf storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod status;

pub use id::*;
pub use money::{display_ksh, format_amount, parse_amount};
pub use status::OrderStatus;
