//! Yobraf Storefront - cart component library.
//!
//! This crate holds the client-side state and API plumbing for the
//! Yobraf shop's cart pages:
//!
//! - [`api`] - HTTP client for the backend REST API (cart, orders)
//! - [`cart`] - cart store, totals, checkout flow, and view models
//! - [`auth`] - explicit bearer-token context attached to every request
//! - [`config`] - environment-driven configuration
//!
//! All business logic (persistence, payment, inventory) lives in the
//! backend; this crate is presentation state only. The backend remains
//! the authority on the cart: the store's local edits are optimistic
//! and are never synced back (see [`cart::CartStore`]).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod auth;
pub mod cart;
pub mod config;
