//! Cart state, derived totals, checkout flow, and view models.
//!
//! The cart page owns one [`CartStore`] for its lifetime. The store is
//! populated by a single fetch on mount and then mutated locally;
//! quantity edits and removals are optimistic and never synced back to
//! the backend, so the server-side cart stays authoritative across
//! page loads. Totals are recomputed from the store on every render,
//! and checkout snapshots the store at the moment of submission.

pub mod badge;
pub mod checkout;
pub mod store;
pub mod totals;
pub mod view;

pub use badge::badge_count;
pub use checkout::{CheckoutFlow, CheckoutState, ContactDetails};
pub use store::CartStore;
pub use totals::CartTotals;
pub use view::{CartItemView, CartView};
