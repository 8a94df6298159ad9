//! Cart store: fetch-once, mutate-locally line item state.

use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

use yobraf_core::LineItemId;

use crate::api::{BackendClient, BackendError, LineItem, OrderItemInput};

/// Holds the cart page's line items for the lifetime of the page.
///
/// The sequence is replaced wholesale by [`CartStore::load`] and then
/// mutated in place by [`CartStore::set_quantity`] and
/// [`CartStore::remove`]. Mutations are local-only: the backend cart is
/// untouched until checkout, and edits are lost when the page goes away.
/// Insertion order is the order the server returned.
#[derive(Debug)]
pub struct CartStore {
    client: BackendClient,
    items: Vec<LineItem>,
    loaded: bool,
}

impl CartStore {
    /// Create an empty store for a new page.
    ///
    /// The client carries the auth context, so the store never reads
    /// credentials from ambient state.
    #[must_use]
    pub const fn new(client: BackendClient) -> Self {
        Self {
            client,
            items: Vec::new(),
            loaded: false,
        }
    }

    /// Fetch the cart once on page mount.
    ///
    /// On success the whole item sequence is replaced with the server's
    /// response. On failure the cart stays empty; the condition is
    /// logged and never surfaced as a blocking state, so a failed load
    /// renders as an empty cart rather than a spinner. Cancelling the
    /// token abandons the request without touching the store.
    #[instrument(skip_all)]
    pub async fn load(&mut self, cancel: &CancellationToken) {
        let result = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!("cart load cancelled, page went away");
                return;
            }
            result = self.client.get_cart() => result,
        };
        self.apply_load(result);
    }

    /// Apply the outcome of the single cart fetch.
    fn apply_load(&mut self, result: Result<Vec<LineItem>, BackendError>) {
        match result {
            Ok(items) => {
                self.items = items;
            }
            Err(e) => {
                // No retry and no error banner: the page shows an empty
                // cart and the user can reload manually.
                warn!(error = %e, "failed to fetch cart");
                self.items.clear();
            }
        }
        self.loaded = true;
    }

    /// Set a line item's quantity.
    ///
    /// A quantity of zero is a no-op: the decrement control bottoms out
    /// at 1, and removing a row is a separate operation. An unmatched
    /// `line_id` is also a no-op.
    pub fn set_quantity(&mut self, line_id: LineItemId, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.id == line_id) {
            item.quantity = quantity;
        }
    }

    /// Remove a line item. Idempotent; unmatched ids are a no-op.
    pub fn remove(&mut self, line_id: LineItemId) {
        self.items.retain(|item| item.id != line_id);
    }

    /// Drop all line items (used after a successful checkout).
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Current line items, in server order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the initial fetch has completed (successfully or not).
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of rows in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Snapshot of the current items as order inputs.
    ///
    /// Called at the moment of checkout submission so the payload always
    /// reflects the latest local edits.
    #[must_use]
    pub fn order_items(&self) -> Vec<OrderItemInput> {
        self.items.iter().map(OrderItemInput::from).collect()
    }

    pub(crate) const fn client(&self) -> &BackendClient {
        &self.client
    }

    #[cfg(test)]
    pub(crate) fn set_items_for_test(&mut self, items: Vec<LineItem>) {
        self.items = items;
        self.loaded = true;
    }
}
