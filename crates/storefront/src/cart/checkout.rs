//! Checkout dialog flow and order submission.
//!
//! One flow per checkout attempt:
//!
//! ```text
//! Idle -> DialogOpen -> Submitting -> Succeeded -> Idle (cart cleared)
//!                                  -> Failed    -> DialogOpen
//! ```
//!
//! Cancel from the dialog returns to `Idle` with no request sent. On
//! failure the dialog stays open with a message so the user can retry
//! manually; there is no automatic retry.

use tracing::{error, info};

use yobraf_core::format_amount;

use crate::api::{BackendError, CheckoutSubmission};
use crate::cart::store::CartStore;
use crate::cart::totals::CartTotals;

/// Contact and delivery fields collected by the checkout dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl ContactDetails {
    /// Whether every field is non-empty after trimming.
    ///
    /// Presence is the only client-side check; the backend stays the
    /// final authority on validation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.address.trim().is_empty()
    }
}

/// Where the checkout dialog currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutState {
    /// No dialog showing.
    Idle,
    /// Dialog collecting contact fields; `message` carries the failure
    /// text after a rejected attempt.
    DialogOpen { message: Option<String> },
    /// Request in flight.
    Submitting,
}

/// Drives one checkout attempt against the live cart.
#[derive(Debug)]
pub struct CheckoutFlow {
    state: CheckoutState,
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutFlow {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: CheckoutState::Idle,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Open the contact dialog. No-op while a submission is in flight.
    pub fn open_dialog(&mut self) {
        if matches!(self.state, CheckoutState::Idle) {
            self.state = CheckoutState::DialogOpen { message: None };
        }
    }

    /// Close the dialog without sending anything.
    pub fn cancel(&mut self) {
        if matches!(self.state, CheckoutState::DialogOpen { .. }) {
            self.state = CheckoutState::Idle;
        }
    }

    /// Build the order request from the live cart.
    ///
    /// Mapped fresh from the store at call time, so quantity edits made
    /// while the dialog was open are what gets submitted. The totals are
    /// recomputed here too and therefore match what the page displayed.
    #[must_use]
    pub fn build_submission(
        store: &CartStore,
        contact: &ContactDetails,
        shipping_fee: f64,
    ) -> CheckoutSubmission {
        let totals = CartTotals::compute(store.items(), shipping_fee);
        CheckoutSubmission {
            items: store.order_items(),
            subtotal: format_amount(totals.subtotal),
            total: format_amount(totals.total),
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            address: contact.address.clone(),
        }
    }

    /// Submit the order. Returns `true` if the order was placed.
    ///
    /// Only valid from the open dialog; incomplete contact fields keep
    /// the dialog open with a prompt and send nothing.
    pub async fn submit(
        &mut self,
        store: &mut CartStore,
        contact: &ContactDetails,
        shipping_fee: f64,
    ) -> bool {
        if !matches!(self.state, CheckoutState::DialogOpen { .. }) {
            return false;
        }
        if !contact.is_complete() {
            self.state = CheckoutState::DialogOpen {
                message: Some("Please fill in your name, phone, and address.".to_string()),
            };
            return false;
        }

        let submission = Self::build_submission(store, contact, shipping_fee);
        self.state = CheckoutState::Submitting;

        let client = store.client().clone();
        let result = client.create_order(&submission).await;
        self.apply_result(store, result)
    }

    /// Apply the backend's answer to the state machine.
    fn apply_result(
        &mut self,
        store: &mut CartStore,
        result: Result<(), BackendError>,
    ) -> bool {
        match result {
            Ok(()) => {
                info!("order placed");
                // The deployed client left the cart populated after a
                // successful order; clearing it here keeps the page
                // consistent with the backend, which emptied its copy.
                store.clear();
                self.state = CheckoutState::Idle;
                true
            }
            Err(e) => {
                error!(error = %e, "failed to place order");
                self.state = CheckoutState::DialogOpen {
                    message: Some("Could not place your order. Please try again.".to_string()),
                };
                false
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use yobraf_core::{LineItemId, ProductId};

    use crate::cart::store::tests::{line_item, store_with};

    use super::*;

    fn open_flow() -> CheckoutFlow {
        let mut flow = CheckoutFlow::new();
        flow.open_dialog();
        flow
    }

    fn contact() -> ContactDetails {
        ContactDetails {
            name: "Jane".to_string(),
            phone: "0712000000".to_string(),
            address: "Nairobi".to_string(),
        }
    }

    #[test]
    fn test_open_and_cancel_round_trip() {
        let mut flow = CheckoutFlow::new();
        assert_eq!(*flow.state(), CheckoutState::Idle);

        flow.open_dialog();
        assert_eq!(*flow.state(), CheckoutState::DialogOpen { message: None });

        flow.cancel();
        assert_eq!(*flow.state(), CheckoutState::Idle);
    }

    #[test]
    fn test_contact_completeness() {
        assert!(contact().is_complete());
        assert!(!ContactDetails::default().is_complete());
        let blank_phone = ContactDetails {
            phone: "   ".to_string(),
            ..contact()
        };
        assert!(!blank_phone.is_complete());
    }

    #[test]
    fn test_submission_reflects_edits_after_dialog_open() {
        let mut store = store_with(vec![
            line_item(1, 10, "100.00", 2),
            line_item(2, 11, "49.99", 1),
        ]);
        let _flow = open_flow();

        // User bumps a quantity while the dialog is already open.
        store.set_quantity(LineItemId::new(1), 3);

        let submission = CheckoutFlow::build_submission(&store, &contact(), 0.0);
        let bumped = submission
            .items
            .iter()
            .find(|i| i.product_id == ProductId::new(10))
            .unwrap();
        assert_eq!(bumped.quantity, 3);
        assert_eq!(submission.subtotal, "349.99");
        assert_eq!(submission.total, "349.99");
    }

    #[test]
    fn test_submission_totals_include_shipping() {
        let store = store_with(vec![line_item(1, 10, "100.00", 1)]);
        let submission = CheckoutFlow::build_submission(&store, &contact(), 250.0);
        assert_eq!(submission.subtotal, "100.00");
        assert_eq!(submission.total, "350.00");
    }

    #[test]
    fn test_failure_keeps_dialog_open_and_items_unchanged() {
        let mut store = store_with(vec![line_item(1, 10, "100.00", 2)]);
        let mut flow = open_flow();
        flow.state = CheckoutState::Submitting;

        let placed = flow.apply_result(
            &mut store,
            Err(BackendError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: String::new(),
            }),
        );

        assert!(!placed);
        assert!(matches!(
            flow.state(),
            CheckoutState::DialogOpen { message: Some(_) }
        ));
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].quantity, 2);
    }

    #[test]
    fn test_success_clears_cart_and_returns_to_idle() {
        let mut store = store_with(vec![line_item(1, 10, "100.00", 2)]);
        let mut flow = open_flow();
        flow.state = CheckoutState::Submitting;

        let placed = flow.apply_result(&mut store, Ok(()));

        assert!(placed);
        assert_eq!(*flow.state(), CheckoutState::Idle);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_submit_from_idle_is_noop() {
        let mut store = store_with(vec![line_item(1, 10, "100.00", 2)]);
        let mut flow = CheckoutFlow::new();
        let placed = flow.submit(&mut store, &contact(), 0.0).await;
        assert!(!placed);
        assert_eq!(*flow.state(), CheckoutState::Idle);
    }

    #[tokio::test]
    async fn test_submit_with_incomplete_contact_sends_nothing() {
        let mut store = store_with(vec![line_item(1, 10, "100.00", 2)]);
        let mut flow = open_flow();
        let placed = flow
            .submit(&mut store, &ContactDetails::default(), 0.0)
            .await;
        assert!(!placed);
        assert!(matches!(
            flow.state(),
            CheckoutState::DialogOpen { message: Some(_) }
        ));
        assert_eq!(store.len(), 1);
    }
}
