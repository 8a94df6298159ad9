//! Cart display data for templates.

use yobraf_core::{LineItemId, display_ksh, parse_amount};

use crate::api::LineItem;
use crate::cart::store::CartStore;
use crate::cart::totals::{CartTotals, line_total};

/// Cart item display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: LineItemId,
    pub name: String,
    pub image: Option<String>,
    pub quantity: u32,
    /// Zero-padded quantity for the stepper control (e.g. `"02"`).
    pub quantity_display: String,
    /// Unit price, e.g. `"ksh 100.00"`.
    pub price: String,
    /// Unit price times quantity, e.g. `"ksh 200.00"`.
    pub line_price: String,
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id,
            name: item.product.name.clone(),
            image: item.product.image.clone(),
            quantity: item.quantity,
            quantity_display: format!("{:02}", item.quantity),
            price: display_ksh(parse_amount(&item.product.price)),
            line_price: display_ksh(line_total(item)),
        }
    }
}

/// Cart display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    /// `"Free"` when the shipping fee is zero, otherwise the fee.
    pub shipping: String,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: display_ksh(0.0),
            shipping: "Free".to_string(),
            total: display_ksh(0.0),
            item_count: 0,
        }
    }

    /// Render the current store state.
    #[must_use]
    pub fn from_store(store: &CartStore, shipping_fee: f64) -> Self {
        let totals = CartTotals::compute(store.items(), shipping_fee);
        Self {
            items: store.items().iter().map(CartItemView::from).collect(),
            subtotal: display_ksh(totals.subtotal),
            shipping: if totals.shipping.abs() < f64::EPSILON {
                "Free".to_string()
            } else {
                display_ksh(totals.shipping)
            },
            total: display_ksh(totals.total),
            item_count: u32::try_from(store.len()).unwrap_or(0),
        }
    }
}
