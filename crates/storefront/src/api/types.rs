//! Wire types for the backend REST API.
//!
//! The backend serializes prices as decimal strings; they stay strings
//! here and are only parsed at the totals boundary (see
//! [`yobraf_core::parse_amount`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use yobraf_core::{LineItemId, OrderId, OrderStatus, ProductId};

/// Product snapshot nested inside a cart row or order item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    /// Decimal string from the backend (e.g. `"1299.00"`).
    pub price: String,
    /// Image URL; the backend sends `null` for products without one.
    pub image: Option<String>,
}

/// One row in the cart as returned by `/api/get_cart/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Cart row ID, assigned by the backend; unique within the cart.
    pub id: LineItemId,
    pub product: ProductSnapshot,
    pub quantity: u32,
}

/// One `{product_id, quantity}` pair inside an order-creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl From<&LineItem> for OrderItemInput {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product.id,
            quantity: item.quantity,
        }
    }
}

/// Request body for `/api/create_order/`.
///
/// `subtotal` and `total` are two-decimal strings recomputed from the
/// live cart at submit time, so they always match what the cart page
/// displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSubmission {
    pub items: Vec<OrderItemInput>,
    pub subtotal: String,
    pub total: String,
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// One item inside a past order from `/api/getOrders/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub product: ProductSnapshot,
    pub quantity: u32,
    /// Unit price captured at order time; may differ from the product's
    /// current price.
    pub price: String,
}

/// A past order from `/api/getOrders/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub total: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}
