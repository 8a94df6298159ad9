//! Derived cart totals.
//!
//! Totals are a pure function of the current line items and the
//! configured shipping fee; nothing is cached between renders.
//! Arithmetic is plain `f64` over [`yobraf_core::parse_amount`], and
//! display strings are formatted to exactly two decimal places.

use yobraf_core::{format_amount, parse_amount};

use crate::api::LineItem;

/// Subtotal, shipping, and total for the current cart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartTotals {
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
}

impl CartTotals {
    /// Compute totals from the current line items.
    ///
    /// A line item whose price string does not parse contributes zero
    /// rather than failing the whole cart. An empty cart's total is
    /// exactly the shipping fee.
    #[must_use]
    pub fn compute(items: &[LineItem], shipping_fee: f64) -> Self {
        let subtotal: f64 = items.iter().map(line_total).sum();
        Self {
            subtotal,
            shipping: shipping_fee,
            total: subtotal + shipping_fee,
        }
    }

    /// Subtotal as a two-decimal string.
    #[must_use]
    pub fn subtotal_display(&self) -> String {
        format_amount(self.subtotal)
    }

    /// Total as a two-decimal string.
    #[must_use]
    pub fn total_display(&self) -> String {
        format_amount(self.total)
    }
}

/// Unit price times quantity for one row.
pub(crate) fn line_total(item: &LineItem) -> f64 {
    parse_amount(&item.product.price) * f64::from(item.quantity)
}

#[cfg(test)]
mod tests {
    use crate::cart::store::tests::line_item;

    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_subtotal_sums_price_times_quantity() {
        let items = vec![line_item(1, 10, "100.00", 2), line_item(2, 11, "49.99", 1)];
        let totals = CartTotals::compute(&items, 0.0);
        assert!((totals.subtotal - 249.99).abs() < TOLERANCE);
        assert!((totals.total - 249.99).abs() < TOLERANCE);
    }

    #[test]
    fn test_quantity_change_reflected() {
        let items = vec![line_item(1, 10, "100.00", 3), line_item(2, 11, "49.99", 1)];
        let totals = CartTotals::compute(&items, 0.0);
        assert!((totals.subtotal - 349.99).abs() < TOLERANCE);
    }

    #[test]
    fn test_empty_cart_total_equals_shipping() {
        let totals = CartTotals::compute(&[], 0.0);
        assert!(totals.subtotal.abs() < TOLERANCE);
        assert!(totals.total.abs() < TOLERANCE);
        assert_eq!(totals.subtotal_display(), "0.00");

        let flat = CartTotals::compute(&[], 250.0);
        assert!((flat.total - 250.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_single_item_quantity_one_is_unit_price() {
        let items = vec![line_item(1, 10, "1299.00", 1)];
        let totals = CartTotals::compute(&items, 0.0);
        assert!((totals.subtotal - 1299.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_malformed_price_contributes_zero() {
        let items = vec![
            line_item(1, 10, "not-a-price", 4),
            line_item(2, 11, "49.99", 1),
        ];
        let totals = CartTotals::compute(&items, 0.0);
        assert!((totals.subtotal - 49.99).abs() < TOLERANCE);
    }

    #[test]
    fn test_shipping_added_to_total() {
        let items = vec![line_item(1, 10, "100.00", 1)];
        let totals = CartTotals::compute(&items, 250.0);
        assert!((totals.subtotal - 100.0).abs() < TOLERANCE);
        assert!((totals.total - 350.0).abs() < TOLERANCE);
        assert_eq!(totals.total_display(), "350.00");
    }
}
