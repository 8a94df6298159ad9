//! Response-shape normalization for the cart endpoint.
//!
//! Different backend deployments answer `/api/get_cart/` with either a
//! bare JSON list of cart rows or an object wrapping the list under
//! `data`; the header badge variant additionally answers with
//! `{"count": n}`. Rather than duplicating ad hoc unwrapping at each
//! call site, every caller funnels the raw JSON through this module.

use serde_json::Value;
use tracing::warn;

use super::types::{LineItem, Order};

/// Extract cart line items from a raw cart payload.
///
/// Accepts a bare list or a `{"data": [...]}` wrapper. Rows that fail
/// to deserialize are dropped with a warning instead of failing the
/// whole cart.
pub(super) fn cart_items_from_payload(payload: Value) -> Vec<LineItem> {
    let rows = match payload {
        Value::Array(rows) => rows,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(rows)) => rows,
            _ => {
                warn!("unrecognized cart payload shape, treating as empty");
                return Vec::new();
            }
        },
        _ => {
            warn!("unrecognized cart payload shape, treating as empty");
            return Vec::new();
        }
    };

    rows.into_iter()
        .filter_map(|row| match serde_json::from_value::<LineItem>(row) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(error = %e, "dropping malformed cart row");
                None
            }
        })
        .collect()
}

/// Extract the badge count from a raw cart payload.
///
/// Accepts `{"count": n}`, a bare list (count = number of rows), or a
/// `{"data": [...]}` wrapper. Anything else counts as zero.
pub(super) fn badge_count_from_payload(payload: &Value) -> u32 {
    if let Some(count) = payload.get("count").and_then(Value::as_u64) {
        return u32::try_from(count).unwrap_or(u32::MAX);
    }

    let rows = match payload {
        Value::Array(rows) => Some(rows),
        Value::Object(map) => map.get("data").and_then(Value::as_array),
        _ => None,
    };

    rows.map_or(0, |rows| u32::try_from(rows.len()).unwrap_or(u32::MAX))
}

/// Order the history newest first.
///
/// The backend returns orders in insertion order; the history page
/// wants the most recent purchase on top.
pub(super) fn sort_newest_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(id: i64) -> Value {
        json!({
            "id": id,
            "product": {"id": id * 10, "name": "P", "price": "10.00", "image": null},
            "quantity": 1
        })
    }

    #[test]
    fn test_cart_items_bare_list() {
        let items = cart_items_from_payload(json!([row(1), row(2)]));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id.as_i64(), 1);
    }

    #[test]
    fn test_cart_items_data_wrapper() {
        let items = cart_items_from_payload(json!({"data": [row(7)]}));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id.as_i64(), 7);
    }

    #[test]
    fn test_cart_items_unknown_shape_is_empty() {
        assert!(cart_items_from_payload(json!({"count": 3})).is_empty());
        assert!(cart_items_from_payload(json!("nope")).is_empty());
        assert!(cart_items_from_payload(json!(null)).is_empty());
    }

    #[test]
    fn test_cart_items_drops_malformed_rows() {
        let items = cart_items_from_payload(json!([row(1), {"id": "not-a-row"}]));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_badge_count_object() {
        assert_eq!(badge_count_from_payload(&json!({"count": 4})), 4);
    }

    #[test]
    fn test_badge_count_bare_list() {
        assert_eq!(badge_count_from_payload(&json!([row(1), row(2)])), 2);
    }

    #[test]
    fn test_badge_count_data_wrapper() {
        assert_eq!(badge_count_from_payload(&json!({"data": [row(1)]})), 1);
    }

    #[test]
    fn test_badge_count_unknown_shape_is_zero() {
        assert_eq!(badge_count_from_payload(&json!("huh")), 0);
        assert_eq!(badge_count_from_payload(&json!({"items": []})), 0);
    }

    fn order(id: i64, created_at: &str) -> Order {
        serde_json::from_value(json!({
            "id": id,
            "order_number": format!("ORD-{id:03}"),
            "total": "100.00",
            "created_at": created_at,
            "status": "pending",
            "items": []
        }))
        .unwrap()
    }

    #[test]
    fn test_sort_newest_first() {
        let mut orders = vec![
            order(1, "2025-03-01T09:00:00Z"),
            order(2, "2025-06-15T12:30:00Z"),
            order(3, "2025-01-20T08:00:00Z"),
        ];
        sort_newest_first(&mut orders);
        let ids: Vec<i64> = orders.iter().map(|o| o.id.as_i64()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_newest_first_empty_and_single() {
        let mut empty: Vec<Order> = Vec::new();
        sort_newest_first(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![order(1, "2025-03-01T09:00:00Z")];
        sort_newest_first(&mut single);
        assert_eq!(single.len(), 1);
    }
}
