//! Cart count badge for the navigation header.
//!
//! The badge is an independent read of the cart endpoint, not a view of
//! the cart page's store: it lives in the header on every page, most of
//! which have no [`super::CartStore`] at all.

use tracing::warn;

use crate::api::BackendClient;

/// Item count for the header badge.
///
/// Any failure renders as zero; the badge is decoration, not a place to
/// surface errors.
pub async fn badge_count(client: &BackendClient) -> u32 {
    match client.cart_count().await {
        Ok(count) => count,
        Err(e) => {
            warn!(error = %e, "failed to fetch cart count for badge");
            0
        }
    }
}
