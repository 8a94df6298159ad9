//! Status enums for orders.

use serde::{Deserialize, Serialize};

/// Order fulfillment status as reported by the backend.
///
/// Unknown values deserialize to [`OrderStatus::Pending`], matching the
/// storefront's "treat anything unrecognized as still pending" display
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    #[default]
    #[serde(other)]
    Pending,
}

impl OrderStatus {
    /// Human-readable label for the status badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// CSS class for the status badge.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Delivered => "text-green-700 bg-green-200/50",
            Self::Shipped | Self::Processing => "text-blue-700 bg-blue-200/50",
            Self::Cancelled => "text-red-700 bg-red-200/50",
            Self::Pending => "text-yellow-700 bg-yellow-200/50",
        }
    }
}
