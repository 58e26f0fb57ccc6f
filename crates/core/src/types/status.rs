//! Status enums for orders and inquiries.
//!
//! Both enums carry an explicit transition predicate. Every transition is
//! currently permitted; narrowing the graph (e.g. disallowing
//! `delivered -> pending`) is a change local to these predicates.

use serde::{Deserialize, Serialize};

/// Order fulfillment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// Whether `next` may replace this status.
    #[must_use]
    pub const fn allows_transition(self, _next: Self) -> bool {
        true
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Processing => write!(f, "processing"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Customer inquiry status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    #[default]
    New,
    Read,
    Replied,
}

impl InquiryStatus {
    /// Whether `next` may replace this status.
    #[must_use]
    pub const fn allows_transition(self, _next: Self) -> bool {
        true
    }
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Read => write!(f, "read"),
            Self::Replied => write!(f, "replied"),
        }
    }
}

impl std::str::FromStr for InquiryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "replied" => Ok(Self::Replied),
            _ => Err(format!("invalid inquiry status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Processing).unwrap(),
            "\"processing\""
        );
        let parsed: OrderStatus = serde_json::from_str("\"delivered\"").unwrap();
        assert_eq!(parsed, OrderStatus::Delivered);
    }

    #[test]
    fn test_order_status_from_str() {
        assert_eq!("shipped".parse::<OrderStatus>(), Ok(OrderStatus::Shipped));
        assert!("cancelled".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_all_order_transitions_permitted() {
        let all = [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ];
        for from in all {
            for to in all {
                assert!(from.allows_transition(to));
            }
        }
    }

    #[test]
    fn test_inquiry_status_roundtrip() {
        for status in [InquiryStatus::New, InquiryStatus::Read, InquiryStatus::Replied] {
            let parsed: InquiryStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }
}
