use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lifecycle status of an order.
///
/// Create stores whatever status it is given, so a name outside the four
/// lifecycle values is kept verbatim as `Other`. Update never produces one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
    Other(String),
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Other(name) => name,
        }
    }

    /// Looks up a lifecycle status by its wire name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == name)
    }
}

impl From<String> for OrderStatus {
    fn from(name: String) -> Self {
        Self::from_name(&name).unwrap_or(OrderStatus::Other(name))
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line item of an order.
///
/// Only `quantity` is constrained; anything else the client sent for the dish
/// (name, price, image url, ...) is kept in `details` and echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Dish {
    #[allow(dead_code)]
    pub fn new(quantity: u64) -> Self {
        Self {
            quantity,
            details: Map::new(),
        }
    }
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<Dish>,
    /// Absent when the order was created without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

#[allow(dead_code)]
impl Order {
    pub fn new(
        id: impl Into<String>,
        deliver_to: impl Into<String>,
        mobile_number: impl Into<String>,
        dishes: Vec<Dish>,
    ) -> Self {
        Self {
            id: id.into(),
            deliver_to: deliver_to.into(),
            mobile_number: mobile_number.into(),
            dishes,
            status: None,
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_pending(&self) -> bool {
        self.status == Some(OrderStatus::Pending)
    }
}
