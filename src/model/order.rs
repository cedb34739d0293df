/// Represents a customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Update parameters ([`OrderUpdate`])
/// - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
use crate::model::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

const ORDER_ID_PREFIX: &str = "order";

/// Type-safe identifier for Orders, rendered as `order{N}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{ORDER_ID_PREFIX}{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(ORDER_ID_PREFIX)
            .and_then(|n| n.parse::<u32>().ok())
            .map(OrderId)
            .ok_or_else(|| format!("invalid order id: {s}"))
    }
}

impl TryFrom<String> for OrderId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.to_string()
    }
}

/// The two states of an order. The only transition is `Open -> Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Closed,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Open => f.write_str("open"),
            OrderStatus::Closed => f.write_str("closed"),
        }
    }
}

/// One `(product, quantity)` pair within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "order_id")]
    pub id: OrderId,
    pub customer_name: String,
    pub items: Vec<LineItem>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new open Order stamped with the current time.
    pub fn new(id: OrderId, customer_name: impl Into<String>, items: Vec<LineItem>) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            items,
            status: OrderStatus::Open,
            created_at: Utc::now(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == OrderStatus::Open
    }
}

/// Payload for placing a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_name: String,
    pub items: Vec<LineItem>,
}

impl OrderCreate {
    pub fn new(customer_name: impl Into<String>, items: Vec<LineItem>) -> Self {
        Self {
            customer_name: customer_name.into(),
            items,
        }
    }
}

/// Payload for editing an open order. Empty or missing fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub customer_name: Option<String>,
    pub items: Option<Vec<LineItem>>,
}
