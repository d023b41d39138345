use serde::{Deserialize, Serialize};
use store_framework::{RecordId, Resource};

/// Stock of one item held in a warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: RecordId,
    pub warehouse_id: RecordId,
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockCreate {
    pub warehouse_id: RecordId,
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

impl Resource for Stock {
    const NAME: &'static str = "stocks";
    type Create = StockCreate;
    type Update = StockUpdate;
}

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    In,
    Out,
    Transfer,
}

/// A recorded movement of stock, kept separately from edits to the stock itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub stock_id: RecordId,
    pub kind: MovementKind,
    pub quantity: i64,
    /// Target warehouse, for transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_warehouse_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
