//! FILENAME: core/engine/src/order.rs
//! PURPOSE: Defines the order record and its closed categorical fields.
//! CONTEXT: `RawOrder` is what the generator draws. `Order` adds the derived
//! Sales / Profit / ProfitMargin columns and can only be built through
//! `Order::derive`, so derived values always agree with the raw fields.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Unique sequential identifier of an order.
pub type OrderId = u32;

// ============================================================================
// REGION
// ============================================================================

/// Sales region an order was placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    /// All regions, in the order the generator draws from.
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s.trim())
            .ok_or_else(|| EngineError::UnknownRegion(s.to_string()))
    }
}

// ============================================================================
// CATEGORY
// ============================================================================

/// Product category of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Furniture,
    Clothing,
    Sports,
}

impl Category {
    /// All categories, in the order the generator draws from.
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Furniture,
        Category::Clothing,
        Category::Sports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Furniture => "Furniture",
            Category::Clothing => "Clothing",
            Category::Sports => "Sports",
        }
    }

    /// Base profit rate applied to an order's sales before jitter.
    pub fn margin_rate(&self) -> f64 {
        match self {
            Category::Electronics => 0.12,
            Category::Furniture => 0.20,
            Category::Clothing => 0.35,
            Category::Sports => 0.25,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| EngineError::UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// ORDERS
// ============================================================================

/// An order as drawn by the generator, before derived fields are computed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawOrder {
    pub order_id: OrderId,
    pub date: NaiveDate,
    pub region: Region,
    pub category: Category,
    pub quantity: u32,
    pub unit_price: f64,
}

/// A complete order row: raw fields plus Sales, Profit and ProfitMargin.
///
/// Serialized field names match the exported table header
/// (`OrderID,Date,Region,Category,Quantity,UnitPrice,Sales,Profit,ProfitMargin`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    #[serde(rename = "OrderID")]
    pub order_id: OrderId,
    pub date: NaiveDate,
    pub region: Region,
    pub category: Category,
    pub quantity: u32,
    pub unit_price: f64,
    pub sales: f64,
    pub profit: f64,
    pub profit_margin: f64,
}

/// Column headers of the tabular order layout, in field order.
pub const ORDER_COLUMNS: [&str; 9] = [
    "OrderID",
    "Date",
    "Region",
    "Category",
    "Quantity",
    "UnitPrice",
    "Sales",
    "Profit",
    "ProfitMargin",
];
