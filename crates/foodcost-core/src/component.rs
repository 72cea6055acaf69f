//! 配方組成（引用圖的邊）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 以克表示的質量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub Decimal);

impl Grams {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// 換算為公斤
    pub fn to_kilograms(self) -> Decimal {
        self.0 / Decimal::ONE_THOUSAND
    }
}

/// 以件數表示的數量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pieces(pub Decimal);

impl Pieces {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn count(self) -> Decimal {
        self.0
    }
}

/// 組成用量
///
/// 單位由種類決定：半成品以克計、菜單品項以件計，
/// 原料則使用該原料計價單位對應的使用單位（見 [`crate::PriceUnit::usage_factor`]）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ComponentUsage {
    /// 原料
    Ingredient {
        id: String,
        #[serde(default, deserialize_with = "crate::null_as_default")]
        quantity: Decimal,
    },

    /// 半成品（克）
    #[serde(rename = "subrecipe")]
    SubRecipe {
        id: String,
        #[serde(rename = "quantity", default, deserialize_with = "crate::null_as_default")]
        grams: Grams,
    },

    /// 菜單品項（件）
    #[serde(rename = "menuitem")]
    MenuItem {
        id: String,
        #[serde(rename = "quantity", default, deserialize_with = "crate::null_as_default")]
        count: Pieces,
    },

    /// 無法識別的種類，不計成本
    #[serde(other)]
    Unknown,
}

impl ComponentUsage {
    pub fn ingredient(id: impl Into<String>, quantity: Decimal) -> Self {
        ComponentUsage::Ingredient {
            id: id.into(),
            quantity,
        }
    }

    pub fn sub_recipe(id: impl Into<String>, grams: Decimal) -> Self {
        ComponentUsage::SubRecipe {
            id: id.into(),
            grams: Grams(grams),
        }
    }

    pub fn menu_item(id: impl Into<String>, count: Decimal) -> Self {
        ComponentUsage::MenuItem {
            id: id.into(),
            count: Pieces(count),
        }
    }

    /// 原始用量數值（不分單位，未知種類為 0）
    pub fn raw_quantity(&self) -> Decimal {
        match self {
            ComponentUsage::Ingredient { quantity, .. } => *quantity,
            ComponentUsage::SubRecipe { grams, .. } => grams.0,
            ComponentUsage::MenuItem { count, .. } => count.count(),
            ComponentUsage::Unknown => Decimal::ZERO,
        }
    }
}
