//! # FoodCost Core
//!
//! 核心資料模型與類型定義

pub mod catalog;
pub mod component;
pub mod config;
pub mod ingredient;
pub mod recipe;

// Re-export 主要類型
pub use catalog::Catalog;
pub use component::{ComponentUsage, Grams, Pieces};
pub use config::CostingConfig;
pub use ingredient::{Ingredient, PriceUnit};
pub use recipe::{MenuItem, SubRecipe};

/// 成本計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum CostingError {
    #[error("目錄快照解析失敗: {0}")]
    CatalogParse(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("找不到半成品: {0}")]
    SubRecipeNotFound(String),

    #[error("找不到菜單品項: {0}")]
    MenuItemNotFound(String),
}

impl From<serde_json::Error> for CostingError {
    fn from(err: serde_json::Error) -> Self {
        CostingError::CatalogParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CostingError>;

/// 欄位為 `null` 時與缺漏同樣取預設值
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Option::unwrap_or_default)
}
