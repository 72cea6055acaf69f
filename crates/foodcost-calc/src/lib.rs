//! # FoodCost Calculation Engine
//!
//! 配方成本解析引擎
//!
//! 對唯讀的目錄快照做純函式遞迴求值：不快取、不修改輸入、不回傳錯誤。
//! 懸空引用、自我引用與循環引用一律以 0 成本降級處理，
//! 由深度上限保證遞迴必然終止。

pub mod classification;
pub mod engine;
pub mod menu_item;
pub mod normalizer;
pub mod sub_recipe;

// Re-export 主要類型
pub use classification::{classify_food_cost, classify_with, food_cost_percentage, margin, FoodCostTier};
pub use engine::{CostingEngine, MenuAnalysis, MenuItemReport, SubRecipeCost};
pub use menu_item::MenuItemCostResolver;
pub use normalizer::UnitNormalizer;
pub use sub_recipe::SubRecipeCostResolver;

use foodcost_core::{Catalog, CostingConfig, MenuItem, SubRecipe};
use rust_decimal::Decimal;
use serde::Serialize;

/// 計算半成品每公斤成本（預設配置，深度從 0 開始）
pub fn resolve_sub_recipe_cost_per_kg(sub_recipe: &SubRecipe, catalog: &Catalog) -> Decimal {
    SubRecipeCostResolver::cost_per_kg(sub_recipe, catalog, &CostingConfig::default())
}

/// 計算菜單品項總成本（預設配置，深度從 0 開始）
pub fn resolve_menu_item_cost(item: &MenuItem, catalog: &Catalog) -> Decimal {
    MenuItemCostResolver::total_cost(item, catalog, &CostingConfig::default())
}

/// 含診斷資訊的計算結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostResolution {
    /// 計算所得成本（與不含診斷的版本相同）
    pub cost: Decimal,

    /// 降級處理的組成
    pub warnings: Vec<CostWarning>,
}

impl CostResolution {
    /// 是否所有組成都正常解析
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// 成本計算警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostWarning {
    /// 發生降級的實體（半成品或菜單品項）
    pub entity_id: String,

    /// 引發降級的組成目標ID
    pub component_id: Option<String>,

    pub kind: WarningKind,

    pub message: String,
}

impl CostWarning {
    pub fn new(entity_id: &str, component_id: Option<&str>, kind: WarningKind, message: String) -> Self {
        Self {
            entity_id: entity_id.to_string(),
            component_id: component_id.map(str::to_string),
            kind,
            message,
        }
    }
}

/// 降級原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WarningKind {
    /// 引用的實體不存在於快照中
    DanglingReference,
    /// 直接引用自身
    SelfReference,
    /// 超過遞迴深度上限
    DepthCeiling,
    /// 產出重量不為正數
    NonPositiveYield,
    /// 該位置不支援此種類的組成
    UnsupportedComponent,
}

/// 診斷收集器
///
/// 不需要診斷時不配置記憶體。
pub(crate) struct Diagnostics {
    warnings: Option<Vec<CostWarning>>,
}

impl Diagnostics {
    pub(crate) fn silent() -> Self {
        Self { warnings: None }
    }

    pub(crate) fn collecting() -> Self {
        Self {
            warnings: Some(Vec::new()),
        }
    }

    pub(crate) fn record(
        &mut self,
        entity_id: &str,
        component_id: Option<&str>,
        kind: WarningKind,
        message: impl FnOnce() -> String,
    ) {
        tracing::debug!(entity_id, ?component_id, ?kind, "成本組成降級為 0");
        if let Some(warnings) = self.warnings.as_mut() {
            warnings.push(CostWarning::new(entity_id, component_id, kind, message()));
        }
    }

    pub(crate) fn into_resolution(self, cost: Decimal) -> CostResolution {
        CostResolution {
            cost,
            warnings: self.warnings.unwrap_or_default(),
        }
    }
}
