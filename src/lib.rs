//! # FoodCost
//!
//! 配方成本計算：資料模型（`foodcost-core`）與解析引擎（`foodcost-calc`）的統一入口。

pub use foodcost_calc::{
    classify_food_cost, classify_with, food_cost_percentage, margin, resolve_menu_item_cost,
    resolve_sub_recipe_cost_per_kg, CostResolution, CostWarning, CostingEngine, FoodCostTier, MenuAnalysis,
    MenuItemCostResolver, MenuItemReport, SubRecipeCostResolver, UnitNormalizer, WarningKind,
};
pub use foodcost_core::{
    Catalog, ComponentUsage, CostingConfig, CostingError, Grams, Ingredient, MenuItem, Pieces, PriceUnit, SubRecipe,
};
pub use rust_decimal::Decimal;
