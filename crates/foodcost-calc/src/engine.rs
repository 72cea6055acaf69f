//! 成本計算引擎主入口

use foodcost_core::{Catalog, CostingConfig, CostingError, MenuItem};
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::classification::{classify_with, food_cost_percentage, margin, FoodCostTier};
use crate::menu_item::MenuItemCostResolver;
use crate::sub_recipe::SubRecipeCostResolver;

/// 成本計算引擎
///
/// 持有一份目錄快照與配置；每次查詢都從頭計算，不保留中間結果。
pub struct CostingEngine {
    /// 目錄快照
    catalog: Catalog,

    /// 計算配置
    config: CostingConfig,
}

impl CostingEngine {
    /// 創建新的成本計算引擎
    pub fn new(catalog: Catalog, config: CostingConfig) -> foodcost_core::Result<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// 使用預設配置
    pub fn with_default_config(catalog: Catalog) -> Self {
        Self {
            catalog,
            config: CostingConfig::default(),
        }
    }

    /// 依 ID 計算半成品每公斤成本
    pub fn sub_recipe_cost_per_kg(&self, id: &str) -> foodcost_core::Result<Decimal> {
        let sub_recipe = self
            .catalog
            .sub_recipe(id)
            .ok_or_else(|| CostingError::SubRecipeNotFound(id.to_string()))?;

        Ok(SubRecipeCostResolver::cost_per_kg(sub_recipe, &self.catalog, &self.config))
    }

    /// 依 ID 計算菜單品項總成本
    pub fn menu_item_cost(&self, id: &str) -> foodcost_core::Result<Decimal> {
        let item = self
            .catalog
            .menu_item(id)
            .ok_or_else(|| CostingError::MenuItemNotFound(id.to_string()))?;

        Ok(MenuItemCostResolver::total_cost(item, &self.catalog, &self.config))
    }

    /// 所有半成品的每公斤成本（目錄順序）
    pub fn sub_recipe_costs(&self) -> Vec<SubRecipeCost> {
        self.catalog
            .sub_recipes()
            .par_iter()
            .map(|sub_recipe| SubRecipeCost {
                sub_recipe_id: sub_recipe.id.clone(),
                name: sub_recipe.name.clone(),
                cost_per_kg: SubRecipeCostResolver::cost_per_kg(sub_recipe, &self.catalog, &self.config),
            })
            .collect()
    }

    /// 單一品項的成本報告
    ///
    /// 品項不必存在於快照中（例如尚未儲存的編輯中品項）。
    pub fn menu_item_report(&self, item: &MenuItem) -> MenuItemReport {
        let cost = MenuItemCostResolver::total_cost(item, &self.catalog, &self.config);
        let percentage = food_cost_percentage(cost, item.selling_price);

        MenuItemReport {
            item_id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            selling_price: item.selling_price,
            cost,
            food_cost_percentage: percentage,
            margin: margin(cost, item.selling_price),
            tier: classify_with(percentage, &self.config),
            above_threshold: percentage > self.config.food_cost_threshold,
        }
    }

    /// 整份菜單分析（儀表板）
    pub fn analyze(&self) -> MenuAnalysis {
        let menu = self.catalog.menu();
        tracing::info!(
            "開始菜單成本分析：原料 {} 筆，半成品 {} 筆，品項 {} 筆",
            self.catalog.ingredients().len(),
            self.catalog.sub_recipes().len(),
            menu.len()
        );

        let start_time = std::time::Instant::now();

        let mut reports: Vec<MenuItemReport> = menu.par_iter().map(|item| self.menu_item_report(item)).collect();

        for report in &reports {
            tracing::debug!(
                "品項 {}: 成本 {}, 食材成本率 {}%, 等級 {:?}",
                report.item_id,
                report.cost,
                report.food_cost_percentage.round_dp(1),
                report.tier
            );
        }

        // 警示依菜單順序
        let alerts: Vec<MenuItemReport> = reports.iter().filter(|r| r.above_threshold).cloned().collect();

        // 毛利由高到低
        reports.sort_by(|a, b| b.margin.cmp(&a.margin).then_with(|| a.item_id.cmp(&b.item_id)));

        let mut analysis = MenuAnalysis::empty();
        if !reports.is_empty() {
            let count = Decimal::from(reports.len());
            let total_percentage = reports
                .iter()
                .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.food_cost_percentage));
            let total_margin = reports.iter().fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.margin));

            analysis.average_food_cost_percentage = total_percentage / count;
            analysis.average_margin = total_margin / count;
        }
        analysis.alerts = alerts;
        analysis.reports = reports;
        analysis.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("菜單成本分析完成，耗時 {:?}", start_time.elapsed());
        tracing::info!("超過警示門檻品項: {}", analysis.alerts.len());

        analysis
    }

    /// 獲取目錄快照引用
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// 獲取配置引用
    pub fn config(&self) -> &CostingConfig {
        &self.config
    }
}

/// 半成品每公斤成本
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubRecipeCost {
    pub sub_recipe_id: String,
    pub name: String,
    pub cost_per_kg: Decimal,
}

/// 菜單品項成本報告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItemReport {
    pub item_id: String,
    pub name: String,
    pub category: String,
    pub selling_price: Decimal,

    /// 總成本
    pub cost: Decimal,

    /// 食材成本率（%）
    pub food_cost_percentage: Decimal,

    /// 毛利
    pub margin: Decimal,

    pub tier: FoodCostTier,

    /// 食材成本率是否超過警示門檻
    pub above_threshold: bool,
}

/// 菜單分析結果
#[derive(Debug, Clone, Serialize)]
pub struct MenuAnalysis {
    /// 各品項報告（毛利由高到低）
    pub reports: Vec<MenuItemReport>,

    /// 平均食材成本率
    pub average_food_cost_percentage: Decimal,

    /// 平均毛利
    pub average_margin: Decimal,

    /// 超過警示門檻的品項（菜單順序）
    pub alerts: Vec<MenuItemReport>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl MenuAnalysis {
    /// 創建空的分析結果
    pub fn empty() -> Self {
        Self {
            reports: Vec::new(),
            average_food_cost_percentage: Decimal::ZERO,
            average_margin: Decimal::ZERO,
            alerts: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 依品項ID查詢報告
    pub fn report(&self, item_id: &str) -> Option<&MenuItemReport> {
        self.reports.iter().find(|r| r.item_id == item_id)
    }
}
