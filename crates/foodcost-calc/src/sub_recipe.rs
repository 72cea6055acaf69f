//! 半成品成本解析

use foodcost_core::{Catalog, ComponentUsage, CostingConfig, SubRecipe};
use rust_decimal::Decimal;

use crate::normalizer::UnitNormalizer;
use crate::{CostResolution, Diagnostics, WarningKind};

/// 半成品成本解析器
///
/// 計算每公斤成品的成本：組成總成本 ÷ 產出重量。
pub struct SubRecipeCostResolver;

impl SubRecipeCostResolver {
    /// 每公斤成本（深度從 0 開始）
    pub fn cost_per_kg(sub_recipe: &SubRecipe, catalog: &Catalog, config: &CostingConfig) -> Decimal {
        Self::resolve(sub_recipe, catalog, config, 0, &mut Diagnostics::silent())
    }

    /// 從指定深度開始計算
    pub fn cost_per_kg_at_depth(
        sub_recipe: &SubRecipe,
        catalog: &Catalog,
        config: &CostingConfig,
        depth: u32,
    ) -> Decimal {
        Self::resolve(sub_recipe, catalog, config, depth, &mut Diagnostics::silent())
    }

    /// 每公斤成本，附帶降級診斷
    pub fn cost_per_kg_detailed(sub_recipe: &SubRecipe, catalog: &Catalog, config: &CostingConfig) -> CostResolution {
        let mut diagnostics = Diagnostics::collecting();
        let cost = Self::resolve(sub_recipe, catalog, config, 0, &mut diagnostics);
        diagnostics.into_resolution(cost)
    }

    pub(crate) fn resolve(
        sub_recipe: &SubRecipe,
        catalog: &Catalog,
        config: &CostingConfig,
        depth: u32,
        diagnostics: &mut Diagnostics,
    ) -> Decimal {
        let max_depth = config.effective_max_depth();
        if depth > max_depth {
            diagnostics.record(&sub_recipe.id, None, WarningKind::DepthCeiling, || {
                format!("半成品 {} 超過遞迴深度上限 {}", sub_recipe.id, max_depth)
            });
            return Decimal::ZERO;
        }

        let mut total_cost = Decimal::ZERO;

        for component in &sub_recipe.components {
            let contribution = match component {
                ComponentUsage::Ingredient { id, quantity } => match catalog.ingredient(id) {
                    Some(ingredient) => UnitNormalizer::ingredient_cost(ingredient, *quantity),
                    None => {
                        diagnostics.record(&sub_recipe.id, Some(id.as_str()), WarningKind::DanglingReference, || {
                            format!("原料 {} 不存在", id)
                        });
                        Decimal::ZERO
                    }
                },
                ComponentUsage::SubRecipe { id, grams } => {
                    if *id == sub_recipe.id {
                        diagnostics.record(&sub_recipe.id, Some(id.as_str()), WarningKind::SelfReference, || {
                            format!("半成品 {} 引用自身", id)
                        });
                        Decimal::ZERO
                    } else if let Some(nested) = catalog.sub_recipe(id) {
                        let nested_per_kg = Self::resolve(nested, catalog, config, depth.saturating_add(1), diagnostics);
                        UnitNormalizer::scale_per_kg(nested_per_kg, *grams)
                    } else {
                        diagnostics.record(&sub_recipe.id, Some(id.as_str()), WarningKind::DanglingReference, || {
                            format!("半成品 {} 不存在", id)
                        });
                        Decimal::ZERO
                    }
                }
                ComponentUsage::MenuItem { id, .. } => {
                    diagnostics.record(&sub_recipe.id, Some(id.as_str()), WarningKind::UnsupportedComponent, || {
                        format!("半成品不可包含菜單品項 {}", id)
                    });
                    Decimal::ZERO
                }
                ComponentUsage::Unknown => {
                    diagnostics.record(&sub_recipe.id, None, WarningKind::UnsupportedComponent, || {
                        "無法識別的組成種類".to_string()
                    });
                    Decimal::ZERO
                }
            };

            total_cost = total_cost.saturating_add(contribution);
        }

        if sub_recipe.yield_weight > Decimal::ZERO {
            total_cost.checked_div(sub_recipe.yield_weight).unwrap_or(Decimal::MAX)
        } else {
            diagnostics.record(&sub_recipe.id, None, WarningKind::NonPositiveYield, || {
                format!("半成品 {} 產出重量 {} 不為正數", sub_recipe.id, sub_recipe.yield_weight)
            });
            Decimal::ZERO
        }
    }
}
