//! 菜單品項成本解析

use foodcost_core::{Catalog, ComponentUsage, CostingConfig, MenuItem};
use rust_decimal::Decimal;

use crate::normalizer::UnitNormalizer;
use crate::sub_recipe::SubRecipeCostResolver;
use crate::{CostResolution, Diagnostics, WarningKind};

/// 菜單品項成本解析器
///
/// 計算品項的總成本（無產出重量概念，不做除法）。
/// 巢狀半成品每次都從深度 0 重新計算，與菜單品項的巢狀深度互相獨立。
pub struct MenuItemCostResolver;

impl MenuItemCostResolver {
    /// 總成本（深度從 0 開始）
    pub fn total_cost(item: &MenuItem, catalog: &Catalog, config: &CostingConfig) -> Decimal {
        Self::resolve(item, catalog, config, 0, &mut Diagnostics::silent())
    }

    /// 從指定深度開始計算
    pub fn total_cost_at_depth(item: &MenuItem, catalog: &Catalog, config: &CostingConfig, depth: u32) -> Decimal {
        Self::resolve(item, catalog, config, depth, &mut Diagnostics::silent())
    }

    /// 總成本，附帶降級診斷
    pub fn total_cost_detailed(item: &MenuItem, catalog: &Catalog, config: &CostingConfig) -> CostResolution {
        let mut diagnostics = Diagnostics::collecting();
        let cost = Self::resolve(item, catalog, config, 0, &mut diagnostics);
        diagnostics.into_resolution(cost)
    }

    fn resolve(
        item: &MenuItem,
        catalog: &Catalog,
        config: &CostingConfig,
        depth: u32,
        diagnostics: &mut Diagnostics,
    ) -> Decimal {
        let max_depth = config.effective_max_depth();
        if depth > max_depth {
            diagnostics.record(&item.id, None, WarningKind::DepthCeiling, || {
                format!("菜單品項 {} 超過遞迴深度上限 {}", item.id, max_depth)
            });
            return Decimal::ZERO;
        }

        item.components.iter().fold(Decimal::ZERO, |total, component| {
            let contribution = match component {
                ComponentUsage::Ingredient { id, quantity } => match catalog.ingredient(id) {
                    Some(ingredient) => UnitNormalizer::ingredient_cost(ingredient, *quantity),
                    None => {
                        diagnostics.record(&item.id, Some(id.as_str()), WarningKind::DanglingReference, || {
                            format!("原料 {} 不存在", id)
                        });
                        Decimal::ZERO
                    }
                },
                ComponentUsage::SubRecipe { id, grams } => match catalog.sub_recipe(id) {
                    Some(sub_recipe) => {
                        let per_kg = SubRecipeCostResolver::resolve(sub_recipe, catalog, config, 0, diagnostics);
                        UnitNormalizer::scale_per_kg(per_kg, *grams)
                    }
                    None => {
                        diagnostics.record(&item.id, Some(id.as_str()), WarningKind::DanglingReference, || {
                            format!("半成品 {} 不存在", id)
                        });
                        Decimal::ZERO
                    }
                },
                ComponentUsage::MenuItem { id, count } => {
                    if *id == item.id {
                        diagnostics.record(&item.id, Some(id.as_str()), WarningKind::SelfReference, || {
                            format!("菜單品項 {} 引用自身", id)
                        });
                        Decimal::ZERO
                    } else if let Some(nested) = catalog.menu_item(id) {
                        let unit_cost = Self::resolve(nested, catalog, config, depth.saturating_add(1), diagnostics);
                        UnitNormalizer::scale_per_piece(unit_cost, *count)
                    } else {
                        diagnostics.record(&item.id, Some(id.as_str()), WarningKind::DanglingReference, || {
                            format!("菜單品項 {} 不存在", id)
                        });
                        Decimal::ZERO
                    }
                }
                ComponentUsage::Unknown => {
                    diagnostics.record(&item.id, None, WarningKind::UnsupportedComponent, || {
                        "無法識別的組成種類".to_string()
                    });
                    Decimal::ZERO
                }
            };

            total.saturating_add(contribution)
        })
    }
}
