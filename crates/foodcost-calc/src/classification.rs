//! 食材成本率分級

use foodcost_core::CostingConfig;
use rust_decimal::Decimal;
use serde::Serialize;

/// 食材成本率等級（由好到差排序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FoodCostTier {
    /// 良好
    Favorable,
    /// 臨界
    Marginal,
    /// 偏高
    Unfavorable,
}

/// 以預設界線分級（≤25 良好、≤35 臨界、其餘偏高）
pub fn classify_food_cost(percentage: Decimal) -> FoodCostTier {
    classify_with(percentage, &CostingConfig::default())
}

/// 以配置的界線分級，界線值歸入較低等級
pub fn classify_with(percentage: Decimal, config: &CostingConfig) -> FoodCostTier {
    if percentage <= config.favorable_ceiling {
        FoodCostTier::Favorable
    } else if percentage <= config.marginal_ceiling {
        FoodCostTier::Marginal
    } else {
        FoodCostTier::Unfavorable
    }
}

/// 食材成本率（%）：成本 ÷ 售價 × 100，售價不為正數時為 0
pub fn food_cost_percentage(cost: Decimal, selling_price: Decimal) -> Decimal {
    if selling_price <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    cost.checked_div(selling_price)
        .map(|ratio| ratio.saturating_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::MAX)
}

/// 毛利：售價 − 成本（可能為負）
pub fn margin(cost: Decimal, selling_price: Decimal) -> Decimal {
    selling_price.saturating_sub(cost)
}
