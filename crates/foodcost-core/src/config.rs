//! 成本計算配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::CostingError;

/// 成本計算參數配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostingConfig {
    /// 遞迴深度上限
    ///
    /// 深度超過此值時直接回傳 0，用來切斷循環引用。
    /// 半成品與菜單品項各自計算深度。不可超過 [`CostingConfig::MAX_DEPTH_LIMIT`]。
    pub max_depth: u32,

    /// 「良好」等級上限（%，含）
    pub favorable_ceiling: Decimal,

    /// 「臨界」等級上限（%，含）
    pub marginal_ceiling: Decimal,

    /// 食材成本警示門檻（%）
    pub food_cost_threshold: Decimal,
}

impl CostingConfig {
    pub const DEFAULT_MAX_DEPTH: u32 = 5;

    /// 深度上限的硬上界，分支循環的呼叫次數隨深度指數成長
    pub const MAX_DEPTH_LIMIT: u32 = 16;

    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            favorable_ceiling: Decimal::from(25),
            marginal_ceiling: Decimal::from(35),
            food_cost_threshold: Decimal::from(30),
        }
    }

    /// 建構器模式：設置遞迴深度上限
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// 實際生效的深度上限（不超過硬上界）
    pub fn effective_max_depth(&self) -> u32 {
        self.max_depth.min(Self::MAX_DEPTH_LIMIT)
    }

    /// 建構器模式：設置分級界線
    pub fn with_tier_ceilings(mut self, favorable: Decimal, marginal: Decimal) -> Self {
        self.favorable_ceiling = favorable;
        self.marginal_ceiling = marginal;
        self
    }

    /// 建構器模式：設置警示門檻
    pub fn with_food_cost_threshold(mut self, threshold: Decimal) -> Self {
        self.food_cost_threshold = threshold;
        self
    }

    /// 檢查配置是否合法
    pub fn validate(&self) -> crate::Result<()> {
        if self.max_depth > Self::MAX_DEPTH_LIMIT {
            return Err(CostingError::InvalidConfig(format!(
                "遞迴深度上限 {} 超過允許值 {}",
                self.max_depth,
                Self::MAX_DEPTH_LIMIT
            )));
        }

        if self.favorable_ceiling < Decimal::ZERO || self.marginal_ceiling < Decimal::ZERO {
            return Err(CostingError::InvalidConfig("分級界線不可為負數".to_string()));
        }

        if self.favorable_ceiling > self.marginal_ceiling {
            return Err(CostingError::InvalidConfig(format!(
                "良好等級上限 {} 大於臨界等級上限 {}",
                self.favorable_ceiling, self.marginal_ceiling
            )));
        }

        if self.food_cost_threshold < Decimal::ZERO || self.food_cost_threshold > Decimal::ONE_HUNDRED {
            return Err(CostingError::InvalidConfig(format!(
                "警示門檻 {} 必須介於 0 到 100",
                self.food_cost_threshold
            )));
        }

        Ok(())
    }
}

impl Default for CostingConfig {
    fn default() -> Self {
        Self::new()
    }
}
