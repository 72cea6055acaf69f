//! 半成品與菜單品項模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ComponentUsage;

/// 半成品（有自身產出重量的中間製品）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubRecipe {
    /// 半成品ID
    pub id: String,

    /// 名稱
    pub name: String,

    /// 組成清單（依序）
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub components: Vec<ComponentUsage>,

    /// 投入總重（公斤，僅供參考）
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub initial_weight: Decimal,

    /// 產出重量（公斤，扣除製程損耗）
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub yield_weight: Decimal,

    /// 製作步驟
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub procedure: Option<String>,
}

impl SubRecipe {
    /// 創建新的半成品
    pub fn new(id: impl Into<String>, name: impl Into<String>, yield_weight: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            components: Vec::new(),
            initial_weight: Decimal::ZERO,
            yield_weight,
            procedure: None,
        }
    }

    /// 建構器模式：添加組成
    pub fn with_component(mut self, component: ComponentUsage) -> Self {
        self.components.push(component);
        self
    }

    /// 建構器模式：設置投入總重
    pub fn with_initial_weight(mut self, initial_weight: Decimal) -> Self {
        self.initial_weight = initial_weight;
        self
    }

    /// 建構器模式：設置製作步驟
    pub fn with_procedure(mut self, procedure: impl Into<String>) -> Self {
        self.procedure = Some(procedure.into());
        self
    }

    /// 由組成用量推算的投入總重（公斤）
    ///
    /// 所有組成的用量數值加總後 ÷ 1000，不分種類；負值以 0 計。
    pub fn computed_initial_weight(&self) -> Decimal {
        let total = self
            .components
            .iter()
            .map(|c| c.raw_quantity().max(Decimal::ZERO))
            .fold(Decimal::ZERO, |acc, q| acc.saturating_add(q));
        total / Decimal::ONE_THOUSAND
    }

    /// 建構器模式：以組成推算投入總重
    ///
    /// 產出重量未設定（為 0）時沿用投入總重。應在加入所有組成後呼叫。
    pub fn with_computed_weights(mut self) -> Self {
        self.initial_weight = self.computed_initial_weight();
        if self.yield_weight.is_zero() {
            self.yield_weight = self.initial_weight;
        }
        self
    }

    /// 製程損耗率（%），投入總重未設定時為 None
    ///
    /// 溢位時飽和至 `Decimal::MAX` / `Decimal::MIN`。
    pub fn process_loss_percentage(&self) -> Option<Decimal> {
        if self.initial_weight <= Decimal::ZERO {
            return None;
        }
        let loss = self.initial_weight.saturating_sub(self.yield_weight);
        let saturated = if loss.is_sign_negative() { Decimal::MIN } else { Decimal::MAX };
        let ratio = loss.checked_div(self.initial_weight).unwrap_or(saturated);
        Some(ratio.saturating_mul(Decimal::ONE_HUNDRED))
    }
}

/// 菜單品項（可販售的產品）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// 品項ID
    pub id: String,

    /// 名稱
    pub name: String,

    /// 組成清單（依序）
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub components: Vec<ComponentUsage>,

    /// 售價
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub selling_price: Decimal,

    /// 分類
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub category: String,
}

impl MenuItem {
    /// 創建新的菜單品項
    pub fn new(id: impl Into<String>, name: impl Into<String>, selling_price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            components: Vec::new(),
            selling_price,
            category: String::new(),
        }
    }

    /// 建構器模式：添加組成
    pub fn with_component(mut self, component: ComponentUsage) -> Self {
        self.components.push(component);
        self
    }

    /// 建構器模式：設置分類
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_recipe_builder() {
        let dough = SubRecipe::new("sr1", "Impasto Classico 24h", Decimal::new(1600, 3))
            .with_initial_weight(Decimal::new(1632, 3))
            .with_component(ComponentUsage::ingredient("1", Decimal::from(1000)))
            .with_procedure("Impastare e lasciar maturare 24h");

        assert_eq!(dough.components.len(), 1);
        assert_eq!(dough.yield_weight, Decimal::new(16, 1));
        assert!(dough.procedure.is_some());
    }

    #[test]
    fn test_process_loss_percentage() {
        let sub = SubRecipe::new("sr1", "Ragù", Decimal::from(8)).with_initial_weight(Decimal::from(10));
        assert_eq!(sub.process_loss_percentage(), Some(Decimal::from(20)));

        let no_initial = SubRecipe::new("sr2", "Brodo", Decimal::from(2));
        assert_eq!(no_initial.process_loss_percentage(), None);
    }

    #[test]
    fn test_process_loss_percentage_saturates() {
        let tiny_input = SubRecipe::new("s", "S", Decimal::MAX).with_initial_weight(Decimal::new(1, 28));
        assert_eq!(tiny_input.process_loss_percentage(), Some(Decimal::MIN));

        let huge_loss = SubRecipe::new("s", "S", Decimal::ZERO).with_initial_weight(Decimal::MAX);
        assert_eq!(huge_loss.process_loss_percentage(), Some(Decimal::ONE_HUNDRED));
    }

    #[test]
    fn test_computed_weights() {
        let dough = SubRecipe::new("sr1", "Impasto", Decimal::ZERO)
            .with_component(ComponentUsage::ingredient("1", Decimal::from(1000)))
            .with_component(ComponentUsage::ingredient("5", Decimal::from(2)))
            .with_component(ComponentUsage::ingredient("6", Decimal::from(30)))
            .with_component(ComponentUsage::ingredient("7", Decimal::from(-50)))
            .with_component(ComponentUsage::Unknown)
            .with_computed_weights();

        assert_eq!(dough.initial_weight, Decimal::new(1032, 3));
        assert_eq!(dough.yield_weight, Decimal::new(1032, 3));
        assert_eq!(dough.process_loss_percentage(), Some(Decimal::ZERO));

        let with_yield = SubRecipe::new("sr2", "Ragù", Decimal::from(8))
            .with_component(ComponentUsage::sub_recipe("sr1", Decimal::from(10_000)))
            .with_computed_weights();
        assert_eq!(with_yield.initial_weight, Decimal::TEN);
        assert_eq!(with_yield.yield_weight, Decimal::from(8));
    }

    #[test]
    fn test_deserialize_null_fields() {
        let json = r#"{"id": "sr1", "name": "Impasto", "components": null, "initialWeight": null, "yieldWeight": null}"#;

        let sub: SubRecipe = serde_json::from_str(json).unwrap();
        assert!(sub.components.is_empty());
        assert_eq!(sub.yield_weight, Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_menu_item_camel_case() {
        let json = r#"{
            "id": "m1",
            "name": "Margherita DOP",
            "sellingPrice": 9.5,
            "category": "Pizze Classiche",
            "components": [{"id": "sr1", "type": "subrecipe", "quantity": 250}]
        }"#;

        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.selling_price, Decimal::new(95, 1));
        assert_eq!(item.components.len(), 1);
    }
}
