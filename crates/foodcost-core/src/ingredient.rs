//! 原料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 計價單位
///
/// 決定價格對應多少個「使用單位」：公斤/公升按 1000 克/毫升計價，
/// 其餘單位與使用單位一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceUnit {
    /// 每公斤
    #[serde(rename = "kg")]
    Kilogram,
    /// 每公升
    #[serde(rename = "l")]
    Liter,
    /// 每克
    #[serde(rename = "g")]
    Gram,
    /// 每毫升
    #[serde(rename = "ml")]
    Milliliter,
    /// 每件
    #[serde(rename = "unit", alias = "pz", alias = "piece")]
    Piece,
}

impl PriceUnit {
    /// 使用量換算係數（使用單位 → 計價單位）
    pub fn usage_factor(&self) -> Decimal {
        match self {
            PriceUnit::Kilogram | PriceUnit::Liter => Decimal::new(1, 3),
            PriceUnit::Gram | PriceUnit::Milliliter | PriceUnit::Piece => Decimal::ONE,
        }
    }
}

/// 原料（已定價的原物料）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// 原料ID
    pub id: String,

    /// 名稱
    pub name: String,

    /// 計價單位
    pub unit: PriceUnit,

    /// 單價（每計價單位）
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub price_per_unit: Decimal,

    /// 分類
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub category: String,

    /// 供應商
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
}

impl Ingredient {
    /// 創建新的原料
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit: PriceUnit, price_per_unit: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit,
            price_per_unit,
            category: String::new(),
            supplier_id: None,
        }
    }

    /// 建構器模式：設置分類
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// 建構器模式：設置供應商
    pub fn with_supplier_id(mut self, supplier_id: impl Into<String>) -> Self {
        self.supplier_id = Some(supplier_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PriceUnit::Kilogram, Decimal::new(1, 3))]
    #[case(PriceUnit::Liter, Decimal::new(1, 3))]
    #[case(PriceUnit::Gram, Decimal::ONE)]
    #[case(PriceUnit::Milliliter, Decimal::ONE)]
    #[case(PriceUnit::Piece, Decimal::ONE)]
    fn test_usage_factor(#[case] unit: PriceUnit, #[case] expected: Decimal) {
        assert_eq!(unit.usage_factor(), expected);
    }

    #[test]
    fn test_create_ingredient() {
        let flour = Ingredient::new("1", "Farina Tipo 0", PriceUnit::Kilogram, Decimal::new(120, 2))
            .with_category("Farine")
            .with_supplier_id("s1");

        assert_eq!(flour.id, "1");
        assert_eq!(flour.price_per_unit, Decimal::new(120, 2));
        assert_eq!(flour.category, "Farine");
        assert_eq!(flour.supplier_id.as_deref(), Some("s1"));
    }

    #[test]
    fn test_piece_unit_aliases() {
        let units: Vec<PriceUnit> = serde_json::from_str(r#"["unit", "pz", "piece", "kg", "ml"]"#).unwrap();
        assert_eq!(
            units,
            vec![
                PriceUnit::Piece,
                PriceUnit::Piece,
                PriceUnit::Piece,
                PriceUnit::Kilogram,
                PriceUnit::Milliliter
            ]
        );
    }

    #[test]
    fn test_missing_price_defaults_to_zero() {
        let ing: Ingredient =
            serde_json::from_str(r#"{"id": "9", "name": "Basilico", "unit": "pz"}"#).unwrap();
        assert_eq!(ing.price_per_unit, Decimal::ZERO);
        assert!(ing.supplier_id.is_none());
    }

    #[test]
    fn test_null_price_defaults_to_zero() {
        let ing: Ingredient = serde_json::from_str(
            r#"{"id": "9", "name": "Basilico", "unit": "pz", "pricePerUnit": null, "category": null}"#,
        )
        .unwrap();
        assert_eq!(ing.price_per_unit, Decimal::ZERO);
        assert_eq!(ing.category, "");
    }
}
