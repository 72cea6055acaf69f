//! 單位換算

use foodcost_core::{Grams, Ingredient, Pieces, PriceUnit};
use rust_decimal::Decimal;

/// 單位換算器
pub struct UnitNormalizer;

impl UnitNormalizer {
    /// 原料用量的成本
    ///
    /// `quantity` 以原料的使用單位表示（公斤/公升計價者為克/毫升）。
    pub fn ingredient_cost(ingredient: &Ingredient, quantity: Decimal) -> Decimal {
        Self::cost(ingredient.price_per_unit, ingredient.unit, quantity)
    }

    /// 單價 × 用量 × 換算係數
    pub fn cost(price_per_unit: Decimal, unit: PriceUnit, quantity: Decimal) -> Decimal {
        non_negative(price_per_unit)
            .saturating_mul(non_negative(quantity))
            .saturating_mul(unit.usage_factor())
    }

    /// 每公斤成本換算為實際使用克數的成本
    pub fn scale_per_kg(cost_per_kg: Decimal, grams: Grams) -> Decimal {
        non_negative(cost_per_kg).saturating_mul(non_negative(grams.to_kilograms()))
    }

    /// 單件成本換算為多件成本
    pub fn scale_per_piece(unit_cost: Decimal, count: Pieces) -> Decimal {
        non_negative(unit_cost).saturating_mul(non_negative(count.count()))
    }
}

/// 負值一律視為 0
pub(crate) fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PriceUnit::Kilogram, Decimal::new(250, 2))]
    #[case(PriceUnit::Liter, Decimal::new(250, 2))]
    #[case(PriceUnit::Piece, Decimal::new(250000, 2))]
    #[case(PriceUnit::Gram, Decimal::new(250000, 2))]
    fn test_cost_by_unit(#[case] unit: PriceUnit, #[case] expected: Decimal) {
        // 單價 10.00，用量 250
        let cost = UnitNormalizer::cost(Decimal::new(1000, 2), unit, Decimal::from(250));
        assert_eq!(cost, expected);
    }

    #[test]
    fn test_ingredient_cost() {
        let mozzarella = Ingredient::new("2", "Mozzarella di Bufala", PriceUnit::Kilogram, Decimal::new(1250, 2));
        // 120 g × 12.50/kg = 1.50
        assert_eq!(UnitNormalizer::ingredient_cost(&mozzarella, Decimal::from(120)), Decimal::new(15, 1));
    }

    #[test]
    fn test_negative_inputs_coerced_to_zero() {
        assert_eq!(
            UnitNormalizer::cost(Decimal::from(-3), PriceUnit::Kilogram, Decimal::from(100)),
            Decimal::ZERO
        );
        assert_eq!(
            UnitNormalizer::cost(Decimal::from(3), PriceUnit::Piece, Decimal::from(-2)),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_scale_per_kg() {
        let cost = UnitNormalizer::scale_per_kg(Decimal::new(1020, 2), Grams::new(Decimal::from(250)));
        assert_eq!(cost, Decimal::new(255, 2));
    }

    #[test]
    fn test_scale_per_piece() {
        let cost = UnitNormalizer::scale_per_piece(Decimal::from(5), Pieces::new(Decimal::from(2)));
        assert_eq!(cost, Decimal::from(10));
    }

    #[test]
    fn test_saturates_instead_of_overflow() {
        let cost = UnitNormalizer::cost(Decimal::MAX, PriceUnit::Piece, Decimal::MAX);
        assert_eq!(cost, Decimal::MAX);
    }
}
