//! 披薩店成本計算示例

use foodcost::{Catalog, ComponentUsage, CostingConfig, CostingEngine, Ingredient, MenuItem, PriceUnit, SubRecipe};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    println!("=== 披薩店成本計算示例 ===\n");

    let ingredients = vec![
        Ingredient::new("1", "Farina Tipo 0", PriceUnit::Kilogram, Decimal::new(120, 2)).with_category("Farine"),
        Ingredient::new("2", "Mozzarella di Bufala", PriceUnit::Kilogram, Decimal::new(1250, 2)).with_category("Latticini"),
        Ingredient::new("3", "Pomodoro San Marzano", PriceUnit::Kilogram, Decimal::new(280, 2)).with_category("Conserve"),
        Ingredient::new("4", "Olio EVO", PriceUnit::Liter, Decimal::new(950, 2)).with_category("Oli"),
        Ingredient::new("5", "Lievito di Birra", PriceUnit::Kilogram, Decimal::new(450, 2)).with_category("Lieviti"),
        Ingredient::new("6", "Sale Marino", PriceUnit::Kilogram, Decimal::new(60, 2)).with_category("Spezie"),
        Ingredient::new("7", "Bibita in lattina", PriceUnit::Piece, Decimal::new(80, 2)).with_category("Bevande"),
    ];

    // 投入總重由組成推算：1032 g → 1.032 kg
    let sub_recipes = vec![SubRecipe::new("sr1", "Impasto Classico 24h", Decimal::new(1600, 3))
        .with_component(ComponentUsage::ingredient("1", Decimal::from(1000)))
        .with_component(ComponentUsage::ingredient("5", Decimal::from(2)))
        .with_component(ComponentUsage::ingredient("6", Decimal::from(30)))
        .with_computed_weights()];

    let menu = vec![
        MenuItem::new("m1", "Margherita DOP", Decimal::new(950, 2))
            .with_category("Pizze Classiche")
            .with_component(ComponentUsage::sub_recipe("sr1", Decimal::from(250)))
            .with_component(ComponentUsage::ingredient("3", Decimal::from(100)))
            .with_component(ComponentUsage::ingredient("2", Decimal::from(120)))
            .with_component(ComponentUsage::ingredient("4", Decimal::from(10))),
        MenuItem::new("m2", "Menu Pranzo", Decimal::new(1100, 2))
            .with_category("Menu")
            .with_component(ComponentUsage::menu_item("m1", Decimal::ONE))
            .with_component(ComponentUsage::ingredient("7", Decimal::ONE)),
    ];

    let catalog = Catalog::new(ingredients, sub_recipes, menu);
    let engine = CostingEngine::new(catalog, CostingConfig::default())?;

    println!("半成品每公斤成本:");
    for sub in engine.sub_recipe_costs() {
        println!("  - {}: € {}/kg", sub.name, sub.cost_per_kg.round_dp(2));
    }

    let analysis = engine.analyze();

    println!("\n菜單品項（毛利由高到低）:");
    for report in &analysis.reports {
        println!(
            "  - {}: 成本 € {}, 食材成本率 {}%, 毛利 € {}, 等級 {:?}",
            report.name,
            report.cost.round_dp(2),
            report.food_cost_percentage.round_dp(1),
            report.margin.round_dp(2),
            report.tier
        );
    }

    println!(
        "\n平均食材成本率: {}%，平均毛利: € {}",
        analysis.average_food_cost_percentage.round_dp(1),
        analysis.average_margin.round_dp(2)
    );

    for alert in &analysis.alerts {
        println!("警示：{} 食材成本率 {}% 超過門檻", alert.name, alert.food_cost_percentage.round_dp(1));
    }

    Ok(())
}
