//! 目錄快照
//!
//! 外部同步層在每次計算時提供的唯讀快照：原料、半成品與菜單三個集合，
//! 各自以 ID 建立索引。

use serde::Deserialize;
use std::collections::HashMap;

use crate::{Ingredient, MenuItem, SubRecipe};

/// 快照文件格式（JSON）
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument {
    #[serde(default)]
    ingredients: Vec<Ingredient>,
    #[serde(default)]
    sub_recipes: Vec<SubRecipe>,
    #[serde(default)]
    menu: Vec<MenuItem>,
}

/// 目錄快照
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    ingredients: Vec<Ingredient>,
    sub_recipes: Vec<SubRecipe>,
    menu: Vec<MenuItem>,

    ingredient_index: HashMap<String, usize>,
    sub_recipe_index: HashMap<String, usize>,
    menu_index: HashMap<String, usize>,
}

impl Catalog {
    /// 從三個集合建立快照
    ///
    /// ID 重複時以第一筆為準。
    pub fn new(ingredients: Vec<Ingredient>, sub_recipes: Vec<SubRecipe>, menu: Vec<MenuItem>) -> Self {
        let ingredient_index = build_index(ingredients.iter().map(|i| i.id.as_str()));
        let sub_recipe_index = build_index(sub_recipes.iter().map(|s| s.id.as_str()));
        let menu_index = build_index(menu.iter().map(|m| m.id.as_str()));

        Self {
            ingredients,
            sub_recipes,
            menu,
            ingredient_index,
            sub_recipe_index,
            menu_index,
        }
    }

    /// 從 JSON 快照文件建立
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Ok(Self::new(doc.ingredients, doc.sub_recipes, doc.menu))
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredient_index.get(id).map(|&idx| &self.ingredients[idx])
    }

    pub fn sub_recipe(&self, id: &str) -> Option<&SubRecipe> {
        self.sub_recipe_index.get(id).map(|&idx| &self.sub_recipes[idx])
    }

    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu_index.get(id).map(|&idx| &self.menu[idx])
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn sub_recipes(&self) -> &[SubRecipe] {
        &self.sub_recipes
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// 移除原料後的新快照（模擬外部刪除）
    pub fn without_ingredient(&self, id: &str) -> Self {
        let ingredients = self.ingredients.iter().filter(|i| i.id != id).cloned().collect();
        Self::new(ingredients, self.sub_recipes.clone(), self.menu.clone())
    }
}

fn build_index<'a>(ids: impl Iterator<Item = &'a str>) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (idx, id) in ids.enumerate() {
        index.entry(id.to_string()).or_insert(idx);
    }
    index
}
