/*!
 * Statistics Module for menuseed
 *
 * Summarizes a generated batch of menu rows:
 * - Per-category counts and unit prices
 * - Dietary tag coverage
 * - Sort order range and repeated item names
 */

use crate::catalog::{Category, DietaryTag, Price};
use crate::menu_item::MenuItem;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Summary of one generation run
#[derive(Debug, Serialize, Clone)]
pub struct MenuSummary {
    pub total_items: u32,
    pub categories: Vec<CategoryStats>,
    pub uncategorized: u32,
    pub dietary: DietaryStats,
    pub sort_order_range: Option<(u32, u32)>,
    /// Names emitted more than once. Rows are never deduplicated.
    pub repeated_names: Vec<RepeatedName>,
    pub generated_at: DateTime<Utc>,
}

/// Statistics for a single menu section
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CategoryStats {
    pub category: Category,
    pub count: u32,
    pub unit_price: Price,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct DietaryStats {
    pub vegetarian: u32,
    pub vegan: u32,
    pub untagged: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RepeatedName {
    pub name: String,
    pub sort_orders: Vec<u32>,
}

impl MenuSummary {
    pub fn from_items(items: &[MenuItem]) -> Self {
        let mut per_category: BTreeMap<Category, u32> = BTreeMap::new();
        let mut uncategorized = 0;
        let mut dietary = DietaryStats::default();
        let mut by_name: HashMap<&str, Vec<u32>> = HashMap::new();
        let mut name_order: Vec<&str> = Vec::new();

        for item in items {
            match item.category {
                Some(category) => *per_category.entry(category).or_insert(0) += 1,
                None => uncategorized += 1,
            }
            if item.has_tag(DietaryTag::Vegetarian) {
                dietary.vegetarian += 1;
            }
            if item.has_tag(DietaryTag::Vegan) {
                dietary.vegan += 1;
            }
            if item.dietary_tags.is_empty() {
                dietary.untagged += 1;
            }
            let orders = by_name.entry(item.name.as_str()).or_default();
            if orders.is_empty() {
                name_order.push(item.name.as_str());
            }
            orders.push(item.sort_order);
        }

        let categories = per_category
            .into_iter()
            .map(|(category, count)| CategoryStats {
                category,
                count,
                unit_price: category.unit_price(),
            })
            .collect();

        let repeated_names = name_order
            .into_iter()
            .filter_map(|name| {
                let orders = &by_name[name];
                (orders.len() > 1).then(|| RepeatedName {
                    name: name.to_string(),
                    sort_orders: orders.clone(),
                })
            })
            .collect();

        let sort_order_range = match (items.first(), items.last()) {
            (Some(first), Some(last)) => Some((first.sort_order, last.sort_order)),
            _ => None,
        };

        Self {
            total_items: items.len() as u32,
            categories,
            uncategorized,
            dietary,
            sort_order_range,
            repeated_names,
            generated_at: Utc::now(),
        }
    }

    pub fn count_for(&self, category: Category) -> u32 {
        self.categories
            .iter()
            .find(|stats| stats.category == category)
            .map_or(0, |stats| stats.count)
    }
}
