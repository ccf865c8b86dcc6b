use serde::Serialize;

use crate::catalog::{Category, DietaryTag, Price};

/// One row destined for the `menu_items` table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub category: Option<Category>,
    pub price: Price,
    pub dietary_tags: Vec<DietaryTag>,
    pub sort_order: u32,
    pub has_size_options: bool,
    pub is_active: bool,
}

impl MenuItem {
    pub fn new(
        name: String,
        description: String,
        category: Option<Category>,
        price: Price,
        dietary_tags: Vec<DietaryTag>,
        sort_order: u32,
    ) -> Self {
        Self {
            name,
            description,
            category,
            price,
            dietary_tags,
            sort_order,
            has_size_options: false,
            is_active: true,
        }
    }

    pub fn has_tag(&self, tag: DietaryTag) -> bool {
        self.dietary_tags.contains(&tag)
    }
}
