use crate::catalog::DietaryTag;
use crate::menu_item::MenuItem;

pub const SCRIPT_HEADER: &str = "-- Insert new menu items";
pub const TABLE_NAME: &str = "menu_items";
/// Category literal for rows seen before any header.
pub const UNSET_CATEGORY: &str = "None";
pub const COLUMNS: [&str; 8] = [
    "name",
    "description",
    "category",
    "single_price",
    "has_size_options",
    "dietary_tags",
    "is_active",
    "sort_order",
];

/// Doubles single quotes. Nothing else is escaped.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

pub fn format_dietary_tags(tags: &[DietaryTag]) -> String {
    let joined = tags
        .iter()
        .map(DietaryTag::as_str)
        .collect::<Vec<_>>()
        .join(",");
    format!("{{{}}}", joined)
}

pub struct SqlEmitter {
    table: String,
}

impl SqlEmitter {
    pub fn new() -> Self {
        Self {
            table: TABLE_NAME.to_string(),
        }
    }

    pub fn insert_statement(&self, item: &MenuItem) -> String {
        let category = item.category.map_or(UNSET_CATEGORY, |category| category.as_str());
        format!(
            "INSERT INTO {} ({}) VALUES ('{}', '{}', '{}', {}, {}, '{}', {}, {});",
            self.table,
            COLUMNS.join(", "),
            escape_literal(&item.name),
            escape_literal(&item.description),
            category,
            item.price,
            item.has_size_options,
            format_dietary_tags(&item.dietary_tags),
            item.is_active,
            item.sort_order,
        )
    }

    pub fn render_script(&self, items: &[MenuItem]) -> String {
        let statements: Vec<String> = items
            .iter()
            .map(|item| self.insert_statement(item))
            .collect();
        let body_len: usize = statements.iter().map(|s| s.len() + 1).sum();
        let mut script = String::with_capacity(SCRIPT_HEADER.len() + body_len + 1);
        script.push_str(SCRIPT_HEADER);
        script.push('\n');
        script.push_str(&statements.join("\n"));
        script.push('\n');
        script
    }
}

impl Default for SqlEmitter {
    fn default() -> Self {
        Self::new()
    }
}
