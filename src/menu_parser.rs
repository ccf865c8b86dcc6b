use crate::catalog::{Category, DietaryTag, SORT_ORDER_BASE, price_for};
use crate::menu_item::MenuItem;
use regex::Regex;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Header(Category),
    Item,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedItemLine {
    pub name: String,
    pub dietary_tags: Vec<DietaryTag>,
    pub description: String,
}

pub struct MenuParser {
    item_regex: Regex,
}

impl MenuParser {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            // name: plain chars or balanced (...) groups, lazily, so the last
            // parenthetical before the colon is the one captured as markers
            item_regex: Regex::new(
                r"^((?:\([^()]*\)|[^:])*?)(?:\s*\(([^()]*)\))?\s*(?::\s*(.*))?$",
            )?,
        })
    }

    pub fn classify_line(&self, line: &str) -> LineKind {
        let line = line.trim();
        if line.is_empty() {
            return LineKind::Blank;
        }
        match Category::from_header(line) {
            Some(category) => LineKind::Header(category),
            None => LineKind::Item,
        }
    }

    pub fn parse_item(&self, line: &str) -> Option<ParsedItemLine> {
        let captures = self.item_regex.captures(line.trim())?;
        let name_part = captures.get(1).map_or("", |m| m.as_str().trim());
        let tags_part = captures.get(2).map_or("", |m| m.as_str().trim());
        let desc_part = captures.get(3).map_or("", |m| m.as_str().trim());

        let mut name = name_part.to_string();
        let mut dietary_tags = Vec::new();
        if !tags_part.is_empty() && is_marker_group(tags_part) {
            for token in tags_part.split(',').map(str::trim) {
                if let Some(tag) = DietaryTag::from_marker(token) {
                    if !dietary_tags.contains(&tag) {
                        dietary_tags.push(tag);
                    }
                }
            }
        } else if !tags_part.is_empty() {
            name = format!("{} ({})", name, tags_part);
        }

        let description = if desc_part.is_empty() {
            name.clone()
        } else {
            desc_part.to_string()
        };

        Some(ParsedItemLine {
            name,
            dietary_tags,
            description,
        })
    }

    pub fn scan_text(&self, content: &str) -> anyhow::Result<Vec<MenuItem>> {
        let mut items: Vec<MenuItem> = Vec::new();
        let mut current_category: Option<Category> = None;
        for (line_number, line) in content.lines().enumerate() {
            match self.classify_line(line) {
                LineKind::Blank => continue,
                LineKind::Header(category) => {
                    debug!(line = line_number + 1, %category, "switching category");
                    current_category = Some(category);
                }
                LineKind::Item => {
                    let Some(parsed) = self.parse_item(line) else {
                        debug!(line = line_number + 1, "skipping unmatched line");
                        continue;
                    };
                    let sort_order = SORT_ORDER_BASE + items.len() as u32;
                    items.push(MenuItem::new(
                        parsed.name,
                        parsed.description,
                        current_category,
                        price_for(current_category),
                        parsed.dietary_tags,
                        sort_order,
                    ));
                }
            }
        }
        Ok(items)
    }
}

/// A parenthetical counts as dietary markers only when nothing but
/// 'V', 'G', ',' and whitespace is left in it.
fn is_marker_group(contents: &str) -> bool {
    contents
        .replace(['V', 'G', ','], "")
        .trim()
        .is_empty()
}
