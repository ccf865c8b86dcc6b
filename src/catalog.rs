use serde::{Serialize, Serializer};
use std::fmt;

pub const SORT_ORDER_BASE: u32 = 100;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "special_items")]
    SpecialItems,
    #[serde(rename = "breakfast")]
    Breakfast,
    #[serde(rename = "dessert")]
    Dessert,
    #[serde(rename = "chutneys")]
    Chutneys,
    #[serde(rename = "sides")]
    Sides,
}

impl Category {
    /// Exact header lookup; the line must already be trimmed.
    pub fn from_header(line: &str) -> Option<Self> {
        match line {
            "Special Item Entrees" | "Street Food" => Some(Category::SpecialItems),
            "Breakfast Items (V)" => Some(Category::Breakfast),
            "Dessert" => Some(Category::Dessert),
            "Chutneys (V, VG)" => Some(Category::Chutneys),
            "Sides" => Some(Category::Sides),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SpecialItems => "special_items",
            Category::Breakfast => "breakfast",
            Category::Dessert => "dessert",
            Category::Chutneys => "chutneys",
            Category::Sides => "sides",
        }
    }

    pub fn unit_price(&self) -> Price {
        match self {
            Category::SpecialItems => Price::from_cents(999),
            Category::Breakfast => Price::from_cents(899),
            Category::Dessert => Price::from_cents(499),
            Category::Chutneys | Category::Sides => Price::from_cents(399),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price charged for items seen before any recognized header.
pub const DEFAULT_PRICE: Price = Price::from_cents(999);

pub fn price_for(category: Option<Category>) -> Price {
    category.map(|c| c.unit_price()).unwrap_or(DEFAULT_PRICE)
}

/// Fixed-point currency amount, stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(u32);

impl Price {
    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Serialized as the same decimal string the SQL carries, e.g. `"8.99"`.
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum DietaryTag {
    #[serde(rename = "vegetarian")]
    Vegetarian,
    #[serde(rename = "vegan")]
    Vegan,
}

impl DietaryTag {
    pub fn from_marker(token: &str) -> Option<Self> {
        match token {
            "V" => Some(DietaryTag::Vegetarian),
            "VG" => Some(DietaryTag::Vegan),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryTag::Vegetarian => "vegetarian",
            DietaryTag::Vegan => "vegan",
        }
    }
}
