pub mod catalog;
pub mod corpus;
pub mod generator;
pub mod menu_item;
pub mod menu_parser;
pub mod script_writer;
pub mod sql_emitter;
pub mod statistics;

pub use catalog::{Category, DEFAULT_PRICE, DietaryTag, Price, SORT_ORDER_BASE, price_for};

pub use menu_item::MenuItem;

pub use menu_parser::{LineKind, MenuParser, ParsedItemLine};

pub use sql_emitter::{SqlEmitter, escape_literal, format_dietary_tags};

pub use script_writer::{DEFAULT_OUTPUT_PATH, ScriptWriter, WriteReport};

pub use statistics::{CategoryStats, DietaryStats, MenuSummary, RepeatedName};

pub use generator::SeedGenerator;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

pub fn version_info() -> String {
    format!("{} v{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        let info = version_info();
        assert!(info.contains("menuseed"));
        assert!(info.contains("0.1.0"));
    }

    #[test]
    fn test_constants() {
        assert_eq!(NAME, "menuseed");
        assert_eq!(VERSION, "0.1.0");
    }
}
