/*!
 * Seed Generator Module
 *
 * Ties the parser, the SQL emitter and the script writer together for
 * the binary's execution modes.
 */

use crate::corpus::MENU_TEXT;
use crate::{MenuItem, MenuParser, MenuSummary, ScriptWriter, SqlEmitter, WriteReport};
use tracing::{info, warn};

pub struct SeedGenerator {
    parser: MenuParser,
    emitter: SqlEmitter,
    corpus: &'static str,
}

impl SeedGenerator {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_corpus(MENU_TEXT)
    }

    pub fn with_corpus(corpus: &'static str) -> anyhow::Result<Self> {
        Ok(Self {
            parser: MenuParser::new()?,
            emitter: SqlEmitter::new(),
            corpus,
        })
    }

    pub fn parse_items(&self) -> anyhow::Result<Vec<MenuItem>> {
        let items = self.parser.scan_text(self.corpus)?;
        info!(items = items.len(), "parsed menu corpus");
        Ok(items)
    }

    pub fn render_sql(&self) -> anyhow::Result<String> {
        let items = self.parse_items()?;
        Ok(self.emitter.render_script(&items))
    }

    pub fn summary(&self) -> anyhow::Result<MenuSummary> {
        let items = self.parse_items()?;
        Ok(MenuSummary::from_items(&items))
    }

    pub async fn generate(&self, writer: &ScriptWriter) -> anyhow::Result<(WriteReport, MenuSummary)> {
        let items = self.parse_items()?;
        let script = self.emitter.render_script(&items);
        let report = writer.write_script(&script).await?;
        let summary = MenuSummary::from_items(&items);
        for stats in &summary.categories {
            info!(category = %stats.category, count = stats.count, price = %stats.unit_price, "category rows");
        }
        for repeated in &summary.repeated_names {
            warn!(name = %repeated.name, sort_orders = ?repeated.sort_orders, "item name emitted more than once");
        }
        Ok((report, summary))
    }
}
