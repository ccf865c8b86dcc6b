use anyhow::Context;
use std::path::{Path, PathBuf};
use tokio::fs as async_fs;
use tracing::info;

pub const DEFAULT_OUTPUT_PATH: &str = "supabase/migrations/20240221_insert_new_items.sql";

pub struct ScriptWriter {
    output_path: PathBuf,
}

impl ScriptWriter {
    pub fn new(output_path: &Path) -> Self {
        Self {
            output_path: output_path.to_path_buf(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the whole script in one call. The parent directory must
    /// already exist.
    pub async fn write_script(&self, contents: &str) -> anyhow::Result<WriteReport> {
        async_fs::write(&self.output_path, contents)
            .await
            .with_context(|| format!("Failed to write SQL script to {:?}", self.output_path))?;
        let report = WriteReport {
            path: self.output_path.clone(),
            bytes_written: contents.len() as u64,
            statements: contents
                .lines()
                .filter(|line| line.starts_with("INSERT INTO"))
                .count(),
        };
        info!(
            path = ?report.path,
            bytes = report.bytes_written,
            statements = report.statements,
            "wrote SQL script"
        );
        Ok(report)
    }
}

impl Default for ScriptWriter {
    fn default() -> Self {
        Self::new(Path::new(DEFAULT_OUTPUT_PATH))
    }
}

#[derive(Debug)]
pub struct WriteReport {
    pub path: PathBuf,
    pub bytes_written: u64,
    pub statements: usize,
}
