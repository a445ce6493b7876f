use anyhow::{Context, Result};
use log::{debug, error, info};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::emoji_catalog::{EmojiCatalog, EmojiTable};
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::rewriter::{self, Rewriter};

// @module: Application controller for the rewrite pipeline

/// Counters accumulated over one run
///
/// `documents_with_tokens` counts documents where the detection test fired,
/// whether or not any table key ultimately matched and whether or not the
/// write-back succeeded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of `.md` documents read
    pub documents_scanned: usize,
    /// Number of documents containing at least one `:word:` token
    pub documents_with_tokens: usize,
}

/// Main application controller for the emoji rewrite pipeline
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()
            .context("Configuration validation failed")?;

        Ok(Self { config })
    }

    /// Run the full pipeline: fetch the emoji table, then scan and rewrite
    ///
    /// A fetch failure aborts the run before any file is read.
    pub async fn run(&self, dir_path: PathBuf) -> Result<RunSummary, AppError> {
        if !FileManager::dir_exists(&dir_path) {
            return Err(AppError::File(format!(
                "Input directory does not exist: {:?}",
                dir_path
            )));
        }

        let catalog = EmojiCatalog::new(&self.config.endpoint, &self.config.user_agent);
        info!("fetching emoji table from {}", self.config.endpoint);
        let table = catalog.fetch().await?;

        self.run_with_table(&dir_path, table)
    }

    /// Scan and rewrite with an already-loaded emoji table
    ///
    /// Documents are processed strictly one at a time; each write-back
    /// completes before the next document is read. A failed write-back is
    /// logged and the run continues, counters unchanged.
    pub fn run_with_table(&self, dir_path: &Path, table: EmojiTable) -> Result<RunSummary, AppError> {
        let rewriter = Rewriter::new(
            table,
            &self.config.image_base_path,
            self.config.image_width_px,
        );

        let documents = FileManager::list_documents(dir_path)
            .map_err(|e| AppError::File(format!("Failed to list directory {:?}: {}", dir_path, e)))?;

        let mut summary = RunSummary::default();

        for path in &documents {
            let contents = FileManager::read_to_string(path)
                .map_err(|e| AppError::File(e.to_string()))?;
            summary.documents_scanned += 1;

            if !rewriter::contains_short_code(&contents) {
                continue;
            }

            info!("match found in {:?}", path);
            summary.documents_with_tokens += 1;

            let outcome = rewriter.rewrite(&contents);
            if outcome.modified {
                match FileManager::write_to_file(path, &outcome.text) {
                    Ok(()) => debug!("writing {:?} back with updates", path),
                    Err(e) => error!("error writing {:?}: {}", path, e),
                }
            }
        }

        info!(
            "found {} .md files and {} emoji short name occurrences",
            summary.documents_scanned, summary.documents_with_tokens
        );

        Ok(summary)
    }
}
