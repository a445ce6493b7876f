/*!
 * Common test utilities for the emojimd test suite
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use emojimd::EmojiTable;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A small emoji table covering the common test cases
pub fn sample_table() -> EmojiTable {
    let mut table = EmojiTable::new();
    table.insert("smile".to_string(), "https://example.com/smile.png".to_string());
    table.insert("heart".to_string(), "https://example.com/heart.png".to_string());
    table.insert("+1".to_string(), "https://example.com/+1.png".to_string());
    table
}

/// The image tag the default configuration produces for a short name
pub fn default_image_tag(name: &str) -> String {
    format!(
        r#"<img src="/images/emoji/{name}.png" alt="{name}" style="height:auto;width:21px;">"#
    )
}
