/*!
 * End-to-end tests for the scan-and-rewrite pipeline
 */

use anyhow::Result;
use emojimd::app_config::Config;
use emojimd::app_controller::{Controller, RunSummary};
use emojimd::errors::AppError;
use emojimd::file_utils::FileManager;

use crate::common;

/// A document with a recognized short code is rewritten in place
#[test]
fn test_pipeline_withRecognizedShortCode_shouldRewriteDocument() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let doc = common::create_test_file(&dir, "post.md", "Hi :smile: there")?;

    let controller = Controller::new_for_test()?;
    let summary = controller.run_with_table(temp_dir.path(), common::sample_table())?;

    assert_eq!(
        summary,
        RunSummary {
            documents_scanned: 1,
            documents_with_tokens: 1,
        }
    );
    assert_eq!(
        FileManager::read_to_string(&doc)?,
        format!("Hi {} there", common::default_image_tag("smile"))
    );

    Ok(())
}

/// Only lowercase `.md` files are scanned or touched
#[test]
fn test_pipeline_withMixedSuffixes_shouldOnlyTouchMdFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let kept_md = common::create_test_file(&dir, "a.md", "a :smile: token")?;
    let upper_md = common::create_test_file(&dir, "b.MD", "a :smile: token")?;
    let text_file = common::create_test_file(&dir, "c.txt", "a :smile: token")?;

    let controller = Controller::new_for_test()?;
    let summary = controller.run_with_table(temp_dir.path(), common::sample_table())?;

    assert_eq!(summary.documents_scanned, 1);
    assert_eq!(summary.documents_with_tokens, 1);
    assert!(FileManager::read_to_string(&kept_md)?.contains("<img "));
    assert_eq!(FileManager::read_to_string(&upper_md)?, "a :smile: token");
    assert_eq!(FileManager::read_to_string(&text_file)?, "a :smile: token");

    Ok(())
}

/// A `:word:` token with no table entry counts as a detection but writes nothing
#[test]
fn test_pipeline_withUnknownToken_shouldCountDetectionWithoutWrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let doc = common::create_test_file(&dir, "post.md", "just :unknowncode: here")?;

    let controller = Controller::new_for_test()?;
    let summary = controller.run_with_table(temp_dir.path(), common::sample_table())?;

    assert_eq!(summary.documents_scanned, 1);
    assert_eq!(summary.documents_with_tokens, 1);
    assert_eq!(FileManager::read_to_string(&doc)?, "just :unknowncode: here");

    Ok(())
}

/// A document without short-code tokens is scanned but not counted or written
#[test]
fn test_pipeline_withNoTokens_shouldOnlyCountScan() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let doc = common::create_test_file(&dir, "plain.md", "nothing to see")?;

    let controller = Controller::new_for_test()?;
    let summary = controller.run_with_table(temp_dir.path(), common::sample_table())?;

    assert_eq!(summary.documents_scanned, 1);
    assert_eq!(summary.documents_with_tokens, 0);
    assert_eq!(FileManager::read_to_string(&doc)?, "nothing to see");

    Ok(())
}

/// Running the pipeline twice over the same directory is idempotent
#[test]
fn test_pipeline_withSecondRun_shouldLeaveConvertedDocumentAlone() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let doc = common::create_test_file(&dir, "post.md", "Hi :smile: there")?;

    let controller = Controller::new_for_test()?;
    controller.run_with_table(temp_dir.path(), common::sample_table())?;
    let converted = FileManager::read_to_string(&doc)?;

    let summary = controller.run_with_table(temp_dir.path(), common::sample_table())?;

    assert_eq!(summary.documents_scanned, 1);
    assert_eq!(summary.documents_with_tokens, 0);
    assert_eq!(FileManager::read_to_string(&doc)?, converted);

    Ok(())
}

/// Several documents accumulate into one summary
#[test]
fn test_pipeline_withMultipleDocuments_shouldAccumulateCounters() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_file(&dir, "one.md", "first :smile: doc")?;
    common::create_test_file(&dir, "two.md", "second :heart: doc")?;
    common::create_test_file(&dir, "three.md", "no tokens")?;

    let controller = Controller::new_for_test()?;
    let summary = controller.run_with_table(temp_dir.path(), common::sample_table())?;

    assert_eq!(summary.documents_scanned, 3);
    assert_eq!(summary.documents_with_tokens, 2);

    Ok(())
}

/// A missing directory aborts the run with a file error
#[tokio::test]
async fn test_pipeline_withMissingDirectory_shouldFailWithFileError() -> Result<()> {
    let controller = Controller::new_for_test()?;

    let result = controller
        .run(std::path::PathBuf::from("./non_existent_directory_12345"))
        .await;

    match result {
        Err(AppError::File(message)) => {
            assert!(message.contains("non_existent_directory_12345"));
        }
        other => panic!("expected a file error, got {:?}", other),
    }

    Ok(())
}

/// An invalid configuration is rejected before anything runs
#[test]
fn test_controller_withInvalidConfig_shouldFailConstruction() {
    let config = Config {
        endpoint: String::new(),
        ..Config::default()
    };

    assert!(Controller::with_config(config).is_err());
}
