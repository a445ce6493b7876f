/*!
 * # emojimd
 *
 * A small pipeline that rewrites emoji short codes (`:smile:`) in Markdown
 * files as inline `<img>` references.
 *
 * ## How it works
 *
 * 1. Fetch the emoji short-name table from a remote endpoint (one GET,
 *    identifying `User-Agent` header, JSON object body).
 * 2. List the `.md` files directly under a given directory (non-recursive,
 *    case-sensitive suffix).
 * 3. Per document: detect `:word:` tokens, replace every recognized short
 *    code with a fixed-template image tag, and write the file back in place.
 *
 * The stages run strictly in sequence. A fetch failure aborts the run before
 * any file is touched.
 *
 * ## Architecture
 *
 * - `app_config`: configuration management
 * - `emoji_catalog`: emoji table loader (HTTP client)
 * - `file_utils`: file system operations
 * - `rewriter`: token detection and substitution
 * - `app_controller`: main application controller
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod emoji_catalog;
pub mod errors;
pub mod file_utils;
pub mod rewriter;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunSummary};
pub use emoji_catalog::{EmojiCatalog, EmojiTable};
pub use rewriter::{RewriteOutcome, Rewriter};
