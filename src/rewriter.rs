use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::emoji_catalog::EmojiTable;

// @module: Short-code detection and substitution

// @const: Detection regex for `:word:` tokens
//
// A token counts only when followed by whitespace, one of `! . ?`, or end of
// text/line. The regex crate has no lookahead, so the terminator is consumed
// instead of asserted; for an existence test the two are equivalent, and
// detection is only ever used as an existence test.
static SHORT_CODE_DETECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mi):\w+:(?:[\s!.?]|$)").unwrap()
});

/// Test whether a text contains at least one `:word:`-shaped token
pub fn contains_short_code(text: &str) -> bool {
    SHORT_CODE_DETECT.is_match(text)
}

/// Result of rewriting one document's text
#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    /// The (possibly) transformed text
    pub text: String,
    /// True when at least one short code was replaced
    pub modified: bool,
}

/// Replaces recognized short codes with inline image tags
pub struct Rewriter {
    // @field: Short-name to image-reference table
    table: EmojiTable,
    // @field: Base path for generated image tags
    image_base_path: String,
    // @field: Fixed pixel width for generated image tags
    image_width_px: u32,
}

impl Rewriter {
    /// Create a rewriter over an emoji table
    pub fn new(table: EmojiTable, image_base_path: impl Into<String>, image_width_px: u32) -> Self {
        Self {
            table,
            image_base_path: image_base_path.into(),
            image_width_px,
        }
    }

    /// The inline image tag substituted for `:name:`
    pub fn image_tag(&self, name: &str) -> String {
        format!(
            r#"<img src="{base}/{name}.png" alt="{name}" style="height:auto;width:{width}px;">"#,
            base = self.image_base_path,
            name = name,
            width = self.image_width_px
        )
    }

    /// Rewrite one document's text
    ///
    /// Every table key is tried in the table's own iteration order. A key
    /// applies when the *original* text contains the literal `:key:`
    /// (case-sensitive); it is then replaced case-insensitively wherever it
    /// appears, with no boundary constraint, so occurrences inside larger
    /// tokens are replaced too.
    pub fn rewrite(&self, text: &str) -> RewriteOutcome {
        let mut result = text.to_string();
        let mut modified = false;

        for name in self.table.keys() {
            let token = format!(":{}:", name);
            if !text.contains(&token) {
                continue;
            }

            // Keys come from the remote table and may contain regex
            // metacharacters (`+1`, `-1`), so the pattern is built from the
            // escaped literal.
            let pattern = match Regex::new(&format!("(?i){}", regex::escape(&token))) {
                Ok(re) => re,
                Err(e) => {
                    warn!("skipping unusable short name {:?}: {}", name, e);
                    continue;
                }
            };

            debug!("found a match for {}", name);
            let tag = self.image_tag(name);
            result = pattern.replace_all(&result, NoExpand(&tag)).into_owned();
            modified = true;
        }

        RewriteOutcome { text: result, modified }
    }
}
