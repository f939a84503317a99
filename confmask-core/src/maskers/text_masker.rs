// confmask-core/src/maskers/text_masker.rs
//! Masks free text on `description` lines and `!` comment lines.
//!
//! Only the text after the keyword is replaced. Leading indentation is kept so
//! the line still sits in the same configuration block.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::MaskingOptions;
use crate::engine::LineMasker;
use crate::summary::{log_mask_debug, MaskingSummary};

pub const DESCRIPTION_PLACEHOLDER: &str = "description <description removed>";
pub const COMMENT_PLACEHOLDER: &str = "! <comment removed>";

static DESCRIPTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<indent>\s*)description .+").expect("description pattern is valid")
});

// `! ` followed by at least one character, so a bare `!` separator survives.
static COMMENT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<indent>\s*)! .+").expect("comment pattern is valid")
});

#[derive(Debug, Clone, Copy, Default)]
pub struct TextMasker {
    mask_descriptions: bool,
    mask_comments: bool,
}

impl TextMasker {
    pub fn new(options: &MaskingOptions) -> Self {
        Self {
            mask_descriptions: options.mask_descriptions,
            mask_comments: options.mask_comments,
        }
    }

    /// `false` when neither description nor comment masking is enabled.
    pub fn is_active(&self) -> bool {
        self.mask_descriptions || self.mask_comments
    }
}

fn replace_body(pattern: &Regex, line: &str, placeholder: &str, kind: &str) -> Option<String> {
    let caps = pattern.captures(line)?;
    let whole = caps.get(0)?;
    let indent = caps.name("indent").map_or("", |m| m.as_str());
    let masked = format!("{}{}{}", indent, placeholder, &line[whole.end()..]);
    log_mask_debug(module_path!(), kind, whole.as_str(), &masked);
    Some(masked)
}

impl LineMasker for TextMasker {
    fn name(&self) -> &'static str {
        "text"
    }

    fn mask_line(&self, line: &str, summary: &mut MaskingSummary) -> String {
        let mut current = line.to_string();
        if self.mask_descriptions {
            let description =
                replace_body(&DESCRIPTION_LINE, &current, DESCRIPTION_PLACEHOLDER, "description");
            if let Some(masked) = description {
                summary.descriptions_masked += 1;
                current = masked;
            }
        }
        if self.mask_comments {
            let comment = replace_body(&COMMENT_LINE, &current, COMMENT_PLACEHOLDER, "comment");
            if let Some(masked) = comment {
                summary.comments_masked += 1;
                current = masked;
            }
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn masker(mask_descriptions: bool, mask_comments: bool) -> TextMasker {
        TextMasker::new(&MaskingOptions {
            mask_descriptions,
            mask_comments,
            ..Default::default()
        })
    }

    #[test]
    fn description_text_is_removed_and_indent_kept() {
        let mut summary = MaskingSummary::default();
        let masked =
            masker(true, false).mask_line("   description uplink to 10.1.1.1 core", &mut summary);
        assert_eq!(masked, "   description <description removed>");
        assert_eq!(summary.descriptions_masked, 1);
    }

    #[test]
    fn description_line_untouched_when_disabled() {
        let line = " description secret data";
        assert_eq!(masker(false, true).mask_line(line, &mut MaskingSummary::default()), line);
    }

    #[test]
    fn description_keyword_needs_trailing_text() {
        let m = masker(true, false);
        let mut summary = MaskingSummary::default();
        assert_eq!(m.mask_line("description", &mut summary), "description");
        assert_eq!(m.mask_line("description ", &mut summary), "description ");
        assert_eq!(m.mask_line("no description x", &mut summary), "no description x");
        assert_eq!(summary.descriptions_masked, 0);
    }

    #[test]
    fn comment_text_is_removed() {
        let mut summary = MaskingSummary::default();
        let m = masker(false, true);
        assert_eq!(m.mask_line("! secret note", &mut summary), "! <comment removed>");
        assert_eq!(m.mask_line("\t! indented note", &mut summary), "\t! <comment removed>");
        assert_eq!(summary.comments_masked, 2);
    }

    #[test]
    fn bare_comment_markers_survive() {
        let mut summary = MaskingSummary::default();
        let m = masker(true, true);
        assert_eq!(m.mask_line("!", &mut summary), "!");
        assert_eq!(m.mask_line("! ", &mut summary), "! ");
        assert_eq!(m.mask_line("!!", &mut summary), "!!");
        assert_eq!(summary.comments_masked, 0);
    }

    #[test]
    fn separator_controls_do_not_count_as_indentation() {
        let mut summary = MaskingSummary::default();
        let line = "\x1cdescription x";
        assert_eq!(masker(true, false).mask_line(line, &mut summary), line);
        assert_eq!(summary.descriptions_masked, 0);
    }

    #[test]
    fn inactive_when_no_text_option_set() {
        assert!(!masker(false, false).is_active());
        assert!(masker(true, false).is_active());
    }
}
