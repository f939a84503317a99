// confmask-core/src/summary.rs
//! Per-run masking counters and PII-aware debug logging helpers.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

/// Log target for per-match debug lines, so they can be filtered on their own
/// (`RUST_LOG=confmask_core::masker=debug`).
pub const MASK_LOG_TARGET: &str = "confmask_core::masker";

lazy_static! {
    /// Initialized once; decides whether original values may appear in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("CONFMASK_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Counts of everything a run touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskingSummary {
    pub lines_processed: u64,
    pub ipv4_masked: u64,
    pub ipv6_masked: u64,
    /// AS-keyed route distinguishers left as they were.
    pub rd_lines_preserved: u64,
    pub descriptions_masked: u64,
    pub comments_masked: u64,
    pub vrf_names_discovered: u64,
    pub vrf_occurrences_replaced: u64,
    /// Lines that were not valid UTF-8 and were passed through byte-for-byte.
    pub non_utf8_lines: u64,
}

impl MaskingSummary {
    pub fn total_masked(&self) -> u64 {
        self.ipv4_masked
            + self.ipv6_masked
            + self.descriptions_masked
            + self.comments_masked
            + self.vrf_occurrences_replaced
    }

    /// Label/count pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, u64)> {
        vec![
            ("lines processed", self.lines_processed),
            ("ipv4 addresses masked", self.ipv4_masked),
            ("ipv6 addresses masked", self.ipv6_masked),
            ("route distinguishers preserved", self.rd_lines_preserved),
            ("descriptions masked", self.descriptions_masked),
            ("comments masked", self.comments_masked),
            ("vrf names discovered", self.vrf_names_discovered),
            ("vrf occurrences replaced", self.vrf_occurrences_replaced),
            ("non-utf8 lines passed through", self.non_utf8_lines),
        ]
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

/// Logs a single masking event at debug level without leaking the original
/// value unless `CONFMASK_ALLOW_DEBUG_PII=true`.
pub fn log_mask_debug(module_path: &str, masker: &str, original: &str, masked: &str) {
    debug!(
        target: MASK_LOG_TARGET,
        "{} Masking action: Masker='{}', Original='{}', Masked='{}'",
        module_path,
        masker,
        get_loggable_content(original),
        masked
    );
}
