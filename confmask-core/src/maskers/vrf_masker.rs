// confmask-core/src/maskers/vrf_masker.rs
//! VRF name discovery and pseudonymization.
//!
//! Masking VRF names is a two-step affair. [`VrfMapping::discover`] walks the
//! complete input once and hands out `vrf_1`, `vrf_2`, ... to names in the
//! order their `vrf definition` lines first appear. The finished mapping is
//! then used read-only as a [`LineMasker`], rewriting every whole-word
//! occurrence of each name wherever it appears (interface bindings, BGP
//! stanzas, `vxlan vrf` mappings, descriptions).
//!
//! Names are substituted in discovery order, not longest-first. Because
//! matching is whole-word this only matters for unusual names.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use regex::{NoExpand, Regex, RegexBuilder};

use crate::engine::LineMasker;
use crate::errors::ConfmaskError;
use crate::patterns::vrf_definition_name;
use crate::summary::{log_mask_debug, MaskingSummary};

const PSEUDONYM_PREFIX: &str = "vrf_";

/// One discovered VRF and the compiled pattern for its occurrences.
#[derive(Debug)]
struct VrfEntry {
    original: String,
    pseudonym: String,
    occurrence: Regex,
}

/// Ordered, immutable map from original VRF names to pseudonyms.
#[derive(Debug, Default)]
pub struct VrfMapping {
    entries: Vec<VrfEntry>,
}

impl VrfMapping {
    /// Builds the mapping from every `vrf definition <name>` line in `lines`.
    ///
    /// Repeated definitions of the same name keep their first pseudonym.
    pub fn discover<'a, I>(lines: I) -> Result<Self, ConfmaskError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut entries: Vec<VrfEntry> = Vec::new();

        for line in lines {
            let Some(name) = vrf_definition_name(line) else { continue };
            if entries.iter().any(|entry| entry.original == name) {
                continue;
            }

            let pseudonym = format!("{}{}", PSEUDONYM_PREFIX, entries.len() + 1);
            let occurrence = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(name)))
                .size_limit(10 * (1 << 20))
                .build()
                .map_err(|e| ConfmaskError::PatternCompilationError(pseudonym.clone(), e))?;

            debug!("Registered VRF as '{}'.", pseudonym);
            entries.push(VrfEntry {
                original: name.to_string(),
                pseudonym,
                occurrence,
            });
        }

        info!("Discovered {} VRF definition(s).", entries.len());
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the pseudonym assigned to `original`.
    pub fn pseudonym(&self, original: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.original == original)
            .map(|entry| entry.pseudonym.as_str())
    }

    /// `(original, pseudonym)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|entry| (entry.original.as_str(), entry.pseudonym.as_str()))
    }
}

impl LineMasker for VrfMapping {
    fn name(&self) -> &'static str {
        "vrf"
    }

    fn mask_line(&self, line: &str, summary: &mut MaskingSummary) -> String {
        let mut current = line.to_string();
        for entry in &self.entries {
            let hits = entry.occurrence.find_iter(&current).count();
            if hits == 0 {
                continue;
            }
            current = entry
                .occurrence
                .replace_all(&current, NoExpand(&entry.pseudonym))
                .into_owned();
            log_mask_debug(module_path!(), self.name(), &entry.original, &entry.pseudonym);
            summary.vrf_occurrences_replaced += hits as u64;
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn mapping(config: &str) -> VrfMapping {
        VrfMapping::discover(config.lines()).unwrap()
    }

    #[test]
    fn pseudonyms_follow_first_discovery_order() {
        let vrfs = mapping("vrf definition MGMT\n!\nvrf definition CORE\nvrf definition MGMT\n");
        assert_eq!(vrfs.len(), 2);
        let pairs: Vec<(&str, &str)> = vrfs.iter().collect();
        assert_eq!(pairs, vec![("MGMT", "vrf_1"), ("CORE", "vrf_2")]);
        assert_eq!(vrfs.pseudonym("CORE"), Some("vrf_2"));
        assert_eq!(vrfs.pseudonym("EDGE"), None);
    }

    #[test]
    fn only_definition_lines_register_names() {
        let vrfs = mapping("ip vrf forwarding MGMT\n vrf definition BLUE\n");
        assert_eq!(vrfs.pseudonym("MGMT"), None);
        assert_eq!(vrfs.pseudonym("BLUE"), Some("vrf_1"));
    }

    #[test]
    fn rewrite_replaces_whole_words_only() {
        let vrfs = mapping("vrf definition RED\n");
        let mut summary = MaskingSummary::default();
        assert_eq!(
            vrfs.mask_line("vxlan vrf RED vni 100 ! CREDIT RED-1", &mut summary),
            "vxlan vrf vrf_1 vni 100 ! CREDIT vrf_1-1"
        );
        assert_eq!(summary.vrf_occurrences_replaced, 2);
    }

    #[test]
    fn overlapping_names_use_registry_order() {
        let vrfs = mapping("vrf definition RED\nvrf definition REDTEAM\n");
        let mut summary = MaskingSummary::default();
        assert_eq!(
            vrfs.mask_line("RED REDTEAM", &mut summary),
            "vrf_1 vrf_2"
        );
    }

    #[test]
    fn names_with_regex_metacharacters_are_literal() {
        let vrfs = mapping("vrf definition A.B\n");
        let mut summary = MaskingSummary::default();
        assert_eq!(vrfs.mask_line("vrf A.B AxB", &mut summary), "vrf vrf_1 AxB");
    }

    #[test]
    fn names_need_word_boundaries_on_both_sides() {
        // Word boundaries never form between a space and a symbol.
        let vrfs = mapping("vrf definition $1\n");
        let mut summary = MaskingSummary::default();
        assert_eq!(vrfs.pseudonym("$1"), Some("vrf_1"));
        assert_eq!(vrfs.mask_line("x $1 y", &mut summary), "x $1 y");
        assert_eq!(summary.vrf_occurrences_replaced, 0);
    }

    #[test]
    fn empty_mapping_leaves_lines_alone() {
        let vrfs = mapping("hostname leaf1\n");
        assert!(vrfs.is_empty());
        let mut summary = MaskingSummary::default();
        assert_eq!(vrfs.mask_line("hostname leaf1", &mut summary), "hostname leaf1");
    }
}
