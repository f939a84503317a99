//! Configuration management for `confmask-core`.
//!
//! This module defines [`MaskingOptions`], the resolved set of switches that
//! decide which optional maskers run. Options come from command-line tokens,
//! from an optional YAML file, or both; the sources are combined by
//! [`MaskingOptions::merge`].
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::ConfmaskError;

/// Token that enables VRF name pseudonymization.
pub const FLAG_VRF_NAMES: &str = "-vrfname";
/// Token that enables `description` line masking.
pub const FLAG_DESCRIPTIONS: &str = "-desc";
/// Token that enables `!` comment masking.
pub const FLAG_COMMENTS: &str = "-comment";

/// Which optional maskers are enabled for a run.
///
/// IP masking has no switch here because it always runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct MaskingOptions {
    /// Replace every VRF name with a `vrf_<n>` pseudonym (forces two-pass mode).
    pub mask_vrf_names: bool,
    /// Replace the text of `description` lines.
    pub mask_descriptions: bool,
    /// Replace the text of `! ...` comment lines.
    pub mask_comments: bool,
}

impl MaskingOptions {
    /// Resolves options from loose argument tokens.
    ///
    /// Tokens may appear in any order and any number of times; anything that is
    /// not one of the known flags is ignored.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        for arg in args {
            match arg.as_ref() {
                FLAG_VRF_NAMES => options.mask_vrf_names = true,
                FLAG_DESCRIPTIONS => options.mask_descriptions = true,
                FLAG_COMMENTS => options.mask_comments = true,
                other => debug!("Ignoring unrecognized argument '{}'.", other),
            }
        }
        options
    }

    /// Loads options from a YAML file. Missing keys default to `false`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfmaskError> {
        let path = path.as_ref();
        info!("Loading masking options from: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let options: MaskingOptions = serde_yml::from_str(&text).map_err(|e| {
            ConfmaskError::OptionsParseError(path.display().to_string(), e.to_string())
        })?;
        debug!("Loaded options from {}: {:?}", path.display(), options);
        Ok(options)
    }

    /// Combines two option sets; a masker is enabled if either side enables it.
    pub fn merge(self, other: MaskingOptions) -> MaskingOptions {
        MaskingOptions {
            mask_vrf_names: self.mask_vrf_names || other.mask_vrf_names,
            mask_descriptions: self.mask_descriptions || other.mask_descriptions,
            mask_comments: self.mask_comments || other.mask_comments,
        }
    }

    /// VRF discovery needs the whole input before the first line can be written.
    pub fn requires_two_pass(&self) -> bool {
        self.mask_vrf_names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_args_is_order_independent_and_ignores_unknown_tokens() {
        let options =
            MaskingOptions::from_args(["-comment", "junk", "-vrfname", "-comment", "--desc"]);
        assert!(options.mask_vrf_names);
        assert!(options.mask_comments);
        assert!(!options.mask_descriptions);
    }

    #[test]
    fn no_tokens_means_ip_masking_only() {
        let options = MaskingOptions::from_args(Vec::<String>::new());
        assert_eq!(options, MaskingOptions::default());
        assert!(!options.requires_two_pass());
    }

    #[test]
    fn merge_is_a_logical_or() {
        let from_flags = MaskingOptions { mask_descriptions: true, ..Default::default() };
        let from_file = MaskingOptions { mask_vrf_names: true, ..Default::default() };
        let merged = from_flags.merge(from_file);
        assert!(merged.mask_vrf_names);
        assert!(merged.mask_descriptions);
        assert!(!merged.mask_comments);
        assert!(merged.requires_two_pass());
    }
}
