// confmask-core/src/pipeline.rs
//! The orchestrator: runs the masking stages over a whole input.
//!
//! Two modes exist. Without VRF masking every line can be finished on its own,
//! so input is streamed one line at a time. With VRF masking the complete input
//! is buffered first, because a VRF may be used before the line that defines
//! it; discovery runs over the buffer and only then is the first line written.
//!
//! For every line the stage order is fixed: VRF rewrite, then
//! description/comment masking, then IP masking. VRF names must be replaced
//! before IP masking can break them apart.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info, warn};
use std::io::{BufRead, Write};

use crate::config::MaskingOptions;
use crate::engine::LineMasker;
use crate::errors::ConfmaskError;
use crate::line::ConfigLine;
use crate::maskers::ip_masker::IpMasker;
use crate::maskers::text_masker::TextMasker;
use crate::maskers::vrf_masker::VrfMapping;
use crate::summary::MaskingSummary;

#[derive(Debug, Clone)]
pub struct Anonymizer {
    options: MaskingOptions,
    text: TextMasker,
    ip: IpMasker,
}

impl Anonymizer {
    pub fn new(options: MaskingOptions) -> Self {
        Self {
            options,
            text: TextMasker::new(&options),
            ip: IpMasker::new(),
        }
    }

    /// Masks a single raw line, keeping its terminator.
    ///
    /// `vrfs` is only consulted when VRF masking is enabled.
    pub fn anonymize_line(
        &self,
        raw: &str,
        vrfs: Option<&VrfMapping>,
        summary: &mut MaskingSummary,
    ) -> String {
        let line = ConfigLine::split(raw);

        let mut stages: Vec<&dyn LineMasker> = Vec::with_capacity(3);
        if let Some(vrfs) = vrfs.filter(|_| self.options.mask_vrf_names) {
            stages.push(vrfs);
        }
        if self.text.is_active() {
            stages.push(&self.text);
        }
        stages.push(&self.ip);

        let mut body = line.body.to_string();
        for stage in stages {
            body = stage.mask_line(&body, summary);
        }
        body.push_str(line.terminator);
        body
    }

    /// Picks streaming or buffered mode from the options and runs it.
    pub fn run<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: W,
    ) -> Result<MaskingSummary, ConfmaskError> {
        if self.options.requires_two_pass() {
            self.run_two_pass(reader, writer)
        } else {
            self.run_streaming(reader, writer)
        }
    }

    /// One line in, one line out. Memory use does not grow with the input.
    pub fn run_streaming<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<MaskingSummary, ConfmaskError> {
        debug!("Running in streaming mode.");
        let mut summary = MaskingSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            self.emit(&buf, None, &mut writer, &mut summary)?;
        }

        writer.flush()?;
        info!(
            "Streaming run finished: {} line(s), {} token(s) masked.",
            summary.lines_processed,
            summary.total_masked()
        );
        Ok(summary)
    }

    /// Buffers the whole input, discovers VRFs, then masks every line.
    pub fn run_two_pass<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<MaskingSummary, ConfmaskError> {
        let mut lines: Vec<Vec<u8>> = Vec::new();
        loop {
            let mut buf = Vec::new();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            lines.push(buf);
        }
        debug!("Buffered {} line(s) for VRF discovery.", lines.len());

        let vrfs = VrfMapping::discover(
            lines.iter().filter_map(|raw| std::str::from_utf8(raw).ok()),
        )?;

        let mut summary = MaskingSummary {
            vrf_names_discovered: vrfs.len() as u64,
            ..Default::default()
        };
        for raw in &lines {
            self.emit(raw, Some(&vrfs), &mut writer, &mut summary)?;
        }

        writer.flush()?;
        info!(
            "Two-pass run finished: {} line(s), {} token(s) masked.",
            summary.lines_processed,
            summary.total_masked()
        );
        Ok(summary)
    }

    fn emit<W: Write>(
        &self,
        raw: &[u8],
        vrfs: Option<&VrfMapping>,
        writer: &mut W,
        summary: &mut MaskingSummary,
    ) -> Result<(), ConfmaskError> {
        summary.lines_processed += 1;
        match std::str::from_utf8(raw) {
            Ok(text) => {
                let masked = self.anonymize_line(text, vrfs, summary);
                writer.write_all(masked.as_bytes())?;
            }
            Err(e) => {
                warn!(
                    "Line {} is not valid UTF-8 ({}); passing it through unchanged.",
                    summary.lines_processed, e
                );
                summary.non_utf8_lines += 1;
                writer.write_all(raw)?;
            }
        }
        Ok(())
    }
}
