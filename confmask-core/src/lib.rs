// confmask-core/src/lib.rs
//! # confmask Core Library
//!
//! `confmask-core` anonymizes network-device configuration text. It replaces
//! sensitive tokens with deterministic placeholders while leaving the rest of
//! every line alone, so the result still reads like a configuration and can be
//! shared or archived.
//!
//! What gets masked:
//!
//! * IPv4 addresses keep only their last two octets (`x.x.30.40`).
//! * IPv6 addresses keep everything after their second hextet (`y:y::1`).
//! * Route distinguishers keyed by an AS number (`rd 65000:100`) are left
//!   alone; address-keyed ones are masked like any other address.
//! * Optionally, VRF names become `vrf_1`, `vrf_2`, ... everywhere they occur.
//! * Optionally, `description` text and `!` comment text are removed.
//!
//! The library does no argument parsing or terminal handling; it works on any
//! `BufRead`/`Write` pair or on in-memory strings.
//!
//! ## Modules
//!
//! * `config`: [`MaskingOptions`] and the flag tokens that enable each masker.
//! * `patterns`: Address and VRF patterns, plus whole-string validators.
//! * `engine`: The [`LineMasker`] trait shared by all masking stages.
//! * `maskers`: IP, text and VRF masker implementations.
//! * `pipeline`: The [`Anonymizer`] that orders the stages and drives I/O.
//! * `line`: Splitting lines into body and terminator.
//! * `summary`: Per-run counters and PII-aware debug logging.
//! * `headless`: One-call helpers for in-memory text.
//!
//! ## Usage Example
//!
//! ```rust
//! use confmask_core::{anonymize_string, MaskingOptions};
//!
//! fn main() -> Result<(), confmask_core::ConfmaskError> {
//!     let options = MaskingOptions::from_args(["-vrfname"]);
//!     let input = "vrf definition MGMT\n ip address 10.20.30.40/24\n rd 65000:100\n";
//!
//!     let masked = anonymize_string(options, input)?;
//!     assert_eq!(masked, "vrf definition vrf_1\n ip address x.x.30.40/24\n rd 65000:100\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Content never causes an error: lines that match nothing, odd route
//! distinguishers and invalid UTF-8 all pass through unchanged. Errors are
//! reserved for I/O failures and unreadable options files, reported as
//! [`ConfmaskError`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod line;
pub mod maskers;
pub mod patterns;
pub mod pipeline;
pub mod summary;

/// Re-exports the masking options and their flag tokens.
pub use config::{MaskingOptions, FLAG_COMMENTS, FLAG_DESCRIPTIONS, FLAG_VRF_NAMES};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ConfmaskError;

/// Re-exports the masking stage trait and its implementations.
pub use engine::LineMasker;
pub use maskers::ip_masker::{classify_route_distinguisher, IpMasker, RouteDistinguisherKey};
pub use maskers::text_masker::TextMasker;
pub use maskers::vrf_masker::VrfMapping;

pub use line::ConfigLine;
pub use pipeline::Anonymizer;
pub use summary::MaskingSummary;

/// Re-exports the one-shot helpers for in-memory use.
pub use headless::{anonymize_string, anonymize_string_with_summary};
