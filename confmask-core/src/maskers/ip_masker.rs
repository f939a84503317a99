// confmask-core/src/maskers/ip_masker.rs
//! A `LineMasker` that hides the network part of IPv4 and IPv6 addresses.
//!
//! IPv4 tokens keep their last two octets (`10.20.30.40` becomes
//! `x.x.30.40`); IPv6 tokens keep everything after their second hextet
//! (`2001:db8::1` becomes `y:y::1`).
//!
//! Route-distinguisher lines (`rd <key>:<number>`) get special treatment: the
//! generic patterns would happily rewrite an AS-keyed value such as
//! `65000:100`, so the key is classified first and only address-keyed values
//! are masked.
//!
//! License: MIT OR APACHE 2.0

use regex::Captures;

use crate::engine::LineMasker;
use crate::patterns::{is_ipv4_token, is_valid_ipv6, IPV4_TOKEN, IPV6_TOKEN};
use crate::summary::{log_mask_debug, MaskingSummary};

const RD_KEYWORD: &str = "rd ";

/// What the key half of a route distinguisher turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDistinguisherKey {
    Ipv4,
    Ipv6,
    /// An AS number or anything else that is not an address.
    Opaque,
}

/// Classifies `line` as a route-distinguisher line.
///
/// Returns `None` when the line is not an `rd` line or its value has no `:`,
/// in which case ordinary masking applies. The value is split on its *last*
/// colon, so any extra colons stay with the key.
pub fn classify_route_distinguisher(line: &str) -> Option<RouteDistinguisherKey> {
    let value = line.trim().strip_prefix(RD_KEYWORD)?.trim_start();
    let (key, _assigned_number) = value.rsplit_once(':')?;

    let kind = if is_ipv4_token(key) {
        RouteDistinguisherKey::Ipv4
    } else if is_valid_ipv6(key) {
        RouteDistinguisherKey::Ipv6
    } else {
        RouteDistinguisherKey::Opaque
    };
    Some(kind)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IpMasker;

impl IpMasker {
    pub fn new() -> Self {
        IpMasker
    }

    /// Replaces the first two octets of every IPv4 token with `x.x`.
    pub fn mask_ipv4(&self, line: &str, summary: &mut MaskingSummary) -> String {
        IPV4_TOKEN
            .replace_all(line, |caps: &Captures| {
                let masked = format!("x.x.{}.{}", &caps[3], &caps[4]);
                log_mask_debug(module_path!(), "ipv4", &caps[0], &masked);
                summary.ipv4_masked += 1;
                masked
            })
            .into_owned()
    }

    /// Replaces the first two hextets of every IPv6 token with `y:y`.
    pub fn mask_ipv6(&self, line: &str, summary: &mut MaskingSummary) -> String {
        IPV6_TOKEN
            .replace_all(line, |caps: &Captures| {
                let remainder = caps.get(3).map_or("", |m| m.as_str());
                let masked = format!("y:y{}", remainder);
                log_mask_debug(module_path!(), "ipv6", &caps[0], &masked);
                summary.ipv6_masked += 1;
                masked
            })
            .into_owned()
    }
}

impl LineMasker for IpMasker {
    fn name(&self) -> &'static str {
        "ip"
    }

    fn mask_line(&self, line: &str, summary: &mut MaskingSummary) -> String {
        match classify_route_distinguisher(line) {
            Some(RouteDistinguisherKey::Ipv4) => self.mask_ipv4(line, summary),
            Some(RouteDistinguisherKey::Ipv6) => self.mask_ipv6(line, summary),
            Some(RouteDistinguisherKey::Opaque) => {
                summary.rd_lines_preserved += 1;
                line.to_string()
            }
            None => {
                let ipv4_masked = self.mask_ipv4(line, summary);
                self.mask_ipv6(&ipv4_masked, summary)
            }
        }
    }
}
