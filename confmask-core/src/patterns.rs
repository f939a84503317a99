// File: confmask-core/src/patterns.rs
//! Pattern library for address and VRF recognition.
//!
//! Two families of patterns live here and must not be confused:
//!
//! * **Substitution tokens** ([`IPV4_TOKEN`], [`IPV6_TOKEN`]) are searched for
//!   anywhere in a line and rewritten. They are deliberately loose: IPv4 octets
//!   are not range-checked and the IPv6 token accepts any pair of 1-4 digit hex
//!   groups joined by a colon.
//! * **Validators** ([`is_ipv4_token`], [`is_valid_ipv6`]) answer whether a whole
//!   string is an address. They are only consulted by the route-distinguisher
//!   exception in the IP masker.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

/// Four dot-separated groups of 1-3 digits. Groups 3 and 4 survive masking.
pub static IPV4_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})\b")
        .expect("IPv4 token pattern is valid")
});

/// Whole-string form of [`IPV4_TOKEN`].
static IPV4_FULL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").expect("IPv4 full pattern is valid")
});

/// Two leading hextets plus an optional `:`-prefixed remainder (group 3).
pub static IPV6_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b([0-9a-f]{1,4}):([0-9a-f]{1,4})(:[0-9a-f:]*)?\b")
        .expect("IPv6 token pattern is valid")
});

// Full, compressed, zone-indexed link-local and IPv4-embedded forms.
const IPV6_ALTERNATIVES: &[&str] = &[
    r"(?:[A-F0-9]{1,4}:){7}[A-F0-9]{1,4}",
    r"(?:[A-F0-9]{1,4}:){1,7}:",
    r"(?:[A-F0-9]{1,4}:){1,6}:[A-F0-9]{1,4}",
    r"(?:[A-F0-9]{1,4}:){1,5}(?::[A-F0-9]{1,4}){1,2}",
    r"(?:[A-F0-9]{1,4}:){1,4}(?::[A-F0-9]{1,4}){1,3}",
    r"(?:[A-F0-9]{1,4}:){1,3}(?::[A-F0-9]{1,4}){1,4}",
    r"(?:[A-F0-9]{1,4}:){1,2}(?::[A-F0-9]{1,4}){1,5}",
    r"[A-F0-9]{1,4}:(?:(?::[A-F0-9]{1,4}){1,6})",
    r":(?:(?::[A-F0-9]{1,4}){1,7}|:)",
    r"fe80:(?::[A-F0-9]{0,4}){0,4}%[a-zA-Z0-9]{1,}",
    concat!(
        r"::(?:ffff(?::0{1,4}){0,1}:){0,1}",
        r"(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}",
        r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)",
    ),
    concat!(
        r"(?:[A-F0-9]{1,4}:){1,4}:",
        r"(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}",
        r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)",
    ),
];

static IPV6_FULL: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!("(?i)^(?:{})$", IPV6_ALTERNATIVES.join("|"));
    Regex::new(&pattern).expect("IPv6 validator pattern is valid")
});

/// Anchored at the start of the raw line; leading whitespace is allowed.
pub static VRF_DEFINITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*vrf definition (\S+)").expect("VRF definition pattern is valid")
});

/// Returns `true` if the whole of `candidate` is an IPv4 token.
///
/// Octet values are not range-checked, so `999.999.999.999` passes.
pub fn is_ipv4_token(candidate: &str) -> bool {
    IPV4_FULL.is_match(candidate)
}

/// Returns `true` if the whole of `candidate` is a well-formed IPv6 address.
pub fn is_valid_ipv6(candidate: &str) -> bool {
    IPV6_FULL.is_match(candidate)
}

/// Extracts the VRF name from a `vrf definition <name>` line.
pub fn vrf_definition_name(line: &str) -> Option<&str> {
    VRF_DEFINITION
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_token_ignores_octet_range() {
        assert!(is_ipv4_token("10.20.30.40"));
        assert!(is_ipv4_token("999.999.999.999"));
        assert!(!is_ipv4_token("10.20.30"));
        assert!(!is_ipv4_token("10.20.30.40.50"));
        assert!(!is_ipv4_token("1000.1.1.1"));
        assert!(!is_ipv4_token("65000"));
    }

    #[test]
    fn ipv4_token_is_word_bounded() {
        let hits: Vec<&str> = IPV4_TOKEN
            .find_iter("a 1.2.3.4 b 5.6.7.8/24 c1.2.3.4")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(hits, vec!["1.2.3.4", "5.6.7.8"]);
    }

    #[test]
    fn ipv6_validator_accepts_common_forms() {
        for addr in [
            "2001:0db8:85a3:0000:0000:8a2e:0370:7334",
            "2001:db8::1",
            "2001:DB8::",
            "::1",
            "::",
            "fe80::1%eth0",
            "::ffff:192.168.1.1",
            "64:ff9b::192.0.2.33",
        ] {
            assert!(is_valid_ipv6(addr), "expected {addr} to validate");
        }
    }

    #[test]
    fn ipv6_validator_rejects_non_addresses() {
        let rejected = [
            "65000",
            "ab:cd",
            "10.0.0.1",
            "2001:db8:::1",
            "gggg::1",
            "1:2:3:4:5:6:7:8:9",
            "",
        ];
        for candidate in rejected {
            assert!(!is_valid_ipv6(candidate), "expected {candidate} to be rejected");
        }
    }

    #[test]
    fn ipv6_token_is_looser_than_validator() {
        // A clock time is not an address but still looks like two hextets.
        assert!(!is_valid_ipv6("12:30:45:99999"));
        let caps = IPV6_TOKEN.captures("uptime 12:30:45").unwrap();
        assert_eq!(&caps[1], "12");
        assert_eq!(&caps[2], "30");
        assert_eq!(caps.get(3).map(|m| m.as_str()), Some(":45"));
    }

    #[test]
    fn ipv6_token_captures_remainder() {
        let caps = IPV6_TOKEN.captures("FE80:1234:5678::1").unwrap();
        assert_eq!(&caps[1], "FE80");
        assert_eq!(&caps[2], "1234");
        assert_eq!(&caps[3], ":5678::1");

        let caps = IPV6_TOKEN.captures("ab:cd").unwrap();
        assert!(caps.get(3).is_none());
    }

    #[test]
    fn vrf_definition_name_is_anchored() {
        assert_eq!(vrf_definition_name("vrf definition MGMT"), Some("MGMT"));
        assert_eq!(vrf_definition_name("   vrf definition CORE-1 extra"), Some("CORE-1"));
        assert_eq!(vrf_definition_name("no vrf definition MGMT"), None);
        assert_eq!(vrf_definition_name("vrf definition"), None);
    }
}
