use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

use crate::errors::DomainError;

/// Grammar accepted for the textual address argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressParseMode {
    /// Four decimal octets, `a.b.c.d`, each 0-255.
    #[default]
    Strict,
    /// The `inet_aton(3)` grammar: one to four dot-separated parts, each
    /// decimal, octal (`0` prefix) or hex (`0x` prefix, bare `0x` is 0).
    /// The last part fills all remaining low-order bytes. Parsing stops
    /// at the first whitespace character; anything after it is ignored.
    Legacy,
}

/// An IPv4 address parsed from the command line, ready for reverse lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LookupAddress(Ipv4Addr);

impl LookupAddress {
    /// Parses `text` under `mode`. Malformed input is always rejected;
    /// there is no zero-address fallback in either mode.
    pub fn parse(text: &str, mode: AddressParseMode) -> Result<Self, DomainError> {
        let parsed = match mode {
            AddressParseMode::Strict => text.parse::<Ipv4Addr>().ok(),
            AddressParseMode::Legacy => parse_legacy(text),
        };

        parsed
            .map(Self)
            .ok_or_else(|| DomainError::InvalidIpAddress(text.to_string()))
    }

    pub fn ip(&self) -> Ipv4Addr {
        self.0
    }
}

impl fmt::Display for LookupAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn parse_legacy(text: &str) -> Option<Ipv4Addr> {
    let text = text
        .split(|c: char| c.is_ascii_whitespace())
        .next()
        .unwrap_or_default();
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() > 4 {
        return None;
    }

    let values = parts
        .iter()
        .map(|part| parse_legacy_part(part))
        .collect::<Option<Vec<u32>>>()?;

    let (last, head) = values.split_last()?;
    if head.iter().any(|&v| v > 0xff) {
        return None;
    }

    let tail_bits = 32 - 8 * head.len() as u32;
    if tail_bits < 32 && *last >= 1u32 << tail_bits {
        return None;
    }

    let addr = head
        .iter()
        .enumerate()
        .fold(*last, |acc, (i, &v)| acc | (v << (24 - 8 * i as u32)));

    Some(Ipv4Addr::from(addr))
}

fn parse_legacy_part(part: &str) -> Option<u32> {
    let (digits, radix) = if let Some(hex) = part
        .strip_prefix("0x")
        .or_else(|| part.strip_prefix("0X"))
    {
        if hex.is_empty() {
            return Some(0);
        }
        (hex, 16)
    } else if part.len() > 1 && part.starts_with('0') {
        (&part[1..], 8)
    } else {
        (part, 10)
    };

    // from_str_radix tolerates a leading sign
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    u32::from_str_radix(digits, radix).ok()
}
