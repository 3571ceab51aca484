//! IPv4 literal canonicalization.
//!
//! Accepts the legacy "classful" shorthand where an address is written with
//! one to four dot-separated parts, each in decimal, octal (leading `0`) or
//! hexadecimal (`0x` prefix). Every part but the last is a single byte; the
//! last part fills all remaining bytes:
//!
//! | parts | example        | last part max |
//! |-------|----------------|---------------|
//! | 1     | `3279880203`   | `2^32 - 1`    |
//! | 2     | `10.138`       | `2^24 - 1`    |
//! | 3     | `10.0.138`     | `2^16 - 1`    |
//! | 4     | `10.0.0.138`   | `2^8 - 1`     |
use crate::compat::{String, ToString, format};
use crate::error::{Ipv4Error, OctetReason};
use crate::helpers::{is_ascii_digits, is_blank};

/// Maximum number of dot-separated parts
const MAX_PARTS: usize = 4;

/// Canonicalize an IPv4 literal into its 4-byte big-endian form.
///
/// # Examples
///
/// ```
/// use laxurl::ipv4::canonicalize;
///
/// assert_eq!(canonicalize("10.138"), Ok([10, 0, 0, 138]));
/// assert_eq!(canonicalize("10.256"), Ok([10, 0, 1, 0]));
/// assert_eq!(canonicalize("0x7f.1"), Ok([127, 0, 0, 1]));
/// assert!(canonicalize("1.2.3.4.5").is_err());
/// ```
///
/// # Errors
///
/// Returns the first problem found: blank input, more than four parts, a part
/// that isn't a number in its declared base, or a part too large for the
/// bytes left at its position.
pub fn canonicalize(input: &str) -> Result<[u8; 4], Ipv4Error> {
    if is_blank(input) {
        return Err(Ipv4Error::Blank);
    }

    let mut parts = [""; MAX_PARTS];
    let mut part_count = 0;
    for part in input.split('.') {
        if let Some(slot) = parts.get_mut(part_count) {
            *slot = part;
        }
        part_count += 1;
    }
    if part_count > MAX_PARTS {
        return Err(Ipv4Error::TooManyParts(part_count));
    }

    let mut octets = [0u8; 4];
    let last_index = part_count - 1;

    for (index, part) in parts.iter().take(part_count).enumerate() {
        let position = index + 1;
        let value = parse_octet(part).map_err(|reason| Ipv4Error::MalformedOctet {
            position,
            octet: part.to_string(),
            reason,
        })?;

        if index < last_index {
            // Leading parts are exactly one byte each
            octets[index] = u8::try_from(value).map_err(|_| Ipv4Error::OctetOutOfRange {
                position,
                value,
                max: u32::from(u8::MAX),
            })?;
            continue;
        }

        // Last part: 256^(5 - part_count) - 1
        let max = (1u64 << (8 * (MAX_PARTS + 1 - part_count))) - 1;
        if u64::from(value) > max {
            return Err(Ipv4Error::OctetOutOfRange {
                position,
                value,
                max: max as u32,
            });
        }
        // The bytes above `max` are zero, so only the tail is copied
        octets[index..].copy_from_slice(&value.to_be_bytes()[index..]);
    }

    Ok(octets)
}

/// Canonicalize an IPv4 literal into a [`std::net::Ipv4Addr`].
///
/// # Errors
///
/// Same as [`canonicalize`].
#[cfg(feature = "std")]
pub fn canonicalize_addr(input: &str) -> Result<std::net::Ipv4Addr, Ipv4Error> {
    canonicalize(input).map(std::net::Ipv4Addr::from)
}

/// Parse a single IPv4 part, detecting its base from its prefix.
///
/// - `0x` / `0X` followed by hex digits: hexadecimal
/// - `0` followed by digits: octal (no `8` or `9` allowed)
/// - other digits: decimal
///
/// ```
/// use laxurl::ipv4::parse_octet;
///
/// assert_eq!(parse_octet("07"), Ok(7));
/// assert_eq!(parse_octet("0x10"), Ok(16));
/// assert_eq!(parse_octet("0xA"), Ok(10));
/// assert!(parse_octet("0138").is_err());
/// ```
///
/// # Errors
///
/// Returns the [`OctetReason`] describing why the part was rejected.
pub fn parse_octet(input: &str) -> Result<u32, OctetReason> {
    if input.is_empty() {
        return Err(OctetReason::Empty);
    }

    if let Some(hex) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(OctetReason::InvalidHexDigit);
        }
        return u32::from_str_radix(hex, 16).map_err(|_| OctetReason::TooLarge);
    }

    if !is_ascii_digits(input) {
        return Err(OctetReason::UnknownFormat);
    }

    // Octal (starts with 0 but not just "0")
    if input.len() >= 2 && input.starts_with('0') {
        if input.bytes().any(|b| matches!(b, b'8' | b'9')) {
            return Err(OctetReason::InvalidOctalDigit);
        }
        return u32::from_str_radix(input, 8).map_err(|_| OctetReason::TooLarge);
    }

    input.parse::<u32>().map_err(|_| OctetReason::TooLarge)
}

/// Serialize a canonical address to dotted decimal notation
pub fn serialize_ipv4(octets: [u8; 4]) -> String {
    let [a, b, c, d] = octets;
    format!("{a}.{b}.{c}.{d}")
}
