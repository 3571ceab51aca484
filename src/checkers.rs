use crate::helpers::is_ascii_digits;

/// Lowest port accepted by the parser
pub const MIN_PORT: u16 = 1;

/// Check if a host could be meant as an IPv4 literal (fast preliminary check).
/// The last dot-separated label decides: decimal digits, or `0x` followed by
/// hex digits.
pub fn is_ipv4(host: &str) -> bool {
    let last_label = host.rsplit('.').next().unwrap_or(host);

    if is_ascii_digits(last_label) {
        return true;
    }

    last_label
        .strip_prefix("0x")
        .or_else(|| last_label.strip_prefix("0X"))
        .is_some_and(|hex| !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Check if a host is written as a bracketed IPv6 literal
pub fn is_bracketed(host: &str) -> bool {
    host.starts_with('[')
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, is zero or overflows.
pub fn parse_port(port: &str) -> Option<u16> {
    if !is_ascii_digits(port) {
        return None;
    }
    port.parse::<u16>().ok().filter(|&port| port >= MIN_PORT)
}
