use crate::compat::String;

/// Fatal errors raised before any parsing begins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Raw URL text is empty or whitespace only
    BlankInput,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BlankInput => f.write_str("URL text can't be blank"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL construction
pub type Result<T> = core::result::Result<T, ParseError>;

/// Validation problems accumulated while parsing a URL
///
/// A parsed URL carries zero or more of these in its
/// [`ErrorSet`](crate::ErrorSet); none of them aborts parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UrlError {
    /// Scheme separator present but the scheme before it is empty
    SchemeIsMissing,
    /// No host could be found
    HostIsMissing,
    /// Port is not a number in `1..=65535`, or the host:port pair is ambiguous
    InvalidPortValue,
    /// Host is present but rejected by a validator
    HostIsInvalid,
}

impl UrlError {
    /// Every tag, in declaration order
    pub const ALL: [Self; 4] = [
        Self::SchemeIsMissing,
        Self::HostIsMissing,
        Self::InvalidPortValue,
        Self::HostIsInvalid,
    ];

    pub(crate) const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Human readable message for this tag
    pub const fn message(self) -> &'static str {
        match self {
            Self::SchemeIsMissing => "Scheme is missing",
            Self::HostIsMissing => "Host is missing",
            Self::InvalidPortValue => "Port is invalid",
            Self::HostIsInvalid => "Host is invalid",
        }
    }
}

impl core::fmt::Display for UrlError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UrlError {}

/// Why a single IPv4 part was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OctetReason {
    /// Empty part, e.g. between two adjacent dots
    Empty,
    /// Leading zero marks octal, but a digit outside `0..=7` follows
    InvalidOctalDigit,
    /// `0x` prefix marks hexadecimal, but no valid hex digits follow
    InvalidHexDigit,
    /// Neither decimal, octal nor `0x`-prefixed hexadecimal
    UnknownFormat,
    /// Magnitude doesn't fit in 32 bits
    TooLarge,
}

impl core::fmt::Display for OctetReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::Empty => "is empty",
            Self::InvalidOctalDigit => "is octal, but contains bad digits",
            Self::InvalidHexDigit => "is hexadecimal, but contains bad digits",
            Self::UnknownFormat => "is in an unfamiliar format",
            Self::TooLarge => "is too large",
        };
        f.write_str(msg)
    }
}

/// IPv4 canonicalization failure
///
/// The first problem found aborts canonicalization; part positions are
/// 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ipv4Error {
    /// Input is empty or whitespace only
    Blank,
    /// More than four dot-separated parts
    TooManyParts(usize),
    /// A part could not be read as a number
    MalformedOctet {
        position: usize,
        octet: String,
        reason: OctetReason,
    },
    /// A part parsed but doesn't fit the bytes left for its position
    OctetOutOfRange {
        position: usize,
        value: u32,
        max: u32,
    },
}

impl core::fmt::Display for Ipv4Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Blank => f.write_str("IP can't be blank"),
            Self::TooManyParts(count) => write!(f, "Too many octets ({count}, at most 4)"),
            Self::MalformedOctet {
                position,
                octet,
                reason,
            } => write!(f, "Octet {position} ({octet:?}) {reason}"),
            Self::OctetOutOfRange {
                position,
                value,
                max,
            } => write!(f, "Octet {position} is too large ({value} > {max})"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Ipv4Error {}
