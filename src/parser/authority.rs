//! Userinfo, host and port.
//!
//! All spans returned here are relative to the slice handed in; the caller
//! shifts them into buffer coordinates.
use crate::checkers::parse_port;
use crate::error::UrlError;
use crate::error_set::ErrorSet;
use crate::helpers::{find_byte, rfind_byte};
use crate::url_components::Span;

/// Components found between the scheme separator and the first `/`, `?` or `#`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Authority {
    pub username: Option<Span>,
    pub password: Option<Span>,
    pub host: Option<Span>,
    pub port: Option<u16>,
}

/// Host and port of an authority, without userinfo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostPort {
    pub host: Option<Span>,
    pub port: Option<u16>,
}

/// Parse `[login@]host[:port]`.
///
/// The login ends at the *last* `@`, since user names and passwords may
/// contain `@` themselves.
pub fn parse_authority(authority: &str) -> (Authority, ErrorSet) {
    if authority.is_empty() {
        return (Authority::default(), UrlError::HostIsMissing.into());
    }

    let Some(at) = rfind_byte(b'@', authority) else {
        let (host_port, errors) = parse_host_port(authority);
        return (
            Authority {
                host: host_port.host,
                port: host_port.port,
                ..Authority::default()
            },
            errors,
        );
    };

    let (username, password) = parse_login(&authority[..at]);
    let host_start = at + 1;
    let (host_port, errors) = parse_host_port(&authority[host_start..]);

    (
        Authority {
            username: Some(username),
            password,
            host: host_port.host.map(|span| span.offset(host_start)),
            port: host_port.port,
        },
        errors,
    )
}

/// Split `username[:password]` at the first `:`.
/// An empty login still yields an (empty) username.
pub fn parse_login(login: &str) -> (Span, Option<Span>) {
    match find_byte(b':', login) {
        Some(colon) => (
            Span::new(0, colon),
            Some(Span::new(colon + 1, login.len())),
        ),
        None => (Span::new(0, login.len()), None),
    }
}

/// Parse `host[:port]`.
///
/// More than one `:` is ambiguous: nothing is set and the port is flagged.
pub fn parse_host_port(host_port: &str) -> (HostPort, ErrorSet) {
    let Some(colon) = find_byte(b':', host_port) else {
        if host_port.is_empty() {
            return (HostPort::default(), UrlError::HostIsMissing.into());
        }
        return (
            HostPort {
                host: Some(Span::new(0, host_port.len())),
                port: None,
            },
            ErrorSet::new(),
        );
    };

    let port_text = &host_port[colon + 1..];
    if find_byte(b':', port_text).is_some() {
        return (HostPort::default(), UrlError::InvalidPortValue.into());
    }

    let mut errors = ErrorSet::new();
    let host = if colon == 0 {
        errors.insert(UrlError::HostIsMissing);
        None
    } else {
        Some(Span::new(0, colon))
    };

    let port = parse_port(port_text);
    if port.is_none() {
        errors.insert(UrlError::InvalidPortValue);
    }

    (HostPort { host, port }, errors)
}
