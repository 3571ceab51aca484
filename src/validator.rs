//! Semantic checks layered on an already parsed [`Url`].
//!
//! Validators only report tags. They never touch components, and running one
//! twice reports the same tags, so [`Url::validated_with`] is idempotent.
use crate::checkers::{is_bracketed, is_ipv4};
use crate::error::UrlError;
use crate::error_set::ErrorSet;
use crate::ipv4::canonicalize;
use crate::url_entity::Url;

/// A post-parse check over a [`Url`]
pub trait UrlValidator {
    /// Report the problems found, without re-parsing
    fn validate(&self, url: &Url) -> ErrorSet;
}

impl<F> UrlValidator for F
where
    F: Fn(&Url) -> ErrorSet,
{
    fn validate(&self, url: &Url) -> ErrorSet {
        self(url)
    }
}

/// Flags hosts written as bracketed IPv6 literals.
///
/// IPv6 literals are not supported, so any host starting with `[` is
/// reported as [`UrlError::HostIsInvalid`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketedHostValidator;

impl UrlValidator for BracketedHostValidator {
    fn validate(&self, url: &Url) -> ErrorSet {
        match url.host() {
            Some(host) if is_bracketed(host) && !validate_ipv6(host) => {
                UrlError::HostIsInvalid.into()
            }
            _ => ErrorSet::new(),
        }
    }
}

/// IPv6 literals are not supported yet, so none passes
fn validate_ipv6(_host: &str) -> bool {
    false
}

/// Flags numeric-looking hosts that are not valid IPv4 literals
///
/// A host whose last label is a number, such as `10.0.0.999` or `0x7f.1`,
/// must canonicalize. Classful shorthand is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ipv4HostValidator;

impl UrlValidator for Ipv4HostValidator {
    fn validate(&self, url: &Url) -> ErrorSet {
        match url.host() {
            Some(host) if is_ipv4(host) && canonicalize(host).is_err() => {
                UrlError::HostIsInvalid.into()
            }
            _ => ErrorSet::new(),
        }
    }
}

/// Every host check shipped with the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct HostValidator;

impl UrlValidator for HostValidator {
    fn validate(&self, url: &Url) -> ErrorSet {
        BracketedHostValidator.validate(url) | Ipv4HostValidator.validate(url)
    }
}
