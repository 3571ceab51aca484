#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod checkers;
mod error;
mod error_set;
mod helpers;
#[cfg(feature = "url")]
mod interop;
mod parser;
mod url_components;
mod url_entity;
mod validator;

pub mod ipv4;

// Public API
pub use error::{Ipv4Error, OctetReason, ParseError, UrlError};
pub use error_set::{ErrorSet, Iter as ErrorSetIter};
pub use parser::SCHEME_SEPARATOR;
pub use url_components::{Span, UrlComponents};
pub use url_entity::Url;
pub use validator::{BracketedHostValidator, HostValidator, Ipv4HostValidator, UrlValidator};

pub type Result<T> = core::result::Result<T, ParseError>;
