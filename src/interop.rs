//! Conversions to and from [`url::Url`].
//!
//! A `url::Url` enters the parser through its serialized form, exactly like
//! any other text.
use crate::error::{ParseError, Result};
use crate::url_entity::Url;

impl TryFrom<&url::Url> for Url {
    type Error = ParseError;

    fn try_from(url: &url::Url) -> Result<Self> {
        Self::parse(url.as_str())
    }
}

impl Url {
    /// Re-parse the raw text with the strict WHATWG parser of the `url` crate.
    ///
    /// # Errors
    ///
    /// Returns the `url` crate's error when the raw text is not a valid
    /// WHATWG URL.
    pub fn to_url(&self) -> core::result::Result<url::Url, url::ParseError> {
        url::Url::parse(self.raw())
    }
}
