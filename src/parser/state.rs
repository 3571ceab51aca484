/// Delimiter that ends the authority and selects how the tail is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `/`: path, then optional query and fragment
    Path,
    /// `?`: query, then optional fragment
    Query,
    /// `#`: fragment only
    Fragment,
}

impl Delimiter {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'/' => Some(Self::Path),
            b'?' => Some(Self::Query),
            b'#' => Some(Self::Fragment),
            _ => None,
        }
    }
}
