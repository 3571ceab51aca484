/// Index of the first `/`, `?` or `#`, whichever comes first
pub fn find_authority_end(input: &str) -> Option<usize> {
    memchr::memchr3(b'/', b'?', b'#', input.as_bytes())
}

/// Index of the first `?` or `#`, whichever comes first
pub fn find_query_or_fragment(input: &str) -> Option<usize> {
    memchr::memchr2(b'?', b'#', input.as_bytes())
}

/// Index of the first occurrence of `needle`
pub fn find_byte(needle: u8, input: &str) -> Option<usize> {
    memchr::memchr(needle, input.as_bytes())
}

/// Index of the last occurrence of `needle`
pub fn rfind_byte(needle: u8, input: &str) -> Option<usize> {
    memchr::memrchr(needle, input.as_bytes())
}

/// Index of the first occurrence of a multi-byte separator
pub fn find_str(needle: &str, input: &str) -> Option<usize> {
    memchr::memmem::find(input.as_bytes(), needle.as_bytes())
}

/// Check that a string is non-empty and made only of ASCII decimal digits.
/// Unlike `str::parse`, a leading `+` is rejected.
pub fn is_ascii_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Check if a string is empty or whitespace only
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}
