use super::state::Delimiter;
use crate::helpers::{find_byte, find_query_or_fragment};
use crate::url_components::Span;

/// Path, query and fragment spans, relative to the tail slice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tail {
    pub path: Option<Span>,
    pub query: Option<Span>,
    pub fragment: Option<Span>,
}

/// Parse everything after the authority.
///
/// `tail` starts with the delimiter that ended the authority. Delimiters are
/// never part of the component they introduce, so `"/"` yields an empty path
/// and `"#"` an empty fragment.
pub fn parse_tail(tail: &str) -> Tail {
    let Some(delimiter) = tail.bytes().next().and_then(Delimiter::from_byte) else {
        return Tail::default();
    };
    let body = &tail[1..];

    match delimiter {
        Delimiter::Path => parse_path(body).offset(1),
        Delimiter::Query => {
            let (query, fragment) = split_query_fragment(body);
            Tail {
                path: None,
                query: Some(query),
                fragment,
            }
            .offset(1)
        }
        Delimiter::Fragment => Tail {
            fragment: Some(Span::new(1, tail.len())),
            ..Tail::default()
        },
    }
}

/// Path runs up to the first `?` or `#`; a `#` there skips the query.
fn parse_path(path: &str) -> Tail {
    let Some(end) = find_query_or_fragment(path) else {
        return Tail {
            path: Some(Span::new(0, path.len())),
            ..Tail::default()
        };
    };

    let rest_start = end + 1;
    let rest = &path[rest_start..];
    let delimiter = path.as_bytes().get(end).copied().and_then(Delimiter::from_byte);
    let (query, fragment) = match delimiter {
        Some(Delimiter::Fragment) => (None, Some(Span::new(0, rest.len()))),
        _ => {
            let (query, fragment) = split_query_fragment(rest);
            (Some(query), fragment)
        }
    };

    Tail {
        path: Some(Span::new(0, end)),
        query: query.map(|span| span.offset(rest_start)),
        fragment: fragment.map(|span| span.offset(rest_start)),
    }
}

/// Split `query[#fragment]` at the first `#`.
/// The query is always present, possibly empty.
pub fn split_query_fragment(input: &str) -> (Span, Option<Span>) {
    match find_byte(b'#', input) {
        Some(hash) => (Span::new(0, hash), Some(Span::new(hash + 1, input.len()))),
        None => (Span::new(0, input.len()), None),
    }
}

impl Tail {
    #[must_use]
    fn offset(self, by: usize) -> Self {
        Self {
            path: self.path.map(|span| span.offset(by)),
            query: self.query.map(|span| span.offset(by)),
            fragment: self.fragment.map(|span| span.offset(by)),
        }
    }
}
