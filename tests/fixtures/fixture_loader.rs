/// Fixture loader
///
/// Fixture files are JSON arrays mixing test objects and plain strings; the
/// strings are comments.
use laxurl::UrlError;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum UrlCase {
    /// Every component field is compared; `null` or missing means absent
    Test {
        input: String,
        #[serde(default)]
        scheme: Option<String>,
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<u16>,
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        query: Option<String>,
        #[serde(default)]
        fragment: Option<String>,
        #[serde(default)]
        errors: Vec<String>,
    },
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum Ipv4Case {
    /// `output` is the dotted address, or `null` when canonicalization fails
    Test {
        input: String,
        output: Option<String>,
    },
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

impl FixtureResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one compared field
    pub fn check<T: std::fmt::Debug + PartialEq>(
        &mut self,
        input: &str,
        field: &str,
        expected: &T,
        actual: &T,
    ) -> bool {
        if expected == actual {
            return true;
        }
        self.failures.push(FixtureFailure {
            input: input.to_string(),
            field: field.to_string(),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        });
        false
    }

    pub fn summary(&self) -> String {
        let mut out = format!("Passed: {}, Failed: {}", self.passed, self.failed);
        for failure in &self.failures {
            out.push_str(&format!(
                "\n  {:?} [{}]: expected {}, got {}",
                failure.input, failure.field, failure.expected, failure.actual
            ));
        }
        out
    }
}

pub fn load_url_cases() -> Vec<UrlCase> {
    serde_json::from_str(include_str!("urls.json")).expect("urls.json is valid")
}

pub fn load_ipv4_cases() -> Vec<Ipv4Case> {
    serde_json::from_str(include_str!("ipv4.json")).expect("ipv4.json is valid")
}

/// Map a fixture tag name to its error
pub fn url_error(name: &str) -> UrlError {
    match name {
        "SCHEME_IS_MISSING" => UrlError::SchemeIsMissing,
        "HOST_IS_MISSING" => UrlError::HostIsMissing,
        "INVALID_PORT_VALUE" => UrlError::InvalidPortValue,
        "HOST_IS_INVALID" => UrlError::HostIsInvalid,
        other => panic!("unknown error tag {other:?} in fixture"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_load() {
        assert!(
            load_url_cases()
                .iter()
                .any(|case| matches!(case, UrlCase::Test { .. }))
        );
        assert!(
            load_ipv4_cases()
                .iter()
                .any(|case| matches!(case, Ipv4Case::Test { .. }))
        );
    }

    #[test]
    fn test_fixture_result() {
        let mut result = FixtureResult::new();
        assert!(result.check("x", "host", &Some("a"), &Some("a")));
        assert!(!result.check("x", "port", &Some(1), &None));
        assert_eq!(result.failures.len(), 1);
        assert!(result.summary().contains("[port]"));
    }
}
