use super::fixture_loader::{FixtureResult, UrlCase, load_url_cases, url_error};
/// URL decomposition fixtures
///
/// Every case compares all components and the exact set of error tags.
use laxurl::{ErrorSet, Url};

fn run_url_cases(cases: Vec<UrlCase>) -> FixtureResult {
    let mut result = FixtureResult::new();

    for case in cases {
        let UrlCase::Test {
            input,
            scheme,
            username,
            password,
            host,
            port,
            path,
            query,
            fragment,
            errors,
        } = case
        else {
            continue;
        };

        let url = match Url::parse(&input) {
            Ok(url) => url,
            Err(e) => {
                result.failed += 1;
                result.check(&input, "parsing", &"success".to_string(), &e.to_string());
                continue;
            }
        };

        let expected_errors: ErrorSet = errors.iter().map(|name| url_error(name)).collect();

        let checks = [
            result.check(&input, "scheme", &scheme.as_deref(), &url.scheme()),
            result.check(&input, "username", &username.as_deref(), &url.username()),
            result.check(&input, "password", &password.as_deref(), &url.password()),
            result.check(&input, "host", &host.as_deref(), &url.host()),
            result.check(&input, "port", &port, &url.port()),
            result.check(&input, "path", &path.as_deref(), &url.path()),
            result.check(&input, "query", &query.as_deref(), &url.query()),
            result.check(&input, "fragment", &fragment.as_deref(), &url.fragment()),
            result.check(&input, "errors", &expected_errors, &url.errors()),
            result.check(&input, "is_valid", &errors.is_empty(), &url.is_valid()),
        ];

        if checks.iter().all(|&ok| ok) {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}

#[test]
fn test_url_fixtures() {
    let result = run_url_cases(load_url_cases());
    assert!(result.passed > 0);
    assert_eq!(result.failed, 0, "{}", result.summary());
}
