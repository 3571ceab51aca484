use super::fixture_loader::{FixtureResult, Ipv4Case, load_ipv4_cases};
/// IPv4 canonicalization fixtures
use laxurl::ipv4::{canonicalize, serialize_ipv4};

fn run_ipv4_cases(cases: Vec<Ipv4Case>) -> FixtureResult {
    let mut result = FixtureResult::new();

    for case in cases {
        let Ipv4Case::Test { input, output } = case else {
            continue;
        };

        let actual = canonicalize(&input).ok().map(serialize_ipv4);
        if result.check(&input, "address", &output, &actual) {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}

#[test]
fn test_ipv4_fixtures() {
    let result = run_ipv4_cases(load_ipv4_cases());
    assert!(result.passed > 0);
    assert_eq!(result.failed, 0, "{}", result.summary());
}
