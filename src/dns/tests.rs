//! DNS module tests.

use super::*;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use std::str::FromStr;
use std::time::Duration;
use strum::IntoEnumIterator;

/// Creates a test DNS resolver with short timeouts for faster test execution.
fn create_test_resolver() -> hickory_resolver::TokioAsyncResolver {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(5);
    opts.attempts = 1;
    opts.ndots = 0;

    hickory_resolver::TokioAsyncResolver::tokio(ResolverConfig::default(), opts)
}

#[test]
fn test_query_type_keywords_round_trip() {
    for kind in QueryType::iter() {
        let keyword = kind.to_string();
        assert_eq!(keyword, keyword.to_lowercase());
        assert_eq!(QueryType::from_str(&keyword).ok(), Some(kind));
    }
}

#[test]
fn test_query_type_mnemonic() {
    assert_eq!(QueryType::Cname.mnemonic(), "CNAME");
    assert_eq!(QueryType::A.mnemonic(), "A");
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_live_ns_lookup() {
    let resolver = create_test_resolver();
    let nameservers = resolver
        .lookup_ns("google.com")
        .await
        .expect("NS lookup should succeed for google.com");
    assert!(!nameservers.is_empty());
    for ns in &nameservers {
        assert!(ns.contains('.'));
    }
}

// The no-CNAME fallback in `lookup_cname` needs a real NoRecordsFound answer
// followed by an address lookup, so it is only checked live.
#[tokio::test]
#[ignore = "requires network access"]
async fn test_live_cname_of_name_without_cname_is_itself() {
    let resolver = create_test_resolver();
    let canonical = resolver
        .lookup_cname("example.com")
        .await
        .expect("example.com has addresses and no CNAME");
    assert_eq!(canonical, "example.com.");
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_live_lookup_nonexistent_domain_fails() {
    let resolver = create_test_resolver();
    let result = resolver
        .lookup_txt("definitely-does-not-exist-12345.invalid")
        .await;
    assert!(result.is_err(), "NXDOMAIN should surface as a lookup error");
}
