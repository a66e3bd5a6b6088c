//! MX records.
//!
//! Settings shapes:
//! - `mx @ exchanger(.)` (priority omitted)
//! - `mx exchanger(.) priority` (compact apex form)
//! - `mx exchanger(.) priority host(.)`

use async_trait::async_trait;

use super::{LookupPlan, RecordMatcher};
use crate::dispatch::ConfigLine;
use crate::dns::DnsLookup;
use crate::error_handling::LookupError;
use crate::hostname::{normalize, strip_root_dot, APEX};

/// Matches when an exchange equals the configured exchanger.
///
/// Case-insensitive, root dot ignored. Priorities are not compared.
pub struct MxMatcher;

fn canonical_host(host: &str) -> String {
    strip_root_dot(host).to_lowercase()
}

#[async_trait]
impl RecordMatcher for MxMatcher {
    fn plan(&self, line: &ConfigLine, domain: &str) -> Result<LookupPlan, String> {
        let (Some(host), Some(value)) = (line.host(), line.value()) else {
            return Err("mx record needs an exchanger".to_string());
        };
        match (line.len(), line.field(3)) {
            (3, _) if host == APEX => Ok(LookupPlan {
                query: domain.to_string(),
                expected: strip_root_dot(value).to_string(),
            }),
            (3, _) => Ok(LookupPlan {
                query: domain.to_string(),
                expected: strip_root_dot(host).to_string(),
            }),
            (4, Some(owner)) => Ok(LookupPlan {
                query: normalize(strip_root_dot(owner), domain),
                expected: strip_root_dot(host).to_string(),
            }),
            (count, _) => Err(format!("mx record has {count} fields, expected 3 or 4")),
        }
    }

    async fn matching_values(
        &self,
        plan: &LookupPlan,
        resolver: &dyn DnsLookup,
    ) -> Result<Vec<String>, LookupError> {
        let expected = canonical_host(&plan.expected);
        let exchanges = resolver.lookup_mx(&plan.query).await?;
        Ok(exchanges
            .iter()
            .filter(|(_, exchange)| canonical_host(exchange) == expected)
            .map(|(_, exchange)| strip_root_dot(exchange).to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::stub::StubResolver;

    fn plan(raw: &str) -> Result<LookupPlan, String> {
        MxMatcher.plan(&ConfigLine::parse(raw), "example.com")
    }

    #[test]
    fn test_plan_apex_form() {
        let plan = plan("mx @ mail.example.com.").expect("line should plan");
        assert_eq!(plan.query, "example.com");
        assert_eq!(plan.expected, "mail.example.com");
    }

    #[test]
    fn test_plan_compact_form() {
        let plan = plan("mx mx1.provider.net. 10").expect("line should plan");
        assert_eq!(plan.query, "example.com");
        assert_eq!(plan.expected, "mx1.provider.net");
    }

    #[test]
    fn test_plan_four_field_form() {
        let plan = plan("mx mx1.provider.net. 10 shop").expect("line should plan");
        assert_eq!(plan.query, "shop.example.com");
        assert_eq!(plan.expected, "mx1.provider.net");
    }

    #[test]
    fn test_plan_rejects_extra_fields() {
        assert!(plan("mx mx1.provider.net. 10 shop extra").is_err());
    }

    #[tokio::test]
    async fn test_apex_exchange_matches() {
        let resolver = StubResolver::new().with_mx("example.com", &[(10, "mail.example.com.")]);
        let plan = plan("mx @ mail.example.com.").expect("line should plan");
        let values = MxMatcher
            .matching_values(&plan, &resolver)
            .await
            .expect("lookup should succeed");
        assert_eq!(values, vec!["mail.example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_exchange_comparison_ignores_case() {
        let resolver = StubResolver::new().with_mx(
            "example.com",
            &[(10, "MX1.Provider.NET."), (20, "mx2.provider.net.")],
        );
        let plan = plan("mx mx1.provider.net 10").expect("line should plan");
        let values = MxMatcher
            .matching_values(&plan, &resolver)
            .await
            .expect("lookup should succeed");
        assert_eq!(values, vec!["MX1.Provider.NET".to_string()]);
    }
}
