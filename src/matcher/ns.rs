//! NS records (`ns subdomain nameserver(.)`).

use async_trait::async_trait;

use super::{LookupPlan, RecordMatcher};
use crate::dispatch::ConfigLine;
use crate::dns::DnsLookup;
use crate::error_handling::LookupError;
use crate::hostname::{qualify_zone_host, strip_root_dot};

/// Matches when a nameserver contains the configured host.
pub struct NsMatcher;

#[async_trait]
impl RecordMatcher for NsMatcher {
    fn plan(&self, line: &ConfigLine, domain: &str) -> Result<LookupPlan, String> {
        let (Some(host), Some(value)) = (line.host(), line.value()) else {
            return Err("ns record needs a host and a nameserver".to_string());
        };
        Ok(LookupPlan {
            query: qualify_zone_host(strip_root_dot(host), domain),
            expected: strip_root_dot(value).to_string(),
        })
    }

    async fn matching_values(
        &self,
        plan: &LookupPlan,
        resolver: &dyn DnsLookup,
    ) -> Result<Vec<String>, LookupError> {
        let nameservers = resolver.lookup_ns(&plan.query).await?;
        Ok(nameservers
            .into_iter()
            .filter(|ns| ns.contains(&plan.expected))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::stub::StubResolver;

    fn plan(raw: &str) -> LookupPlan {
        NsMatcher
            .plan(&ConfigLine::parse(raw), "example.com")
            .expect("line should plan")
    }

    #[test]
    fn test_plan_delegated_subdomain() {
        let plan = plan("ns dev ns1.dns-host.net.");
        assert_eq!(plan.query, "dev.example.com");
        assert_eq!(plan.expected, "ns1.dns-host.net");
    }

    #[tokio::test]
    async fn test_nameserver_containment_matches() {
        let resolver = StubResolver::new().with_ns(
            "dev.example.com",
            &["ns1.dns-host.net.", "ns2.dns-host.net."],
        );
        let values = NsMatcher
            .matching_values(&plan("ns dev.example.com. ns2.dns-host.net."), &resolver)
            .await
            .expect("lookup should succeed");
        assert_eq!(values, vec!["ns2.dns-host.net.".to_string()]);
    }
}
