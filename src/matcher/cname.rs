//! CNAME records.
//!
//! Settings shapes:
//! - `cname host target(.)`
//! - `cname host.example.com(.) target(.)`

use async_trait::async_trait;

use super::{LookupPlan, RecordMatcher};
use crate::dispatch::ConfigLine;
use crate::dns::DnsLookup;
use crate::error_handling::LookupError;
use crate::hostname::{qualify_zone_host, strip_root_dot};

/// Matches when the canonical name contains the configured target.
///
/// Containment rather than equality tolerates the root dot resolvers append.
/// Case differences are not folded.
pub struct CnameMatcher;

#[async_trait]
impl RecordMatcher for CnameMatcher {
    fn plan(&self, line: &ConfigLine, domain: &str) -> Result<LookupPlan, String> {
        let (Some(host), Some(value)) = (line.host(), line.value()) else {
            return Err("cname record needs a host and a target".to_string());
        };
        Ok(LookupPlan {
            query: qualify_zone_host(host, domain),
            expected: strip_root_dot(value).to_string(),
        })
    }

    async fn matching_values(
        &self,
        plan: &LookupPlan,
        resolver: &dyn DnsLookup,
    ) -> Result<Vec<String>, LookupError> {
        let canonical = resolver.lookup_cname(&plan.query).await?;
        if canonical.contains(&plan.expected) {
            Ok(vec![canonical])
        } else {
            Ok(Vec::new())
        }
    }
}
