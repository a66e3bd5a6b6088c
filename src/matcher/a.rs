//! A records.
//!
//! Settings shapes:
//! - `a @ IP`
//! - `a host IP`
//! - `a www.host IP` (certificate alias of a subdomain)

use async_trait::async_trait;

use super::{LookupPlan, RecordMatcher};
use crate::dispatch::ConfigLine;
use crate::dns::DnsLookup;
use crate::error_handling::LookupError;
use crate::hostname::qualify_address_host;

/// Matches when the configured address is among the resolved ones.
///
/// Comparison is on the address's string form, so `::ffff:192.0.2.1` and
/// `192.0.2.1` are different values.
pub struct AddressMatcher;

#[async_trait]
impl RecordMatcher for AddressMatcher {
    fn plan(&self, line: &ConfigLine, domain: &str) -> Result<LookupPlan, String> {
        let (Some(host), Some(value)) = (line.host(), line.value()) else {
            return Err("a record needs a host and an address".to_string());
        };
        Ok(LookupPlan {
            query: qualify_address_host(host, domain),
            expected: value.to_string(),
        })
    }

    async fn matching_values(
        &self,
        plan: &LookupPlan,
        resolver: &dyn DnsLookup,
    ) -> Result<Vec<String>, LookupError> {
        let addresses = resolver.lookup_a(&plan.query).await?;
        Ok(addresses
            .iter()
            .map(|ip| ip.to_string())
            .filter(|ip| *ip == plan.expected)
            .collect())
    }
}
