//! TXT records.
//!
//! Settings shapes, checked in this order:
//! - `txt @ v=spf1 ...` apex SPF, value split across fields
//! - `txt @ value` other apex text (single token)
//! - `txt host.example.com(.) value...` already qualified host
//! - `txt host(.) v=spf1 ...` SPF on a subdomain
//! - `txt selector._domainkey value...` DKIM key
//! - `txt _dmarc(.sub) value...` DMARC policy, always queried at `_dmarc.<domain>`
//! - `txt host value...`

use async_trait::async_trait;

use super::{LookupPlan, RecordMatcher};
use crate::dispatch::ConfigLine;
use crate::dns::DnsLookup;
use crate::error_handling::LookupError;
use crate::hostname::{normalize, strip_root_dot, APEX};

const SPF_MARKER: &str = "v=spf1";
const DKIM_MARKER: &str = "domainkey";
const DMARC_MARKER: &str = "dmarc";

/// Which settings shape a TXT line has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxtShape {
    ApexSpf,
    Apex,
    Qualified,
    SubdomainSpf,
    Dkim,
    Dmarc,
    Relative,
}

impl TxtShape {
    /// Selects the shape from the host and first value token.
    pub fn of(host: &str, value: &str, domain: &str) -> Self {
        if host == APEX {
            if value.contains(SPF_MARKER) {
                TxtShape::ApexSpf
            } else {
                TxtShape::Apex
            }
        } else if host.contains(domain) {
            TxtShape::Qualified
        } else if value.contains(SPF_MARKER) {
            TxtShape::SubdomainSpf
        } else if host.contains(DKIM_MARKER) {
            TxtShape::Dkim
        } else if host.contains(DMARC_MARKER) {
            TxtShape::Dmarc
        } else {
            TxtShape::Relative
        }
    }
}

/// Matches when a TXT string equals the configured text exactly.
///
/// No case folding, no trimming, no substring match.
pub struct TxtMatcher;

#[async_trait]
impl RecordMatcher for TxtMatcher {
    fn plan(&self, line: &ConfigLine, domain: &str) -> Result<LookupPlan, String> {
        let (Some(host), Some(value), Some(joined)) = (line.host(), line.value(), line.joined_value())
        else {
            return Err("txt record needs a host and a value".to_string());
        };

        let (query, expected) = match TxtShape::of(host, value, domain) {
            TxtShape::ApexSpf => (normalize(host, domain), joined),
            TxtShape::Apex => (normalize(strip_root_dot(host), domain), value.to_string()),
            TxtShape::Qualified => (strip_root_dot(host).to_string(), joined),
            TxtShape::SubdomainSpf | TxtShape::Dkim => {
                (normalize(strip_root_dot(host), domain), joined)
            }
            TxtShape::Dmarc => (format!("_dmarc.{domain}"), joined),
            TxtShape::Relative => (normalize(host, domain), joined),
        };
        Ok(LookupPlan { query, expected })
    }

    async fn matching_values(
        &self,
        plan: &LookupPlan,
        resolver: &dyn DnsLookup,
    ) -> Result<Vec<String>, LookupError> {
        let records = resolver.lookup_txt(&plan.query).await?;
        Ok(records
            .into_iter()
            .filter(|txt| *txt == plan.expected)
            .collect())
    }
}
