//! The resolution capability the record matchers depend on.

use std::net::IpAddr;

use async_trait::async_trait;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error_handling::LookupError;

/// DNS record type queried by a matcher.
///
/// Displays and parses as the lowercase keyword used in settings exports
/// (`a`, `cname`, `mx`, `txt`, `ns`). Parsing is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum QueryType {
    A,
    Cname,
    Mx,
    Txt,
    Ns,
}

impl QueryType {
    /// Uppercase mnemonic (`CNAME`), as used in resolver error reports.
    pub fn mnemonic(self) -> String {
        self.to_string().to_uppercase()
    }
}

/// Resolver operations needed to verify configured records.
///
/// Each call is a single attempt; implementations must not retry on their own
/// behalf beyond what the underlying resolver is configured to do.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// Addresses (A and AAAA) the name resolves to.
    async fn lookup_a(&self, name: &str) -> Result<Vec<IpAddr>, LookupError>;

    /// Canonical name of `name`. A name without a CNAME is its own canonical name.
    async fn lookup_cname(&self, name: &str) -> Result<String, LookupError>;

    /// Mail exchangers as (preference, exchange host) pairs.
    async fn lookup_mx(&self, name: &str) -> Result<Vec<(u16, String)>, LookupError>;

    /// TXT strings; the character-strings of one record are concatenated.
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError>;

    /// Nameserver hostnames.
    async fn lookup_ns(&self, name: &str) -> Result<Vec<String>, LookupError>;
}
