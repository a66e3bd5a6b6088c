//! `DnsLookup` backed by `hickory-resolver`.
//!
//! This module queries the record types the checker verifies:
//! - Addresses (A/AAAA)
//! - Canonical names (CNAME)
//! - Mail exchangers (MX)
//! - Text records (TXT)
//! - Nameservers (NS)

use std::net::IpAddr;

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use super::lookup::{DnsLookup, QueryType};
use crate::error_handling::LookupError;

/// Logs a failed lookup and converts it for the matcher.
fn lookup_failed(kind: QueryType, name: &str, e: ResolveError) -> LookupError {
    let error_msg = e.to_string();
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        log::warn!("{} record lookup timed out for {name}: {e}", kind.mnemonic());
    } else {
        log::debug!("{} record lookup failed for {name}: {e}", kind.mnemonic());
    }
    LookupError::from(e)
}

#[async_trait]
impl DnsLookup for TokioAsyncResolver {
    async fn lookup_a(&self, name: &str) -> Result<Vec<IpAddr>, LookupError> {
        log::debug!("Looking up addresses for {name}");
        let response = self
            .lookup_ip(name)
            .await
            .map_err(|e| lookup_failed(QueryType::A, name, e))?;
        Ok(response.iter().collect())
    }

    async fn lookup_cname(&self, name: &str) -> Result<String, LookupError> {
        log::debug!("Looking up CNAME for {name}");
        match self.lookup(name, RecordType::CNAME).await {
            Ok(lookup) => {
                let target = lookup.iter().find_map(|rdata| {
                    if let RData::CNAME(cname) = rdata {
                        Some(cname.0.to_utf8())
                    } else {
                        None
                    }
                });
                Ok(target.unwrap_or_else(|| canonical_self(name)))
            }
            Err(e) => {
                // A name without a CNAME is its own canonical name, provided it exists
                if matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. })
                    && self.lookup_ip(name).await.is_ok()
                {
                    Ok(canonical_self(name))
                } else {
                    Err(lookup_failed(QueryType::Cname, name, e))
                }
            }
        }
    }

    async fn lookup_mx(&self, name: &str) -> Result<Vec<(u16, String)>, LookupError> {
        log::debug!("Looking up MX records for {name}");
        let lookup = self
            .mx_lookup(name)
            .await
            .map_err(|e| lookup_failed(QueryType::Mx, name, e))?;
        let mut mx_records: Vec<(u16, String)> = lookup
            .iter()
            .map(|mx| (mx.preference(), mx.exchange().to_utf8()))
            .collect();
        // Sort by priority (lower preference = higher priority)
        mx_records.sort_by_key(|(priority, _)| *priority);
        Ok(mx_records)
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        log::debug!("Looking up TXT records for {name}");
        let lookup = self
            .txt_lookup(name)
            .await
            .map_err(|e| lookup_failed(QueryType::Txt, name, e))?;
        Ok(lookup
            .iter()
            .map(|txt| {
                // TXT records can contain multiple strings - join them
                txt.iter()
                    .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                    .collect::<Vec<String>>()
                    .join("")
            })
            .collect())
    }

    async fn lookup_ns(&self, name: &str) -> Result<Vec<String>, LookupError> {
        log::debug!("Looking up NS records for {name}");
        let lookup = self
            .ns_lookup(name)
            .await
            .map_err(|e| lookup_failed(QueryType::Ns, name, e))?;
        Ok(lookup.iter().map(|ns| ns.0.to_utf8()).collect())
    }
}

/// Root-terminated form of a name, as resolvers report canonical names.
fn canonical_self(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_self_adds_root_dot() {
        assert_eq!(canonical_self("www.example.com"), "www.example.com.");
        assert_eq!(canonical_self("www.example.com."), "www.example.com.");
    }
}
