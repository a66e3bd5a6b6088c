//! In-memory `DnsLookup` for unit tests.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{DnsLookup, QueryType};
use crate::error_handling::LookupError;

/// Answers from fixed tables; unknown names fail like NXDOMAIN.
#[derive(Default)]
pub(crate) struct StubResolver {
    a: HashMap<String, Vec<IpAddr>>,
    cname: HashMap<String, String>,
    mx: HashMap<String, Vec<(u16, String)>>,
    txt: HashMap<String, Vec<String>>,
    ns: HashMap<String, Vec<String>>,
    calls: AtomicUsize,
}

impl StubResolver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_a(mut self, name: &str, ips: &[&str]) -> Self {
        let ips = ips
            .iter()
            .map(|ip| ip.parse().expect("test IP should parse"))
            .collect();
        self.a.insert(name.to_string(), ips);
        self
    }

    pub(crate) fn with_cname(mut self, name: &str, target: &str) -> Self {
        self.cname.insert(name.to_string(), target.to_string());
        self
    }

    pub(crate) fn with_mx(mut self, name: &str, records: &[(u16, &str)]) -> Self {
        let records = records
            .iter()
            .map(|(pref, host)| (*pref, host.to_string()))
            .collect();
        self.mx.insert(name.to_string(), records);
        self
    }

    pub(crate) fn with_txt(mut self, name: &str, records: &[&str]) -> Self {
        let records = records.iter().map(|r| r.to_string()).collect();
        self.txt.insert(name.to_string(), records);
        self
    }

    pub(crate) fn with_ns(mut self, name: &str, hosts: &[&str]) -> Self {
        let hosts = hosts.iter().map(|h| h.to_string()).collect();
        self.ns.insert(name.to_string(), hosts);
        self
    }

    /// Number of lookups performed so far.
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer<T: Clone>(
        &self,
        table: &HashMap<String, T>,
        kind: QueryType,
        name: &str,
    ) -> Result<T, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        table.get(name).cloned().ok_or_else(|| {
            LookupError::new(format!("no {} record found for {name}", kind.mnemonic()))
        })
    }
}

#[async_trait]
impl DnsLookup for StubResolver {
    async fn lookup_a(&self, name: &str) -> Result<Vec<IpAddr>, LookupError> {
        self.answer(&self.a, QueryType::A, name)
    }

    async fn lookup_cname(&self, name: &str) -> Result<String, LookupError> {
        self.answer(&self.cname, QueryType::Cname, name)
    }

    async fn lookup_mx(&self, name: &str) -> Result<Vec<(u16, String)>, LookupError> {
        self.answer(&self.mx, QueryType::Mx, name)
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.answer(&self.txt, QueryType::Txt, name)
    }

    async fn lookup_ns(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.answer(&self.ns, QueryType::Ns, name)
    }
}
