// Shared test helpers: an in-memory resolver snapshot.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dns_checker::{DnsLookup, LookupError};

/// Fixed answers keyed by query name. Unknown names fail.
#[derive(Default)]
pub struct SnapshotResolver {
    pub a: HashMap<String, Vec<IpAddr>>,
    pub cname: HashMap<String, String>,
    pub mx: HashMap<String, Vec<(u16, String)>>,
    pub txt: HashMap<String, Vec<String>>,
    pub ns: HashMap<String, Vec<String>>,
    calls: AtomicUsize,
}

#[allow(dead_code)] // Not every test file uses every helper
impl SnapshotResolver {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn a(mut self, name: &str, ips: &[&str]) -> Self {
        let ips = ips.iter().map(|ip| ip.parse().expect("valid IP")).collect();
        self.a.insert(name.into(), ips);
        self
    }

    pub fn cname(mut self, name: &str, target: &str) -> Self {
        self.cname.insert(name.into(), target.into());
        self
    }

    pub fn mx(mut self, name: &str, records: &[(u16, &str)]) -> Self {
        let records = records.iter().map(|(p, h)| (*p, h.to_string())).collect();
        self.mx.insert(name.into(), records);
        self
    }

    pub fn txt(mut self, name: &str, records: &[&str]) -> Self {
        self.txt
            .insert(name.into(), records.iter().map(|r| r.to_string()).collect());
        self
    }

    pub fn ns(mut self, name: &str, hosts: &[&str]) -> Self {
        self.ns
            .insert(name.into(), hosts.iter().map(|h| h.to_string()).collect());
        self
    }

    fn get<T: Clone>(&self, table: &HashMap<String, T>, name: &str) -> Result<T, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        table
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::new(format!("no record found for {name}")))
    }
}

#[async_trait]
impl DnsLookup for SnapshotResolver {
    async fn lookup_a(&self, name: &str) -> Result<Vec<IpAddr>, LookupError> {
        self.get(&self.a, name)
    }

    async fn lookup_cname(&self, name: &str) -> Result<String, LookupError> {
        self.get(&self.cname, name)
    }

    async fn lookup_mx(&self, name: &str) -> Result<Vec<(u16, String)>, LookupError> {
        self.get(&self.mx, name)
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.get(&self.txt, name)
    }

    async fn lookup_ns(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.get(&self.ns, name)
    }
}
