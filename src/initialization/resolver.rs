//! DNS resolver initialization.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_ATTEMPTS;

/// Initializes the DNS resolver used for record checks.
///
/// Uses the platform resolver configuration (`/etc/resolv.conf` or the OS
/// equivalent) so results match what the machine itself sees. If the system
/// configuration cannot be read, falls back to hickory's default upstreams.
///
/// `ndots` is forced to 0: every query name is already fully qualified by the
/// hostname normalizer, and search-domain expansion would change what is checked.
pub fn init_resolver(timeout_secs: u64) -> Arc<TokioAsyncResolver> {
    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration ({e}), using default upstreams");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = Duration::from_secs(timeout_secs);
    opts.attempts = DNS_ATTEMPTS;
    opts.ndots = 0;

    log::debug!(
        "Resolver configured with {} upstream(s), timeout {}s",
        config.name_servers().len(),
        timeout_secs
    );

    Arc::new(TokioAsyncResolver::tokio(config, opts))
}
