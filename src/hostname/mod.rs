//! Hostname normalization.
//!
//! Settings exports write hosts relative to the zone (`www`, `mail`, `@`) or,
//! less often, fully qualified. Every matcher turns its host token into the
//! name to query through [`normalize`].

use std::sync::LazyLock;

use regex::Regex;

/// Labels of alphanumerics/hyphens (1-63 chars, no leading/trailing hyphen),
/// at least one dot, alphabetic final label of 2+ chars.
static FQDN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$")
        .expect("FQDN pattern is a valid regex")
});

/// Token for the zone apex.
pub const APEX: &str = "@";

/// Qualifies `token` against `domain`.
///
/// - `@` is the apex and becomes `domain`.
/// - A token that already looks like a fully qualified name is returned as-is.
/// - Anything else is a label relative to the zone: `token.domain`.
///
/// # Examples
///
/// ```
/// use dns_checker::hostname::normalize;
///
/// assert_eq!(normalize("@", "example.com"), "example.com");
/// assert_eq!(normalize("mail", "example.com"), "mail.example.com");
/// assert_eq!(normalize("sub.example.com", "example.com"), "sub.example.com");
/// ```
pub fn normalize(token: &str, domain: &str) -> String {
    if token == APEX {
        domain.to_string()
    } else if is_fqdn(token) {
        token.to_string()
    } else {
        format!("{token}.{domain}")
    }
}

/// Whether `token` looks like a fully qualified name.
pub fn is_fqdn(token: &str) -> bool {
    FQDN_PATTERN.is_match(token)
}

/// Removes one trailing root dot (`host.example.com.` -> `host.example.com`).
pub fn strip_root_dot(token: &str) -> &str {
    token.strip_suffix('.').unwrap_or(token)
}

/// Qualifies the host of an A record.
///
/// `www.`-prefixed hosts are certificate-issuance aliases of a subdomain
/// (`a www.shop 192.0.2.1`), which the FQDN heuristic would mistake for a full
/// name, so they are always taken relative to the zone.
pub fn qualify_address_host(host: &str, domain: &str) -> String {
    if host.starts_with("www.") {
        format!("{host}.{domain}")
    } else {
        normalize(strip_root_dot(host), domain)
    }
}

/// Qualifies a host that may already carry the zone name (CNAME, NS, TXT).
///
/// A host containing `domain` anywhere is treated as already qualified and
/// only loses its root dot.
pub fn qualify_zone_host(host: &str, domain: &str) -> String {
    if host.contains(domain) {
        strip_root_dot(host).to_string()
    } else {
        normalize(strip_root_dot(host), domain)
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
