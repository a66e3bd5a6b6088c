//! Record matchers.
//!
//! One matcher per checked record type. A matcher first derives a
//! [`LookupPlan`] from the settings line (which name to query, which value to
//! expect) and then collects the resolved values that satisfy its type's
//! comparison rule:
//!
//! | Type  | Rule |
//! |-------|------|
//! | A     | address string equals the configured IP verbatim |
//! | CNAME | canonical name contains the configured target |
//! | MX    | exchange equals the configured host, case-insensitive, root dot ignored |
//! | TXT   | text equals the rejoined configured value exactly |
//! | NS    | nameserver contains the configured host |
//!
//! The rules deliberately differ per type; do not unify them.

mod a;
mod cname;
mod mx;
mod ns;
mod txt;
mod verdict;

use async_trait::async_trait;

pub use a::AddressMatcher;
pub use cname::CnameMatcher;
pub use mx::MxMatcher;
pub use ns::NsMatcher;
pub use txt::TxtMatcher;
pub use verdict::{Outcome, Tally, Verdict};

use crate::dispatch::ConfigLine;
use crate::dns::{DnsLookup, QueryType};
use crate::error_handling::LookupError;

/// Minimum fields of a checked record line: keyword, host, value.
const MIN_FIELDS: usize = 3;

/// What to query and what to expect, derived from one settings line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupPlan {
    /// Name passed to the resolver
    pub query: String,
    /// Configured value in the form the type's rule compares against
    pub expected: String,
}

/// Comparison rule for one record type.
#[async_trait]
pub trait RecordMatcher: Send + Sync {
    /// Derives the lookup from the line.
    ///
    /// Only called with lines of at least three fields. Returns the reason if
    /// the line still does not fit any shape of this type.
    fn plan(&self, line: &ConfigLine, domain: &str) -> Result<LookupPlan, String>;

    /// Resolves `plan.query` and returns the values satisfying the rule,
    /// formatted for the report. An empty vector is a mismatch.
    async fn matching_values(
        &self,
        plan: &LookupPlan,
        resolver: &dyn DnsLookup,
    ) -> Result<Vec<String>, LookupError>;
}

/// Matcher for `kind`.
pub fn matcher_for(kind: QueryType) -> &'static dyn RecordMatcher {
    match kind {
        QueryType::A => &AddressMatcher,
        QueryType::Cname => &CnameMatcher,
        QueryType::Mx => &MxMatcher,
        QueryType::Txt => &TxtMatcher,
        QueryType::Ns => &NsMatcher,
    }
}

/// Checks `line` as a record of type `kind` in zone `domain`.
///
/// Performs at most one lookup. Malformed lines produce a verdict without
/// touching the resolver.
pub async fn evaluate(
    kind: QueryType,
    line: &ConfigLine,
    domain: &str,
    resolver: &dyn DnsLookup,
) -> Verdict {
    if line.len() < MIN_FIELDS {
        log::warn!("Malformed {kind} line (needs host and value): {}", line.raw());
        return Verdict::malformed(
            line,
            kind,
            format!("{kind} record needs at least a host and a value"),
        );
    }

    let matcher = matcher_for(kind);
    let plan = match matcher.plan(line, domain) {
        Ok(plan) => plan,
        Err(reason) => {
            log::warn!("Malformed {kind} line: {}", line.raw());
            return Verdict::malformed(line, kind, reason);
        }
    };

    log::debug!(
        "Checking {kind} {} against expected {:?}",
        plan.query,
        plan.expected
    );
    let result = matcher.matching_values(&plan, resolver).await;
    Verdict::checked(line, kind, plan.query, result)
}
