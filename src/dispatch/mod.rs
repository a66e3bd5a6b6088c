//! Line classification and routing.
//!
//! Every line is classified on its own: blank and comment lines are skipped,
//! wildcard and unsupported records are reported as Untested without a
//! lookup, and the five checked record types go to their matcher.

mod line;

use std::str::FromStr;

pub use line::ConfigLine;

use crate::config::UNIMPLEMENTED_RECORD_TYPES;
use crate::dns::{DnsLookup, QueryType};
use crate::matcher::{self, Verdict};

/// What a settings line is, decided from its first two tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// No fields
    Blank,
    /// First token starts with `#`
    Comment,
    /// Host token contains `*`
    Wildcard,
    /// One of the checked record types
    Known(QueryType),
    /// Any other keyword
    Unsupported(String),
}

/// Classifies a tokenized line. Terminal on the first applicable class.
pub fn classify(line: &ConfigLine) -> LineClass {
    let Some(keyword) = line.keyword() else {
        return LineClass::Blank;
    };
    if keyword.starts_with('#') {
        return LineClass::Comment;
    }
    if line.host().is_some_and(|host| host.contains('*')) {
        return LineClass::Wildcard;
    }
    match QueryType::from_str(keyword) {
        Ok(kind) => LineClass::Known(kind),
        Err(_) => LineClass::Unsupported(keyword.to_string()),
    }
}

/// Reason reported for a keyword the checker does not verify.
fn unsupported_reason(keyword: &str) -> String {
    if UNIMPLEMENTED_RECORD_TYPES.contains(&keyword) {
        format!("{keyword} record not yet implemented")
    } else {
        keyword.to_string()
    }
}

/// Evaluates one raw settings line.
///
/// Returns `None` for blank and comment lines, which are neither reported nor
/// counted. The resolver is only consulted for [`LineClass::Known`] lines.
pub async fn process_line(raw: &str, domain: &str, resolver: &dyn DnsLookup) -> Option<Verdict> {
    let line = ConfigLine::parse(raw);
    match classify(&line) {
        LineClass::Blank | LineClass::Comment => None,
        LineClass::Wildcard => {
            log::debug!("Skipping wildcard record: {raw}");
            Some(Verdict::untested(
                &line,
                "* (wildcard) used, test manually".to_string(),
            ))
        }
        LineClass::Unsupported(keyword) => {
            log::debug!("Skipping unsupported record type {keyword}");
            Some(Verdict::untested(&line, unsupported_reason(&keyword)))
        }
        LineClass::Known(kind) => Some(matcher::evaluate(kind, &line, domain, resolver).await),
    }
}

/// Verdict for a line whose check ended without a result (the task died).
///
/// Counted as a lookup failure so the line still appears in the summary.
/// Blank and comment lines stay unreported.
pub(crate) fn aborted_line(raw: &str, reason: &str) -> Option<Verdict> {
    let line = ConfigLine::parse(raw);
    let kind = match classify(&line) {
        LineClass::Blank | LineClass::Comment => return None,
        LineClass::Known(kind) => Some(kind),
        LineClass::Wildcard | LineClass::Unsupported(_) => None,
    };
    Some(Verdict::aborted(&line, kind, format!("check aborted: {reason}")))
}
