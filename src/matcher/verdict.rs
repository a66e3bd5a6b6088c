//! Per-line verdicts and their text reports.

use std::fmt::Write;

use colored::Colorize;

use crate::dispatch::ConfigLine;
use crate::dns::QueryType;
use crate::error_handling::LookupError;

/// Result of checking one settings line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// At least one resolved value equals the configured one (under the type's rule)
    Matched,
    /// Resolution succeeded but nothing matched
    Mismatched,
    /// Resolution itself failed; carries the resolver's message
    LookupFailed(String),
    /// Deliberately not checked (wildcard, unsupported type)
    Untested(String),
    /// Too few (or, for MX, too many) fields for the record type
    Malformed(String),
}

/// Which run-level counter an outcome contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tally {
    Ok,
    Error,
    Untested,
}

impl Outcome {
    /// Counter bucket: lookup failures and malformed lines count as errors.
    pub fn tally(&self) -> Tally {
        match self {
            Outcome::Matched => Tally::Ok,
            Outcome::Mismatched | Outcome::LookupFailed(_) | Outcome::Malformed(_) => Tally::Error,
            Outcome::Untested(_) => Tally::Untested,
        }
    }
}

/// A checked line: what was queried, what matched, and the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// The settings line as read
    pub config: String,
    /// Record type checked; `None` when the line was never routed to a matcher
    pub record_type: Option<QueryType>,
    /// Fully qualified name that was queried
    pub query: Option<String>,
    /// Resolved values that satisfied the match rule
    pub values: Vec<String>,
    pub outcome: Outcome,
}

impl Verdict {
    pub(crate) fn untested(line: &ConfigLine, reason: String) -> Self {
        Self {
            config: line.raw().to_string(),
            record_type: None,
            query: None,
            values: Vec::new(),
            outcome: Outcome::Untested(reason),
        }
    }

    pub(crate) fn malformed(line: &ConfigLine, kind: QueryType, reason: String) -> Self {
        Self {
            config: line.raw().to_string(),
            record_type: Some(kind),
            query: None,
            values: Vec::new(),
            outcome: Outcome::Malformed(reason),
        }
    }

    pub(crate) fn aborted(line: &ConfigLine, kind: Option<QueryType>, message: String) -> Self {
        Self {
            config: line.raw().to_string(),
            record_type: kind,
            query: None,
            values: Vec::new(),
            outcome: Outcome::LookupFailed(message),
        }
    }

    pub(crate) fn checked(
        line: &ConfigLine,
        kind: QueryType,
        query: String,
        result: Result<Vec<String>, LookupError>,
    ) -> Self {
        let (values, outcome) = match result {
            Ok(values) if values.is_empty() => (values, Outcome::Mismatched),
            Ok(values) => (values, Outcome::Matched),
            Err(e) => (Vec::new(), Outcome::LookupFailed(e.to_string())),
        };
        Self {
            config: line.raw().to_string(),
            record_type: Some(kind),
            query: Some(query),
            values,
            outcome,
        }
    }

    /// True when the line matched.
    pub fn is_ok(&self) -> bool {
        self.outcome == Outcome::Matched
    }

    /// Renders the report block printed for this line, ending with a blank line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(out, "Config : {}", self.config);

        if let Outcome::Untested(reason) = &self.outcome {
            let _ = writeln!(out, "{}", format!("Untested : {reason}").yellow());
            out.push('\n');
            return out;
        }

        if let Some(kind) = self.record_type {
            let _ = writeln!(out, "Type   : {kind}");
        }
        if let Some(query) = &self.query {
            let _ = writeln!(out, "Name   : {query}");
        }
        for value in &self.values {
            let _ = writeln!(out, "Value  : {value}");
        }

        match &self.outcome {
            Outcome::Matched => {
                let _ = writeln!(out, "{}", "OK".green());
            }
            Outcome::Mismatched => {
                let _ = writeln!(out, "{}", "Error".red());
            }
            Outcome::LookupFailed(message) => {
                let _ = writeln!(out, "{}", "Error".red());
                match self.record_type {
                    Some(kind) => {
                        let _ = writeln!(
                            out,
                            "DNS lookup failed for {} record: {message}",
                            kind.mnemonic()
                        );
                    }
                    None => {
                        let _ = writeln!(out, "DNS lookup failed: {message}");
                    }
                }
            }
            Outcome::Malformed(reason) => {
                let _ = writeln!(out, "{}", "Error".red());
                let _ = writeln!(out, "Malformed line: {reason}");
            }
            Outcome::Untested(_) => {}
        }
        out.push('\n');
        out
    }
}
