//! Run-level counters.

use crate::matcher::{Tally, Verdict};

/// Counts of one run. Owned by the single aggregator that folds verdicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines whose record matched
    pub ok: usize,
    /// Mismatches, lookup failures and malformed lines
    pub error: usize,
    /// Wildcard and unsupported lines
    pub untested: usize,
}

impl RunSummary {
    /// Folds one verdict into the counts.
    pub fn record(&mut self, verdict: &Verdict) {
        match verdict.outcome.tally() {
            Tally::Ok => self.ok += 1,
            Tally::Error => self.error += 1,
            Tally::Untested => self.untested += 1,
        }
    }

    /// Number of reported lines (every non-blank, non-comment line).
    pub fn total(&self) -> usize {
        self.ok + self.error + self.untested
    }

    /// True if any line counted as Error.
    pub fn has_errors(&self) -> bool {
        self.error > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Outcome;

    fn verdict(outcome: Outcome) -> Verdict {
        Verdict {
            config: "a @ 192.0.2.1".to_string(),
            record_type: None,
            query: None,
            values: Vec::new(),
            outcome,
        }
    }

    #[test]
    fn test_record_folds_each_bucket() {
        let mut summary = RunSummary::default();
        summary.record(&verdict(Outcome::Matched));
        summary.record(&verdict(Outcome::Mismatched));
        summary.record(&verdict(Outcome::LookupFailed("SERVFAIL".into())));
        summary.record(&verdict(Outcome::Untested("caa".into())));

        assert_eq!(
            summary,
            RunSummary {
                ok: 1,
                error: 2,
                untested: 1
            }
        );
        assert_eq!(summary.total(), 4);
        assert!(summary.has_errors());
    }
}
