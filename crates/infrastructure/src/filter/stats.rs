use geoblock_domain::FilterVerdict;
use std::sync::atomic::{AtomicU64, Ordering};

/// Verdict counters, updated from any thread calling the filter.
#[derive(Debug, Default)]
pub struct FilterStats {
    inspected: AtomicU64,
    passed: AtomicU64,
    refused: AtomicU64,
    parse_errors: AtomicU64,
    fatal_errors: AtomicU64,
}

impl FilterStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, verdict: FilterVerdict) {
        self.inspected.fetch_add(1, Ordering::Relaxed);

        let counter = match verdict {
            FilterVerdict::Pass => &self.passed,
            FilterVerdict::Refuse => &self.refused,
            FilterVerdict::ParseError => &self.parse_errors,
            FilterVerdict::FatalError => &self.fatal_errors,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> FilterStatsSnapshot {
        FilterStatsSnapshot {
            inspected: self.inspected.load(Ordering::Relaxed),
            passed: self.passed.load(Ordering::Relaxed),
            refused: self.refused.load(Ordering::Relaxed),
            parse_errors: self.parse_errors.load(Ordering::Relaxed),
            fatal_errors: self.fatal_errors.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStatsSnapshot {
    pub inspected: u64,
    pub passed: u64,
    pub refused: u64,
    pub parse_errors: u64,
    pub fatal_errors: u64,
}

impl FilterStatsSnapshot {
    pub fn refusal_rate(&self) -> f64 {
        if self.inspected == 0 {
            return 0.0;
        }
        self.refused as f64 / self.inspected as f64
    }
}
