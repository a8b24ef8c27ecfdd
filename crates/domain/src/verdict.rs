use std::fmt;

/// Outcome of filtering one DNS reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterVerdict {
    /// No answer resolved to a blacklisted country.
    Pass,
    /// An answer matched the blacklist; the reply now carries REFUSED.
    Refuse,
    /// The reply could not be parsed and was left untouched.
    ParseError,
    /// An answer could not be rendered; evaluation was abandoned.
    FatalError,
}

impl FilterVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterVerdict::Pass => "PASS",
            FilterVerdict::Refuse => "REFUSE",
            FilterVerdict::ParseError => "PARSE_ERROR",
            FilterVerdict::FatalError => "FATAL_ERROR",
        }
    }

    /// Result code handed back to the host pipeline.
    ///
    /// A refusal is reported as `Ok`: the block is carried by the
    /// response code already written into the reply.
    pub fn host_result(&self) -> HostResult {
        match self {
            FilterVerdict::Pass | FilterVerdict::Refuse => HostResult::Ok,
            FilterVerdict::ParseError => HostResult::Error,
            FilterVerdict::FatalError => HostResult::Fatal,
        }
    }
}

impl fmt::Display for FilterVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sync post-filter result codes understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostResult {
    Ok,
    Fatal,
    Error,
}

impl From<FilterVerdict> for HostResult {
    fn from(verdict: FilterVerdict) -> Self {
        verdict.host_result()
    }
}
