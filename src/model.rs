use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Outcome of a single run, written once when the run finishes. A record
/// is never updated in place; the next run's record supersedes it.
///
/// Fields are private and there are no setters, so a constructed record
/// cannot change. Construction performs no validation: timestamps and
/// version strings are stored as given. By convention `error` is only set
/// when `ok` is false, but nothing enforces that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRecord {
    run_start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    run_end: Option<String>,
    ok: bool,
    version: String,
    contract_version: String,
    metrics: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl StatusRecord {
    pub fn new(
        run_start: impl Into<String>,
        run_end: Option<String>,
        ok: bool,
        version: impl Into<String>,
        contract_version: impl Into<String>,
        metrics: Map<String, Value>,
        error: Option<String>,
    ) -> Self {
        Self {
            run_start: run_start.into(),
            run_end,
            ok,
            version: version.into(),
            contract_version: contract_version.into(),
            metrics,
            error,
        }
    }

    pub fn run_start(&self) -> &str {
        &self.run_start
    }

    pub fn run_end(&self) -> Option<&str> {
        self.run_end.as_deref()
    }

    pub fn ok(&self) -> bool {
        self.ok
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn contract_version(&self) -> &str {
        &self.contract_version
    }

    pub fn metrics(&self) -> &Map<String, Value> {
        &self.metrics
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Current wall-clock time as an RFC 3339 string. The offset is always
/// UTC, which the formatter renders as a literal `Z`, never `+00:00`.
pub fn now_utc_timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .expect("format utc timestamp")
}
