use chrono::NaiveDateTime;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
/// Health report returned by `GET /`.
pub struct HealthStatus {
    /// Status label, `"OK"` while the server is up.
    pub status: String,
    /// Server local time of the check.
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Problem {
    pub(crate) status: Option<u16>,
    pub(crate) title: Option<String>,
    pub(crate) detail: Option<String>,
}
