use serde::{Deserialize, Serialize};

/// Status value for a report awaiting action.
pub const REPORT_STATUS_PENDING: &str = "pending";
/// Status value for a report that has been handled.
pub const REPORT_STATUS_RESOLVED: &str = "resolved";

/// The statuses an official may assign to a report.
pub const REPORT_STATUS_CHOICES: &[&str] = &[REPORT_STATUS_PENDING, REPORT_STATUS_RESOLVED];

/// Citizen-submitted issue report.
///
/// `status` is the only field this client ever mutates; everything else is
/// display-only. The `id` is required since it addresses the update endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Report {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default, rename = "type")]
    pub report_type: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub status: String,
}

/// Accepted response shapes for `GET /reports`: bare array or
/// `{"reports": [...]}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReportListResponse {
    Bare(Vec<Report>),
    Wrapped { reports: Vec<Report> },
}

impl ReportListResponse {
    /// Normalize either accepted shape into one typed sequence.
    pub fn into_items(self) -> Vec<Report> {
        match self {
            ReportListResponse::Bare(reports) => reports,
            ReportListResponse::Wrapped { reports } => reports,
        }
    }
}

/// Body for `PUT /reports/update/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateReportRequest {
    pub status: String,
}

/// Acknowledgement for a report update, passed through to the caller.
///
/// The backend answers `{"msg": "updated"}`; the field stays optional so a
/// bare `{}` still counts as a completed call.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct UpdateAck {
    #[serde(default)]
    pub msg: Option<String>,
}
