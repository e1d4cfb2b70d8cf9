use serde::Deserialize;

/// Municipal infrastructure project record.
///
/// Read-only from the client's perspective. Every field is defaultable: the
/// backend omits fields freely and the UI substitutes placeholders at render
/// time.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Project {
    pub id: Option<i64>,
    pub title: String,
    pub location: String,
    pub status: String,
    pub congestion_level: String,
    pub hazard_type: String,
    pub description: String,
}

/// Accepted response shapes for `GET /projects`.
///
/// The backend sends either a bare array or `{"projects": [...]}`; both are
/// equally valid and neither supersedes the other.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProjectListResponse {
    Bare(Vec<Project>),
    Wrapped { projects: Vec<Project> },
}

impl ProjectListResponse {
    /// Normalize either accepted shape into one typed sequence.
    pub fn into_items(self) -> Vec<Project> {
        match self {
            ProjectListResponse::Bare(projects) => projects,
            ProjectListResponse::Wrapped { projects } => projects,
        }
    }
}
