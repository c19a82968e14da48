use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(type_name = "application_status")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Application {
    pub id: i32,
    pub name: String,
    pub course: String,
    pub academics: Option<String>,
    pub status: ApplicationStatus,
    #[serde(rename = "submittedAt")]
    pub submitted_at: DateTime<Utc>,
}

// Form payload as submitted by the student. Missing required fields
// deserialize to empty strings so the service reports them uniformly.
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub course: String,
    pub academics: Option<String>,
}

pub struct Insert {
    pub name: String,
    pub course: String,
    pub academics: Option<String>,
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_serializes_with_wire_field_names() {
        let app = Application {
            id: 7,
            name: "Alice".into(),
            course: "CS101".into(),
            academics: Some("90%".into()),
            status: ApplicationStatus::Pending,
            submitted_at: Utc::now(),
        };
        let v = serde_json::to_value(&app).unwrap();
        assert_eq!(v["id"], 7);
        assert_eq!(v["status"], "Pending");
        assert!(v.get("submittedAt").is_some());
        assert!(v.get("submitted_at").is_none());
    }

    #[test]
    fn status_uses_literal_names() {
        assert_eq!(serde_json::to_value(ApplicationStatus::Approved).unwrap(), "Approved");
        assert_eq!(serde_json::to_value(ApplicationStatus::Rejected).unwrap(), "Rejected");
    }
}
