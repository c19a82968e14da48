use chrono::Utc;

use crate::core::models::application::{Application, ApplicationStatus, Insert, Submission};
use crate::core::ports::repository::{ApplicationCommon, Store};
use crate::error::Error;

pub async fn submit_application<D>(db: &mut D, data: Submission) -> Result<Application, Error>
where
    D: Store,
{
    if data.name.trim().is_empty() {
        return Err(Error::Validation("name is required".into()));
    }
    if data.course.trim().is_empty() {
        return Err(Error::Validation("course is required".into()));
    }
    let app = ApplicationCommon::insert(
        db,
        Insert {
            name: data.name,
            course: data.course,
            academics: data.academics,
            status: ApplicationStatus::Pending,
            submitted_at: Utc::now(),
        },
    )
    .await?;
    Ok(app)
}

pub async fn list_applications<D>(db: &mut D) -> Result<Vec<Application>, Error>
where
    D: Store,
{
    ApplicationCommon::list(db).await
}

// The new status arrives as free text from the client; only the two review
// outcomes are accepted. The write is unconditional: reviewing an already
// reviewed application overwrites its status.
pub async fn review_application<D>(db: &mut D, id: i32, status: &str) -> Result<Application, Error>
where
    D: Store,
{
    let status = match status {
        "Approved" => ApplicationStatus::Approved,
        "Rejected" => ApplicationStatus::Rejected,
        other => return Err(Error::InvalidStatus(other.into())),
    };
    ApplicationCommon::update_status(db, id, status).await?.ok_or(Error::NotFound(id))
}
