use crate::core::models::application::{Application, ApplicationStatus, Insert};
use crate::error::Error;

pub trait ApplicationCommon {
    async fn insert(&mut self, data: Insert) -> Result<Application, Error>;
    async fn list(&mut self) -> Result<Vec<Application>, Error>;
    async fn update_status(&mut self, id: i32, status: ApplicationStatus) -> Result<Option<Application>, Error>;
}

pub trait Store: ApplicationCommon {}
