use actix_web::http::StatusCode;
use actix_web::web::{Data, Json, Path};
use actix_web::HttpResponse;
use log::info;
use serde::Deserialize;
use sqlx::PgPool;

use crate::core::models::application::{Application, Submission};
use crate::core::services::application::{list_applications, review_application, submit_application};
use crate::database::sqlx::PgSqlx;
use crate::error::Error;
use crate::response::Message;

pub async fn create(Json(data): Json<Submission>, db: Data<PgPool>) -> Result<HttpResponse, Error> {
    let mut store = PgSqlx::new(db.acquire().await?);
    let app = submit_application(&mut store, data).await?;
    info!("new application submitted: {}", app.name);
    Ok(HttpResponse::build(StatusCode::CREATED).json(Message::new("Application submitted successfully!", app)))
}

pub async fn list(db: Data<PgPool>) -> Result<Json<Vec<Application>>, Error> {
    let mut store = PgSqlx::new(db.acquire().await?);
    let apps = list_applications(&mut store).await?;
    Ok(Json(apps))
}

#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    status: String,
}

pub async fn update_status(id: Path<(i32,)>, Json(Review { status }): Json<Review>, db: Data<PgPool>) -> Result<Json<Message<Application>>, Error> {
    let id = id.into_inner().0;
    let mut store = PgSqlx::new(db.acquire().await?);
    let app = review_application(&mut store, id, &status).await?;
    info!("application {} status updated to: {}", app.name, status);
    Ok(Json(Message::new(format!("Application {} successfully", status), app)))
}
