use sqlx::pool::PoolConnection;
use sqlx::{query_as, Executor, Postgres, Transaction};

use crate::core::models::application::{Application, ApplicationStatus, Insert};
use crate::core::ports::repository::{ApplicationCommon, Store};
use crate::error::Error;

pub struct PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e>,
{
    executor: E,
}

impl<E> PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e>,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

impl<E> ApplicationCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, data: Insert) -> Result<Application, Error> {
        let app = query_as(
            "
        INSERT INTO applications (name, course, academics, status, submitted_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *",
        )
        .bind(data.name)
        .bind(data.course)
        .bind(data.academics)
        .bind(data.status)
        .bind(data.submitted_at)
        .fetch_one(&mut self.executor)
        .await?;
        Ok(app)
    }

    async fn list(&mut self) -> Result<Vec<Application>, Error> {
        let apps = query_as("SELECT * FROM applications ORDER BY id")
            .fetch_all(&mut self.executor)
            .await?;
        Ok(apps)
    }

    async fn update_status(&mut self, id: i32, status: ApplicationStatus) -> Result<Option<Application>, Error> {
        let app = query_as("UPDATE applications SET status = $1 WHERE id = $2 RETURNING *")
            .bind(status)
            .bind(id)
            .fetch_optional(&mut self.executor)
            .await?;
        Ok(app)
    }
}

impl Store for PgSqlx<PoolConnection<Postgres>> {}
impl<'a> Store for PgSqlx<Transaction<'a, Postgres>> {}
