mod core;
mod database;
mod error;
mod handlers;
mod response;

use actix_cors::Cors;
use actix_web::web::{get, post, put, resource, scope, Data};
use actix_web::HttpServer;
use sqlx::postgres::PgPoolOptions;

#[actix_web::main]
async fn main() -> Result<(), std::io::Error> {
    dotenv::dotenv().ok();
    std::env::set_var("RUST_LOG", "actix_web=info,admissions=info");
    env_logger::init();
    let database_url = dotenv::var("DATABASE_URL").expect("environment variable DATABASE_URL not been set");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("failed to connect to database");
    HttpServer::new(move || {
        actix_web::App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(Cors::permissive())
            .app_data(Data::new(pool.clone()))
            .service(
                scope("api")
                    .service(
                        resource("applications")
                            .route(post().to(handlers::application::create))
                            .route(get().to(handlers::application::list)),
                    )
                    .service(resource("applications/{application_id}").route(put().to(handlers::application::update_status))),
            )
    })
    .bind(("0.0.0.0", 3000))?
    .run()
    .await
}
