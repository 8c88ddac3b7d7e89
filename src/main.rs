use actix_web::{middleware, web, App, HttpServer, Responder};
use dotenv::dotenv;
use env_logger::Env;

mod db;
mod handlers;
mod models;

async fn index() -> impl Responder {
    "Room inventory API is running"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    log::info!("Connecting to database...");
    let pool = db::get_db_pool().await;

    // Run migrations
    log::info!("Running migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    log::info!("Starting server at http://localhost:8080");

    let pool_data = web::Data::new(pool);

    HttpServer::new(move || {
        App::new()
            .app_data(pool_data.clone())
            .wrap(middleware::Logger::default())
            .route("/", web::get().to(index))
            .configure(handlers::rooms::routes)
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
