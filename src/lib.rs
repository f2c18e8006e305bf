pub mod application;
pub mod bootstrap;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod models;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::revenue_service::RevenueService;
use infrastructure::sales_repo::DieselSalesRepository;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::revenue::revenue_summary,
        handlers::revenue::sold_products,
        handlers::products::create_product,
        handlers::products::get_product,
        handlers::products::list_products_by_seller,
        handlers::products::update_product,
        handlers::products::delete_product,
    ),
    components(schemas(
        handlers::revenue::RevenueSummaryResponse,
        handlers::revenue::SoldProductResponse,
        handlers::products::CreateProductRequest,
        handlers::products::UpdateProductRequest,
        handlers::products::ProductResponse,
    )),
    tags(
        (name = "revenue", description = "Seller revenue reporting"),
        (name = "products", description = "Seller product catalog"),
    )
)]
pub struct ApiDoc;

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        let revenue_service = web::Data::new(RevenueService::new(DieselSalesRepository::new(
            pool.clone(),
        )));
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(revenue_service)
            .wrap(Logger::default())
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/revenue")
                            .route(
                                "/summary/{seller_id}",
                                web::get().to(handlers::revenue::revenue_summary),
                            )
                            .route(
                                "/sold-products/{seller_id}",
                                web::get().to(handlers::revenue::sold_products),
                            ),
                    )
                    .service(
                        web::scope("/products")
                            .route("", web::post().to(handlers::products::create_product))
                            .route(
                                "/seller/{seller_id}",
                                web::get().to(handlers::products::list_products_by_seller),
                            )
                            .route("/{id}", web::get().to(handlers::products::get_product))
                            .route("/{id}", web::put().to(handlers::products::update_product))
                            .route("/{id}", web::delete().to(handlers::products::delete_product)),
                    ),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
