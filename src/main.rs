use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web::Data};
use gmail_variator::config::AppConfig;
use gmail_variator::graphql::schema::create_schema;
use gmail_variator::openapi::ApiDoc;
use gmail_variator::telemetry::init_tracing;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Gmail Variator Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - REST endpoints under `/api/v1` (health, validation, variations)
/// - GraphQL endpoint and playground powered by Async-GraphQL
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - REST: `/api/v1/...` (configured in routes)
/// - GraphQL: `/api/v1/graphql`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    init_tracing(&config.log_filter);

    let schema = create_schema();
    let bind = (config.host.clone(), config.port);

    info!(
        host = %config.host,
        port = config.port,
        generation_delay_ms = config.generation_delay_ms(),
        "starting gmail-variator"
    );

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(config.clone()))
            .app_data(Data::new(schema.clone()))
            .configure(gmail_variator::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(bind)?
    .run()
    .await
}
