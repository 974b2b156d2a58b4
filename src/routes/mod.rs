use actix_web::web;

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2023-10-05T12:34:56.789Z",
///   "service": "gmail-variator",
///   "version": "0.3.0"
/// }
/// ```
pub mod health;

/// # Variation Endpoints
///
/// - `POST /validate-gmail`: live input check for a Gmail address
/// - `POST /variations`: generate casing/suffix variations
///
/// ## Example Request
/// ```json
/// { "email": "john.doe@gmail.com" }
/// ```
pub mod variations;

/// GraphQL endpoint and playground
pub mod graphql;


/// # API Route Configuration
///
/// Sets up versioned API endpoints under the `/api/v1` base path.
///
/// ## Mounted Services
/// - Health check endpoints (see [`health::configure_routes`])
/// - Variation endpoints (see [`variations::configure_routes`])
/// - GraphQL endpoints (see [`graphql::configure_routes`])
///
/// ## Example Endpoints
///
/// ```text
/// GET  /api/v1/health          - Service health status
/// POST /api/v1/validate-gmail  - Gmail address input check
/// POST /api/v1/variations      - Variation generation
/// POST /api/v1/graphql         - GraphQL queries
/// GET  /api/v1/playground      - GraphQL Playground
/// ```
///
/// Handlers expect `web::Data<AppConfig>` and `web::Data<AppSchema>` to be
/// registered on the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(variations::configure_routes)
            .configure(graphql::configure_routes),
    );
}
