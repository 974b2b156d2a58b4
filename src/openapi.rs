use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// REST handlers.
///
/// # Endpoints
/// - Health Check: `GET /api/v1/health`
/// - Gmail Validation: `POST /api/v1/validate-gmail`
/// - Variations: `POST /api/v1/variations`
///
/// # Tags
/// 1. **Health Check**: Service monitoring endpoints
/// 2. **Gmail Validation**: Input checks for submitted addresses
/// 3. **Variations**: Address variation generation
///
/// The GraphQL endpoint (`/api/v1/graphql`) documents itself through
/// introspection and the playground, so it is not listed here.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::variations::validate_gmail,
        crate::routes::variations::create_variations,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::variation::VariationRequest,
            crate::models::variation::VariationResponse,
            crate::models::variation::GmailValidationResponse,
            crate::models::variation::ApiErrorBody,
            crate::handlers::variations::Variation,
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Gmail Validation", description = "Checks a Gmail address before generation"),
        (name = "Variations", description = "Casing and numeric-suffix variations of a Gmail address")
    ),
    info(
        description = "Generates casing and numeric-suffix variations of a Gmail address, with REST and GraphQL interfaces",
        title = "Gmail Variator API",
        version = "0.3.0",
    )
)]
pub struct ApiDoc;
