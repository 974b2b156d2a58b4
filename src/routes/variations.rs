use crate::config::AppConfig;
use crate::error::AppError;
use crate::handlers::validation::gmail::validate_gmail_input;
use crate::handlers::variations::generate_variations;
use crate::models::variation::{GmailValidationResponse, VariationRequest, VariationResponse};
use actix_web::{HttpResponse, Responder, post, web};
use tracing::debug;

/// # Gmail Validation Endpoint
///
/// Reports whether a submitted address would be accepted by the variations
/// endpoint, so a form can show feedback while the user types.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `email` field (surrounding whitespace is ignored)
///
/// ## Responses
/// - **200 OK**: always, with `is_valid` and an optional `error`
///
/// ## Example Response
/// ```json
/// {
///   "is_valid": false,
///   "error": { "code": "INVALID_GMAIL", "message": "Please enter a valid Gmail address (e.g., example@gmail.com)." }
/// }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/validate-gmail",
    request_body = VariationRequest,
    responses(
        (status = 200, description = "Validation outcome", body = GmailValidationResponse)
    ),
    tag = "Gmail Validation"
)]
#[post("/validate-gmail")]
pub async fn validate_gmail(req: web::Json<VariationRequest>) -> impl Responder {
    let email = req.email.trim();
    HttpResponse::Ok().json(GmailValidationResponse::from(validate_gmail_input(email)))
}

/// # Variation Generation Endpoint
///
/// Generates the casing and numeric-suffix variations of a Gmail address.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `email` field
///
/// ## Responses
/// - **200 OK**: `base_email`, `count` and the ordered `variations`
/// - **400 Bad Request**:
///   - `EMPTY_EMAIL`: the address is empty after trimming
///   - `INVALID_GMAIL`: the address is not a plain `@gmail.com` address
///
/// The configured generation delay is applied before a valid request is
/// answered.
#[utoipa::path(
    post,
    path = "/api/v1/variations",
    request_body = VariationRequest,
    responses(
        (status = 200, description = "Generated variations", body = VariationResponse),
        (status = 400, description = "Invalid Gmail address")
    ),
    tag = "Variations"
)]
#[post("/variations")]
pub async fn create_variations(
    req: web::Json<VariationRequest>,
    config: web::Data<AppConfig>,
) -> Result<impl Responder, AppError> {
    let email = req.email.trim();
    validate_gmail_input(email)?;

    if !config.generation_delay.is_zero() {
        tokio::time::sleep(config.generation_delay).await;
    }

    let variations = generate_variations(email);
    debug!(count = variations.len(), "generated gmail variations");

    Ok(HttpResponse::Ok().json(VariationResponse::new(email, variations)))
}

/// # Route Configuration
///
/// - `POST /validate-gmail`
/// - `POST /variations`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_gmail).service(create_variations);
}
