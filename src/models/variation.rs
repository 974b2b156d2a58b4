use crate::error::GmailInputError;
use crate::handlers::variations::Variation;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct VariationRequest {
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct VariationResponse {
    /// The address the variations were generated from, as submitted (trimmed)
    pub base_email: String,
    pub count: usize,
    pub variations: Vec<Variation>,
}

impl VariationResponse {
    pub fn new(base_email: impl Into<String>, variations: Vec<Variation>) -> Self {
        Self {
            base_email: base_email.into(),
            count: variations.len(),
            variations,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

impl From<&GmailInputError> for ApiErrorBody {
    fn from(err: &GmailInputError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct GmailValidationResponse {
    pub is_valid: bool,
    pub error: Option<ApiErrorBody>,
}

impl From<Result<(), GmailInputError>> for GmailValidationResponse {
    fn from(result: Result<(), GmailInputError>) -> Self {
        match result {
            Ok(()) => Self {
                is_valid: true,
                error: None,
            },
            Err(e) => Self {
                is_valid: false,
                error: Some(ApiErrorBody::from(&e)),
            },
        }
    }
}
