use crate::error::GmailInputError;
use crate::handlers::validation::gmail::validate_gmail_input;
use crate::handlers::variations::{Variation, generate_variations};
use async_graphql::{Context, Error, ErrorExtensions, Object, Result, SimpleObject};
use tracing::debug;

/// A generated address with its display identifier
#[derive(SimpleObject, Clone, Debug)]
pub struct VariationItem {
    /// Display identifier such as `variation-0`
    pub id: String,
    /// Generated email address
    pub address: String,
}

impl From<Variation> for VariationItem {
    fn from(variation: Variation) -> Self {
        Self {
            id: variation.id,
            address: variation.address,
        }
    }
}

/// All variations generated for one base address
#[derive(SimpleObject)]
pub struct VariationSet {
    /// The submitted address, trimmed
    pub base_email: String,
    /// Number of generated variations
    pub count: i32,
    pub variations: Vec<VariationItem>,
}

/// Why an address was refused
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct GmailValidationError {
    /// Error code: EMPTY_EMAIL or INVALID_GMAIL
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// Outcome of checking an address before generation
#[derive(SimpleObject)]
pub struct GmailValidation {
    pub is_valid: bool,
    pub error: Option<GmailValidationError>,
}

impl From<Result<(), GmailInputError>> for GmailValidation {
    fn from(result: std::result::Result<(), GmailInputError>) -> Self {
        match result {
            Ok(()) => Self {
                is_valid: true,
                error: None,
            },
            Err(e) => Self {
                is_valid: false,
                error: Some(GmailValidationError {
                    code: e.code().to_string(),
                    message: e.to_string(),
                }),
            },
        }
    }
}

fn input_error(err: GmailInputError) -> Error {
    let code = err.code();
    Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code.to_string()))
}

/// Variation query operations
#[derive(Default)]
pub struct VariationQuery;

#[Object]
impl VariationQuery {
    /// Checks whether an address would be accepted by `variations`
    async fn validate_gmail(&self, _ctx: &Context<'_>, email: String) -> GmailValidation {
        GmailValidation::from(validate_gmail_input(email.trim()))
    }

    /// Generates casing and numeric-suffix variations of a Gmail address
    ///
    /// # Errors
    /// A GraphQL error with extension `code` set to `EMPTY_EMAIL` or
    /// `INVALID_GMAIL` when the address is refused.
    async fn variations(&self, _ctx: &Context<'_>, email: String) -> Result<VariationSet> {
        let email = email.trim();
        validate_gmail_input(email).map_err(input_error)?;

        let variations = generate_variations(email);
        debug!(count = variations.len(), "generated gmail variations");

        Ok(VariationSet {
            base_email: email.to_string(),
            count: i32::try_from(variations.len()).unwrap_or(i32::MAX),
            variations: variations.into_iter().map(VariationItem::from).collect(),
        })
    }
}
