/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
/// Used as the response format for health check endpoints.
///
/// ## Fields
/// - `status`: String indicating service availability ("UP" or "DOWN")
/// - `timestamp`: ISO 8601 formatted timestamp of the status check
/// - `service`: Service name
/// - `version`: Crate version the service was built from
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2024-03-10T15:30:45.123456789Z",
///   "service": "gmail-variator",
///   "version": "0.3.0"
/// }
/// ```
pub mod health;

/// Request and response bodies for the variation and validation endpoints.
pub mod variation;
