use crate::models::health::HealthResponse;
use async_graphql::{Context, Object, Result, SimpleObject};

/// GraphQL representation of service health status
///
/// Mirrors the REST [`HealthResponse`] so both APIs report the same values.
#[derive(Debug, SimpleObject)]
pub struct Health {
    /// Current service status, "UP" while the service answers
    pub status: String,
    /// RFC 3339 timestamp of the check
    pub timestamp: String,
    pub service: String,
    pub version: String,
}

impl From<HealthResponse> for Health {
    fn from(response: HealthResponse) -> Self {
        Self {
            status: response.status,
            timestamp: response.timestamp,
            service: response.service,
            version: response.version,
        }
    }
}

/// Root query type for health-related GraphQL operations
#[derive(Default)]
pub struct HealthQuery;

#[Object]
impl HealthQuery {
    /// Checks service health status
    async fn health(&self, _ctx: &Context<'_>) -> Result<Health> {
        Ok(Health::from(HealthResponse::up()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::{EmptyMutation, EmptySubscription, Schema};
    use chrono::{DateTime, Utc};

    #[test]
    fn test_health_from_health_response() {
        let timestamp = Utc::now().to_rfc3339();
        let health_response = HealthResponse {
            status: "UP".to_string(),
            timestamp: timestamp.clone(),
            service: "gmail-variator".to_string(),
            version: "0.3.0".to_string(),
        };

        let health = Health::from(health_response);

        assert_eq!(health.status, "UP");
        assert_eq!(health.timestamp, timestamp);
        assert_eq!(health.service, "gmail-variator");
        assert_eq!(health.version, "0.3.0");
    }

    #[tokio::test]
    async fn test_health_query_resolver() {
        let schema = Schema::build(
            HealthQuery::default(),
            EmptyMutation::default(),
            EmptySubscription::default(),
        )
        .finish();

        let query = r#"
            query {
                health {
                    status
                    timestamp
                    service
                }
            }
        "#;

        let result = schema.execute(query).await;
        assert!(result.errors.is_empty());

        let data = result.data.into_json().unwrap();
        assert_eq!(data["health"]["status"], "UP");
        assert_eq!(data["health"]["service"], "gmail-variator");

        // Verify timestamp is a valid ISO 8601 date
        let timestamp = data["health"]["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }
}
