use super::health::HealthQuery;
use super::variations::VariationQuery;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

/// Root query type merging the health and variation operations.
#[derive(MergedObject, Default)]
pub struct QueryRoot(HealthQuery, VariationQuery);

/// Main GraphQL Schema Definition
///
/// # Type Parameters
/// - `QueryRoot`: health and variation queries
/// - `EmptyMutation`: the service is read-only
/// - `EmptySubscription`: no subscriptions
pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Creates the GraphQL schema served at `/api/v1/graphql`.
///
/// # Example
///
/// ```rust,no_run
/// use gmail_variator::graphql::schema::create_schema;
///
/// let schema = create_schema();
/// ```
pub fn create_schema() -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        EmptyMutation::default(),
        EmptySubscription::default(),
    )
    .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[tokio::test]
    async fn test_schema_exposes_all_queries() {
        let schema = create_schema();
        let res = schema
            .execute(
                r#"{
                    health { status }
                    validateGmail(email: "ab@gmail.com") { isValid }
                    variations(email: "ab@gmail.com") { count }
                }"#,
            )
            .await;

        assert!(res.errors.is_empty(), "unexpected errors: {:?}", res.errors);
        let data: Value = res.data.into_json().unwrap();
        assert_eq!(data["health"]["status"], "UP");
        assert_eq!(data["validateGmail"]["isValid"], true);
        assert_eq!(data["variations"]["count"], 18);
    }
}
