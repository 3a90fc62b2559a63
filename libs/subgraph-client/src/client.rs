use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::SubgraphError, query::PagedQuery};

/// Executes one page request against a subgraph endpoint.
///
/// Implementations return the decoded `data` object of the GraphQL
/// response. An `Err` aborts the whole fetch; a `data` object without the
/// query's root list is treated by the pagination loop as end of data.
#[async_trait]
pub trait SubgraphQuery: Send + Sync {
    async fn execute(&self, endpoint: &str, query: &PagedQuery) -> Result<Value, SubgraphError>;
}

/// GraphQL-over-HTTP executor.
pub struct HttpSubgraph {
    http: reqwest::Client,
}

impl HttpSubgraph {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for HttpSubgraph {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<Value>>,
}

#[async_trait]
impl SubgraphQuery for HttpSubgraph {
    async fn execute(&self, endpoint: &str, query: &PagedQuery) -> Result<Value, SubgraphError> {
        let document = query.render();

        tracing::debug!(endpoint, root = query.root, skip = query.skip, "subgraph page request");

        let response = self
            .http
            .post(endpoint)
            .json(&GraphQlRequest { query: &document })
            .send()
            .await?
            .error_for_status()?;

        let body: GraphQlResponse = response.json().await?;

        if let Some(errors) = body.errors.filter(|errors| !errors.is_empty()) {
            let joined = errors
                .iter()
                .map(Value::to_string)
                .collect::<Vec<_>>()
                .join("; ");

            return Err(SubgraphError::GraphQl(joined));
        }

        Ok(body.data.unwrap_or(Value::Null))
    }
}
