//! HTTP client for the GitHub GraphQL endpoint.

use super::query::{recap_variables, RECAP_QUERY};
use super::types::{GraphQlErrorEntry, GraphQlRequest, GraphQlResponse, RawSnapshotData};
use crate::utils::config::{DEFAULT_REQUEST_TIMEOUT, USER_AGENT};
use crate::utils::error::GraphQlError;
use log::{debug, info};
use reqwest::blocking::Client;

/// GraphQL client authenticated with a personal access or OAuth token
pub struct GitHubClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl GitHubClient {
    /// Create a new client
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Result<Self, GraphQlError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(GraphQlError::InvalidInput(
                "GitHub token is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(GraphQlError::RequestFailed)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token,
        })
    }

    /// Fetch the raw `data` object of the recap query for one year
    ///
    /// The login is checked before any request is sent.
    pub fn fetch_annual_data(&self, login: &str, year: i32) -> Result<RawSnapshotData, GraphQlError> {
        let variables = recap_variables(login, year)?;

        info!("Fetching {} activity for {}", year, login.trim());

        let request = GraphQlRequest {
            query: RECAP_QUERY.to_string(),
            variables,
        };

        debug!("GraphQL variables: {}", request.variables);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .map_err(GraphQlError::RequestFailed)?;

        // Check HTTP status
        if !response.status().is_success() {
            return Err(GraphQlError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        let body: GraphQlResponse<RawSnapshotData> =
            response.json().map_err(GraphQlError::RequestFailed)?;

        into_data(body)
    }
}

/// Extract `data`, turning a non-empty `errors` array into an error
fn into_data(body: GraphQlResponse<RawSnapshotData>) -> Result<RawSnapshotData, GraphQlError> {
    if let Some(errors) = body.errors.filter(|errors| !errors.is_empty()) {
        return Err(map_graphql_errors(&errors));
    }

    body.data
        .ok_or_else(|| GraphQlError::InvalidResponse("Missing data field".to_string()))
}

fn map_graphql_errors(errors: &[GraphQlErrorEntry]) -> GraphQlError {
    let messages: Vec<String> = errors.iter().map(GraphQlErrorEntry::describe).collect();
    GraphQlError::QueryFailed(messages.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> GraphQlResponse<RawSnapshotData> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_into_data_ok() {
        let data = into_data(response(json!({ "data": { "user": null } }))).unwrap();
        assert!(data["user"].is_null());
    }

    #[test]
    fn test_into_data_errors() {
        let result = into_data(response(json!({
            "data": null,
            "errors": [
                { "type": "NOT_FOUND", "path": ["user"], "message": "Could not resolve" },
                { "message": "second" }
            ]
        })));

        match result {
            Err(GraphQlError::QueryFailed(msg)) => {
                assert_eq!(msg, "NOT_FOUND at user: Could not resolve; second");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_into_data_missing() {
        assert!(matches!(
            into_data(response(json!({}))),
            Err(GraphQlError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_empty_token_rejected() {
        assert!(matches!(
            GitHubClient::new("https://api.github.com/graphql", " "),
            Err(GraphQlError::InvalidInput(_))
        ));
    }
}
