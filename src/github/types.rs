//! Types for GraphQL communication with the GitHub API.
//!
//! Based on the GraphQL-over-HTTP response shape: a `data` member, an
//! optional `errors` array, or both when the query partially failed.

use serde::{Deserialize, Serialize};

/// GraphQL request body
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: serde_json::Value,
}

/// GraphQL response body
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlErrorEntry>>,
}

/// One entry of the `errors` array
#[derive(Debug, Deserialize)]
pub struct GraphQlErrorEntry {
    pub message: String,
    /// GitHub extension, e.g. "NOT_FOUND" or "RATE_LIMITED"
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub path: Option<Vec<serde_json::Value>>,
}

impl GraphQlErrorEntry {
    /// "NOT_FOUND at user: Could not resolve..."
    pub fn describe(&self) -> String {
        let mut out = String::new();
        if let Some(kind) = &self.kind {
            out.push_str(kind);
            out.push(' ');
        }
        if let Some(path) = &self.path {
            let joined: Vec<String> = path
                .iter()
                .map(|p| match p {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            out.push_str(&format!("at {}: ", joined.join(".")));
        }
        out.push_str(&self.message);
        out
    }
}

/// Raw `data` object (opaque here, parsed by the snapshot parser)
///
/// Kept as `serde_json::Value` so the parser can report a missing user
/// separately from a malformed response.
pub type RawSnapshotData = serde_json::Value;
