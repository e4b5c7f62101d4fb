//! GitHub GraphQL client.
//!
//! Issues the annual recap query and returns the raw `data` object.

pub mod client;
pub mod query;
pub mod types;

pub use client::GitHubClient;
pub use query::{recap_variables, RECAP_QUERY};
pub use types::RawSnapshotData;
