//! Identity types stored client-side.

use serde::{Deserialize, Serialize};

/// The authenticated user, as received from the API and persisted in
/// durable storage. The `id` is the server-side UUID kept as a string —
/// this record crosses the storage boundary as JSON and never needs to be
/// anything richer on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
}
