//! FILENAME: app/server/src/api_types.rs
// PURPOSE: Request payload accepted by the HTTP endpoint.

use serde::Deserialize;

/// Body of `POST /`. Fields other than `expression` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CalcRequest {
    pub expression: String,
}
