use serde::{Deserialize, Serialize};

pub const DISCLAIMER: &str = "This key is only for demo purposes";
pub const UPDATE_MESSAGE: &str = "API key updated successfully";

/// Body of `POST /key`. `api_key` must be present; emptiness is checked by the handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyRequest {
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyResponse {
    pub api_key: String,
    pub disclaimer: String,
}

impl KeyResponse {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub message: String,
    pub disclaimer: String,
}

impl Default for UpdateResponse {
    fn default() -> Self {
        Self {
            message: UPDATE_MESSAGE.to_string(),
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
