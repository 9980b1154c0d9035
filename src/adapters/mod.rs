// Adapters layer: concrete implementations of the domain ports (http, in-memory).

pub mod contact;
pub mod visits;

use serde::Deserialize;

/// Error body shared by the site's API routes: `{ "message": .. }` or `{ "error": .. }`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiMessage {
    pub message: Option<String>,
    pub error: Option<serde_json::Value>,
}

impl ApiMessage {
    pub(crate) fn describe(&self, fallback: &str) -> String {
        match (&self.message, &self.error) {
            (Some(message), _) => message.clone(),
            (None, Some(serde_json::Value::String(error))) => error.clone(),
            (None, Some(error)) => error.to_string(),
            (None, None) => fallback.to_string(),
        }
    }
}
