//! Lambda handler for the relay
//!
//! Extracts a human-readable trigger description from the invocation event,
//! runs one drain, and returns an HTTP-shaped response carrying the
//! description and every forwarded message body.

use std::collections::HashMap;

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::relay::Relay;

/// Static marker carried in every response body, bumped when verifying that
/// a deployment actually shipped new code
const CHANGELOG: &str = "relay handler 0.1.0";

/// HTTP-shaped handler response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    /// HTTP status code
    pub status_code: u16,
    /// JSON-encoded [`RelaySummary`]
    pub body: String,
    /// Response headers
    pub headers: HashMap<String, String>,
}

/// Summary of one drain run, JSON-encoded into the response body
#[derive(Debug, Serialize, Deserialize)]
pub struct RelaySummary {
    /// Fixed success message
    pub message: String,
    /// Trigger description, `Request Resource: {source}`
    pub request_source: String,
    /// Every message body forwarded during this invocation
    pub sqs_messages: Vec<Value>,
    /// Deploy-verification marker
    pub changelog: String,
}

impl HandlerResponse {
    /// Builds the 200 response for a completed drain
    ///
    /// # Errors
    ///
    /// Returns an error if the summary cannot be JSON-encoded
    pub fn success(
        request_source: String,
        sqs_messages: Vec<Value>,
    ) -> Result<Self, serde_json::Error> {
        let summary = RelaySummary {
            message: "Successful response".to_string(),
            request_source,
            sqs_messages,
            changelog: CHANGELOG.to_string(),
        };

        Ok(Self {
            status_code: 200,
            body: serde_json::to_string(&summary)?,
            headers: HashMap::from([(
                "Access-Control-Allow-Origin".to_string(),
                "*".to_string(),
            )]),
        })
    }
}

/// Extracts the trigger description from an invocation event
///
/// Scheduled events carry `detail-type`, API gateway events carry
/// `resource`; anything else is reported as `null`.
#[must_use]
pub fn request_source(event: &Value) -> String {
    let source = event
        .get("detail-type")
        .or_else(|| event.get("resource"));

    let source = match source {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "null".to_string(),
    };

    format!("Request Resource: {source}")
}

/// Lambda entry point: one invocation, one full drain
///
/// # Errors
///
/// Propagates any drain failure to the runtime; the platform's invocation
/// retry and the queue's redelivery are the only recovery mechanisms.
pub async fn handle_relay(
    relay: &Relay,
    event: LambdaEvent<Value>,
) -> Result<HandlerResponse, LambdaError> {
    let request_source = request_source(&event.payload);
    info!("{}", request_source);

    let forwarded = relay.drain().await?;

    Ok(HandlerResponse::success(request_source, forwarded)?)
}
