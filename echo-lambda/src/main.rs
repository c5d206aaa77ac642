//! Trigger-logging function
//!
//! Logs the raw invocation payload and echoes it back unchanged. The JSON
//! log lines land in CloudWatch via the platform's stdout capture.

use lambda_runtime::{run, service_fn, Error as LambdaError, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// HTTP-shaped echo response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EchoResponse {
    status_code: u16,
    body: String,
}

async fn handler(event: LambdaEvent<Value>) -> Result<EchoResponse, LambdaError> {
    let payload = serde_json::to_string(&event.payload)?;
    info!("{}", payload);

    Ok(EchoResponse {
        status_code: 200,
        body: payload,
    })
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    run(service_fn(handler)).await
}
