use std::sync::Arc;

use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, Error as LambdaError, LambdaEvent};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use relay_lambda::handler::handle_relay;
use relay_lambda::relay::Relay;
use relay_lambda::types::environment::RelayEnvironment;

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    // JSON logs for CloudWatch ingestion
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let environment = RelayEnvironment::from_env()?;
    info!("Starting relay for queue {}", environment.queue_url);

    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let sqs_client = Arc::new(aws_sdk_sqs::Client::new(&config));
    let sns_client = Arc::new(aws_sdk_sns::Client::new(&config));
    let relay = Relay::new(sqs_client, sns_client, &environment);

    let relay_ref = &relay;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_relay(relay_ref, event).await
    }))
    .await
}
