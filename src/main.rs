use booking_action_group::handler::BookingAdapter;
use lambda_runtime::{Error, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Use Lambda runtime's built-in tracing subscriber for CloudWatch Logs
    lambda_runtime::tracing::init_default_subscriber();

    let adapter = BookingAdapter::from_env();
    let adapter = &adapter;
    lambda_runtime::run(service_fn(move |event| adapter.handle(event))).await
}
