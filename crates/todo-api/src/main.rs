use anyhow::Result;

use todo_api::{telemetry, ApiConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Get configuration
    let config = ApiConfig::load()?;

    // Initialize tracing
    telemetry::init_tracing(&config.log_filter, config.log_format);

    todo_api::serve(&config).await
}
