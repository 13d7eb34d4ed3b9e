use std::sync::Arc;
use std::time::Duration;

use bloodlink_seeder::{
    auth::{ServiceAccountTokens, StaticTokens, TokenSource},
    config::Config,
    credentials::ServiceAccount,
    rtdb::RtdbClient,
    seeder::Seeder,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Config::from_env()?;
    log::info!("Seeding realtime database at {}", config.database_url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .build()?;

    let tokens: Arc<dyn TokenSource> = match &config.access_token {
        Some(token) => {
            log::info!("Using pre-issued access token");
            Arc::new(StaticTokens::new(token.clone()))
        }
        None => {
            let account = ServiceAccount::from_file(&config.credentials_path)?;
            log::info!("Authenticating as {}", account.client_email);
            Arc::new(ServiceAccountTokens::new(account, client.clone()))
        }
    };

    let rtdb = RtdbClient::new(&config.database_url, client, tokens)?;
    Seeder::new(rtdb).seed_all().await?;

    Ok(())
}
