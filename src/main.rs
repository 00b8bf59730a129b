use anyhow::Result;
use nightjar::ai::{Completion, OpenRouterClient};
use nightjar::config::Config;
use nightjar::dialogue::Dialogue;
use nightjar::platform;
use nightjar::prefs::PreferenceStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Fail fast: no credentials, no startup.
    let config = Config::from_env()?;

    let prefs = Arc::new(PreferenceStore::new());
    let backend = Arc::new(OpenRouterClient::new(config.openrouter_api_key));
    let dialogue = Arc::new(Dialogue::new(prefs, Completion::new(backend)));

    platform::run(config.bot_token, dialogue).await
}
