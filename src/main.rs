use std::{net::TcpListener, time::Duration};

use env_logger::Env;
use fundscope::{configuration::get_configuration, services::OpenaiClient, startup::run};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    // One shared client for all scrape fetches, 10s cap per request
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to build http client");

    let openai_client = match configuration.api_keys.openai.is_empty() {
        true => OpenaiClient::default(),
        false => OpenaiClient::new(configuration.api_keys.openai),
    };

    log::info!("Listening on {}", listener.local_addr()?);

    run(listener, http_client, openai_client)?.await
}
