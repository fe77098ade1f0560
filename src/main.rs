use clap::Parser;

use lunchweb::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    lunchweb::start_server(config).await?;

    Ok(())
}
