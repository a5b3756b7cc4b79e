mod cli;
mod scrape;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // COHERE_API_KEY may come from a local .env file
    dotenvy::dotenv().ok();
    env_logger::init();

    cli::run().await?;

    Ok(())
}
